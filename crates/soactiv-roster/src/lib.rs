pub mod roster;
pub use roster::Roster;

pub mod results;
pub use results::{QueryError, RosterError};

pub mod clients;
pub mod staff;
pub mod enquiries;
