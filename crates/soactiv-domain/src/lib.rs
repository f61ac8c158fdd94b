// Operations
mod operations;
pub use operations::*;

// Models
mod status;
pub use status::*;

mod clients;
pub use clients::*;

mod staff;
pub use staff::*;

mod enquiries;
pub use enquiries::*;
