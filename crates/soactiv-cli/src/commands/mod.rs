mod clients;
pub use clients::*;

mod staff;
pub use staff::*;

mod enquiries;
pub use enquiries::*;

mod dashboard;
pub use dashboard::*;
