pub mod datetime;
pub mod status;
pub mod aggregate;
pub mod search;
pub mod directory;
pub mod reports;

pub use datetime::{days_between, today, DaysBetween};
pub use status::{classify, Classification, Classify, EXPIRY_WINDOW_DAYS};
pub use aggregate::{aggregate, filter, MembershipSummary};
pub use directory::{filter_enquiries, filter_staff};
pub use reports::{EnquiryPipeline, StaffSummary};
