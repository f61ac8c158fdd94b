use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::EnquiryStatus;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EnquiryFilter {
    pub id: Option<String>,
    /// Matches name, contact or email
    pub search: Option<String>,
    pub status: Option<EnquiryStatus>,
    pub assigned_staff: Option<String>,
}

/// A sales lead, tracked until it converts or is lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: EnquiryStatus,
    pub assigned_staff: String,
    pub date: NaiveDate,
    pub follow_up_date: NaiveDate,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub comments: String,
}
