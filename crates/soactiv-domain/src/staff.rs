use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::StaffStatus;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StaffFilter {
    pub id: Option<String>,
    /// Matches name, phone, email or designation
    pub search: Option<String>,
    pub designation: Option<String>,
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub phone: String,
    pub email: String,
    pub joining_date: NaiveDate,
    pub salary: f64,
    #[serde(default)]
    pub status: StaffStatus,
}
