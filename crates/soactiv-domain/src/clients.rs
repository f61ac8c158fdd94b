use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MembershipStatus;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClientFilter {
    pub id: Option<String>,
    /// Matches name, phone or email
    pub search: Option<String>,
    pub status: Option<MembershipStatus>,
    /// Reference date for `status`, today if unset
    pub at: Option<NaiveDate>,
}

/// A club member. Membership status and remaining days are
/// not stored here, they depend on the day they are looked at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub gender: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub sales_rep: String,
    #[serde(default)]
    pub member_manager: String,
    #[serde(default)]
    pub trainer: Option<String>,
    #[serde(default)]
    pub attendance_id: String,
    #[serde(default)]
    pub club_id: String,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub notifications: Notifications,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub relationship: String,
}

/// Channels a client agreed to be notified on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub sms: bool,
    pub email: bool,
    pub push: bool,
    pub whatsapp: bool,
}

impl Notifications {
    pub fn channels(&self) -> Vec<&'static str> {
        [
            (self.sms, "sms"),
            (self.email, "email"),
            (self.push, "push"),
            (self.whatsapp, "whatsapp"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

impl Client {
    /// Both membership dates, if the membership has been activated.
    pub fn membership_period(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
