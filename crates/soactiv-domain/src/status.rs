use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} status '{value}'")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

/// Generates Display and FromStr for a lowercase status enum.
macro_rules! status_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ParseStatusError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Lifecycle of a client's membership, always derived
/// from the membership dates and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expiring,
    Expired,
    /// No membership dates assigned yet.
    Pending,
}

status_names!(MembershipStatus, "membership", {
    Active => "active",
    Expiring => "expiring",
    Expired => "expired",
    Pending => "pending",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

status_names!(StaffStatus, "staff", {
    Active => "active",
    Inactive => "inactive",
});

/// Sales pipeline stage of an enquiry, ordered along the pipeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Interested,
    Converted,
    Lost,
}

status_names!(EnquiryStatus, "enquiry", {
    New => "new",
    Contacted => "contacted",
    Interested => "interested",
    Converted => "converted",
    Lost => "lost",
});

impl EnquiryStatus {
    /// Converted and lost enquiries need no further follow-up.
    pub fn is_open(&self) -> bool {
        !matches!(self, EnquiryStatus::Converted | EnquiryStatus::Lost)
    }
}
