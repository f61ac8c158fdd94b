use chrono::NaiveDate;

use soactiv_domain::{Client, MembershipStatus};

use crate::datetime::DaysBetween;

/// Memberships ending within this many days are expiring.
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Derived lifecycle state of a membership at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: MembershipStatus,
    /// `None` while the membership is pending.
    pub remaining_days: Option<i64>,
}

/// Classify a membership interval against a reference date.
///
/// A membership lacking either date has not been activated yet and is
/// `Pending` without a day count. Otherwise the remaining days are
/// counted from `reference` to `end_date`: zero or less is expired,
/// up to [`EXPIRY_WINDOW_DAYS`] is expiring, anything beyond is active.
pub fn classify(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    reference: NaiveDate,
) -> Classification {
    let end = match (start_date, end_date) {
        (Some(_), Some(end)) => end,
        _ => {
            return Classification {
                status: MembershipStatus::Pending,
                remaining_days: None,
            }
        }
    };

    let remaining = reference.days_until(&end);
    let status = if remaining <= 0 {
        MembershipStatus::Expired
    } else if remaining <= EXPIRY_WINDOW_DAYS {
        MembershipStatus::Expiring
    } else {
        MembershipStatus::Active
    };

    Classification {
        status,
        remaining_days: Some(remaining),
    }
}

pub trait Classify {
    fn classify(&self, reference: NaiveDate) -> Classification;

    fn status(&self, reference: NaiveDate) -> MembershipStatus {
        self.classify(reference).status
    }
}

impl Classify for Client {
    fn classify(&self, reference: NaiveDate) -> Classification {
        classify(self.start_date, self.end_date, reference)
    }
}
