use chrono::NaiveDate;

/// The current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Signed number of whole days from `a` to `b`.
/// Negative when `b` lies before `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Count the days between two dates.
pub trait DaysBetween {
    fn days_until(&self, other: &Self) -> i64;
}

impl DaysBetween for NaiveDate {
    fn days_until(&self, other: &Self) -> i64 {
        days_between(*self, *other)
    }
}
