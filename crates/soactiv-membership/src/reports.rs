use std::collections::BTreeMap;

use chrono::NaiveDate;

use soactiv_domain::{Enquiry, EnquiryStatus, Staff, StaffStatus};

use crate::search::SearchQuery;

/// Headcount and payroll overview of the staff.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffSummary {
    pub total: usize,
    pub active: usize,
    pub trainers: usize,
    pub payroll: f64,
}

impl StaffSummary {
    pub fn from_staff(staff: &[Staff]) -> Self {
        let trainer = SearchQuery::new("trainer");
        staff.iter().fold(Self::default(), |mut summary, s| {
            summary.total += 1;
            if s.status == StaffStatus::Active {
                summary.active += 1;
            }
            if trainer.matches(&s.designation) {
                summary.trainers += 1;
            }
            summary.payroll += s.salary;
            summary
        })
    }
}

/// Enquiries per pipeline stage, with the open ones
/// that are due for a follow-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnquiryPipeline<'a> {
    pub by_status: BTreeMap<EnquiryStatus, usize>,
    pub follow_ups_due: Vec<&'a Enquiry>,
}

impl<'a> EnquiryPipeline<'a> {
    pub fn from_enquiries(enquiries: &'a [Enquiry], reference: NaiveDate) -> Self {
        let mut by_status: BTreeMap<EnquiryStatus, usize> =
            EnquiryStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut follow_ups_due = Vec::new();

        for enquiry in enquiries {
            *by_status.entry(enquiry.status).or_default() += 1;
            if enquiry.status.is_open() && enquiry.follow_up_date <= reference {
                follow_ups_due.push(enquiry);
            }
        }

        Self {
            by_status,
            follow_ups_due,
        }
    }

    pub fn count(&self, status: EnquiryStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
