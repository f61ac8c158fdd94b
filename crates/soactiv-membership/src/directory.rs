use soactiv_domain::{Enquiry, EnquiryStatus, Staff, StaffStatus};

use crate::search::SearchQuery;

/// Staff whose name, phone, email or designation contains `query`,
/// whose designation contains `designation` and whose status equals
/// `status`. Empty strings and `None` match all.
pub fn filter_staff<'a>(
    staff: &'a [Staff],
    query: &str,
    designation: &str,
    status: Option<StaffStatus>,
) -> Vec<&'a Staff> {
    let query = SearchQuery::new(query);
    let designation = SearchQuery::new(designation);
    staff
        .iter()
        .filter(|s| {
            query.matches_any([
                s.name.as_str(),
                s.phone.as_str(),
                s.email.as_str(),
                s.designation.as_str(),
            ])
        })
        .filter(|s| designation.matches(&s.designation))
        .filter(|s| status.map_or(true, |status| s.status == status))
        .collect()
}

/// Enquiries matching `query` on name, contact or email, in the given
/// pipeline stage and assigned to exactly `assigned_staff`.
pub fn filter_enquiries<'a>(
    enquiries: &'a [Enquiry],
    query: &str,
    status: Option<EnquiryStatus>,
    assigned_staff: &str,
) -> Vec<&'a Enquiry> {
    let query = SearchQuery::new(query);
    enquiries
        .iter()
        .filter(|e| {
            let email = e.email.as_deref();
            query.matches_any(
                [Some(e.name.as_str()), Some(e.contact.as_str()), email]
                    .into_iter()
                    .flatten(),
            )
        })
        .filter(|e| status.map_or(true, |status| e.status == status))
        .filter(|e| assigned_staff.is_empty() || e.assigned_staff == assigned_staff)
        .collect()
}
