use anyhow::Result;

use soactiv_domain::{Enquiry, EnquiryFilter, Query, Retrieve};
use soactiv_membership::filter_enquiries;

use crate::{results::QueryError, Roster};

impl Query<Enquiry> for Roster {
    type Filter = EnquiryFilter;
    fn query(&self, filter: &Self::Filter) -> Result<Vec<Enquiry>> {
        let enquiries = filter_enquiries(
            &self.enquiries,
            filter.search.as_deref().unwrap_or_default(),
            filter.status,
            filter.assigned_staff.as_deref().unwrap_or_default(),
        )
        .into_iter()
        .filter(|e| filter.id.as_ref().map_or(true, |id| &e.id == id))
        .cloned()
        .collect();
        Ok(enquiries)
    }
}

impl Retrieve<Enquiry> for Roster {
    type Key = String;
    fn retrieve(&self, enquiry_id: &Self::Key) -> Result<Enquiry> {
        let filter = EnquiryFilter {
            id: Some(enquiry_id.clone()),
            ..Default::default()
        };
        let enquiry = self
            .query(&filter)?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(enquiry)
    }
}
