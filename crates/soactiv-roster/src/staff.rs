use anyhow::Result;

use soactiv_domain::{Query, Retrieve, Staff, StaffFilter};
use soactiv_membership::filter_staff;

use crate::{results::QueryError, Roster};

impl Query<Staff> for Roster {
    type Filter = StaffFilter;
    fn query(&self, filter: &Self::Filter) -> Result<Vec<Staff>> {
        let staff = filter_staff(
            &self.staff,
            filter.search.as_deref().unwrap_or_default(),
            filter.designation.as_deref().unwrap_or_default(),
            filter.status,
        )
        .into_iter()
        .filter(|s| filter.id.as_ref().map_or(true, |id| &s.id == id))
        .cloned()
        .collect();
        Ok(staff)
    }
}

impl Retrieve<Staff> for Roster {
    type Key = String;
    fn retrieve(&self, staff_id: &Self::Key) -> Result<Staff> {
        let filter = StaffFilter {
            id: Some(staff_id.clone()),
            ..Default::default()
        };
        let staff = self
            .query(&filter)?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(staff)
    }
}
