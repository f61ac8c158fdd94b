use anyhow::Result;

use soactiv_domain::{Client, ClientFilter, Query, Retrieve};
use soactiv_membership::{datetime, filter as filter_clients};

use crate::{results::QueryError, Roster};

impl Query<Client> for Roster {
    type Filter = ClientFilter;
    fn query(&self, filter: &Self::Filter) -> Result<Vec<Client>> {
        let at = filter.at.unwrap_or_else(datetime::today);
        let search = filter.search.as_deref().unwrap_or_default();
        let clients = filter_clients(&self.clients, search, filter.status, at)
            .into_iter()
            .filter(|c| filter.id.as_ref().map_or(true, |id| &c.id == id))
            .cloned()
            .collect();
        Ok(clients)
    }
}

impl Retrieve<Client> for Roster {
    type Key = String;
    fn retrieve(&self, client_id: &Self::Key) -> Result<Client> {
        let filter = ClientFilter {
            id: Some(client_id.clone()),
            ..Default::default()
        };
        let client = self
            .query(&filter)?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(client)
    }
}
