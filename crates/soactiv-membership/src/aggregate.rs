use chrono::NaiveDate;

use soactiv_domain::{Client, MembershipStatus};

use crate::search::SearchQuery;
use crate::status::Classify;

/// Membership counts per status bucket at a reference date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipSummary<'a> {
    pub active: usize,
    pub expiring: usize,
    pub expired: usize,
    /// Not part of the three buckets above.
    pub pending: usize,
    pub expiring_list: Vec<&'a Client>,
    pub expired_list: Vec<&'a Client>,
}

impl MembershipSummary<'_> {
    /// Number of classified memberships, pending excluded.
    pub fn total(&self) -> usize {
        self.active + self.expiring + self.expired
    }
}

/// Classify every client and count them per bucket. The expiring and
/// expired lists keep the input order.
pub fn aggregate(clients: &[Client], reference: NaiveDate) -> MembershipSummary<'_> {
    let mut summary = MembershipSummary::default();
    for client in clients {
        match client.status(reference) {
            MembershipStatus::Active => summary.active += 1,
            MembershipStatus::Expiring => {
                summary.expiring += 1;
                summary.expiring_list.push(client);
            }
            MembershipStatus::Expired => {
                summary.expired += 1;
                summary.expired_list.push(client);
            }
            MembershipStatus::Pending => summary.pending += 1,
        }
    }
    summary
}

/// Clients whose name, phone or email contains `query` and whose status
/// at `reference` equals `status`. Empty query and `None` status match all.
pub fn filter<'a>(
    clients: &'a [Client],
    query: &str,
    status: Option<MembershipStatus>,
    reference: NaiveDate,
) -> Vec<&'a Client> {
    let query = SearchQuery::new(query);
    clients
        .iter()
        .filter(|c| {
            query.matches_any([
                c.full_name.as_str(),
                c.phone.as_str(),
                c.email.as_str(),
            ])
        })
        .filter(|c| status.map_or(true, |s| c.status(reference) == s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn client(
        id: &str,
        name: &str,
        phone: &str,
        email: &str,
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Client {
        Client {
            id: id.to_string(),
            full_name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            start_date: period.map(|(s, _)| s),
            end_date: period.map(|(_, e)| e),
            ..Default::default()
        }
    }

    fn roster() -> Vec<Client> {
        vec![
            client(
                "1",
                "John Doe",
                "+1234567890",
                "john@example.com",
                Some((date(2024, 1, 1), date(2024, 12, 31))),
            ),
            client(
                "2",
                "Jane Smith",
                "+1234567891",
                "jane@example.com",
                Some((date(2024, 2, 1), date(2024, 3, 15))),
            ),
            client(
                "3",
                "Mike Wilson",
                "+1234567892",
                "mike@example.com",
                Some((date(2023, 12, 1), date(2024, 2, 10))),
            ),
            client("4", "Sarah Johnson", "+1234567893", "sarah@example.com", None),
            client(
                "5",
                "Alex Janeway",
                "+1234567894",
                "alex@example.com",
                Some((date(2023, 1, 1), date(2024, 1, 31))),
            ),
        ]
    }

    fn ids(clients: &[&Client]) -> Vec<String> {
        clients.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_aggregate_buckets() {
        let clients = roster();
        let summary = aggregate(&clients, date(2024, 2, 15));

        assert_eq!(summary.active, 1);
        assert_eq!(summary.expiring, 1);
        assert_eq!(summary.expired, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(ids(&summary.expiring_list), vec!["2"]);
        // Input order is kept
        assert_eq!(ids(&summary.expired_list), vec!["3", "5"]);
        assert_eq!(summary.total(), clients.len() - summary.pending);
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = aggregate(&[], date(2024, 2, 15));
        assert_eq!(summary, MembershipSummary::default());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_aggregate_follows_reference_date() {
        let clients = roster();
        let summary = aggregate(&clients, date(2024, 1, 15));
        assert_eq!(summary.active, 2);
        assert_eq!(summary.expiring, 2);
        assert_eq!(summary.expired, 0);
        assert_eq!(ids(&summary.expiring_list), vec!["3", "5"]);
    }

    #[test]
    fn test_filter_by_query() {
        let clients = roster();
        let reference = date(2024, 2, 15);

        let found = filter(&clients, "jane", None, reference);
        assert_eq!(ids(&found), vec!["2", "5"]);

        let found = filter(&clients, "JOHN@", None, reference);
        assert_eq!(ids(&found), vec!["1"]);

        let found = filter(&clients, "7893", None, reference);
        assert_eq!(ids(&found), vec!["4"]);

        let found = filter(&clients, "nobody", None, reference);
        assert!(found.is_empty());
    }

    #[test]
    fn test_filter_empty_matches_all() {
        let clients = roster();
        let found = filter(&clients, "", None, date(2024, 2, 15));
        assert_eq!(found.len(), clients.len());
    }

    #[test]
    fn test_filter_by_status() {
        let clients = roster();
        let reference = date(2024, 2, 15);

        let found = filter(&clients, "", Some(MembershipStatus::Expired), reference);
        assert_eq!(ids(&found), vec!["3", "5"]);

        let found = filter(&clients, "", Some(MembershipStatus::Pending), reference);
        assert_eq!(ids(&found), vec!["4"]);

        let found = filter(&clients, "jane", Some(MembershipStatus::Expired), reference);
        assert_eq!(ids(&found), vec!["5"]);

        let found = filter(&clients, "jane", Some(MembershipStatus::Active), reference);
        assert!(found.is_empty());
    }
}
