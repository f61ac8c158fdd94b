use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use soactiv_domain::{Client, Enquiry, Staff};

use crate::results::RosterError;

/// Clients, staff and enquiries of a club, imported from a JSON roster.
/// The roster is read only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub enquiries: Vec<Enquiry>,
}

impl Roster {
    /// Read and validate a roster file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading roster");
        let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json(&content)?;
        info!(
            clients = roster.clients.len(),
            staff = roster.staff.len(),
            enquiries = roster.enquiries.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Parse and validate a roster document. Malformed dates
    /// are rejected while parsing.
    pub fn from_json(content: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(content)?;
        roster.validate()?;
        Ok(roster)
    }

    fn validate(&self) -> Result<(), RosterError> {
        for client in &self.clients {
            if let Some((start, end)) = client.membership_period() {
                if end < start {
                    return Err(RosterError::InvalidPeriod {
                        id: client.id.clone(),
                        start,
                        end,
                    });
                }
            }
        }
        unique_ids("client", self.clients.iter().map(|c| c.id.as_str()))?;
        unique_ids("staff", self.staff.iter().map(|s| s.id.as_str()))?;
        unique_ids("enquiry", self.enquiries.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }
}

fn unique_ids<'a, I>(kind: &'static str, ids: I) -> Result<(), RosterError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RosterError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use chrono::NaiveDate;

    use super::*;

    pub const ROSTER: &str = r#"{
        "clients": [
            {
                "id": "1",
                "full_name": "John Doe",
                "gender": "Male",
                "phone": "+1234567890",
                "email": "john@example.com",
                "start_date": "2024-01-01",
                "end_date": "2024-12-31",
                "sales_rep": "Jane Smith",
                "trainer": "Mike Wilson"
            },
            {
                "id": "2",
                "full_name": "Jane Smith",
                "gender": "Female",
                "phone": "+1234567891",
                "email": "jane@example.com",
                "start_date": "2024-02-01",
                "end_date": "2024-03-15"
            },
            {
                "id": "3",
                "full_name": "Mike Wilson",
                "phone": "+1234567892",
                "email": "mike@example.com"
            }
        ],
        "staff": [
            {
                "id": "1",
                "name": "John Doe",
                "designation": "Senior Trainer",
                "phone": "+1234567890",
                "email": "john@soactiv.com",
                "joining_date": "2023-06-15",
                "salary": 45000,
                "status": "active"
            },
            {
                "id": "2",
                "name": "Jane Smith",
                "designation": "Receptionist",
                "phone": "+1234567891",
                "email": "jane@soactiv.com",
                "joining_date": "2023-08-20",
                "salary": 32000,
                "status": "inactive"
            }
        ],
        "enquiries": [
            {
                "id": "1",
                "name": "Alex Johnson",
                "contact": "+1234567890",
                "email": "alex@example.com",
                "status": "new",
                "assigned_staff": "John Doe",
                "date": "2024-02-15",
                "follow_up_date": "2024-02-18",
                "source": "Website"
            }
        ]
    }"#;

    pub fn roster() -> Roster {
        Roster::from_json(ROSTER).unwrap()
    }

    #[test]
    fn test_roster_from_json() {
        let roster = roster();
        assert_eq!(roster.clients.len(), 3);
        assert_eq!(roster.staff.len(), 2);
        assert_eq!(roster.enquiries.len(), 1);
        assert_eq!(
            roster.clients[0].end_date,
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert_eq!(roster.clients[2].membership_period(), None);
    }

    #[test]
    fn test_roster_open() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let roster = Roster::open(file.path()).unwrap();
        assert_eq!(roster.clients.len(), 3);
    }

    #[test]
    fn test_demo_roster() {
        let roster = Roster::from_json(include_str!("../../../demos/roster.json")).unwrap();
        assert_eq!(roster.clients.len(), 4);
        assert_eq!(roster.staff.len(), 3);
        assert_eq!(roster.enquiries.len(), 3);
    }

    #[test]
    fn test_roster_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::open(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RosterError::Read { .. }));
    }

    #[test]
    fn test_roster_sections_optional() {
        let roster = Roster::from_json("{}").unwrap();
        assert!(roster.clients.is_empty());
        assert!(roster.staff.is_empty());
        assert!(roster.enquiries.is_empty());
    }

    #[test]
    fn test_roster_rejects_malformed_date() {
        let err = Roster::from_json(
            r#"{"clients": [{
                "id": "1",
                "full_name": "John Doe",
                "phone": "",
                "email": "",
                "start_date": "2024-01-01",
                "end_date": "2024-13-01"
            }]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_roster_rejects_inverted_period() {
        let err = Roster::from_json(
            r#"{"clients": [{
                "id": "9",
                "full_name": "John Doe",
                "phone": "",
                "email": "",
                "start_date": "2024-05-01",
                "end_date": "2024-04-30"
            }]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Client 9 membership ends 2024-04-30 before it starts 2024-05-01"
        );
    }

    #[test]
    fn test_roster_rejects_duplicate_ids() {
        let err = Roster::from_json(
            r#"{"clients": [
                {"id": "1", "full_name": "A", "phone": "", "email": ""},
                {"id": "1", "full_name": "B", "phone": "", "email": ""}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RosterError::DuplicateId { kind: "client", .. }
        ));
    }
}
