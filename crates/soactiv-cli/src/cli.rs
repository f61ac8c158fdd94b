use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use soactiv_roster::Roster;

use crate::commands::{Clients, Enquiries, ShowDashboard, StaffMembers};

#[derive(Parser, Debug)]
#[clap(name = "soactiv", version=env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Roster file with clients, staff and enquiries
    #[clap(long, env = "SOACTIV_ROSTER", default_value = "roster.json")]
    pub roster: PathBuf,

    /// Reference date for membership status, defaults to today
    #[clap(long, env = "SOACTIV_TODAY")]
    pub today: Option<NaiveDate>,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Club members and their memberships
    #[clap(subcommand)]
    Clients(Clients),
    /// Staff directory
    #[clap(subcommand)]
    Staff(StaffMembers),
    /// Sales enquiries
    #[clap(subcommand)]
    Enquiries(Enquiries),
    /// Overview of memberships, staff and enquiries
    #[clap(name = "dashboard")]
    Dashboard(ShowDashboard),
}

/// Everything a command needs: the roster and the day it is looked at.
pub struct Context {
    pub roster: Roster,
    pub today: NaiveDate,
}
