use anyhow::Result;
use clap::{Args, Subcommand};

use soactiv_domain::{Query, Retrieve, Staff, StaffFilter, StaffStatus};

use crate::cli::Context;
use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum StaffMembers {
    /// Show a staff member
    #[clap(name = "show")]
    Show(ShowStaff),
    /// List staff
    #[clap(name = "list")]
    List(ListStaff),
}

impl StaffMembers {
    pub fn run(self, ctx: &Context) -> Result<()> {
        match self {
            StaffMembers::Show(cmd) => cmd.run(ctx),
            StaffMembers::List(cmd) => cmd.run(ctx),
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowStaff {
    #[clap(short, long)]
    pub id: String,
}

impl ShowStaff {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let staff: Staff = ctx.roster.retrieve(&self.id)?;
        println!();
        staff.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListStaff {
    /// Match name, phone, email or designation
    #[clap(short, long)]
    pub search: Option<String>,
    #[clap(short, long)]
    pub designation: Option<String>,
    /// active or inactive
    #[clap(long)]
    pub status: Option<StaffStatus>,
}

impl ListStaff {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let filter = StaffFilter {
            search: self.search,
            designation: self.designation,
            status: self.status,
            ..Default::default()
        };
        let staff: Vec<Staff> = ctx.roster.query(&filter)?;
        println!("{} staff.", staff.len());
        staff.print_formatted();
        Ok(())
    }
}
