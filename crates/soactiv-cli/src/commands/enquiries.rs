use anyhow::Result;
use clap::{Args, Subcommand};

use soactiv_domain::{Enquiry, EnquiryFilter, EnquiryStatus, Query, Retrieve};

use crate::cli::Context;
use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Enquiries {
    /// Show an enquiry
    #[clap(name = "show")]
    Show(ShowEnquiry),
    /// List enquiries
    #[clap(name = "list")]
    List(ListEnquiries),
}

impl Enquiries {
    pub fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Enquiries::Show(cmd) => cmd.run(ctx),
            Enquiries::List(cmd) => cmd.run(ctx),
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowEnquiry {
    #[clap(short, long)]
    pub id: String,
}

impl ShowEnquiry {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let enquiry: Enquiry = ctx.roster.retrieve(&self.id)?;
        println!();
        enquiry.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListEnquiries {
    /// Match name, contact or email
    #[clap(short, long)]
    pub search: Option<String>,
    /// new, contacted, interested, converted or lost
    #[clap(long)]
    pub status: Option<EnquiryStatus>,
    /// Assigned staff member, exact name
    #[clap(long)]
    pub staff: Option<String>,
}

impl ListEnquiries {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let filter = EnquiryFilter {
            search: self.search,
            status: self.status,
            assigned_staff: self.staff,
            ..Default::default()
        };
        let enquiries: Vec<Enquiry> = ctx.roster.query(&filter)?;
        println!("{} enquiries.", enquiries.len());
        enquiries.print_formatted();
        Ok(())
    }
}
