use anyhow::Result;
use clap::Args;

use soactiv_membership::{aggregate, EnquiryPipeline, StaffSummary};

use crate::cli::Context;
use crate::formatting::{Dashboard, PrintFormatted};

#[derive(Args, Debug)]
pub struct ShowDashboard {}

impl ShowDashboard {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let roster = &ctx.roster;
        Dashboard {
            reference: ctx.today,
            memberships: aggregate(&roster.clients, ctx.today),
            staff: StaffSummary::from_staff(&roster.staff),
            enquiries: EnquiryPipeline::from_enquiries(&roster.enquiries, ctx.today),
        }
        .print_formatted();
        Ok(())
    }
}
