use anyhow::Result;
use clap::{Args, Subcommand};

use soactiv_domain::{Client, ClientFilter, MembershipStatus, Query, Retrieve};
use soactiv_membership::{aggregate, Classify};

use crate::cli::Context;
use crate::formatting::{ClientRows, MembershipAlerts, PrintFormatted};

#[derive(Subcommand, Debug)]
pub enum Clients {
    /// Show a client
    #[clap(name = "show")]
    Show(ShowClient),
    /// List clients
    #[clap(name = "list")]
    List(ListClients),
    /// Memberships expiring soon or already expired
    #[clap(name = "alerts")]
    Alerts(ShowAlerts),
}

impl Clients {
    pub fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Clients::Show(cmd) => cmd.run(ctx),
            Clients::List(cmd) => cmd.run(ctx),
            Clients::Alerts(cmd) => cmd.run(ctx),
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowClient {
    #[clap(short, long)]
    pub id: String,
}

impl ShowClient {
    /// Run the command and show a client
    pub fn run(self, ctx: &Context) -> Result<()> {
        let client: Client = ctx.roster.retrieve(&self.id)?;
        let classification = client.classify(ctx.today);
        println!();
        (&client, classification).print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListClients {
    /// Match name, phone or email
    #[clap(short, long)]
    pub search: Option<String>,
    /// active, expiring, expired or pending
    #[clap(long)]
    pub status: Option<MembershipStatus>,
}

impl ListClients {
    /// Run the command and list clients
    pub fn run(self, ctx: &Context) -> Result<()> {
        let filter = ClientFilter {
            search: self.search,
            status: self.status,
            at: Some(ctx.today),
            ..Default::default()
        };
        let clients: Vec<Client> = ctx.roster.query(&filter)?;
        tracing::debug!(?filter, matched = clients.len(), "filtered clients");

        println!("{} clients.", clients.len());
        ClientRows {
            clients: &clients,
            reference: ctx.today,
        }
        .print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowAlerts {}

impl ShowAlerts {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let summary = aggregate(&ctx.roster.clients, ctx.today);
        MembershipAlerts {
            summary: &summary,
            reference: ctx.today,
        }
        .print_formatted();
        Ok(())
    }
}
