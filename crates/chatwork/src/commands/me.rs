//! Me command - show your own profile.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::{Context, print_header, print_json};

/// Arguments for the me command.
#[derive(Args, Debug)]
pub struct MeArgs {}

/// Run the me command.
pub fn run(_args: MeArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let me = client.get_me()?;

    if ctx.json_output {
        return print_json(&me);
    }

    let dim = Style::new().dim();
    print_header(&me.name);
    println!("{} {}", dim.apply_to("Account ID: "), me.account_id);
    if !me.chatwork_id.is_empty() {
        println!("{} {}", dim.apply_to("Chatwork ID:"), me.chatwork_id);
    }
    if !me.organization_name.is_empty() {
        println!("{} {}", dim.apply_to("Organization:"), me.organization_name);
    }
    println!("{} {}", dim.apply_to("My chat:    "), me.room_id);

    Ok(())
}
