//! Messages command - read and post messages.

use anyhow::Result;
use chatwork_client::{MessagesQuery, SendMessage};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, format_time, print_header, print_json, print_success};

/// Arguments for the messages command.
#[derive(Args, Debug)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Subcommand, Debug)]
pub enum MessagesCommand {
    /// List messages not yet fetched with this token
    List {
        /// Room ID
        room_id: u64,

        /// Fetch the latest 100 messages, even if already read
        #[arg(short, long)]
        force: bool,
    },

    /// Post a message to a room
    Send {
        /// Room ID
        room_id: u64,

        /// Message body
        body: String,

        /// Keep the message unread for yourself
        #[arg(long)]
        self_unread: bool,
    },

    /// Post a note to your own chat
    Memo {
        /// Message body
        body: String,
    },
}

/// Run the messages command.
pub fn run(args: MessagesArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        MessagesCommand::List { room_id, force } => {
            let query = MessagesQuery {
                force: force.then_some(true),
            };
            let messages = client.get_messages_with_query(room_id, query)?;
            if ctx.json_output {
                return print_json(&messages);
            }

            let dim = Style::new().dim();
            print_header(&format!("Messages in {}", room_id));
            if messages.is_empty() {
                println!("{}", dim.apply_to("No new messages"));
            }
            for message in &messages {
                println!(
                    "{} {}",
                    dim.apply_to(format_time(message.send_time)),
                    Style::new().cyan().apply_to(&message.account.name)
                );
                println!("{}", message.body);
                println!();
            }
        }
        MessagesCommand::Send {
            room_id,
            body,
            self_unread,
        } => {
            let mut params = SendMessage::new(room_id, body);
            if self_unread {
                params = params.with_self_unread(true);
            }
            let response = client.send_message(params)?;
            if ctx.json_output {
                return print_json(&response);
            }
            print_success(&format!("Message {} posted", response.message_id));
        }
        MessagesCommand::Memo { body } => {
            let response = client.send_message_to_my_chat(body)?;
            if ctx.json_output {
                return print_json(&response);
            }
            print_success(&format!("Memo {} posted to my chat", response.message_id));
        }
    }

    Ok(())
}
