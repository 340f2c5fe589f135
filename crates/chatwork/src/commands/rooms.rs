//! Rooms command - list, inspect and manage rooms.

use anyhow::{Result, bail};
use chatwork_client::{ChangeRoomInfo, DeleteRoom, Room, RoomRef, RoomType, RoomUpdate};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, format_time, print_header, print_json, print_success};

/// Arguments for the rooms command.
#[derive(Args, Debug)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: Option<RoomsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum RoomsCommand {
    /// List your rooms (default)
    List,

    /// Show a room's details
    Show {
        /// Room ID
        room_id: u64,
    },

    /// Change a room's name, description or icon
    Update {
        /// Room ID
        room_id: u64,

        /// New room name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Preset icon (group, check, document, meeting, event, project, business, ...)
        #[arg(long)]
        icon_preset: Option<String>,
    },

    /// Leave a room
    Leave {
        /// Room ID
        room_id: u64,
    },

    /// Delete a room for every member
    Delete {
        /// Room ID
        room_id: u64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Run the rooms command.
pub fn run(args: RoomsArgs, ctx: &Context) -> Result<()> {
    let cmd = args.command.unwrap_or(RoomsCommand::List);

    // Checked before any request goes out
    if let RoomsCommand::Update {
        name: None,
        description: None,
        icon_preset: None,
        ..
    } = &cmd
    {
        bail!("nothing to update: pass --name, --description or --icon-preset");
    }
    if let RoomsCommand::Delete { yes: false, room_id } = &cmd {
        bail!("deleting room {} removes it for every member; re-run with --yes", room_id);
    }

    let client = ctx.client()?;

    match cmd {
        RoomsCommand::List => {
            let rooms = client.get_rooms()?;
            if ctx.json_output {
                return print_json(&rooms);
            }

            print_header("Rooms");
            if rooms.is_empty() {
                println!("{}", Style::new().dim().apply_to("No rooms"));
            }
            for room in &rooms {
                print_room_line(room);
            }
        }
        RoomsCommand::Show { room_id } => {
            let room = client.get_room_info(RoomRef { room_id })?;
            if ctx.json_output {
                return print_json(&room);
            }
            print_room_details(&room);
        }
        RoomsCommand::Update {
            room_id,
            name,
            description,
            icon_preset,
        } => {
            let response = client.change_room_info(ChangeRoomInfo {
                room_id,
                body: RoomUpdate {
                    name,
                    description,
                    icon_preset,
                },
            })?;
            if ctx.json_output {
                return print_json(&response);
            }
            print_success(&format!("Room {} updated", response.room_id));
        }
        RoomsCommand::Leave { room_id } => {
            client.delete_room(DeleteRoom::leave(room_id))?;
            if !ctx.json_output {
                print_success(&format!("Left room {}", room_id));
            }
        }
        RoomsCommand::Delete { room_id, .. } => {
            client.delete_room(DeleteRoom::delete(room_id))?;
            if !ctx.json_output {
                print_success(&format!("Deleted room {}", room_id));
            }
        }
    }

    Ok(())
}

fn room_kind(room_type: RoomType) -> &'static str {
    match room_type {
        RoomType::My => "my",
        RoomType::Direct => "direct",
        RoomType::Group => "group",
        RoomType::Unknown => "?",
    }
}

fn print_room_line(room: &Room) {
    let dim = Style::new().dim();
    let unread = if room.unread_num > 0 {
        Style::new()
            .yellow()
            .apply_to(format!(" ({} unread)", room.unread_num))
            .to_string()
    } else {
        String::new()
    };
    println!(
        "{} {} {}{}",
        dim.apply_to(format!("[{:>10}]", room.room_id)),
        dim.apply_to(format!("{:<6}", room_kind(room.room_type))),
        room.name,
        unread
    );
}

fn print_room_details(room: &Room) {
    let dim = Style::new().dim();
    print_header(&room.name);
    println!("{} {}", dim.apply_to("Room ID:     "), room.room_id);
    println!("{} {}", dim.apply_to("Type:        "), room_kind(room.room_type));
    println!("{} {:?}", dim.apply_to("Role:        "), room.role);
    println!(
        "{} {} messages, {} files, {} tasks",
        dim.apply_to("Activity:    "),
        room.message_num,
        room.file_num,
        room.task_num
    );
    println!(
        "{} {}",
        dim.apply_to("Last update: "),
        format_time(room.last_update_time)
    );
    if let Some(description) = room.description.as_deref().filter(|d| !d.is_empty()) {
        println!();
        println!("{}", description);
    }
}
