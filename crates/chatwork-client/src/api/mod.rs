//! API endpoint implementations.
//!
//! Each module adds the methods for one resource to
//! [`ChatworkClient`](crate::ChatworkClient).

mod files;
mod me;
mod messages;
mod rooms;
mod tasks;

pub use messages::MessagesQuery;
pub use tasks::{MyTasksQuery, RoomTasksQuery};
