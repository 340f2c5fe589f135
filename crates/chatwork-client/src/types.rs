//! Request and response types for the Chatwork API.
//!
//! Response types mirror the service's JSON. Fields the service may leave out
//! default rather than fail, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::transport::{FilePart, Multipart};

// ─────────────────────────────────────────────────────────────────────────────
// Accounts
// ─────────────────────────────────────────────────────────────────────────────

/// Account summary embedded in messages, tasks and files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_image_url: String,
}

/// The authenticated user's profile (`GET /me`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub account_id: u64,
    /// Id of the user's own chat ("my chat").
    pub room_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chatwork_id: String,
    #[serde(default)]
    pub organization_id: u64,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub tel_organization: String,
    #[serde(default)]
    pub tel_extension: String,
    #[serde(default)]
    pub tel_mobile: String,
    #[serde(default)]
    pub skype: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub avatar_image_url: String,
    #[serde(default)]
    pub login_mail: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rooms
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// The user's own chat.
    My,
    Direct,
    Group,
    #[serde(other)]
    Unknown,
}

/// The user's role in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomRole {
    Admin,
    Member,
    Readonly,
    #[serde(other)]
    Unknown,
}

/// A room as returned by `GET /rooms` and `GET /rooms/{room_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub role: RoomRole,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub unread_num: u64,
    #[serde(default)]
    pub mention_num: u64,
    #[serde(default)]
    pub mytask_num: u64,
    #[serde(default)]
    pub message_num: u64,
    #[serde(default)]
    pub file_num: u64,
    #[serde(default)]
    pub task_num: u64,
    #[serde(default)]
    pub icon_path: String,
    #[serde(default)]
    pub last_update_time: i64,
    /// Only present on the single-room endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Room reference used by the single-room endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRef {
    pub room_id: u64,
}

/// Room fields that `PUT /rooms/{room_id}` can change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One of the service's preset icon names (`group`, `check`, `document`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_preset: Option<String>,
}

/// Parameters for [`change_room_info`](crate::ChatworkClient::change_room_info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRoomInfo {
    pub room_id: u64,
    /// Sent as the query string.
    pub body: RoomUpdate,
}

/// What `DELETE /rooms/{room_id}` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteAction {
    /// Leave the room, keeping it for other members.
    Leave,
    /// Delete the room for everyone (admins only).
    Delete,
}

/// Query body of `DELETE /rooms/{room_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteRoomParams {
    pub action_type: DeleteAction,
}

/// Parameters for [`delete_room`](crate::ChatworkClient::delete_room).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRoom {
    pub room_id: u64,
    /// Sent as the query string.
    pub body: DeleteRoomParams,
}

impl DeleteRoom {
    /// Leave a room.
    pub fn leave(room_id: u64) -> Self {
        Self {
            room_id,
            body: DeleteRoomParams {
                action_type: DeleteAction::Leave,
            },
        }
    }

    /// Delete a room.
    pub fn delete(room_id: u64) -> Self {
        Self {
            room_id,
            body: DeleteRoomParams {
                action_type: DeleteAction::Delete,
            },
        }
    }
}

/// `{"room_id": ...}` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomIdResponse {
    pub room_id: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: String,
    pub account: Account,
    pub body: String,
    #[serde(default)]
    pub send_time: i64,
    #[serde(default)]
    pub update_time: i64,
}

/// Parameters for [`send_message`](crate::ChatworkClient::send_message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub room_id: u64,
    pub body: String,
    /// Leave the message unread for the sender.
    pub self_unread: Option<bool>,
}

impl SendMessage {
    /// Create a message for a room.
    pub fn new(room_id: u64, body: impl Into<String>) -> Self {
        Self {
            room_id,
            body: body.into(),
            self_unread: None,
        }
    }

    /// Set the self-unread flag.
    pub fn with_self_unread(mut self, self_unread: bool) -> Self {
        self.self_unread = Some(self_unread);
        self
    }
}

/// `{"message_id": ...}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageIdResponse {
    pub message_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────────────────────

/// Task completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Done,
}

/// How a task's limit is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitType {
    None,
    Date,
    Time,
}

/// A task in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: u64,
    pub account: Account,
    pub assigned_by_account: Account,
    #[serde(default)]
    pub message_id: String,
    pub body: String,
    /// Unix time; 0 when there is no limit.
    #[serde(default)]
    pub limit_time: i64,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<LimitType>,
}

/// Room summary embedded in [`MyTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRoom {
    pub room_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_path: String,
}

/// A task assigned to the authenticated user (`GET /my/tasks`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyTask {
    pub task_id: u64,
    pub room: TaskRoom,
    pub assigned_by_account: Account,
    #[serde(default)]
    pub message_id: String,
    pub body: String,
    #[serde(default)]
    pub limit_time: i64,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<LimitType>,
}

/// Parameters for [`send_task`](crate::ChatworkClient::send_task).
#[derive(Debug, Clone, PartialEq)]
pub struct SendTask {
    pub room_id: u64,
    pub body: String,
    /// Assignees, sent as a comma separated `to_ids` field.
    pub to_id_list: Vec<u64>,
    /// Deadline as Unix time. May come in exponential notation (`1e9`); it is
    /// sent as a plain integer.
    pub limit: Option<f64>,
    pub limit_type: Option<LimitType>,
}

impl SendTask {
    /// Create a task without a deadline.
    pub fn new(room_id: u64, body: impl Into<String>, to_id_list: Vec<u64>) -> Self {
        Self {
            room_id,
            body: body.into(),
            to_id_list,
            limit: None,
            limit_type: None,
        }
    }

    /// Set the deadline.
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set how the deadline is interpreted.
    pub fn with_limit_type(mut self, limit_type: LimitType) -> Self {
        self.limit_type = Some(limit_type);
        self
    }
}

/// `{"task_ids": [...]}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIdsResponse {
    pub task_ids: Vec<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

/// A file shared in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub file_id: u64,
    pub account: Account,
    #[serde(default)]
    pub message_id: String,
    pub filename: String,
    #[serde(default)]
    pub filesize: u64,
    #[serde(default)]
    pub upload_time: i64,
}

/// Filter for `GET /rooms/{room_id}/files`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileFilter {
    /// Only files uploaded by this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
}

/// Parameters for [`get_file_list`](crate::ChatworkClient::get_file_list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileListRequest {
    pub room_id: u64,
    /// Sent as the query string.
    pub body: FileFilter,
}

/// Multipart payload of a file upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Message posted together with the file.
    pub message: Option<String>,
}

impl UploadPayload {
    /// Create a payload from a file name and its contents.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
            message: None,
        }
    }

    /// Set the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub(crate) fn into_multipart(self) -> Multipart {
        let mut multipart = Multipart::new().file(FilePart {
            field_name: "file".to_string(),
            file_name: self.file_name,
            content_type: self.content_type,
            bytes: self.bytes,
        });
        if let Some(message) = self.message {
            multipart = multipart.text("message", message);
        }
        multipart
    }
}

/// Parameters for [`upload_file`](crate::ChatworkClient::upload_file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub room_id: u64,
    pub payload: UploadPayload,
}

/// `{"file_id": ...}` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIdResponse {
    pub file_id: u64,
}
