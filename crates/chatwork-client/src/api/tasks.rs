//! Tasks API.

use serde::Serialize;

use crate::client::{ChatworkClient, require};
use crate::error::{Error, Result};
use crate::types::{LimitType, MyTask, SendTask, Task, TaskIdsResponse, TaskStatus};

/// Query parameters for listing a room's tasks.
#[derive(Debug, Default, Serialize)]
pub struct RoomTasksQuery {
    /// Filter by assignee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    /// Filter by assigner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Query parameters for listing the user's own tasks.
#[derive(Debug, Default, Serialize)]
pub struct MyTasksQuery {
    /// Filter by assigner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[derive(Serialize)]
struct TaskPayload<'a> {
    body: &'a str,
    to_ids: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_type: Option<LimitType>,
}

/// Render a limit as a plain integer, whatever notation it arrived in.
///
/// Rounds to the nearest integer; `1e3` becomes `"1000"`.
fn fixed_point(limit: f64) -> Result<String> {
    if !limit.is_finite() {
        return Err(Error::InvalidParams(format!("limit must be finite, got {}", limit)));
    }
    let rounded = limit.round();
    if rounded == 0.0 {
        // avoid "-0"
        return Ok("0".to_string());
    }
    Ok(format!("{:.0}", rounded))
}

impl ChatworkClient {
    /// Add a task to a room.
    pub fn send_task(&self, params: SendTask) -> Result<TaskIdsResponse> {
        let path = format!("/rooms/{}/tasks", params.room_id);
        let to_ids = params
            .to_id_list
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let payload = TaskPayload {
            body: &params.body,
            to_ids,
            limit: params.limit.map(fixed_point).transpose()?,
            limit_type: params.limit_type,
        };
        require(self.post(&path, &payload)?, &path)
    }

    /// List a room's tasks, optionally filtered.
    pub fn get_room_tasks(
        &self,
        room_id: u64,
        params: Option<RoomTasksQuery>,
    ) -> Result<Vec<Task>> {
        let tasks = self.get(&format!("/rooms/{}/tasks", room_id), &params)?;
        Ok(tasks.unwrap_or_default())
    }

    /// List tasks assigned to the authenticated user.
    pub fn get_my_tasks(&self, params: Option<MyTasksQuery>) -> Result<Vec<MyTask>> {
        let tasks = self.get("/my/tasks", &params)?;
        Ok(tasks.unwrap_or_default())
    }
}
