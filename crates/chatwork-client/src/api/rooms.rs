//! Rooms API.

use crate::client::{ChatworkClient, require};
use crate::error::Result;
use crate::types::{ChangeRoomInfo, DeleteRoom, Room, RoomIdResponse, RoomRef};

impl ChatworkClient {
    /// List the rooms the user belongs to.
    pub fn get_rooms(&self) -> Result<Vec<Room>> {
        let rooms = self.get("/rooms", &())?;
        Ok(rooms.unwrap_or_default())
    }

    /// Get a single room.
    pub fn get_room_info(&self, params: RoomRef) -> Result<Room> {
        let path = format!("/rooms/{}", params.room_id);
        require(self.get(&path, &())?, &path)
    }

    /// Change a room's name, description or icon.
    ///
    /// The changes travel in the query string; the request has no body.
    pub fn change_room_info(&self, params: ChangeRoomInfo) -> Result<RoomIdResponse> {
        let path = format!("/rooms/{}", params.room_id);
        require(self.put(&path, &params.body)?, &path)
    }

    /// Leave or delete a room.
    pub fn delete_room(&self, params: DeleteRoom) -> Result<()> {
        let path = format!("/rooms/{}", params.room_id);
        let _: Option<serde_json::Value> = self.delete(&path, &params.body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_with, json_response};
    use crate::transport::{Method, TransportResponse};
    use crate::types::{RoomType, RoomUpdate};

    const ROOM: &str = r#"{"room_id":123,"name":"Group Chat Name","type":"group","role":"admin","sticky":false,"unread_num":10,"mention_num":1,"mytask_num":0,"message_num":122,"file_num":10,"task_num":17,"icon_path":"https://example.com/ico_group.png","last_update_time":1298905200,"description":"room description text"}"#;

    #[test]
    fn test_get_rooms() {
        let (client, transport) = client_with(vec![json_response(&format!("[{}]", ROOM))]);

        let rooms = client.get_rooms().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_id, 123);
        assert_eq!(rooms[0].room_type, RoomType::Group);

        let request = transport.last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://api.chatwork.com/v2/rooms");
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_get_room_info() {
        let (client, transport) = client_with(vec![json_response(ROOM)]);

        let room = client.get_room_info(RoomRef { room_id: 123 }).unwrap();
        assert_eq!(room.description.as_deref(), Some("room description text"));
        assert_eq!(transport.last().url, "https://api.chatwork.com/v2/rooms/123");
    }

    #[test]
    fn test_change_room_info_uses_query_string() {
        let (client, transport) = client_with(vec![json_response(r#"{"room_id":1}"#)]);

        let response = client
            .change_room_info(ChangeRoomInfo {
                room_id: 1,
                body: RoomUpdate {
                    name: Some("x".to_string()),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(response.room_id, 1);

        let request = transport.last();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "https://api.chatwork.com/v2/rooms/1?name=x");
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_change_room_info_encodes_every_field() {
        let (client, transport) = client_with(vec![json_response(r#"{"room_id":7}"#)]);

        client
            .change_room_info(ChangeRoomInfo {
                room_id: 7,
                body: RoomUpdate {
                    name: Some("Q&A".to_string()),
                    description: Some("ask here".to_string()),
                    icon_preset: Some("idea".to_string()),
                },
            })
            .unwrap();

        assert_eq!(
            transport.last().url,
            "https://api.chatwork.com/v2/rooms/7?name=Q%26A&description=ask%20here&icon_preset=idea"
        );
    }

    #[test]
    fn test_delete_room() {
        let (client, transport) = client_with(vec![TransportResponse::new(204, "")]);

        client.delete_room(DeleteRoom::leave(55)).unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(
            request.url,
            "https://api.chatwork.com/v2/rooms/55?action_type=leave"
        );
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_delete_room_forbidden() {
        let (client, _) = client_with(vec![TransportResponse::new(
            403,
            r#"{"errors":["You don't have permission to delete this room"]}"#,
        )]);

        let err = client.delete_room(DeleteRoom::delete(55)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (403): You don't have permission to delete this room"
        );
    }
}
