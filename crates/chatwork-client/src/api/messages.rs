//! Messages API.

use serde::Serialize;

use crate::client::{ChatworkClient, require};
use crate::error::Result;
use crate::types::{Message, MessageIdResponse, SendMessage};

/// Query parameters for listing messages.
#[derive(Debug, Default, Serialize)]
pub struct MessagesQuery {
    /// Return the latest 100 messages instead of only the ones not yet fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    self_unread: Option<bool>,
}

impl ChatworkClient {
    /// Post a message to a room.
    pub fn send_message(&self, params: SendMessage) -> Result<MessageIdResponse> {
        let path = format!("/rooms/{}/messages", params.room_id);
        let payload = MessagePayload {
            body: &params.body,
            self_unread: params.self_unread,
        };
        require(self.post(&path, &payload)?, &path)
    }

    /// Post a message to the user's own chat.
    ///
    /// Costs two requests: the room id is looked up through `/me` first.
    pub fn send_message_to_my_chat(
        &self,
        message: impl Into<String>,
    ) -> Result<MessageIdResponse> {
        let me = self.get_me()?;
        tracing::debug!(room_id = me.room_id, "resolved my chat");
        self.send_message(SendMessage::new(me.room_id, message))
    }

    /// List messages in a room that this token has not fetched yet.
    pub fn get_messages(&self, room_id: u64) -> Result<Vec<Message>> {
        self.get_messages_with_query(room_id, MessagesQuery::default())
    }

    /// List messages with query parameters.
    pub fn get_messages_with_query(
        &self,
        room_id: u64,
        query: MessagesQuery,
    ) -> Result<Vec<Message>> {
        let messages = self.get(&format!("/rooms/{}/messages", room_id), &query)?;
        Ok(messages.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_with, json_response};
    use crate::transport::{Method, RequestBody, TransportResponse};

    fn form(pairs: &[(&str, &str)]) -> RequestBody {
        RequestBody::Form(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_send_message() {
        let (client, transport) = client_with(vec![json_response(r#"{"message_id":"1234"}"#)]);

        let response = client.send_message(SendMessage::new(42, "Hello")).unwrap();
        assert_eq!(response.message_id, "1234");

        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://api.chatwork.com/v2/rooms/42/messages");
        assert_eq!(request.body, form(&[("body", "Hello")]));
    }

    #[test]
    fn test_send_message_with_self_unread() {
        let (client, transport) = client_with(vec![json_response(r#"{"message_id":"1"}"#)]);

        client
            .send_message(SendMessage::new(42, "ping").with_self_unread(true))
            .unwrap();

        assert_eq!(
            transport.last().body,
            form(&[("body", "ping"), ("self_unread", "1")])
        );
    }

    #[test]
    fn test_send_message_to_my_chat_resolves_room_first() {
        let (client, transport) = client_with(vec![
            json_response(r#"{"account_id":1,"room_id":777,"name":"me"}"#),
            json_response(r#"{"message_id":"99"}"#),
        ]);

        let response = client.send_message_to_my_chat("hi").unwrap();
        assert_eq!(response.message_id, "99");

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "https://api.chatwork.com/v2/me");
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].url, "https://api.chatwork.com/v2/rooms/777/messages");
        assert_eq!(requests[1].body, form(&[("body", "hi")]));
    }

    #[test]
    fn test_send_message_to_my_chat_stops_when_profile_fails() {
        let (client, transport) = client_with(vec![TransportResponse::new(
            401,
            r#"{"errors":["Invalid API token"]}"#,
        )]);

        let err = client.send_message_to_my_chat("hi").unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_get_messages() {
        let (client, transport) = client_with(vec![json_response(
            r#"[{"message_id":"5","account":{"account_id":123,"name":"Bob","avatar_image_url":""},"body":"Hello Chatwork!","send_time":1384242850,"update_time":0}]"#,
        )]);

        let messages = client.get_messages(42).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "Hello Chatwork!");
        assert_eq!(messages[0].account.account_id, 123);

        let request = transport.last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://api.chatwork.com/v2/rooms/42/messages");
    }

    #[test]
    fn test_get_messages_no_content_is_empty() {
        let (client, _) = client_with(vec![TransportResponse::new(204, "")]);
        assert!(client.get_messages(42).unwrap().is_empty());
    }

    #[test]
    fn test_get_messages_forced() {
        let (client, transport) = client_with(vec![json_response("[]")]);
        client
            .get_messages_with_query(42, MessagesQuery { force: Some(true) })
            .unwrap();
        assert_eq!(
            transport.last().url,
            "https://api.chatwork.com/v2/rooms/42/messages?force=1"
        );
    }
}
