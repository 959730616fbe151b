use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Message from the embedding parent to the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// A null or missing `token` still counts as a credential message; it is
    /// rejected later as a missing credential.
    #[serde(rename = "AUTH_TOKEN")]
    AuthToken {
        #[serde(default)]
        token: Option<String>,
    },
}

impl InboundMessage {
    pub fn auth_token(token: impl Into<String>) -> Self {
        InboundMessage::AuthToken {
            token: Some(token.into()),
        }
    }

    /// Parse one JSON message. Unknown `type` tags are errors.
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Message from the panel to the embedding parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "APP_LOADED")]
    AppLoaded,

    #[serde(rename = "USER_DELETED")]
    UserDeleted { payload: UserDeletedPayload },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletedPayload {
    pub user_id: String,
}

impl OutboundMessage {
    pub fn user_deleted(user_id: impl Into<String>) -> Self {
        OutboundMessage::UserDeleted {
            payload: UserDeletedPayload {
                user_id: user_id.into(),
            },
        }
    }

    /// Single-line JSON encoding used on the wire
    pub fn to_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_token() {
        let msg = InboundMessage::parse(r#"{"type":"AUTH_TOKEN","token":"abc"}"#).unwrap();
        assert_eq!(msg, InboundMessage::auth_token("abc"));
    }

    #[test]
    fn test_auth_token_without_value_still_parses() {
        for raw in [r#"{"type":"AUTH_TOKEN","token":null}"#, r#"{"type":"AUTH_TOKEN"}"#] {
            assert_eq!(
                InboundMessage::parse(raw).unwrap(),
                InboundMessage::AuthToken { token: None }
            );
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(InboundMessage::parse(r#"{"type":"RESIZE","height":10}"#).is_err());
        assert!(InboundMessage::parse(r#"{"token":"abc"}"#).is_err());
        assert!(InboundMessage::parse(r#"{"type":"AUTH_TOKEN","token":42}"#).is_err());
        assert!(InboundMessage::parse("not json").is_err());
    }

    #[test]
    fn test_outbound_wire_format() {
        assert_eq!(
            OutboundMessage::AppLoaded.to_json().unwrap(),
            r#"{"type":"APP_LOADED"}"#
        );
        assert_eq!(
            OutboundMessage::user_deleted("2").to_json().unwrap(),
            r#"{"type":"USER_DELETED","payload":{"userId":"2"}}"#
        );
    }

    #[test]
    fn test_tags_match_constants() {
        use crate::constants::message_types;

        let tag = |value: serde_json::Value| value["type"].as_str().map(str::to_string);
        let inbound = InboundMessage::auth_token("t");
        assert_eq!(
            tag(serde_json::to_value(&inbound).unwrap()).as_deref(),
            Some(message_types::AUTH_TOKEN)
        );
        assert_eq!(
            tag(serde_json::to_value(OutboundMessage::AppLoaded).unwrap()).as_deref(),
            Some(message_types::APP_LOADED)
        );
        assert_eq!(
            tag(serde_json::to_value(OutboundMessage::user_deleted("1")).unwrap()).as_deref(),
            Some(message_types::USER_DELETED)
        );
    }
}
