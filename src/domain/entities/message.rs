use chrono::{DateTime, Utc};

/// A text message delivered by the transport
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: String,
    pub channel_id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(
        channel_id: impl Into<String>,
        sender_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel_id: channel_id.into(),
            sender_id: sender_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// True when the message was sent by the given identity
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_gets_unique_id() {
        let a = IncomingMessage::new("general", "42", "discorgi help");
        let b = IncomingMessage::new("general", "42", "discorgi help");
        assert_ne!(a.id, b.id);
        assert!(a.is_from("42"));
        assert!(!a.is_from("43"));
    }
}
