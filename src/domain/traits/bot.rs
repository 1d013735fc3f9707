use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::IncomingMessage;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Start the bot and begin listening for messages
    async fn start(&self) -> Result<(), BotError>;

    /// Wait for the next inbound message. `None` once the transport is closed.
    async fn recv(&self) -> Option<IncomingMessage>;

    /// Send a message to a channel
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
}
