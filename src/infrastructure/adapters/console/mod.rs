//! Console adapter for development/testing

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::errors::BotError;
use crate::domain::entities::IncomingMessage;
use crate::domain::traits::{Bot, BotInfo};

const CHANNEL_ID: &str = "console";
const USER_ID: &str = "console-user";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    lines_tx: Mutex<Option<mpsc::Sender<String>>>,
    lines_rx: tokio::sync::Mutex<mpsc::Receiver<String>>,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel(32);
        Self {
            info: BotInfo {
                id: "console-bot".to_string(),
                name: name.into(),
            },
            lines_tx: Mutex::new(Some(tx)),
            lines_rx: tokio::sync::Mutex::new(rx),
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("discorgi")
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        let tx = self
            .lines_tx
            .lock()
            .map_err(|_| BotError::Internal("Lock poisoned".to_string()))?
            .take()
            .ok_or_else(|| BotError::Transport("console already started".to_string()))?;

        tracing::info!("Starting console bot (dev mode)");
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if tx.send(line).await.is_err() {
                    break;
                }
            }
        });
        Ok(())
    }

    async fn recv(&self) -> Option<IncomingMessage> {
        let line = self.lines_rx.lock().await.recv().await?;
        Some(IncomingMessage::new(CHANNEL_ID, USER_ID, line))
    }

    async fn send_message(&self, _channel_id: &str, text: &str) -> Result<(), BotError> {
        println!("[BOT] {}", text);
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
