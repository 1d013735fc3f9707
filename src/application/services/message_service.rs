use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::application::errors::BotError;
use crate::application::messaging::Dispatcher;
use crate::domain::entities::IncomingMessage;
use crate::domain::traits::Bot;

/// Receives messages from a bot adapter and answers them
pub struct MessageService<B: Bot> {
    bot: Arc<B>,
    dispatcher: Arc<Dispatcher>,
}

impl<B: Bot + 'static> MessageService<B> {
    pub fn new(bot: Arc<B>, dispatcher: Arc<Dispatcher>) -> Self {
        Self { bot, dispatcher }
    }

    /// Run until `cancel` fires or the transport closes.
    ///
    /// Each message is dispatched on its own task. Replies already being
    /// worked on when the loop stops are still sent before this returns.
    pub async fn run(&self, cancel: CancellationToken) -> Result<(), BotError> {
        self.bot.start().await?;

        let info = self.bot.bot_info();
        tracing::info!("{} is patiently listening", info.name);

        let mut in_flight = JoinSet::new();

        loop {
            let message = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        tracing::error!("Dispatch task failed: {}", e);
                    }
                    continue;
                }
                message = self.bot.recv() => message,
            };

            let Some(message) = message else {
                tracing::info!("Transport closed, no more messages");
                break;
            };

            // Ignore bot's messages
            if message.is_from(&info.id) {
                continue;
            }

            let bot = Arc::clone(&self.bot);
            let dispatcher = Arc::clone(&self.dispatcher);
            in_flight.spawn(async move { respond(bot.as_ref(), &dispatcher, message).await });
        }

        if !in_flight.is_empty() {
            tracing::info!("Waiting for {} in-flight replies", in_flight.len());
        }
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Dispatch task failed: {}", e);
            }
        }

        Ok(())
    }
}

/// Dispatch one message and send the reply, if any
async fn respond<B: Bot>(bot: &B, dispatcher: &Dispatcher, message: IncomingMessage) {
    let Some(reply) = dispatcher.dispatch(&message).await else {
        return;
    };

    if let Err(e) = bot.send_message(&message.channel_id, &reply).await {
        tracing::warn!("Failed to send reply to {}: {}", message.channel_id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Command, CommandHandler, CommandRegistry, StaticReply};
    use crate::domain::traits::BotInfo;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc;

    /// In-memory transport fed through a channel
    struct ChannelBot {
        inbox: tokio::sync::Mutex<mpsc::Receiver<IncomingMessage>>,
        sent: Mutex<Vec<(String, String)>>,
        fail_sends: bool,
    }

    impl ChannelBot {
        fn new(fail_sends: bool) -> (Arc<Self>, mpsc::Sender<IncomingMessage>) {
            let (tx, rx) = mpsc::channel(16);
            let bot = Arc::new(Self {
                inbox: tokio::sync::Mutex::new(rx),
                sent: Mutex::new(Vec::new()),
                fail_sends,
            });
            (bot, tx)
        }

        fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Bot for ChannelBot {
        async fn start(&self) -> Result<(), BotError> {
            Ok(())
        }

        async fn recv(&self) -> Option<IncomingMessage> {
            self.inbox.lock().await.recv().await
        }

        async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
            if self.fail_sends {
                return Err(BotError::Transport("connection closing".into()));
            }
            self.sent.lock().unwrap().push((channel_id.to_string(), text.to_string()));
            Ok(())
        }

        fn bot_info(&self) -> BotInfo {
            BotInfo {
                id: "bot-1".to_string(),
                name: "discorgi".to_string(),
            }
        }
    }

    /// Handler that takes a while to answer
    struct Slow;

    #[async_trait]
    impl CommandHandler for Slow {
        async fn handle(&self, argument: &str) -> String {
            tokio::time::sleep(Duration::from_secs(2)).await;
            format!("slow {}", argument)
        }
    }

    fn dispatcher() -> Arc<Dispatcher> {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("ping").with_handler(StaticReply("pong".into())));
        registry.register(Command::new("wait").requires_argument().with_handler(Slow));
        Arc::new(Dispatcher::new("discorgi", registry))
    }

    #[tokio::test]
    async fn test_replies_to_addressed_messages_only() {
        let (bot, tx) = ChannelBot::new(false);
        let service = MessageService::new(Arc::clone(&bot), dispatcher());

        tx.send(IncomingMessage::new("general", "user-1", "discorgi ping")).await.unwrap();
        tx.send(IncomingMessage::new("general", "user-1", "just chatting")).await.unwrap();
        tx.send(IncomingMessage::new("random", "bot-1", "discorgi ping")).await.unwrap();
        drop(tx);

        service.run(CancellationToken::new()).await.unwrap();

        assert_eq!(bot.sent(), vec![("general".to_string(), "pong".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_waits_for_in_flight_reply() {
        let (bot, tx) = ChannelBot::new(false);
        let service = MessageService::new(Arc::clone(&bot), dispatcher());
        let cancel = CancellationToken::new();

        tx.send(IncomingMessage::new("general", "user-1", "discorgi wait a bit")).await.unwrap();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        service.run(cancel).await.unwrap();

        assert_eq!(bot.sent(), vec![("general".to_string(), "slow a bit".to_string())]);
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_dispatches_run_concurrently() {
        let (bot, tx) = ChannelBot::new(false);
        let service = MessageService::new(Arc::clone(&bot), dispatcher());

        tx.send(IncomingMessage::new("general", "user-1", "discorgi wait one")).await.unwrap();
        tx.send(IncomingMessage::new("random", "user-2", "discorgi wait two")).await.unwrap();
        drop(tx);

        let started = tokio::time::Instant::now();
        service.run(CancellationToken::new()).await.unwrap();
        let elapsed = started.elapsed();

        // each reply takes 2s, one after the other would take 4s
        assert!(elapsed >= Duration::from_secs(2), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(3), "{elapsed:?}");

        let mut sent = bot.sent();
        sent.sort();
        assert_eq!(
            sent,
            vec![
                ("general".to_string(), "slow one".to_string()),
                ("random".to_string(), "slow two".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_failure_does_not_stop_loop() {
        let (bot, tx) = ChannelBot::new(true);
        let service = MessageService::new(Arc::clone(&bot), dispatcher());

        tx.send(IncomingMessage::new("general", "user-1", "discorgi ping")).await.unwrap();
        tx.send(IncomingMessage::new("general", "user-1", "discorgi ping")).await.unwrap();
        drop(tx);

        assert!(service.run(CancellationToken::new()).await.is_ok());
        assert!(bot.sent().is_empty());
    }
}
