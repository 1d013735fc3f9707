//! Message dispatcher - Routes addressed messages to command handlers

use crate::domain::entities::{CommandRegistry, IncomingMessage};

use super::parser::AddressParser;

/// Inputs that produce the command listing
pub const HELP_ALIASES: [&str; 2] = ["help", "halp"];

/// Reply when no command matches
pub const FALLBACK_REPLY: &str = "I haven't learned that trick yet! 🐕";

/// Parses addressed messages and runs the first matching command
pub struct Dispatcher {
    parser: AddressParser,
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(address: impl Into<String>, registry: CommandRegistry) -> Self {
        Self {
            parser: AddressParser::new(address),
            registry,
        }
    }

    /// Produce the reply for a message, or `None` if it is not addressed to
    /// the bot. Filtering the bot's own messages is up to the caller.
    pub async fn dispatch(&self, message: &IncomingMessage) -> Option<String> {
        let input = self.parser.parse(&message.text)?;
        tracing::info!(
            "Woof! Message received [{}] {} said \"{}\"",
            message.id,
            message.sender_id,
            message.text
        );
        Some(self.dispatch_input(&input).await)
    }

    /// Dispatch input that already had the address stripped
    pub async fn dispatch_input(&self, input: &str) -> String {
        let help = HELP_ALIASES.contains(&input).then(|| self.help_text());

        let reply = self.run_command(input).await;

        match (help, reply) {
            (Some(help), Some(reply)) => format!("{}\n{}", help, reply),
            (Some(help), None) => help,
            (None, Some(reply)) => reply,
            (None, None) => FALLBACK_REPLY.to_string(),
        }
    }

    /// First matching command wins
    async fn run_command(&self, input: &str) -> Option<String> {
        for command in self.registry.all() {
            let Some(argument) = command.match_input(input) else {
                continue;
            };

            tracing::debug!("Matched command {} with argument {:?}", command.name, argument);
            return Some(match &command.handler {
                Some(handler) => handler.handle(&argument).await,
                None => format!("Command {} not implemented", command.name),
            });
        }
        None
    }

    pub fn help_text(&self) -> String {
        let mut msg = format!(
            "To ask me to do something, just say `{} [command goes here]`\n You use the following commands:\n```\n",
            self.parser.address()
        );
        for usage in self.registry.usages() {
            msg.push_str(usage);
            msg.push('\n');
        }
        msg.push_str("```");
        msg
    }
}
