use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Produces the reply for a matched command.
///
/// Handlers never fail: lookup errors are turned into a user-facing reply
/// inside the handler.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, argument: &str) -> String;
}

/// Handler that always answers with the same text
pub struct StaticReply(pub String);

#[async_trait]
impl CommandHandler for StaticReply {
    async fn handle(&self, _argument: &str) -> String {
        self.0.clone()
    }
}

/// Represents a bot command
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub aliases: Vec<String>,
    pub usage: Option<String>,
    pub requires_argument: bool,
    pub handler: Option<Arc<dyn CommandHandler>>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            usage: None,
            requires_argument: false,
            handler: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(|a| a.into().to_lowercase()).collect();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn requires_argument(mut self) -> Self {
        self.requires_argument = true;
        self
    }

    pub fn with_handler<H: CommandHandler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Primary name followed by aliases, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Usage line shown in help, falls back to the name
    pub fn usage_line(&self) -> &str {
        self.usage.as_deref().unwrap_or(&self.name)
    }

    /// Match already case-folded input against this command.
    ///
    /// Returns the argument on a match: empty for commands without an
    /// argument, otherwise everything after `"<alias> "`, which must not be
    /// empty.
    pub fn match_input(&self, input: &str) -> Option<String> {
        self.names().find_map(|name| {
            if !self.requires_argument {
                return (input == name).then(String::new);
            }
            input
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(' '))
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
        })
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("usage", &self.usage)
            .field("requires_argument", &self.requires_argument)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Ordered command table. Matching is first-match-wins, so the
/// registration order is kept as is.
#[derive(Default, Clone, Debug)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        if self.commands.iter().any(|c| c.names().any(|n| command.names().any(|m| m == n))) {
            tracing::warn!(
                "Command {} shares an alias with an earlier command; the earlier one wins",
                command.name
            );
        }
        self.commands.push(command);
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn usages(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(Command::usage_line)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
