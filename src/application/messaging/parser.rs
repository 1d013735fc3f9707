//! Address parser - Recognizes messages directed at the bot

/// Strips the bot's address token from incoming text
#[derive(Debug, Clone)]
pub struct AddressParser {
    address: String,
}

impl AddressParser {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into().to_lowercase(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Case-fold `text` and return what follows `"<address> "`.
    ///
    /// Returns `None` when the message is not addressed to the bot.
    pub fn parse(&self, text: &str) -> Option<String> {
        let folded = text.to_lowercase();
        folded
            .strip_prefix(self.address.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::to_string)
    }
}
