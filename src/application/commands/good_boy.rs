use crate::domain::entities::{Command, StaticReply};

pub const GOOD_BOY_REPLY: &str = "https://gfycat.com/femininedefiantgiantschnauzer-corgi-puppy-dog";

pub fn command() -> Command {
    Command::new("who's a good boy")
        .with_aliases(["whos a good boy", "whose a good boy"])
        .with_usage("who's a good boy")
        .with_handler(StaticReply(GOOD_BOY_REPLY.to_string()))
}
