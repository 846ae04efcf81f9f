//! Prefix command parsing.
//!
//! Messages that trigger no AI reply can still carry a `!`-prefixed
//! command. Anything unrecognized is plain chatter and gets nothing.

/// Commands the bot answers without an LLM call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Liveness check.
    Ping,
    /// Report the sender's current warmth level.
    Warmth,
}

/// Parse `content` against `prefix`. Only the first word counts; trailing
/// text is ignored.
pub fn parse(content: &str, prefix: &str) -> Option<Command> {
    let rest = content.trim().strip_prefix(prefix)?;
    match rest.split_whitespace().next()? {
        "ping" => Some(Command::Ping),
        "warmth" => Some(Command::Warmth),
        _ => None,
    }
}
