use serde::{Deserialize, Serialize};

/// The delimiter separating the phrase segment from the reply segment on a route line.
pub const ROUTE_DELIMITER: &str = "=>";

/// A single keyword route: when `phrase` appears in an inbound message (matched
/// case-insensitively), `reply` is sent back.
///
/// Order is significant. The first route in configuration order whose phrase is
/// contained in the message wins, so duplicate phrases are allowed and retained -
/// later duplicates are simply never reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRoute {
    pub phrase: String,
    pub reply: String,
}

/// Parses freeform textarea content into an ordered route list.
///
/// One route per line, `phrase => reply`. Lines are trimmed, blank lines are
/// skipped, and any line missing the delimiter or yielding an empty phrase or
/// reply after trimming is silently dropped. Total: never fails, worst case
/// returns an empty list.
pub fn parse_routes(text: &str) -> Vec<KeywordRoute> {
    text.lines().filter_map(parse_route_line).collect()
}

fn parse_route_line(line: &str) -> Option<KeywordRoute> {
    let (phrase, reply) = line.split_once(ROUTE_DELIMITER)?;
    let phrase = phrase.trim();
    let reply = reply.trim();
    if phrase.is_empty() || reply.is_empty() {
        return None;
    }
    Some(KeywordRoute {
        phrase: phrase.to_string(),
        reply: reply.to_string(),
    })
}
