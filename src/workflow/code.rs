//! The classification script embedded into the "Normalize Event" Code node.
//!
//! This is a data/code boundary: the script is emitted as an opaque string
//! parameter for the external n8n engine and is never evaluated here. The Rust
//! counterpart of its routing logic lives in [`crate::simulator`], which must
//! stay behaviorally identical.

use crate::routes::KeywordRoute;
use serde_json::json;

/// Body sent back for plain acknowledgements, per the Messenger platform docs.
pub const ACK_BODY: &str = "EVENT_RECEIVED";

/// Body sent back with a 403 when the verify token does not match.
pub const MISMATCH_BODY: &str = "Verification token mismatch";

const SCRIPT_TEMPLATE: &str = r#"const req = $input.first().json;
const query = req.query || {};

// Subscription verification handshake (GET from the Messenger platform).
if (query['hub.mode'] === 'subscribe') {
  if (query['hub.verify_token'] === __VERIFY_TOKEN__) {
    return [{ json: { isVerification: true, shouldReply: false, statusCode: 200, body: String(query['hub.challenge'] || '') } }];
  }
  return [{ json: { isVerification: true, shouldReply: false, statusCode: 403, body: __MISMATCH_BODY__ } }];
}

// Message delivery (POST). Only the first messaging entry is considered.
const body = req.body || {};
const entry = Array.isArray(body.entry) ? body.entry[0] : undefined;
const messaging = entry && Array.isArray(entry.messaging) ? entry.messaging[0] : undefined;
const senderId = messaging && messaging.sender ? messaging.sender.id : '';
const text = messaging && messaging.message ? messaging.message.text : '';

if (!senderId || !text) {
  return [{ json: { isVerification: false, shouldReply: false, statusCode: 200, body: __ACK_BODY__ } }];
}

// First configured route whose phrase is contained in the message wins.
const routes = __ROUTES__;
const needle = text.toLowerCase();
let replyText = __DEFAULT_REPLY__;
let matchedPhrase = null;
for (const route of routes) {
  if (needle.includes(route.phrase)) {
    replyText = route.reply;
    matchedPhrase = route.phrase;
    break;
  }
}

return [{ json: { isVerification: false, shouldReply: true, senderId: senderId, replyText: replyText, matchedPhrase: matchedPhrase, statusCode: 200, body: __ACK_BODY__ } }];
"#;

/// Renders the classification script with the configured settings embedded as
/// JSON-escaped literals. Phrases are lowercased here so the script only has to
/// lowercase the message text.
pub fn classification_script(
    verify_token: &str,
    default_reply: &str,
    routes: &[KeywordRoute],
) -> String {
    let embedded_routes: Vec<serde_json::Value> = routes
        .iter()
        .map(|route| {
            json!({
                "phrase": route.phrase.to_lowercase(),
                "reply": route.reply,
            })
        })
        .collect();

    SCRIPT_TEMPLATE
        .replace("__VERIFY_TOKEN__", &js_string(verify_token))
        .replace("__DEFAULT_REPLY__", &js_string(default_reply))
        .replace("__MISMATCH_BODY__", &js_string(MISMATCH_BODY))
        .replace("__ACK_BODY__", &js_string(ACK_BODY))
        .replace("__ROUTES__", &json!(embedded_routes).to_string())
}

/// A JSON string literal is also a valid JS string literal, so serde_json does
/// the escaping.
fn js_string(value: &str) -> String {
    json!(value).to_string()
}
