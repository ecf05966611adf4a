//! A Rust mirror of the classification script the builder embeds into the
//! "Normalize Event" node.
//!
//! The generated workflow is never executed by this crate, so the simulator is
//! the only way to exercise the routing contract locally: it must make exactly
//! the decisions the embedded script would make. Keep the two in lockstep.

use crate::form::BotSettings;
use crate::routes::KeywordRoute;
use crate::workflow::code::{ACK_BODY, MISMATCH_BODY};
use serde::Serialize;

/// What the normalize stage would produce for one inbound webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SimulationOutcome {
    /// Verification handshake accepted: HTTP 200, challenge echoed back.
    VerificationOk { challenge: String },
    /// Verify token mismatch: HTTP 403.
    VerificationRejected,
    /// Missing sender id or message text: HTTP 200, no reply sent.
    Acknowledge,
    /// A reply is sent back to the sender.
    Reply {
        sender_id: String,
        reply_text: String,
        /// The winning route's phrase, or `None` when the default reply fired.
        matched_phrase: Option<String>,
    },
}

impl SimulationOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            SimulationOutcome::VerificationRejected => 403,
            _ => 200,
        }
    }

    /// The body the webhook response stage would return.
    pub fn response_body(&self) -> String {
        match self {
            SimulationOutcome::VerificationOk { challenge } => challenge.clone(),
            SimulationOutcome::VerificationRejected => MISMATCH_BODY.to_string(),
            SimulationOutcome::Acknowledge | SimulationOutcome::Reply { .. } => {
                ACK_BODY.to_string()
            }
        }
    }
}

/// Replays the embedded routing logic against simulated inbound events.
pub struct Simulator {
    verify_token: String,
    default_reply: String,
    routes: Vec<KeywordRoute>,
}

impl Simulator {
    pub fn new(verify_token: String, default_reply: String, routes: Vec<KeywordRoute>) -> Self {
        Self {
            verify_token,
            default_reply,
            routes,
        }
    }

    pub fn from_settings(settings: &BotSettings, routes: &[KeywordRoute]) -> Self {
        Self::new(
            settings.verify_token.clone(),
            settings.default_reply.clone(),
            routes.to_vec(),
        )
    }

    /// The subscription-verification handshake: echo the challenge on a token
    /// match, reject otherwise.
    pub fn verification(&self, verify_token: &str, challenge: &str) -> SimulationOutcome {
        if verify_token == self.verify_token {
            SimulationOutcome::VerificationOk {
                challenge: challenge.to_string(),
            }
        } else {
            SimulationOutcome::VerificationRejected
        }
    }

    /// An inbound message event. An absent sender id or message text yields a
    /// plain acknowledgement; otherwise the first matching route (or the default
    /// reply) decides the response.
    pub fn message(&self, sender_id: &str, text: &str) -> SimulationOutcome {
        if sender_id.is_empty() || text.is_empty() {
            return SimulationOutcome::Acknowledge;
        }

        let needle = text.to_lowercase();
        match self.match_route(&needle) {
            Some(route) => SimulationOutcome::Reply {
                sender_id: sender_id.to_string(),
                reply_text: route.reply.clone(),
                matched_phrase: Some(route.phrase.clone()),
            },
            None => SimulationOutcome::Reply {
                sender_id: sender_id.to_string(),
                reply_text: self.default_reply.clone(),
                matched_phrase: None,
            },
        }
    }

    /// First route in configuration order whose phrase is a substring of the
    /// lowercased message. Deliberately simple containment - no word boundaries,
    /// no stemming - to stay compatible with already-generated workflows.
    fn match_route(&self, needle: &str) -> Option<&KeywordRoute> {
        self.routes
            .iter()
            .find(|route| needle.contains(&route.phrase.to_lowercase()))
    }
}
