//! Identifier generation for freshly built documents.
//!
//! Uniqueness is only required within a single generation; nothing is persisted,
//! so no coordination across builds is needed.

use rand::Rng;
use uuid::Uuid;

const NANO_ID_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NANO_ID_LEN: usize = 21;

/// A 21-character nano id, the format n8n uses for workflow primary keys.
pub fn workflow_id() -> String {
    let mut rng = rand::rng();
    (0..NANO_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..NANO_ID_ALPHABET.len());
            NANO_ID_ALPHABET[idx] as char
        })
        .collect()
}

pub fn node_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn version_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn webhook_id() -> String {
    Uuid::new_v4().to_string()
}
