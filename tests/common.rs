//! Common test utilities for building settings and route fixtures.
use botforge::prelude::*;

/// Settings as a user would have filled the form, webhook path left blank.
#[allow(dead_code)]
pub fn sample_settings() -> BotSettings {
    BotSettings {
        automation_name: "Acme Support Bot".to_string(),
        verify_token: "acme-verify-123".to_string(),
        page_access_token: "EAAGtoken".to_string(),
        webhook_path: String::new(),
        default_reply: "Thanks! A human will get back to you.".to_string(),
        timezone: "Europe/Berlin".to_string(),
    }
}

/// The textarea content backing [`sample_routes`].
#[allow(dead_code)]
pub fn sample_routes_text() -> &'static str {
    "status => Your order is on its way.\nrefund => Refunds are processed within 3 days.\nhours => We are open 9 to 5, Monday to Friday."
}

#[allow(dead_code)]
pub fn sample_routes() -> Vec<KeywordRoute> {
    parse_routes(sample_routes_text())
}

#[allow(dead_code)]
pub fn build_sample_document() -> WorkflowDocument {
    WorkflowBuilder::new(sample_settings(), sample_routes()).build()
}
