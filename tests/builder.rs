//! Workflow document builder: topology, parameter templates, identifier freshness.
mod common;
use botforge::prelude::*;
use botforge::workflow::builder::{
    NORMALIZE_NODE, REPLY_BRANCH_NODE, RESPOND_OK_NODE, RESPOND_VERIFICATION_NODE, SEND_API_URL,
    SEND_REPLY_NODE, VERIFICATION_BRANCH_NODE, WEBHOOK_NODE,
};
use std::collections::HashSet;

#[test]
fn test_document_has_exactly_seven_stages() {
    let document = common::build_sample_document();
    assert_eq!(document.nodes.len(), 7);

    let names: Vec<&str> = document.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            WEBHOOK_NODE,
            NORMALIZE_NODE,
            VERIFICATION_BRANCH_NODE,
            RESPOND_VERIFICATION_NODE,
            REPLY_BRANCH_NODE,
            SEND_REPLY_NODE,
            RESPOND_OK_NODE,
        ]
    );
}

#[test]
fn test_fixed_connection_topology() {
    let document = common::build_sample_document();

    // Five source entries, seven downstream references in total.
    assert_eq!(document.connections.len(), 5);
    assert_eq!(document.edge_count(), 7);

    let verification = &document.connections[VERIFICATION_BRANCH_NODE];
    assert_eq!(verification.main.len(), 2);
    assert_eq!(verification.main[0][0].node, RESPOND_VERIFICATION_NODE);
    assert_eq!(verification.main[1][0].node, REPLY_BRANCH_NODE);

    let reply_branch = &document.connections[REPLY_BRANCH_NODE];
    assert_eq!(reply_branch.main[0][0].node, SEND_REPLY_NODE);
    assert_eq!(reply_branch.main[1][0].node, RESPOND_OK_NODE);

    // The send stage and the false branch both acknowledge through Respond OK.
    assert_eq!(
        document.connections[SEND_REPLY_NODE].main[0][0].node,
        RESPOND_OK_NODE
    );
    assert!(!document.connections.contains_key(RESPOND_OK_NODE));
}

#[test]
fn test_document_is_generated_inactive() {
    let document = common::build_sample_document();
    assert!(!document.active);
    assert_eq!(document.name, "Acme Support Bot");
    assert_eq!(document.settings.timezone, "Europe/Berlin");
}

#[test]
fn test_blank_webhook_path_derives_slug_from_name() {
    let settings = BotSettings {
        automation_name: "My Bot!".to_string(),
        webhook_path: String::new(),
        ..Default::default()
    };
    let document = WorkflowBuilder::new(settings, vec![]).build();
    let webhook = document.node("Webhook").unwrap();
    assert_eq!(webhook.parameters["path"], "my-bot");
}

#[test]
fn test_explicit_webhook_path_passes_through_verbatim() {
    let settings = BotSettings {
        automation_name: "My Bot!".to_string(),
        webhook_path: "custom/messenger-hook".to_string(),
        ..Default::default()
    };
    let document = WorkflowBuilder::new(settings, vec![]).build();
    let webhook = document.node("Webhook").unwrap();
    assert_eq!(webhook.parameters["path"], "custom/messenger-hook");
}

#[test]
fn test_webhook_node_accepts_both_methods_and_carries_registration_id() {
    let document = common::build_sample_document();
    let webhook = document.node(WEBHOOK_NODE).unwrap();
    assert_eq!(webhook.node_type, "n8n-nodes-base.webhook");
    assert_eq!(
        webhook.parameters["httpMethod"],
        serde_json::json!(["GET", "POST"])
    );
    assert_eq!(webhook.parameters["responseMode"], "responseNode");
    assert!(webhook.webhook_id.is_some());
}

#[test]
fn test_send_reply_stage_embeds_token_and_placeholders() {
    let document = common::build_sample_document();
    let send = document.node(SEND_REPLY_NODE).unwrap();
    assert_eq!(send.node_type, "n8n-nodes-base.httpRequest");
    assert_eq!(send.parameters["url"], SEND_API_URL);
    assert_eq!(
        send.parameters["queryParameters"]["parameters"][0]["value"],
        "EAAGtoken"
    );

    let body = send.parameters["jsonBody"].as_str().unwrap();
    assert!(body.contains("{{ $json.senderId }}"));
    assert!(body.contains("{{ $json.replyText }}"));
}

#[test]
fn test_classification_script_embeds_settings_and_ordered_routes() {
    let settings = BotSettings {
        verify_token: "tok\"en".to_string(),
        default_reply: "Fallback".to_string(),
        ..Default::default()
    };
    let routes = parse_routes("Status => R1\nREFUND => R2");
    let document = WorkflowBuilder::new(settings, routes).build();

    let script = document.node(NORMALIZE_NODE).unwrap().parameters["jsCode"]
        .as_str()
        .unwrap()
        .to_string();

    // Settings land as JSON-escaped literals.
    assert!(script.contains(r#""tok\"en""#));
    assert!(script.contains(r#""Fallback""#));

    // Phrases are lowercased at embed time and keep configuration order.
    let status_at = script.find(r#""status""#).unwrap();
    let refund_at = script.find(r#""refund""#).unwrap();
    assert!(status_at < refund_at);
    assert!(script.contains(r#""R1""#));
    assert!(script.contains(r#""R2""#));

    // The handshake contract is part of the script.
    assert!(script.contains("hub.verify_token"));
    assert!(script.contains("hub.challenge"));
    assert!(script.contains("403"));
}

#[test]
fn test_identifiers_are_unique_within_one_generation() {
    let document = common::build_sample_document();
    let mut ids = HashSet::new();
    ids.insert(document.id.clone());
    ids.insert(document.version_id.clone());
    for node in &document.nodes {
        ids.insert(node.id.clone());
        if let Some(webhook_id) = &node.webhook_id {
            ids.insert(webhook_id.clone());
        }
    }
    // 1 workflow id + 1 version id + 7 node ids + 1 webhook id
    assert_eq!(ids.len(), 10);
    assert_eq!(document.id.len(), 21);
}

#[test]
fn test_two_builds_differ_only_in_ids_and_timestamps() {
    let first = WorkflowBuilder::new(common::sample_settings(), common::sample_routes()).build();
    let second = WorkflowBuilder::new(common::sample_settings(), common::sample_routes()).build();

    assert_ne!(first.id, second.id);
    assert_ne!(first.version_id, second.version_id);

    assert_eq!(first.connections, second.connections);
    assert_eq!(first.nodes.len(), second.nodes.len());
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.node_type, b.node_type);
        assert_eq!(a.type_version, b.type_version);
        assert_eq!(a.position, b.position);
        assert_eq!(a.parameters, b.parameters);
    }
}

#[test]
fn test_builder_is_total_over_empty_inputs() {
    let settings = BotSettings {
        automation_name: String::new(),
        verify_token: String::new(),
        page_access_token: String::new(),
        webhook_path: String::new(),
        default_reply: String::new(),
        timezone: String::new(),
    };
    let document = WorkflowBuilder::new(settings, vec![]).build();
    assert_eq!(document.nodes.len(), 7);
    // Empty name yields an empty derived path, embedded as-is.
    assert_eq!(document.node("Webhook").unwrap().parameters["path"], "");
}
