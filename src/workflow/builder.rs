use crate::form::BotSettings;
use crate::routes::KeywordRoute;
use crate::workflow::code::classification_script;
use crate::workflow::document::{
    ConnectionMap, ConnectionRef, NodePorts, WorkflowDocument, WorkflowNode, WorkflowSettings,
};
use crate::workflow::ids;
use chrono::Utc;
use serde_json::json;

// Stable stage names; these double as the keys of the connection map.
pub const WEBHOOK_NODE: &str = "Webhook";
pub const NORMALIZE_NODE: &str = "Normalize Event";
pub const VERIFICATION_BRANCH_NODE: &str = "Is Verification?";
pub const RESPOND_VERIFICATION_NODE: &str = "Respond Verification";
pub const REPLY_BRANCH_NODE: &str = "Should Reply?";
pub const SEND_REPLY_NODE: &str = "Send Reply";
pub const RESPOND_OK_NODE: &str = "Respond OK";

// External engine node-type identifiers. Part of the import contract; changing
// any of these breaks compatibility with n8n.
const WEBHOOK_TYPE: &str = "n8n-nodes-base.webhook";
const CODE_TYPE: &str = "n8n-nodes-base.code";
const IF_TYPE: &str = "n8n-nodes-base.if";
const RESPOND_TYPE: &str = "n8n-nodes-base.respondToWebhook";
const HTTP_REQUEST_TYPE: &str = "n8n-nodes-base.httpRequest";

/// The Messenger Send API endpoint the reply stage posts to.
pub const SEND_API_URL: &str = "https://graph.facebook.com/v17.0/me/messages";

/// Builds the fixed seven-stage pipeline document from the user's settings and
/// parsed routes.
///
/// The builder is total: empty strings and an empty route list are valid inputs
/// (every message then falls through to the default reply). Apart from fresh
/// identifiers and the current timestamp, the output is fully determined by its
/// inputs.
pub struct WorkflowBuilder {
    settings: BotSettings,
    routes: Vec<KeywordRoute>,
}

impl WorkflowBuilder {
    pub fn new(settings: BotSettings, routes: Vec<KeywordRoute>) -> Self {
        Self { settings, routes }
    }

    pub fn build(self) -> WorkflowDocument {
        let now = Utc::now();
        let nodes = self.build_nodes();

        WorkflowDocument {
            id: ids::workflow_id(),
            name: self.settings.automation_name.clone(),
            active: false,
            created_at: now,
            updated_at: now,
            nodes,
            connections: build_connections(),
            settings: WorkflowSettings {
                timezone: self.settings.timezone.clone(),
            },
            version_id: ids::version_id(),
        }
    }

    fn build_nodes(&self) -> Vec<WorkflowNode> {
        vec![
            self.webhook_node(),
            self.normalize_node(),
            if_node(VERIFICATION_BRANCH_NODE, "isVerification", [680, 300]),
            respond_node(
                RESPOND_VERIFICATION_NODE,
                json!("={{ $json.body }}"),
                json!("={{ $json.statusCode }}"),
                [900, 160],
            ),
            if_node(REPLY_BRANCH_NODE, "shouldReply", [900, 440]),
            self.send_reply_node(),
            respond_node(
                RESPOND_OK_NODE,
                json!(crate::workflow::code::ACK_BODY),
                json!(200),
                [1340, 440],
            ),
        ]
    }

    /// Stage 1: webhook intake. A single registration accepts both the GET
    /// verification handshake and POSTed message deliveries.
    fn webhook_node(&self) -> WorkflowNode {
        WorkflowNode {
            id: ids::node_id(),
            name: WEBHOOK_NODE.to_string(),
            node_type: WEBHOOK_TYPE.to_string(),
            type_version: 2,
            position: [240, 300],
            parameters: json!({
                "multipleMethods": true,
                "httpMethod": ["GET", "POST"],
                "path": self.settings.effective_webhook_path(),
                "responseMode": "responseNode",
                "options": {},
            }),
            webhook_id: Some(ids::webhook_id()),
        }
    }

    /// Stage 2: the Code node carrying the embedded classification script.
    fn normalize_node(&self) -> WorkflowNode {
        WorkflowNode {
            id: ids::node_id(),
            name: NORMALIZE_NODE.to_string(),
            node_type: CODE_TYPE.to_string(),
            type_version: 2,
            position: [460, 300],
            parameters: json!({
                "mode": "runOnceForAllItems",
                "jsCode": classification_script(
                    &self.settings.verify_token,
                    &self.settings.default_reply,
                    &self.routes,
                ),
            }),
            webhook_id: None,
        }
    }

    /// Stage 6: outbound reply via the Messenger Send API. The page access token
    /// is embedded verbatim as a query parameter; sender id and reply text are
    /// placeholder expressions resolved by the engine at run time.
    fn send_reply_node(&self) -> WorkflowNode {
        WorkflowNode {
            id: ids::node_id(),
            name: SEND_REPLY_NODE.to_string(),
            node_type: HTTP_REQUEST_TYPE.to_string(),
            type_version: 4,
            position: [1120, 340],
            parameters: json!({
                "method": "POST",
                "url": SEND_API_URL,
                "sendQuery": true,
                "queryParameters": {
                    "parameters": [
                        { "name": "access_token", "value": self.settings.page_access_token }
                    ]
                },
                "sendBody": true,
                "specifyBody": "json",
                "jsonBody": "={ \"recipient\": { \"id\": \"{{ $json.senderId }}\" }, \"messaging_type\": \"RESPONSE\", \"message\": { \"text\": \"{{ $json.replyText }}\" } }",
                "options": {},
            }),
            webhook_id: None,
        }
    }
}

/// A boolean If stage branching on one field of the normalized event.
fn if_node(name: &str, field: &str, position: [i64; 2]) -> WorkflowNode {
    WorkflowNode {
        id: ids::node_id(),
        name: name.to_string(),
        node_type: IF_TYPE.to_string(),
        type_version: 1,
        position,
        parameters: json!({
            "conditions": {
                "boolean": [
                    { "value1": format!("={{{{ $json.{field} }}}}"), "value2": true }
                ]
            },
        }),
        webhook_id: None,
    }
}

/// A respond-to-webhook stage with a fixed or expression-driven body and code.
fn respond_node(
    name: &str,
    response_body: serde_json::Value,
    response_code: serde_json::Value,
    position: [i64; 2],
) -> WorkflowNode {
    WorkflowNode {
        id: ids::node_id(),
        name: name.to_string(),
        node_type: RESPOND_TYPE.to_string(),
        type_version: 1,
        position,
        parameters: json!({
            "respondWith": "text",
            "responseBody": response_body,
            "options": { "responseCode": response_code },
        }),
        webhook_id: None,
    }
}

/// The fixed directed topology: five source entries, seven downstream references.
///
/// ```text
/// Webhook -> Normalize -> Is Verification? -true-> Respond Verification
///                                          -false-> Should Reply? -true-> Send Reply -> Respond OK
///                                                                 -false-> Respond OK
/// ```
fn build_connections() -> ConnectionMap {
    let mut connections = ConnectionMap::new();
    connections.insert(
        WEBHOOK_NODE.to_string(),
        NodePorts {
            main: vec![vec![ConnectionRef::main(NORMALIZE_NODE)]],
        },
    );
    connections.insert(
        NORMALIZE_NODE.to_string(),
        NodePorts {
            main: vec![vec![ConnectionRef::main(VERIFICATION_BRANCH_NODE)]],
        },
    );
    connections.insert(
        VERIFICATION_BRANCH_NODE.to_string(),
        NodePorts {
            main: vec![
                vec![ConnectionRef::main(RESPOND_VERIFICATION_NODE)],
                vec![ConnectionRef::main(REPLY_BRANCH_NODE)],
            ],
        },
    );
    connections.insert(
        REPLY_BRANCH_NODE.to_string(),
        NodePorts {
            main: vec![
                vec![ConnectionRef::main(SEND_REPLY_NODE)],
                vec![ConnectionRef::main(RESPOND_OK_NODE)],
            ],
        },
    );
    connections.insert(
        SEND_REPLY_NODE.to_string(),
        NodePorts {
            main: vec![vec![ConnectionRef::main(RESPOND_OK_NODE)]],
        },
    );
    connections
}
