use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The generated artifact: an n8n workflow in its import/export JSON shape.
///
/// A `WorkflowDocument` is a pure derived value. It is fully determined by the
/// settings and route list it was built from, plus freshly generated identifiers
/// and the generation timestamp - two builds from the same inputs differ only in
/// those.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    /// Nano id, unique per generation.
    pub id: String,
    pub name: String,
    /// Always `false`: the document is imported inactive and armed by the user.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub nodes: Vec<WorkflowNode>,
    pub connections: ConnectionMap,
    pub settings: WorkflowSettings,
    pub version_id: String,
}

/// One pipeline stage. `name` doubles as the connection key, `node_type` is the
/// external engine's node-type identifier, `position` is a canvas layout hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: u32,
    pub position: [i64; 2],
    pub parameters: serde_json::Value,
    /// Webhook registration id, present on the intake node only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
}

/// Connection mapping: source node name -> ordered output branches -> downstream
/// references. A `BTreeMap` keeps serialization order stable across builds.
pub type ConnectionMap = BTreeMap<String, NodePorts>;

/// The output ports of one node. `main[0]` is the first (or true) branch,
/// `main[1]` the false branch of a conditional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePorts {
    pub main: Vec<Vec<ConnectionRef>>,
}

/// A reference to a downstream node's input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRef {
    pub node: String,
    #[serde(rename = "type")]
    pub port: String,
    pub index: u32,
}

impl ConnectionRef {
    pub fn main(node: &str) -> Self {
        Self {
            node: node.to_string(),
            port: "main".to_string(),
            index: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    pub timezone: String,
}

impl WorkflowDocument {
    /// Finds a node by its stable pipeline-stage name.
    pub fn node(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Total number of downstream references across all output branches.
    pub fn edge_count(&self) -> usize {
        self.connections
            .values()
            .flat_map(|ports| &ports.main)
            .map(|branch| branch.len())
            .sum()
    }
}
