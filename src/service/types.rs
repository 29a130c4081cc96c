//! JSON request/response shapes for the prove API (spec §6). No HTTP
//! transport lives here — these are the wire types a front end serializes
//! against; going from one to the other is [`super::prove::prove`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveRequest {
    pub logic: String,
    pub argument: ArgumentRequest,
    pub output: OutputRequest,
    #[serde(default = "default_true")]
    pub rank_optimizations: bool,
    #[serde(default = "default_true")]
    pub group_optimizations: bool,
    #[serde(default = "default_true")]
    pub build_models: bool,
    #[serde(default)]
    pub max_steps: Option<u32>,
    #[serde(default)]
    pub writer_registry: Option<String>,
}

/// `(index, subscript, arity)` triples declaring the predicates the
/// argument's sentences use, beyond the two system predicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentRequest {
    pub conclusion: String,
    #[serde(default)]
    pub premises: Vec<String>,
    pub notation: String,
    #[serde(default)]
    pub predicates: Vec<(i32, u32, usize)>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Html,
    Latex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRequest {
    pub format: OutputFormat,
    pub notation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveResponse {
    pub result: ProveResult,
    pub writer: WriterOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveResult {
    pub valid: bool,
    pub completed: bool,
    pub premature: bool,
    pub stats: Stats,
    pub tree: TreeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelView>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub steps: u32,
    pub branches: usize,
    pub open_branches: usize,
    pub closed_branches: usize,
    pub nodes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterOutput {
    pub format: OutputFormat,
    pub notation: String,
    pub output: String,
}

/// One branch, rendered for a nested-set UI tree (left/right/width per the
/// classic preorder-interval layout). `node_segment` holds only the nodes
/// this branch added after its fork point — the shared prefix is drawn
/// once, on the ancestor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: u32,
    pub step: u32,
    pub depth: u32,
    pub left: u32,
    pub right: u32,
    pub width: u32,
    pub has_open: bool,
    pub has_closed: bool,
    pub closed: bool,
    pub leaf: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<usize>,
    pub node_segment: Vec<NodeView>,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    pub id: u32,
    pub step: u32,
    pub ticked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<(i32, i32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub ellipsis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelView {
    pub worlds: Vec<WorldView>,
    pub access: Vec<(i32, i32)>,
    pub is_countermodel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldView {
    pub world: i32,
    pub values: BTreeMap<String, String>,
}

/// The `{errors: {field: message}}` envelope the spec's 400/408 responses
/// use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, String>,
}
