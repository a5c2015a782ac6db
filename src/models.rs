//! Wire and UI data types.
//!
//! Server-owned resources are opaque records: no cross-entity integrity is
//! enforced on the client.  Field names follow the REST payloads
//! (camelCase), except the auth DTOs which the backend defines in
//! snake_case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Auth / session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in_days: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub captcha: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptchaPurpose {
    Register,
    ResetPassword,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptchaRequest {
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<CaptchaPurpose>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub captcha: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// `{ "message": "..." }` returned by register / captcha / reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: crate::constants::DEFAULT_PAGE,
            page_size: crate::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Query pairs; page is at least 1 and page size is clamped to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let size = self.page_size.clamp(1, crate::constants::MAX_PAGE_SIZE);
        vec![
            ("page", self.page.max(1).to_string()),
            ("pageSize", size.to_string()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    #[serde(rename = "3d")]
    ThreeD,
    Video,
    Favorite,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::ThreeD => "3d",
            AssetType::Video => "video",
            AssetType::Favorite => "favorite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetParams {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub cfg_scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub title: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub image_gradient: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub params: AssetParams,
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// Body for `POST /assets`; only the supplied fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<AssetParams>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetSort {
    #[default]
    Date,
    Name,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetFilter {
    /// `None` means "all".
    pub asset_type: Option<AssetType>,
    pub search: String,
    pub sort_by: AssetSort,
}

impl AssetFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(t) = self.asset_type {
            q.push(("type", t.as_str().to_string()));
        }
        if !self.search.is_empty() {
            q.push(("search", self.search.clone()));
        }
        q.push((
            "sortBy",
            match self.sort_by {
                AssetSort::Date => "date",
                AssetSort::Name => "name",
            }
            .to_string(),
        ));
        q
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Folder,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub workflow_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

// ---------------------------------------------------------------------------
// Workflows (list view records, not canvas nodes)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Draft,
    Running,
    Published,
    Template,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 4] = [
        WorkflowStatus::Draft,
        WorkflowStatus::Published,
        WorkflowStatus::Template,
        WorkflowStatus::Running,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStatus::Draft => "draft",
            WorkflowStatus::Running => "running",
            WorkflowStatus::Published => "published",
            WorkflowStatus::Template => "template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub last_edited: String,
    #[serde(default)]
    pub collaborators: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    Draft,
    Reviewing,
    Published,
    Archived,
}

impl ScriptStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptStatus::Draft => "draft",
            ScriptStatus::Reviewing => "reviewing",
            ScriptStatus::Published => "published",
            ScriptStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ScriptStatus,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub scenes: u32,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ScriptStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFormat {
    Txt,
    Pdf,
    Docx,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptImport {
    pub title: String,
    pub content: String,
    pub format: ScriptFormat,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptFilter {
    pub status: Option<ScriptStatus>,
    pub search: String,
}

impl ScriptFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(s) = self.status {
            q.push(("status", s.as_str().to_string()));
        }
        if !self.search.is_empty() {
            q.push(("search", self.search.clone()));
        }
        q
    }
}

// ---------------------------------------------------------------------------
// Plugins
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form category label (模型训练, 图像生成, 工具增强, 工作流).
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub downloads: String,
    #[serde(default)]
    pub installed: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub icon_gradient: String,
    #[serde(default)]
    pub icon_path: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

pub const PLUGIN_CATEGORIES: [&str; 4] = ["模型训练", "图像生成", "工具增强", "工作流"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PluginFilter {
    pub category: Option<String>,
    pub search: String,
    pub installed: Option<bool>,
}

impl PluginFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(c) = &self.category {
            q.push(("category", c.clone()));
        }
        if !self.search.is_empty() {
            q.push(("search", self.search.clone()));
        }
        if let Some(i) = self.installed {
            q.push(("installed", i.to_string()));
        }
        q
    }
}

pub type PluginConfig = HashMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Media,
    Video,
    Text,
    Gen,
    Videogen,
    Post,
    Upscale,
    Controlnet,
}

impl NodeType {
    pub const ALL: [NodeType; 8] = [
        NodeType::Media,
        NodeType::Video,
        NodeType::Text,
        NodeType::Gen,
        NodeType::Videogen,
        NodeType::Post,
        NodeType::Upscale,
        NodeType::Controlnet,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            NodeType::Media => "media",
            NodeType::Video => "video",
            NodeType::Text => "text",
            NodeType::Gen => "gen",
            NodeType::Videogen => "videogen",
            NodeType::Post => "post",
            NodeType::Upscale => "upscale",
            NodeType::Controlnet => "controlnet",
        }
    }

    /// Parse a drag payload tag; anything unknown (including empty) is None.
    pub fn from_tag(tag: &str) -> Option<Self> {
        NodeType::ALL.iter().copied().find(|t| t.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
}

/// Partial update applied by `WorkflowStore::update_node`.  `None` fields
/// are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub label: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub config: Option<HashMap<String, serde_json::Value>>,
}

impl NodePatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn apply(self, node: &mut NodeData) {
        if let Some(x) = self.x {
            node.x = x;
        }
        if let Some(y) = self.y {
            node.y = y;
        }
        if let Some(label) = self.label {
            node.label = Some(label);
        }
        if let Some(content) = self.content {
            node.content = Some(content);
        }
        if let Some(image) = self.image {
            node.image = Some(image);
        }
        if let Some(config) = self.config {
            node.config = Some(config);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<String>,
}

impl Connection {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            source_port: None,
            target_port: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Teams chat mock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp_ms: u64,
}
