//! Team workspace: tool canvas on the left, AI chat on the right, with a
//! draggable divider between them.

use crate::components::avatar::{avatar, AvatarSize};
use crate::components::split_panel::PanelResizer;
use crate::constants::{ID_SPLIT_CONTAINER, ID_SPLIT_HANDLE, ID_SPLIT_PANEL};
use crate::messages::Field;
use crate::models::{ChatMessage, ChatRole};
use crate::router::Route;
use crate::utils::escape_html;

pub const DEFAULT_TITLE: &str = "团队工作区";
pub const NEW_PROJECT_TITLE: &str = "新项目";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamsTool {
    #[default]
    Storyboard,
    Timeline,
    Assets,
}

impl TeamsTool {
    pub const ALL: [TeamsTool; 3] = [TeamsTool::Storyboard, TeamsTool::Timeline, TeamsTool::Assets];

    pub fn id(self) -> &'static str {
        match self {
            TeamsTool::Storyboard => "storyboard",
            TeamsTool::Timeline => "timeline",
            TeamsTool::Assets => "assets",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamsTool::Storyboard => "故事板",
            TeamsTool::Timeline => "时间线",
            TeamsTool::Assets => "素材库",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamsPage {
    pub title: String,
    pub tool: TeamsTool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub resizer: PanelResizer,
}

impl Default for TeamsPage {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tool: TeamsTool::default(),
            messages: Vec::new(),
            input: String::new(),
            resizer: PanelResizer::default(),
        }
    }
}

fn at(date: (i32, u32, u32), time: (u32, u32)) -> u64 {
    chrono::NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .and_then(|d| d.and_hms_opt(time.0, time.1, 0))
        .map(|t| t.and_utc().timestamp_millis().max(0) as u64)
        .unwrap_or_default()
}

fn msg(id: &str, role: ChatRole, content: &str, timestamp_ms: u64) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        role,
        content: content.to_string(),
        timestamp_ms,
    }
}

/// Demo conversations keyed by project id.
pub fn sample_project(id: &str) -> Option<(&'static str, Vec<ChatMessage>)> {
    use ChatRole::{Assistant, User};
    match id {
        "1" => Some((
            "品牌视觉设计",
            vec![
                msg("1", User, "帮我设计一个现代感的品牌 Logo", at((2024, 1, 15), (10, 0))),
                msg("2", Assistant, "好的，我来为您设计一个现代感的品牌 Logo。请问您希望 Logo 传达什么样的品牌理念？", at((2024, 1, 15), (10, 1))),
                msg("3", User, "希望传达创新和科技感", at((2024, 1, 15), (10, 2))),
                msg("4", Assistant, "我理解了，我会设计一个融合创新与科技元素的 Logo。让我为您生成几个方案...", at((2024, 1, 15), (10, 3))),
            ],
        )),
        "2" => Some((
            "3D 产品展示",
            vec![
                msg("1", User, "创建一个 3D 产品展示动画", at((2024, 1, 14), (14, 0))),
                msg("2", Assistant, "好的，请告诉我产品的类型和您希望展示的特点？", at((2024, 1, 14), (14, 1))),
            ],
        )),
        "3" => Some(("社交媒体海报", Vec::new())),
        "4" => Some((
            "营销素材",
            vec![
                msg("1", User, "帮我制作一组营销素材", at((2024, 1, 10), (9, 0))),
                msg("2", Assistant, "好的，请问是什么类型的营销素材？需要多少张？", at((2024, 1, 10), (9, 1))),
                msg("3", User, "需要 5 张社交媒体海报，主题是春节促销", at((2024, 1, 10), (9, 2))),
                msg("4", Assistant, "明白了，我会为您设计 5 张春节促销主题的社交媒体海报。请稍等...", at((2024, 1, 10), (9, 3))),
            ],
        )),
        _ => None,
    }
}

impl TeamsPage {
    /// Page state for `/teams?projectId=…` or `/teams?new=true`.
    pub fn open(project_id: Option<&str>, new_project: bool) -> Self {
        let mut page = Self::default();
        if let Some((title, messages)) = project_id.and_then(sample_project) {
            page.title = title.to_string();
            page.messages = messages;
        } else if new_project {
            page.title = NEW_PROJECT_TITLE.to_string();
        }
        page
    }

    /// Append the user's draft.  `false` when the draft is blank.
    pub fn push_user_message(&mut self, now_ms: u64) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let content = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage {
            id: now_ms.to_string(),
            role: ChatRole::User,
            content,
            timestamp_ms: now_ms,
        });
        true
    }

    pub fn push_assistant_message(&mut self, content: &str, now_ms: u64) {
        // +1 keeps the id distinct from a user message sent in the same ms
        let id = (now_ms + 1).to_string();
        self.messages.push(ChatMessage {
            id,
            role: ChatRole::Assistant,
            content: content.to_string(),
            timestamp_ms: now_ms,
        });
    }
}

fn tool_tabs(active: TeamsTool) -> String {
    TeamsTool::ALL
        .iter()
        .map(|t| {
            format!(
                r#"<button type="button" class="tool-tab{}" data-action="select-tool" data-arg="{}">{}</button>"#,
                if *t == active { " active" } else { "" },
                t.id(),
                t.label()
            )
        })
        .collect()
}

fn workspace(tool: TeamsTool) -> String {
    match tool {
        TeamsTool::Storyboard => r#"<div class="workspace-empty"><h2>开始！</h2><p class="muted">请在右侧聊天框中输入您的创作需求，</p><p class="muted">开始创作吧！</p></div>"#.to_string(),
        TeamsTool::Timeline => r#"<div class="workspace-empty timeline"><div class="timeline-track"></div><p class="muted">时间线</p></div>"#.to_string(),
        TeamsTool::Assets => format!(
            r#"<div class="workspace-empty"><p class="muted">素材库</p><a class="link" href="{}">打开资产库</a></div>"#,
            Route::Assets.hash()
        ),
    }
}

fn chat_message(m: &ChatMessage) -> String {
    let side = match m.role {
        ChatRole::User => "from-user",
        ChatRole::Assistant => "from-assistant",
    };
    format!(
        r#"<div class="chat-row {}"><div class="chat-bubble">{}</div></div>"#,
        side,
        escape_html(&m.content)
    )
}

pub fn view(page: &TeamsPage) -> String {
    let messages = if page.messages.is_empty() {
        r#"<p class="chat-empty muted">暂无消息</p>"#.to_string()
    } else {
        page.messages.iter().map(chat_message).collect()
    };
    format!(
        r#"<div class="teams-page"><header class="teams-header"><div class="teams-brand"><a class="logo-text" href="{home}">WeiMeng</a><span class="tag">Teams</span><input id="{title_field}" class="title-input" data-field="{title_field}" value="{title}" placeholder="输入标题..."></div><div class="teams-actions"><span class="credits">⚡ 500</span>{me}<button type="button" class="btn">导出</button></div></header><div id="{container}" class="teams-body"><div class="teams-left"><nav class="tool-tabs">{tabs}</nav><div class="workspace">{workspace}</div></div><div id="{handle}" class="split-handle{dragging}" data-split-handle></div><aside id="{panel}" class="teams-right" style="width: {width}px"><div class="chat-head"><span>AI 助手</span></div><div class="chat-log">{messages}</div><div class="chat-input"><textarea id="{chat_field}" data-field="{chat_field}" data-autogrow rows="1" placeholder="请输入你的消息...">{input}</textarea><div class="chat-tools"><button type="button" class="pill">模型</button><button type="button" class="pill">技能</button><button type="button" class="pill">元素</button><button type="button" class="send-btn" data-action="chat-send" aria-label="发送">➤</button></div></div></aside></div></div>"#,
        home = Route::Dashboard.hash(),
        title_field = Field::TeamsTitle.id(),
        title = escape_html(&page.title),
        me = avatar(None, "子君", Some("子"), AvatarSize::Sm),
        container = ID_SPLIT_CONTAINER,
        tabs = tool_tabs(page.tool),
        workspace = workspace(page.tool),
        handle = ID_SPLIT_HANDLE,
        dragging = if page.resizer.dragging { " dragging" } else { "" },
        panel = ID_SPLIT_PANEL,
        width = page.resizer.width,
        messages = messages,
        chat_field = Field::TeamsChatInput.id(),
        input = escape_html(&page.input),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_sample_projects() {
        let page = TeamsPage::open(Some("1"), false);
        assert_eq!(page.title, "品牌视觉设计");
        assert_eq!(page.messages.len(), 4);
        assert_eq!(TeamsPage::open(Some("2"), false).messages.len(), 2);
        assert!(TeamsPage::open(Some("3"), false).messages.is_empty());
        assert_eq!(TeamsPage::open(Some("4"), false).messages[3].role, ChatRole::Assistant);
    }

    #[test]
    fn new_and_unknown_projects() {
        assert_eq!(TeamsPage::open(None, true).title, NEW_PROJECT_TITLE);
        assert_eq!(TeamsPage::open(Some("99"), false).title, DEFAULT_TITLE);
        assert_eq!(TeamsPage::open(None, false).title, DEFAULT_TITLE);
    }

    #[test]
    fn blank_draft_is_not_sent() {
        let mut page = TeamsPage::default();
        page.input = "   ".into();
        assert!(!page.push_user_message(1));
        page.input = "你好".into();
        assert!(page.push_user_message(10));
        assert_eq!(page.input, "");
        page.push_assistant_message("ok", 10);
        assert_eq!(page.messages[0].id, "10");
        assert_eq!(page.messages[1].id, "11");
    }

    #[test]
    fn panel_width_in_markup() {
        let mut page = TeamsPage::default();
        assert!(view(&page).contains("width: 600px"));
        page.resizer.width = 411.0;
        assert!(view(&page).contains("width: 411px"));
        assert!(view(&page).contains("暂无消息"));
    }
}
