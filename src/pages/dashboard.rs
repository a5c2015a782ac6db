use crate::constants::{MODEL_PRIMARY, MODEL_SECONDARY};
use crate::messages::Field;
use crate::router::Route;
use crate::utils::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Primary,
    Secondary,
}

impl Model {
    pub fn name(self) -> &'static str {
        match self {
            Model::Primary => MODEL_PRIMARY,
            Model::Secondary => MODEL_SECONDARY,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Model::Primary => Model::Secondary,
            Model::Secondary => Model::Primary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardPage {
    pub prompt: String,
    pub agent_enabled: bool,
    pub model: Model,
    pub web_search: bool,
}

/// Auto-growing textarea height: content height up to `max`, after which
/// the box scrolls.
pub fn autogrow_height(scroll_height: f64, max: f64) -> (f64, &'static str) {
    if scroll_height > max {
        (max, "auto")
    } else {
        (scroll_height, "hidden")
    }
}

pub const PROMPT_MAX_HEIGHT: f64 = 300.0;

struct RecentProject {
    id: &'static str,
    name: &'static str,
    when: &'static str,
    gradient: &'static str,
}

const RECENT_PROJECTS: [RecentProject; 3] = [
    RecentProject {
        id: "1",
        name: "品牌视觉设计",
        when: "2 小时前",
        gradient: "linear-gradient(135deg,#f5f7fa,#c3cfe2)",
    },
    RecentProject {
        id: "2",
        name: "3D 产品展示",
        when: "昨天",
        gradient: "linear-gradient(135deg,#e0c3fc,#8ec5fc)",
    },
    RecentProject {
        id: "3",
        name: "社交媒体海报",
        when: "3 天前",
        gradient: "linear-gradient(135deg,#fddb92,#d1fdff)",
    },
];

fn pill(action: &str, on: bool, label: &str) -> String {
    format!(
        r#"<button type="button" class="pill{}" data-action="{}">{}</button>"#,
        if on { " on" } else { "" },
        action,
        escape_html(label)
    )
}

fn recent_projects() -> String {
    let cards: String = RECENT_PROJECTS
        .iter()
        .map(|p| {
            let route = Route::Teams {
                project_id: Some(p.id.to_string()),
                new_project: false,
            };
            format!(
                r#"<a class="recent-card" href="{href}"><div class="recent-thumb" style="background: {bg}"></div><p class="card-title">{name}</p><p class="card-meta">{when}</p></a>"#,
                href = route.hash(),
                bg = p.gradient,
                name = p.name,
                when = p.when,
            )
        })
        .collect();
    let new_project = Route::Teams {
        project_id: None,
        new_project: true,
    };
    format!(
        r#"<section class="recent"><div class="section-head"><h2>继续创作</h2><a class="link" href="{all}">查看全部</a></div><div class="recent-grid"><a class="recent-card new" href="{new}"><span class="plus">＋</span><span>新建项目</span></a>{cards}</div></section>"#,
        all = Route::Projects.hash(),
        new = new_project.hash(),
        cards = cards,
    )
}

pub fn view(page: &DashboardPage) -> String {
    format!(
        r#"<div class="dashboard-home"><div class="hero"><h1>WeiMeng 让设计更简单</h1><p class="muted">输入灵感，AI 为你创造无限可能</p></div><div class="prompt-box"><textarea id="{field}" data-field="{field}" data-autogrow rows="3" placeholder="描述你想要创建的内容，或者通过 @ 调用 Agent...">{prompt}</textarea><div class="prompt-toolbar"><div class="prompt-tools"><button type="button" class="pill" title="上传文件">📎</button>{search}{agent}</div><div class="prompt-tools">{model}<button type="button" class="send-btn" data-action="prompt-submit" aria-label="发送">➤</button></div></div></div>{recent}</div>"#,
        field = Field::DashboardPrompt.id(),
        prompt = escape_html(&page.prompt),
        search = pill("toggle-web-search", page.web_search, "联网搜索"),
        agent = pill(
            "toggle-agent",
            page.agent_enabled,
            if page.agent_enabled { "Agent 已开启" } else { "开启 Agent" }
        ),
        model = pill("toggle-model", false, page.model.name()),
        recent = recent_projects(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_toggle_alternates() {
        assert_eq!(Model::default().name(), "DeepThink R1");
        assert_eq!(Model::Primary.toggled().name(), "GPT-4o");
        assert_eq!(Model::Primary.toggled().toggled(), Model::Primary);
    }

    #[test]
    fn autogrow_caps_at_max() {
        assert_eq!(autogrow_height(120.0, PROMPT_MAX_HEIGHT), (120.0, "hidden"));
        assert_eq!(autogrow_height(480.0, PROMPT_MAX_HEIGHT), (300.0, "auto"));
    }

    #[test]
    fn agent_pill_label() {
        let mut page = DashboardPage::default();
        assert!(view(&page).contains("开启 Agent"));
        page.agent_enabled = true;
        assert!(view(&page).contains("Agent 已开启"));
        assert!(view(&page).contains(r##"href="#/teams?projectId=2""##));
        assert!(view(&page).contains(r##"href="#/teams?new=true""##));
    }
}
