//! Dashboard shell sidebar: logo, grouped navigation, settings and the
//! signed-in user.

use super::avatar::{avatar, initial, AvatarSize};
use crate::constants::ID_SIDEBAR;
use crate::models::User;
use crate::router::Route;
use crate::utils::escape_html;

pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: fn() -> Route,
}

pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

fn route_dashboard() -> Route {
    Route::Dashboard
}
fn route_projects() -> Route {
    Route::Projects
}
fn route_workflows() -> Route {
    Route::Workflows
}
fn route_assets() -> Route {
    Route::Assets
}
fn route_scripts() -> Route {
    Route::Scripts
}
fn route_plugins() -> Route {
    Route::Plugins
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "工作台",
        items: &[
            NavItem { label: "首页", icon: "⌂", route: route_dashboard },
            NavItem { label: "团队", icon: "◎", route: Route::teams },
        ],
    },
    NavSection {
        title: "创作",
        items: &[
            NavItem { label: "项目", icon: "▤", route: route_projects },
            NavItem { label: "工作流", icon: "⋈", route: route_workflows },
            NavItem { label: "素材", icon: "▣", route: route_assets },
            NavItem { label: "剧本", icon: "✎", route: route_scripts },
        ],
    },
    NavSection {
        title: "扩展",
        items: &[NavItem { label: "插件", icon: "⧉", route: route_plugins }],
    },
];

fn nav_item(item: &NavItem, current: &Route, collapsed: bool) -> String {
    let target = (item.route)();
    let active = target.same_page(current);
    format!(
        r#"<a class="nav-item{active}" href="{href}" title="{label}"><span class="nav-icon">{icon}</span>{text}</a>"#,
        active = if active { " active" } else { "" },
        href = target.hash(),
        label = item.label,
        icon = item.icon,
        text = if collapsed {
            String::new()
        } else {
            format!(r#"<span class="nav-label">{}</span>"#, item.label)
        },
    )
}

pub fn sidebar(current: &Route, collapsed: bool, user: Option<&User>) -> String {
    let nav: String = NAV_SECTIONS
        .iter()
        .map(|section| {
            let items: String = section.items.iter().map(|i| nav_item(i, current, collapsed)).collect();
            let title = if collapsed {
                String::new()
            } else {
                format!(r#"<p class="nav-section-title">{}</p>"#, section.title)
            };
            format!(r#"<div class="nav-section">{}{}</div>"#, title, items)
        })
        .collect();

    let user_html = match user {
        Some(u) => {
            let fallback = initial(&u.username);
            let name = if collapsed {
                String::new()
            } else {
                format!(
                    r#"<div class="user-info"><p class="user-name">{}</p><p class="user-email">{}</p></div>"#,
                    escape_html(&u.username),
                    escape_html(&u.email)
                )
            };
            format!(
                r#"<div class="sidebar-user">{}{}</div>"#,
                avatar(u.avatar.as_deref(), &u.username, Some(&fallback), AvatarSize::Sm),
                name
            )
        }
        None => String::new(),
    };

    format!(
        r#"<aside id="{id}" class="sidebar{collapsed}"><div class="sidebar-logo"><a href="{home}" class="logo-mark">W</a>{logo_text}<button type="button" class="icon-btn" data-action="toggle-sidebar" aria-label="折叠侧边栏">{chevron}</button></div><nav class="sidebar-nav">{nav}</nav><div class="sidebar-footer"><button type="button" class="nav-item" data-action="open-settings"><span class="nav-icon">⚙</span>{settings}</button><button type="button" class="nav-item" data-action="logout"><span class="nav-icon">⎋</span>{logout}</button>{user}</div></aside>"#,
        id = ID_SIDEBAR,
        collapsed = if collapsed { " collapsed" } else { "" },
        home = Route::Dashboard.hash(),
        logo_text = if collapsed { "" } else { r#"<span class="logo-text">WeiMeng</span>"# },
        chevron = if collapsed { "»" } else { "«" },
        nav = nav,
        settings = if collapsed { "" } else { r#"<span class="nav-label">设置</span>"# },
        logout = if collapsed { "" } else { r#"<span class="nav-label">退出登录</span>"# },
        user = user_html,
    )
}
