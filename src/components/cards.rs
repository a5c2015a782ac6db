//! Card markup for the list pages.
//!
//! Card actions carry the record id in `data-arg`; the card body click is a
//! separate action so the buttons do not trigger it.

use crate::models::{Asset, Plugin, Project, ProjectKind, Script, ScriptStatus, Workflow, WorkflowStatus};
use crate::utils::{escape_html, format_relative_time};
use chrono::{DateTime, Utc};

fn action_button(action: &str, id: &str, label: &str, class: &str) -> String {
    format!(
        r#"<button type="button" class="card-action {class}" data-action="{action}" data-arg="{id}">{label}</button>"#,
        class = class,
        action = action,
        id = escape_html(id),
        label = escape_html(label),
    )
}

fn badge(label: &str, variant: &str) -> String {
    format!(r#"<span class="badge badge-{}">{}</span>"#, variant, escape_html(label))
}

pub fn workflow_status_badge(status: WorkflowStatus) -> String {
    match status {
        WorkflowStatus::Draft => badge("草稿", "default"),
        WorkflowStatus::Running => badge("运行中", "info"),
        WorkflowStatus::Published => badge("已发布", "success"),
        WorkflowStatus::Template => badge("模板", "warning"),
    }
}

pub fn script_status_badge(status: ScriptStatus) -> String {
    match status {
        ScriptStatus::Draft => badge("草稿", "default"),
        ScriptStatus::Reviewing => badge("审核中", "info"),
        ScriptStatus::Published => badge("已发布", "success"),
        ScriptStatus::Archived => badge("已归档", "warning"),
    }
}

pub fn asset_card(asset: &Asset) -> String {
    let preview = match asset.image_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(url),
            escape_html(&asset.title)
        ),
        None => String::new(),
    };
    let favorite = asset.is_favorite.unwrap_or(false);
    format!(
        r#"<div class="card asset-card"><div class="asset-preview" style="background: {gradient}" data-action="open-asset" data-arg="{id}">{preview}</div><div class="card-body"><h3 class="card-title">{title}</h3><p class="card-meta">{creator}</p><div class="card-actions">{fav}{del}</div></div></div>"#,
        gradient = escape_html(&asset.image_gradient),
        id = escape_html(&asset.id),
        preview = preview,
        title = escape_html(&asset.title),
        creator = escape_html(&asset.creator),
        fav = action_button(
            "asset-favorite",
            &asset.id,
            if favorite { "★ 已收藏" } else { "☆ 收藏" },
            if favorite { "is-on" } else { "" }
        ),
        del = action_button("asset-delete", &asset.id, "删除", "danger"),
    )
}

/// Parameter sheet shown in the asset drawer.
pub fn asset_details(asset: &Asset) -> String {
    let row = |k: &str, v: &str| {
        format!(
            r#"<div class="param-row"><span class="param-key">{}</span><span class="param-value">{}</span></div>"#,
            k,
            escape_html(v)
        )
    };
    format!(
        r#"<div class="asset-details"><div class="asset-preview large" style="background: {gradient}"></div><h3>{title}</h3><p class="card-meta">{creator} · {date}</p><h4>Prompt</h4><p class="asset-prompt">{prompt}</p>{model}{seed}{steps}{cfg}</div>"#,
        gradient = escape_html(&asset.image_gradient),
        title = escape_html(&asset.title),
        creator = escape_html(&asset.creator),
        date = escape_html(&asset.date),
        prompt = escape_html(&asset.prompt),
        model = row("Model", &asset.params.model),
        seed = row("Seed", &asset.params.seed),
        steps = row("Steps", &asset.params.steps),
        cfg = row("CFG Scale", &asset.params.cfg_scale),
    )
}

pub fn project_card(project: &Project, now: DateTime<Utc>) -> String {
    let updated = format!("更新于 {}", format_relative_time(&project.updated_at, now));
    match project.kind {
        ProjectKind::Folder => format!(
            r#"<div class="card folder-card" data-action="open-project" data-arg="{id}"><div class="folder-icon">📁</div><h3 class="card-title">{name}</h3><p class="card-meta">{updated}</p></div>"#,
            id = escape_html(&project.id),
            name = escape_html(&project.name),
            updated = escape_html(&updated),
        ),
        ProjectKind::Project => {
            let thumb = project
                .thumbnail
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| format!(r#"<img src="{}" alt="{}">"#, escape_html(t), escape_html(&project.name)))
                .unwrap_or_default();
            let workflows = project
                .workflow_count
                .map(|n| format!("<span>{} 个工作流</span>", n))
                .unwrap_or_default();
            format!(
                r#"<div class="card project-card"><div class="project-thumb" data-action="open-project" data-arg="{id}">{thumb}</div><h3 class="card-title">{name}</h3><div class="card-meta"><span>{updated}</span>{workflows}</div><div class="card-actions">{del}</div></div>"#,
                id = escape_html(&project.id),
                thumb = thumb,
                name = escape_html(&project.name),
                updated = escape_html(&updated),
                workflows = workflows,
                del = action_button("project-delete", &project.id, "删除", "danger"),
            )
        }
    }
}

pub fn workflow_card(workflow: &Workflow, now: DateTime<Utc>) -> String {
    let description = workflow
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<p class="card-desc">{}</p>"#, escape_html(d)))
        .unwrap_or_default();
    let collaborators: String = workflow
        .collaborators
        .iter()
        .take(3)
        .map(|c| super::avatar::avatar(None, c, Some(&super::avatar::initial(c)), super::avatar::AvatarSize::Sm))
        .collect();
    format!(
        r#"<div class="card workflow-card"><div class="card-head" data-action="open-workflow" data-arg="{id}">{badge}</div><h3 class="card-title">{name}</h3>{desc}<div class="card-meta"><span>编辑于 {edited}</span><div class="collaborators">{collab}</div></div><div class="card-actions">{dup}{del}</div></div>"#,
        id = escape_html(&workflow.id),
        badge = workflow_status_badge(workflow.status),
        name = escape_html(&workflow.name),
        desc = description,
        edited = escape_html(&format_relative_time(&workflow.last_edited, now)),
        collab = collaborators,
        dup = action_button("workflow-duplicate", &workflow.id, "复制", ""),
        del = action_button("workflow-delete", &workflow.id, "删除", "danger"),
    )
}

pub fn script_card(script: &Script, now: DateTime<Utc>) -> String {
    let description = script
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<p class="card-desc">{}</p>"#, escape_html(d)))
        .unwrap_or_default();
    let tags: String = script
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();
    format!(
        r#"<div class="card script-card"><div class="card-head">{badge}</div><h3 class="card-title">{title}</h3>{desc}<div class="tags">{tags}</div><div class="card-meta"><span>{words} 字</span><span>{scenes} 场景</span><span>更新于 {updated}</span></div><div class="card-actions">{del}</div></div>"#,
        badge = script_status_badge(script.status),
        title = escape_html(&script.title),
        desc = description,
        tags = tags,
        words = script.word_count,
        scenes = script.scenes,
        updated = escape_html(&format_relative_time(&script.updated_at, now)),
        del = action_button("script-delete", &script.id, "删除", "danger"),
    )
}

fn category_class(category: &str) -> &'static str {
    match category {
        "模型训练" => "cat-model",
        "图像生成" => "cat-image",
        "工具增强" => "cat-tool",
        "工作流" => "cat-workflow",
        _ => "cat-other",
    }
}

pub fn plugin_card(plugin: &Plugin) -> String {
    let controls = if plugin.installed {
        format!(
            "{}{}",
            action_button(
                if plugin.active { "plugin-deactivate" } else { "plugin-activate" },
                &plugin.id,
                if plugin.active { "已启用" } else { "已禁用" },
                if plugin.active { "is-on" } else { "" }
            ),
            action_button("plugin-uninstall", &plugin.id, "卸载", "danger")
        )
    } else {
        action_button("plugin-install", &plugin.id, "安装", "primary")
    };
    format!(
        r#"<div class="card plugin-card"><div class="plugin-head"><div class="plugin-icon" style="background: {gradient}"><svg viewBox="0 0 24 24" fill="none" stroke="currentColor"><path d="{icon}"/></svg></div><div><h3 class="card-title">{name}</h3><p class="card-desc">{desc}</p></div></div><div class="card-meta"><span class="category {cat_class}">{category}</span><span>★ {rating:.1}</span><span>{downloads} 下载</span></div><div class="card-actions">{controls}</div></div>"#,
        gradient = escape_html(&plugin.icon_gradient),
        icon = escape_html(&plugin.icon_path),
        name = escape_html(&plugin.name),
        desc = escape_html(&plugin.description),
        cat_class = category_class(&plugin.category),
        category = escape_html(&plugin.category),
        rating = plugin.rating,
        downloads = escape_html(&plugin.downloads),
        controls = controls,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn plugin(installed: bool, active: bool) -> Plugin {
        Plugin {
            id: "p1".into(),
            name: "ControlNet".into(),
            description: "姿态控制".into(),
            category: "图像生成".into(),
            rating: 4.9,
            downloads: "20K+".into(),
            installed,
            active,
            icon_gradient: "linear-gradient(#000,#333)".into(),
            icon_path: "M0 0".into(),
            version: None,
            author: None,
        }
    }

    #[test]
    fn plugin_controls_follow_install_state() {
        let fresh = plugin_card(&plugin(false, false));
        assert!(fresh.contains(r#"data-action="plugin-install""#));
        assert!(!fresh.contains("plugin-uninstall"));

        let active = plugin_card(&plugin(true, true));
        assert!(active.contains(r#"data-action="plugin-deactivate""#));
        assert!(active.contains("已启用"));
        assert!(active.contains("★ 4.9"));

        let idle = plugin_card(&plugin(true, false));
        assert!(idle.contains(r#"data-action="plugin-activate""#));
    }

    #[test]
    fn project_card_shows_relative_update() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let project = Project {
            id: "7".into(),
            name: "<b>品牌</b>".into(),
            kind: ProjectKind::Project,
            updated_at: "2024-01-15T10:00:00Z".into(),
            thumbnail: None,
            workflow_count: Some(3),
        };
        let html = project_card(&project, now);
        assert!(html.contains("更新于 2 小时前"));
        assert!(html.contains("3 个工作流"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains(r#"data-action="project-delete" data-arg="7""#));
    }
}
