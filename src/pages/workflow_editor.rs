//! Node-based workflow editor: dock with palette, canvas, inspector and the
//! floating run bar.

use crate::canvas::connections::connection_path;
use crate::canvas::palette::{items_in, PaletteSection};
use crate::canvas::{DockTab, EditorState};
use crate::constants::ID_CANVAS;
use crate::messages::Field;
use crate::models::{NodeData, NodeType};
use crate::router::Route;
use crate::stores::WorkflowStore;
use crate::utils::escape_html;

const DOCK_ASSET_THUMBS: [&str; 3] = [
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=200&q=80",
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=200&q=80",
    "https://images.unsplash.com/photo-1517841905240-472988babdf9?auto=format&fit=crop&w=200&q=80",
];

fn dock(editor: &EditorState) -> String {
    let tab = |t: DockTab, label: &str| {
        format!(
            r#"<button type="button" class="dock-tab{}" data-action="dock-tab" data-arg="{}">{}</button>"#,
            if editor.dock_tab == t { " active" } else { "" },
            t.id(),
            label
        )
    };
    let body = match editor.dock_tab {
        DockTab::Assets => {
            let thumbs: String = DOCK_ASSET_THUMBS
                .iter()
                .map(|src| format!(r#"<div class="dock-thumb"><img src="{}" alt=""></div>"#, src))
                .collect();
            format!(
                r#"<div class="dock-assets">{}<div class="dock-thumb upload"><span>＋</span><span>Upload</span></div></div>"#,
                thumbs
            )
        }
        DockTab::Nodes => PaletteSection::ALL
            .iter()
            .map(|section| palette_section(editor, *section))
            .collect(),
    };
    format!(
        r#"<aside class="editor-dock"><div class="dock-tabs">{}{}</div><div class="dock-body">{}</div></aside>"#,
        tab(DockTab::Assets, "资产 Assets"),
        tab(DockTab::Nodes, "节点 Nodes"),
        body
    )
}

fn palette_section(editor: &EditorState, section: PaletteSection) -> String {
    let open = editor.palette.is_open(section);
    let items: String = if open {
        items_in(section)
            .map(|item| {
                format!(
                    r#"<div class="palette-item" draggable="true" data-node-type="{}"><span class="palette-dot {}"></span><span>{}</span></div>"#,
                    item.node_type.tag(),
                    item.node_type.tag(),
                    item.title
                )
            })
            .collect()
    } else {
        String::new()
    };
    format!(
        r#"<div class="palette-section{open}"><button type="button" class="palette-head" data-action="palette-toggle" data-arg="{id}"><span>{title}</span><span class="chevron">{chevron}</span></button><div class="palette-items">{items}</div></div>"#,
        open = if open { " open" } else { "" },
        id = section.id(),
        title = section.title(),
        chevron = if open { "▾" } else { "▸" },
        items = items,
    )
}

fn node_body(node: &NodeData, store: &WorkflowStore) -> String {
    let label = escape_html(node.label.as_deref().unwrap_or_default());
    match node.node_type {
        NodeType::Media | NodeType::Video => format!(
            r#"<div class="node-media"><img src="{}" alt="Input" draggable="false"></div><div class="node-caption">{}</div>"#,
            escape_html(node.image.as_deref().unwrap_or("https://via.placeholder.com/240x160")),
            label
        ),
        NodeType::Text => format!(
            r#"<div class="node-head"><span class="node-kind">Prompt</span></div><p class="node-text">{}</p>"#,
            escape_html(node.content.as_deref().unwrap_or_default())
        ),
        NodeType::Gen | NodeType::Videogen => {
            let result = if store.is_running {
                r#"<div class="gen-placeholder processing"><span>Generating...</span></div>"#.to_string()
            } else {
                match node.image.as_deref().filter(|_| store.has_result) {
                    Some(src) => format!(
                        r#"<div class="gen-result"><img src="{}" alt="Result" draggable="false"><button type="button" class="icon-btn" title="Save">⤓</button></div>"#,
                        escape_html(src)
                    ),
                    None => r#"<div class="gen-placeholder"><span>Waiting for run...</span></div>"#.to_string(),
                }
            };
            format!(
                r#"<div class="node-head"><span class="node-kind">{}</span><span class="node-meta">1024x1024 | Steps: 30</span></div>{}<span class="port in" title="Input 1"></span><span class="port in second" title="Input 2"></span>"#,
                label, result
            )
        }
        NodeType::Upscale | NodeType::Controlnet | NodeType::Post => format!(
            r#"<div class="node-head"><span class="node-kind">{}</span></div><div class="node-waiting">Waiting for input...</div><span class="port in" title="Input"></span>"#,
            label
        ),
    }
}

fn node_card(node: &NodeData, store: &WorkflowStore) -> String {
    let selected = store.selected_node_id.as_deref() == Some(node.id.as_str());
    let processing = store.is_running && matches!(node.node_type, NodeType::Gen | NodeType::Videogen);
    format!(
        r#"<div class="canvas-node node-{tag}{sel}{proc}" data-node-id="{id}" style="left: {x}px; top: {y}px">{body}<span class="port out"></span></div>"#,
        tag = node.node_type.tag(),
        sel = if selected { " selected" } else { "" },
        proc = if processing { " processing" } else { "" },
        id = escape_html(&node.id),
        x = node.x,
        y = node.y,
        body = node_body(node, store),
    )
}

fn connections_svg(store: &WorkflowStore) -> String {
    let paths: String = store
        .connections
        .iter()
        .filter_map(|c| connection_path(c, &store.nodes).map(|d| (c, d)))
        .map(|(c, d)| {
            format!(
                r#"<path class="connection-line{}" data-connection-id="{}" d="{}"/>"#,
                if store.is_running { " active" } else { "" },
                escape_html(&c.id),
                d
            )
        })
        .collect();
    format!(r#"<svg class="connections-layer" width="100%" height="100%">{}</svg>"#, paths)
}

fn inspector(store: &WorkflowStore) -> String {
    let Some(node) = store.selected_node() else {
        return r#"<aside class="inspector hidden"></aside>"#.to_string();
    };
    let content = if node.node_type == NodeType::Text {
        format!(
            r#"<div class="input-group"><label class="input-label">Prompt</label><textarea id="{id}" data-field="{id}" rows="4">{value}</textarea></div>"#,
            id = Field::NodeContent.id(),
            value = escape_html(node.content.as_deref().unwrap_or_default()),
        )
    } else {
        String::new()
    };
    format!(
        r#"<aside class="inspector visible"><div class="inspector-head"><h3>Properties</h3><button type="button" class="icon-btn" data-action="clear-selection" aria-label="关闭">✕</button></div><div class="inspector-body"><div class="input-group"><label class="input-label">Node Name</label><input id="{label_id}" class="input" data-field="{label_id}" value="{label}"></div>{content}<div class="param-row"><span class="param-key">Steps</span><span class="param-value">30</span></div><div class="param-row"><span class="param-key">CFG Scale</span><span class="param-value">7.0</span></div><div class="param-row"><span class="param-key">Aspect Ratio</span><span class="param-value"><span class="chip active">1:1</span><span class="chip">16:9</span><span class="chip">9:16</span></span></div><div class="param-row"><span class="param-key">Seed</span><span class="param-value">-1</span></div></div><div class="inspector-foot"><button type="button" class="btn btn-danger" data-action="remove-node">删除节点</button></div></aside>"#,
        label_id = Field::NodeLabel.id(),
        label = escape_html(node.label.as_deref().unwrap_or_default()),
        content = content,
    )
}

fn run_bar(store: &WorkflowStore) -> String {
    format!(
        r#"<div class="run-bar"><a class="run-bar-btn" href="{back}">←</a><button type="button" class="run-bar-btn run{running}" data-action="run-workflow"{disabled}><span class="run-icon">▶</span><span>{label}</span></button><button type="button" class="run-bar-btn" data-action="reset-canvas" title="Reset">↺</button></div>"#,
        back = Route::Workflows.hash(),
        running = if store.is_running { " running" } else { "" },
        disabled = if store.is_running { " disabled" } else { "" },
        label = if store.is_running { "Running..." } else { "Run Workflow" },
    )
}

pub fn view(store: &WorkflowStore, editor: &EditorState) -> String {
    let nodes: String = store.nodes.iter().map(|n| node_card(n, store)).collect();
    format!(
        r#"<div class="editor-page">{dock}<main id="{canvas}" class="editor-canvas" data-drop-zone><div class="canvas-background" data-action="clear-selection"></div><div class="canvas-layer" style="transform: {transform}">{svg}{nodes}</div></main>{inspector}{run_bar}</div>"#,
        dock = dock(editor),
        canvas = ID_CANVAS,
        transform = editor.viewport.css_transform(),
        svg = connections_svg(store),
        nodes = nodes,
        inspector = inspector(store),
        run_bar = run_bar(store),
    )
}
