//! Canvas domain reducer: palette drops, selection, node dragging, the
//! inspector fields and the simulated run.

use crate::canvas::placement::{initial_connections, initial_nodes, node_from_drop};
use crate::canvas::NodeDrag;
use crate::constants::RUN_SIMULATION_MS;
use crate::messages::{Command, Field, Message};
use crate::models::NodePatch;
use crate::state::AppState;
use crate::utils::now_ms;

/// Handles canvas-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CanvasDrop {
            payload,
            client_x,
            client_y,
            canvas_left,
            canvas_top,
        } => {
            match node_from_drop(payload, *client_x, *client_y, *canvas_left, *canvas_top, now_ms()) {
                Some(node) => {
                    debug_log!("dropped {} at ({}, {})", node.id, node.x, node.y);
                    state.workflow.add_node(node);
                }
                None => debug_log!("ignored drop with payload {:?}", payload),
            }
            true
        }
        Message::SelectNode(id) => {
            state.workflow.select_node(Some(id.clone()));
            true
        }
        Message::ClearSelection => {
            state.workflow.select_node(None);
            true
        }
        Message::RunWorkflow => {
            if state.workflow.start_run() {
                commands.push(Command::delayed(RUN_SIMULATION_MS, Message::RunFinished));
            }
            true
        }
        Message::RunFinished => {
            state.workflow.finish_run();
            true
        }
        Message::TogglePaletteSection(section) => {
            state.editor.palette.toggle(*section);
            true
        }
        Message::SetDockTab(tab) => {
            state.editor.dock_tab = *tab;
            true
        }

        Message::NodePointerDown {
            node_id,
            canvas_x,
            canvas_y,
        } => {
            let Some(node) = state.workflow.node(node_id) else {
                return true;
            };
            let (x, y) = state.editor.viewport.to_world(*canvas_x, *canvas_y);
            state.editor.node_drag = Some(NodeDrag {
                node_id: node_id.clone(),
                offset_x: x - node.x,
                offset_y: y - node.y,
            });
            state.workflow.select_node(Some(node_id.clone()));
            true
        }
        Message::NodePointerMove { canvas_x, canvas_y } => {
            if let Some(drag) = &state.editor.node_drag {
                let (x, y) = state.editor.viewport.to_world(*canvas_x, *canvas_y);
                let (nx, ny) = drag.position_for(x, y);
                if !state.workflow.update_node(&drag.node_id, NodePatch::position(nx, ny)) {
                    state.editor.node_drag = None;
                }
            }
            true
        }
        Message::NodePointerUp => {
            state.editor.node_drag = None;
            true
        }

        Message::FieldChanged {
            field: field @ (Field::NodeLabel | Field::NodeContent),
            value,
        } => {
            if let Some(id) = state.workflow.selected_node_id.clone() {
                let patch = match field {
                    Field::NodeLabel => NodePatch {
                        label: Some(value.clone()),
                        ..Default::default()
                    },
                    _ => NodePatch {
                        content: Some(value.clone()),
                        ..Default::default()
                    },
                };
                state.workflow.update_node(&id, patch);
            }
            true
        }
        Message::RemoveSelectedNode => {
            if let Some(id) = state.workflow.selected_node_id.clone() {
                state.workflow.remove_node(&id);
            }
            true
        }
        Message::ResetCanvas => {
            if state.workflow.is_running {
                return true;
            }
            state.workflow.reset();
            state.workflow.set_nodes(initial_nodes());
            state.workflow.set_connections(initial_connections());
            state.editor.node_drag = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DockTab, PaletteSection};
    use crate::models::NodeType;
    use crate::reducers::test_support::{delayed, logged_in};

    fn seeded() -> AppState {
        let mut s = logged_in();
        s.workflow.set_nodes(initial_nodes());
        s.workflow.set_connections(initial_connections());
        s
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    fn palette_drop(payload: &str) -> Message {
        Message::CanvasDrop {
            payload: payload.into(),
            client_x: 500.0,
            client_y: 300.0,
            canvas_left: 100.0,
            canvas_top: 50.0,
        }
    }

    #[test]
    fn drop_adds_node_under_pointer() {
        let mut s = seeded();
        run(&mut s, palette_drop("upscale"));
        let node = s.workflow.nodes.last().unwrap();
        assert_eq!(node.node_type, NodeType::Upscale);
        assert_eq!((node.x, node.y), (300.0, 210.0));
        assert!(node.id.starts_with("upscale-"));
    }

    #[test]
    fn unknown_or_empty_payload_is_ignored() {
        let mut s = seeded();
        run(&mut s, palette_drop(""));
        run(&mut s, palette_drop("teleport"));
        assert_eq!(s.workflow.nodes.len(), 3);
    }

    #[test]
    fn run_is_guarded_and_finishes_with_result() {
        let mut s = seeded();
        let cmds = run(&mut s, Message::RunWorkflow);
        assert_eq!(delayed(&cmds), Some((3000, &Message::RunFinished)));
        assert!(s.workflow.is_running);
        assert!(run(&mut s, Message::RunWorkflow).is_empty());
        run(&mut s, Message::RunFinished);
        assert!(!s.workflow.is_running);
        assert!(s.workflow.has_result);
    }

    #[test]
    fn dragging_keeps_grab_offset() {
        let mut s = seeded();
        run(
            &mut s,
            Message::NodePointerDown {
                node_id: "gen".into(),
                canvas_x: 880.0,
                canvas_y: 360.0,
            },
        );
        assert_eq!(s.workflow.selected_node_id.as_deref(), Some("gen"));
        run(&mut s, Message::NodePointerMove { canvas_x: 900.0, canvas_y: 400.0 });
        let gen = s.workflow.node("gen").unwrap();
        assert_eq!((gen.x, gen.y), (880.0, 390.0));
        run(&mut s, Message::NodePointerUp);
        run(&mut s, Message::NodePointerMove { canvas_x: 0.0, canvas_y: 0.0 });
        assert_eq!(s.workflow.node("gen").unwrap().x, 880.0);
    }

    #[test]
    fn inspector_edits_selected_node() {
        let mut s = seeded();
        run(&mut s, Message::SelectNode("text".into()));
        run(
            &mut s,
            Message::FieldChanged {
                field: Field::NodeContent,
                value: "a lighthouse at dusk".into(),
            },
        );
        assert_eq!(
            s.workflow.node("text").unwrap().content.as_deref(),
            Some("a lighthouse at dusk")
        );
        run(&mut s, Message::RemoveSelectedNode);
        assert!(s.workflow.node("text").is_none());
        assert_eq!(s.workflow.selected_node_id, None);
        assert_eq!(s.workflow.connections.len(), 1);
    }

    #[test]
    fn reset_restores_seed_document() {
        let mut s = seeded();
        run(&mut s, palette_drop("gen"));
        run(&mut s, Message::SelectNode("media".into()));
        run(&mut s, Message::ResetCanvas);
        assert_eq!(s.workflow.nodes, initial_nodes());
        assert_eq!(s.workflow.selected_node_id, None);
    }

    #[test]
    fn dock_and_palette_chrome() {
        let mut s = seeded();
        run(&mut s, Message::SetDockTab(DockTab::Nodes));
        run(&mut s, Message::TogglePaletteSection(PaletteSection::Gen));
        assert_eq!(s.editor.dock_tab, DockTab::Nodes);
        assert!(!s.editor.palette.is_open(PaletteSection::Gen));
    }
}
