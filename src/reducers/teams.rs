//! Team workspace: tool tabs, the mock assistant chat and the split-panel
//! resize loop.

use crate::constants::{ASSISTANT_CANNED_REPLY, ASSISTANT_REPLY_DELAY_MS};
use crate::messages::{Command, Field, Message};
use crate::state::AppState;
use crate::utils::now_ms;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let page = &mut state.teams;
    match msg {
        Message::FieldChanged {
            field: Field::TeamsTitle,
            value,
        } => {
            page.title = value.clone();
            true
        }
        Message::FieldChanged {
            field: Field::TeamsChatInput,
            value,
        } => {
            page.input = value.clone();
            true
        }
        Message::SelectTool(tool) => {
            page.tool = *tool;
            true
        }
        Message::ChatSend => {
            if page.push_user_message(now_ms()) {
                commands.push(Command::delayed(
                    ASSISTANT_REPLY_DELAY_MS,
                    Message::AssistantReply,
                ));
            }
            true
        }
        Message::AssistantReply => {
            page.push_assistant_message(ASSISTANT_CANNED_REPLY, now_ms());
            true
        }

        // Resize: one frame outstanding at most; the frame applies the
        // latest target width.
        Message::PanelPointerDown => {
            page.resizer.pointer_down();
            true
        }
        Message::PanelPointerMove {
            container_right,
            pointer_x,
        } => {
            if page.resizer.pointer_move(*container_right, *pointer_x) {
                commands.push(Command::RequestFrame);
            }
            true
        }
        Message::PanelFrameScheduled(handle) => {
            page.resizer.frame_scheduled(*handle);
            true
        }
        Message::PanelFrame => {
            page.resizer.on_frame();
            true
        }
        Message::PanelPointerUp => {
            if let Some(handle) = page.resizer.pointer_up() {
                commands.push(Command::CancelFrame(handle));
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;
    use crate::reducers::test_support::{delayed, logged_in};

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn chat_send_schedules_one_reply() {
        let mut s = logged_in();
        assert!(run(&mut s, Message::ChatSend).is_empty());
        run(
            &mut s,
            Message::FieldChanged {
                field: Field::TeamsChatInput,
                value: "做一张海报".into(),
            },
        );
        let cmds = run(&mut s, Message::ChatSend);
        assert_eq!(delayed(&cmds), Some((1000, &Message::AssistantReply)));
        run(&mut s, Message::AssistantReply);
        let roles: Vec<_> = s.teams.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [ChatRole::User, ChatRole::Assistant]);
        assert_eq!(s.teams.messages[1].content, ASSISTANT_CANNED_REPLY);
    }

    #[test]
    fn pointer_moves_coalesce_into_one_frame() {
        let mut s = logged_in();
        run(&mut s, Message::PanelPointerDown);
        let first = run(
            &mut s,
            Message::PanelPointerMove {
                container_right: 1400.0,
                pointer_x: 900.0,
            },
        );
        assert_eq!(first, vec![Command::RequestFrame]);
        run(&mut s, Message::PanelFrameScheduled(9));
        for x in [950.0, 980.0, 1000.0] {
            let cmds = run(
                &mut s,
                Message::PanelPointerMove {
                    container_right: 1400.0,
                    pointer_x: x,
                },
            );
            assert!(cmds.is_empty());
        }
        assert_eq!(s.teams.resizer.width, 600.0);
        run(&mut s, Message::PanelFrame);
        assert_eq!(s.teams.resizer.width, 411.0);
    }

    #[test]
    fn pointer_up_cancels_pending_frame() {
        let mut s = logged_in();
        run(&mut s, Message::PanelPointerDown);
        run(
            &mut s,
            Message::PanelPointerMove {
                container_right: 1400.0,
                pointer_x: 900.0,
            },
        );
        run(&mut s, Message::PanelFrameScheduled(4));
        assert_eq!(run(&mut s, Message::PanelPointerUp), vec![Command::CancelFrame(4)]);
        assert!(!s.teams.resizer.dragging);
        assert!(run(&mut s, Message::PanelPointerUp).is_empty());
    }
}
