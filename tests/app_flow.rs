//! Whole-app flows through `AppState::dispatch`, with a tiny synchronous
//! runtime standing in for the browser: chained messages run immediately,
//! timers fire on demand and everything else is recorded.

use std::collections::VecDeque;
use std::rc::Rc;

use studio_frontend::constants::{PANEL_MAX_WIDTH, PANEL_MIN_WIDTH};
use studio_frontend::messages::{ApiCall, Command, Field, Message};
use studio_frontend::models::{NodeType, TokenResponse};
use studio_frontend::network::{ApiClient, ApiConfig, FetchTransport};
use studio_frontend::router::Route;
use studio_frontend::state::AppState;
use studio_frontend::storage::MemoryStorage;

struct Harness {
    state: AppState,
    effects: Vec<Command>,
}

impl Harness {
    fn new() -> Self {
        let storage = Rc::new(MemoryStorage::new());
        let api = ApiClient::new(
            ApiConfig::from_url("http://api.test/api/v1"),
            storage.clone(),
            Rc::new(FetchTransport::default()),
        );
        Self {
            state: AppState::new(storage, api),
            effects: Vec::new(),
        }
    }

    fn logged_in() -> Self {
        let mut h = Self::new();
        h.state.auth.set_token(Some("jwt".into()));
        h
    }

    fn send(&mut self, msg: Message) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            for cmd in self.state.dispatch(msg) {
                match cmd {
                    Command::SendMessage(next) => queue.push_back(next),
                    other => self.effects.push(other),
                }
            }
        }
    }

    fn type_into(&mut self, field: Field, value: &str) {
        self.send(Message::FieldChanged {
            field,
            value: value.into(),
        });
    }

    fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.effects)
    }

    /// Fire every pending timer once, in order.  Returns the delays fired.
    fn fire_timers(&mut self) -> Vec<u32> {
        let mut fired = Vec::new();
        let mut rest = Vec::new();
        let mut due = Vec::new();
        for cmd in self.take() {
            match cmd {
                Command::Delayed { delay_ms, message } => {
                    fired.push(delay_ms);
                    due.push(*message);
                }
                other => rest.push(other),
            }
        }
        self.effects = rest;
        for msg in due {
            self.send(msg);
        }
        fired
    }

    /// Follow a `SetHash` the way the hashchange listener would.
    fn follow_hash(&mut self) {
        let hashes: Vec<Route> = self
            .take()
            .into_iter()
            .filter_map(|c| match c {
                Command::SetHash(route) => Some(route),
                _ => None,
            })
            .collect();
        for route in hashes {
            self.send(Message::RouteChanged(route));
        }
    }
}

#[test]
fn signed_out_visitor_is_sent_to_login_then_back_in() {
    let mut h = Harness::new();
    h.send(Message::RouteChanged(Route::Assets));
    h.follow_hash();
    assert_eq!(h.state.route, Route::Login);

    h.type_into(Field::LoginEmail, "a@b.co");
    h.type_into(Field::LoginPassword, "Secret123");
    h.send(Message::LoginRememberChanged(true));
    h.send(Message::LoginSubmit);
    assert!(matches!(h.take().as_slice(), [Command::Api(ApiCall::Login { .. })]));

    h.send(Message::LoginResponse(Ok(TokenResponse {
        access_token: "jwt-1".into(),
        token_type: "bearer".into(),
        expires_in_days: None,
        expires_at: None,
    })));
    let effects = h.take();
    assert!(effects.contains(&Command::Api(ApiCall::FetchProfile)));
    assert!(effects.contains(&Command::SetHash(Route::Dashboard)));

    h.send(Message::RouteChanged(Route::Assets));
    assert_eq!(h.state.route, Route::Assets);
    assert!(h.state.resources.assets.loading);
}

#[test]
fn palette_drop_lands_under_the_pointer_and_run_completes() {
    let mut h = Harness::logged_in();
    h.send(Message::RouteChanged(Route::WorkflowEditor));
    let seeded = h.state.workflow.nodes.len();

    h.send(Message::CanvasDrop {
        payload: "gen".into(),
        client_x: 400.0,
        client_y: 300.0,
        canvas_left: 100.0,
        canvas_top: 50.0,
    });
    let node = h.state.workflow.nodes.last().unwrap().clone();
    assert_eq!(h.state.workflow.nodes.len(), seeded + 1);
    assert_eq!(node.node_type, NodeType::Gen);
    assert_eq!((node.x, node.y), (200.0, 210.0));

    h.send(Message::RunWorkflow);
    h.send(Message::RunWorkflow);
    assert!(h.state.workflow.is_running);
    assert_eq!(h.fire_timers(), vec![3000]);
    assert!(!h.state.workflow.is_running);
    assert!(h.state.workflow.has_result);
}

#[test]
fn reset_code_resend_waits_for_the_countdown() {
    let mut h = Harness::new();
    h.send(Message::RouteChanged(Route::ForgotPassword));
    h.type_into(Field::ForgotEmail, "me@site.io");
    h.send(Message::ForgotSendCode);
    h.take();
    h.send(Message::ForgotCodeSent(Ok(())));

    h.send(Message::ForgotResend);
    assert!(h.effects.iter().all(|c| !matches!(c, Command::Api(_))));

    let mut seconds = 0;
    while h.state.forgot.countdown.is_active() {
        assert_eq!(h.fire_timers(), vec![1000]);
        seconds += 1;
    }
    assert_eq!(seconds, 60);
    assert!(h.fire_timers().is_empty());

    h.send(Message::ForgotResend);
    assert_eq!(
        h.take(),
        vec![Command::Api(ApiCall::SendResetCaptcha {
            email: "me@site.io".into(),
            resend: true
        })]
    );
}

#[test]
fn reset_submit_needs_every_check() {
    let mut h = Harness::new();
    h.send(Message::RouteChanged(Route::ForgotPassword));
    h.type_into(Field::ForgotEmail, "me@site.io");
    h.type_into(Field::ForgotCode, "123456");

    for (new, confirm) in [("abcdefgh", "abcdefgh"), ("abcdefg1", "abcdefg2"), ("abc1", "abc1")] {
        h.type_into(Field::ForgotNewPassword, new);
        h.type_into(Field::ForgotConfirmPassword, confirm);
        h.send(Message::ForgotSubmit);
        assert!(h.take().is_empty(), "{} / {} should be rejected", new, confirm);
    }

    h.type_into(Field::ForgotNewPassword, "abcdefg1");
    h.type_into(Field::ForgotConfirmPassword, "abcdefg1");
    h.send(Message::ForgotSubmit);
    assert!(matches!(h.take().as_slice(), [Command::Api(ApiCall::ResetPassword(_))]));

    h.send(Message::ForgotResetResponse(Ok(())));
    assert_eq!(h.fire_timers(), vec![1500]);
    h.follow_hash();
    assert_eq!(h.state.route, Route::Login);
}

#[test]
fn split_panel_applies_one_width_per_frame() {
    let mut h = Harness::logged_in();
    h.send(Message::RouteChanged(Route::teams()));
    h.send(Message::PanelPointerDown);

    for x in [1000.0, 950.0, 900.0] {
        h.send(Message::PanelPointerMove {
            container_right: 1400.0,
            pointer_x: x,
        });
    }
    let frames = h
        .take()
        .into_iter()
        .filter(|c| *c == Command::RequestFrame)
        .count();
    assert_eq!(frames, 1);

    h.send(Message::PanelFrameScheduled(1));
    h.send(Message::PanelPointerMove {
        container_right: 1400.0,
        pointer_x: 100.0,
    });
    assert!(h.take().is_empty());
    h.send(Message::PanelFrame);
    assert_eq!(h.state.teams.resizer.width, PANEL_MAX_WIDTH);

    h.send(Message::PanelPointerMove {
        container_right: 1400.0,
        pointer_x: 1390.0,
    });
    assert_eq!(h.take(), vec![Command::RequestFrame]);
    h.send(Message::PanelFrameScheduled(2));
    h.send(Message::PanelFrame);
    h.send(Message::PanelPointerUp);
    assert_eq!(h.state.teams.resizer.width, PANEL_MIN_WIDTH);
    assert!(!h.state.teams.resizer.dragging);
}
