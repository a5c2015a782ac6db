//! Drag-to-resize handle between the chat column and the right panel on the
//! teams page.
//!
//! `PanelResizer` is the whole state machine; pointer events feed it and it
//! tells the caller when an animation frame must be requested or cancelled.
//! At most one frame is ever outstanding, so a burst of pointer moves
//! produces a single width update per frame.

use crate::constants::{PANEL_MAX_WIDTH, PANEL_MIN_WIDTH};

pub fn clamp_width(width: f64) -> f64 {
    if width.is_nan() {
        return PANEL_MAX_WIDTH;
    }
    width.clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    /// Asked for, handle not known yet.
    Requested,
    Scheduled(i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelResizer {
    pub width: f64,
    pub target: f64,
    pub dragging: bool,
    pub frame: FrameState,
}

impl Default for PanelResizer {
    fn default() -> Self {
        Self {
            width: PANEL_MAX_WIDTH,
            target: PANEL_MAX_WIDTH,
            dragging: false,
            frame: FrameState::Idle,
        }
    }
}

impl PanelResizer {
    pub fn pointer_down(&mut self) {
        self.dragging = true;
    }

    /// Record a new target width.  Returns true when the caller must request
    /// an animation frame (none is pending yet).
    pub fn pointer_move(&mut self, container_right: f64, pointer_x: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.target = clamp_width(container_right - pointer_x);
        if self.frame == FrameState::Idle {
            self.frame = FrameState::Requested;
            true
        } else {
            false
        }
    }

    /// The frame handle returned by `requestAnimationFrame`.
    pub fn frame_scheduled(&mut self, handle: i32) {
        if self.frame == FrameState::Requested {
            self.frame = FrameState::Scheduled(handle);
        }
    }

    /// Animation frame fired: apply the latest target.
    pub fn on_frame(&mut self) {
        if self.frame == FrameState::Idle {
            return;
        }
        self.width = self.target;
        self.frame = FrameState::Idle;
    }

    /// End the drag.  Returns the frame handle to cancel, if one is pending.
    pub fn pointer_up(&mut self) -> Option<i32> {
        self.dragging = false;
        let pending = match self.frame {
            FrameState::Scheduled(handle) => Some(handle),
            _ => None,
        };
        self.frame = FrameState::Idle;
        pending
    }
}

/// Body styling while a resize drag is active.
pub fn body_drag_style(dragging: bool) -> (&'static str, &'static str) {
    if dragging {
        ("col-resize", "none")
    } else {
        ("", "")
    }
}

#[cfg(target_arch = "wasm32")]
pub fn apply_body_style(dragging: bool) {
    let (cursor, select) = body_drag_style(dragging);
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        let _ = style.set_property("cursor", cursor);
        let _ = style.set_property("user-select", select);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_body_style(_dragging: bool) {}
