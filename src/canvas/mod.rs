//! Workflow canvas model: placement of dropped nodes, connection geometry,
//! the node palette and the (fixed) viewport.  DOM wiring lives in
//! `pages::workflow_editor`.

pub mod connections;
pub mod editor;
pub mod palette;
pub mod placement;
pub mod viewport;

pub use editor::{DockTab, EditorState, NodeDrag};
pub use palette::{PaletteSection, PaletteState};
pub use viewport::Viewport;
