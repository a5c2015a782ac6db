use super::palette::PaletteState;
use super::viewport::Viewport;

/// Left dock tabs in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockTab {
    #[default]
    Assets,
    Nodes,
}

impl DockTab {
    pub fn id(self) -> &'static str {
        match self {
            DockTab::Assets => "assets",
            DockTab::Nodes => "nodes",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "assets" => Some(DockTab::Assets),
            "nodes" => Some(DockTab::Nodes),
            _ => None,
        }
    }
}

/// A node being moved with the pointer.  Offsets are pointer minus node
/// origin at grab time.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDrag {
    pub node_id: String,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl NodeDrag {
    pub fn position_for(&self, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
        (pointer_x - self.offset_x, pointer_y - self.offset_y)
    }
}

/// Editor chrome state that is not part of the workflow document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub dock_tab: DockTab,
    pub palette: PaletteState,
    pub viewport: Viewport,
    pub node_drag: Option<NodeDrag>,
    /// Set once the seed document has been loaded into the store.
    pub seeded: bool,
}
