use crate::models::NodeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSection {
    Assets,
    Logic,
    Gen,
    Post,
}

impl PaletteSection {
    pub const ALL: [PaletteSection; 4] = [
        PaletteSection::Assets,
        PaletteSection::Logic,
        PaletteSection::Gen,
        PaletteSection::Post,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PaletteSection::Assets => "assets",
            PaletteSection::Logic => "logic",
            PaletteSection::Gen => "gen",
            PaletteSection::Post => "post",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            PaletteSection::Assets => "Assets",
            PaletteSection::Logic => "Script & Logic",
            PaletteSection::Gen => "Generation",
            PaletteSection::Post => "Post Process",
        }
    }

    fn index(self) -> usize {
        match self {
            PaletteSection::Assets => 0,
            PaletteSection::Logic => 1,
            PaletteSection::Gen => 2,
            PaletteSection::Post => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub section: PaletteSection,
    pub node_type: NodeType,
    pub title: &'static str,
}

pub const PALETTE_ITEMS: [PaletteItem; 7] = [
    PaletteItem { section: PaletteSection::Assets, node_type: NodeType::Media, title: "Image Upload" },
    PaletteItem { section: PaletteSection::Assets, node_type: NodeType::Video, title: "Video Clip" },
    PaletteItem { section: PaletteSection::Logic, node_type: NodeType::Text, title: "Text Prompt" },
    PaletteItem { section: PaletteSection::Gen, node_type: NodeType::Gen, title: "Image Gen" },
    PaletteItem { section: PaletteSection::Gen, node_type: NodeType::Videogen, title: "Video Gen" },
    PaletteItem { section: PaletteSection::Post, node_type: NodeType::Upscale, title: "Upscale / Fix" },
    PaletteItem { section: PaletteSection::Post, node_type: NodeType::Controlnet, title: "ControlNet" },
];

pub fn items_in(section: PaletteSection) -> impl Iterator<Item = &'static PaletteItem> {
    PALETTE_ITEMS.iter().filter(move |i| i.section == section)
}

/// Open/closed state of the palette accordions.  All open initially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteState {
    open: [bool; 4],
}

impl Default for PaletteState {
    fn default() -> Self {
        Self { open: [true; 4] }
    }
}

impl PaletteState {
    pub fn is_open(&self, section: PaletteSection) -> bool {
        self.open[section.index()]
    }

    pub fn toggle(&mut self, section: PaletteSection) {
        let slot = &mut self.open[section.index()];
        *slot = !*slot;
    }
}
