use crate::constants::{DROP_OFFSET_X, DROP_OFFSET_Y, PLACEHOLDER_IMAGE_URL};
use crate::models::{Connection, NodeData, NodeType};

/// Canvas-relative origin for a node dropped at `client` coordinates.  The
/// fixed offset roughly centres the card under the pointer; no clamping or
/// snapping is applied.
pub fn drop_position(client_x: f64, client_y: f64, canvas_left: f64, canvas_top: f64) -> (f64, f64) {
    (
        client_x - canvas_left - DROP_OFFSET_X,
        client_y - canvas_top - DROP_OFFSET_Y,
    )
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultFields {
    pub label: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

pub fn default_fields(node_type: NodeType) -> DefaultFields {
    let label = |s: &str| Some(s.to_string());
    match node_type {
        NodeType::Media => DefaultFields {
            label: label("New Image"),
            image: Some(PLACEHOLDER_IMAGE_URL.to_string()),
            ..Default::default()
        },
        NodeType::Video => DefaultFields {
            label: label("New Video"),
            image: Some(PLACEHOLDER_IMAGE_URL.to_string()),
            ..Default::default()
        },
        NodeType::Text => DefaultFields {
            content: Some("Enter your prompt here...".to_string()),
            ..Default::default()
        },
        NodeType::Gen => DefaultFields {
            label: label("Flux Pro 1.0"),
            ..Default::default()
        },
        NodeType::Videogen => DefaultFields {
            label: label("Video Gen"),
            ..Default::default()
        },
        NodeType::Upscale => DefaultFields {
            label: label("Upscale / Fix"),
            ..Default::default()
        },
        NodeType::Controlnet => DefaultFields {
            label: label("ControlNet"),
            ..Default::default()
        },
        NodeType::Post => DefaultFields {
            label: label(node_type.tag()),
            ..Default::default()
        },
    }
}

pub fn node_id(node_type: NodeType, timestamp_ms: u64) -> String {
    format!("{}-{}", node_type.tag(), timestamp_ms)
}

/// Build the node for a palette drop.  `None` when the drag payload is empty
/// or not a known node type.
pub fn node_from_drop(
    payload: &str,
    client_x: f64,
    client_y: f64,
    canvas_left: f64,
    canvas_top: f64,
    timestamp_ms: u64,
) -> Option<NodeData> {
    let node_type = NodeType::from_tag(payload.trim())?;
    let (x, y) = drop_position(client_x, client_y, canvas_left, canvas_top);
    let fields = default_fields(node_type);
    Some(NodeData {
        id: node_id(node_type, timestamp_ms),
        node_type,
        x,
        y,
        label: fields.label,
        content: fields.content,
        image: fields.image,
        config: None,
    })
}

const SEED_PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=400&q=80";
const SEED_RESULT_URL: &str =
    "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?auto=format&fit=crop&w=600&q=80";
pub const SEED_PROMPT: &str =
    "Cyberpunk city street, neon lights, rain, <lora:neon_v2:0.8>, cinematic lighting, 8k resolution";

/// Demo document the editor opens with.
pub fn initial_nodes() -> Vec<NodeData> {
    vec![
        NodeData {
            id: "media".into(),
            node_type: NodeType::Media,
            x: 400.0,
            y: 300.0,
            label: Some("Portrait_Ref.jpg".into()),
            content: None,
            image: Some(SEED_PORTRAIT_URL.into()),
            config: None,
        },
        NodeData {
            id: "text".into(),
            node_type: NodeType::Text,
            x: 400.0,
            y: 520.0,
            label: None,
            content: Some(SEED_PROMPT.into()),
            image: None,
            config: None,
        },
        NodeData {
            id: "gen".into(),
            node_type: NodeType::Gen,
            x: 860.0,
            y: 350.0,
            label: Some("Flux Pro 1.0".into()),
            content: None,
            image: Some(SEED_RESULT_URL.into()),
            config: None,
        },
    ]
}

pub fn initial_connections() -> Vec<Connection> {
    vec![
        Connection {
            id: "conn-1".into(),
            source_id: "media".into(),
            target_id: "gen".into(),
            source_port: None,
            target_port: Some("in-1".into()),
        },
        Connection {
            id: "conn-2".into(),
            source_id: "text".into(),
            target_id: "gen".into(),
            source_port: None,
            target_port: Some("in-2".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn drop_applies_fixed_offset() {
        let node = node_from_drop("gen", 500.0, 300.0, 100.0, 50.0, 1_700_000_000_000).unwrap();
        assert_eq!((node.x, node.y), (300.0, 210.0));
        assert_eq!(node.id, "gen-1700000000000");
        assert_eq!(node.label.as_deref(), Some("Flux Pro 1.0"));
    }

    #[test]
    fn unknown_or_missing_type_is_rejected() {
        assert!(node_from_drop("", 10.0, 10.0, 0.0, 0.0, 1).is_none());
        assert!(node_from_drop("sticker", 10.0, 10.0, 0.0, 0.0, 1).is_none());
    }

    #[test]
    fn per_type_defaults() {
        let media = default_fields(NodeType::Media);
        assert_eq!(media.label.as_deref(), Some("New Image"));
        assert_eq!(media.image.as_deref(), Some(PLACEHOLDER_IMAGE_URL));

        let text = default_fields(NodeType::Text);
        assert_eq!(text.label, None);
        assert_eq!(text.content.as_deref(), Some("Enter your prompt here..."));

        assert_eq!(default_fields(NodeType::Post).label.as_deref(), Some("post"));
        assert_eq!(default_fields(NodeType::Upscale).label.as_deref(), Some("Upscale / Fix"));
    }

    #[test]
    fn seed_document_is_connected() {
        let nodes = initial_nodes();
        for c in initial_connections() {
            assert!(nodes.iter().any(|n| n.id == c.source_id));
            assert!(nodes.iter().any(|n| n.id == c.target_id));
        }
    }

    proptest! {
        #[test]
        fn drop_position_is_pointer_minus_origin_minus_offset(
            cx in -5000.0f64..5000.0,
            cy in -5000.0f64..5000.0,
            left in -500.0f64..500.0,
            top in -500.0f64..500.0,
        ) {
            let (x, y) = drop_position(cx, cy, left, top);
            prop_assert!((x - (cx - left - 100.0)).abs() < 1e-9);
            prop_assert!((y - (cy - top - 40.0)).abs() < 1e-9);
        }
    }
}
