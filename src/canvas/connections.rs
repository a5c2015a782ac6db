use crate::constants::{CONNECTION_CURVE_OFFSET, NODE_CARD_WIDTH, NODE_PORT_OFFSET_Y};
use crate::models::{Connection, NodeData, NodeType};

/// Generator cards expose stacked inputs starting this far below the top.
const GEN_INPUT_BASE_Y: f64 = 150.0;
const GEN_INPUT_SPACING: f64 = 50.0;

pub fn output_port(node: &NodeData) -> (f64, f64) {
    (node.x + NODE_CARD_WIDTH, node.y + NODE_PORT_OFFSET_Y)
}

/// Input anchor.  `in-N` selects the N-th stacked input on a generator card;
/// every other node has a single input.
pub fn input_port(node: &NodeData, port: Option<&str>) -> (f64, f64) {
    let index = port
        .and_then(|p| p.strip_prefix("in-"))
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n >= 1);
    match (node.node_type, index) {
        (NodeType::Gen | NodeType::Videogen, Some(n)) => (
            node.x,
            node.y + GEN_INPUT_BASE_Y + f64::from(n - 1) * GEN_INPUT_SPACING,
        ),
        _ => (node.x, node.y + NODE_PORT_OFFSET_Y),
    }
}

/// Horizontal-tangent cubic from `from` to `to`.
pub fn curve_path(from: (f64, f64), to: (f64, f64)) -> String {
    let (sx, sy) = from;
    let (tx, ty) = to;
    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        sx,
        sy,
        sx + CONNECTION_CURVE_OFFSET,
        sy,
        tx - CONNECTION_CURVE_OFFSET,
        ty,
        tx,
        ty
    )
}

/// SVG path for a connection, or `None` when an endpoint no longer exists.
pub fn connection_path(connection: &Connection, nodes: &[NodeData]) -> Option<String> {
    let source = nodes.iter().find(|n| n.id == connection.source_id)?;
    let target = nodes.iter().find(|n| n.id == connection.target_id)?;
    Some(curve_path(
        output_port(source),
        input_port(target, connection.target_port.as_deref()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::placement::{initial_connections, initial_nodes};

    #[test]
    fn seed_paths_match_layout() {
        let nodes = initial_nodes();
        let conns = initial_connections();
        assert_eq!(
            connection_path(&conns[0], &nodes).unwrap(),
            "M 640 380 C 740 380, 760 500, 860 500"
        );
        assert_eq!(
            connection_path(&conns[1], &nodes).unwrap(),
            "M 640 600 C 740 600, 760 550, 860 550"
        );
    }

    #[test]
    fn dangling_connection_has_no_path() {
        let nodes = initial_nodes();
        let conn = Connection {
            id: "x".into(),
            source_id: "missing".into(),
            target_id: "gen".into(),
            source_port: None,
            target_port: None,
        };
        assert_eq!(connection_path(&conn, &nodes), None);
    }

    #[test]
    fn single_input_nodes_ignore_port_index() {
        let nodes = initial_nodes();
        let text = &nodes[1];
        assert_eq!(input_port(text, Some("in-3")), (400.0, 600.0));
    }
}
