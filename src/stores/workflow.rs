use crate::models::{Connection, NodeData, NodePatch};

/// Canvas document plus run/selection flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowStore {
    pub nodes: Vec<NodeData>,
    pub connections: Vec<Connection>,
    pub selected_node_id: Option<String>,
    pub is_running: bool,
    pub has_result: bool,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_nodes(&mut self, nodes: Vec<NodeData>) {
        self.nodes = nodes;
    }

    pub fn set_connections(&mut self, connections: Vec<Connection>) {
        self.connections = connections;
    }

    /// Appends unconditionally; duplicate ids are the caller's problem.
    pub fn add_node(&mut self, node: NodeData) {
        self.nodes.push(node);
    }

    /// Returns false when no node has `id`.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                patch.apply(node);
                true
            }
            None => false,
        }
    }

    /// Removes the node and every connection touching it.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
        self.connections
            .retain(|c| c.source_id != id && c.target_id != id);
        if self.selected_node_id.as_deref() == Some(id) {
            self.selected_node_id = None;
        }
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn remove_connection(&mut self, id: &str) {
        self.connections.retain(|c| c.id != id);
    }

    pub fn select_node(&mut self, id: Option<String>) {
        self.selected_node_id = id;
    }

    pub fn selected_node(&self) -> Option<&NodeData> {
        let id = self.selected_node_id.as_deref()?;
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    pub fn set_has_result(&mut self, has_result: bool) {
        self.has_result = has_result;
    }

    /// Enter the running state.  Returns false (and changes nothing) when a
    /// run is already in progress, so only one completion timer is armed.
    pub fn start_run(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.has_result = false;
        self.is_running = true;
        true
    }

    pub fn finish_run(&mut self) {
        self.is_running = false;
        self.has_result = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
