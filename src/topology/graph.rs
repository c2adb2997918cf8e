//! Host topology graph.
//!
//! Owns the drawing surface, the node table, the broadcast-domain mapping
//! and every edge, indexed by token. UI events (pointer drags, completion
//! clicks, context actions) and backend events (link records, throughput
//! samples) enter here and are routed to the affected edges.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use super::nodes::NodeTable;
use super::types::{NodeLookup, TopologyNode};
use crate::canvas::{Canvas, ItemId, MemoryCanvas, Point};
use crate::config::EdgeConfig;
use crate::context::{ActionOutcome, ContextMenu, EdgeAction, LinkConfigurator};
use crate::edge::{
    create_edge_token, CanvasEdge, EdgeError, EdgeState, EdgeToken, InteractiveEdge, WirelessEdge,
};
use crate::link::{Link, NodeId, NodeKind};
use crate::wireless::{Classification, WirelessNetwork};

/// The topology being edited, with everything drawn on its surface
#[derive(Debug)]
pub struct TopologyGraph<C: Canvas> {
    canvas: C,
    config: EdgeConfig,
    nodes: NodeTable,
    edges: BTreeMap<EdgeToken, InteractiveEdge>,
    pending: Option<InteractiveEdge>,
    wireless_edges: BTreeMap<EdgeToken, WirelessEdge>,
    wireless_network: WirelessNetwork,
    runtime: bool,
}

impl<C: Canvas> TopologyGraph<C> {
    pub fn new(canvas: C, config: EdgeConfig) -> Self {
        Self {
            canvas,
            config,
            nodes: NodeTable::new(),
            edges: BTreeMap::new(),
            pending: None,
            wireless_edges: BTreeMap::new(),
            wireless_network: WirelessNetwork::new(),
            runtime: false,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }

    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn wireless_network(&self) -> &WirelessNetwork {
        &self.wireless_network
    }

    pub fn edge(&self, token: EdgeToken) -> Option<&InteractiveEdge> {
        self.edges.get(&token)
    }

    /// Mutable access for hosts wiring their own dialogs
    pub fn edge_mut(&mut self, token: EdgeToken) -> Option<&mut InteractiveEdge> {
        self.edges.get_mut(&token)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&EdgeToken, &InteractiveEdge)> {
        self.edges.iter()
    }

    pub fn wireless_edge(&self, token: EdgeToken) -> Option<&WirelessEdge> {
        self.wireless_edges.get(&token)
    }

    pub fn pending(&self) -> Option<&InteractiveEdge> {
        self.pending.as_ref()
    }

    pub fn is_runtime(&self) -> bool {
        self.runtime
    }

    /// Switch between edit mode and a running session
    pub fn set_runtime(&mut self, runtime: bool) {
        debug!("Session runtime mode: {}", runtime);
        self.runtime = runtime;
    }

    /// Place a node on the surface
    pub fn add_node(&mut self, id: NodeId, kind: NodeKind, position: Point) {
        if self.nodes.insert(id, kind, position).is_some() {
            warn!("Node {} replaced", id);
        }
    }

    /// Start drawing an edge from `src` toward `pointer`
    pub fn begin_edge(&mut self, src: NodeId, pointer: Point) -> Result<(), EdgeError> {
        if let Some(pending) = &self.pending {
            return Err(EdgeError::PendingEdgeExists(pending.src()));
        }
        let src_pos = self.nodes.node_position(src).ok_or(EdgeError::UnknownNode(src))?;
        let pending = InteractiveEdge::new(&mut self.canvas, &self.config, src, src_pos, pointer);
        self.pending = Some(pending);
        Ok(())
    }

    /// Follow the pointer with the pending edge's free end
    pub fn drag_pending(&mut self, x: f64, y: f64) {
        if let Some(pending) = self.pending.as_mut() {
            pending.follow_pointer(&mut self.canvas, x, y);
        }
    }

    /// Finish the pending edge on `dst`.
    ///
    /// Self loops and pairs that are already linked are refused; the
    /// pending edge is discarded in every failure case.
    pub fn complete_edge(&mut self, dst: NodeId) -> Result<EdgeToken, EdgeError> {
        let mut pending = self.pending.take().ok_or(EdgeError::NoPendingEdge)?;
        let src = pending.src();

        let refusal = if src == dst {
            Some(EdgeError::SelfLoop(src))
        } else {
            let token = create_edge_token(src, dst);
            self.edges
                .contains_key(&token)
                .then_some(EdgeError::DuplicateLink(token))
        };
        if let Some(err) = refusal {
            pending.delete(&mut self.canvas);
            return Err(err);
        }

        match pending.complete(&mut self.canvas, &mut self.nodes, &mut self.wireless_network, dst) {
            Ok(token) => {
                self.edges.insert(token, pending);
                Ok(token)
            }
            Err(err) => {
                pending.delete(&mut self.canvas);
                Err(err)
            }
        }
    }

    /// Abandon the pending edge. Returns false when nothing was being drawn.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(mut pending) => {
                debug!("Cancel edge from node {}", pending.src());
                pending.delete(&mut self.canvas);
                true
            }
            None => false,
        }
    }

    /// Move a node and every edge attached to it
    pub fn move_node(&mut self, node: NodeId, x: f64, y: f64) -> bool {
        if !self.nodes.set_position(node, Point::new(x, y)) {
            warn!("Move of unknown node {}", node);
            return false;
        }
        let canvas: &mut dyn Canvas = &mut self.canvas;
        for edge in self.edges.values_mut().filter(|e| e.touches(node)) {
            edge.move_node(canvas, node, x, y);
        }
        for edge in self.wireless_edges.values_mut().filter(|e| e.touches(node)) {
            edge.move_node(canvas, node, x, y);
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.move_node(canvas, node, x, y);
        }
        true
    }

    /// Bind a backend link record to the edge between its two nodes
    pub fn bind_link(&mut self, link: Link) -> Result<EdgeToken, EdgeError> {
        let token = create_edge_token(link.node_one_id, link.node_two_id);
        let edge = self.edges.get_mut(&token).ok_or(EdgeError::UnknownEdge(token))?;
        edge.set_link(&mut self.canvas, link)?;
        Ok(token)
    }

    /// Apply a raw throughput sample to the edge `token`.
    ///
    /// Returns `Ok(false)` when no such edge exists, e.g. a sample that
    /// arrives after the edge was deleted.
    pub fn set_throughput(&mut self, token: EdgeToken, throughput: f64) -> Result<bool, EdgeError> {
        match self.edges.get_mut(&token) {
            Some(edge) => edge.set_throughput(&mut self.canvas, &self.config, throughput),
            None => {
                warn!("Throughput sample for unknown edge {}", token);
                Ok(false)
            }
        }
    }

    /// Traffic monitoring stopped: clear every throughput label
    pub fn reset_throughputs(&mut self) {
        for edge in self.edges.values_mut() {
            edge.reset(&mut self.canvas);
        }
    }

    /// Remove an edge and its labels. Returns false if no such edge exists.
    pub fn delete_edge(&mut self, token: EdgeToken) -> bool {
        match self.edges.remove(&token) {
            Some(mut edge) => edge.delete(&mut self.canvas),
            None => {
                debug!("Delete of unknown edge {}", token);
                false
            }
        }
    }

    /// Draw a resolved wireless link between two nodes. Drawing an existing
    /// link again is a no-op.
    pub fn add_wireless_link(&mut self, src: NodeId, dst: NodeId) -> Result<EdgeToken, EdgeError> {
        let token = create_edge_token(src, dst);
        if self.wireless_edges.contains_key(&token) {
            return Ok(token);
        }
        let src_pos = self.nodes.node_position(src).ok_or(EdgeError::UnknownNode(src))?;
        let dst_pos = self.nodes.node_position(dst).ok_or(EdgeError::UnknownNode(dst))?;
        let edge = WirelessEdge::new(
            &mut self.canvas,
            &self.config,
            src,
            dst,
            src_pos,
            dst_pos,
            token,
        )?;
        self.wireless_edges.insert(token, edge);
        Ok(token)
    }

    pub fn delete_wireless_link(&mut self, src: NodeId, dst: NodeId) -> bool {
        self.wireless_edges
            .remove(&create_edge_token(src, dst))
            .is_some_and(|mut edge| edge.delete(&mut self.canvas))
    }

    /// Assign curvature to an edge, e.g. to separate it from a wireless link
    /// drawn between the same pair
    pub fn set_arc(&mut self, token: EdgeToken, arc: f64) -> Result<(), EdgeError> {
        let edge = self.edges.get_mut(&token).ok_or(EdgeError::UnknownEdge(token))?;
        edge.set_arc(&mut self.canvas, arc);
        Ok(())
    }

    /// Menu shown on secondary-button release over `token`
    pub fn context_menu(&self, token: EdgeToken) -> Result<ContextMenu, EdgeError> {
        let edge = self.edges.get(&token).ok_or(EdgeError::UnknownEdge(token))?;
        Ok(edge.context_menu(self.runtime))
    }

    /// Run a context action chosen on the edge `token`
    pub fn handle_action(
        &mut self,
        token: EdgeToken,
        action: EdgeAction,
        configurator: &mut dyn LinkConfigurator,
    ) -> Result<ActionOutcome, EdgeError> {
        if !self.context_menu(token)?.is_enabled(action) {
            return Err(EdgeError::ActionDisabled(action));
        }
        match action {
            EdgeAction::Configure => {
                let edge = self.edges.get_mut(&token).ok_or(EdgeError::UnknownEdge(token))?;
                edge.configure(&mut self.canvas, configurator)?;
                Ok(ActionOutcome::Configured)
            }
            EdgeAction::Delete => {
                self.delete_edge(token);
                Ok(ActionOutcome::Deleted)
            }
            EdgeAction::Split | EdgeAction::Merge => {
                warn!("No handler for {:?} on edge {}", action, token);
                Ok(ActionOutcome::Unhandled(action))
            }
        }
    }

    /// Give back the surface, e.g. when the topology is closed
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

/// Per-edge summary in a [`Snapshot`]
#[derive(Debug, Serialize)]
pub struct EdgeSummary {
    pub token: EdgeToken,
    pub src: NodeId,
    pub dst: Option<NodeId>,
    pub state: EdgeState,
    pub classification: Option<Classification>,
    pub line: Option<ItemId>,
    pub hidden: bool,
    pub labels: Vec<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_kbps: Option<f64>,
}

/// Serializable view of a graph drawn on a [`MemoryCanvas`]
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub nodes: Vec<&'a TopologyNode>,
    pub edges: Vec<EdgeSummary>,
    pub wireless_links: Vec<EdgeToken>,
    pub wireless_network: &'a WirelessNetwork,
    pub canvas: &'a MemoryCanvas,
}

impl TopologyGraph<MemoryCanvas> {
    /// Capture nodes, edges, broadcast domains and every drawn primitive
    pub fn snapshot(&self) -> Snapshot<'_> {
        let edges = self
            .edges
            .iter()
            .map(|(token, edge)| EdgeSummary {
                token: *token,
                src: edge.src(),
                dst: edge.dst(),
                state: edge.state(),
                classification: edge.classification(),
                line: edge.edge().id(),
                hidden: edge.edge().is_hidden(),
                labels: [
                    edge.source_label(),
                    edge.destination_label(),
                    edge.throughput_label(),
                ]
                .into_iter()
                .flatten()
                .collect(),
                throughput_kbps: edge.throughput(),
            })
            .collect();

        Snapshot {
            nodes: self.nodes.iter().collect(),
            edges,
            wireless_links: self.wireless_edges.keys().copied().collect(),
            wireless_network: &self.wireless_network,
            canvas: &self.canvas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoChanges;

    impl LinkConfigurator for NoChanges {
        fn configure(&mut self, _edge: &mut InteractiveEdge) {}
    }

    fn graph() -> TopologyGraph<MemoryCanvas> {
        let mut graph = TopologyGraph::new(MemoryCanvas::new(), EdgeConfig::default());
        graph.add_node(1, NodeKind::Default, Point::new(0.0, 0.0));
        graph.add_node(2, NodeKind::Default, Point::new(100.0, 0.0));
        graph.add_node(3, NodeKind::WirelessLan, Point::new(0.0, 100.0));
        graph.add_node(4, NodeKind::Default, Point::new(100.0, 100.0));
        graph
    }

    fn link(graph: &mut TopologyGraph<MemoryCanvas>, src: NodeId, dst: NodeId) -> EdgeToken {
        graph.begin_edge(src, Point::new(50.0, 50.0)).unwrap();
        graph.complete_edge(dst).unwrap()
    }

    #[test]
    fn test_drag_then_complete() {
        let mut graph = graph();
        graph.begin_edge(1, Point::new(10.0, 10.0)).unwrap();
        graph.drag_pending(70.0, 30.0);
        let id = graph.pending().unwrap().edge().id().unwrap();
        assert_eq!(graph.canvas().line_points(id).unwrap().dst, Point::new(70.0, 30.0));

        let token = graph.complete_edge(2).unwrap();
        assert!(graph.pending().is_none());
        assert_eq!(graph.edge(token).unwrap().edge().id(), Some(id));
        assert_eq!(graph.canvas().line_points(id).unwrap().dst, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_only_one_pending_edge() {
        let mut graph = graph();
        graph.begin_edge(1, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(
            graph.begin_edge(2, Point::new(0.0, 0.0)),
            Err(EdgeError::PendingEdgeExists(1))
        );
        assert_eq!(graph.begin_edge(9, Point::new(0.0, 0.0)), Err(EdgeError::PendingEdgeExists(1)));
        assert!(graph.cancel_pending());
        assert!(!graph.cancel_pending());
        assert!(graph.canvas().is_empty());
        assert_eq!(graph.begin_edge(9, Point::new(0.0, 0.0)), Err(EdgeError::UnknownNode(9)));
    }

    #[test]
    fn test_refusals_discard_pending() {
        let mut graph = graph();
        assert_eq!(graph.complete_edge(2), Err(EdgeError::NoPendingEdge));

        graph.begin_edge(1, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.complete_edge(1), Err(EdgeError::SelfLoop(1)));
        assert!(graph.canvas().is_empty());

        let token = link(&mut graph, 1, 2);
        graph.begin_edge(2, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.complete_edge(1), Err(EdgeError::DuplicateLink(token)));
        assert_eq!(graph.canvas().len(), 1);

        graph.begin_edge(2, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.complete_edge(77), Err(EdgeError::UnknownNode(77)));
        assert_eq!(graph.canvas().len(), 1);
        assert!(graph.pending().is_none());
    }

    #[test]
    fn test_move_node_fans_out() {
        let mut graph = graph();
        let a = link(&mut graph, 1, 2);
        let b = link(&mut graph, 4, 1);
        let c = link(&mut graph, 2, 4);

        assert!(graph.move_node(1, -20.0, -20.0));
        let line = |token| {
            let id = graph.edge(token).unwrap().edge().id().unwrap();
            graph.canvas().line_points(id).unwrap()
        };
        assert_eq!(line(a).src, Point::new(-20.0, -20.0));
        assert_eq!(line(b).dst, Point::new(-20.0, -20.0));
        assert_eq!(line(c).src, Point::new(100.0, 0.0));
        assert_eq!(graph.nodes().node_position(1), Some(Point::new(-20.0, -20.0)));

        assert!(!graph.move_node(99, 0.0, 0.0));
    }

    #[test]
    fn test_throughput_fan_out_and_reset() {
        let mut graph = graph();
        let a = link(&mut graph, 1, 2);
        let b = link(&mut graph, 2, 4);
        graph.set_throughput(a, 500_000.0).unwrap();
        graph.set_throughput(b, 100.0).unwrap();
        assert_eq!(graph.canvas().tagged(crate::canvas::tags::THROUGHPUT).len(), 2);

        graph.reset_throughputs();
        assert!(graph.canvas().tagged(crate::canvas::tags::THROUGHPUT).is_empty());
        let id = graph.edge(a).unwrap().edge().id().unwrap();
        assert_eq!(graph.canvas().line_style(id), Some(&graph.config().edge_style()));

        assert_eq!(graph.set_throughput(create_edge_token(1, 4), 1.0), Ok(false));
        assert!(graph.canvas().tagged(crate::canvas::tags::THROUGHPUT).is_empty());
    }

    #[test]
    fn test_throughput_after_delete_is_dropped() {
        let mut graph = graph();
        let token = link(&mut graph, 1, 2);
        assert_eq!(graph.set_throughput(token, 1000.0), Ok(true));
        assert!(graph.delete_edge(token));

        assert_eq!(graph.set_throughput(token, 1000.0), Ok(false));
        assert!(graph.canvas().is_empty());
        assert!(graph.move_node(1, 10.0, 10.0));
    }

    #[test]
    fn test_wireless_hub_aggregation() {
        let mut graph = graph();
        link(&mut graph, 3, 4);
        link(&mut graph, 1, 3);

        let stations: Vec<_> = graph
            .wireless_network()
            .stations(3)
            .unwrap()
            .iter()
            .copied()
            .collect();
        assert_eq!(stations, vec![1, 4]);
        assert_eq!(graph.nodes().get(1).unwrap().antennas, 1);
        assert_eq!(graph.nodes().get(4).unwrap().antennas, 1);
        assert_eq!(graph.nodes().get(3).unwrap().antennas, 0);
    }

    #[test]
    fn test_wireless_links() {
        let mut graph = graph();
        let token = graph.add_wireless_link(1, 4).unwrap();
        assert_eq!(graph.add_wireless_link(4, 1).unwrap(), token);
        assert_eq!(graph.canvas().tagged(crate::canvas::tags::WIRELESS_EDGE).len(), 1);

        graph.move_node(4, 200.0, 200.0);
        let id = graph.wireless_edge(token).unwrap().edge().id().unwrap();
        assert_eq!(graph.canvas().line_points(id).unwrap().dst, Point::new(200.0, 200.0));

        assert!(graph.delete_wireless_link(4, 1));
        assert!(!graph.delete_wireless_link(4, 1));
        assert!(graph.canvas().is_empty());
    }

    #[test]
    fn test_actions_gated_by_runtime() {
        let mut graph = graph();
        let token = link(&mut graph, 1, 2);

        graph.set_runtime(true);
        assert_eq!(
            graph.handle_action(token, EdgeAction::Delete, &mut NoChanges),
            Err(EdgeError::ActionDisabled(EdgeAction::Delete))
        );
        assert_eq!(
            graph.handle_action(token, EdgeAction::Configure, &mut NoChanges),
            Ok(ActionOutcome::Configured)
        );

        graph.set_runtime(false);
        assert_eq!(
            graph.handle_action(token, EdgeAction::Split, &mut NoChanges),
            Ok(ActionOutcome::Unhandled(EdgeAction::Split))
        );
        assert_eq!(
            graph.handle_action(token, EdgeAction::Delete, &mut NoChanges),
            Ok(ActionOutcome::Deleted)
        );
        assert!(graph.edge(token).is_none());
        assert!(graph.canvas().is_empty());
        assert!(!graph.delete_edge(token));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut graph = graph();
        let token = link(&mut graph, 1, 2);
        graph.bind_link(Link::new(2, 1)).unwrap();
        graph.set_throughput(token, 1000.0).unwrap();

        let json = serde_json::to_value(graph.snapshot()).unwrap();
        assert_eq!(json["edges"][0]["state"], "completed");
        assert_eq!(json["edges"][0]["classification"]["kind"], "wired");
        assert_eq!(json["edges"][0]["labels"].as_array().unwrap().len(), 3);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    }
}
