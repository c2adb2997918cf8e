//! Interactive edge.
//!
//! The link entity used while editing a topology. On top of the base line it
//! carries endpoint interfaces, the bound link record, and three text
//! labels that must follow the line geometry after every move:
//!
//! - source label, inset from the source end
//! - destination label, inset from the destination end
//! - throughput label at the center, only while traffic is reported
//!
//! ```text
//! Pending --complete--> Completed --delete--> Deleted
//!    \_________________delete_________________/
//! ```

use log::{debug, warn};

use super::base::Edge;
use super::geometry;
use super::labels::{endpoint_label, throughput_label, to_kbps};
use super::token::EdgeToken;
use super::types::{CanvasEdge, EdgeError, EdgeState};
use crate::canvas::{tags, Canvas, ItemId, LineStyle, Point};
use crate::config::{EdgeConfig, LabelConfig};
use crate::context::{ContextMenu, LinkConfigurator};
use crate::link::{Interface, Link, LinkOptions, NodeId};
use crate::topology::NodeLookup;
use crate::wireless::{Classification, WirelessNetwork};

/// A link being drawn or edited on the topology surface
#[derive(Debug, Clone)]
pub struct InteractiveEdge {
    edge: Edge,
    state: EdgeState,
    default_style: LineStyle,
    labels: LabelConfig,
    src_interface: Option<Interface>,
    dst_interface: Option<Interface>,
    link: Option<Link>,
    asymmetric_link: Option<LinkOptions>,
    text_src: Option<ItemId>,
    text_dst: Option<ItemId>,
    text_middle: Option<ItemId>,
    /// Last throughput sample in kbps
    throughput: Option<f64>,
    classification: Option<Classification>,
}

impl InteractiveEdge {
    /// Start a pending edge from `src`, drawn toward the provisional
    /// destination `dst_pos` (usually the pointer).
    pub fn new(
        canvas: &mut dyn Canvas,
        config: &EdgeConfig,
        src: NodeId,
        src_pos: Point,
        dst_pos: Point,
    ) -> Self {
        let default_style = config.edge_style();
        let mut edge = Edge::new(src, None, default_style.clone(), tags::EDGE);
        edge.draw_line(canvas, src_pos, dst_pos);
        Self {
            edge,
            state: EdgeState::Pending,
            default_style,
            labels: config.labels.clone(),
            src_interface: None,
            dst_interface: None,
            link: None,
            asymmetric_link: None,
            text_src: None,
            text_dst: None,
            text_middle: None,
            throughput: None,
            classification: None,
        }
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn src(&self) -> NodeId {
        self.edge.src()
    }

    pub fn dst(&self) -> Option<NodeId> {
        self.edge.dst()
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn src_interface(&self) -> Option<&Interface> {
        self.src_interface.as_ref()
    }

    pub fn dst_interface(&self) -> Option<&Interface> {
        self.dst_interface.as_ref()
    }

    pub fn asymmetric_link(&self) -> Option<&LinkOptions> {
        self.asymmetric_link.as_ref()
    }

    pub fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// Last throughput sample in kbps, while traffic is reported
    pub fn throughput(&self) -> Option<f64> {
        self.throughput
    }

    pub fn source_label(&self) -> Option<ItemId> {
        self.text_src
    }

    pub fn destination_label(&self) -> Option<ItemId> {
        self.text_dst
    }

    pub fn throughput_label(&self) -> Option<ItemId> {
        self.text_middle
    }

    fn ensure_alive(&self) -> Result<(), EdgeError> {
        if self.state == EdgeState::Deleted {
            return Err(EdgeError::Deleted { src: self.src() });
        }
        Ok(())
    }

    fn ensure_completed(&self) -> Result<(), EdgeError> {
        match self.state {
            EdgeState::Completed => Ok(()),
            EdgeState::Pending => Err(EdgeError::NotCompleted { src: self.src() }),
            EdgeState::Deleted => Err(EdgeError::Deleted { src: self.src() }),
        }
    }

    /// Drag the provisional destination of a pending edge
    pub fn follow_pointer(&mut self, canvas: &mut dyn Canvas, x: f64, y: f64) {
        if self.state == EdgeState::Pending {
            self.edge.move_dst(canvas, x, y);
        }
    }

    /// Bend the line and carry the labels along
    pub fn set_arc(&mut self, canvas: &mut dyn Canvas, arc: f64) {
        self.edge.set_arc(canvas, arc);
        self.update_labels(canvas);
    }

    /// Complete the edge against `dst`.
    ///
    /// Assigns the token, snaps the line to the destination node, runs
    /// wireless classification and raises both nodes above the line.
    pub fn complete(
        &mut self,
        canvas: &mut dyn Canvas,
        nodes: &mut dyn NodeLookup,
        network: &mut WirelessNetwork,
        dst: NodeId,
    ) -> Result<EdgeToken, EdgeError> {
        match self.state {
            EdgeState::Pending => {}
            EdgeState::Completed => return Err(EdgeError::AlreadyCompleted { src: self.src() }),
            EdgeState::Deleted => return Err(EdgeError::Deleted { src: self.src() }),
        }
        let src = self.src();
        nodes.node_kind(src).ok_or(EdgeError::UnknownNode(src))?;
        let dst_pos = nodes.node_position(dst).ok_or(EdgeError::UnknownNode(dst))?;

        let token = self.edge.set_destination(dst)?;
        self.edge.move_dst(canvas, dst_pos.x, dst_pos.y);
        self.state = EdgeState::Completed;
        self.classify_wireless(canvas, nodes, network)?;
        canvas.raise_node(src);
        canvas.raise_node(dst);
        debug!("Draw wired link from node {} to node {}", src, dst);
        Ok(token)
    }

    /// Decide whether this edge is part of a wireless domain.
    ///
    /// Runs once: later calls return the first result without touching the
    /// network or adding antennas again. Wireless edges hide their line,
    /// register under the hub, and put an antenna on the station.
    pub fn classify_wireless(
        &mut self,
        canvas: &mut dyn Canvas,
        nodes: &mut dyn NodeLookup,
        network: &mut WirelessNetwork,
    ) -> Result<Classification, EdgeError> {
        if let Some(classification) = self.classification {
            return Ok(classification);
        }
        let src = self.src();
        let dst = self.dst().ok_or(EdgeError::NotCompleted { src })?;

        let classification =
            Classification::classify(src, nodes.is_wireless(src), dst, nodes.is_wireless(dst));
        network.register(&classification);
        if classification.is_wireless() {
            self.edge.set_hidden(canvas, true);
            if let Some(node) = classification.antenna_node() {
                nodes.add_antenna(node);
            }
            debug!("Link {}-{} folded into wireless domain: {:?}", src, dst, classification);
        }
        self.classification = Some(classification);
        Ok(classification)
    }

    /// Bind the backend link record and draw the endpoint labels
    pub fn set_link(&mut self, canvas: &mut dyn Canvas, link: Link) -> Result<(), EdgeError> {
        self.ensure_completed()?;
        let src = self.src();
        let dst = self.dst().ok_or(EdgeError::NotCompleted { src })?;

        let touches = |node: NodeId| link.node_one_id == node || link.node_two_id == node;
        if touches(src) && touches(dst) {
            self.src_interface = link.interface_for(src).cloned();
            self.dst_interface = link.interface_for(dst).cloned();
        } else {
            warn!(
                "Link {}-{} bound to edge {}-{}, pairing interfaces by position",
                link.node_one_id, link.node_two_id, src, dst
            );
            self.src_interface = link.interface_one.clone();
            self.dst_interface = link.interface_two.clone();
        }
        self.link = Some(link);
        self.draw_labels(canvas);
        Ok(())
    }

    /// Replace the endpoint interfaces, e.g. from the configuration dialog
    pub fn set_interfaces(&mut self, src: Option<Interface>, dst: Option<Interface>) {
        self.src_interface = src;
        self.dst_interface = dst;
    }

    pub fn set_asymmetric_link(&mut self, options: Option<LinkOptions>) {
        self.asymmetric_link = options;
    }

    /// Label text for both endpoints
    pub fn create_labels(&self) -> (String, String) {
        (
            endpoint_label(self.src_interface.as_ref()),
            endpoint_label(self.dst_interface.as_ref()),
        )
    }

    /// Create the endpoint labels, or refresh their text if they exist
    fn draw_labels(&mut self, canvas: &mut dyn Canvas) {
        let Some(line) = self.edge.line().copied() else {
            return;
        };
        if self.text_src.is_some() && self.text_dst.is_some() {
            self.redraw(canvas);
            return;
        }
        let (p1, p2) = geometry::label_anchors(&line, self.labels.text_distance);
        let (label_one, label_two) = self.create_labels();
        if self.text_src.is_none() {
            self.text_src = Some(self.create_label(canvas, p1, &label_one, tags::LINK_INFO));
        }
        if self.text_dst.is_none() {
            self.text_dst = Some(self.create_label(canvas, p2, &label_two, tags::LINK_INFO));
        }
    }

    /// Labels of a line hidden by wireless aggregation start hidden too
    fn create_label(
        &self,
        canvas: &mut dyn Canvas,
        at: Point,
        text: &str,
        tag: &'static str,
    ) -> ItemId {
        let id = canvas.create_text(at, text, &self.labels.font, tag);
        if self.edge.is_hidden() {
            canvas.set_hidden(id, true);
        }
        id
    }

    /// Refresh endpoint label text after the interfaces changed
    pub fn redraw(&mut self, canvas: &mut dyn Canvas) {
        let (label_one, label_two) = self.create_labels();
        if let Some(id) = self.text_src {
            canvas.set_text(id, &label_one);
        }
        if let Some(id) = self.text_dst {
            canvas.set_text(id, &label_two);
        }
    }

    /// Move every label to match the current line geometry
    fn update_labels(&mut self, canvas: &mut dyn Canvas) {
        let Some(line) = self.edge.line().copied() else {
            return;
        };
        let (p1, p2) = geometry::label_anchors(&line, self.labels.text_distance);
        if let Some(id) = self.text_src {
            canvas.move_text(id, p1);
        }
        if let Some(id) = self.text_dst {
            canvas.move_text(id, p2);
        }
        if let Some(id) = self.text_middle {
            canvas.move_text(id, geometry::label_center(&line));
        }
    }

    /// Show a raw throughput sample and escalate the line style above the
    /// configured threshold.
    ///
    /// Samples arriving after the edge was deleted are dropped and return
    /// `Ok(false)`.
    pub fn set_throughput(
        &mut self,
        canvas: &mut dyn Canvas,
        config: &EdgeConfig,
        throughput: f64,
    ) -> Result<bool, EdgeError> {
        if self.state == EdgeState::Deleted {
            debug!("Dropping throughput sample for deleted edge {:?}", self.token());
            return Ok(false);
        }
        self.ensure_completed()?;
        let kbps = to_kbps(throughput);
        let value = throughput_label(kbps);
        match self.text_middle {
            Some(id) => canvas.set_text(id, &value),
            None => {
                if let Some(line) = self.edge.line().copied() {
                    let at = geometry::label_center(&line);
                    let id = self.create_label(canvas, at, &value, tags::THROUGHPUT);
                    self.text_middle = Some(id);
                }
            }
        }
        self.throughput = Some(kbps);
        self.edge.set_style(canvas, config.throughput_style(kbps));
        Ok(true)
    }

    /// Stop showing throughput: remove the center label and restore the
    /// default line style
    pub fn reset(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.text_middle.take() {
            canvas.delete(id);
        }
        self.throughput = None;
        if self.state != EdgeState::Deleted {
            self.edge.set_style(canvas, self.default_style.clone());
        }
    }

    /// Context menu for this edge given the session mode
    pub fn context_menu(&self, runtime: bool) -> ContextMenu {
        ContextMenu::for_edge(runtime)
    }

    /// Hand this edge to the configuration dialog, then refresh labels
    pub fn configure(
        &mut self,
        canvas: &mut dyn Canvas,
        configurator: &mut dyn LinkConfigurator,
    ) -> Result<(), EdgeError> {
        self.ensure_alive()?;
        configurator.configure(self);
        self.redraw(canvas);
        Ok(())
    }
}

impl CanvasEdge for InteractiveEdge {
    fn edge(&self) -> &Edge {
        &self.edge
    }

    fn move_node(&mut self, canvas: &mut dyn Canvas, node: NodeId, x: f64, y: f64) -> bool {
        let moved = self.edge.move_node(canvas, node, x, y);
        if moved {
            self.update_labels(canvas);
        }
        moved
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) -> bool {
        if self.state == EdgeState::Deleted {
            return false;
        }
        debug!("Delete canvas edge, id: {:?}", self.edge.id());
        self.edge.delete(canvas);
        for id in [self.text_src.take(), self.text_dst.take(), self.text_middle.take()]
            .into_iter()
            .flatten()
        {
            canvas.delete(id);
        }
        self.throughput = None;
        self.state = EdgeState::Deleted;
        true
    }
}
