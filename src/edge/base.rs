//! Base edge entity.
//!
//! Endpoints, identity token, style and the draw/move/delete lifecycle of a
//! single line primitive. The edge owns its line exclusively; node entities
//! are only referenced by handle.

use log::debug;

use super::geometry;
use super::token::{create_edge_token, EdgeToken};
use super::types::{CanvasEdge, EdgeError};
use crate::canvas::{Canvas, CurvePoints, ItemId, LineStyle, Point};
use crate::link::NodeId;

/// A line between two nodes on the drawing surface
#[derive(Debug, Clone)]
pub struct Edge {
    src: NodeId,
    dst: Option<NodeId>,
    id: Option<ItemId>,
    arc: f64,
    token: Option<EdgeToken>,
    style: LineStyle,
    tag: &'static str,
    /// Last geometry pushed to the surface
    line: Option<CurvePoints>,
    hidden: bool,
    /// Set by the first draw and kept after delete
    drawn: bool,
}

impl Edge {
    pub fn new(src: NodeId, dst: Option<NodeId>, style: LineStyle, tag: &'static str) -> Self {
        Self {
            src,
            dst,
            id: None,
            arc: 0.0,
            token: None,
            style,
            tag,
            line: None,
            hidden: false,
            drawn: false,
        }
    }

    pub fn src(&self) -> NodeId {
        self.src
    }

    pub fn dst(&self) -> Option<NodeId> {
        self.dst
    }

    /// Surface id of the line, absent before drawing and after deletion
    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn token(&self) -> Option<EdgeToken> {
        self.token
    }

    pub fn arc(&self) -> f64 {
        self.arc
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Current line geometry as last pushed to the surface
    pub fn line(&self) -> Option<&CurvePoints> {
        self.line.as_ref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Fix the destination and compute the token.
    ///
    /// The token is immutable once assigned.
    pub(crate) fn set_destination(&mut self, dst: NodeId) -> Result<EdgeToken, EdgeError> {
        if self.token.is_some() {
            return Err(EdgeError::AlreadyCompleted { src: self.src });
        }
        let token = create_edge_token(self.src, dst);
        self.dst = Some(dst);
        self.token = Some(token);
        Ok(token)
    }

    /// Adopt a token resolved by the host. It must match the endpoints.
    pub(crate) fn adopt_token(&mut self, token: EdgeToken) -> Result<(), EdgeError> {
        let dst = self.dst.ok_or(EdgeError::NotCompleted { src: self.src })?;
        if token != create_edge_token(self.src, dst) {
            return Err(EdgeError::TokenMismatch {
                token,
                src: self.src,
                dst,
            });
        }
        if self.token.is_some_and(|current| current != token) {
            return Err(EdgeError::AlreadyCompleted { src: self.src });
        }
        self.token = Some(token);
        Ok(())
    }

    /// Create the line through the computed midpoint. Only valid once per edge.
    pub fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        src_pos: Point,
        dst_pos: Point,
    ) -> Result<ItemId, EdgeError> {
        if self.drawn {
            return Err(EdgeError::AlreadyDrawn { src: self.src });
        }
        Ok(self.draw_line(canvas, src_pos, dst_pos))
    }

    pub(crate) fn draw_line(
        &mut self,
        canvas: &mut dyn Canvas,
        src_pos: Point,
        dst_pos: Point,
    ) -> ItemId {
        let points = geometry::curve(src_pos, dst_pos, self.arc);
        let id = canvas.create_line(points, &self.style, self.tag);
        self.drawn = true;
        self.id = Some(id);
        self.line = Some(points);
        id
    }

    /// Follow the endpoint `node` to `(x, y)`.
    ///
    /// Returns false, leaving the line untouched, when `node` is neither
    /// endpoint. A self loop moves both ends.
    pub fn move_node(&mut self, canvas: &mut dyn Canvas, node: NodeId, x: f64, y: f64) -> bool {
        let mut matched = false;
        if node == self.src {
            self.move_src(canvas, x, y);
            matched = true;
        }
        if self.dst == Some(node) {
            self.move_dst(canvas, x, y);
            matched = true;
        }
        if !matched {
            debug!("Edge {}->{:?} ignoring move of node {}", self.src, self.dst, node);
        }
        matched
    }

    /// Move the source end, keeping the destination where it was last drawn
    pub fn move_src(&mut self, canvas: &mut dyn Canvas, x: f64, y: f64) {
        if let Some(line) = self.line {
            self.redraw_line(canvas, Point::new(x, y), line.dst);
        }
    }

    /// Move the destination end, keeping the source where it was last drawn
    pub fn move_dst(&mut self, canvas: &mut dyn Canvas, x: f64, y: f64) {
        if let Some(line) = self.line {
            self.redraw_line(canvas, line.src, Point::new(x, y));
        }
    }

    fn redraw_line(&mut self, canvas: &mut dyn Canvas, src_pos: Point, dst_pos: Point) {
        let points = geometry::curve(src_pos, dst_pos, self.arc);
        self.line = Some(points);
        if let Some(id) = self.id {
            canvas.move_line(id, points);
        }
    }

    /// Change curvature, bending an already drawn line in place
    pub fn set_arc(&mut self, canvas: &mut dyn Canvas, arc: f64) {
        self.arc = arc;
        if let Some(line) = self.line {
            self.redraw_line(canvas, line.src, line.dst);
        }
    }

    pub fn set_style(&mut self, canvas: &mut dyn Canvas, style: LineStyle) {
        if let Some(id) = self.id {
            canvas.style_line(id, &style);
        }
        self.style = style;
    }

    /// Hide or reveal the line without destroying it
    pub fn set_hidden(&mut self, canvas: &mut dyn Canvas, hidden: bool) {
        if let Some(id) = self.id {
            canvas.set_hidden(id, hidden);
        }
        self.hidden = hidden;
    }

    /// Remove the line. Calling this again is a no-op returning false.
    pub fn delete(&mut self, canvas: &mut dyn Canvas) -> bool {
        match self.id.take() {
            Some(id) => {
                canvas.delete(id);
                self.line = None;
                true
            }
            None => false,
        }
    }
}

impl CanvasEdge for Edge {
    fn edge(&self) -> &Edge {
        self
    }

    fn move_node(&mut self, canvas: &mut dyn Canvas, node: NodeId, x: f64, y: f64) -> bool {
        Edge::move_node(self, canvas, node, x, y)
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) -> bool {
        Edge::delete(self, canvas)
    }
}
