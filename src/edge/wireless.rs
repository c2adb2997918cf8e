//! Resolved wireless link.
//!
//! Drawn between two nodes the backend reports as sharing a wireless
//! medium, e.g. stations within range of each other. It is created complete
//! and never carries labels.

use log::debug;

use super::base::Edge;
use super::token::EdgeToken;
use super::types::{CanvasEdge, EdgeError};
use crate::canvas::{tags, Canvas, Point};
use crate::config::EdgeConfig;
use crate::link::NodeId;

#[derive(Debug, Clone)]
pub struct WirelessEdge {
    edge: Edge,
}

impl WirelessEdge {
    /// Draw a wireless link from `src` to `dst` under the host-resolved `token`
    pub fn new(
        canvas: &mut dyn Canvas,
        config: &EdgeConfig,
        src: NodeId,
        dst: NodeId,
        src_pos: Point,
        dst_pos: Point,
        token: EdgeToken,
    ) -> Result<Self, EdgeError> {
        debug!("drawing wireless link from node {} to node {}", src, dst);
        let mut edge = Edge::new(src, Some(dst), config.wireless_style(), tags::WIRELESS_EDGE);
        edge.adopt_token(token)?;
        edge.draw_line(canvas, src_pos, dst_pos);
        Ok(Self { edge })
    }
}

impl CanvasEdge for WirelessEdge {
    fn edge(&self) -> &Edge {
        &self.edge
    }

    fn move_node(&mut self, canvas: &mut dyn Canvas, node: NodeId, x: f64, y: f64) -> bool {
        self.edge.move_node(canvas, node, x, y)
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) -> bool {
        self.edge.delete(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;
    use crate::edge::create_edge_token;

    #[test]
    fn test_wireless_edge_style_and_tag() {
        let mut canvas = MemoryCanvas::new();
        let config = EdgeConfig::default();
        let edge = WirelessEdge::new(
            &mut canvas,
            &config,
            7,
            3,
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            create_edge_token(3, 7),
        )
        .unwrap();

        let id = edge.edge().id().unwrap();
        assert_eq!(canvas.tagged(tags::WIRELESS_EDGE), vec![id]);
        assert_eq!(canvas.line_style(id), Some(&config.wireless_style()));
        assert_eq!(edge.token(), Some(create_edge_token(7, 3)));
    }

    #[test]
    fn test_rejects_foreign_token() {
        let mut canvas = MemoryCanvas::new();
        let result = WirelessEdge::new(
            &mut canvas,
            &EdgeConfig::default(),
            1,
            2,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            create_edge_token(1, 3),
        );
        assert!(matches!(result, Err(EdgeError::TokenMismatch { .. })));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_follows_both_nodes() {
        let mut canvas = MemoryCanvas::new();
        let mut edge = WirelessEdge::new(
            &mut canvas,
            &EdgeConfig::default(),
            1,
            2,
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            create_edge_token(1, 2),
        )
        .unwrap();
        edge.move_node(&mut canvas, 2, 10.0, 10.0);
        edge.move_node(&mut canvas, 1, 5.0, 5.0);
        let points = canvas.line_points(edge.edge().id().unwrap()).unwrap();
        assert_eq!(points.src, Point::new(5.0, 5.0));
        assert_eq!(points.dst, Point::new(10.0, 10.0));
        assert!(edge.delete(&mut canvas));
        assert!(!edge.delete(&mut canvas));
    }
}
