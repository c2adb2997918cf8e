//! Drawing-surface collaborator.
//!
//! The edge model never renders anything itself. It asks a [`Canvas`] to
//! create, move, restyle and delete primitives, and keeps only the returned
//! [`ItemId`]s. Hit-testing, widgets and actual pixels belong to the surface.

pub mod memory;
pub mod tags;
pub mod types;

pub use memory::{CanvasItem, MemoryCanvas};
pub use types::{CurvePoints, ItemId, LabelFont, LineStyle, Point};

use crate::link::NodeId;

/// Primitive operations the edge model needs from a drawing surface.
///
/// Operations addressing an id the surface no longer knows must be ignored,
/// not treated as failures: UI event ordering is outside the model's control.
pub trait Canvas {
    /// Create a smoothed line through the three curve points
    fn create_line(&mut self, points: CurvePoints, style: &LineStyle, tag: &'static str) -> ItemId;

    /// Create a centered text primitive
    fn create_text(&mut self, at: Point, text: &str, font: &LabelFont, tag: &'static str) -> ItemId;

    /// Reposition an existing line
    fn move_line(&mut self, id: ItemId, points: CurvePoints);

    /// Reposition an existing text primitive
    fn move_text(&mut self, id: ItemId, at: Point);

    /// Replace the content of a text primitive
    fn set_text(&mut self, id: ItemId, text: &str);

    /// Change colour and width of a line
    fn style_line(&mut self, id: ItemId, style: &LineStyle);

    /// Show or hide a primitive without destroying it
    fn set_hidden(&mut self, id: ItemId, hidden: bool);

    /// Raise a node's icon above every other primitive.
    fn raise_node(&mut self, node: NodeId);

    /// Remove a primitive. Returns false when it was already gone.
    fn delete(&mut self, id: ItemId) -> bool;
}
