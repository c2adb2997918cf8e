//! Headless recording surface.
//!
//! Keeps every primitive in memory so the CLI can print the resulting scene
//! and tests can assert on exact positions and styles.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::types::{CurvePoints, ItemId, LabelFont, LineStyle, Point};
use super::Canvas;
use crate::link::NodeId;

/// A primitive held by the [`MemoryCanvas`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanvasItem {
    Line {
        points: CurvePoints,
        style: LineStyle,
        hidden: bool,
        tag: String,
    },
    Text {
        at: Point,
        text: String,
        font: LabelFont,
        hidden: bool,
        tag: String,
    },
}

impl CanvasItem {
    pub fn tag(&self) -> &str {
        match self {
            CanvasItem::Line { tag, .. } | CanvasItem::Text { tag, .. } => tag,
        }
    }
}

/// In-memory [`Canvas`] implementation
#[derive(Debug, Default, Serialize)]
pub struct MemoryCanvas {
    #[serde(skip)]
    next_id: ItemId,
    items: BTreeMap<ItemId, CanvasItem>,
    /// Node icons in the order they were raised
    raised: Vec<NodeId>,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, item: CanvasItem) -> ItemId {
        self.next_id += 1;
        self.items.insert(self.next_id, item);
        self.next_id
    }

    pub fn item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of live primitives
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of all primitives carrying the given tag
    pub fn tagged(&self, tag: &str) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|(_, item)| item.tag() == tag)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn line_points(&self, id: ItemId) -> Option<CurvePoints> {
        match self.items.get(&id) {
            Some(CanvasItem::Line { points, .. }) => Some(*points),
            _ => None,
        }
    }

    pub fn line_style(&self, id: ItemId) -> Option<&LineStyle> {
        match self.items.get(&id) {
            Some(CanvasItem::Line { style, .. }) => Some(style),
            _ => None,
        }
    }

    pub fn text_position(&self, id: ItemId) -> Option<Point> {
        match self.items.get(&id) {
            Some(CanvasItem::Text { at, .. }) => Some(*at),
            _ => None,
        }
    }

    pub fn text(&self, id: ItemId) -> Option<&str> {
        match self.items.get(&id) {
            Some(CanvasItem::Text { text, .. }) => Some(text),
            _ => None,
        }
    }

    pub fn is_hidden(&self, id: ItemId) -> Option<bool> {
        match self.items.get(&id) {
            Some(CanvasItem::Line { hidden, .. }) | Some(CanvasItem::Text { hidden, .. }) => {
                Some(*hidden)
            }
            None => None,
        }
    }

    pub fn raised(&self) -> &[NodeId] {
        &self.raised
    }
}

impl Canvas for MemoryCanvas {
    fn create_line(&mut self, points: CurvePoints, style: &LineStyle, tag: &'static str) -> ItemId {
        self.allocate(CanvasItem::Line {
            points,
            style: style.clone(),
            hidden: false,
            tag: tag.to_string(),
        })
    }

    fn create_text(
        &mut self,
        at: Point,
        text: &str,
        font: &LabelFont,
        tag: &'static str,
    ) -> ItemId {
        self.allocate(CanvasItem::Text {
            at,
            text: text.to_string(),
            font: font.clone(),
            hidden: false,
            tag: tag.to_string(),
        })
    }

    fn move_line(&mut self, id: ItemId, new_points: CurvePoints) {
        match self.items.get_mut(&id) {
            Some(CanvasItem::Line { points, .. }) => *points = new_points,
            _ => debug!("Ignoring move of unknown line {}", id),
        }
    }

    fn move_text(&mut self, id: ItemId, new_at: Point) {
        match self.items.get_mut(&id) {
            Some(CanvasItem::Text { at, .. }) => *at = new_at,
            _ => debug!("Ignoring move of unknown text {}", id),
        }
    }

    fn set_text(&mut self, id: ItemId, new_text: &str) {
        match self.items.get_mut(&id) {
            Some(CanvasItem::Text { text, .. }) => *text = new_text.to_string(),
            _ => debug!("Ignoring text update of unknown item {}", id),
        }
    }

    fn style_line(&mut self, id: ItemId, new_style: &LineStyle) {
        match self.items.get_mut(&id) {
            Some(CanvasItem::Line { style, .. }) => *style = new_style.clone(),
            _ => debug!("Ignoring restyle of unknown line {}", id),
        }
    }

    fn set_hidden(&mut self, id: ItemId, state: bool) {
        match self.items.get_mut(&id) {
            Some(CanvasItem::Line { hidden, .. }) | Some(CanvasItem::Text { hidden, .. }) => {
                *hidden = state
            }
            None => debug!("Ignoring visibility change of unknown item {}", id),
        }
    }

    fn raise_node(&mut self, node: NodeId) {
        self.raised.push(node);
    }

    fn delete(&mut self, id: ItemId) -> bool {
        self.items.remove(&id).is_some()
    }
}
