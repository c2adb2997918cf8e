//! # Topolink - Interactive topology edges for network emulation front-ends
//!
//! This library maintains the visual and logical model of links between
//! emulated network nodes on a drawing surface: link identity, geometry,
//! label placement, and the aggregation of wireless links into shared
//! broadcast domains.
//!
//! ## Overview
//!
//! A host application owns the drawing surface and the nodes. Topolink owns
//! the edges drawn between them and keeps every primitive an edge created
//! consistent with node positions and link data supplied from outside.
//!
//! ## Key Features
//!
//! - **Order-independent identity**: edges are keyed by a canonical token,
//!   so `(a, b)` and `(b, a)` address the same link
//! - **Curved geometry**: parallel edges separate through an arc offset
//! - **Synchronized labels**: endpoint interface labels and the throughput
//!   label follow the line after every node move
//! - **Wireless aggregation**: links to a wireless hub fold into its
//!   broadcast domain and show as antenna markers instead of lines
//! - **Throughput styling**: lines escalate colour and width above a
//!   configurable threshold
//!
//! ## Architecture
//!
//! - `canvas`: drawing-surface seam and a headless recording surface
//! - `link`: link, interface and node-kind records from the backend
//! - `edge`: tokens, geometry, base/wireless/interactive edges
//! - `wireless`: classification and per-hub broadcast domains
//! - `context`: context actions and the configuration-dialog seam
//! - `topology`: the host graph routing events to edges
//! - `config`, `config_loader`: style and throughput policy
//! - `scenario`: YAML replay of editing sessions
//!
//! ## Example Usage
//!
//! ```rust
//! use topolink::canvas::{MemoryCanvas, Point};
//! use topolink::config::EdgeConfig;
//! use topolink::link::NodeKind;
//! use topolink::topology::TopologyGraph;
//!
//! let mut graph = TopologyGraph::new(MemoryCanvas::new(), EdgeConfig::default());
//! graph.add_node(1, NodeKind::Default, Point::new(0.0, 0.0));
//! graph.add_node(2, NodeKind::Default, Point::new(100.0, 0.0));
//!
//! graph.begin_edge(1, Point::new(40.0, 10.0))?;
//! let token = graph.complete_edge(2)?;
//! graph.set_throughput(token, 12345.0)?;
//! graph.move_node(2, 100.0, 80.0);
//! # Ok::<(), topolink::edge::EdgeError>(())
//! ```
//!
//! ## Error Handling
//!
//! UI-ordering anomalies (double deletes, moves for foreign nodes) are
//! tolerated. Caller bugs such as completing an edge twice surface as
//! [`edge::EdgeError`]. File loading and the CLI use `color_eyre`.

pub mod canvas;
pub mod config;
pub mod config_loader;
pub mod context;
pub mod edge;
pub mod link;
pub mod scenario;
pub mod topology;
pub mod wireless;
