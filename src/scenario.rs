//! Scenario replay.
//!
//! A scenario is a YAML script of nodes and UI/backend events. Replaying it
//! against a [`TopologyGraph`] exercises the same paths an interactive
//! session would: drawing links, dragging nodes, throughput samples,
//! configuration and context actions.
//!
//! ```yaml
//! nodes:
//!   - { id: 1, kind: default, x: 100, y: 100 }
//!   - { id: 2, kind: wireless_lan, x: 300, y: 100 }
//! steps:
//!   - { op: link, src: 1, dst: 2 }
//!   - { op: move, node: 1, x: 150, y: 200 }
//!   - { op: throughput, src: 1, dst: 2, value: 12345 }
//!   - { op: reset }
//! ```

use std::fs::File;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use serde::Deserialize;

use crate::canvas::{Canvas, Point};
use crate::context::{EdgeAction, LinkConfigurator};
use crate::edge::{create_edge_token, EdgeError, InteractiveEdge};
use crate::link::{Interface, Link, LinkOptions, NodeId, NodeKind};
use crate::topology::TopologyGraph;

/// A replayable scenario
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub nodes: Vec<ScenarioNode>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
}

/// One event of a scenario
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Draw a link from `src` to `dst`, optionally binding a backend record
    Link {
        src: NodeId,
        dst: NodeId,
        #[serde(default)]
        link: Option<Link>,
    },
    /// Start a link and abandon it
    Cancel { src: NodeId },
    Move { node: NodeId, x: f64, y: f64 },
    Throughput { src: NodeId, dst: NodeId, value: f64 },
    /// Traffic monitoring stopped
    Reset,
    Arc { src: NodeId, dst: NodeId, arc: f64 },
    Wireless { src: NodeId, dst: NodeId },
    Unwireless { src: NodeId, dst: NodeId },
    Runtime { running: bool },
    /// Configuration dialog applying the given values
    Configure {
        src: NodeId,
        dst: NodeId,
        #[serde(default)]
        src_interface: Option<Interface>,
        #[serde(default)]
        dst_interface: Option<Interface>,
        #[serde(default)]
        asymmetric: Option<LinkOptions>,
    },
    /// Any other context action (delete, split, merge)
    Action { src: NodeId, dst: NodeId, action: EdgeAction },
}

/// Configuration dialog stand-in that applies fixed values
#[derive(Debug, Default)]
pub struct AppliedConfiguration {
    pub src_interface: Option<Interface>,
    pub dst_interface: Option<Interface>,
    pub asymmetric: Option<LinkOptions>,
}

impl LinkConfigurator for AppliedConfiguration {
    fn configure(&mut self, edge: &mut InteractiveEdge) {
        if self.src_interface.is_some() || self.dst_interface.is_some() {
            let src = self.src_interface.take().or_else(|| edge.src_interface().cloned());
            let dst = self.dst_interface.take().or_else(|| edge.dst_interface().cloned());
            edge.set_interfaces(src, dst);
        }
        if let Some(options) = self.asymmetric.take() {
            edge.set_asymmetric_link(Some(options));
        }
    }
}

/// Load a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    info!("Loading scenario from: {:?}", path);
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open scenario '{}'", path.display()))?;
    let scenario: Scenario = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse scenario '{}'", path.display()))?;
    Ok(scenario)
}

/// Place the scenario's nodes and run every step in order
pub fn replay<C: Canvas>(scenario: &Scenario, graph: &mut TopologyGraph<C>) -> Result<()> {
    for node in &scenario.nodes {
        graph.add_node(node.id, node.kind, Point::new(node.x, node.y));
    }
    info!("Placed {} nodes", scenario.nodes.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        apply(graph, step).wrap_err_with(|| format!("Step {} failed: {:?}", index + 1, step))?;
    }
    info!("Replayed {} steps", scenario.steps.len());
    Ok(())
}

fn apply<C: Canvas>(graph: &mut TopologyGraph<C>, step: &Step) -> Result<()> {
    match step {
        Step::Link { src, dst, link } => {
            let pointer = graph
                .nodes()
                .get(*src)
                .map(|n| n.position)
                .ok_or(EdgeError::UnknownNode(*src))?;
            graph.begin_edge(*src, pointer)?;
            let token = graph.complete_edge(*dst)?;
            if let Some(link) = link {
                if create_edge_token(link.node_one_id, link.node_two_id) != token {
                    warn!(
                        "Link record {}-{} ignored for edge {}",
                        link.node_one_id, link.node_two_id, token
                    );
                } else {
                    graph.bind_link(link.clone())?;
                }
            }
        }
        Step::Cancel { src } => {
            let pointer = graph
                .nodes()
                .get(*src)
                .map(|n| n.position)
                .ok_or(EdgeError::UnknownNode(*src))?;
            graph.begin_edge(*src, pointer)?;
            graph.cancel_pending();
        }
        Step::Move { node, x, y } => {
            graph.move_node(*node, *x, *y);
        }
        Step::Throughput { src, dst, value } => {
            graph.set_throughput(create_edge_token(*src, *dst), *value)?;
        }
        Step::Reset => graph.reset_throughputs(),
        Step::Arc { src, dst, arc } => {
            graph.set_arc(create_edge_token(*src, *dst), *arc)?;
        }
        Step::Wireless { src, dst } => {
            graph.add_wireless_link(*src, *dst)?;
        }
        Step::Unwireless { src, dst } => {
            graph.delete_wireless_link(*src, *dst);
        }
        Step::Runtime { running } => graph.set_runtime(*running),
        Step::Configure {
            src,
            dst,
            src_interface,
            dst_interface,
            asymmetric,
        } => {
            let mut dialog = AppliedConfiguration {
                src_interface: src_interface.clone(),
                dst_interface: dst_interface.clone(),
                asymmetric: asymmetric.clone(),
            };
            graph.handle_action(create_edge_token(*src, *dst), EdgeAction::Configure, &mut dialog)?;
        }
        Step::Action { src, dst, action } => {
            let token = create_edge_token(*src, *dst);
            match graph.handle_action(token, *action, &mut AppliedConfiguration::default()) {
                Ok(outcome) => info!("Action {:?} on {}: {:?}", action, token, outcome),
                Err(EdgeError::ActionDisabled(action)) => {
                    warn!("Action {:?} on {} skipped: session is running", action, token)
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;
    use crate::config::EdgeConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"
nodes:
  - { id: 1, kind: default, x: 0, y: 0 }
  - { id: 2, kind: default, x: 100, y: 0 }
  - { id: 3, kind: wireless_lan, x: 0, y: 100 }
  - { id: 4, kind: default, x: 100, y: 100 }
steps:
  - op: link
    src: 1
    dst: 2
    link:
      node_one_id: 1
      node_two_id: 2
      interface_one: { id: 0, ip4: "10.0.0.1", ip4mask: 24 }
      interface_two: { id: 0, ip4: "10.0.0.2", ip4mask: 24 }
  - { op: link, src: 3, dst: 4 }
  - { op: move, node: 1, x: 20, y: 40 }
  - { op: throughput, src: 2, dst: 1, value: 12345 }
  - { op: runtime, running: true }
  - { op: action, src: 1, dst: 2, action: delete }
  - op: configure
    src: 1
    dst: 2
    src_interface: { id: 0, ip4: "10.0.9.1", ip4mask: 16 }
"#;

    fn load(yaml: &str) -> Scenario {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();
        load_scenario(temp_file.path()).unwrap()
    }

    #[test]
    fn test_replay() {
        let scenario = load(SCENARIO);
        assert_eq!(scenario.nodes.len(), 4);
        assert_eq!(scenario.steps.len(), 7);

        let mut graph = TopologyGraph::new(MemoryCanvas::new(), EdgeConfig::default());
        replay(&scenario, &mut graph).unwrap();

        let edge = graph.edge(create_edge_token(1, 2)).unwrap();
        let canvas = graph.canvas();
        assert_eq!(canvas.text(edge.throughput_label().unwrap()), Some("12.345 kbps"));
        assert_eq!(canvas.text(edge.source_label().unwrap()), Some("10.0.9.1/16"));
        assert_eq!(canvas.text(edge.destination_label().unwrap()), Some("10.0.0.2/24"));
        assert!(graph.wireless_network().is_attached(3, 4));
        assert!(graph.is_runtime());
    }

    #[test]
    fn test_throughput_after_delete_keeps_replaying() {
        let scenario = load(
            r#"
nodes:
  - { id: 1, kind: default, x: 0, y: 0 }
  - { id: 2, kind: default, x: 100, y: 0 }
steps:
  - { op: link, src: 1, dst: 2 }
  - { op: action, src: 1, dst: 2, action: delete }
  - { op: throughput, src: 1, dst: 2, value: 12345 }
  - { op: move, node: 1, x: 30, y: 40 }
"#,
        );
        let mut graph = TopologyGraph::new(MemoryCanvas::new(), EdgeConfig::default());
        replay(&scenario, &mut graph).unwrap();

        assert!(graph.edge(create_edge_token(1, 2)).is_none());
        assert!(graph.canvas().is_empty());
        assert_eq!(graph.nodes().get(1).map(|n| n.position), Some(Point::new(30.0, 40.0)));
    }

    #[test]
    fn test_failed_step_reports_index() {
        let scenario = load(
            r#"
nodes:
  - { id: 1, kind: default, x: 0, y: 0 }
steps:
  - { op: link, src: 1, dst: 1 }
"#,
        );
        let mut graph = TopologyGraph::new(MemoryCanvas::new(), EdgeConfig::default());
        let err = replay(&scenario, &mut graph).unwrap_err();
        assert!(err.to_string().contains("Step 1 failed"));
    }

    #[test]
    fn test_unknown_op_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "nodes: []\nsteps:\n  - {{ op: teleport }}\n").unwrap();
        assert!(load_scenario(temp_file.path()).is_err());
    }
}
