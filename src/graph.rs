// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted directed graph with labelled vertices
//!
//! Vertices are arbitrary hashable labels. Each ordered pair of vertices
//! carries at most one edge, and every stored edge has a weight of at least 1.
//! Setting a weight of 0 deletes the edge but leaves both endpoints in place.

use crate::error::Result;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// A mutable, vertex-labelled directed graph with positive integer weights
#[derive(Debug, Clone)]
pub struct WeightedDigraph<V> {
    /// The underlying directed graph; node weights are the vertex labels
    graph: StableDiGraph<V, u32>,
    /// Map from vertex label to node index
    node_indices: HashMap<V, NodeIndex>,
}

impl<V> Default for WeightedDigraph<V> {
    fn default() -> Self {
        Self {
            graph: StableDiGraph::default(),
            node_indices: HashMap::new(),
        }
    }
}

impl<V> WeightedDigraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `true` if the vertex set changed.
    pub fn add(&mut self, vertex: V) -> bool {
        if self.node_indices.contains_key(&vertex) {
            return false;
        }
        self.index_or_insert(vertex);
        true
    }

    /// Remove a vertex together with every edge that starts or ends at it.
    ///
    /// Returns `true` if the vertex was present.
    pub fn remove(&mut self, vertex: &V) -> bool {
        match self.node_indices.remove(vertex) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    /// Set the weight of the edge `source -> target`, returning the previous
    /// weight (0 if there was no such edge).
    ///
    /// A weight of 0 removes the edge and never creates vertices. A positive
    /// weight adds missing endpoints and creates or overwrites the edge.
    pub fn set(&mut self, source: V, target: V, weight: u32) -> u32 {
        if weight == 0 {
            let (Some(&from), Some(&to)) =
                (self.node_indices.get(&source), self.node_indices.get(&target))
            else {
                return 0;
            };
            return self
                .graph
                .find_edge(from, to)
                .and_then(|edge| self.graph.remove_edge(edge))
                .unwrap_or(0);
        }

        let from = self.index_or_insert(source);
        let to = self.index_or_insert(target);
        match self.graph.find_edge(from, to) {
            Some(edge) => std::mem::replace(&mut self.graph[edge], weight),
            None => {
                self.graph.add_edge(from, to, weight);
                0
            }
        }
    }

    /// Snapshot of the current vertex set
    #[must_use]
    pub fn vertices(&self) -> HashSet<V> {
        self.node_indices.keys().cloned().collect()
    }

    /// Outgoing edges of `vertex` as `target -> weight`.
    ///
    /// Empty if the vertex has no outgoing edges or is not in the graph.
    #[must_use]
    pub fn targets(&self, vertex: &V) -> HashMap<V, u32> {
        self.neighbors(vertex, Direction::Outgoing)
    }

    /// Incoming edges of `vertex` as `source -> weight`.
    ///
    /// Empty if the vertex has no incoming edges or is not in the graph.
    #[must_use]
    pub fn sources(&self, vertex: &V) -> HashMap<V, u32> {
        self.neighbors(vertex, Direction::Incoming)
    }

    /// Weight of the edge `source -> target`, 0 if absent
    #[must_use]
    pub fn weight(&self, source: &V, target: &V) -> u32 {
        let (Some(&from), Some(&to)) =
            (self.node_indices.get(source), self.node_indices.get(target))
        else {
            return 0;
        };
        self.graph.find_edge(from, to).map_or(0, |edge| self.graph[edge])
    }

    /// Check whether a vertex is present
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.node_indices.contains_key(vertex)
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_indices.is_empty()
    }

    /// Iterate over every edge as `(source, target, weight)`, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, u32)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                *edge.weight(),
            )
        })
    }

    fn index_or_insert(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.node_indices.insert(vertex, idx);
        idx
    }

    fn neighbors(&self, vertex: &V, direction: Direction) -> HashMap<V, u32> {
        let Some(&idx) = self.node_indices.get(vertex) else {
            return HashMap::new();
        };
        self.graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (self.graph[other].clone(), *edge.weight())
            })
            .collect()
    }
}

/// A single weighted edge in a [`GraphSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedEdge<V> {
    /// Source vertex
    pub source: V,
    /// Target vertex
    pub target: V,
    /// Edge weight (always at least 1)
    pub weight: u32,
}

/// Ordered, serializable copy of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot<V> {
    /// All vertices, sorted
    pub vertices: Vec<V>,
    /// All edges, sorted by source then target
    pub edges: Vec<WeightedEdge<V>>,
}

impl<V> WeightedDigraph<V>
where
    V: Clone + Eq + Hash + Ord,
{
    /// Take an ordered snapshot of the graph
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        let mut vertices: Vec<V> = self.node_indices.keys().cloned().collect();
        vertices.sort();

        let mut edges: Vec<WeightedEdge<V>> = self
            .edges()
            .map(|(source, target, weight)| WeightedEdge {
                source: source.clone(),
                target: target.clone(),
                weight,
            })
            .collect();
        edges.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.target.cmp(&b.target)));

        GraphSnapshot { vertices, edges }
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String
    where
        V: Display,
    {
        let snapshot = self.snapshot();
        let mut dot = String::from("digraph affinity {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=plaintext];\n\n");

        for vertex in &snapshot.vertices {
            dot.push_str(&format!("  \"{}\";\n", escape_dot(&vertex.to_string())));
        }

        dot.push('\n');

        for edge in &snapshot.edges {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape_dot(&edge.source.to_string()),
                escape_dot(&edge.target.to_string()),
                edge.weight
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
