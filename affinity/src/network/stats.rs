use std::collections::HashMap;

use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::Network;

/// Summary of a [Network]'s shape. All values are raw numbers; presentation is left to the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub users: usize,
    pub friendships: usize,
    pub density: f64,
    pub components: usize,
    pub average_degree: f64,
}

impl Network {
    /// Partition users into maximal groups reachable from one another through friendships.
    ///
    /// Components are ordered by their earliest-registered member, and members within a
    /// component are in registration order.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let graph = &self.graph;
        let mut sets = UnionFind::new(graph.node_count());
        for edge in graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }

        let mut components: Vec<Vec<String>> = vec![];
        let mut slots = HashMap::new();
        for index in graph.node_indices() {
            let root = sets.find(index.index());
            let slot = *slots.entry(root).or_insert_with(|| {
                components.push(vec![]);
                components.len() - 1
            });
            components[slot].push(graph[index].name.clone());
        }
        components
    }

    /// Number of friendships relative to the maximum possible `n * (n - 1) / 2`. Zero for networks
    /// with fewer than two users.
    pub fn density(&self) -> f64 {
        let n = self.user_count() as f64;
        if self.user_count() < 2 {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / (n * (n - 1.0))
    }

    pub fn average_degree(&self) -> f64 {
        if self.user_count() == 0 {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.user_count() as f64
    }

    pub fn stats(&self) -> Stats {
        Stats {
            users: self.user_count(),
            friendships: self.edge_count(),
            density: self.density(),
            components: self.connected_components().len(),
            average_degree: self.average_degree(),
        }
    }
}
