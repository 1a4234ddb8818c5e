use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

pub use description::Description;
pub use stats::Stats;

use crate::{Error, Result, User};

mod description;
mod stats;

type FriendGraph = UnGraph<User, ()>;

/// The graph store: every registered [User] is a node, and each friendship is a single
/// undirected edge between two distinct users.
///
/// Nodes are never removed, so node indices follow registration order and edge indices follow
/// friendship creation order. Both are relied upon to keep every query deterministic.
#[derive(Debug, Default)]
pub struct Network {
    graph: FriendGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user`. Errors if a user with the same name is already registered.
    pub fn add_user(&mut self, user: User) -> Result<()> {
        if self.node_map.contains_key(&user.name) {
            return Err(Error::DuplicateUser(user.name));
        }
        debug!("adding user: {}", user);
        let name = user.name.clone();
        let index = self.graph.add_node(user);
        self.node_map.insert(name, index);
        Ok(())
    }

    /// Make `a` and `b` friends. Both must already be registered and must be different users.
    /// Adding a friendship that already exists (in either direction) does nothing.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let from = self.node(a)?;
        let to = self.node(b)?;
        if from == to {
            return Err(Error::SelfFriendship(a.to_string()));
        }
        debug!("adding friendship: {} <-> {}", a, b);
        self.graph.update_edge(from, to, ());
        Ok(())
    }

    /// Names of the friends of `name`, in the order the friendships were created.
    pub fn friends_of(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.node(name)?;
        Ok(self
            .graph
            .edges(index)
            .sorted_by_key(|edge| edge.id())
            .map(|edge| {
                let friend = if edge.source() == index {
                    edge.target()
                } else {
                    edge.source()
                };
                self.graph[friend].name.as_str()
            })
            .collect_vec())
    }

    pub fn user(&self, name: &str) -> Result<&User> {
        self.node(name).map(|index| &self.graph[index])
    }

    pub fn contains_user(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// All users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.graph.node_weights()
    }

    pub fn user_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn node(&self, name: &str) -> Result<NodeIndex> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownUser(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    mod add_user {
        use crate::test_util::user;
        use crate::{Error, Network};

        #[test]
        fn registers() -> anyhow::Result<()> {
            let mut network = Network::new();
            network.add_user(user("ana", &["music"]))?;
            assert!(network.contains_user("ana"));
            assert_eq!(network.user_count(), 1);
            assert_eq!(network.user("ana")?, &user("ana", &["music"]));
            Ok(())
        }

        #[test]
        fn duplicate_name() -> anyhow::Result<()> {
            let mut network = Network::new();
            network.add_user(user("ana", &["music"]))?;
            assert_eq!(
                network.add_user(user("ana", &["travel"])),
                Err(Error::DuplicateUser("ana".to_string()))
            );
            assert_eq!(network.user_count(), 1);
            // Original registration wins.
            assert!(network.user("ana")?.has_interest("music"));
            Ok(())
        }

        #[test]
        fn users_in_registration_order() -> anyhow::Result<()> {
            let mut network = Network::new();
            for name in ["c", "a", "b"] {
                network.add_user(user(name, &[]))?;
            }
            let names = network.users().map(|u| u.name.as_str()).collect::<Vec<_>>();
            assert_eq!(names, vec!["c", "a", "b"]);
            Ok(())
        }
    }

    mod add_friendship {
        use crate::test_util::{network, user};
        use crate::Error;

        #[test]
        fn symmetric() -> anyhow::Result<()> {
            let network = network(vec![user("a", &[]), user("b", &[])], &[("a", "b")])?;
            assert_eq!(network.friends_of("a")?, vec!["b"]);
            assert_eq!(network.friends_of("b")?, vec!["a"]);
            assert_eq!(network.edge_count(), 1);
            Ok(())
        }

        #[test]
        fn idempotent() -> anyhow::Result<()> {
            let mut network = network(vec![user("a", &[]), user("b", &[])], &[("a", "b")])?;
            network.add_friendship("a", "b")?;
            network.add_friendship("b", "a")?;
            assert_eq!(network.friends_of("a")?, vec!["b"]);
            assert_eq!(network.edge_count(), 1);
            Ok(())
        }

        #[test]
        fn unknown_user() -> anyhow::Result<()> {
            let mut network = network(vec![user("a", &[])], &[])?;
            assert_eq!(
                network.add_friendship("a", "nobody"),
                Err(Error::UnknownUser("nobody".to_string()))
            );
            assert_eq!(
                network.add_friendship("nobody", "a"),
                Err(Error::UnknownUser("nobody".to_string()))
            );
            assert_eq!(network.edge_count(), 0);
            Ok(())
        }

        #[test]
        fn self_friendship() -> anyhow::Result<()> {
            let mut network = network(vec![user("a", &[])], &[])?;
            assert_eq!(
                network.add_friendship("a", "a"),
                Err(Error::SelfFriendship("a".to_string()))
            );
            assert_eq!(network.edge_count(), 0);
            Ok(())
        }

        #[test]
        fn unknown_checked_before_self() {
            let mut network = crate::Network::new();
            assert_eq!(
                network.add_friendship("x", "x"),
                Err(Error::UnknownUser("x".to_string()))
            );
        }
    }

    mod friends_of {
        use crate::test_util::{network, user};
        use crate::Error;

        #[test]
        fn creation_order_for_both_endpoints() -> anyhow::Result<()> {
            let network = network(
                vec![user("a", &[]), user("b", &[]), user("c", &[]), user("d", &[])],
                &[("a", "c"), ("b", "a"), ("a", "d"), ("c", "b")],
            )?;
            assert_eq!(network.friends_of("a")?, vec!["c", "b", "d"]);
            assert_eq!(network.friends_of("b")?, vec!["a", "c"]);
            assert_eq!(network.friends_of("c")?, vec!["a", "b"]);
            assert_eq!(network.friends_of("d")?, vec!["a"]);
            Ok(())
        }

        #[test]
        fn no_friends() -> anyhow::Result<()> {
            let network = network(vec![user("a", &[])], &[])?;
            assert!(network.friends_of("a")?.is_empty());
            Ok(())
        }

        #[test]
        fn unknown_user() -> anyhow::Result<()> {
            let network = network(vec![user("a", &[])], &[])?;
            assert_eq!(
                network.friends_of("nobody"),
                Err(Error::UnknownUser("nobody".to_string()))
            );
            assert_eq!(
                network.user("nobody"),
                Err(Error::UnknownUser("nobody".to_string()))
            );
            Ok(())
        }
    }
}
