use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A member of the [crate::Network], identified by a unique name.
///
/// Interests are a set: duplicates passed to [User::new] collapse into one entry, and iteration
/// is always in lexical order.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
}

impl User {
    pub fn new<I, S>(name: impl ToString, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            name: name.to_string(),
            interests: interests.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.contains(interest)
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{{}}}", self.name, self.interests.iter().join(", "))
    }
}
