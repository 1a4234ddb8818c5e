use serde::Serialize;

pub use user::User;

mod user;

/// A friend of some target user paired with their [crate::recommend::jaccard] similarity to that
/// target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFriend {
    pub name: String,
    pub similarity: f64,
}

/// An interest the target user doesn't hold yet, scored by the summed similarity of every
/// considered friend that holds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub interest: String,
    pub score: f64,
}

impl RankedFriend {
    pub fn new(name: impl ToString, similarity: f64) -> Self {
        Self {
            name: name.to_string(),
            similarity,
        }
    }
}

impl Recommendation {
    pub fn new(interest: impl ToString, score: f64) -> Self {
        Self {
            interest: interest.to_string(),
            score,
        }
    }
}
