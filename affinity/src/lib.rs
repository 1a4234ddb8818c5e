pub use error::{Error, Result};
pub use model::{RankedFriend, Recommendation, User};
pub use network::{Description, Network, Stats};
pub use recommend::Recommender;

mod error;
pub mod model;
pub mod network;
pub mod recommend;

#[cfg(test)]
mod test_util;
