use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised when a request references users the [crate::Network] can't satisfy. These are
/// input errors, never transient, so nothing in the crate retries or recovers from them.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("User '{0}' already exists in the network.")]
    DuplicateUser(String),

    #[error("User '{0}' does not exist in the network.")]
    UnknownUser(String),

    #[error("User '{0}' cannot be friends with themself.")]
    SelfFriendship(String),
}
