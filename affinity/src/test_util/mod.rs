use crate::{Network, Result, User};

pub fn user(name: &str, interests: &[&str]) -> User {
    User::new(name, interests)
}

/// Registers `users` in order, then creates each friendship in order.
pub fn network(users: Vec<User>, friendships: &[(&str, &str)]) -> Result<Network> {
    let mut network = Network::new();
    for user in users {
        network.add_user(user)?;
    }
    for (a, b) in friendships {
        network.add_friendship(a, b)?;
    }
    Ok(network)
}

/// Four users in a star around "ana", plus "eve" who has no friends.
///
/// - ana:   music, fitness
/// - bob:   music, cooking            (1/3 with ana)
/// - cat:   music, fitness, travel    (2/3 with ana)
/// - dan:   chess                     (0 with ana)
/// - eve:   music, fitness
pub fn star() -> Network {
    network(
        vec![
            user("ana", &["music", "fitness"]),
            user("bob", &["music", "cooking"]),
            user("cat", &["music", "fitness", "travel"]),
            user("dan", &["chess"]),
            user("eve", &["music", "fitness"]),
        ],
        &[("ana", "bob"), ("ana", "cat"), ("ana", "dan")],
    )
    .expect("star network is valid")
}
