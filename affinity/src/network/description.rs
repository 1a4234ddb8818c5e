use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{Network, Result, User};

/// A serializable description of a whole [Network]: the users to register and the friendships
/// between them.
///
/// ```json
/// {
///   "users": [ { "name": "ana", "interests": ["music", "travel"] } ],
///   "friendships": [ ["ana", "bob"] ]
/// }
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
}

impl Description {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Registers all users, then all friendships, stopping at the first error.
    pub fn build(self) -> Result<Network> {
        let mut network = Network::new();
        for user in self.users {
            network.add_user(user)?;
        }
        for (a, b) in &self.friendships {
            network.add_friendship(a, b)?;
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use anyhow::Result;
    use tempfile::tempdir;

    use crate::{Description, Error};

    const DATA: &str = r#"
    {
        "users": [
            { "name": "ana", "interests": ["music", "fitness"] },
            { "name": "bob", "interests": ["music", "cooking", "music"] },
            { "name": "cat" }
        ],
        "friendships": [["ana", "bob"], ["bob", "cat"], ["bob", "ana"]]
    }
    "#;

    #[test]
    fn builds_network() -> Result<()> {
        let network = Description::from_reader(DATA.as_bytes())?.build()?;
        assert_eq!(network.user_count(), 3);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.friends_of("bob")?, vec!["ana", "cat"]);
        assert_eq!(network.user("bob")?.interests.len(), 2);
        assert!(network.user("cat")?.interests.is_empty());
        Ok(())
    }

    #[test]
    fn reads_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("network.json");
        File::create(&path)?.write_all(DATA.as_bytes())?;
        let network = Description::from_reader(File::open(&path)?)?.build()?;
        assert_eq!(network.user_count(), 3);
        Ok(())
    }

    #[test]
    fn empty_document() -> Result<()> {
        let network = Description::from_reader("{}".as_bytes())?.build()?;
        assert_eq!(network.user_count(), 0);
        Ok(())
    }

    #[test]
    fn unknown_friend() -> Result<()> {
        let description = Description::from_reader(
            r#"{ "users": [{ "name": "ana" }], "friendships": [["ana", "zed"]] }"#.as_bytes(),
        )?;
        assert_eq!(
            description.build().unwrap_err(),
            Error::UnknownUser("zed".to_string())
        );
        Ok(())
    }

    #[test]
    fn duplicate_user() -> Result<()> {
        let description = Description::from_reader(
            r#"{ "users": [{ "name": "ana" }, { "name": "ana" }] }"#.as_bytes(),
        )?;
        assert_eq!(
            description.build().unwrap_err(),
            Error::DuplicateUser("ana".to_string())
        );
        Ok(())
    }

    #[test]
    fn malformed() {
        assert!(Description::from_reader(r#"{ "users": 3 }"#.as_bytes()).is_err());
    }
}
