use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use log::{debug, trace};

pub use config::*;
pub use similarity::jaccard;

use crate::{Network, RankedFriend, Recommendation, Result, User};

mod config;
mod similarity;

/// Recommends interests to a user from the interests of their friends.
///
/// Every friend contributes each interest the target doesn't already hold, weighted by that
/// friend's [jaccard] similarity to the target. The [Recommender] only reads the [Network], so
/// any number of them may share one.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    network: &'a Network,
    config: Config,
}

impl<'a> Recommender<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self::with_config(network, Config::default())
    }

    pub fn with_config(network: &'a Network, config: Config) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn num_recommendations(mut self, num_recommendations: usize) -> Self {
        self.config.num_recommendations = num_recommendations;
        self
    }

    pub fn num_friends_considered(mut self, num_friends_considered: usize) -> Self {
        self.config.num_friends_considered = Some(num_friends_considered);
        self
    }

    /// [jaccard] similarity between the interests of users `a` and `b`.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.network.user(a)?;
        let b = self.network.user(b)?;
        Ok(jaccard(&a.interests, &b.interests))
    }

    /// Friends of `name` sorted by descending similarity. Friends with equal similarity keep the
    /// order of [Network::friends_of].
    ///
    /// `limit` is applied after ranking, so the result is always the most similar friends.
    pub fn friends_by_similarity(
        &self,
        name: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RankedFriend>> {
        let target = self.network.user(name)?;
        let mut ranked = self
            .network
            .friends_of(name)?
            .into_iter()
            .map(|friend| -> Result<RankedFriend> {
                let similarity = jaccard(&target.interests, &self.network.user(friend)?.interests);
                trace!("similarity {} <-> {}: {}", name, friend, similarity);
                Ok(RankedFriend::new(friend, similarity))
            })
            .collect::<Result<Vec<_>>>()?;

        // Must be stable: ties fall back to friendship order.
        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(ranked)
    }

    /// Recommend interests for `name` using this [Recommender]'s [Config].
    pub fn recommend_interests(&self, name: &str) -> Result<Vec<Recommendation>> {
        self.recommend_interests_with(name, &self.config)
    }

    /// Recommend interests for `name`, highest score first.
    ///
    /// The score of an interest is the sum of the similarities of every considered friend holding
    /// it. Equal scores are ordered by first contribution: the rank of the first friend
    /// contributing the interest, then the interest name.
    pub fn recommend_interests_with(
        &self,
        name: &str,
        config: &Config,
    ) -> Result<Vec<Recommendation>> {
        let target = self.network.user(name)?;
        let friends = self.friends_by_similarity(name, config.num_friends_considered)?;
        if friends.is_empty() {
            debug!("no friends to recommend from for '{}'", name);
            return Ok(vec![]);
        }

        let mut candidates: Vec<Recommendation> = vec![];
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for friend in &friends {
            for interest in self.unseen_interests(target, &friend.name)? {
                let slot = *slots.entry(interest).or_insert_with(|| {
                    candidates.push(Recommendation::new(interest, 0.0));
                    candidates.len() - 1
                });
                candidates[slot].score += friend.similarity;
                trace!(
                    "'{}' += {} from '{}' for '{}'",
                    interest,
                    friend.similarity,
                    friend.name,
                    name
                );
            }
        }

        debug!(
            "{} candidate interests for '{}' from {} friends",
            candidates.len(),
            name,
            friends.len()
        );
        Ok(candidates
            .into_iter()
            .sorted_by(|a, b| b.score.total_cmp(&a.score))
            .take(config.num_recommendations)
            .collect_vec())
    }

    /// Interests held by both `a` and `b`.
    pub fn shared_interests(&self, a: &str, b: &str) -> Result<BTreeSet<&'a str>> {
        let a = self.network.user(a)?;
        let b = self.network.user(b)?;
        Ok(a.interests
            .intersection(&b.interests)
            .map(String::as_str)
            .collect())
    }

    /// Interests held by `of` that `relative_to` doesn't hold.
    pub fn unique_interests(&self, of: &str, relative_to: &str) -> Result<BTreeSet<&'a str>> {
        let relative_to = self.network.user(relative_to)?;
        self.unseen_interests(relative_to, of)
            .map(|interests| interests.collect())
    }

    /// Friends of `name` holding `interest`, with their similarity to `name`, using this
    /// [Recommender]'s [Config].
    pub fn contributors(&self, name: &str, interest: &str) -> Result<Vec<RankedFriend>> {
        self.contributors_with(name, interest, &self.config)
    }

    /// The considered friends a recommendation of `interest` to `name` came from, in similarity
    /// rank order. Their similarities sum to the score [Recommender::recommend_interests_with]
    /// reports for `interest` under the same `config`.
    pub fn contributors_with(
        &self,
        name: &str,
        interest: &str,
        config: &Config,
    ) -> Result<Vec<RankedFriend>> {
        let mut contributors = vec![];
        for friend in self.friends_by_similarity(name, config.num_friends_considered)? {
            if self.network.user(&friend.name)?.has_interest(interest) {
                contributors.push(friend);
            }
        }
        Ok(contributors)
    }

    fn unseen_interests(
        &self,
        target: &'a User,
        friend: &str,
    ) -> Result<impl Iterator<Item = &'a str>> {
        let friend = self.network.user(friend)?;
        Ok(friend
            .interests
            .iter()
            .filter(move |interest| !target.interests.contains(*interest))
            .map(String::as_str))
    }
}
