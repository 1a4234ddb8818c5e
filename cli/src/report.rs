use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

use affinity::{RankedFriend, Recommendation, Recommender, Stats};

const WIDTH: usize = 80;

/// Network statistics followed by each user's friends and recommendations.
pub fn text<W: Write>(recommender: &Recommender, users: &[&str], o: &mut W) -> Result<()> {
    banner("FRIEND-BASED INTEREST RECOMMENDATIONS", o)?;
    writeln!(o)?;

    let stats = recommender.network().stats();
    writeln!(o, "NETWORK STATISTICS")?;
    writeln!(o, "   • Users: {}", stats.users)?;
    writeln!(o, "   • Friendships: {}", stats.friendships)?;
    writeln!(o, "   • Density: {:.3}", stats.density)?;
    writeln!(o, "   • Connected components: {}", stats.components)?;
    writeln!(o, "   • Average degree: {:.2}", stats.average_degree)?;
    writeln!(o)?;

    for name in users {
        write_user(recommender, name, o)?;
    }
    Ok(())
}

/// Breakdown of how `name` relates to each friend and which friends each recommendation came
/// from.
pub fn detail<W: Write>(recommender: &Recommender, name: &str, o: &mut W) -> Result<()> {
    let network = recommender.network();
    let user = network.user(name)?;
    let friends = network.friends_of(name)?;

    writeln!(o)?;
    banner(&format!("DETAILED EXAMPLE: {}", name), o)?;
    writeln!(o)?;
    writeln!(o, "User: {}", name)?;
    writeln!(o, "Interests: {}", user.interests.iter().join(", "))?;
    writeln!(o)?;
    writeln!(o, "Friends: {}", friends.iter().join(", "))?;
    writeln!(o)?;

    writeln!(o, "Similarity analysis:")?;
    for friend in &friends {
        writeln!(o, "  • {}:", friend)?;
        writeln!(
            o,
            "    - Similarity: {}",
            percent(recommender.similarity(name, friend)?)
        )?;
        writeln!(
            o,
            "    - Shared interests: {}",
            list(&recommender.shared_interests(name, friend)?)
        )?;
        writeln!(
            o,
            "    - Friend's unique interests: {}",
            list(&recommender.unique_interests(friend, name)?)
        )?;
    }
    writeln!(o)?;

    writeln!(o, "Generated recommendations:")?;
    for Recommendation { interest, score } in recommender.recommend_interests(name)? {
        writeln!(o, "  • {}: score {:.3}", interest, score)?;
        let contributors = recommender.contributors(name, &interest)?;
        if !contributors.is_empty() {
            writeln!(
                o,
                "    <- Recommended by: {}",
                contributors
                    .iter()
                    .map(|f| format!("{} (sim: {})", f.name, percent(f.similarity)))
                    .join(", ")
            )?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    stats: Stats,
    users: Vec<UserReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<DetailReport<'a>>,
}

#[derive(Serialize)]
struct UserReport<'a> {
    name: &'a str,
    interests: &'a BTreeSet<String>,
    friends: Vec<RankedFriend>,
    recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
struct DetailReport<'a> {
    name: &'a str,
    friends: Vec<FriendDetail<'a>>,
    recommendations: Vec<RecommendationDetail>,
}

#[derive(Serialize)]
struct FriendDetail<'a> {
    name: &'a str,
    similarity: f64,
    shared_interests: BTreeSet<&'a str>,
    unique_interests: BTreeSet<&'a str>,
}

#[derive(Serialize)]
struct RecommendationDetail {
    interest: String,
    score: f64,
    contributors: Vec<RankedFriend>,
}

/// Stats and each user's friends and recommendations as one json document, plus the breakdown
/// for `detail` if given.
pub fn json<W: Write>(
    recommender: &Recommender,
    users: &[&str],
    detail: Option<&str>,
    o: &mut W,
) -> Result<()> {
    let network = recommender.network();
    let report = Report {
        stats: network.stats(),
        users: users
            .iter()
            .map(|name| {
                Ok::<_, anyhow::Error>(UserReport {
                    name: *name,
                    interests: &network.user(name)?.interests,
                    friends: recommender.friends_by_similarity(name, None)?,
                    recommendations: recommender.recommend_interests(name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        detail: detail.map(|name| detail_report(recommender, name)).transpose()?,
    };
    serde_json::to_writer_pretty(&mut *o, &report)?;
    writeln!(o)?;
    Ok(())
}

fn detail_report<'a>(
    recommender: &Recommender<'a>,
    name: &'a str,
) -> Result<DetailReport<'a>> {
    let friends = recommender
        .network()
        .friends_of(name)?
        .into_iter()
        .map(|friend| {
            Ok::<_, anyhow::Error>(FriendDetail {
                name: friend,
                similarity: recommender.similarity(name, friend)?,
                shared_interests: recommender.shared_interests(name, friend)?,
                unique_interests: recommender.unique_interests(friend, name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let recommendations = recommender
        .recommend_interests(name)?
        .into_iter()
        .map(|Recommendation { interest, score }| {
            let contributors = recommender.contributors(name, &interest)?;
            Ok::<_, anyhow::Error>(RecommendationDetail {
                interest,
                score,
                contributors,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DetailReport {
        name,
        friends,
        recommendations,
    })
}

fn write_user<W: Write>(recommender: &Recommender, name: &str, o: &mut W) -> Result<()> {
    let network = recommender.network();
    let user = network.user(name)?;
    let friends = network.friends_of(name)?;

    writeln!(o, "{}", "-".repeat(WIDTH))?;
    writeln!(o, "USER: {}", name)?;
    writeln!(o, "Interests: {}", user.interests.iter().join(", "))?;
    writeln!(o, "Friends ({}): {}", friends.len(), friends.iter().join(", "))?;
    writeln!(o)?;

    if !friends.is_empty() {
        writeln!(o, "Similarity to friends:")?;
        for friend in recommender.friends_by_similarity(name, None)? {
            writeln!(o, "      • {}: {}", friend.name, percent(friend.similarity))?;
        }
        writeln!(o)?;
    }

    let recommendations = recommender.recommend_interests(name)?;
    if recommendations.is_empty() {
        writeln!(
            o,
            "No recommendations available (no friends, or they share no new interests)"
        )?;
    } else {
        writeln!(o, "RECOMMENDATIONS:")?;
        for (i, recommendation) in recommendations.iter().enumerate() {
            writeln!(
                o,
                "      {}. {} (score: {:.3})",
                i + 1,
                recommendation.interest,
                recommendation.score
            )?;
        }
    }
    writeln!(o)?;
    Ok(())
}

fn banner<W: Write>(title: &str, o: &mut W) -> Result<()> {
    writeln!(o, "{}", "=".repeat(WIDTH))?;
    writeln!(o, "{}", title)?;
    writeln!(o, "{}", "=".repeat(WIDTH))?;
    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn list(values: &BTreeSet<&str>) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.iter().join(", ")
    }
}
