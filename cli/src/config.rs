use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "affinity", author, version, about)]
pub struct Config {
    /// Path to a network description in json format.
    ///
    /// The file must contain a `users` list of `{ "name": ..., "interests": [...] }` objects and
    /// a `friendships` list of `["name", "name"]` pairs. If not supplied, a built-in sample
    /// network is used.
    #[arg(long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Path to a [affinity::recommend::Config] in json format. Values given on the command line
    /// take precedence.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only report on these users. Defaults to every user in the network.
    #[arg(short, long, value_name = "NAME")]
    pub user: Vec<String>,

    /// Maximum number of recommendations per user.
    #[arg(short = 'n', long)]
    pub recommendations: Option<usize>,

    /// Only the most similar K friends contribute to recommendations.
    #[arg(short = 'k', long, value_name = "K")]
    pub friends_considered: Option<usize>,

    /// Append a detailed breakdown of where this user's recommendations come from. With
    /// `--format json` the breakdown is the `detail` object of the document.
    #[arg(long, value_name = "NAME")]
    pub detail: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    /// Human readable report.
    Text,
    /// A single json document with the network stats and each user's friends and
    /// recommendations.
    Json,
}
