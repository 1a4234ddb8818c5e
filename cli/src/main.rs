use std::fs::File;
use std::io::{stdout, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use affinity::{recommend, Description, Network, Recommender};

use crate::config::{Config, Format};

mod config;
mod report;

const SAMPLE_NETWORK: &str = include_str!("sample.json");

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let network = network(&config)?;
    let recommender = Recommender::with_config(&network, recommend_config(&config)?);
    let users = users(&config, &network)?;

    let mut out = stdout().lock();
    match config.format {
        Format::Text => {
            report::text(&recommender, &users, &mut out)?;
            if let Some(name) = &config.detail {
                report::detail(&recommender, name, &mut out)?;
            }
        }
        Format::Json => {
            report::json(&recommender, &users, config.detail.as_deref(), &mut out)?
        }
    }
    Ok(())
}

fn network(config: &Config) -> Result<Network> {
    let description = match &config.network {
        None => {
            info!("Using sample network...");
            Description::from_reader(SAMPLE_NETWORK.as_bytes())
                .context("parse sample network")?
        }
        Some(path) => {
            info!("Loading network from {}...", path.display());
            let file = File::open(path)
                .with_context(|| format!("read network description: {}", path.display()))?;
            Description::from_reader(BufReader::new(file)).context("parse network description")?
        }
    };
    Ok(description.build()?)
}

fn recommend_config(config: &Config) -> Result<recommend::Config> {
    let mut recommend_config = match &config.config {
        None => recommend::Config::default(),
        Some(path) => {
            let file = File::open(path).context("read recommend config")?;
            serde_json::from_reader(BufReader::new(file)).context("parse recommend config")?
        }
    };
    if let Some(n) = config.recommendations {
        recommend_config.num_recommendations = n;
    }
    if let Some(k) = config.friends_considered {
        recommend_config.num_friends_considered = Some(k);
    }
    Ok(recommend_config)
}

/// The users to report on, in the order requested or registration order if none were.
fn users<'a>(config: &'a Config, network: &'a Network) -> Result<Vec<&'a str>> {
    if config.user.is_empty() {
        return Ok(network.users().map(|user| user.name.as_str()).collect());
    }
    let mut users = vec![];
    for name in &config.user {
        network.user(name)?;
        users.push(name.as_str());
    }
    Ok(users)
}
