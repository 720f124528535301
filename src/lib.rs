//! Typed async client for the Riot Games League of Legends API.
//!
//! Every API group (summoner, league, match...) shares one request pipeline
//! which authenticates requests, decodes JSON bodies, maps error statuses to
//! [`RiotApiError`] and transparently retries rate limited (429) and
//! temporarily unavailable (503) answers.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use riot_lol_api::{Config, RiotClient};
//!
//! let riot = RiotClient::from_config(&Config::from_env()?);
//! let summoner = riot.summoner.get_by_name("Le Conservateur").await?;
//! println!("level {}", summoner.summoner_level);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod region;
pub mod types;

pub use api::RiotClient;
pub use config::{Config, ConfigError};
pub use region::Region;
pub use types::{RiotApiError, RiotApiResponse};
