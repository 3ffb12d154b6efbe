//! Relational core of a group dinner planner: accounts, consent-based
//! friendships, friend groups anchored at a location, and a deduplicated pool
//! of nearby restaurant candidates per group.

use std::sync::LazyLock;

pub mod api;
pub mod configs;
pub mod constants;
pub mod modules;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});
