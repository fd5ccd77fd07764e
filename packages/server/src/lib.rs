// League Playoffs Service - API Core
//
// This crate provides the playoff bracket engine for a league season:
// seeding from ranked standings, full-bracket materialization, best-of-three
// series resolution and winner promotion, reversal, and teardown.
// All mutation goes through single transactions against Postgres.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
