//! Standings domain - ranked team standings per conference and season

pub mod models;

pub use models::standing::Standing;
