// Business domains
pub mod playoffs;
pub mod standings;
