// HTTP routes
pub mod health;
pub mod playoffs;

pub use health::*;
pub use playoffs::*;
