pub mod game;

pub use game::{PlayoffGame, SlotSide};
