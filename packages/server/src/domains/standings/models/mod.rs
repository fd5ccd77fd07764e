pub mod standing;

pub use standing::Standing;
