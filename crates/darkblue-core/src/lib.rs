pub mod constants;
pub mod error;
pub mod gradient;
pub mod math;
pub mod types;

pub use error::MapError;
pub use gradient::{AlphaKey, ColorKey, Gradient};
pub use types::VisualParameters;
