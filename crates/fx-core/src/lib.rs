pub mod constants;
pub mod glow;
pub mod scroll;
pub mod spotlight;

pub use constants::*;
