pub mod tables;
pub mod types;

pub use tables::{clamp_index, STATE_TABLE, STEP_TABLE};
pub use types::*;
