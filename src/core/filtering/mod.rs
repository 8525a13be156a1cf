pub mod filter_mode;

pub use filter_mode::{FilterMode, FilterModeError, Sampling};
