//! Infrastructure layer for environment interactions.
//!
//! - [`paths`]: sandbox path handling and the data directory
//! - [`clock`]: injectable wall clock

pub mod clock;
pub mod paths;

pub use clock::{Clock, ManualClock, SystemClock};
pub use paths::{expand_tilde, get_data_dir};
