//! Command implementations

pub mod play;
pub mod show;

pub use play::run_play;
pub use show::{ShowConfig, ShowResult, show_puzzle};
