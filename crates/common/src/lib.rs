//! Ambient helpers shared by the workspace binaries and test harnesses.

pub mod utils;
