//! Command implementations

pub mod common;
pub mod deploy;
pub mod load;
pub mod verify;
