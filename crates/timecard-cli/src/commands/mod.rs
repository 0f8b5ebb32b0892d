//! Command implementations.

pub mod clock;
pub mod maintain;
pub mod report;
pub mod status;
pub mod util;
