pub mod composition;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod report;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
