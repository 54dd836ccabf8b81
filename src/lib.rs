// Library root; the binary and the integration tests use these modules

pub mod check;
pub mod config;
pub mod discovery;
pub mod error;
pub mod levels;
pub mod models;
pub mod render;
pub mod section;
pub mod snapshot_repo;
pub mod version;
pub mod worker;
