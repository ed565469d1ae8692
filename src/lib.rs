pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logger;
pub mod manifest;
pub mod pagination;
pub mod release;
pub mod version;
