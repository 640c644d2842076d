//! Front end for the POM completer
//!
//! Resolves the per-artifact property file and working directory, discovers
//! the POMs to complete, backs each one up and completes them one by one.
//! The first failure stops the batch.

pub mod backup;
pub mod config;
pub mod discovery;
pub mod run;

pub use config::RunConfig;
pub use run::run;
