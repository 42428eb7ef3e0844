//! Demo driver commands.
//!
//! The cache core is a library; these commands exercise it end to end over a
//! synthetic dataset so the build-then-replay behavior can be observed from
//! the command line.

pub mod clear;
pub mod run;

pub use clear::execute_clear;
pub use run::execute_run;
