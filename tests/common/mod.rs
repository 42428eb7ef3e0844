//! Consolidated test utilities for entry-cache
//!
//! Shared fixtures for the integration suites: synthetic datasets, demo
//! selections and pre-populated cache directories.

pub mod fixtures;
