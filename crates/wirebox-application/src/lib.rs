//! Application Layer - wirebox
//!
//! Resolution algorithms of the container and the service binding them to
//! an introspection backend.
//!
//! ## Architecture
//!
//! - `domain_services::*`: interface extraction, dependency extraction and
//!   validation, factory method resolution (pure functions)
//! - `ports::*`: service interfaces the container runtime depends on
//! - `use_cases::*`: [`ResolutionServiceImpl`] with duplicate policy and memoization
//!
//! ## Dependencies
//!
//! This crate depends only on `wirebox-domain` and pure Rust libraries.
//! Introspection backends live in `wirebox-providers`.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
