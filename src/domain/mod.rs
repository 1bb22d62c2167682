//! Domain layer containing business entities and logic.
//!
//! This module defines entities, repository interfaces, and the pure
//! aggregation functions independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`aggregator`] - Like and authorship statistics over blog records
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod aggregator;
pub mod entities;
pub mod repositories;
