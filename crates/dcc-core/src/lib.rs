//! # dcc-core
//!
//! Core types shared across all Digital Career Compass crates.
//!
//! This crate provides:
//! - Entity structs for the company profile and its nine satellite records
//! - Enums for profile tabs and categorical filter fields
//! - `SectionState`, the settled outcome of one independent fetch
//! - Response types produced by the engine and rendered by `dcc`
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fetch;
pub mod responses;
