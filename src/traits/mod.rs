//! Trait definitions for Pewn operations.
//!
//! Each entity type implements the traits it supports; the path templates
//! live in the implementations.

mod get;
mod scoped;

pub use get::Get;
pub use scoped::{ProjectScoped, UserScoped};
