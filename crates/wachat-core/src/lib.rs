//! # wachat-core
//!
//! Core types, settings, stores, configuration, and error handling for wachat.

pub mod config;
pub mod countries;
pub mod error;
pub mod product;
pub mod settings;
pub mod store;

pub use config::shellexpand;
