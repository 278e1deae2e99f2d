//! # Bitable Proxy Library
//!
//! Provides functionality for proxying project CRUD operations to a remote
//! multi-dimensional table service (Feishu bitable), caching the tenant
//! access token and remapping records between the external field schema
//! and the internal project shape.
//!
//! Modules:
//! - `config` — service configuration read from environment/CLI
//! - `cache` — tenant access token cache
//! - `client` — credential exchange and table record client
//! - `remap` — field-name schemas and record/project conversion
//! - `server` — inbound HTTP surface

pub mod cache;
pub mod client;
pub mod config;
pub mod remap;
pub mod server;
pub mod tests;
pub mod utils;
