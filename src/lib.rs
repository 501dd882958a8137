//! The tenantctl client library.
//!
//! This crate provides the core functionality of the tenant administration
//! CLI: validated, authenticated calls against the Tenant Management Service
//! and the Policy Management Service, and rendering of their responses.
//!
//! # Modules
//!
//! - `actions`: Command handlers composing validation, the service clients and rendering
//! - `client`: Error taxonomy shared by the service clients
//! - `commands`: CLI command definitions
//! - `configuration`: Configuration management
//! - `endpoint`: Service endpoint resolution
//! - `format`: Rendering of successful responses
//! - `http_utils`: Authenticated HTTP transport
//! - `model`: Request and response types
//! - `param_utils`: Identifier and role validation
//! - `tms` / `pms`: Tenant and Policy Management Service clients

pub mod actions;
pub mod client;
pub mod commands;
pub mod configuration;
pub mod endpoint;
pub mod error;
pub mod error_utils;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod logging;
pub mod model;
pub mod param_utils;
pub mod pms;
pub mod tms;
