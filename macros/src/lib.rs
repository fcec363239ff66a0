//! Proc macros for wikinav.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template for a
//! configuration section struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the browser tab.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Icon substituted when an entry has none.
//!     #[config(experimental)]
//!     pub fallback_icon: Option<String>,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() -> TOML body with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! // - SiteInfoConfig::validate_field_status() -> status diagnostics
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(sub)]` - Field is itself a Config section
//! - `#[config(hidden)]` - Hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(experimental)]` - Mark as experimental
//! - `#[config(not_implemented)]` - Mark as not implemented
//! - `#[config(deprecated)]` - Mark as deprecated
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `ThemeConfig` → `theme`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template() and status checks.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
