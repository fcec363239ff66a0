//! Navigation catalog: the grouped link records the renderer navigates by.
//!
//! - [`catalog`]: the immutable data model ([`NavCatalog`], [`NavGroup`], [`NavLink`])
//! - [`loader`]: TOML loading from the authored data file

pub mod catalog;
pub mod loader;

pub use catalog::{NavCatalog, NavGroup, NavLink};
