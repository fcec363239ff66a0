//! Configuration section definitions.
//!
//! | Module   | Section      | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `site`   | `[site.*]`   | Site metadata and nav data source     |
//! | `theme`  | `[theme.*]`  | Renderer UI strings and assets        |
//! | `render` | `[render]`   | Renderer pass-through flags           |

pub mod render;
pub mod site;
pub mod theme;

pub use render::RenderConfig;
pub use site::{NavDataConfig, SiteInfoConfig, SiteSectionConfig};
pub use theme::{SocialLink, ThemeConfig};
