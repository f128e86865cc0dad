//! # stencil-renderer
//!
//! Minimal placeholder template engine behind a JSON compiler protocol:
//! `{{variable}}` substitution and `{{#if variable}}...{{/if}}` conditional
//! blocks over a JSON data mapping. Deliberately feature-limited — no loops,
//! no else-branches, no escaping — and lenient about malformed markup.
//!
//! ## Usage
//!
//! ```
//! use serde_json::{json, Map};
//! use stencil_renderer::Renderer;
//!
//! let renderer = Renderer::new().expect("marker patterns compile");
//! let mut data = Map::new();
//! data.insert("name".to_string(), json!("Sam"));
//!
//! let out = renderer.render("Hi {{#if name}}{{name}}{{/if}}!", &data);
//! assert_eq!(out, "Hi Sam!");
//! ```

pub mod engine;
pub mod error;
pub mod protocol;
pub mod value;

pub use engine::Renderer;
pub use error::RenderError;
pub use protocol::{RenderRequest, RenderResponse};
