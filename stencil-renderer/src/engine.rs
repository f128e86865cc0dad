//! Placeholder rendering engine — [`Renderer`].
//!
//! Two marker shapes are understood:
//!
//! | Marker                      | Effect                                        |
//! |-----------------------------|-----------------------------------------------|
//! | `{{name}}`                  | substitute the stringified value of `name`    |
//! | `{{#if name}}...{{/if}}`    | keep the body when `name` is truthy, else drop|
//!
//! Conditional blocks are resolved before any substitution, and malformed
//! markup never raises — unterminated or orphan markers pass through inertly.

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::value::{is_truthy, render_value};

// ---------------------------------------------------------------------------
// Marker patterns
// ---------------------------------------------------------------------------

/// `{{#if KEY}}BODY{{/if}}` — lazy body, so the nearest close pairs first.
const BLOCK_PATTERN: &str = r"(?s)\{\{#if ([^}]+)\}\}(.*?)\{\{/if\}\}";

/// `{{NAME}}` — first content char must not be a control sigil (`#` or `/`).
const VAR_PATTERN: &str = r"\{\{([^#/][^}]*)\}\}";

/// A block opener on its own, for leftover-marker diagnostics.
const OPEN_PATTERN: &str = r"\{\{#if ([^}]+)\}\}";

const CLOSE_MARKER: &str = "{{/if}}";

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Placeholder renderer over a JSON data mapping.
///
/// Holds the compiled marker patterns. Create once with [`Renderer::new`] and
/// reuse; [`Renderer::render`] itself is pure and infallible.
pub struct Renderer {
    block_re: Regex,
    var_re: Regex,
    open_re: Regex,
}

impl Renderer {
    /// Construct a new [`Renderer`], compiling the marker patterns.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer {
            block_re: Regex::new(BLOCK_PATTERN)?,
            var_re: Regex::new(VAR_PATTERN)?,
            open_re: Regex::new(OPEN_PATTERN)?,
        })
    }

    /// Render `template` against `data`.
    ///
    /// Conditional blocks are resolved first, repeatedly: each splice
    /// restarts the scan from the beginning of the mutated template, so
    /// content that survives a truthy block is itself scanned on the next
    /// pass. Variable substitution then runs once, left to right; substituted
    /// text is not re-scanned.
    ///
    /// Missing keys substitute the empty string. Malformed markup is left in
    /// place rather than rejected.
    pub fn render(&self, template: &str, data: &Map<String, Value>) -> String {
        let mut text = template.to_string();

        while let Some(caps) = self.block_re.captures(&text) {
            let Some(whole) = caps.get(0) else { break };
            let span = whole.range();
            let key = caps[1].trim().to_string();
            let body = caps[2].to_string();
            let replacement = if data.get(&key).is_some_and(is_truthy) {
                body
            } else {
                String::new()
            };
            text.replace_range(span, &replacement);
        }

        self.var_re
            .replace_all(&text, |caps: &Captures<'_>| {
                let key = caps[1].trim();
                data.get(key).map(render_value).unwrap_or_default()
            })
            .into_owned()
    }

    /// Report leftover conditional markers in rendered output — one message
    /// per unterminated opener and per orphan close. Scans only; the rendered
    /// content is never altered.
    pub fn diagnostics(&self, rendered: &str) -> Vec<String> {
        let mut diags = Vec::new();
        for caps in self.open_re.captures_iter(rendered) {
            diags.push(format!(
                "unterminated conditional block for key `{}`",
                caps[1].trim()
            ));
        }
        for _ in rendered.matches(CLOSE_MARKER) {
            diags.push("conditional close marker without a matching open".to_string());
        }
        diags
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
