//! Compiler protocol — JSON envelopes exchanged over stdin/stdout.
//!
//! One request in, one response out, per invocation:
//!
//! ```text
//! IN:  { templateSource, templatePath?, data, frontmatter, cwd? }
//! OUT: { content, diagnostics? }
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RenderError;

/// Request envelope read from stdin.
///
/// Every field is optional. `data` and `frontmatter` are kept as raw values
/// so mistyped (non-object) payloads degrade to empty mappings instead of
/// failing the decode. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub template_source: String,
    pub template_path: Option<String>,
    pub data: Value,
    pub frontmatter: Value,
    pub cwd: Option<String>,
}

impl RenderRequest {
    /// Decode one request envelope from `reader`.
    pub fn from_reader(reader: impl Read) -> Result<Self, RenderError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Variable mapping visible to the template: frontmatter `vars` first,
    /// then `data` entries on top. A key present in both resolves to the
    /// `data` value.
    pub fn merged_data(&self) -> Map<String, Value> {
        let mut merged = self
            .frontmatter
            .get("vars")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        if let Some(data) = self.data.as_object() {
            for (key, value) in data {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// Response envelope written to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Vec<String>>,
}

impl RenderResponse {
    /// Build a response; an empty diagnostics list is omitted from the wire.
    pub fn new(content: String, diagnostics: Vec<String>) -> Self {
        Self {
            content,
            diagnostics: if diagnostics.is_empty() {
                None
            } else {
                Some(diagnostics)
            },
        }
    }

    /// Encode this response onto `writer` as compact JSON and flush.
    /// Non-ASCII characters are emitted literally, not escaped.
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), RenderError> {
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
