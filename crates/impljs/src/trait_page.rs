use std::path::{Component, Path};

use anyhow::{Context, Result, bail};

/// Identity of a trait page, derived from where its data module sits under
/// the `implementors/` root.
///
/// `packline/codec/trait.Decode.js` → path `packline::codec::Decode`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TraitPage {
    /// Fully qualified trait path, `::`-joined.
    pub path: String,
    /// The trait's own name, the last path segment.
    pub name: String,
}

impl TraitPage {
    /// Derive the trait identity from a data module's path relative to the
    /// `implementors/` root.
    pub fn from_module_path(relative: &Path) -> Result<Self> {
        let file_name = relative
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("`{}` has no file name", relative.display()))?;
        let name = file_name
            .strip_prefix("trait.")
            .and_then(|name| name.strip_suffix(".js"))
            .filter(|name| !name.is_empty())
            .with_context(|| format!("`{file_name}` is not a trait data module"))?;

        let mut segments = Vec::new();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                let Component::Normal(segment) = component else {
                    bail!("`{}` is not a plain relative path", relative.display());
                };
                let segment = segment
                    .to_str()
                    .with_context(|| format!("`{}` has a non-UTF-8 segment", relative.display()))?;
                segments.push(segment);
            }
        }
        segments.push(name);

        Ok(Self {
            path: segments.join("::"),
            name: name.to_string(),
        })
    }
}
