use anyhow::{Context, Result, bail};

/// One generated implementor-data module, read back into its entries.
///
/// A single-crate tree has one entry per module; merged documentation trees
/// write several entries into the same file. Entry order in the file is the
/// order the entries were appended, and is preserved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataModule {
    /// `(module key, descriptors)` in file order.
    pub entries: Vec<(String, Vec<String>)>,
}

impl DataModule {
    /// Parse the text of a data module.
    ///
    /// Fails if the source carries no entries at all, or an entry's
    /// descriptor array is not an array of strings.
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut lines = source.lines();
        while let Some(line) = lines.next() {
            let Some(rest) = line.trim_start().strip_prefix("implementors[") else {
                continue;
            };
            entries.push(parse_entry(rest, &mut lines)?);
        }
        if entries.is_empty() {
            bail!("no implementor entries found");
        }
        Ok(Self { entries })
    }
}

/// Parse one `"<key>"] = […];` entry, consuming continuation lines until the
/// array is terminated.
fn parse_entry(rest: &str, lines: &mut std::str::Lines<'_>) -> Result<(String, Vec<String>)> {
    let rest = rest.strip_prefix('"').context("module key is not quoted")?;
    let (key, rest) = rest.split_once('"').context("unterminated module key")?;
    let rest = rest
        .trim_start()
        .strip_prefix(']')
        .and_then(|r| r.trim_start().strip_prefix('='))
        .with_context(|| format!("malformed entry for module `{key}`"))?;

    let mut array = rest.trim_start().to_string();
    while !array.trim_end().ends_with("];") {
        let continuation = lines
            .next()
            .with_context(|| format!("unterminated descriptor array for module `{key}`"))?;
        array.push('\n');
        array.push_str(continuation);
    }
    let array = strip_trailing_comma(array.trim_end().trim_end_matches(';'));

    let descriptors: Vec<String> = serde_json::from_str(&array)
        .with_context(|| format!("descriptor array for module `{key}` is not a string array"))?;
    Ok((key.to_string(), descriptors))
}

/// The generator leaves a trailing comma before the closing bracket, which
/// strict JSON rejects.
fn strip_trailing_comma(array: &str) -> String {
    let Some(body) = array.trim_end().strip_suffix(']') else {
        return array.to_string();
    };
    let body = body.trim_end();
    let body = body.strip_suffix(',').unwrap_or(body);
    format!("{body}]")
}
