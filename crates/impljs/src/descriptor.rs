//! Read-side inspection of pre-rendered descriptor strings.
//!
//! Descriptors arrive as text fragments with item names wrapped in anchors,
//! e.g. `impl <a class='trait' href='…'>Decode</a> for <a class='struct'
//! href='…'>Frame</a>`. Nothing here re-renders them; this module only takes
//! them apart far enough for terminal display.

/// A chunk of a descriptor: plain text, or one of the anchors the generator
/// wrapped around item names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Link {
        text: String,
        kind: LinkKind,
        href: Option<String>,
    },
}

/// What an anchor points at, taken from its `class` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Trait,
    Struct,
    Enum,
    Primitive,
    Other,
}

impl LinkKind {
    fn from_class(class: Option<&str>) -> Self {
        match class {
            Some("trait") => Self::Trait,
            Some("struct") => Self::Struct,
            Some("enum") => Self::Enum,
            Some("primitive") => Self::Primitive,
            _ => Self::Other,
        }
    }
}

/// Split a descriptor into its pieces, in order.
///
/// Anchors become [`Piece::Link`]; any other markup is dropped and its
/// content flows on as text. Truncated markup degrades to text instead of
/// being lost.
pub fn pieces(descriptor: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut rest = descriptor;
    while let Some(open) = rest.find('<') {
        push_text(&mut pieces, &rest[..open]);
        rest = &rest[open..];
        let Some(close) = rest.find('>') else {
            push_text(&mut pieces, rest);
            return pieces;
        };
        let tag = &rest[1..close];
        rest = &rest[close + 1..];
        if tag == "a" || tag.starts_with("a ") {
            let Some(end) = rest.find("</a>") else {
                push_text(&mut pieces, rest);
                return pieces;
            };
            pieces.push(Piece::Link {
                text: decode_entities(&rest[..end]),
                kind: LinkKind::from_class(attr_value(tag, "class").as_deref()),
                href: attr_value(tag, "href"),
            });
            rest = &rest[end + "</a>".len()..];
        }
    }
    push_text(&mut pieces, rest);
    pieces
}

/// The descriptor with all markup stripped, e.g. `impl Decode for Frame`.
pub fn plain_text(descriptor: &str) -> String {
    pieces(descriptor)
        .iter()
        .map(|piece| match piece {
            Piece::Text(text) => text.as_str(),
            Piece::Link { text, .. } => text.as_str(),
        })
        .collect()
}

fn push_text(pieces: &mut Vec<Piece>, text: &str) {
    if !text.is_empty() {
        pieces.push(Piece::Text(decode_entities(text)));
    }
}

/// Extract a quoted attribute value from the inside of a tag. The generator
/// quotes with either `'` or `"`.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let assign = format!("{name}=");
    let start = tag.find(&assign)? + assign.len();
    let rest = &tag[start..];
    let quote = rest.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let rest = &rest[1..];
    Some(rest[..rest.find(quote)?].to_string())
}

/// Decode the few entities the generator emits into descriptor text.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
