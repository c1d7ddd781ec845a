use impljs::{LinkKind, Piece};

use crate::fmt::Output;

/// One implementor relationship as the consumer received it, tokenized for
/// terminal display.
pub struct ImplRow {
    pub module_key: String,
    output: Output,
}

impl ImplRow {
    /// Tokenize a pre-rendered descriptor. Linked item names keep the kind
    /// their anchor carries; the plain text in between is split into
    /// keywords and identifiers.
    pub fn from_descriptor(module_key: &str, descriptor: &str) -> Self {
        let mut output = Output::new();
        for piece in impljs::pieces(descriptor) {
            match piece {
                Piece::Text(text) => tokenize_text(&mut output, &text),
                Piece::Link { text, kind, .. } => {
                    match kind {
                        LinkKind::Trait | LinkKind::Struct | LinkKind::Enum => output.type_(text),
                        LinkKind::Primitive => output.primitive(text),
                        LinkKind::Other => output.identifier(text),
                    };
                }
            }
        }
        Self {
            module_key: module_key.to_string(),
            output,
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

/// Descriptor text between anchors only ever uses single spaces.
fn tokenize_text(output: &mut Output, text: &str) {
    let mut words = text.split(' ').peekable();
    while let Some(word) = words.next() {
        match word {
            "" => {}
            "impl" | "for" | "where" | "dyn" | "unsafe" | "const" => {
                output.keyword(word);
            }
            _ => {
                output.identifier(word);
            }
        }
        if words.peek().is_some() {
            output.whitespace();
        }
    }
}
