use colored::Colorize;

use super::tokens::Token;

/// Render a token sequence as a string with terminal styling. The global
/// `colored` switch decides whether the styling actually shows up.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(style).collect()
}

fn style(token: &Token) -> String {
    let text = token.text();
    match token {
        Token::Whitespace | Token::Identifier(_) => text.to_string(),
        Token::Keyword(_) => text.bright_blue().to_string(),
        Token::Type(_) => text.bright_yellow().to_string(),
        Token::Primitive(_) => text.bright_yellow().to_string(),
    }
}
