mod output;
mod terminal;
mod tokens;

pub use output::Output;
pub use terminal::render_tokens;
pub use tokens::Token;
