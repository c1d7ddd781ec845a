use colored::Colorize;

use crate::fmt;

pub use impl_row::ImplRow;

mod impl_row;

/// One trait page and the rows the consumer observed for it.
pub struct TraitListing {
    pub trait_path: String,
    pub rows: Vec<ImplRow>,
}

/// Render the listings for terminal output, one block per trait.
pub fn render_listings(listings: &[TraitListing]) -> String {
    let mut output = String::new();
    for (i, listing) in listings.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&render_listing(listing));
    }
    output
}

fn render_listing(listing: &TraitListing) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        "trait".bright_blue(),
        listing.trait_path.bright_white().bold()
    ));
    output.push_str(&format!("{}\n", "─".repeat(80).bright_black()));

    if listing.rows.is_empty() {
        output.push_str(&format!("  {}\n", "(no implementors)".dimmed()));
    } else {
        let key_width = listing
            .rows
            .iter()
            .map(|row| row.module_key.len())
            .max()
            .unwrap_or(0);
        for row in &listing.rows {
            // Pad before colorizing so escape codes do not count as width.
            let key = format!("{:<key_width$}", row.module_key);
            output.push_str(&format!(
                "  {}  {}\n",
                key.bright_cyan(),
                fmt::render_tokens(row.output().tokens())
            ));
        }
    }

    output.push_str(&format!("{}\n", "─".repeat(80).bright_black()));
    output
}
