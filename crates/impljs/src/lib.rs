//! Parser for the implementor-data modules a generated documentation tree
//! ships next to each trait page.
//!
//! The modules are small JS shims. The only data-bearing parts are entry
//! lines of the form `implementors["<crate>"] = ["…", …];`; this crate reads
//! those back structurally, without executing anything, and offers light
//! inspection of the pre-rendered descriptor strings they carry.

mod data_module;
mod descriptor;
mod trait_page;

pub use data_module::DataModule;
pub use descriptor::{LinkKind, Piece, pieces, plain_text};
pub use trait_page::TraitPage;
