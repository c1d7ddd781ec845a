use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use impljs::TraitPage;

/// A data module found in a documentation tree, not yet parsed.
#[derive(Debug)]
pub struct FoundModule {
    pub file: PathBuf,
    pub page: TraitPage,
}

/// Find every trait data module under `<docs_root>/implementors`.
///
/// The result is sorted by file path so a tree is always walked in the same
/// order, which is also the order the page would load the modules in.
pub fn find_data_modules(docs_root: &Path) -> Result<Vec<FoundModule>> {
    let implementors_root = docs_root.join("implementors");
    if !implementors_root.is_dir() {
        bail!(
            "`{}` has no implementors/ directory; expected the root of a generated documentation tree",
            docs_root.display()
        );
    }

    let mut files = Vec::new();
    collect_js_files(&implementors_root, &mut files)?;
    files.sort();

    let mut modules = Vec::new();
    for file in files {
        let relative = file
            .strip_prefix(&implementors_root)
            .context("scanned file outside the implementors root")?;
        // Not every .js file in the tree is a trait data module; skip the rest.
        let Ok(page) = TraitPage::from_module_path(relative) else {
            continue;
        };
        modules.push(FoundModule { file, page });
    }
    Ok(modules)
}

fn collect_js_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read an entry of {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_js_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "js") {
            files.push(path);
        }
    }
    Ok(())
}
