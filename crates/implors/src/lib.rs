mod cli;
mod color;
mod fmt;
mod list;
mod replay;
mod scan;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use impljs::{DataModule, TraitPage};
use serde::Serialize;

use cli::Cli;
use list::{ImplRow, TraitListing};

/// Run the CLI with the given arguments (program name excluded) and return
/// what it would print: `Ok` carries the stdout text, `Err` the stderr text.
pub fn run_cli(args: &[&str]) -> Result<String, String> {
    match run_cli_impl(args) {
        Ok(output) => Ok(output),
        Err(e) => Err(format!("{:#}", e)),
    }
}

fn run_cli_impl(args: &[&str]) -> Result<String> {
    let cli = match Cli::try_parse_from(std::iter::once("implors").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(e) => {
            // Handle --help and --version as successful outputs
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                return Ok(e.to_string());
            }
            return Err(e.into());
        }
    };
    cli.color.apply();

    let mut pages: Vec<(TraitPage, Vec<(String, Vec<String>)>)> = Vec::new();
    for found in scan::find_data_modules(&cli.docs_root)? {
        if let Some(filter) = &cli.trait_filter
            && !found.page.path.contains(filter.as_str())
        {
            continue;
        }

        let source = fs::read_to_string(&found.file)
            .with_context(|| format!("Failed to read {}", found.file.display()))?;
        let parsed = DataModule::parse(&source)
            .with_context(|| format!("Failed to parse {}", found.file.display()))?;

        // Reconstruct the page-load sequence through a fresh registry; what
        // the attached consumer observed is what gets rendered.
        let observed = replay::replay_page(&parsed.entries);
        pages.push((found.page, observed));
    }

    if let Some(module) = &cli.module {
        for (_, observed) in &mut pages {
            observed.retain(|(key, _)| key == module);
        }
        pages.retain(|(_, observed)| !observed.is_empty());
    }

    if cli.json {
        return render_json(&pages);
    }
    if pages.is_empty() {
        return Ok("No implementor data modules matched.\n".to_string());
    }
    Ok(list::render_listings(&build_listings(&pages)))
}

fn build_listings(pages: &[(TraitPage, Vec<(String, Vec<String>)>)]) -> Vec<TraitListing> {
    pages
        .iter()
        .map(|(page, observed)| {
            let rows = observed
                .iter()
                .flat_map(|(key, descriptors)| {
                    descriptors
                        .iter()
                        .map(move |descriptor| ImplRow::from_descriptor(key, descriptor))
                })
                .collect();
            TraitListing {
                trait_path: page.path.clone(),
                rows,
            }
        })
        .collect()
}

/// JSON shape of the `--json` surface: exactly what the consumer observed,
/// in delivery order.
#[derive(Serialize)]
struct TraitReport<'a> {
    #[serde(rename = "trait")]
    trait_path: &'a str,
    modules: Vec<ModuleReport<'a>>,
}

#[derive(Serialize)]
struct ModuleReport<'a> {
    module: &'a str,
    descriptors: &'a [String],
}

fn render_json(pages: &[(TraitPage, Vec<(String, Vec<String>)>)]) -> Result<String> {
    let report: Vec<TraitReport<'_>> = pages
        .iter()
        .map(|(page, observed)| TraitReport {
            trait_path: page.path.as_str(),
            modules: observed
                .iter()
                .map(|(key, descriptors)| ModuleReport {
                    module: key.as_str(),
                    descriptors: descriptors.as_slice(),
                })
                .collect(),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
