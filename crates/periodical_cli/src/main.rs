//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `periodical_core` linkage with a tiny sample graph.
//! - Print a deterministic-shape JSON report of the global registry.

use log::error;
use periodical_core::{
    core_version, init_logging, registry, Author, CatalogReport, LoggingConfig, Magazine,
    ModelResult,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LoggingConfig::from_env()) {
        eprintln!("periodical logging disabled: {err}");
    }
    println!("periodical_core version={}", core_version());

    if let Err(err) = seed_sample_catalog() {
        error!("event=seed module=cli status=error error={err}");
        eprintln!("failed to build sample catalog: {err}");
        return ExitCode::FAILURE;
    }

    let report = CatalogReport::from_registry(registry::global());
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn seed_sample_catalog() -> ModelResult<()> {
    let carry = Author::new("Carry Bradshaw")?;
    let nathaniel = Author::new("Nathaniel Hawthorne")?;
    let vogue = Magazine::new("Vogue", "Fashion")?;
    let ad = Magazine::new("AD", "Architecture")?;

    carry.add_article(&vogue, "How to wear a tutu with style")?;
    carry.add_article(&vogue, "How to be single and happy")?;
    carry.add_article(&vogue, "Dating life in NYC")?;
    carry.add_article(&ad, "Carrara Marble")?;
    nathaniel.add_article(&ad, "2023 Eccentric Design Trends")?;
    Ok(())
}
