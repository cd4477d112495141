//! Section editing commands (update-section, apply)

use std::path::Path;

use colored::Colorize;
use shellkit_section::{
    EditOutcome, SectionManifest, SectionRequest, apply_manifest, preview_section, update_section,
};

use crate::error::Result;

/// Run the update-section command.
///
/// `args` is `<FILE> <START> <END> [LINE]...`; a leading `--remove` is also
/// accepted there so the positional form matches the library call.
pub fn run_update_section(remove: bool, dry_run: bool, args: &[String]) -> Result<()> {
    let request = if remove {
        SectionRequest::parse(true, args)?
    } else {
        SectionRequest::from_args(args)?
    };

    if dry_run {
        print_preview(&request)?;
        return Ok(());
    }

    update_section(&request)?;
    Ok(())
}

/// Run the apply command.
pub fn run_apply(manifest_path: &Path, dry_run: bool) -> Result<()> {
    let manifest = SectionManifest::load(manifest_path)?;

    if dry_run {
        for request in manifest.requests()? {
            print_preview(&request)?;
        }
        return Ok(());
    }

    for (path, outcome) in apply_manifest(&manifest)? {
        println!("{} {} ({})", status_label(outcome), path.display(), outcome);
    }

    Ok(())
}

fn print_preview(request: &SectionRequest) -> Result<()> {
    let preview = preview_section(request)?;
    if preview.has_changes() {
        print!("{}", preview.unified_diff());
    } else {
        tracing::info!(path = %request.path().display(), outcome = %preview.outcome, "No changes");
    }
    Ok(())
}

fn status_label(outcome: EditOutcome) -> colored::ColoredString {
    if outcome.modified() {
        "OK".green().bold()
    } else {
        "--".dimmed()
    }
}
