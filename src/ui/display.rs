//! Display functions for resolution and install results

use std::path::Path;

use console::Style;

use crate::installer::{InstallAction, InstallReport};
use crate::resolver::Resolved;
use crate::source::BundleSource;

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        println!("  {} {}", Style::new().bold().apply_to($label), $value);
    };
}

/// Print the root found by `locate`
///
/// The path alone goes to stdout so it can be captured by scripts.
pub fn print_located(resolved: &Resolved, verbose: bool) {
    println!("{}", resolved.root.display());
    if verbose {
        eprintln!(
            "{} {}",
            Style::new().dim().apply_to("found by"),
            resolved.strategy
        );
    }
}

/// Print what a dry run would do
pub fn print_plan(resolved: &Resolved, report: &InstallReport) {
    println!(
        "[DRY RUN] Would install {} file(s) into {}",
        report.copied(),
        Style::new().cyan().apply_to(resolved.root.display())
    );
    for record in &report.records {
        let marker = match record.action {
            InstallAction::Copied => Style::new().green().apply_to("new      "),
            InstallAction::BackedUpThenCopied => Style::new().yellow().apply_to("replace  "),
        };
        println!("  {marker}{}", record.destination.display());
        if let Some(backup) = &record.backup {
            println!(
                "  {}{}",
                Style::new().dim().apply_to("  backup "),
                backup.display()
            );
        }
    }
}

/// Print the outcome of a finished install
pub fn print_summary(
    resolved: &Resolved,
    source: &dyn BundleSource,
    report: &InstallReport,
    log_path: &Path,
) {
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("✔"),
        Style::new().bold().apply_to("Settings installed")
    );
    display_field!("Quantower root:", resolved.root.display());
    display_field!("Found by:", resolved.strategy);
    display_field!("Bundle:", source.describe());
    display_field!("Files copied:", report.copied());
    display_field!("Files backed up:", backed_up_label(report));
    display_field!("Audit log:", log_path.display());
}

fn backed_up_label(report: &InstallReport) -> String {
    match report.backed_up() {
        0 => "0".to_string(),
        n => format!("{n} (see Backups/Settings)"),
    }
}
