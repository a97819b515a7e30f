//! Fix command - rewrite incorrect codes in the lesson corpus.

use colored::Colorize;
use glyphcheck::{Checker, CheckerConfig, FixOptions};
use tracing::debug;

pub fn run(
    config: CheckerConfig,
    dry_run: bool,
    backup: bool,
    json_output: bool,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let checker = Checker::with_config(config);
    let db = checker.load_reference()?;

    let report = checker.fix(&db, FixOptions { dry_run, backup })?;

    for fix in report.applied.mismatched() {
        debug!(
            character = %fix.group.character,
            old = %fix.group.old_code,
            expected = fix.group.occurrences,
            replaced = fix.replaced,
            "replacement count differs from validation count"
        );
    }
    if !report.written {
        debug!(dry_run, changed = report.applied.changed(), "corpus left unchanged");
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(true);
    }

    if verbose {
        println!(
            "{} {} characters, {} instances in {}",
            "Loaded".cyan().bold(),
            db.len(),
            report.annotations,
            report.source.file
        );
        println!();
    }

    if report.applied.fixes.is_empty() {
        println!("{}", "No fixes needed!".green().bold());
        print_unknown(report.remaining.unknown.len());
        return Ok(true);
    }

    let verb = if dry_run { "Would fix" } else { "Fixing" };
    println!(
        "{} {} incorrect codes in {} groups",
        verb.cyan().bold(),
        report.incorrect.to_string().white().bold(),
        report.applied.fixes.len()
    );
    println!();

    for fix in &report.applied.fixes {
        let group = &fix.group;
        println!(
            "  {} {}: \"{}\" → \"{}\" ({} instances)",
            "✓".green(),
            group.character,
            group.old_code.red(),
            group.new_code.green(),
            fix.replaced
        );
    }
    println!();

    for fix in report.applied.mismatched() {
        println!(
            "{} {}: expected {} instances of \"{}\", replaced {}",
            "Warning:".yellow().bold(),
            fix.group.character,
            fix.group.occurrences,
            fix.group.old_code,
            fix.replaced
        );
    }

    if let Some(backup) = &report.backup {
        println!("Backup saved to {}", backup.display().to_string().dimmed());
    }

    if report.written {
        println!(
            "{} Fixed {} codes in {}",
            "Done:".green().bold(),
            report.applied.total_replaced.to_string().white().bold(),
            report.source.path.display()
        );
    } else if dry_run {
        println!(
            "Dry run: {} codes would change. Run {} to write them.",
            report.applied.total_replaced,
            "glyphcheck fix".cyan().bold()
        );
    }

    if !report.remaining.incorrect.is_empty() {
        println!(
            "{} {} incorrect codes remain after fixing.",
            "Warning:".yellow().bold(),
            report.remaining.incorrect.len()
        );
    }
    print_unknown(report.remaining.unknown.len());

    Ok(true)
}

fn print_unknown(count: usize) {
    if count > 0 {
        println!(
            "{} {} characters are not in the reference database and were left unchanged.",
            "Note:".yellow(),
            count
        );
    }
}
