//! Validate command - check every annotation against the reference.

use colored::Colorize;
use glyphcheck::validation::group_by_context;
use glyphcheck::{CheckResult, Checker, CheckerConfig, Finding};

pub fn run(
    config: CheckerConfig,
    json_output: bool,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let checker = Checker::with_config(config);
    let db = checker.load_reference()?;
    let corpus = checker.load_corpus()?;
    let result = checker.validate(&db, &corpus);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.report.passed());
    }

    print_header(&checker, &result, verbose);
    print_summary(&result);

    let report = &result.report;

    if !report.incorrect.is_empty() {
        println!("{}", "INCORRECT CODES:".red().bold());
        println!();
        print_grouped(&report.incorrect, |finding| {
            println!(
                "  Line {}: {}",
                finding.line().to_string().white().bold(),
                finding.character()
            );
            println!(
                "    Found: \"{}\" → Should be: \"{}\"",
                finding.annotation.code.red(),
                finding.classification.correct_code().unwrap_or_default().green()
            );
        });
    }

    if !report.unknown.is_empty() {
        println!("{}", "CHARACTERS NOT IN DATABASE:".yellow().bold());
        println!();
        print_grouped(&report.unknown, |finding| {
            println!(
                "  Line {}: {} (code: \"{}\")",
                finding.line().to_string().white().bold(),
                finding.character(),
                finding.annotation.code
            );
        });
    }

    if report.passed() {
        println!("{}", "All codes are correct!".green().bold());
    } else {
        println!("{} Fix the errors above.", "Validation failed.".red().bold());
        if !report.incorrect.is_empty() {
            println!(
                "Run {} to correct incorrect codes automatically.",
                "glyphcheck fix".cyan().bold()
            );
        }
    }

    Ok(report.passed())
}

fn print_header(checker: &Checker, result: &CheckResult, verbose: bool) {
    println!(
        "{} {}",
        "Validating".cyan().bold(),
        result.source.file.white()
    );
    if verbose {
        println!(
            "  Reference: {} ({} characters)",
            checker.config().reference_path.display(),
            result.reference_entries
        );
        println!("  Corpus:    {} ({})", result.source.path.display(), result.source.hash.dimmed());
    }
    println!();
}

fn print_summary(result: &CheckResult) {
    let report = &result.report;
    let rule = "═".repeat(50);

    println!("{}", rule.dimmed());
    println!("  Instances: {}", result.annotations.to_string().white().bold());
    println!("  Valid:     {}", report.valid_count.to_string().green());
    println!("  Incorrect: {}", report.incorrect.len().to_string().red());
    println!("  Not Found: {}", report.unknown.len().to_string().yellow());
    println!("{}", rule.dimmed());
    println!();
}

fn print_grouped(findings: &[Finding], print_finding: impl Fn(&Finding)) {
    for (context, group) in group_by_context(findings) {
        println!("{} {}", "▸".cyan(), context.cyan().bold());
        for finding in group {
            print_finding(finding);
            println!("    {}", finding.annotation.line_content.trim().dimmed());
            println!();
        }
    }
}
