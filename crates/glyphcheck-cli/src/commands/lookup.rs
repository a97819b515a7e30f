//! Lookup command - show codes and generate annotation tokens.

use colored::Colorize;
use glyphcheck::{split_characters, Checker, CheckerConfig};

pub fn run(
    config: CheckerConfig,
    characters: Vec<String>,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let checker = Checker::with_config(config);
    let db = checker.load_reference()?;

    if verbose {
        println!(
            "{} {} characters from {}",
            "Loaded".cyan().bold(),
            db.len().to_string().white().bold(),
            checker.config().reference_path.display()
        );
        println!();
    }

    let characters = split_characters(&characters);
    let results = checker.lookup(&db, &characters);

    println!("{}", "Character | Code   | Status".bold());
    println!("----------|--------|--------");
    for result in &results {
        let code = result.code.as_deref().unwrap_or("N/A");
        let status = if result.found {
            "✓".green()
        } else {
            "✗ NOT FOUND".red()
        };
        println!("{:<9} | {:<6} | {}", result.character, code, status);
    }
    println!();

    if results.iter().any(|r| r.found) {
        println!("{}", "Generated tokens:".yellow().bold());
        println!();
        for line in checker.generator().render_all(&results, &Default::default()) {
            println!("  {}", line);
        }
        println!();
    }

    Ok(true)
}
