use anyhow::Result;
use colored::*;

use super::Project;

/// Show how the catalog was loaded
pub fn run(project: &Project, json: bool) -> Result<()> {
    let engine = project.engine()?;
    let Some(report) = engine.report() else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", "Catalog Status".bold());
    println!("{}", "=".repeat(50));
    println!("Source:        {}", report.source.cyan());
    println!("Loaded at:     {}", report.loaded_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Files:         {}", report.files);
    println!("Records read:  {}", report.records_read);
    println!("Entries:       {}", report.entries_loaded.to_string().bold());
    println!("Distinct tags: {}", report.distinct_tags);
    println!();

    if report.is_clean() {
        println!("{} Catalog loaded without warnings", "✓".green());
        return Ok(());
    }

    println!(
        "{} {} warning(s)",
        "!".yellow().bold(),
        report.warnings.len()
    );
    for warning in &report.warnings {
        println!("  • {}", warning.to_string().yellow());
    }

    Ok(())
}
