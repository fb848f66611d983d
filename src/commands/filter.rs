use anyhow::Result;
use colored::*;
use unicode_width::UnicodeWidthStr;

use tutor_concepts::CatalogEntry;

use super::Project;

const TITLE_WIDTH: usize = 40;

/// List catalog entries carrying any of the given tags
pub fn run(project: &Project, tags: &[String], json: bool) -> Result<()> {
    let engine = project.engine()?;
    let entries = engine.filter(tags);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let heading = if tags.is_empty() {
        "Catalog (all entries)".to_string()
    } else {
        format!("Catalog entries tagged: {}", tags.join(", "))
    };
    println!("{}", heading.bold());
    println!("{}", "=".repeat(60));

    if entries.is_empty() {
        println!("{}", "No matching entries.".yellow());
        return Ok(());
    }

    let id_width = entries
        .iter()
        .map(|e| e.id.to_string().width())
        .max()
        .unwrap_or(0);

    for entry in &entries {
        print_entry(entry, id_width);
    }

    println!();
    println!(
        "{} of {} entries",
        entries.len().to_string().bold(),
        engine.catalog().len()
    );

    Ok(())
}

fn print_entry(entry: &CatalogEntry, id_width: usize) {
    let id = entry.id.to_string();
    let title = truncate(entry.title().unwrap_or("-"), TITLE_WIDTH);
    println!(
        "  {}{}  {}{}  {}",
        id.green(),
        " ".repeat(id_width.saturating_sub(id.width())),
        title,
        " ".repeat(TITLE_WIDTH.saturating_sub(title.width())),
        entry.tags.join(", ").dimmed()
    );
}

/// Cut `text` to at most `max` terminal columns, marking the cut with "…"
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
