use anyhow::Result;
use colored::*;
use std::collections::BTreeSet;

use tutor_concepts::tags::MatchSource;

use super::{read_text, Project};

/// Detect concept tags in a response text
pub fn run(project: &Project, text: &str, explain: bool, json: bool) -> Result<()> {
    let engine = project.engine()?;
    let text = read_text(text)?;

    if json {
        if explain {
            println!("{}", serde_json::to_string_pretty(&engine.explain(&text))?);
        } else {
            println!("{}", serde_json::to_string_pretty(&engine.extract(&text))?);
        }
        return Ok(());
    }

    println!("{}", "Concept Tags".bold());
    println!("{}", "=".repeat(50));
    println!("Input: {}", text.trim().dimmed());
    println!();

    let matches = engine.explain(&text);
    if matches.is_empty() {
        println!("{}", "No concepts detected.".yellow());
        return Ok(());
    }

    if !explain {
        let tags: BTreeSet<&str> = matches.iter().map(|m| m.tag.as_str()).collect();
        for tag in tags {
            println!("  • {}", tag.cyan().bold());
        }
        return Ok(());
    }

    for (i, m) in matches.iter().enumerate() {
        let reason = match &m.source {
            MatchSource::Keyword => "keyword in text".to_string(),
            MatchSource::Fuzzy { keyword, score } => {
                format!("catalog tag close to '{}' ({}%)", keyword, score)
            }
        };
        let tag_display = match m.source {
            MatchSource::Keyword => m.tag.cyan().bold(),
            MatchSource::Fuzzy { .. } => m.tag.magenta().bold(),
        };
        println!("  {}. {} - {}", i + 1, tag_display, reason.dimmed());
    }

    Ok(())
}

/// Print a response together with its concept tags
pub fn run_annotate(project: &Project, text: &str, json: bool) -> Result<()> {
    let engine = project.engine()?;
    let text = read_text(text)?;
    let annotated = engine.annotate(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&annotated)?);
        return Ok(());
    }

    println!("{}", annotated.response);
    println!();
    if annotated.tags.is_empty() {
        println!("{}", "(no concepts detected)".dimmed());
    } else {
        let tags: Vec<String> = annotated.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }

    Ok(())
}
