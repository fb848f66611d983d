use anyhow::Result;
use colored::*;
use serde::Serialize;

use tutor_concepts::tags::MatchSource;

use super::Project;

#[derive(Serialize)]
struct KeywordReport {
    keyword: String,
    catalog_tags: Vec<FuzzyTag>,
}

#[derive(Serialize)]
struct FuzzyTag {
    tag: String,
    score: u8,
}

/// Show the keyword vocabulary and the catalog tags close to each keyword
pub fn run(project: &Project, json: bool) -> Result<()> {
    let engine = project.engine()?;
    let extractor = engine.extractor();

    let keywords: Vec<KeywordReport> = extractor
        .vocabulary()
        .iter()
        .map(|keyword| KeywordReport {
            keyword: keyword.clone(),
            catalog_tags: extractor
                .fuzzy_for(keyword)
                .iter()
                .filter_map(|m| match &m.source {
                    MatchSource::Fuzzy { score, .. } => Some(FuzzyTag {
                        tag: m.tag.clone(),
                        score: *score,
                    }),
                    MatchSource::Keyword => None,
                })
                .collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
        return Ok(());
    }

    println!("{}", "Keyword Vocabulary".bold());
    println!("{}", "=".repeat(50));
    println!(
        "{} keywords, fuzzy threshold > {}",
        keywords.len().to_string().bold(),
        extractor.threshold()
    );
    println!();

    for report in &keywords {
        if report.catalog_tags.is_empty() {
            println!("  {}", report.keyword.cyan());
            continue;
        }
        let tags: Vec<String> = report
            .catalog_tags
            .iter()
            .map(|t| format!("{} ({}%)", t.tag, t.score))
            .collect();
        println!(
            "  {} {} {}",
            report.keyword.cyan(),
            "→".dimmed(),
            tags.join(", ").magenta()
        );
    }

    Ok(())
}
