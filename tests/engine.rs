use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tutor_concepts::catalog::{DuplicatePolicy, LoadWarning, DEFAULT_CATALOG_PATH};
use tutor_concepts::core::CONFIG_FILE;
use tutor_concepts::{CatalogError, ConceptEngine, Config, EntryId, ProjectPaths};

const FEED: &str = r#"[
    {"id": 1, "title": "Quadratic basics", "body": "Standard form and roots", "tags": ["Quadratics", "Algebra"]},
    {"id": 2, "title": "Factoring trinomials", "body": "Reverse FOIL", "tags": ["Factoring"]},
    {"id": 3, "title": "Graphing lines", "body": "Slope-intercept form", "tags": ["Linear Equations", "algebra"]},
    {"id": 4, "title": "Broken", "tags": "not a list"},
    {"id": 2, "title": "Factoring trinomials (revised)", "body": "Reverse FOIL", "tags": ["Factoring"]}
]"#;

fn project(feed: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CATALOG_PATH);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, feed).unwrap();
    dir
}

fn paths(root: &Path) -> ProjectPaths {
    ProjectPaths::from_root(root.to_path_buf())
}

fn ids(engine: &ConceptEngine, tags: &[&str]) -> Vec<EntryId> {
    engine.filter(tags).iter().map(|e| e.id.clone()).collect()
}

fn set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_load_from_default_location() {
    let dir = project(FEED);
    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();

    let report = engine.report().unwrap();
    assert_eq!(report.records_read, 5);
    assert_eq!(report.entries_loaded, 3);
    assert_eq!(report.warnings.len(), 2);
    assert!(matches!(report.warnings[0], LoadWarning::MalformedRecord { position: 3, .. }));
    assert!(matches!(
        report.warnings[1],
        LoadWarning::DuplicateId {
            policy: DuplicatePolicy::LastWins,
            ..
        }
    ));

    let revised = engine.catalog().get(&EntryId::from(2)).unwrap();
    assert_eq!(revised.title(), Some("Factoring trinomials (revised)"));
}

#[test]
fn test_filter_against_loaded_catalog() {
    let dir = project(FEED);
    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();

    assert_eq!(ids(&engine, &[]), vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(ids(&engine, &["ALGEBRA"]), vec![1.into(), 3.into()]);
    assert_eq!(ids(&engine, &["algebra", "quadratics"]), vec![1.into(), 3.into()]);
    assert_eq!(ids(&engine, &["linear equations", "factoring"]), vec![2.into(), 3.into()]);
    assert!(ids(&engine, &["calculus"]).is_empty());
    assert!(ids(&engine, &[" "]).is_empty());
}

#[test]
fn test_display_fields_pass_through() {
    let dir = project(FEED);
    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();

    let json = serde_json::to_value(engine.filter(["quadratics"])).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": 1,
            "title": "Quadratic basics",
            "body": "Standard form and roots",
            "tags": ["Quadratics", "Algebra"]
        }])
    );
}

#[test]
fn test_extract_with_default_vocabulary() {
    let dir = project(FEED);
    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();

    let tags = engine.extract("What happens to the graph of this quadratic if we change the vertex?");
    assert!(tags.contains("quadratic"));
    assert!(tags.contains("graph"));
    assert!(tags.contains("vertex"));
    assert!(tags.contains("Quadratics"));
    assert!(!tags.contains("Factoring"));

    let tags = engine.extract("Can you write it as a linear equation?");
    assert!(tags.contains("linear equation"));
    assert!(tags.contains("equation"));
    assert!(tags.contains("Linear Equations"));

    // Tags found in a response feed straight back into retrieval
    let tags = engine.extract("Try factoring first.");
    assert_eq!(ids(&engine, &tags.iter().map(String::as_str).collect::<Vec<_>>()), vec![2.into()]);
}

#[test]
fn test_config_overrides_vocabulary_and_policies() {
    let dir = project(FEED);
    let mut config = Config::default();
    config.catalog.duplicates = DuplicatePolicy::KeepFirst;
    config.extraction.keywords = Some(vec!["Quadratic".to_string(), "factoring".to_string()]);
    config.save(dir.path()).unwrap();
    assert!(dir.path().join(CONFIG_FILE).exists());

    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();
    assert_eq!(engine.vocabulary().keywords(), &["quadratic", "factoring"]);

    let kept = engine.catalog().get(&EntryId::from(2)).unwrap();
    assert_eq!(kept.title(), Some("Factoring trinomials"));

    assert_eq!(
        engine.extract("Let's solve this quadratic equation"),
        set(&["quadratic", "Quadratics"])
    );
}

#[test]
fn test_reject_policies_fail_the_load() {
    let dir = project(FEED);
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{"catalog": {"malformed": "reject"}}"#,
    )
    .unwrap();

    let err = ConceptEngine::load(&paths(dir.path())).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRecord { position: 3, .. }));

    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{"catalog": {"duplicates": "reject"}}"#,
    )
    .unwrap();
    let err = ConceptEngine::load(&paths(dir.path())).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(EntryId::Number(2))));
}

#[test]
fn test_missing_catalog_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let engine = ConceptEngine::load(&paths(dir.path())).unwrap();

    assert!(engine.catalog().is_empty());
    assert!(engine.report().unwrap().source_missing());
    assert!(engine.filter(Vec::<&str>::new()).is_empty());
    assert_eq!(engine.extract("Factor the polynomial"), set(&["polynomial"]));
}

#[test]
fn test_catalog_override_directory() {
    let dir = TempDir::new().unwrap();
    let feed = dir.path().join("content");
    fs::create_dir_all(feed.join("units")).unwrap();
    fs::write(
        feed.join("00-intro.yaml"),
        "- id: intro\n  title: Welcome\n  tags: [Algebra]\n",
    )
    .unwrap();
    fs::write(
        feed.join("units/quadratics.json"),
        r#"{"entries": [{"id": "q1", "title": "Roots", "tags": ["Quadratics"]}]}"#,
    )
    .unwrap();

    let paths = paths(dir.path()).with_catalog(PathBuf::from("content"));
    let engine = ConceptEngine::load(&paths).unwrap();

    let all: Vec<String> = engine
        .filter(Vec::<&str>::new())
        .iter()
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(all, vec!["intro", "q1"]);
    assert_eq!(engine.report().unwrap().files, 2);
}
