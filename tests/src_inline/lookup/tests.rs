use super::*;
use crate::fixtures::{rider, rider_classification, sample_store, team, team_classification};
use crate::model::Placing;

#[test]
fn test_identity_from_first_classification() {
    let store = sample_store();
    let found = find_rider(&store, "7").unwrap();
    assert_eq!(found.identity.name, "Luis Lopez");
    let keys: Vec<&str> = found.classification_keys().collect();
    assert_eq!(keys, vec!["General", "Etapa 2"]);
    assert_eq!(found.result_for("Etapa 2").unwrap().name, "Luis López");
    assert!(found.result_for("Etapa 1").is_none());
}

#[test]
fn test_input_is_trimmed() {
    let store = sample_store();
    assert!(find_rider(&store, "  7 ").is_some());
}

#[test]
fn test_non_numeric_and_empty_not_found() {
    let store = sample_store();
    assert!(find_rider(&store, "abc").is_none());
    assert!(find_rider(&store, "").is_none());
    assert!(find_rider(&store, "   ").is_none());
    assert!(find_rider(&store, "-7").is_none());
}

#[test]
fn test_unknown_bib_not_found() {
    let store = sample_store();
    assert!(find_rider(&store, "9999").is_none());
}

#[test]
fn test_marker_bib_never_matches() {
    let mut r = rider(1, 0, "HON", "Placeholder", "X");
    r.bib = Placing::Marker("7".to_string());
    let store = ClassificationStore::from_classifications(vec![rider_classification(
        "General",
        vec![r],
    )])
    .unwrap();
    assert!(find_rider(&store, "7").is_none());
}

#[test]
fn test_team_classifications_skipped() {
    let store = ClassificationStore::from_classifications(vec![
        team_classification("Equipos", vec![team(7, "X", "01:00:00")]),
        rider_classification("Etapa 1", vec![rider(2, 7, "GUA", "Mario", "X")]),
    ])
    .unwrap();
    let found = find_rider(&store, "7").unwrap();
    assert_eq!(found.identity.country_code, "GUA");
    assert_eq!(found.per_classification.len(), 1);
}

#[test]
fn test_parse_bib_reads_leading_digits() {
    assert_eq!(parse_bib(" 12 "), Some(12));
    assert_eq!(parse_bib("12a"), Some(12));
    assert_eq!(parse_bib("7.0"), Some(7));
    assert_eq!(parse_bib("+7"), Some(7));
    assert_eq!(parse_bib(""), None);
    assert_eq!(parse_bib("abc"), None);
    assert_eq!(parse_bib("a12"), None);
    assert_eq!(parse_bib("-7"), None);
    assert_eq!(parse_bib("99999999999"), None);
}

#[test]
fn test_trailing_text_after_bib_still_matches() {
    let store = sample_store();
    assert_eq!(find_rider(&store, "7a").unwrap().identity.name, "Luis Lopez");
    assert_eq!(find_rider(&store, "7.0").unwrap().identity.name, "Luis Lopez");
    assert!(find_rider(&store, "x7").is_none());
}

#[test]
fn test_builtin_bib_with_trailing_text() {
    let store = ClassificationStore::builtin().unwrap();
    let found = find_rider(&store, "1a").unwrap();
    assert_eq!(found.identity.name, "Luis López");
    assert_eq!(
        found.classification_keys().next(),
        Some("General")
    );
}
