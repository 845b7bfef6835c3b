use super::*;
use crate::fixtures::{rider, team};
use crate::model::{Placing, Row};

#[test]
fn test_column_from_spanish_and_english_headers() {
    assert_eq!(Column::from_header("Categoría"), Some(Column::Category));
    assert_eq!(Column::from_header("Vel. Prom."), Some(Column::AvgSpeed));
    assert_eq!(Column::from_header("dif."), Some(Column::Gap));
    assert_eq!(Column::from_header("Category"), Some(Column::Category));
    assert_eq!(Column::from_header("Bonus"), None);
}

#[test]
fn test_kind_matches_row_variant() {
    let r = Row::Rider(rider(1, 7, "HON", "A", "X"));
    let t = Row::Team(team(1, "X", "01:00:00"));
    assert!(ClassificationKind::Rider.matches(&r));
    assert!(!ClassificationKind::Rider.matches(&t));
    assert!(ClassificationKind::Team.matches(&t));
}

#[test]
fn test_placing_marker_is_not_a_number() {
    let dnf = Placing::Marker("DNF".to_string());
    assert_eq!(dnf.number(), None);
    assert!(!dnf.is_number(0));
    assert_eq!(dnf.to_string(), "DNF");
    assert!(Placing::Rank(7).is_number(7));
}

#[test]
fn test_placing_deserializes_number_or_marker() {
    let n: Placing = serde_json::from_str("12").unwrap();
    let m: Placing = serde_json::from_str("\"DNF\"").unwrap();
    assert_eq!(n, Placing::Rank(12));
    assert_eq!(m, Placing::Marker("DNF".to_string()));
}
