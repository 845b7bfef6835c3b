use super::*;
use crate::fixtures::{rider, rider_classification, sample_store, team};
use crate::model::Row;

#[test]
fn test_builtin_dataset_loads_in_tab_order() {
    let store = ClassificationStore::builtin().unwrap();
    let keys: Vec<&str> = store.keys().collect();
    assert_eq!(
        keys,
        vec![
            "General", "Etapa 1", "Etapa 2", "Etapa 3", "Etapa 4", "Etapa 5", "Puntos",
            "Equipos"
        ]
    );
    assert_eq!(store.first_key(), Some("General"));
    assert_eq!(store.get("Equipos").unwrap().kind, ClassificationKind::Team);
}

#[test]
fn test_builtin_dataset_keeps_placeholder_positions() {
    let store = ClassificationStore::builtin().unwrap();
    let general = store.get("General").unwrap();
    let dnf = general
        .rows
        .iter()
        .filter_map(Row::as_rider)
        .filter(|r| r.position.number().is_none())
        .count();
    assert!(dnf >= 1);
}

#[test]
fn test_insertion_order_preserved() {
    let store = sample_store();
    let keys: Vec<&str> = store.keys().collect();
    assert_eq!(keys, vec!["General", "Etapa 1", "Equipos", "Etapa 2"]);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_duplicate_key_rejected() {
    let err = ClassificationStore::from_classifications(vec![
        rider_classification("General", vec![]),
        rider_classification("General", vec![]),
    ])
    .unwrap_err();
    assert!(matches!(err, BrowserError::DuplicateKey(k) if k == "General"));
}

#[test]
fn test_kind_mismatch_rejected() {
    let mut c = rider_classification("General", vec![rider(1, 7, "HON", "A", "X")]);
    c.rows.push(Row::Team(team(1, "X", "01:00:00")));
    let err = ClassificationStore::from_classifications(vec![c]).unwrap_err();
    assert!(matches!(err, BrowserError::KindMismatch { row: 1, .. }));
}

#[test]
fn test_from_json_decodes_rows_by_kind() {
    let json = r#"{"classifications": [
        {"key": "General", "title": "G", "kind": "rider", "columns": ["Puesto"],
         "rows": [{"puesto": "DNF", "dorsal": 7, "pais": "HON", "nombre": "A", "equipo": "X"}]},
        {"key": "Equipos", "title": "E", "kind": "team", "columns": ["Puesto"],
         "rows": [{"puesto": 1, "equipo": "X", "tiempo": "01:00:00"}]}
    ]}"#;
    let store = ClassificationStore::from_json(json).unwrap();
    let general = store.get("General").unwrap();
    let r = general.rows[0].as_rider().unwrap();
    assert_eq!(r.position.to_string(), "DNF");
    assert!(r.bib.is_number(7));
    assert!(matches!(store.get("Equipos").unwrap().rows[0], Row::Team(_)));
}

#[test]
fn test_from_json_reports_bad_row() {
    let json = r#"{"classifications": [
        {"key": "Equipos", "title": "E", "kind": "team", "columns": [],
         "rows": [{"puesto": 1, "equipo": "X"}]}
    ]}"#;
    let err = ClassificationStore::from_json(json).unwrap_err();
    assert!(matches!(err, BrowserError::Row { ref key, row: 0, .. } if key == "Equipos"));
}

#[test]
fn test_unknown_classification() {
    let store = sample_store();
    assert!(store.get("Etapa 9").is_none());
    assert!(matches!(
        store.require("Etapa 9"),
        Err(BrowserError::UnknownClassification(_))
    ));
}
