use serde::Serialize;

use crate::filter::Facets;
use crate::model::{Classification, ClassificationKind, Row};
use crate::report::profile::ProfileSummary;
use crate::store::ClassificationStore;

#[derive(Serialize)]
struct TableView<'a> {
    key: &'a str,
    title: &'a str,
    kind: ClassificationKind,
    columns: &'a [String],
    total: usize,
    rows: &'a [&'a Row],
}

#[derive(Serialize)]
struct ListEntry<'a> {
    key: &'a str,
    title: &'a str,
    kind: ClassificationKind,
    rows: usize,
}

#[derive(Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
enum ProfileView<'a> {
    Found {
        #[serde(flatten)]
        summary: &'a ProfileSummary<'a>,
    },
    NotFound {
        query: &'a str,
    },
}

pub fn render_list_json(store: &ClassificationStore) -> serde_json::Result<String> {
    let entries: Vec<ListEntry<'_>> = store
        .iter()
        .map(|c| ListEntry {
            key: &c.key,
            title: &c.title,
            kind: c.kind,
            rows: c.rows.len(),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

pub fn render_table_json(
    classification: &Classification,
    rows: &[&Row],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TableView {
        key: &classification.key,
        title: &classification.title,
        kind: classification.kind,
        columns: &classification.columns,
        total: classification.rows.len(),
        rows,
    })
}

pub fn render_facets_json(facets: &Facets) -> serde_json::Result<String> {
    serde_json::to_string_pretty(facets)
}

pub fn render_profile_json(
    query: &str,
    summary: Option<&ProfileSummary<'_>>,
) -> serde_json::Result<String> {
    let view = match summary {
        Some(summary) => ProfileView::Found { summary },
        None => ProfileView::NotFound { query },
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
