use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{ClassificationKind, Row};

/// Active table filters. Empty strings leave their dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub text: String,
    pub team: String,
    pub country: String,
    pub category: String,
}

impl TableFilter {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.team.is_empty()
            && self.country.is_empty()
            && self.category.is_empty()
    }
}

/// Distinct filter values available in a classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub teams: Vec<String>,
    pub countries: Vec<String>,
    pub categories: Vec<String>,
}

pub fn derive_facets(rows: &[Row], kind: ClassificationKind) -> Facets {
    let mut teams = BTreeSet::new();
    let mut countries = BTreeSet::new();
    let mut categories = BTreeSet::new();

    for row in rows {
        teams.insert(row.team());
        if kind != ClassificationKind::Rider {
            continue;
        }
        if let Row::Rider(r) = row {
            countries.insert(r.country_code.as_str());
            if let Some(cat) = r.category.as_deref() {
                categories.insert(cat);
            }
        }
    }

    Facets {
        teams: teams.into_iter().map(str::to_string).collect(),
        countries: countries.into_iter().map(str::to_string).collect(),
        categories: categories.into_iter().map(str::to_string).collect(),
    }
}

pub fn filter_rows<'a>(
    rows: &'a [Row],
    kind: ClassificationKind,
    filter: &TableFilter,
) -> Vec<&'a Row> {
    let needle = filter.text.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, kind, filter, &needle))
        .collect()
}

fn row_matches(row: &Row, kind: ClassificationKind, filter: &TableFilter, needle: &str) -> bool {
    if !filter.team.is_empty() && row.team() != filter.team {
        return false;
    }
    match (kind, row) {
        (ClassificationKind::Rider, Row::Rider(r)) => {
            let country_ok = filter.country.is_empty() || r.country_code == filter.country;
            let category_ok = filter.category.is_empty()
                || r.category.as_deref() == Some(filter.category.as_str());
            r.name.to_lowercase().contains(needle) && country_ok && category_ok
        }
        _ => row.team().to_lowercase().contains(needle),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/filter/tests.rs"]
mod tests;
