use crate::model::{ClassificationKind, RiderRow};
use crate::store::ClassificationStore;

/// A rider found across the store: one canonical identity row plus every
/// matching row keyed by classification, in store order.
#[derive(Debug, Clone)]
pub struct RiderLookup<'a> {
    pub identity: &'a RiderRow,
    pub per_classification: Vec<(&'a str, &'a RiderRow)>,
}

impl<'a> RiderLookup<'a> {
    pub fn result_for(&self, key: &str) -> Option<&'a RiderRow> {
        self.per_classification
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, row)| *row)
    }

    pub fn classification_keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.per_classification.iter().map(|(k, _)| *k)
    }
}

/// Reads the leading decimal digits of a trimmed query, after an optional
/// `+`. Trailing text is ignored, so `"12a"` and `"7.0"` parse as 12 and 7.
pub fn parse_bib(input: &str) -> Option<u32> {
    let s = input.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    s[..end].parse::<u32>().ok()
}

pub fn find_rider<'a>(store: &'a ClassificationStore, bib: &str) -> Option<RiderLookup<'a>> {
    let Some(bib) = parse_bib(bib) else {
        tracing::debug!(query = bib, "bib query is not a number");
        return None;
    };

    let mut identity = None;
    let mut per_classification = Vec::new();
    for classification in store.iter() {
        if classification.kind != ClassificationKind::Rider {
            continue;
        }
        let found = classification
            .rows
            .iter()
            .filter_map(|row| row.as_rider())
            .find(|r| r.bib.is_number(bib));
        if let Some(row) = found {
            identity.get_or_insert(row);
            per_classification.push((classification.key.as_str(), row));
        }
    }

    let identity = identity?;
    let lookup = RiderLookup {
        identity,
        per_classification,
    };
    tracing::debug!(
        bib,
        rider = %lookup.identity.name,
        classifications = ?lookup.classification_keys().collect::<Vec<_>>(),
        "rider found"
    );
    Some(lookup)
}

#[cfg(test)]
#[path = "../../tests/src_inline/lookup/tests.rs"]
mod tests;
