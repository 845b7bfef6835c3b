use serde::{Deserialize, Serialize};

use crate::model::rows::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationKind {
    Rider,
    Team,
}

impl ClassificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationKind::Rider => "rider",
            ClassificationKind::Team => "team",
        }
    }

    pub fn matches(self, row: &Row) -> bool {
        matches!(
            (self, row),
            (ClassificationKind::Rider, Row::Rider(_)) | (ClassificationKind::Team, Row::Team(_))
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub key: String,
    pub title: String,
    pub kind: ClassificationKind,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Row field a display header reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Position,
    Bib,
    Name,
    Team,
    Category,
    Time,
    AvgSpeed,
    Points,
    Gap,
}

impl Column {
    pub fn from_header(header: &str) -> Option<Column> {
        let normalized = header.trim().to_lowercase();
        let column = match normalized.as_str() {
            "puesto" | "pos." | "pos" | "position" => Column::Position,
            "dorsal" | "bib" => Column::Bib,
            "ciclista" | "nombre" | "rider" | "name" => Column::Name,
            "equipo" | "team" => Column::Team,
            "categoría" | "categoria" | "category" => Column::Category,
            "tiempo" | "time" => Column::Time,
            "vel. prom." | "avg. speed" | "average speed" => Column::AvgSpeed,
            "puntos" | "points" => Column::Points,
            "dif." | "gap" => Column::Gap,
            _ => return None,
        };
        Some(column)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/classification.rs"]
mod tests;
