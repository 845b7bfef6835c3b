use std::fmt;

use serde::{Deserialize, Serialize};

/// A rank or bib that is either a number or a non-numeric marker such as
/// `"DNF"` for riders who did not finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placing {
    Rank(u32),
    Marker(String),
}

impl Placing {
    pub fn number(&self) -> Option<u32> {
        match self {
            Placing::Rank(n) => Some(*n),
            Placing::Marker(_) => None,
        }
    }

    pub fn is_number(&self, value: u32) -> bool {
        self.number() == Some(value)
    }
}

impl fmt::Display for Placing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placing::Rank(n) => write!(f, "{n}"),
            Placing::Marker(m) => f.write_str(m),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderRow {
    #[serde(rename = "puesto")]
    pub position: Placing,
    #[serde(rename = "dorsal")]
    pub bib: Placing,
    #[serde(rename = "pais")]
    pub country_code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "equipo")]
    pub team: String,
    #[serde(rename = "tiempo", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "velProm", default, skip_serializing_if = "Option::is_none")]
    pub avg_speed: Option<String>,
    #[serde(rename = "puntos", default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(rename = "dif", default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "puesto")]
    pub position: u32,
    #[serde(rename = "equipo")]
    pub team: String,
    #[serde(rename = "tiempo")]
    pub time: String,
    #[serde(rename = "dif", default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Rider(RiderRow),
    Team(TeamRow),
}

impl Row {
    pub fn team(&self) -> &str {
        match self {
            Row::Rider(r) => &r.team,
            Row::Team(t) => &t.team,
        }
    }

    pub fn as_rider(&self) -> Option<&RiderRow> {
        match self {
            Row::Rider(r) => Some(r),
            Row::Team(_) => None,
        }
    }

    pub fn is_leader(&self) -> bool {
        match self {
            Row::Rider(r) => r.position.is_number(1),
            Row::Team(t) => t.position == 1,
        }
    }
}
