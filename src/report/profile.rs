use serde::Serialize;

use crate::lookup::RiderLookup;
use crate::model::{Placing, RiderRow};
use crate::report::flags::flag_for;

/// Classifications shown in a rider profile, in display order.
pub const STAGE_ORDER: &[&str] = &[
    "General", "Etapa 1", "Etapa 2", "Etapa 3", "Etapa 4", "Etapa 5",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome<'a> {
    Finished {
        position: &'a Placing,
        time: Option<&'a str>,
        avg_speed: Option<&'a str>,
    },
    DidNotParticipate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileLine<'a> {
    pub key: &'a str,
    #[serde(flatten)]
    pub outcome: StageOutcome<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary<'a> {
    pub identity: &'a RiderRow,
    pub flag: &'static str,
    pub lines: Vec<ProfileLine<'a>>,
}

pub fn summarize_profile<'a>(lookup: &RiderLookup<'a>) -> ProfileSummary<'a> {
    summarize_profile_with(STAGE_ORDER, lookup)
}

pub fn summarize_profile_with<'a>(
    order: &[&'a str],
    lookup: &RiderLookup<'a>,
) -> ProfileSummary<'a> {
    let lines = order
        .iter()
        .map(|&key| {
            let outcome = match lookup.result_for(key) {
                Some(row) => StageOutcome::Finished {
                    position: &row.position,
                    time: row.time.as_deref(),
                    avg_speed: row.avg_speed.as_deref(),
                },
                None => StageOutcome::DidNotParticipate,
            };
            ProfileLine { key, outcome }
        })
        .collect();

    ProfileSummary {
        identity: lookup.identity,
        flag: flag_for(&lookup.identity.country_code),
        lines,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/profile.rs"]
mod tests;
