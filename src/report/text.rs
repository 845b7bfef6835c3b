use crate::filter::Facets;
use crate::model::{Classification, ClassificationKind, Column, Row};
use crate::report::flags::flag_for;
use crate::report::profile::{ProfileSummary, StageOutcome};
use crate::report::{display_width, or_dash, pad_right};
use crate::store::ClassificationStore;

pub const NO_RESULTS: &str = "No results match the selected filters.";
pub const LEADER_MARK: &str = "* ";
const NO_MARK: &str = "  ";
pub const DID_NOT_PARTICIPATE: &str = "did not start or finish";

pub fn render_tabs<'a>(keys: impl Iterator<Item = &'a str>, active: &str) -> String {
    let mut parts = Vec::new();
    for key in keys {
        if key == active {
            parts.push(format!("[{key}]"));
        } else {
            parts.push(format!(" {key} "));
        }
    }
    parts.join(" ")
}

pub fn render_list(store: &ClassificationStore) -> String {
    let width = store.keys().map(display_width).max().unwrap_or(0);
    let mut out = String::new();
    for c in store.iter() {
        out.push_str(&format!(
            "{}  {:<5}  {} ({} rows)\n",
            pad_right(&c.key, width),
            c.kind.as_str(),
            c.title,
            c.rows.len()
        ));
    }
    out
}

pub fn render_table_text(classification: &Classification, rows: &[&Row]) -> String {
    let mut out = String::new();
    out.push_str(&classification.title);
    out.push('\n');
    out.push_str(&"=".repeat(display_width(&classification.title)));
    out.push('\n');

    let columns: Vec<Option<Column>> = classification
        .columns
        .iter()
        .map(|h| Column::from_header(h))
        .collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|&c| cell_value(row, c)).collect())
        .collect();

    let mut widths: Vec<usize> = classification
        .columns
        .iter()
        .map(|h| display_width(h))
        .collect();
    for line in &cells {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(display_width(cell));
        }
    }

    let header = classification.columns.iter().map(String::as_str);
    push_line(&mut out, NO_MARK, header, &widths);
    let rule = NO_MARK.len() + widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule));
    out.push('\n');
    for (row, line) in rows.iter().zip(&cells) {
        let mark = if row.is_leader() { LEADER_MARK } else { NO_MARK };
        push_line(&mut out, mark, line.iter().map(String::as_str), &widths);
    }
    if rows.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    }
    out
}

fn push_line<'a>(
    out: &mut String,
    mark: &str,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| pad_right(cell, w))
        .collect();
    out.push_str(mark);
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

fn cell_value(row: &Row, column: Option<Column>) -> String {
    let Some(column) = column else {
        return String::new();
    };
    match row {
        Row::Rider(r) => match column {
            Column::Position => r.position.to_string(),
            Column::Bib => r.bib.to_string(),
            Column::Name => format!("{} {}", flag_for(&r.country_code), r.name),
            Column::Team => r.team.clone(),
            Column::Category => or_dash(r.category.as_deref()).to_string(),
            Column::Time => r.time.clone().unwrap_or_default(),
            Column::AvgSpeed => r.avg_speed.clone().unwrap_or_default(),
            Column::Points => r.points.map(|p| p.to_string()).unwrap_or_default(),
            Column::Gap => r.gap.clone().unwrap_or_default(),
        },
        Row::Team(t) => match column {
            Column::Position => t.position.to_string(),
            Column::Team => t.team.clone(),
            Column::Time => t.time.clone(),
            Column::Gap => t.gap.clone().unwrap_or_default(),
            _ => String::new(),
        },
    }
}

pub fn render_facets_text(facets: &Facets, kind: ClassificationKind) -> String {
    let mut out = String::new();
    out.push_str(&format!("Teams: {}\n", join_or_dash(&facets.teams)));
    if kind == ClassificationKind::Rider {
        if !facets.countries.is_empty() {
            out.push_str(&format!("Countries: {}\n", facets.countries.join(", ")));
        }
        if !facets.categories.is_empty() {
            out.push_str(&format!("Categories: {}\n", facets.categories.join(", ")));
        }
    }
    out
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        crate::report::EMPTY_CELL.to_string()
    } else {
        values.join(", ")
    }
}

pub fn render_profile_text(summary: &ProfileSummary<'_>) -> String {
    let rider = summary.identity;
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", summary.flag, rider.name));
    out.push_str(&format!("{}\n", rider.team));
    out.push_str(&format!("Bib: #{}\n\n", rider.bib));
    out.push_str("Results summary\n");

    let key_width = summary
        .lines
        .iter()
        .map(|l| display_width(l.key))
        .chain(std::iter::once(display_width("Classification")))
        .max()
        .unwrap_or(0);
    out.push_str(&format!(
        "{}  {:<8}  {:<12}  {}\n",
        pad_right("Classification", key_width),
        "Position",
        "Time",
        "Avg. speed"
    ));
    for line in &summary.lines {
        let key = pad_right(line.key, key_width);
        match &line.outcome {
            StageOutcome::Finished {
                position,
                time,
                avg_speed,
            } => out.push_str(&format!(
                "{}  {:<8}  {:<12}  {}\n",
                key,
                position.to_string(),
                or_dash(*time),
                or_dash(*avg_speed)
            )),
            StageOutcome::DidNotParticipate => {
                out.push_str(&format!("{key}  {DID_NOT_PARTICIPATE}\n"))
            }
        }
    }
    out
}

pub fn render_not_found(bib: &str) -> String {
    format!("Rider not found\nNo results found for bib #{bib}.\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
