use std::io::{BufRead, Write};

use crate::filter::{Facets, TableFilter, derive_facets, filter_rows};
use crate::lookup::find_rider;
use crate::report::profile::summarize_profile;
use crate::report::text::{
    render_facets_text, render_not_found, render_profile_text, render_table_text, render_tabs,
};
use crate::store::ClassificationStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Tables,
    Profile(String),
}

/// Mutable view state over a read-only store. Facets are cached per active
/// tab and only recomputed when the tab changes.
#[derive(Debug, Clone)]
pub struct ViewState {
    active_tab: String,
    filter: TableFilter,
    facets: Facets,
    mode: ViewMode,
}

impl ViewState {
    pub fn new(store: &ClassificationStore) -> Self {
        let active_tab = store.first_key().unwrap_or_default().to_string();
        let facets = facets_for(store, &active_tab);
        Self {
            active_tab,
            filter: TableFilter::default(),
            facets,
            mode: ViewMode::Tables,
        }
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn filter(&self) -> &TableFilter {
        &self.filter
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Switches tabs, resetting filters. Returns false for unknown keys.
    pub fn select_tab(&mut self, store: &ClassificationStore, key: &str) -> bool {
        if store.get(key).is_none() {
            tracing::debug!(key, "ignoring unknown tab");
            return false;
        }
        if self.active_tab != key {
            self.active_tab = key.to_string();
            self.facets = facets_for(store, key);
            self.filter = TableFilter::default();
        }
        self.mode = ViewMode::Tables;
        tracing::debug!(tab = key, "tab selected");
        true
    }

    /// Enters profile mode for a bib. Blank input leaves the view unchanged.
    pub fn search(&mut self, input: &str) -> bool {
        let bib = input.trim();
        if bib.is_empty() {
            return false;
        }
        self.mode = ViewMode::Profile(bib.to_string());
        true
    }

    pub fn back(&mut self) {
        self.mode = ViewMode::Tables;
    }

    pub fn set_text(&mut self, value: &str) {
        self.filter.text = value.to_string();
    }

    pub fn set_team(&mut self, value: &str) {
        self.filter.team = value.to_string();
    }

    pub fn set_country(&mut self, value: &str) {
        self.filter.country = value.to_string();
    }

    pub fn set_category(&mut self, value: &str) {
        self.filter.category = value.to_string();
    }

    pub fn clear_filters(&mut self) {
        self.filter = TableFilter::default();
    }

    pub fn render(&self, store: &ClassificationStore) -> String {
        match self.mode() {
            ViewMode::Profile(bib) => match find_rider(store, bib) {
                Some(lookup) => render_profile_text(&summarize_profile(&lookup)),
                None => render_not_found(bib),
            },
            ViewMode::Tables => self.render_tables(store),
        }
    }

    fn render_tables(&self, store: &ClassificationStore) -> String {
        let mut out = render_tabs(store.keys(), &self.active_tab);
        out.push_str("\n\n");
        let Some(classification) = store.get(&self.active_tab) else {
            return out;
        };
        let filter = self.filter();
        let rows = filter_rows(&classification.rows, classification.kind, filter);
        tracing::debug!(
            tab = %self.active_tab,
            shown = rows.len(),
            total = classification.rows.len(),
            "table filtered"
        );
        out.push_str(&render_table_text(classification, &rows));
        if !filter.is_empty() {
            out.push_str(&format!("\nFilters: {}\n", describe_filter(filter)));
        }
        out
    }
}

fn facets_for(store: &ClassificationStore, key: &str) -> Facets {
    store
        .get(key)
        .map(|c| derive_facets(&c.rows, c.kind))
        .unwrap_or_default()
}

fn describe_filter(filter: &TableFilter) -> String {
    let mut parts = Vec::new();
    for (label, value) in [
        ("text", &filter.text),
        ("team", &filter.team),
        ("country", &filter.country),
        ("category", &filter.category),
    ] {
        if !value.is_empty() {
            parts.push(format!("{label}={value:?}"));
        }
    }
    parts.join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tabs,
    Tab(String),
    Find(String),
    Back,
    Text(String),
    Team(String),
    Country(String),
    Category(String),
    Clear,
    Facets,
    Help,
    Quit,
}

pub const NO_CLASSIFICATIONS: &str = "No classifications loaded.";

pub const HELP: &str = "\
commands:
  tabs                 list classifications
  tab <key>            switch classification
  find <bib>           show a rider profile
  back                 return to the tables
  text <value>         filter by rider or team name
  team <value>         filter by exact team
  country <code>       filter by exact country code
  category <value>     filter by exact category
  clear                drop all filters
  facets               show available filter values
  help                 show this help
  quit                 exit
";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let cmd = match word {
        "tabs" => Command::Tabs,
        "tab" if !rest.is_empty() => Command::Tab(rest.to_string()),
        "find" | "rider" => Command::Find(rest.to_string()),
        "back" => Command::Back,
        "text" | "search" => Command::Text(rest.to_string()),
        "team" => Command::Team(rest.to_string()),
        "country" => Command::Country(rest.to_string()),
        "category" => Command::Category(rest.to_string()),
        "clear" => Command::Clear,
        "facets" => Command::Facets,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "tab" => return Err("usage: tab <key>".to_string()),
        other => return Err(format!("unknown command: {other} (try help)")),
    };
    Ok(cmd)
}

pub fn run_interactive<R: BufRead, W: Write>(
    store: &ClassificationStore,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    if store.is_empty() {
        writeln!(output, "{NO_CLASSIFICATIONS}")?;
        return Ok(());
    }
    let mut view = ViewState::new(store);
    write!(output, "{}", view.render(store))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }
        let text = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => apply(&mut view, store, cmd),
            Err(msg) => format!("{msg}\n"),
        };
        write!(output, "{text}> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

fn apply(view: &mut ViewState, store: &ClassificationStore, cmd: Command) -> String {
    match cmd {
        Command::Tabs => crate::report::text::render_list(store),
        Command::Tab(key) => {
            if view.select_tab(store, &key) {
                view.render(store)
            } else {
                format!("unknown classification: {key}\n")
            }
        }
        Command::Find(bib) => {
            if view.search(&bib) {
                view.render(store)
            } else {
                "usage: find <bib>\n".to_string()
            }
        }
        Command::Back => {
            view.back();
            view.render(store)
        }
        Command::Text(v) => {
            view.set_text(&v);
            view.render(store)
        }
        Command::Team(v) => {
            view.set_team(&v);
            view.render(store)
        }
        Command::Country(v) => {
            view.set_country(&v);
            view.render(store)
        }
        Command::Category(v) => {
            view.set_category(&v);
            view.render(store)
        }
        Command::Clear => {
            view.clear_filters();
            view.render(store)
        }
        Command::Facets => {
            let kind = store
                .get(view.active_tab())
                .map(|c| c.kind)
                .unwrap_or(crate::model::ClassificationKind::Rider);
            render_facets_text(view.facets(), kind)
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/shell/tests.rs"]
mod tests;
