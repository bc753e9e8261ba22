use std::collections::BTreeSet;

use clap::ValueEnum;

use crate::calculation::projection::{ChartRow, TableRow, chart_rows, table_rows};
use crate::calculation::sorting::SortRule;
use crate::catalog::Catalog;
use crate::catalog::record::Tier;
use crate::prelude::*;

/// Which preset produced the current selection. This tracks the operation,
/// not the content: a toggle flips it to Custom even when the resulting set
/// happens to match a tier again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTab {
    All,
    Low,
    Mid,
    High,
    Custom,
    None,
}

impl From<Tier> for PriceTab {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Low => PriceTab::Low,
            Tier::Mid => PriceTab::Mid,
            Tier::High => PriceTab::High,
        }
    }
}

/// Which bars the chart renders. Presentation-only; the chart projection
/// always carries all four numbers and the renderer picks from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Both,
    Input,
    Output,
    Combined,
    Value,
}

/// The selected model names, behind an explicit loaded-or-not tag.
///
/// Before Initialize runs there is no sensible selection to report, and
/// pretending there is leads to two parallel read paths. So the tag is
/// explicit and every reader goes through `contains`, which answers false
/// until the store is ready.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    #[default]
    Uninitialized,
    Ready(BTreeSet<String>),
}

impl Selection {
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Selection::Uninitialized => false,
            Selection::Ready(names) => names.contains(name),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Uninitialized => 0,
            Selection::Ready(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Selection::Ready(_))
    }

    /// The set to mutate from. An uninitialized selection mutates as if
    /// empty, which also promotes it to Ready.
    fn into_set(self) -> BTreeSet<String> {
        match self {
            Selection::Uninitialized => BTreeSet::new(),
            Selection::Ready(names) => names,
        }
    }
}

/// Everything a renderer reads. One source of truth; the only writes go
/// through `reduce`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardState {
    pub selection: Selection,
    pub active_tab: PriceTab,
    pub sorting: Option<SortRule>,
    pub display_mode: DisplayMode,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState {
            selection: Selection::Uninitialized,
            active_tab: PriceTab::All,
            sorting: Some(SortRule::default()),
            display_mode: DisplayMode::Both,
        }
    }
}

/// Every way the board state can change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Runs once after the catalog loads: default selection in, tab All.
    Initialize,
    /// Flip one model in or out. Always lands on the Custom tab.
    Toggle(String),
    SelectAll,
    DeselectAll,
    /// Replace the selection with a price tier's membership.
    SelectTier(Tier),
    SetSort(Option<SortRule>),
    SetDisplayMode(DisplayMode),
}

/// The update contract: old state + action -> new state, nothing else.
///
/// The catalog rides along as a borrowed environment because it is fixed
/// for the whole session; it is input to tier and select-all recomputation,
/// never output.
pub fn reduce(catalog: &Catalog, state: BoardState, action: Action) -> BoardState {
    match action {
        Action::Initialize => BoardState {
            selection: Selection::Ready(catalog.default_selection()),
            active_tab: PriceTab::All,
            ..state
        },

        Action::Toggle(name) => {
            let mut names = state.selection.into_set();
            if !names.remove(&name) {
                names.insert(name);
            }

            BoardState {
                selection: Selection::Ready(names),
                // Unconditional. Even if the set now matches a tier
                // exactly, the user got there by hand.
                active_tab: PriceTab::Custom,
                ..state
            }
        }

        Action::SelectAll => BoardState {
            selection: Selection::Ready(catalog.all_names()),
            active_tab: PriceTab::All,
            ..state
        },

        Action::DeselectAll => BoardState {
            selection: Selection::Ready(BTreeSet::new()),
            active_tab: PriceTab::None,
            ..state
        },

        Action::SelectTier(tier) => BoardState {
            selection: Selection::Ready(catalog.tier_members(tier)),
            active_tab: tier.into(),
            ..state
        },

        Action::SetSort(rule) => BoardState {
            sorting: rule,
            ..state
        },

        Action::SetDisplayMode(mode) => BoardState {
            display_mode: mode,
            ..state
        },
    }
}

/// The store: owns the load-time-fixed catalog plus the session state,
/// and is handed to renderers instead of any ambient global.
#[derive(Debug)]
pub struct BoardStore {
    catalog: Catalog,
    state: BoardState,
}

impl BoardStore {
    /// Builds the store and immediately runs Initialize, so callers get
    /// a Ready selection from the first read.
    pub fn new(catalog: Catalog) -> Self {
        let mut store = BoardStore {
            catalog,
            state: BoardState::default(),
        };
        store.dispatch(Action::Initialize);

        store
    }

    pub fn dispatch(&mut self, action: Action) {
        // std::mem::take hands the old state to the pure reducer without
        // cloning the selection set.
        let state = std::mem::take(&mut self.state);
        self.state = reduce(&self.catalog, state, action);
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Chart projection of the current state. Recomputed on every call;
    /// cached copies go stale the moment an action lands.
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        chart_rows(&self.catalog, &self.state)
    }

    /// Table projection of the current state.
    pub fn table_rows(&self) -> Vec<TableRow> {
        table_rows(&self.catalog, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::labs::LabDirectory;
    use crate::io::csv_rows::RawRow;

    fn row(name: &str, input: &str, selected: Option<&str>) -> RawRow {
        let mut row: RawRow = [
            ("Name".to_owned(), name.to_owned()),
            ("Input".to_owned(), input.to_owned()),
            ("Output".to_owned(), "$1".to_owned()),
            ("Lab".to_owned(), "x".to_owned()),
        ]
        .into_iter()
        .collect();

        if let Some(flag) = selected {
            row.insert("Selected".to_owned(), flag.to_owned());
        }

        row
    }

    fn store() -> BoardStore {
        let catalog = Catalog::from_rows(
            vec![
                row("cheap", "$0.50", None),
                row("mid", "$2.00", None),
                row("pricey", "$12.00", None),
                row("benched", "$3.00", Some("no")),
            ],
            &LabDirectory::default(),
        );

        BoardStore::new(catalog)
    }

    #[test]
    fn initialize_honors_the_selected_column() {
        let store = store();

        assert!(store.state().selection.is_ready());
        assert_eq!(store.state().selection.len(), 3);
        assert!(!store.state().selection.contains("benched"));
        assert_eq!(store.state().active_tab, PriceTab::All);
    }

    #[test]
    fn select_all_covers_the_whole_catalog() {
        let mut store = store();

        store.dispatch(Action::SelectAll);

        assert_eq!(store.state().selection.len(), store.catalog().len());
        assert_eq!(store.state().active_tab, PriceTab::All);
    }

    #[test]
    fn deselect_all_empties_and_lands_on_none() {
        let mut store = store();

        store.dispatch(Action::DeselectAll);

        assert!(store.state().selection.is_empty());
        assert_eq!(store.state().active_tab, PriceTab::None);
    }

    #[test]
    fn double_toggle_restores_membership_but_not_the_tab() {
        let mut store = store();
        let before = store.state().selection.clone();

        store.dispatch(Action::Toggle("mid".to_owned()));
        assert_eq!(store.state().active_tab, PriceTab::Custom);
        assert!(!store.state().selection.contains("mid"));

        store.dispatch(Action::Toggle("mid".to_owned()));
        assert_eq!(store.state().active_tab, PriceTab::Custom);
        assert_eq!(store.state().selection, before);
    }

    #[test]
    fn tier_selection_recomputes_from_input_prices() {
        let mut store = store();

        store.dispatch(Action::SelectTier(Tier::Low));
        assert_eq!(store.state().active_tab, PriceTab::Low);
        assert_eq!(store.state().selection.len(), 1);
        assert!(store.state().selection.contains("cheap"));

        store.dispatch(Action::SelectTier(Tier::Mid));
        assert!(store.state().selection.contains("mid"));
        assert!(store.state().selection.contains("benched"));

        store.dispatch(Action::SelectTier(Tier::High));
        assert_eq!(store.state().selection.len(), 1);
        assert!(store.state().selection.contains("pricey"));
    }

    #[test]
    fn toggle_promotes_an_uninitialized_selection() {
        let catalog = Catalog::from_rows(
            vec![row("only", "$1", None)],
            &LabDirectory::default(),
        );
        let state = BoardState::default();
        assert!(!state.selection.is_ready());

        let state = reduce(&catalog, state, Action::Toggle("only".to_owned()));

        assert!(state.selection.is_ready());
        assert!(state.selection.contains("only"));
        assert_eq!(state.active_tab, PriceTab::Custom);
    }

    #[test]
    fn sort_and_display_mode_pass_through() {
        let mut store = store();

        store.dispatch(Action::SetSort(None));
        assert_eq!(store.state().sorting, None);

        store.dispatch(Action::SetDisplayMode(DisplayMode::Value));
        assert_eq!(store.state().display_mode, DisplayMode::Value);
    }
}
