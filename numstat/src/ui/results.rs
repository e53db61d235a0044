//! Rendering of a finished calculation for plain terminal output.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use numstat_core::Calculation;
use serde::Serialize;

use crate::ui::alert::AlertKind;
use crate::ui::theme::{theme_color, ThemeEntry, ThemeMap};

/// Labelled result rows in display order.
pub fn result_rows(calc: &Calculation) -> Vec<(&'static str, String)> {
    let record = &calc.record;
    vec![
        ("Mean", record.mean.clone()),
        ("Std. Deviation", record.std_dev.clone()),
        ("Count", record.count.to_string()),
        ("Invalid", calc.invalid_count.to_string()),
        ("Min", record.min.clone()),
        ("Max", record.max.clone()),
        ("Range", record.range.clone()),
    ]
}

/// Builds the results table. Styling is dropped when `supports_color` is false.
pub fn build_results_table(calc: &Calculation, theme_map: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            styled_cell("Statistic", ThemeEntry::Header, theme_map),
            styled_cell("Value", ThemeEntry::Header, theme_map),
        ]);

    if !supports_color {
        table.force_no_tty();
    }

    for (label, value) in result_rows(calc) {
        table.add_row(vec![
            styled_cell(label, ThemeEntry::StatLabel, theme_map),
            styled_cell(&value, ThemeEntry::StatValue, theme_map),
        ]);
    }
    table
}

fn styled_cell(text: &str, entry: ThemeEntry, theme_map: &ThemeMap) -> Cell {
    let cell = Cell::new(text);
    match theme_color(theme_map, entry) {
        Some(color) => cell.fg(color.to_table_color()),
        None => cell,
    }
}

/// Machine-readable form of a calculation for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub calculation: &'a Calculation,
    pub status: AlertKind,
}

impl<'a> JsonReport<'a> {
    pub fn new(calculation: &'a Calculation, status: AlertKind) -> Self {
        Self { calculation, status }
    }
}
