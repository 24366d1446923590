//! Terminal-aware table rendering of boards and replay reports.

use crate::script::StepReport;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use taskboard::BoardSnapshot;

/// Width used when stdout is not a terminal
const FALLBACK_WIDTH: u16 = 120;

/// Longest title shown before truncation
const MAX_TITLE: usize = 48;

/// Create a table pre-configured for terminal-width-aware output.
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if table.width().is_none() {
        table.set_width(FALLBACK_WIDTH);
    }
    table
}

/// Shorten a card title to at most `max` characters, ending in "..." when cut.
///
/// Cuts on character boundaries and drops whitespace left dangling before the
/// marker.
pub fn clip_title(title: &str, max: usize) -> String {
    if title.char_indices().nth(max).is_none() {
        return title.to_string();
    }
    let keep = max.saturating_sub(3);
    let end = title
        .char_indices()
        .nth(keep)
        .map_or(title.len(), |(offset, _)| offset);
    format!("{}...", title[..end].trim_end())
}

/// One row per card; empty lists get a placeholder row
pub fn board_table(snapshot: &BoardSnapshot) -> Table {
    let mut table = new_table();
    table.set_header(vec!["List", "Color", "#", "Id", "Title"]);

    for list in &snapshot.lists {
        let heading = format!("{} ({})", list.title, list.item_count);
        if list.items.is_empty() {
            table.add_row(vec![
                Cell::new(&heading),
                Cell::new(list.color.as_str()),
                Cell::new(""),
                Cell::new(""),
                Cell::new("(empty)"),
            ]);
            continue;
        }
        for (position, item) in list.items.iter().enumerate() {
            let (name, color) = if position == 0 {
                (heading.as_str(), list.color.as_str())
            } else {
                ("", "")
            };
            table.add_row(vec![
                Cell::new(name),
                Cell::new(color),
                Cell::new(position),
                Cell::new(item.id.as_str()),
                Cell::new(clip_title(&item.title, MAX_TITLE)),
            ]);
        }
    }
    table
}

/// One row per replayed step
pub fn report_table(reports: &[StepReport]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Step", "Event", "Result", "Changed"]);
    for report in reports {
        table.add_row(vec![
            Cell::new(report.step),
            Cell::new(&report.label),
            Cell::new(report.result.summary()),
            Cell::new(if report.changed { "yes" } else { "" }),
        ]);
    }
    table
}
