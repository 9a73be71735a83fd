//! Terminal rendering.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use averia_model::{BreakdownEntry, ColumnHint, Dashboard, ResolvedColumns};

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: u64) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn notice(out: &mut String, section: &str, missing: &str) {
    let _ = writeln!(out, "{section}: unavailable ({missing} column not resolved)");
    out.push('\n');
}

fn section_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
}

fn breakdown_table(out: &mut String, title: &str, label_header: &str, entries: &[BreakdownEntry]) {
    section_title(out, title);
    let mut table = Table::new();
    table.set_header(vec![header_cell(label_header), header_cell("Incidents")]);
    apply_table_style(&mut table);
    for entry in entries {
        let label = if entry.label.is_empty() {
            "(blank)".to_string()
        } else {
            entry.label.clone()
        };
        table.add_row(vec![Cell::new(label), count_cell(entry.count)]);
    }
    let _ = writeln!(out, "{table}");
    out.push('\n');
}

/// Renders the full dashboard as terminal tables.
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    section_title(&mut out, "Key indicators");
    let mut kpis = Table::new();
    kpis.set_header(vec![
        header_cell("Closed"),
        header_cell("Repeated"),
        header_cell("Repeat %"),
    ]);
    apply_table_style(&mut kpis);
    kpis.add_row(vec![
        count_cell(dashboard.kpis.total_closed),
        count_cell(dashboard.kpis.total_repeated),
        Cell::new(dashboard.kpis.percentage_display()).set_alignment(CellAlignment::Right),
    ]);
    let _ = writeln!(out, "{kpis}");
    out.push('\n');

    match &dashboard.monthly_trend {
        Some(points) => {
            section_title(&mut out, "Monthly trend");
            let mut table = Table::new();
            table.set_header(vec![header_cell("Month"), header_cell("Incidents")]);
            apply_table_style(&mut table);
            for point in points {
                table.add_row(vec![Cell::new(&point.period), count_cell(point.count)]);
            }
            let _ = writeln!(out, "{table}");
            out.push('\n');
        }
        None => notice(&mut out, "Monthly trend", "date"),
    }

    match &dashboard.district_breakdown {
        Some(entries) => breakdown_table(&mut out, "Top districts", "District", entries),
        None => notice(&mut out, "Top districts", "district"),
    }
    match &dashboard.sector_breakdown {
        Some(entries) => breakdown_table(&mut out, "Top sectors", "Sector", entries),
        None => notice(&mut out, "Top sectors", "sector"),
    }

    match &dashboard.repeat_split {
        Some(split) => {
            section_title(&mut out, "Repeated vs non-repeated");
            let mut table = Table::new();
            table.set_header(vec![header_cell("Repeated"), header_cell("Not repeated")]);
            apply_table_style(&mut table);
            table.add_row(vec![count_cell(split.repeated), count_cell(split.not_repeated)]);
            let _ = writeln!(out, "{table}");
            out.push('\n');
        }
        None => notice(&mut out, "Repeated vs non-repeated", "repeat-flag"),
    }

    match &dashboard.product_comparison {
        Some(entries) => {
            section_title(&mut out, "Product comparison");
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("Product"),
                header_cell("Closed"),
                header_cell("Repeated"),
            ]);
            apply_table_style(&mut table);
            for entry in entries {
                let product = if entry.product.is_empty() {
                    "(blank)".to_string()
                } else {
                    entry.product.clone()
                };
                table.add_row(vec![
                    Cell::new(product),
                    count_cell(entry.closed),
                    count_cell(entry.repeated),
                ]);
            }
            let _ = writeln!(out, "{table}");
        }
        None => notice(&mut out, "Product comparison", "product or repeat-flag"),
    }

    out
}

/// Renders the diagnostic column view: per semantic field the resolved
/// header, and per dataset column its shape hints.
#[must_use]
pub fn render_column_report(
    headers: &[String],
    resolved: &ResolvedColumns,
    hints: &BTreeMap<String, ColumnHint>,
) -> String {
    let mut out = String::new();

    section_title(&mut out, "Resolved fields");
    let mut mapping = Table::new();
    mapping.set_header(vec![header_cell("Field"), header_cell("Column")]);
    apply_table_style(&mut mapping);
    for (field, column) in resolved.entries() {
        let cell = match column {
            Some(name) => Cell::new(name),
            None => Cell::new("(not found)").fg(Color::Yellow),
        };
        mapping.add_row(vec![Cell::new(field.label()), cell]);
    }
    let _ = writeln!(out, "{mapping}");
    out.push('\n');

    section_title(&mut out, "Dataset columns");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Numeric"),
        header_cell("Unique %"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    for header in headers {
        let row = match hints.get(header) {
            Some(hint) => vec![
                Cell::new(header),
                Cell::new(if hint.is_numeric { "yes" } else { "no" })
                    .set_alignment(CellAlignment::Center),
                Cell::new(format!("{:.0}", hint.unique_ratio * 100.0))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.0}", hint.null_ratio * 100.0))
                    .set_alignment(CellAlignment::Right),
            ],
            None => vec![Cell::new(header), Cell::new("-"), Cell::new("-"), Cell::new("-")],
        };
        table.add_row(row);
    }
    let _ = writeln!(out, "{table}");

    out
}
