use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use idb_filter::{CountrySelector, IndustryCatalog, SelectionOutcome, max_selections};
use idb_model::{IndustrySelection, Tier};

use crate::types::SelectReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// The single stderr line printed for a failed command, with its context chain.
pub fn error_line(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}

pub fn tiers_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tier"), header_cell("Industry selections")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for tier in Tier::ALL {
        table.add_row(vec![
            Cell::new(tier.label()),
            Cell::new(max_selections(tier)),
        ]);
    }
    table
}

pub fn select_steps_table(report: &SelectReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Pick"),
        header_cell("Outcome"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in report.steps.iter().enumerate() {
        let selected = step
            .selections
            .iter()
            .map(IndustrySelection::label)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&step.pick),
            outcome_cell(&step.outcome),
            Cell::new(selected),
        ]);
    }
    table
}

pub fn print_select_report(report: &SelectReport) {
    println!("Tier: {} (limit {})", report.tier.label(), report.limit);
    println!("{}", select_steps_table(report));
    if report.selections.is_empty() {
        println!("No industries selected.");
    } else {
        for selection in &report.selections {
            println!("  • {}", selection.label());
        }
    }
    if let Some(prompt) = report.denial {
        println!("{}", prompt.message());
    }
}

pub fn catalog_table(catalog: &IndustryCatalog, search: Option<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Icon"),
        header_cell("Category"),
        header_cell("Industry"),
        header_cell("Sub-niches"),
    ]);
    apply_table_style(&mut table);
    match search {
        Some(text) => {
            for hit in catalog.search(text) {
                table.add_row(vec![
                    dim_cell(catalog.icon_for(&hit.industry.id)),
                    Cell::new(&hit.category.name),
                    Cell::new(hit.label()),
                    dim_cell(
                        hit.sub_niche
                            .map(|sub| sub.id.as_str())
                            .unwrap_or(hit.industry.id.as_str()),
                    ),
                ]);
            }
        }
        None => {
            for category in &catalog.categories {
                for industry in &category.industries {
                    let subs = industry
                        .sub_niches
                        .iter()
                        .map(|sub| sub.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    table.add_row(vec![
                        dim_cell(catalog.icon_for(&industry.id)),
                        Cell::new(&category.name),
                        Cell::new(&industry.name),
                        Cell::new(subs),
                    ]);
                }
            }
        }
    }
    table
}

pub fn countries_table(selector: &CountrySelector) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Code"),
        header_cell("Country"),
    ]);
    apply_table_style(&mut table);
    for group in selector.grouped() {
        for (index, country) in group.countries.iter().enumerate() {
            let region = if index == 0 {
                Cell::new(group.region.label()).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![region, Cell::new(&country.code), Cell::new(&country.name)]);
        }
    }
    table
}

fn outcome_cell(outcome: &SelectionOutcome) -> Cell {
    let cell = Cell::new(outcome.as_str());
    match outcome {
        SelectionOutcome::Appended => cell.fg(Color::Green),
        SelectionOutcome::Replaced { .. } => cell.fg(Color::Yellow),
        SelectionOutcome::Removed => cell.fg(Color::DarkGrey),
        SelectionOutcome::Rejected => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
