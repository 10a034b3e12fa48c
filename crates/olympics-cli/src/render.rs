//! Terminal rendering of query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{DataFrame, DataType};

use olympics_ingest::any_to_string;

/// Builds a table with one header cell per frame column and one row per
/// frame row. Numeric columns are right-aligned; nulls render as a dim dash.
pub fn frame_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for (idx, column) in df.get_columns().iter().enumerate() {
        if is_numeric(column.dtype()) {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }

    for row in 0..df.height() {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| {
                let text = column.get(row).map(any_to_string).unwrap_or_default();
                if text.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        table.add_row(cells);
    }
    table
}

/// Prints a titled table, or a note when the frame has no rows.
pub fn print_frame(title: &str, df: &DataFrame) {
    println!("{title}");
    if df.height() == 0 {
        println!("(no rows)");
        return;
    }
    println!("{}", frame_table(df));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::UInt32
            | DataType::UInt64
            | DataType::Int32
            | DataType::Int64
            | DataType::Float32
            | DataType::Float64
    )
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
