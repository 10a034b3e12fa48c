//! Conversion of query results into Polars DataFrames.

use polars::prelude::{Column, DataFrame};

use crate::error::Result;

/// A query result that can be handed to a table or chart as a DataFrame.
///
/// Column names and order are fixed per result type. Empty results still
/// carry every column.
pub trait ToFrame {
    fn to_frame(&self) -> Result<DataFrame>;
}

pub(crate) fn str_column<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Column {
    let values: Vec<&str> = values.into_iter().collect();
    Column::new(name.into(), values)
}

pub(crate) fn u32_column(name: &str, values: impl IntoIterator<Item = u32>) -> Column {
    let values: Vec<u32> = values.into_iter().collect();
    Column::new(name.into(), values)
}

pub(crate) fn i32_column(name: &str, values: impl IntoIterator<Item = i32>) -> Column {
    let values: Vec<i32> = values.into_iter().collect();
    Column::new(name.into(), values)
}

pub(crate) fn f64_column(name: &str, values: impl IntoIterator<Item = Option<f64>>) -> Column {
    let values: Vec<Option<f64>> = values.into_iter().collect();
    Column::new(name.into(), values)
}

pub(crate) fn frame(columns: Vec<Column>) -> Result<DataFrame> {
    Ok(DataFrame::new(columns)?)
}
