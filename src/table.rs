//! Table rendering for resource lists

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Local, Utc};

use crate::resources::Resource;

pub const PLACEHOLDER: &str = "N/A";

/// Something a row offers to do with its record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit(i32),
    Delete(i32),
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Edit(_) => "Edit",
            Action::Delete(_) => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    pub cells: Vec<String>,
    pub actions: [Action; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Row for the given record id
    pub fn row(&self, id: i32) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        writeln!(f, "{}", padded(self.columns.iter().copied(), &widths))?;
        writeln!(
            f,
            "{}",
            widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
        )?;
        if self.rows.is_empty() {
            writeln!(f, "(no records)")?;
        }
        for row in &self.rows {
            writeln!(f, "{}", padded(row.cells.iter().map(String::as_str), &widths))?;
        }
        Ok(())
    }
}

fn padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Renders records into the list region, replacing whatever was there
pub struct TableRenderer<R: Resource> {
    region: Option<Table>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> TableRenderer<R> {
    pub fn new() -> Self {
        Self {
            region: None,
            _resource: PhantomData,
        }
    }

    pub fn render(&mut self, records: &[R::Record]) -> &Table {
        let rows = records
            .iter()
            .map(|record| {
                let id = R::id(record);
                Row {
                    id,
                    cells: R::cells(record),
                    actions: [Action::Edit(id), Action::Delete(id)],
                }
            })
            .collect();

        self.region.insert(Table {
            columns: R::COLUMNS.to_vec(),
            rows,
        })
    }

    /// Last rendered table; `None` until the first successful render
    pub fn current(&self) -> Option<&Table> {
        self.region.as_ref()
    }
}

impl<R: Resource> Default for TableRenderer<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Local date-time string for a timestamp
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn timestamp_or_placeholder(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Comma joined projection of related records, or `empty` when there are none
pub fn summary<T>(items: &[T], project: impl Fn(&T) -> String, empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.iter().map(project).collect::<Vec<_>>().join(", ")
    }
}

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
