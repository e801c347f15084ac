//! Compile-time field descriptors used to render any entity as a table.
//!
//! Each entity lists its fields once, in declaration order, together with a
//! header label, the kind of value it holds and an accessor. The table
//! renderer only ever looks at these descriptors.

use rust_decimal::Decimal;
use time::macros::format_description;
use time::{Date, Time};

/// What a field holds, as far as rendering is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean, integer, decimal, string, date or time-of-day.
    Scalar,
    /// Collection of related entities.
    Collection,
    /// Reference to a single related entity.
    Reference,
}

impl FieldKind {
    pub fn is_scalar(self) -> bool {
        matches!(self, FieldKind::Scalar)
    }
}

/// A field value borrowed from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    Bool(bool),
    Int(i64),
    Decimal(Decimal),
    Text(&'a str),
    Date(Date),
    Time(Time),
    /// Collections and references have no cell representation.
    Nested,
}

impl CellValue<'_> {
    /// Textual form of the value, before HTML escaping.
    ///
    /// Dates render as `dd.MM.yyyy`, times as `HH:mm`, everything else via `Display`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Decimal(d) => d.to_string(),
            CellValue::Text(s) => (*s).to_string(),
            CellValue::Date(d) => d
                .format(format_description!("[day].[month].[year]"))
                .unwrap_or_else(|_| d.to_string()),
            CellValue::Time(t) => t
                .format(format_description!("[hour]:[minute]"))
                .unwrap_or_else(|_| t.to_string()),
            CellValue::Nested => String::new(),
        }
    }
}

/// Descriptor for one field of `T`.
pub struct Column<T> {
    /// Field identifier as declared on the struct.
    pub name: &'static str,
    /// Optional human-readable label used instead of the identifier.
    pub display_name: Option<&'static str>,
    pub kind: FieldKind,
    pub value: fn(&T) -> CellValue<'_>,
}

impl<T> Column<T> {
    /// Header label: the display name when present, else the identifier verbatim.
    pub fn header(&self) -> &'static str {
        self.display_name.unwrap_or(self.name)
    }

    pub fn is_scalar(&self) -> bool {
        self.kind.is_scalar()
    }

    pub fn cell<'a>(&self, record: &'a T) -> CellValue<'a> {
        (self.value)(record)
    }
}

/// Entities that can be rendered by [`render_table`](super::render_table).
pub trait Tabular: Sized + 'static {
    /// Heading shown above the table.
    const TITLE: &'static str;
    /// Every field of the entity, in declaration order.
    const COLUMNS: &'static [Column<Self>];

    /// Columns that make it into the rendered table.
    fn scalar_columns() -> impl Iterator<Item = &'static Column<Self>> {
        Self::COLUMNS.iter().filter(|c| c.is_scalar())
    }
}
