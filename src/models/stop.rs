use crate::render::{CellValue, Column, FieldKind, Tabular};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Stop {
    pub stop_id: i32,
    pub name: String,
    pub is_terminal: bool,
    pub has_dispatcher: bool,
}

impl Tabular for Stop {
    const TITLE: &'static str = "Stops";
    const COLUMNS: &'static [Column<Self>] = &[
        Column {
            name: "stop_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Int(s.stop_id.into()),
        },
        Column {
            name: "name",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Text(&s.name),
        },
        Column {
            name: "is_terminal",
            display_name: Some("Terminal"),
            kind: FieldKind::Scalar,
            value: |s| CellValue::Bool(s.is_terminal),
        },
        Column {
            name: "has_dispatcher",
            display_name: Some("Dispatcher"),
            kind: FieldKind::Scalar,
            value: |s| CellValue::Bool(s.has_dispatcher),
        },
    ];
}
