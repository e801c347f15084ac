use crate::models::Route;
use crate::render::{CellValue, Column, FieldKind, Tabular};
use time::Date;

/// Crew on duty for a route on a given date and shift.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Personnel {
    pub personnel_id: i32,
    pub route_id: i32,
    pub date: Date,
    pub shift: String,
    /// Free-form list of employee names
    pub employee_list: String,
    #[sqlx(skip)]
    pub route: Option<Box<Route>>,
}

impl Tabular for Personnel {
    const TITLE: &'static str = "Personnel";
    const COLUMNS: &'static [Column<Self>] = &[
        Column {
            name: "personnel_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |p| CellValue::Int(p.personnel_id.into()),
        },
        Column {
            name: "route_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |p| CellValue::Int(p.route_id.into()),
        },
        Column {
            name: "date",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |p| CellValue::Date(p.date),
        },
        Column {
            name: "shift",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |p| CellValue::Text(&p.shift),
        },
        Column {
            name: "employee_list",
            display_name: Some("Employees"),
            kind: FieldKind::Scalar,
            value: |p| CellValue::Text(&p.employee_list),
        },
        Column {
            name: "route",
            display_name: None,
            kind: FieldKind::Reference,
            value: |_| CellValue::Nested,
        },
    ];
}
