use crate::models::Route;
use crate::render::{CellValue, Column, FieldKind, Tabular};
use time::Time;

/// One arrival of a route on a given weekday.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Schedule {
    pub schedule_id: i32,
    pub route_id: i32,
    pub weekday: String,
    pub arrival_time: Time,
    pub year: i32,
    #[sqlx(skip)]
    pub route: Option<Box<Route>>,
}

impl Tabular for Schedule {
    const TITLE: &'static str = "Schedule";
    const COLUMNS: &'static [Column<Self>] = &[
        Column {
            name: "schedule_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Int(s.schedule_id.into()),
        },
        Column {
            name: "route_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Int(s.route_id.into()),
        },
        Column {
            name: "weekday",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Text(&s.weekday),
        },
        Column {
            name: "arrival_time",
            display_name: Some("Arrival time"),
            kind: FieldKind::Scalar,
            value: |s| CellValue::Time(s.arrival_time),
        },
        Column {
            name: "year",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |s| CellValue::Int(s.year.into()),
        },
        Column {
            name: "route",
            display_name: None,
            kind: FieldKind::Reference,
            value: |_| CellValue::Nested,
        },
    ];
}
