use crate::models::{Personnel, Schedule};
use crate::render::{CellValue, Column, FieldKind, Tabular};
use rust_decimal::Decimal;

/// A transport line.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Route {
    pub route_id: i32,
    pub name: String,
    pub transport_type: String,
    /// Planned travel time in minutes
    pub planned_travel_time: i32,
    /// Length in kilometres, `numeric(5, 2)` in the store
    pub distance: Decimal,
    pub is_express: bool,
    /// Crews assigned to this route. Not loaded by list queries.
    #[sqlx(skip)]
    pub personnel: Vec<Personnel>,
    /// Timetable entries of this route. Not loaded by list queries.
    #[sqlx(skip)]
    pub schedules: Vec<Schedule>,
}

impl Tabular for Route {
    const TITLE: &'static str = "Routes";
    const COLUMNS: &'static [Column<Self>] = &[
        Column {
            name: "route_id",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |r| CellValue::Int(r.route_id.into()),
        },
        Column {
            name: "name",
            display_name: None,
            kind: FieldKind::Scalar,
            value: |r| CellValue::Text(&r.name),
        },
        Column {
            name: "transport_type",
            display_name: Some("Transport type"),
            kind: FieldKind::Scalar,
            value: |r| CellValue::Text(&r.transport_type),
        },
        Column {
            name: "planned_travel_time",
            display_name: Some("Travel time, min"),
            kind: FieldKind::Scalar,
            value: |r| CellValue::Int(r.planned_travel_time.into()),
        },
        Column {
            name: "distance",
            display_name: Some("Distance, km"),
            kind: FieldKind::Scalar,
            value: |r| CellValue::Decimal(r.distance),
        },
        Column {
            name: "is_express",
            display_name: Some("Express"),
            kind: FieldKind::Scalar,
            value: |r| CellValue::Bool(r.is_express),
        },
        Column {
            name: "personnel",
            display_name: None,
            kind: FieldKind::Collection,
            value: |_| CellValue::Nested,
        },
        Column {
            name: "schedules",
            display_name: None,
            kind: FieldKind::Collection,
            value: |_| CellValue::Nested,
        },
    ];
}
