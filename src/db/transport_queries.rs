use crate::models::{Personnel, Route, RouteCriteria, Schedule, Stop};
use sqlx::{PgPool, Postgres, QueryBuilder};

// Column lists alias the store's identifiers onto the struct field names.
const ROUTE_COLUMNS: &str = r#""RouteID" AS route_id, "Name" AS name, "TransportType" AS transport_type,
    "PlannedTravelTime" AS planned_travel_time, "Distance" AS distance, "IsExpress" AS is_express"#;

pub async fn list_routes(pool: &PgPool, limit: i64) -> Result<Vec<Route>, sqlx::Error> {
    let sql = format!(r#"SELECT {ROUTE_COLUMNS} FROM "Routes" LIMIT $1"#);
    sqlx::query_as::<_, Route>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn list_schedules(pool: &PgPool, limit: i64) -> Result<Vec<Schedule>, sqlx::Error> {
    sqlx::query_as::<_, Schedule>(
        r#"
        SELECT "ScheduleID" AS schedule_id, "RouteID" AS route_id, "Weekday" AS weekday,
               "ArrivalTime" AS arrival_time, "Year" AS year
        FROM "Schedule"
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn list_stops(pool: &PgPool, limit: i64) -> Result<Vec<Stop>, sqlx::Error> {
    sqlx::query_as::<_, Stop>(
        r#"
        SELECT "StopID" AS stop_id, "Name" AS name, "IsTerminal" AS is_terminal,
               "HasDispatcher" AS has_dispatcher
        FROM "Stops"
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn list_personnel(pool: &PgPool, limit: i64) -> Result<Vec<Personnel>, sqlx::Error> {
    sqlx::query_as::<_, Personnel>(
        r#"
        SELECT "PersonnelID" AS personnel_id, "RouteID" AS route_id, "Date" AS date,
               "Shift" AS shift, "EmployeeList" AS employee_list
        FROM "Personnel"
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn distinct_transport_types(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT DISTINCT "TransportType" FROM "Routes" ORDER BY 1"#)
        .fetch_all(pool)
        .await
}

/// Build the route search statement; only the predicates present in `criteria` are added.
pub fn build_route_search(criteria: &RouteCriteria) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(format!(r#"SELECT {ROUTE_COLUMNS} FROM "Routes" WHERE TRUE"#));

    if let Some(ref name) = criteria.name_contains {
        // POSITION keeps `%` and `_` in user input literal.
        builder.push(r#" AND POSITION("#).push_bind(name).push(r#" IN "Name") > 0"#);
    }
    if let Some(ref transport_type) = criteria.transport_type {
        builder.push(r#" AND "TransportType" = "#).push_bind(transport_type);
    }
    if let Some(is_express) = criteria.is_express {
        builder.push(r#" AND "IsExpress" = "#).push_bind(is_express);
    }
    builder.push(r#" ORDER BY "RouteID""#);

    builder
}

pub async fn search_routes(pool: &PgPool, criteria: &RouteCriteria) -> Result<Vec<Route>, sqlx::Error> {
    let mut builder = build_route_search(criteria);
    builder.build_query_as::<Route>().fetch_all(pool).await
}
