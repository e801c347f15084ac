use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use cookie::Cookie;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower::ServiceExt;
use transport_journal::constants::SESSION_COOKIE_NAME;

mod common;

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: &Router, uri: &str, cookie_header: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri).header(header::HOST, "journal.test");
    if let Some(cookies) = cookie_header {
        request = request.header(header::COOKIE, cookies);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(
    app: &Router,
    uri: &str,
    form: &str,
    cookie_header: Option<&str>,
) -> Response<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookies) = cookie_header {
        request = request.header(header::COOKIE, cookies);
    }
    app.clone()
        .oneshot(request.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

/// `Set-Cookie` headers of a response as (name, decoded value) pairs.
fn set_cookies(response: &Response<Body>) -> Vec<(String, String)> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| {
            let cookie = Cookie::parse_encoded(value.to_str().unwrap().to_string()).unwrap();
            (cookie.name().to_string(), cookie.value().to_string())
        })
        .collect()
}

/// Turn `Set-Cookie` headers into the `Cookie` header a browser would send back.
fn cookie_header(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| {
            let cookie = Cookie::parse_encoded(value.to_str().unwrap().to_string()).unwrap();
            cookie.stripped().encoded().to_string()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn row_count(html: &str) -> usize {
    html.matches("<tr><td>").count()
}

#[tokio::test]
async fn test_index_page() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let html = body_text(response).await;
    assert!(html.contains("href='/searchform1'"));
    assert!(html.contains("href='/searchform2'"));
}

#[tokio::test]
async fn test_info_echoes_request() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = get(&app, "/info", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Host: journal.test"));
    assert!(html.contains("info</p>"));
    assert!(html.contains("Protocol: HTTP"));
}

#[tokio::test]
async fn test_table_index_lists_entity_sets() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(get(&app, "/table", None).await).await;

    for name in ["Personnel", "Route", "Schedule", "Stop"] {
        assert!(html.contains(&format!("<a href='/table/{name}'>{name}</a>")));
    }
}

#[tokio::test]
async fn test_route_table_is_capped_at_twenty_rows() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = get(&app, "/table/Route", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert_eq!(row_count(&html), 20);
    assert!(html.contains("<th>Transport type</th>"));
    assert!(!html.contains("<th>schedules</th>"));
}

#[tokio::test]
async fn test_personnel_table_formats_dates() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(get(&app, "/table/Personnel", None).await).await;

    assert!(html.contains("<td>05.03.2024</td>"));
}

#[tokio::test]
async fn test_schedule_table_formats_times() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(get(&app, "/table/Schedule", None).await).await;

    assert!(html.contains("<td>08:15</td>"));
}

#[tokio::test]
async fn test_stop_table_escapes_values() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(get(&app, "/table/Stop", None).await).await;

    assert!(html.contains("Park &lt;North&gt;"));
    assert!(!html.contains("<North>"));
}

#[tokio::test]
async fn test_unknown_table_returns_404() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    for uri in ["/table/Unknown", "/table/route"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "Table not found");
    }
}

#[tokio::test]
async fn test_table_is_served_from_cache() {
    let repo = Arc::new(common::sample_repository());
    let app = common::setup_test_app(repo.clone());

    let first = body_text(get(&app, "/table/Stop", None).await).await;
    let second = body_text(get(&app, "/table/Stop", None).await).await;

    assert_eq!(first, second);
    assert_eq!(repo.stop_queries.load(Ordering::SeqCst), 1);
    assert_eq!(repo.route_queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_every_table_is_loaded_once_within_ttl() {
    let repo = Arc::new(common::sample_repository());
    let app = common::setup_test_app(repo.clone());

    for name in ["Personnel", "Route", "Schedule", "Stop"] {
        for _ in 0..3 {
            let response = get(&app, &format!("/table/{name}"), None).await;
            assert_eq!(response.status(), StatusCode::OK, "{name}");
        }
    }

    assert_eq!(repo.personnel_queries.load(Ordering::SeqCst), 1);
    assert_eq!(repo.route_queries.load(Ordering::SeqCst), 1);
    assert_eq!(repo.schedule_queries.load(Ordering::SeqCst), 1);
    assert_eq!(repo.stop_queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cookie_search_filters_and_persists() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = post_form(
        &app,
        "/searchform1",
        "RouteName=Express&TransportType=&IsExpress=true",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert!(cookies.contains(&("RouteName".to_string(), "Express".to_string())));
    assert!(cookies.contains(&("TransportType".to_string(), String::new())));
    assert!(cookies.contains(&("IsExpress".to_string(), "true".to_string())));

    let browser_cookies = cookie_header(&response);
    let html = body_text(response).await;
    assert_eq!(row_count(&html), 2);
    assert!(html.contains("<td>City Express 1</td>"));
    assert!(html.contains("<td>Airport Express</td>"));
    assert!(!html.contains("Express Night"));

    let form = body_text(get(&app, "/searchform1", Some(&browser_cookies)).await).await;
    assert!(form.contains("name='RouteName' value='Express'"));
    assert!(form.contains("<option value='true' selected>Yes</option>"));
}

#[tokio::test]
async fn test_session_search_filters_and_persists_server_side() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = post_form(
        &app,
        "/searchform2",
        "RouteName=Express&TransportType=&IsExpress=true",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].0, SESSION_COOKIE_NAME);
    assert!(response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .contains("HttpOnly"));

    let session_cookie = cookie_header(&response);
    let html = body_text(response).await;
    assert_eq!(row_count(&html), 2);
    assert!(html.contains("<td>City Express 1</td>"));
    assert!(html.contains("<td>Airport Express</td>"));

    let form = body_text(get(&app, "/searchform2", Some(&session_cookie)).await).await;
    assert!(form.contains("name='RouteName' value='Express'"));
    assert!(form.contains("<option value='true' selected>Yes</option>"));

    // A client without the session sees an empty form.
    let fresh = body_text(get(&app, "/searchform2", None).await).await;
    assert!(fresh.contains("name='RouteName' value=''"));
}

#[tokio::test]
async fn test_session_and_cookie_forms_do_not_share_state() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = post_form(&app, "/searchform1", "RouteName=Ring&TransportType=&IsExpress=", None).await;
    let browser_cookies = cookie_header(&response);

    let form = body_text(get(&app, "/searchform2", Some(&browser_cookies)).await).await;
    assert!(form.contains("name='RouteName' value=''"));
}

#[tokio::test]
async fn test_empty_filter_returns_all_routes() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    for uri in ["/searchform1", "/searchform2"] {
        let response = post_form(&app, uri, "RouteName=&TransportType=&IsExpress=", None).await;
        let html = body_text(response).await;
        assert_eq!(row_count(&html), 25, "{uri}");
    }
}

#[tokio::test]
async fn test_malformed_express_value_is_ignored() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let response = post_form(
        &app,
        "/searchform1",
        "RouteName=Express&TransportType=&IsExpress=maybe",
        None,
    )
    .await;

    let html = body_text(response).await;
    assert_eq!(row_count(&html), 3);
}

#[tokio::test]
async fn test_transport_type_filter_and_no_results() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(
        post_form(&app, "/searchform1", "RouteName=&TransportType=Tram&IsExpress=", None).await,
    )
    .await;
    assert_eq!(row_count(&html), 1);
    assert!(html.contains("<td>Express Night</td>"));

    let html = body_text(
        post_form(&app, "/searchform2", "RouteName=Nowhere&TransportType=&IsExpress=", None).await,
    )
    .await;
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("No routes found matching the search criteria."));
}

#[tokio::test]
async fn test_search_form_lists_distinct_transport_types() {
    let app = common::setup_test_app(Arc::new(common::sample_repository()));

    let html = body_text(get(&app, "/searchform1", None).await).await;

    assert_eq!(html.matches("<option value='Bus'>").count(), 1);
    assert!(html.contains("<option value='Tram'>Tram</option>"));
    assert!(html.contains("<option value='Trolleybus'>Trolleybus</option>"));
}

#[tokio::test]
async fn test_failed_search_keeps_previous_filter_in_both_forms() {
    let repo = Arc::new(common::sample_repository());
    let app = common::setup_test_app(repo.clone());

    let mut saved = Vec::new();
    for uri in ["/searchform1", "/searchform2"] {
        let response = post_form(&app, uri, "RouteName=Ring&TransportType=&IsExpress=", None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        saved.push((uri, cookie_header(&response)));
    }

    repo.fail_search.store(true, Ordering::SeqCst);

    for (uri, browser_cookies) in &saved {
        let response = post_form(
            &app,
            uri,
            "RouteName=Express&TransportType=Tram&IsExpress=true",
            Some(browser_cookies),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(set_cookies(&response).is_empty(), "{uri}");

        let form = body_text(get(&app, uri, Some(browser_cookies)).await).await;
        assert!(form.contains("name='RouteName' value='Ring'"), "{uri}");
        assert!(!form.contains("<option value='Tram' selected>"), "{uri}");
        assert!(!form.contains("<option value='true' selected>"), "{uri}");
    }
}
