use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, click_nav, cookie_of, fixture, get};

#[test]
fn missing_extract_fails_only_its_page() {
    let fx = fixture();
    fx.remove("Price_data.csv");

    let resp = handle(get("/", Some("page=price")), &fx.config).expect("Handler failed");
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Navigation"));
    assert!(body.contains("Price_data.csv"));
    assert!(body.contains(r#"value="price" class="active""#));

    let other = handle(get("/", Some("page=correlation")), &fx.config).unwrap();
    assert_eq!(other.status(), 200);
}

#[test]
fn unknown_route_is_not_found() {
    let fx = fixture();

    let err = handle(get("/nope", None), &fx.config).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(err.status(), 404);
}

#[test]
fn non_numeric_price_is_bad_request() {
    let fx = fixture();

    let resp = handle(get("/?min_price=abc", Some("page=geospatial")), &fx.config).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Invalid filter value"));
}

#[test]
fn unknown_page_is_rejected() {
    let fx = fixture();

    let err = handle(click_nav("pricing", None), &fx.config).unwrap_err();
    assert!(matches!(err, ServerError::Configuration(_)));
}

#[test]
fn stale_page_cookie_keeps_the_sidebar() {
    let fx = fixture();

    let resp = handle(get("/?country=Spain", Some("page=pricing")), &fx.config).unwrap();
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Configuration Error: unknown page 'pricing'"));
    assert!(body.contains(r#"action="/nav""#));
    assert!(body.contains(r#"value="introduction" class="active""#));

    // any sidebar click replaces the bad cookie
    let nav = handle(click_nav("correlation", Some("page=pricing")), &fx.config).unwrap();
    assert_eq!(cookie_of(&nav), "page=correlation");
    let page = handle(get("/", Some(&cookie_of(&nav))), &fx.config).unwrap();
    assert_eq!(page.status(), 200);
    assert!(body_string(page).contains("Correlation Heatmaps"));
}

#[test]
fn static_image_is_served() {
    let fx = fixture();

    let resp = handle(get("/static/Airbnb.jpg", None), &fx.config).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "image/jpeg"
    );

    let err = handle(get("/static/..%2Fdashboard.toml", None), &fx.config).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
