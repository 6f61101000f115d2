use crate::router::handle;
use crate::tests::utils::{body_string, click_nav, cookie_of, fixture, get};

#[test]
fn first_visit_shows_introduction() {
    let fx = fixture();

    let resp = handle(get("/", None), &fx.config).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Airbnb Analysis"));
    assert!(body.contains(r#"value="introduction" class="active""#));
    assert!(body.contains("/static/Airbnb.jpg"));
}

#[test]
fn nav_click_sets_cookie_and_redirects_home() {
    let fx = fixture();

    let resp = handle(click_nav("correlation", None), &fx.config).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
    assert_eq!(cookie_of(&resp), "page=correlation");
}

#[test]
fn navigation_sequence_ends_on_last_click_with_fresh_widgets() {
    let fx = fixture();

    // Introduction -> Geospatial, then narrow the price range.
    let mut cookie = cookie_of(&handle(click_nav("introduction", None), &fx.config).unwrap());
    cookie = cookie_of(&handle(click_nav("geospatial", Some(&cookie)), &fx.config).unwrap());

    let narrowed = handle(
        get("/?min_price=200&max_price=220&display=1", Some(&cookie)),
        &fx.config,
    )
    .unwrap();
    assert!(body_string(narrowed).contains(r#"name="min_price" min="35" max="250" step="1" value="200""#));

    // -> Correlation -> Geospatial
    cookie = cookie_of(&handle(click_nav("correlation", Some(&cookie)), &fx.config).unwrap());
    let back = handle(click_nav("geospatial", Some(&cookie)), &fx.config).unwrap();
    assert_eq!(
        back.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
    cookie = cookie_of(&back);
    assert_eq!(cookie, "page=geospatial");

    let body = body_string(handle(get("/", Some(&cookie)), &fx.config).unwrap());
    assert!(body.contains("Geospatial Visualisation"));
    assert!(body.contains(r#"value="geospatial" class="active""#));
    assert!(body.contains(r#"name="min_price" min="35" max="250" step="1" value="35""#));
    assert!(body.contains(r#"name="max_price" min="35" max="250" step="1" value="250""#));
    // gated until the display button is pressed again
    assert!(!body.contains("Map with Markers"));
}

#[test]
fn sessions_do_not_share_pages() {
    let fx = fixture();

    let a = cookie_of(&handle(click_nav("price", None), &fx.config).unwrap());
    let b = cookie_of(&handle(click_nav("superhost", None), &fx.config).unwrap());

    let body_a = body_string(handle(get("/", Some(&a)), &fx.config).unwrap());
    let body_b = body_string(handle(get("/", Some(&b)), &fx.config).unwrap());

    assert!(body_a.contains("Country-wise Price Trends"));
    assert!(body_b.contains("Superhost Insights"));
    assert!(!body_b.contains("Country-wise Price Trends"));
}
