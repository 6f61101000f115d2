use crate::params::Params;
use crate::router::handle;
use crate::tests::utils::{australian_entire_home_prices, body_string, fixture, get};
use crate::views::{self, GeospatialView, LocationView, PriceView};

#[test]
fn entire_home_mean_price_per_country() {
    let fx = fixture();
    let params = Params::from_query(Some("room_type=Entire+home%2Fapt"));

    let (_, out) = views::evaluate::<PriceView>(&fx.config, &params).expect("Pipeline failed");

    let prices = australian_entire_home_prices();
    let expected = prices.iter().sum::<f64>() / prices.len() as f64;

    // one bar per country that has an entire home listing
    assert_eq!(out.by_country_for_room.keys(), vec!["Australia", "Spain"]);
    assert_eq!(out.by_country_for_room.value("Australia", 0), Some(expected));
    assert_eq!(out.by_country_for_room.value("Spain", 0), Some(110.0));
}

#[test]
fn price_page_renders_four_charts() {
    let fx = fixture();

    let resp = handle(get("/?room_country=Spain", Some("page=price")), &fx.config).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("<figure class=\"chart\">").count(), 4);
    assert!(body.contains("Room Prices by Type in Spain"));
}

#[test]
fn pipeline_is_idempotent() {
    let fx = fixture();
    let params = Params::from_query(Some("country=Australia&min_price=50&display=1"));

    let first = views::evaluate::<GeospatialView>(&fx.config, &params).unwrap();
    let second = views::evaluate::<GeospatialView>(&fx.config, &params).unwrap();
    assert_eq!(first, second);

    let first = views::evaluate::<LocationView>(&fx.config, &params).unwrap();
    let second = views::evaluate::<LocationView>(&fx.config, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn location_ranking_is_gated_and_sorted() {
    let fx = fixture();

    let hidden = body_string(
        handle(get("/?country=Australia&city=Sydney", Some("page=location")), &fx.config).unwrap(),
    );
    assert!(!hidden.contains("Average Price of Suburbs"));

    let shown = body_string(
        handle(
            get("/?country=Australia&city=Sydney&display=1", Some("page=location")),
            &fx.config,
        )
        .unwrap(),
    );
    assert!(shown.contains("Average Price of Suburbs in Sydney(Australia)"));

    let params = Params::from_query(Some("country=Australia&city=Sydney"));
    let (_, out) = views::evaluate::<LocationView>(&fx.config, &params).unwrap();
    let values: Vec<f64> = out.suburbs.groups.iter().filter_map(|g| g.values[0]).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn correlation_page_shows_three_heatmaps() {
    let fx = fixture();

    let body = body_string(handle(get("/", Some("page=correlation")), &fx.config).unwrap());
    assert!(body.contains("Correlation Heatmaps"));
    assert!(body.contains("Price and Rating vs Nights and Rooms count"));
    assert!(body.contains("Price and Review scores"));
    assert!(body.contains("Price and Availability"));
}

#[test]
fn superhost_and_availability_pages_render() {
    let fx = fixture();

    let superhost = handle(get("/?country=Spain", Some("page=superhost")), &fx.config).unwrap();
    assert_eq!(superhost.status(), 200);
    assert!(body_string(superhost).contains("Review count vs Rating"));

    let availability = handle(get("/", Some("page=availability")), &fx.config).unwrap();
    assert_eq!(availability.status(), 200);
    assert!(body_string(availability).contains("Open days by Room type in Spain"));
}

#[test]
fn geospatial_map_lists_filtered_points() {
    let fx = fixture();

    let body = body_string(
        handle(
            get("/?country=Spain&display=1", Some("page=geospatial")),
            &fx.config,
        )
        .unwrap(),
    );
    assert!(body.contains("2 listings match the current filters."));
    assert!(body.contains("Gracia"));
    assert!(!body.contains("Bondi"));
}
