use crate::config::DashboardConfig;
use astra::{Body, Request, Response};
use http::Method;
use std::fs;
use std::io::Read;
use tempfile::TempDir;

pub const GEOSPATIAL_CSV: &str = "Country,City,Suburb,Room type,Price,Rating,Latitude,Longitude\n\
    Australia,Sydney,Bondi,Entire home/apt,250,4.8,151.27,-33.89\n\
    Australia,Sydney,Manly,Private room,90,4,151.28,-33.79\n\
    Spain,Barcelona,Gracia,Entire home/apt,120.5,3.5,2.15,41.40\n\
    Spain,Barcelona,Raval,Shared room,35,2,2.17,41.38\n";

pub const CORRELATION_CSV: &str = "Price,Rating,Minimum nights,Maximum nights,Bedroom count,Bathroom count,\
Review count,Cleanliness score,Communication score,Location score,Pricevalue score,Super host\n\
    100,4.5,1,30,1,1,10,9,10,9,9,True\n\
    200,4.7,2,60,2,1,25,10,10,10,8,False\n\
    300,4.9,3,90,3,2,40,10,9,10,7,True\n";

pub const SUPERHOST_CSV: &str = "Country,Super host,Host Listings count,Review count,Rating\n\
    Spain,True,4,120,4.9\n\
    Spain,False,1,3,4.1\n\
    Brazil,False,10,15,4.3\n";

pub const AVAILABILITY_CSV: &str = "Country,Room type,Availability 30,Availability 60,Availability 90,Availability 365\n\
    Spain,Private room,10,20,30,100\n\
    Canada,Entire home/apt,30,60,90,365\n";

/// Prices of the 40 Australian "Entire home/apt" rows: 100, 120, ..., 880.
pub fn australian_entire_home_prices() -> Vec<f64> {
    (0..40).map(|i| 100.0 + 20.0 * i as f64).collect()
}

fn price_csv() -> String {
    let mut csv = String::from("Country,City,Suburb,Room type,Property type,Price\n");
    for (i, price) in australian_entire_home_prices().into_iter().enumerate() {
        let suburb = if i % 2 == 0 { "Bondi" } else { "Manly" };
        csv.push_str(&format!(
            "Australia,Sydney,{suburb},Entire home/apt,Apartment,{price}\n"
        ));
    }
    csv.push_str("Australia,Sydney,Bondi,Private room,House,70\n");
    csv.push_str("Australia,Melbourne,Fitzroy,Private room,Apartment,65\n");
    csv.push_str("Spain,Madrid,Sol,Entire home/apt,Apartment,110\n");
    csv.push_str("Spain,Madrid,Chueca,Private room,Apartment,45\n");
    csv.push_str("Brazil,Rio,Leblon,Shared room,House,30\n");
    csv
}

/// A data directory holding every extract, plus the static image.
pub struct Fixture {
    pub dir: TempDir,
    pub config: DashboardConfig,
}

impl Fixture {
    pub fn remove(&self, file: &str) {
        fs::remove_file(self.dir.path().join(file)).unwrap();
    }
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let files = [
        ("Geospatial_data.csv", GEOSPATIAL_CSV.to_string()),
        ("Price_data.csv", price_csv()),
        ("Corelation_data.csv", CORRELATION_CSV.to_string()),
        ("Superhost_data.csv", SUPERHOST_CSV.to_string()),
        ("Availability_data.csv", AVAILABILITY_CSV.to_string()),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    let static_dir = dir.path().join("static");
    fs::create_dir(&static_dir).unwrap();
    fs::write(static_dir.join("Airbnb.jpg"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

    let mut config = DashboardConfig::default().with_data_dir(dir.path());
    config.static_dir = static_dir;

    Fixture { dir, config }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn click_nav(page: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri("/nav")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    builder
        .body(Body::from(format!("page={page}").into_bytes()))
        .unwrap()
}

/// `name=value` part of the response's Set-Cookie header.
pub fn cookie_of(resp: &Response) -> String {
    let raw = resp
        .headers()
        .get("Set-Cookie")
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    raw.split(';').next().unwrap().to_string()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
