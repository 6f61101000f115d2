// src/session.rs
use crate::errors::ServerError;
use astra::Request;

pub const PAGE_COOKIE: &str = "page";

/// One dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageId {
    #[default]
    Introduction,
    Geospatial,
    Price,
    Location,
    Correlation,
    Superhost,
    Availability,
}

impl PageId {
    /// Sidebar order.
    pub const ALL: [PageId; 7] = [
        PageId::Introduction,
        PageId::Geospatial,
        PageId::Price,
        PageId::Location,
        PageId::Correlation,
        PageId::Superhost,
        PageId::Availability,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Introduction => "introduction",
            PageId::Geospatial => "geospatial",
            PageId::Price => "price",
            PageId::Location => "location",
            PageId::Correlation => "correlation",
            PageId::Superhost => "superhost",
            PageId::Availability => "availability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Introduction => "Introduction",
            PageId::Geospatial => "Geospatial Visualisation",
            PageId::Price => "Price Location Visualisation",
            PageId::Location => "Location based Visualisation",
            PageId::Correlation => "Correlation Visualisation",
            PageId::Superhost => "Superhost Visualisation",
            PageId::Availability => "Availability Visualisation",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, ServerError> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| ServerError::Configuration(format!("unknown page '{slug}'")))
    }
}

/// Per-client navigation state. It lives in the `page` cookie, so sessions
/// never share anything on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    current: PageId,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_request(req: &Request) -> Result<Self, ServerError> {
        let cookie = req
            .headers()
            .get_all("Cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, _)| *k == PAGE_COOKIE)
            .map(|(_, v)| v.trim());

        match cookie {
            None | Some("") => Ok(Self::new()),
            Some(slug) => Ok(Self {
                current: PageId::from_slug(slug)?,
            }),
        }
    }

    /// Every navigation control moves here unconditionally.
    pub fn select(&mut self, page: PageId) {
        self.current = page;
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn set_cookie(&self) -> String {
        format!(
            "{PAGE_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.current.slug()
        )
    }
}
