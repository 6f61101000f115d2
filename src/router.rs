use crate::config::DashboardConfig;
use crate::errors::ServerError;
use crate::params::Params;
use crate::responses::{html_response_with_status, see_other, static_asset, ResultResp};
use crate::session::{PageId, Session};
use crate::templates::{desktop_layout, error_card};
use crate::views;
use astra::Request;
use std::io::Read;
use tracing::{debug, warn};

pub fn handle(req: Request, config: &DashboardConfig) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(&req, config),
        ("POST", "/nav") => navigate(req),
        ("GET", p) if p.starts_with("/static/") => {
            static_asset(&config.static_dir, &p["/static/".len()..])
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Render the session's current page with the widget values in the query.
/// A failing page is shown inside the layout so navigation keeps working.
fn dashboard(req: &Request, config: &DashboardConfig) -> ResultResp {
    let session = match Session::from_request(req) {
        Ok(session) => session,
        // A stale cookie still gets the sidebar, so any click replaces it.
        Err(err) => {
            warn!(error = %err, "unusable session cookie");
            let page = PageId::default();
            return html_response_with_status(
                err.status(),
                desktop_layout(page.label(), page, error_card(&err)),
            );
        }
    };
    let page = session.current();
    let params = Params::from_query(req.uri().query());

    let (status, content) = match views::dispatch(page, config, &params) {
        Ok(markup) => (200, markup),
        Err(err) => {
            warn!(page = page.slug(), error = %err, "page failed to render");
            (err.status(), error_card(&err))
        }
    };

    html_response_with_status(status, desktop_layout(page.label(), page, content))
}

/// Sidebar button: select the page and start it from default widget values.
fn navigate(mut req: Request) -> ResultResp {
    let mut session = Session::from_request(&req).unwrap_or_default();

    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form: {e}")))?;

    let form = Params::from_form(&body);
    let slug = form
        .get("page")
        .ok_or_else(|| ServerError::BadRequest("missing 'page'".into()))?;
    session.select(PageId::from_slug(slug)?);
    debug!(page = slug, "navigated");

    see_other("/", Some(session.set_cookie()))
}
