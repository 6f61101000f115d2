// src/render/map.rs
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    /// Popup body, already rendered HTML.
    pub popup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayer {
    Markers,
    Heat,
}

#[derive(Serialize)]
struct MapPayload<'a> {
    id: &'a str,
    layer: &'static str,
    zoom: u8,
    points: &'a [MapPoint],
}

/// Leaflet scripts; include once per page before any [`leaflet_map`].
pub fn leaflet_assets() -> Markup {
    html! {
        link rel="stylesheet" href=(LEAFLET_CSS);
        script src=(LEAFLET_JS) {}
        script src=(LEAFLET_HEAT_JS) {}
    }
}

/// A world map centred on (0, 0) showing `points` as markers with popups or
/// as a heat layer.
pub fn leaflet_map(id: &str, layer: MapLayer, zoom: u8, points: &[MapPoint]) -> Markup {
    let payload = MapPayload {
        id,
        layer: match layer {
            MapLayer::Markers => "markers",
            MapLayer::Heat => "heat",
        },
        zoom,
        points,
    };
    let json = script_safe_json(&payload);

    html! {
        div id=(id) class="map" style="height: 480px; border-radius: 8px;" {}
        script {
            (PreEscaped(format!(
                r#"(function () {{
  var cfg = {json};
  var map = L.map(cfg.id).setView([0, 0], cfg.zoom);
  L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    attribution: '&copy; OpenStreetMap contributors'
  }}).addTo(map);
  if (cfg.layer === 'heat') {{
    L.heatLayer(cfg.points.map(function (p) {{ return [p.lat, p.lon]; }})).addTo(map);
  }} else {{
    cfg.points.forEach(function (p) {{
      L.marker([p.lat, p.lon]).bindPopup(p.popup, {{ maxWidth: 200 }}).addTo(map);
    }});
  }}
}})();"#
            )))
        }
    }
}

// JSON inside <script> must not contain a closing tag.
fn script_safe_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popups_cannot_close_the_script() {
        let points = vec![MapPoint {
            lat: -33.9,
            lon: 151.2,
            popup: "<b>City:</b> Sydney</script>".into(),
        }];
        let html = leaflet_map("markers", MapLayer::Markers, 2, &points).into_string();
        assert!(!html.contains("Sydney</script>"));
        assert!(html.contains("-33.9"));
        assert!(html.contains(r#""layer":"markers""#));
    }

    #[test]
    fn heat_layer_is_selected() {
        let html = leaflet_map("heat", MapLayer::Heat, 3, &[]).into_string();
        assert!(html.contains(r#""layer":"heat""#));
        assert!(html.contains(r#""points":[]"#));
    }
}
