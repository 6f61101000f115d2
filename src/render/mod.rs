pub mod chart;
pub mod map;

pub use chart::{heatmap, BarChart, ScatterPlot, ScatterPoint};
pub use map::{leaflet_assets, leaflet_map, MapLayer, MapPoint};
