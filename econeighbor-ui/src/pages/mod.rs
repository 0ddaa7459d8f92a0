//! Pages
//!
//! Top-level page components, one per dashboard panel.

pub mod air_quality;
pub mod resources;
pub mod waste_guide;

pub use air_quality::AirQuality;
pub use resources::Resources;
pub use waste_guide::WasteGuide;
