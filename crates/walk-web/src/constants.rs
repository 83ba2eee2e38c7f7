// DOM ids the front-end wires itself to.

pub const CANVAS_ID: &str = "app-canvas";

// Navigational hotspots: one clickable element per view, id prefixed so the
// view name can be recovered from it.
pub const HOTSPOT_ID_PREFIX: &str = "hotspot-";
pub const HOTSPOT_VIEWS: [&str; 5] = ["universe", "projects", "contact", "languages", "privacy"];

// The flat 2D catalog; while it is open, manual navigation is disabled.
// Visibility is expressed through the class below so the stylesheet decides
// what hidden looks like.
pub const CATALOG_OVERLAY_ID: &str = "catalog-overlay";
pub const CATALOG_TOGGLE_ID: &str = "catalog-toggle";
pub const HIDDEN_CLASS: &str = "hidden";
