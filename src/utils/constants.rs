/// Default monitoring location: Altamont, Oregon.
pub const DEFAULT_LATITUDE: f64 = 44.1292;
pub const DEFAULT_LONGITUDE: f64 = -121.7689;

/// Auto-refresh period for the environmental snapshot.
pub const REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1000;

pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_DEFAULT_ZOOM: u32 = 10;
