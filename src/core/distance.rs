use crate::models::{BoundingBox, Coordinate};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Relative slack on the box so points exactly on the radius survive rounding
const BOX_SLACK: f64 = 1e-9;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates in kilometers
///
/// Symmetric and zero for identical points. Coordinates are not validated;
/// callers range-check latitude and longitude on ingestion.
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Human-readable distance: whole meters below 1 km, otherwise km to one decimal
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round())
    } else {
        format!("{:.1}km", distance_km)
    }
}

/// Calculate a bounding box around a center point
///
/// Cheaper than Haversine for pre-filtering. The box encloses every point
/// within `radius_km` of `center` on the sphere:
/// latitude spans r/R radians, longitude spans asin(sin(r/R) / cos(lat)).
///
/// When the circle reaches a pole, or the box would cross the antimeridian,
/// the longitude span widens to the whole globe. Latitude bounds are clamped
/// to [-90, 90].
pub fn calculate_bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    let angular = radius_km / EARTH_RADIUS_KM * (1.0 + BOX_SLACK);
    let lat_delta = angular.to_degrees();
    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;

    let sin_angular = angular.sin();
    let cos_lat = center.latitude.to_radians().cos();
    let reaches_pole = min_lat <= -90.0 || max_lat >= 90.0 || sin_angular >= cos_lat;

    let (min_lon, max_lon) = if reaches_pole {
        (-180.0, 180.0)
    } else {
        let lon_delta = (sin_angular / cos_lat).asin().to_degrees();
        let min_lon = center.longitude - lon_delta;
        let max_lon = center.longitude + lon_delta;
        if min_lon < -180.0 || max_lon > 180.0 {
            (-180.0, 180.0)
        } else {
            (min_lon, max_lon)
        }
    };

    BoundingBox {
        min_lat: min_lat.max(-90.0),
        max_lat: max_lat.min(90.0),
        min_lon,
        max_lon,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: Coordinate, bbox: &BoundingBox) -> bool {
    point.latitude >= bbox.min_lat
        && point.latitude <= bbox.max_lat
        && point.longitude >= bbox.min_lon
        && point.longitude <= bbox.max_lon
}
