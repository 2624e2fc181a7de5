//! Great-circle distance on a spherical Earth

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// haversin(θ) = sin²(θ/2)
fn hsin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Distance in miles between two points given in decimal degrees.
///
/// Uses the haversine formula. The intermediate term is clamped to `[0, 1]`
/// so rounding can never push `asin` outside its domain.
#[must_use]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let la1 = lat1.to_radians();
    let lo1 = lon1.to_radians();
    let la2 = lat2.to_radians();
    let lo2 = lon2.to_radians();

    let h = hsin(la2 - la1) + la1.cos() * la2.cos() * hsin(lo2 - lo1);
    2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
}
