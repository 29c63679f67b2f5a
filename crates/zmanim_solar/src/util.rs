//! Degree-based trigonometry for the almanac formulas.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}
