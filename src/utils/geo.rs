/// Validates a WGS84 point given as (longitude, latitude).
pub fn validate_point(longitude: f64, latitude: f64) -> Result<(), String> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180".to_string());
    }
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_points() {
        assert!(validate_point(77.209, 28.6139).is_ok());
        assert!(validate_point(-180.0, -90.0).is_ok());
        assert!(validate_point(180.0, 90.0).is_ok());
        assert!(validate_point(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(validate_point(180.01, 0.0).is_err());
        assert!(validate_point(-200.0, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(validate_point(0.0, 90.5).is_err());
        assert!(validate_point(0.0, -91.0).is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(validate_point(f64::NAN, 0.0).is_err());
        assert!(validate_point(0.0, f64::INFINITY).is_err());
    }
}
