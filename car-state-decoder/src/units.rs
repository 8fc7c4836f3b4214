//! Speed unit conversion constants
//!
//! The internal speed unit is meters per second. Bus signals report set
//! speed in km/h (or mph on some markets), so the conversion factors live
//! here rather than being inlined at each use site.

/// km/h to m/s
pub const KPH_TO_MS: f64 = 1.0 / 3.6;
/// m/s to km/h
pub const MS_TO_KPH: f64 = 3.6;
/// mph to m/s
pub const MPH_TO_MS: f64 = 0.44704;
/// m/s to mph
pub const MS_TO_MPH: f64 = 1.0 / MPH_TO_MS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kph_roundtrip() {
        let v = 100.0 * KPH_TO_MS;
        assert!((v - 27.7778).abs() < 1e-3);
        assert!((v * MS_TO_KPH - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_mph_roundtrip() {
        let v = 60.0 * MPH_TO_MS;
        assert!((v * MS_TO_MPH - 60.0).abs() < 1e-9);
    }
}
