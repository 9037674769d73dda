//! House placement over 12 cusps.

use crate::error::{AnalysisError, Result};
use crate::geometry::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Twelve house cusps, index 0 being the start of the first house.
///
/// Cusps increase circularly; a later cusp may sit numerically below an
/// earlier one when the sequence wraps past 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    pub fn new(cusps: [f64; 12]) -> Self {
        Self(cusps.map(normalize_degrees))
    }

    pub fn from_slice(cusps: &[f64]) -> Result<Self> {
        let array: [f64; 12] = cusps
            .try_into()
            .map_err(|_| AnalysisError::InvalidCusps { count: cusps.len() })?;
        Ok(Self::new(array))
    }

    /// Equal houses of 30° starting at the ascendant.
    pub fn equal_from(ascendant: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = ascendant + 30.0 * i as f64;
        }
        Self::new(cusps)
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }

    /// Cusp of a house numbered 1..=12.
    pub fn cusp(&self, house: u8) -> f64 {
        self.0[(usize::from(house).max(1) - 1) % 12]
    }

    /// House (1..=12) containing `longitude`.
    pub fn house_for(&self, longitude: f64) -> u8 {
        house_for(longitude, &self.0)
    }
}

impl TryFrom<Vec<f64>> for HouseCusps {
    type Error = AnalysisError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::from_slice(&value)
    }
}

impl From<HouseCusps> for Vec<f64> {
    fn from(value: HouseCusps) -> Self {
        value.0.to_vec()
    }
}

/// House (1..=12) containing `longitude`.
///
/// A longitude sitting exactly on a cusp belongs to the house that cusp
/// opens. Falls back to house 12 if no interval matches, which only happens
/// with malformed cusps.
pub fn house_for(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let longitude = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let mut end = cusps[(i + 1) % 12];
        if end < start {
            end += 360.0;
        }
        let lon = if longitude < start { longitude + 360.0 } else { longitude };
        if start <= lon && lon < end {
            return (i + 1) as u8;
        }
    }
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped_cusps() -> HouseCusps {
        HouseCusps::new([
            330.0, 0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0,
        ])
    }

    #[test]
    fn test_house_for_wraparound() {
        let cusps = wrapped_cusps();
        assert_eq!(cusps.house_for(345.0), 1);
        assert_eq!(cusps.house_for(5.0), 2);
        assert_eq!(cusps.house_for(315.0), 12);
    }

    #[test]
    fn test_cusp_boundary_opens_house() {
        let cusps = wrapped_cusps();
        assert_eq!(cusps.house_for(330.0), 1);
        assert_eq!(cusps.house_for(0.0), 2);
        assert_eq!(cusps.house_for(180.0), 8);
    }

    #[test]
    fn test_house_for_irregular_cusps() {
        // Placidus-like cusps with the wrap between houses 9 and 10
        let cusps = HouseCusps::new([
            100.0, 125.0, 155.0, 190.0, 225.0, 255.0, 280.0, 305.0, 335.0, 10.0, 45.0, 75.0,
        ]);
        assert_eq!(cusps.house_for(5.0), 9);
        assert_eq!(cusps.house_for(20.0), 10);
        assert_eq!(cusps.house_for(99.9), 12);
        for step in 0..720 {
            let house = cusps.house_for(step as f64 * 0.5);
            assert!((1..=12).contains(&house));
        }
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = HouseCusps::from_slice(&[0.0; 11]).unwrap_err();
        assert_eq!(err, AnalysisError::InvalidCusps { count: 11 });
    }
}
