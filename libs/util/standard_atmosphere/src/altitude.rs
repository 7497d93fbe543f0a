// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::error::{AtmosphereError, Result};
use physical_constants::PhysicalConstants;

/// Converts between geopotential altitude (H), in which gravity is treated as the constant
/// g_n, and geometric altitude (h) above mean sea level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltitudeConversion {
    radius: f64,
    standard_gravity: f64,
}

impl AltitudeConversion {
    pub fn new(constants: &PhysicalConstants) -> Self {
        Self {
            radius: constants.radius(),
            standard_gravity: constants.standard_gravity(),
        }
    }

    /// h = r * H / (r - H)
    pub fn geometric_from_geopotential(&self, geopotential: f64) -> Result<f64> {
        check(
            geopotential,
            self.radius - geopotential,
            "geopotential altitude equals the earth radius",
        )?;
        Ok(self.radius * geopotential / (self.radius - geopotential))
    }

    /// H = r * h / (r + h)
    pub fn geopotential_from_geometric(&self, geometric: f64) -> Result<f64> {
        check(geometric, self.radius + geometric, AT_CENTER)?;
        Ok(self.radius * geometric / (self.radius + geometric))
    }

    /// g(h) = g_n * (r / (r + h))^2
    pub fn gravity(&self, geometric: f64) -> Result<f64> {
        check(geometric, self.radius + geometric, AT_CENTER)?;
        Ok(self.standard_gravity * (self.radius / (self.radius + geometric)).powi(2))
    }

    pub fn gravity_at_geopotential(&self, geopotential: f64) -> Result<f64> {
        self.gravity(self.geometric_from_geopotential(geopotential)?)
    }
}

impl Default for AltitudeConversion {
    fn default() -> Self {
        Self::new(&physical_constants::STANDARD_CONSTANTS)
    }
}

const AT_CENTER: &str = "geometric altitude is at the earth's center";

fn check(altitude: f64, denominator: f64, reason: &'static str) -> Result<()> {
    if !altitude.is_finite() {
        return Err(AtmosphereError::InvalidInput {
            altitude,
            reason: "altitude is not a finite number",
        });
    }
    if denominator == 0. {
        return Err(AtmosphereError::InvalidInput { altitude, reason });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_trip() -> Result<()> {
        let conv = AltitudeConversion::default();
        let mut h = -2_000.;
        while h <= 80_000. {
            let back = conv.geopotential_from_geometric(conv.geometric_from_geopotential(h)?)?;
            assert_relative_eq!(back, h, max_relative = 1e-6, epsilon = 1e-9);
            h += 250.;
        }
        Ok(())
    }

    #[test]
    fn test_geometric_is_above_geopotential() -> Result<()> {
        let conv = AltitudeConversion::default();
        assert_eq!(conv.geometric_from_geopotential(0.)?, 0.);
        assert!(conv.geometric_from_geopotential(11_000.)? > 11_000.);
        assert_relative_eq!(
            conv.geometric_from_geopotential(11_000.)?,
            11_019.068,
            epsilon = 1e-3
        );
        Ok(())
    }

    #[test]
    fn test_gravity() -> Result<()> {
        let conv = AltitudeConversion::default();
        assert_relative_eq!(conv.gravity(0.)?, 9.80665);
        assert_relative_eq!(
            conv.gravity_at_geopotential(11_000.)?,
            9.772_739_733,
            epsilon = 1e-8
        );
        assert!(conv.gravity_at_geopotential(-2_000.)? > 9.80665);
        Ok(())
    }

    #[test]
    fn test_undefined_inputs() {
        let conv = AltitudeConversion::default();
        assert!(matches!(
            conv.geometric_from_geopotential(6_356_766.),
            Err(AtmosphereError::InvalidInput { .. })
        ));
        assert!(conv.geopotential_from_geometric(-6_356_766.).is_err());
        assert!(conv.gravity(f64::NAN).is_err());
        assert!(conv.geometric_from_geopotential(f64::INFINITY).is_err());
    }
}
