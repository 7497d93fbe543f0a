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
use once_cell::sync::Lazy;

/// Offset between the kelvin and celsius scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// The constants shared by every standard atmosphere computation, as tabulated in ISO 2533.
pub static STANDARD_CONSTANTS: Lazy<PhysicalConstants> = Lazy::new(PhysicalConstants::iso_2533);

pub static STANDARD_GRAVITY: Lazy<f64> = Lazy::new(|| STANDARD_CONSTANTS.standard_gravity());
pub static EARTH_RADIUS: Lazy<f64> = Lazy::new(|| STANDARD_CONSTANTS.radius());

/// Primitive constants plus the two quantities derived from them. The derived values are
/// always computed from the primitives so that the set is self-consistent; there is no
/// way to construct one with a hand-written molar mass or gas constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    // m/s^2
    standard_gravity: f64,
    // 1/mol
    avogadro: f64,
    // Pa
    sea_level_pressure: f64,
    // kg/m^3
    sea_level_density: f64,
    // K
    sea_level_temperature: f64,
    // J/(mol*K)
    universal_gas_constant: f64,
    // m
    radius: f64,
    adiabatic_index: f64,

    // Derived: kg/mol and J/(kg*K)
    molar_mass: f64,
    specific_gas_constant: f64,
}

impl PhysicalConstants {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        standard_gravity: f64,
        avogadro: f64,
        sea_level_pressure: f64,
        sea_level_density: f64,
        sea_level_temperature: f64,
        universal_gas_constant: f64,
        radius: f64,
        adiabatic_index: f64,
    ) -> Self {
        let molar_mass =
            sea_level_density * universal_gas_constant * sea_level_temperature / sea_level_pressure;
        let specific_gas_constant = universal_gas_constant / molar_mass;
        Self {
            standard_gravity,
            avogadro,
            sea_level_pressure,
            sea_level_density,
            sea_level_temperature,
            universal_gas_constant,
            radius,
            adiabatic_index,
            molar_mass,
            specific_gas_constant,
        }
    }

    pub fn iso_2533() -> Self {
        Self::new(
            9.806_65,
            602.257e21,
            101_325.,
            1.225,
            288.15,
            8.314_32,
            6_356_766.,
            1.4,
        )
    }

    /// g_n
    pub fn standard_gravity(&self) -> f64 {
        self.standard_gravity
    }

    /// N_A
    pub fn avogadro(&self) -> f64 {
        self.avogadro
    }

    /// p_n
    pub fn sea_level_pressure(&self) -> f64 {
        self.sea_level_pressure
    }

    /// rho_n
    pub fn sea_level_density(&self) -> f64 {
        self.sea_level_density
    }

    /// T_n
    pub fn sea_level_temperature(&self) -> f64 {
        self.sea_level_temperature
    }

    /// R*
    pub fn universal_gas_constant(&self) -> f64 {
        self.universal_gas_constant
    }

    /// Nominal earth radius used for the geopotential conversion.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// k, the ratio of specific heats of air.
    pub fn adiabatic_index(&self) -> f64 {
        self.adiabatic_index
    }

    /// M = rho_n * R* * T_n / p_n
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// R = R* / M
    pub fn specific_gas_constant(&self) -> f64 {
        self.specific_gas_constant
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        *STANDARD_CONSTANTS
    }
}
