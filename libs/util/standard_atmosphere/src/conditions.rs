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
use crate::layer::AtmosphereStandard;

/// Every quantity the model computes at a single altitude.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphericConditions {
    pub standard: AtmosphereStandard,
    /// Index of the governing layer.
    pub layer: usize,
    pub layer_name: &'static str,
    /// The altitude is outside the tabulated layers and was evaluated by extending the
    /// nearest layer's law.
    pub extrapolated: bool,

    /// m'
    pub geopotential_altitude: f64,
    /// m
    pub geometric_altitude: f64,
    /// K
    pub temperature: f64,
    /// °C
    pub temperature_celsius: f64,
    /// Pa
    pub pressure: f64,
    /// mbar
    pub pressure_mbar: f64,
    /// mmHg
    pub pressure_mmhg: f64,
    pub pressure_ratio: f64,
    /// kg/m^3
    pub density: f64,
    pub density_ratio: f64,
    pub sqrt_density_ratio: f64,
    /// m/s^2
    pub gravity: f64,
    /// N/m^3
    pub specific_weight: f64,
    /// m
    pub pressure_scale_height: f64,
    /// 1/m^3
    pub air_number_density: f64,
    /// m/s
    pub mean_particle_speed: f64,
    /// 0.944407e-18 * n * sqrt(R * T), in the units that expression yields (1/s)
    pub mean_free_path: f64,
    /// 1/s
    pub collision_frequency: f64,
    /// m/s
    pub speed_of_sound: f64,
    /// Pa*s
    pub dynamic_viscosity: f64,
    /// m^2/s
    pub kinematic_viscosity: f64,
    /// W/(m*K)
    pub thermal_conductivity: f64,
}

impl AtmosphericConditions {
    /// Names accepted by `quantity`, in display order.
    pub const QUANTITIES: [&'static str; 22] = [
        "geopotential_altitude",
        "geometric_altitude",
        "temperature",
        "temperature_celsius",
        "pressure",
        "pressure_mbar",
        "pressure_mmhg",
        "pressure_ratio",
        "density",
        "density_ratio",
        "sqrt_density_ratio",
        "gravity",
        "specific_weight",
        "pressure_scale_height",
        "air_number_density",
        "mean_particle_speed",
        "mean_free_path",
        "collision_frequency",
        "speed_of_sound",
        "dynamic_viscosity",
        "kinematic_viscosity",
        "thermal_conductivity",
    ];

    /// Look up a computed value by name, for callers that compare field by field.
    pub fn quantity(&self, name: &str) -> Option<f64> {
        Some(match name {
            "geopotential_altitude" | "altitude" => self.geopotential_altitude,
            "geometric_altitude" => self.geometric_altitude,
            "temperature" => self.temperature,
            "temperature_celsius" => self.temperature_celsius,
            "pressure" => self.pressure,
            "pressure_mbar" => self.pressure_mbar,
            "pressure_mmhg" => self.pressure_mmhg,
            "pressure_ratio" => self.pressure_ratio,
            "density" => self.density,
            "density_ratio" => self.density_ratio,
            "sqrt_density_ratio" => self.sqrt_density_ratio,
            "gravity" => self.gravity,
            "specific_weight" => self.specific_weight,
            "pressure_scale_height" => self.pressure_scale_height,
            "air_number_density" => self.air_number_density,
            "mean_particle_speed" => self.mean_particle_speed,
            "mean_free_path" => self.mean_free_path,
            "collision_frequency" => self.collision_frequency,
            "speed_of_sound" => self.speed_of_sound,
            "dynamic_viscosity" => self.dynamic_viscosity,
            "kinematic_viscosity" => self.kinematic_viscosity,
            "thermal_conductivity" => self.thermal_conductivity,
            _ => return None,
        })
    }

    pub fn quantities(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::QUANTITIES
            .iter()
            .filter_map(move |&name| self.quantity(name).map(|v| (name, v)))
    }
}
