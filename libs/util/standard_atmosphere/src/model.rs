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
use crate::{
    altitude::AltitudeConversion,
    conditions::AtmosphericConditions,
    error::{AtmosphereError, Result},
    layer::{AtmosphereStandard, Layer, LayerTable},
    pressure_table::{barometric, Anchor, PressureTable},
    properties,
    resolver::LayerResolver,
};
use log::debug;
use physical_constants::{PhysicalConstants, CELSIUS_OFFSET};

const PASCALS_TO_MILLIBAR: f64 = 0.01;
const PASCALS_TO_MMHG: f64 = 0.007_500_62;

/// Base values of one layer, as tabulated plus the derived base pressure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSummary {
    pub name: &'static str,
    pub base_altitude: f64,
    pub base_temperature: f64,
    pub gradient: Option<f64>,
    pub base_pressure: f64,
}

/// The layered standard atmosphere. All tables are built once in the constructor and never
/// change afterward, so a single instance can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct StandardAtmosphere {
    standard: AtmosphereStandard,
    constants: PhysicalConstants,
    layers: LayerTable,
    pressures: PressureTable,
    conversion: AltitudeConversion,
}

impl StandardAtmosphere {
    pub fn new(standard: AtmosphereStandard, constants: PhysicalConstants) -> Result<Self> {
        let layers = LayerTable::for_standard(standard);
        let pressures = PressureTable::new(&layers, &constants)?;
        debug!(
            "built {} atmosphere: {} layers from {} m to {} m",
            standard,
            layers.len(),
            layers.first().base_altitude,
            layers.last().base_altitude
        );
        Ok(Self {
            standard,
            conversion: AltitudeConversion::new(&constants),
            constants,
            layers,
            pressures,
        })
    }

    pub fn iso() -> Result<Self> {
        Self::new(AtmosphereStandard::Iso2533, PhysicalConstants::iso_2533())
    }

    pub fn icao() -> Result<Self> {
        Self::new(AtmosphereStandard::Icao, PhysicalConstants::iso_2533())
    }

    pub fn standard(&self) -> AtmosphereStandard {
        self.standard
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    pub fn pressure_table(&self) -> &PressureTable {
        &self.pressures
    }

    pub fn conversion(&self) -> &AltitudeConversion {
        &self.conversion
    }

    pub fn resolver(&self) -> LayerResolver<'_> {
        LayerResolver::new(&self.layers)
    }

    pub fn layer_summary(&self) -> Vec<LayerSummary> {
        self.layers
            .iter()
            .zip(self.pressures.iter())
            .map(|(layer, base_pressure)| LayerSummary {
                name: layer.name,
                base_altitude: layer.base_altitude,
                base_temperature: layer.base_temperature,
                gradient: layer.gradient,
                base_pressure,
            })
            .collect()
    }

    /// Index of the layer whose law governs `altitude`.
    pub fn locate_layer(&self, altitude: f64) -> Result<usize> {
        Ok(self.governing(altitude)?.0)
    }

    fn governing(&self, altitude: f64) -> Result<(usize, &Layer)> {
        if !altitude.is_finite() {
            return Err(AtmosphereError::InvalidInput {
                altitude,
                reason: "altitude is not a finite number",
            });
        }
        let index = self.resolver().locate_layer(altitude);
        Ok((index, &self.layers[index]))
    }

    /// T = T_b + B * (H - H_b), in kelvin.
    pub fn temperature(&self, altitude: f64) -> Result<f64> {
        let (_, layer) = self.governing(altitude)?;
        let temperature = layer.temperature_at(altitude);
        if !(temperature > 0.) {
            return Err(AtmosphereError::Domain {
                quantity: "temperature",
                altitude,
            });
        }
        Ok(temperature)
    }

    pub fn temperature_celsius(&self, altitude: f64) -> Result<f64> {
        Ok(self.temperature(altitude)? - CELSIUS_OFFSET)
    }

    /// Absolute pressure in Pa, continuous with the pressure table at every layer base.
    pub fn pressure(&self, altitude: f64) -> Result<f64> {
        let (index, layer) = self.governing(altitude)?;
        let anchor = Anchor::for_layer(layer, self.pressures[index], &self.constants);
        // The resolver never selects the capping layer, so a gradient is always present.
        let gradient = layer.gradient.unwrap_or(0.);
        barometric(anchor, gradient, anchor.temperature, altitude, &self.constants)
    }

    pub fn pressure_ratio(&self, altitude: f64) -> Result<f64> {
        Ok(self.pressure(altitude)? / self.constants.sea_level_pressure())
    }

    pub fn pressure_in_millibar(&self, altitude: f64) -> Result<f64> {
        Ok(self.pressure(altitude)? * PASCALS_TO_MILLIBAR)
    }

    pub fn pressure_in_mmhg(&self, altitude: f64) -> Result<f64> {
        Ok(self.pressure(altitude)? * PASCALS_TO_MMHG)
    }

    /// rho = p / (R * T)
    pub fn density(&self, altitude: f64) -> Result<f64> {
        let temperature = self.temperature(altitude)?;
        Ok(self.pressure(altitude)? / (self.constants.specific_gas_constant() * temperature))
    }

    pub fn density_ratio(&self, altitude: f64) -> Result<f64> {
        Ok(self.density(altitude)? / self.constants.sea_level_density())
    }

    pub fn sqrt_density_ratio(&self, altitude: f64) -> Result<f64> {
        Ok(self.density_ratio(altitude)?.sqrt())
    }

    pub fn gravity(&self, altitude: f64) -> Result<f64> {
        self.conversion.gravity_at_geopotential(altitude)
    }

    pub fn specific_weight(&self, altitude: f64) -> Result<f64> {
        Ok(self.density(altitude)? * self.gravity(altitude)?)
    }

    pub fn pressure_scale_height(&self, altitude: f64) -> Result<f64> {
        Ok(properties::pressure_scale_height(
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    /// n = N_A * p / (R* * T)
    pub fn air_number_density(&self, altitude: f64) -> Result<f64> {
        let temperature = self.temperature(altitude)?;
        Ok(self.number_density(self.pressure(altitude)?, temperature))
    }

    fn number_density(&self, pressure: f64, temperature: f64) -> f64 {
        self.constants.avogadro() * pressure
            / (self.constants.universal_gas_constant() * temperature)
    }

    pub fn mean_particle_speed(&self, altitude: f64) -> Result<f64> {
        Ok(properties::mean_particle_speed(
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    pub fn mean_free_path(&self, altitude: f64) -> Result<f64> {
        Ok(properties::mean_free_path(
            self.air_number_density(altitude)?,
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    pub fn collision_frequency(&self, altitude: f64) -> Result<f64> {
        Ok(properties::collision_frequency(
            self.air_number_density(altitude)?,
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    pub fn speed_of_sound(&self, altitude: f64) -> Result<f64> {
        Ok(properties::speed_of_sound(
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    pub fn dynamic_viscosity(&self, altitude: f64) -> Result<f64> {
        Ok(properties::dynamic_viscosity(self.temperature(altitude)?))
    }

    pub fn kinematic_viscosity(&self, altitude: f64) -> Result<f64> {
        Ok(properties::kinematic_viscosity(
            self.temperature(altitude)?,
            &self.constants,
        ))
    }

    pub fn thermal_conductivity(&self, altitude: f64) -> Result<f64> {
        Ok(properties::thermal_conductivity(self.temperature(altitude)?))
    }

    /// Compute every quantity at a geopotential altitude in one pass.
    pub fn evaluate(&self, altitude: f64) -> Result<AtmosphericConditions> {
        let geometric_altitude = self.conversion.geometric_from_geopotential(altitude)?;
        let gravity = self.conversion.gravity(geometric_altitude)?;
        let (layer, governing) = self.governing(altitude)?;
        let extrapolated = !self.resolver().in_tabulated_range(altitude);
        if extrapolated {
            debug!(
                "{} m is outside the {} table; extrapolating layer {} ({})",
                altitude, self.standard, layer, governing.name
            );
        }

        let c = &self.constants;
        let temperature = self.temperature(altitude)?;
        let pressure = self.pressure(altitude)?;
        let density = pressure / (c.specific_gas_constant() * temperature);
        let density_ratio = density / c.sea_level_density();
        let air_number_density = self.number_density(pressure, temperature);

        Ok(AtmosphericConditions {
            standard: self.standard,
            layer,
            layer_name: governing.name,
            extrapolated,
            geopotential_altitude: altitude,
            geometric_altitude,
            temperature,
            temperature_celsius: temperature - CELSIUS_OFFSET,
            pressure,
            pressure_mbar: pressure * PASCALS_TO_MILLIBAR,
            pressure_mmhg: pressure * PASCALS_TO_MMHG,
            pressure_ratio: pressure / c.sea_level_pressure(),
            density,
            density_ratio,
            sqrt_density_ratio: density_ratio.sqrt(),
            gravity,
            specific_weight: density * gravity,
            pressure_scale_height: properties::pressure_scale_height(temperature, c),
            air_number_density,
            mean_particle_speed: properties::mean_particle_speed(temperature, c),
            mean_free_path: properties::mean_free_path(air_number_density, temperature, c),
            collision_frequency: properties::collision_frequency(
                air_number_density,
                temperature,
                c,
            ),
            speed_of_sound: properties::speed_of_sound(temperature, c),
            dynamic_viscosity: properties::dynamic_viscosity(temperature),
            kinematic_viscosity: properties::kinematic_viscosity(temperature, c),
            thermal_conductivity: properties::thermal_conductivity(temperature),
        })
    }

    /// As `evaluate`, for a geometric altitude above mean sea level.
    pub fn evaluate_geometric(&self, geometric_altitude: f64) -> Result<AtmosphericConditions> {
        self.evaluate(
            self.conversion
                .geopotential_from_geometric(geometric_altitude)?,
        )
    }
}
