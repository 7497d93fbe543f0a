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
    error::{AtmosphereError, Result},
    layer::{Layer, LayerTable},
};
use log::trace;
use physical_constants::PhysicalConstants;

/// Reference point a pressure law is integrated from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Anchor {
    pub pressure: f64,
    pub altitude: f64,
    pub temperature: f64,
}

impl Anchor {
    pub(crate) fn sea_level(constants: &PhysicalConstants) -> Self {
        Self {
            pressure: constants.sea_level_pressure(),
            altitude: 0.,
            temperature: constants.sea_level_temperature(),
        }
    }

    /// Layers starting at or below sea level are pinned to the sea-level reference values
    /// rather than their own tabulated base.
    pub(crate) fn for_layer(
        layer: &Layer,
        base_pressure: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        if layer.base_altitude <= 0. {
            Self::sea_level(constants)
        } else {
            Self {
                pressure: base_pressure,
                altitude: layer.base_altitude,
                temperature: layer.base_temperature,
            }
        }
    }
}

/// Barotropic law when the gradient is non-zero, isothermal law (at `temperature`) otherwise.
pub(crate) fn barometric(
    anchor: Anchor,
    gradient: f64,
    temperature: f64,
    altitude: f64,
    constants: &PhysicalConstants,
) -> Result<f64> {
    let g = constants.standard_gravity();
    let r = constants.specific_gas_constant();
    let dh = altitude - anchor.altitude;
    if gradient != 0. {
        let base = 1. + gradient / anchor.temperature * dh;
        if !(base > 0.) {
            return Err(AtmosphereError::Domain {
                quantity: "pressure",
                altitude,
            });
        }
        Ok(anchor.pressure * base.powf(-g / (gradient * r)))
    } else {
        Ok(anchor.pressure * (-(g / (r * temperature)) * dh).exp())
    }
}

/// Absolute pressure at the base of every layer, computed once, bottom up.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureTable {
    pressures: Vec<f64>,
}

impl PressureTable {
    pub fn new(table: &LayerTable, constants: &PhysicalConstants) -> Result<Self> {
        let pressures = table.iter().enumerate().try_fold(
            Vec::with_capacity(table.len()),
            |mut acc, (i, layer)| {
                // Each base is reached by integrating the law of the layer beneath it.
                let reference = &table[i.saturating_sub(1)];
                let below = acc
                    .last()
                    .copied()
                    .unwrap_or_else(|| constants.sea_level_pressure());
                let anchor = Anchor::for_layer(reference, below, constants);
                let pressure = barometric(
                    anchor,
                    reference.gradient.unwrap_or(0.),
                    layer.base_temperature,
                    layer.base_altitude,
                    constants,
                )?;
                trace!(
                    "base pressure of layer {} ({}) at {} m: {} Pa",
                    i,
                    layer.name,
                    layer.base_altitude,
                    pressure
                );
                acc.push(pressure);
                Ok::<_, AtmosphereError>(acc)
            },
        )?;
        Ok(Self { pressures })
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.pressures.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.pressures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.pressures.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.pressures
    }
}

impl std::ops::Index<usize> for PressureTable {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.pressures[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physical_constants::STANDARD_CONSTANTS;

    const ISO_BASE_PRESSURES: [f64; 9] = [
        127_773.729_684_483_36,
        101_325.,
        22_632.040_596_934_745,
        5_474.877_660_660_028,
        868.015_837_749_366_3,
        110.905_784_553_914_73,
        66.938_535_373_039_16,
        3.956_392_754_582_872,
        0.886_272_391_300_298_9,
    ];

    #[test]
    fn test_iso_base_pressures() -> Result<()> {
        let pressures = PressureTable::new(&LayerTable::iso_2533(), &STANDARD_CONSTANTS)?;
        assert_eq!(pressures.len(), 9);
        for (actual, expect) in pressures.iter().zip(ISO_BASE_PRESSURES) {
            assert_relative_eq!(actual, expect, max_relative = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_sea_level_layer_is_anchored() -> Result<()> {
        let pressures = PressureTable::new(&LayerTable::icao(), &STANDARD_CONSTANTS)?;
        assert_eq!(pressures[1], STANDARD_CONSTANTS.sea_level_pressure());
        assert_relative_eq!(pressures[0], 177_687.044_237_894_82, max_relative = 1e-9);
        // Everything from sea level up is shared with ISO 2533.
        for i in 1..pressures.len() {
            assert_relative_eq!(pressures[i], ISO_BASE_PRESSURES[i], max_relative = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_monotonically_decreasing() -> Result<()> {
        let pressures = PressureTable::new(&LayerTable::iso_2533(), &STANDARD_CONSTANTS)?;
        assert!(pressures.as_slice().windows(2).all(|p| p[0] > p[1]));
        Ok(())
    }

    #[test]
    fn test_barotropic_domain() {
        let anchor = Anchor::sea_level(&STANDARD_CONSTANTS);
        // T reaches zero at 288.15 / 0.0065 m above the anchor.
        let res = barometric(anchor, -0.0065, 288.15, 50_000., &STANDARD_CONSTANTS);
        assert!(matches!(res, Err(AtmosphereError::Domain { .. })));
    }

    #[test]
    fn test_isothermal_law() -> Result<()> {
        let c = &*STANDARD_CONSTANTS;
        let anchor = Anchor {
            pressure: 1_000.,
            altitude: 10_000.,
            temperature: 250.,
        };
        let scale_height = c.specific_gas_constant() * 250. / c.standard_gravity();
        let p = barometric(anchor, 0., 250., 10_000. + scale_height, c)?;
        assert_relative_eq!(p, 1_000. / std::f64::consts::E, max_relative = 1e-12);
        Ok(())
    }
}
