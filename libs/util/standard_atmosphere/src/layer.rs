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
use std::{fmt, str::FromStr};

/// Which published layer table is in effect. The two agree from sea level upward and
/// differ only in how far below sea level the lowest layer reaches.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AtmosphereStandard {
    /// ISO 2533: lowest layer starts at -2000 m, 301.15 K.
    #[default]
    Iso2533,
    /// ICAO: lowest layer starts at -5000 m, 320.65 K.
    Icao,
}

impl AtmosphereStandard {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iso2533 => "ISO 2533",
            Self::Icao => "ICAO",
        }
    }
}

impl fmt::Display for AtmosphereStandard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AtmosphereStandard {
    type Err = AtmosphereError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "iso" | "iso2533" | "iso-2533" | "iso 2533" => Self::Iso2533,
            "icao" => Self::Icao,
            _ => return Err(AtmosphereError::UnknownStandard(s.to_owned())),
        })
    }
}

/// A band of the atmosphere with a linear temperature profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    /// H_b, geopotential meters
    pub base_altitude: f64,
    /// T_b, kelvin
    pub base_temperature: f64,
    /// B, kelvin per geopotential meter. Absent only on the capping layer, which bounds
    /// the table but never governs an altitude itself.
    pub gradient: Option<f64>,
}

impl Layer {
    pub const fn new(
        name: &'static str,
        base_altitude: f64,
        base_temperature: f64,
        gradient: f64,
    ) -> Self {
        Self {
            name,
            base_altitude,
            base_temperature,
            gradient: Some(gradient),
        }
    }

    pub const fn cap(name: &'static str, base_altitude: f64, base_temperature: f64) -> Self {
        Self {
            name,
            base_altitude,
            base_temperature,
            gradient: None,
        }
    }

    /// Temperature this layer's law predicts at `altitude`.
    pub fn temperature_at(&self, altitude: f64) -> f64 {
        self.base_temperature + self.gradient.unwrap_or(0.) * (altitude - self.base_altitude)
    }
}

const UPPER_LAYERS: [Layer; 8] = [
    Layer::new("troposphere", 0., 288.15, -0.0065),
    Layer::new("tropopause", 11_000., 216.65, 0.),
    Layer::new("lower stratosphere", 20_000., 216.65, 0.001),
    Layer::new("upper stratosphere", 32_000., 228.65, 0.0028),
    Layer::new("stratopause", 47_000., 270.65, 0.),
    Layer::new("lower mesosphere", 51_000., 270.65, -0.0028),
    Layer::new("upper mesosphere", 71_000., 214.65, -0.002),
    Layer::cap("mesopause", 80_000., 196.65),
];

const ISO_2533_FLOOR: Layer = Layer::new("sub-sea-level troposphere", -2_000., 301.15, -0.0065);
const ICAO_FLOOR: Layer = Layer::new("sub-sea-level troposphere", -5_000., 320.65, -0.0065);

/// The ordered, immutable set of layers that make up a standard atmosphere.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerTable {
    layers: Vec<Layer>,
}

impl LayerTable {
    /// Build a custom table. The first layer must start at or below sea level, since the
    /// pressure table is anchored on the sea-level reference values.
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        let table = Self { layers };
        table.validate()?;
        Ok(table)
    }

    pub fn for_standard(standard: AtmosphereStandard) -> Self {
        let floor = match standard {
            AtmosphereStandard::Iso2533 => ISO_2533_FLOOR,
            AtmosphereStandard::Icao => ICAO_FLOOR,
        };
        let mut layers = Vec::with_capacity(UPPER_LAYERS.len() + 1);
        layers.push(floor);
        layers.extend_from_slice(&UPPER_LAYERS);
        Self { layers }
    }

    pub fn iso_2533() -> Self {
        Self::for_standard(AtmosphereStandard::Iso2533)
    }

    pub fn icao() -> Self {
        Self::for_standard(AtmosphereStandard::Icao)
    }

    fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(AtmosphereError::InvalidTable(msg));
        if self.layers.len() < 2 {
            return bad(format!("need at least 2 layers, got {}", self.layers.len()));
        }
        if self.layers[0].base_altitude > 0. {
            return bad(format!(
                "lowest layer must start at or below sea level, starts at {} m",
                self.layers[0].base_altitude
            ));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.base_altitude.is_finite() || !(layer.base_temperature > 0.) {
                return bad(format!("layer {} ({}) has a non-physical base", i, layer.name));
            }
            if i + 1 < self.layers.len() && layer.gradient.map_or(true, |b| !b.is_finite()) {
                return bad(format!("layer {} ({}) has no temperature gradient", i, layer.name));
            }
        }
        for pair in self.layers.windows(2) {
            if pair[0].base_altitude >= pair[1].base_altitude {
                return bad(format!(
                    "layers must ascend strictly: {} m is not below {} m",
                    pair[0].base_altitude, pair[1].base_altitude
                ));
            }
        }
        Ok(())
    }

    /// Worst mismatch, in kelvin, between the temperature a layer's law reaches at the top of
    /// the layer and the tabulated base temperature of the next one.
    pub fn continuity_error(&self) -> f64 {
        self.layers
            .windows(2)
            .map(|pair| (pair[0].temperature_at(pair[1].base_altitude) - pair[1].base_temperature).abs())
            .fold(0., f64::max)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn as_slice(&self) -> &[Layer] {
        &self.layers
    }

    pub fn first(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn last(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }
}

impl std::ops::Index<usize> for LayerTable {
    type Output = Layer;

    fn index(&self, index: usize) -> &Layer {
        &self.layers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_builtin_tables_are_valid() -> Result<()> {
        for standard in [AtmosphereStandard::Iso2533, AtmosphereStandard::Icao] {
            let table = LayerTable::for_standard(standard);
            table.validate()?;
            assert_eq!(table.len(), 9);
            assert_eq!(table.last().base_altitude, 80_000.);
            assert!(table.last().gradient.is_none());
        }
        Ok(())
    }

    #[test]
    fn test_tables_are_continuous() {
        assert_abs_diff_eq!(LayerTable::iso_2533().continuity_error(), 0., epsilon = 1e-9);
        assert_abs_diff_eq!(LayerTable::icao().continuity_error(), 0., epsilon = 1e-9);
    }

    #[test]
    fn test_standards_differ_only_below_sea_level() {
        let iso = LayerTable::iso_2533();
        let icao = LayerTable::icao();
        assert_eq!(iso.first().base_altitude, -2_000.);
        assert_eq!(icao.first().base_altitude, -5_000.);
        assert_eq!(icao.first().base_temperature, 320.65);
        assert_eq!(&iso.as_slice()[1..], &icao.as_slice()[1..]);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        let cap = Layer::cap("cap", 1_000., 281.65);
        assert!(LayerTable::new(vec![cap]).is_err());
        assert!(LayerTable::new(vec![Layer::new("high", 500., 288., -0.0065), cap]).is_err());
        assert!(LayerTable::new(vec![Layer::cap("floor", 0., 288.15), cap]).is_err());
        assert!(LayerTable::new(vec![
            Layer::new("a", 0., 288.15, -0.0065),
            Layer::new("b", 2_000., 275.15, 0.),
            Layer::cap("c", 1_000., 275.15),
        ])
        .is_err());
        assert!(LayerTable::new(vec![Layer::new("a", 0., 288.15, -0.0065), cap]).is_ok());
    }

    #[test]
    fn test_parse_standard() -> Result<()> {
        assert_eq!("iso".parse::<AtmosphereStandard>()?, AtmosphereStandard::Iso2533);
        assert_eq!("ICAO".parse::<AtmosphereStandard>()?, AtmosphereStandard::Icao);
        assert!("us1976".parse::<AtmosphereStandard>().is_err());
        assert_eq!(AtmosphereStandard::default().to_string(), "ISO 2533");
        Ok(())
    }
}
