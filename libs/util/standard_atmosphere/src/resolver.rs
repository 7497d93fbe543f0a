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
use crate::layer::LayerTable;

/// Where an altitude falls relative to the tabulated layers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayerPosition {
    /// Below the base of the lowest layer.
    BelowRange,
    /// At or above the base of layer `i` and below the base of layer `i + 1`.
    InRange(usize),
    /// At or above the base of the capping layer. The cap's base itself is still tabulated;
    /// use `in_tabulated_range` to decide whether a value is extrapolated.
    AboveRange,
}

/// Finds the layer whose law governs a given geopotential altitude.
#[derive(Clone, Copy, Debug)]
pub struct LayerResolver<'a> {
    table: &'a LayerTable,
}

impl<'a> LayerResolver<'a> {
    pub fn new(table: &'a LayerTable) -> Self {
        Self { table }
    }

    pub fn classify(&self, altitude: f64) -> LayerPosition {
        // Number of layers whose base is at or below the altitude.
        let at_or_below = self
            .table
            .as_slice()
            .partition_point(|layer| layer.base_altitude <= altitude);
        if at_or_below == 0 {
            LayerPosition::BelowRange
        } else if at_or_below == self.table.len() {
            LayerPosition::AboveRange
        } else {
            LayerPosition::InRange(at_or_below - 1)
        }
    }

    /// Index of the governing layer. Altitudes below the table use the lowest layer; altitudes
    /// at or above the capping layer use the layer beneath it, as the cap has no gradient.
    pub fn locate_layer(&self, altitude: f64) -> usize {
        match self.classify(altitude) {
            LayerPosition::BelowRange => 0,
            LayerPosition::InRange(i) => i,
            LayerPosition::AboveRange => self.table.len() - 2,
        }
    }

    /// True when the altitude lies within [H_0, H_last].
    pub fn in_tabulated_range(&self, altitude: f64) -> bool {
        altitude >= self.table.first().base_altitude && altitude <= self.table.last().base_altitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_and_boundaries() {
        let table = LayerTable::iso_2533();
        let resolver = LayerResolver::new(&table);
        assert_eq!(resolver.locate_layer(-1_000.), 0);
        assert_eq!(resolver.locate_layer(0.), 1);
        assert_eq!(resolver.locate_layer(10_999.999), 1);
        assert_eq!(resolver.locate_layer(11_000.), 2);
        assert_eq!(resolver.locate_layer(15_000.), 2);
        assert_eq!(resolver.locate_layer(20_000.), 3);
        assert_eq!(resolver.locate_layer(79_999.), 7);
    }

    #[test]
    fn test_every_base_selects_its_own_layer() {
        let table = LayerTable::iso_2533();
        let resolver = LayerResolver::new(&table);
        for (i, layer) in table.iter().enumerate().take(table.len() - 1) {
            assert_eq!(resolver.locate_layer(layer.base_altitude), i);
            assert_eq!(resolver.classify(layer.base_altitude), LayerPosition::InRange(i));
        }
    }

    #[test]
    fn test_out_of_range() {
        let table = LayerTable::iso_2533();
        let resolver = LayerResolver::new(&table);
        assert_eq!(resolver.classify(-2_000.1), LayerPosition::BelowRange);
        assert_eq!(resolver.locate_layer(-10_000.), 0);
        assert_eq!(resolver.classify(80_000.), LayerPosition::AboveRange);
        assert_eq!(resolver.locate_layer(80_000.), 7);
        assert_eq!(resolver.locate_layer(120_000.), 7);
        assert_eq!(resolver.classify(90_000.), LayerPosition::AboveRange);
        assert_eq!(resolver.classify(0.), LayerPosition::InRange(1));
    }

    #[test]
    fn test_tabulated_range_is_inclusive() {
        let table = LayerTable::iso_2533();
        let resolver = LayerResolver::new(&table);
        assert!(resolver.in_tabulated_range(-2_000.));
        assert!(resolver.in_tabulated_range(80_000.));
        assert!(!resolver.in_tabulated_range(80_000.5));
        assert!(!resolver.in_tabulated_range(-2_000.5));

        let icao = LayerTable::icao();
        assert!(LayerResolver::new(&icao).in_tabulated_range(-4_000.));
    }
}
