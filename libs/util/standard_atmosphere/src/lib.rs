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
mod altitude;
mod conditions;
mod error;
mod layer;
mod model;
mod pressure_table;
pub mod properties;
mod resolver;

pub use crate::{
    altitude::AltitudeConversion,
    conditions::AtmosphericConditions,
    error::{AtmosphereError, Result},
    layer::{AtmosphereStandard, Layer, LayerTable},
    model::{LayerSummary, StandardAtmosphere},
    pressure_table::PressureTable,
    resolver::{LayerPosition, LayerResolver},
};
pub use physical_constants::{PhysicalConstants, STANDARD_CONSTANTS};

use once_cell::sync::Lazy;

/// The ISO 2533 atmosphere, built on first use and shared for the life of the process.
pub static STANDARD_ATMOSPHERE: Lazy<StandardAtmosphere> = Lazy::new(|| {
    StandardAtmosphere::new(AtmosphereStandard::Iso2533, *STANDARD_CONSTANTS)
        .expect("the ISO 2533 layer table integrates to finite pressures")
});
