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
use thiserror::Error;

pub type Result<T, E = AtmosphereError> = std::result::Result<T, E>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AtmosphereError {
    /// The altitude cannot be evaluated at all.
    #[error("invalid altitude {altitude} m: {reason}")]
    InvalidInput { altitude: f64, reason: &'static str },

    /// The altitude is valid, but extrapolating the layer law this far leaves the domain of
    /// the formula (e.g. a non-positive base under a fractional power).
    #[error("{quantity} is undefined at geopotential altitude {altitude} m")]
    Domain {
        quantity: &'static str,
        altitude: f64,
    },

    #[error("malformed layer table: {0}")]
    InvalidTable(String),

    #[error("unknown atmosphere standard '{0}'; expected one of: iso, icao")]
    UnknownStandard(String),
}
