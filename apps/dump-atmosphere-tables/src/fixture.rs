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
use anyhow::{anyhow, bail, Context, Result};
use approx::relative_eq;
use json::JsonValue;
use log::trace;
use standard_atmosphere::StandardAtmosphere;

/// One row of a fixture: an altitude and the values expected there, by quantity name.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureCase {
    pub altitude: f64,
    pub expected: Vec<(String, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub altitude: f64,
    pub quantity: String,
    pub expected: f64,
    /// None when the fixture names a quantity the model does not produce.
    pub actual: Option<f64>,
}

/// Parse a JSON array of objects, each with an `altitude` key and any number of
/// `quantity: value` pairs.
pub fn parse_fixture(text: &str) -> Result<Vec<FixtureCase>> {
    let root = json::parse(text).context("fixture is not valid JSON")?;
    if !root.is_array() {
        bail!("fixture must be a JSON array of cases");
    }
    root.members()
        .enumerate()
        .map(|(i, case)| parse_case(case).with_context(|| format!("in fixture case {}", i)))
        .collect()
}

fn parse_case(case: &JsonValue) -> Result<FixtureCase> {
    if !case.is_object() {
        bail!("case must be an object");
    }
    let altitude = case["altitude"]
        .as_f64()
        .ok_or_else(|| anyhow!("case has no numeric altitude"))?;
    let mut expected = Vec::new();
    for (name, value) in case.entries() {
        if name == "altitude" {
            continue;
        }
        let value = value
            .as_f64()
            .ok_or_else(|| anyhow!("{} is not a number", name))?;
        expected.push((name.to_owned(), value));
    }
    Ok(FixtureCase { altitude, expected })
}

/// Evaluate every case and compare each listed quantity within a relative tolerance.
pub fn validate(
    atmosphere: &StandardAtmosphere,
    cases: &[FixtureCase],
    tolerance: f64,
) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();
    for case in cases {
        let conditions = atmosphere
            .evaluate(case.altitude)
            .with_context(|| format!("evaluating fixture altitude {} m", case.altitude))?;
        for (quantity, expected) in &case.expected {
            let actual = conditions.quantity(quantity);
            trace!("{} m {}: {:?} vs {}", case.altitude, quantity, actual, expected);
            let matches = actual.map_or(false, |actual| {
                relative_eq!(
                    actual,
                    *expected,
                    max_relative = tolerance,
                    epsilon = f64::EPSILON
                )
            });
            if !matches {
                mismatches.push(Mismatch {
                    altitude: case.altitude,
                    quantity: quantity.to_owned(),
                    expected: *expected,
                    actual,
                });
            }
        }
    }
    Ok(mismatches)
}
