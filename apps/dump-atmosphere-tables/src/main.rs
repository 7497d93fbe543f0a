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
mod fixture;
mod table;

use anyhow::{bail, ensure, Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use standard_atmosphere::{AtmosphereStandard, PhysicalConstants, StandardAtmosphere};
use std::{fs, path::PathBuf, time::Instant};
use structopt::StructOpt;

const MAX_RANGE_ROWS: usize = 1_000_000;

/// Evaluate the standard atmosphere and print or validate the results
#[derive(Debug, StructOpt)]
struct Opt {
    /// Layer table to use: iso or icao
    #[structopt(short, long, default_value = "iso")]
    standard: AtmosphereStandard,

    /// Altitudes to evaluate, in meters
    #[structopt(short, long, allow_hyphen_values = true, number_of_values = 1)]
    altitude: Vec<f64>,

    /// Start of an evenly spaced range of altitudes, in meters
    #[structopt(long, allow_hyphen_values = true)]
    from: Option<f64>,

    /// End of the range, inclusive
    #[structopt(long, allow_hyphen_values = true)]
    to: Option<f64>,

    /// Spacing of the range
    #[structopt(long, default_value = "1000")]
    step: f64,

    /// Interpret altitudes as geometric rather than geopotential
    #[structopt(short, long)]
    geometric: bool,

    /// Print the layer table with derived base pressures
    #[structopt(short, long)]
    layers: bool,

    /// Compare against expected values from a JSON fixture
    #[structopt(long)]
    fixture: Option<PathBuf>,

    /// Relative tolerance for fixture comparisons
    #[structopt(long, default_value = "1e-6")]
    tolerance: f64,
}

impl Opt {
    fn altitudes(&self) -> Result<Vec<f64>> {
        let mut altitudes = self.altitude.clone();
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                ensure!(
                    from.is_finite() && to.is_finite(),
                    "range bounds must be finite, got {} to {}",
                    from,
                    to
                );
                ensure!(
                    self.step.is_finite() && self.step > 0.,
                    "step must be positive, got {}",
                    self.step
                );
                ensure!(from <= to, "range start {} is above its end {}", from, to);
                let count = ((to - from) / self.step).floor();
                ensure!(
                    count < MAX_RANGE_ROWS as f64,
                    "range of {} to {} by {} exceeds {} rows",
                    from,
                    to,
                    self.step,
                    MAX_RANGE_ROWS
                );
                altitudes.extend((0..=count as usize).map(|i| from + i as f64 * self.step));
            }
            (None, None) => {}
            _ => bail!("--from and --to must be given together"),
        }
        Ok(altitudes)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let atmosphere = StandardAtmosphere::new(opt.standard, PhysicalConstants::iso_2533())?;
    info!("using the {} layer table", atmosphere.standard());

    if opt.layers {
        print!("{}", table::format_layers(&atmosphere)?);
    }

    if let Some(path) = &opt.fixture {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        let cases = fixture::parse_fixture(&text)?;
        let mismatches = fixture::validate(&atmosphere, &cases, opt.tolerance)?;
        for m in &mismatches {
            match m.actual {
                Some(actual) => println!(
                    "MISMATCH {} m {}: expected {:e}, computed {:e}",
                    m.altitude, m.quantity, m.expected, actual
                ),
                None => println!("MISMATCH {} m {}: unknown quantity", m.altitude, m.quantity),
            }
        }
        let checked = cases.iter().map(|c| c.expected.len()).sum::<usize>();
        println!(
            "{} cases, {} values checked, {} mismatches",
            cases.len(),
            checked,
            mismatches.len()
        );
        ensure!(mismatches.is_empty(), "fixture validation failed");
    }

    let altitudes = opt.altitudes()?;
    if altitudes.is_empty() {
        return Ok(());
    }
    let start = Instant::now();
    let rows = altitudes
        .par_iter()
        .map(|&altitude| {
            let conditions = if opt.geometric {
                atmosphere.evaluate_geometric(altitude)
            } else {
                atmosphere.evaluate(altitude)
            };
            conditions.with_context(|| format!("evaluating {} m", altitude))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("evaluated {} altitudes in {:?}", rows.len(), start.elapsed());
    print!("{}", table::format_conditions(&rows)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_range() -> Result<()> {
        let opt = Opt::from_iter(&["dump", "-a", "-500", "--from", "-2000", "--to", "1000"]);
        assert_eq!(opt.standard, AtmosphereStandard::Iso2533);
        assert_eq!(opt.altitudes()?, vec![-500., -2000., -1000., 0., 1000.]);
        Ok(())
    }

    #[test]
    fn test_bad_ranges() {
        let half = Opt::from_iter(&["dump", "--from", "0"]);
        assert!(half.altitudes().is_err());
        let backward = Opt::from_iter(&["dump", "--from", "10", "--to", "0"]);
        assert!(backward.altitudes().is_err());
        let still = Opt::from_iter(&["dump", "--from", "0", "--to", "10", "--step", "0"]);
        assert!(still.altitudes().is_err());
    }

    #[test]
    fn test_unbounded_ranges() {
        let endless = Opt::from_iter(&["dump", "--from", "0", "--to", "inf"]);
        assert!(endless.altitudes().is_err());
        let nan = Opt::from_iter(&["dump", "--from", "NaN", "--to", "10"]);
        assert!(nan.altitudes().is_err());
        let dense = Opt::from_iter(&["dump", "--from", "0", "--to", "80000", "--step", "1e-3"]);
        assert!(dense.altitudes().is_err());
        let bad_step = Opt::from_iter(&["dump", "--from", "0", "--to", "10", "--step", "inf"]);
        assert!(bad_step.altitudes().is_err());
    }

    #[test]
    fn test_fine_range_is_allowed() -> Result<()> {
        let opt = Opt::from_iter(&["dump", "--from", "0", "--to", "1000", "--step", "0.5"]);
        assert_eq!(opt.altitudes()?.len(), 2_001);
        Ok(())
    }

    #[test]
    fn test_standard_option() {
        let opt = Opt::from_iter(&["dump", "--standard", "icao", "-g"]);
        assert_eq!(opt.standard, AtmosphereStandard::Icao);
        assert!(opt.geometric);
    }
}
