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
use standard_atmosphere::{AtmosphericConditions, StandardAtmosphere};
use std::fmt::{self, Write};

/// Render one header line plus one line per altitude, every quantity in its own column.
pub fn format_conditions(rows: &[AtmosphericConditions]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{:<26}", "layer")?;
    for name in AtmosphericConditions::QUANTITIES {
        write!(out, " {:>22}", name)?;
    }
    out.push('\n');
    for row in rows {
        let layer = format!(
            "{}{} {}",
            if row.extrapolated { "*" } else { "" },
            row.layer,
            row.layer_name
        );
        write!(out, "{:<26}", layer)?;
        for (_, value) in row.quantities() {
            write!(out, " {:>22.9e}", value)?;
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn format_layers(atmosphere: &StandardAtmosphere) -> Result<String, fmt::Error> {
    let mut out = format!("{} layer table\n", atmosphere.standard());
    writeln!(
        out,
        "{:>3} {:<26} {:>10} {:>10} {:>10} {:>18}",
        "#", "name", "H_b (m)", "T_b (K)", "B (K/m)", "p_b (Pa)"
    )?;
    for (i, layer) in atmosphere.layer_summary().iter().enumerate() {
        let gradient = layer
            .gradient
            .map(|b| format!("{:.4}", b))
            .unwrap_or_else(|| "-".to_owned());
        writeln!(
            out,
            "{:>3} {:<26} {:>10} {:>10.2} {:>10} {:>18.9e}",
            i, layer.name, layer.base_altitude, layer.base_temperature, gradient, layer.base_pressure
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use standard_atmosphere::STANDARD_ATMOSPHERE;

    #[test]
    fn test_one_line_per_row() -> Result<()> {
        let rows = vec![
            STANDARD_ATMOSPHERE.evaluate(0.)?,
            STANDARD_ATMOSPHERE.evaluate(90_000.)?,
        ];
        let text = format_conditions(&rows)?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("speed_of_sound"));
        assert!(lines[1].starts_with("1 troposphere"));
        assert!(lines[2].starts_with("*7 upper mesosphere"));
        Ok(())
    }

    #[test]
    fn test_layer_listing() -> Result<()> {
        let text = format_layers(&STANDARD_ATMOSPHERE)?;
        assert!(text.starts_with("ISO 2533 layer table"));
        assert_eq!(text.lines().count(), 11);
        assert!(text.contains("mesopause"));
        Ok(())
    }
}
