use crate::spectrum::SpectrumSample;
use colored::*;

/// Width of the table border rows
const TABLE_WIDTH: usize = 37;

/// Unit suffix appended to the scaled energy column
const ENERGY_SUFFIX: &str = "×10⁻¹⁹";

const TABLE_HEADER: &str = "|λ(nm)|f(THz)|E(J)      |R  |G  |B  |";

/// Report a failure on stdout; used for non-fatal chart save errors
pub(crate) fn print_error(msg: &str) {
    println!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_banner() {
    let lines = [
        "--------------------",
        "| codedrome.com    |",
        "| Visible Spectrum |",
        "--------------------",
    ];
    for line in lines {
        println!("{}", line.bold());
    }
    println!();
}

fn separator() -> String {
    "-".repeat(TABLE_WIDTH)
}

/// Format a single table row
pub(crate) fn format_row(sample: &SpectrumSample) -> String {
    format!(
        "|{:>5}|{:>6}|{:>4.2}{}|{:>3}|{:>3}|{:>3}|",
        sample.wavelength_nm,
        sample.frequency_thz,
        sample.energy_scaled,
        ENERGY_SUFFIX,
        sample.color.r,
        sample.color.g,
        sample.color.b
    )
}

/// Format samples as a bordered fixed-width table, one line per sample
pub(crate) fn format_table(samples: &[SpectrumSample]) -> String {
    let mut lines = Vec::with_capacity(samples.len() + 4);
    lines.push(separator());
    lines.push(TABLE_HEADER.to_string());
    lines.push(separator());
    lines.extend(samples.iter().map(format_row));
    lines.push(separator());

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

pub(crate) fn print_table(samples: &[SpectrumSample]) {
    print!("{}", format_table(samples));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::Rgb;

    fn synthetic(nm: u32, thz: u32, energy: f64, color: Rgb) -> SpectrumSample {
        SpectrumSample {
            wavelength_nm: nm,
            frequency_hz: thz as f64 * 1e12,
            frequency_thz: thz,
            energy_joules: energy * 1e-19,
            energy_scaled: energy,
            color,
        }
    }

    #[test]
    fn test_header_matches_border_width() {
        assert_eq!(TABLE_HEADER.chars().count(), TABLE_WIDTH);
        assert_eq!(separator().len(), TABLE_WIDTH);
    }

    #[test]
    fn test_format_two_rows() {
        let samples = vec![
            synthetic(380, 789, 5.231108, Rgb::new(97, 0, 97)),
            synthetic(650, 461, 3.058186, Rgb::new(255, 0, 0)),
        ];

        let expected = "\
-------------------------------------
|λ(nm)|f(THz)|E(J)      |R  |G  |B  |
-------------------------------------
|  380|   789|5.23×10⁻¹⁹| 97|  0| 97|
|  650|   461|3.06×10⁻¹⁹|255|  0|  0|
-------------------------------------
";
        assert_eq!(format_table(&samples), expected);
    }

    #[test]
    fn test_row_width_is_constant() {
        for sample in crate::spectrum::generate_samples() {
            let row = format_row(&sample);
            assert_eq!(
                row.chars().count(),
                TABLE_WIDTH,
                "Row for {}nm has wrong width: {}",
                sample.wavelength_nm,
                row
            );
        }
    }

    #[test]
    fn test_empty_table_has_borders_only() {
        let table = format_table(&[]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().all(|l| l.chars().count() == TABLE_WIDTH));
    }
}
