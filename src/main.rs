mod chart;
mod output;
mod spectrum;

use std::path::{Path, PathBuf};

use clap::Parser;

use chart::{Orientation, render_spectrum_chart};
use output::{print_banner, print_error, print_table};
use spectrum::{SpectrumSample, generate_samples};

#[derive(Parser)]
#[command(
    name = "visiblespectrum",
    version,
    about = "Visible light spectrum table with wavelength/frequency charts",
    after_help = "Examples:
  visiblespectrum                      Print the table, write both charts to .
  visiblespectrum -o charts            Write the charts into ./charts
  visiblespectrum -q --no-color        Table only on stdout, no banner"
)]
struct Args {
    /// Directory for wavelength_frequency.png and frequency_wavelength.png
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    output_dir: PathBuf,

    /// Suppress the banner and progress notes
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

// Render one chart; failures are reported and never abort the run
fn plot(samples: &[SpectrumSample], orientation: Orientation, output_dir: &Path, quiet: bool) {
    let path = output_dir.join(orientation.file_name());
    let path = path.display().to_string();

    if let Err(e) = render_spectrum_chart(samples, orientation, &path) {
        print_error(&e);
    } else if !quiet {
        eprintln!("Chart saved to: {}", path);
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.quiet {
        print_banner();
    }

    let samples = generate_samples();

    print_table(&samples);

    for orientation in Orientation::ALL {
        plot(&samples, orientation, &args.output_dir, args.quiet);
    }
}
