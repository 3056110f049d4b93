//! Plot the parallax horizons for stars of various spectral types. The parallax horizon
//! defines out to what distance a star can be seen for a given relative parallax accuracy.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use parallax_horizons::constants::{ACCURACY_THRESHOLDS, DEFAULT_SPECTRAL_TYPES};
use parallax_horizons::error_models::AstrometricModel;
use parallax_horizons::horizon::display::HorizonSummaryDisplay;
use parallax_horizons::horizon::{distance_grid, iso_accuracy_curve, HorizonProfile, IsoAccuracyCurve};
use parallax_horizons::horizons::Horizons;
use parallax_horizons::plot;

const OUTPUT_BASENAME: &str = "ParallaxHorizons";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot parallax horizons for various spectral types."
)]
struct Args {
    /// Write the chart to ParallaxHorizons.svg (vector output)
    #[arg(short = 'p', long)]
    svg: bool,

    /// Write the chart to ParallaxHorizons.png
    #[arg(short = 'b', long)]
    png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let env = Horizons::new(AstrometricModel::PreLaunch)?;
    let distances = distance_grid();

    let profiles: Vec<HorizonProfile> = DEFAULT_SPECTRAL_TYPES
        .iter()
        .map(|spt| env.horizon_profile(spt, &distances))
        .collect::<Result<_, _>>()?;
    let curves: Vec<IsoAccuracyCurve> = ACCURACY_THRESHOLDS
        .iter()
        .map(|&threshold| iso_accuracy_curve(&profiles, threshold))
        .collect();

    if args.svg {
        let path = format!("{OUTPUT_BASENAME}.svg");
        plot::save_svg(&path, &profiles, &curves)?;
        info!("chart written to {path}");
    } else if args.png {
        let path = format!("{OUTPUT_BASENAME}.png");
        plot::save_png(&path, &profiles, &curves)?;
        info!("chart written to {path}");
    } else {
        print!("{}", plot::terminal::render(&profiles));
        print!("{}", HorizonSummaryDisplay::new(&profiles, &ACCURACY_THRESHOLDS));
    }

    Ok(())
}
