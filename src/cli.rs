use crate::config::{Units, DEFAULT_PROJECTION};
use crate::error::WindGridError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "windgrid")]
#[command(about = "Compute wind speed from u/v component PNGs and fit it to an area of interest")]
#[command(version)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// u-component input file, an 8-bit PNG grayscale image
    #[arg(value_name = "U_FILE")]
    pub u_file: PathBuf,

    /// v-component input file, an 8-bit PNG grayscale image
    #[arg(value_name = "V_FILE")]
    pub v_file: PathBuf,

    /// Wind speed magnitude output file, an 8-bit PNG grayscale image
    #[arg(value_name = "O_FILE")]
    pub o_file: PathBuf,

    /// Source area shape in the given units (x and y dimensions)
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["W", "H"],
        default_values_t = [500.0, 500.0],
        allow_negative_numbers = true
    )]
    pub source_area: Vec<f64>,

    /// Target area shape in the given units (default: the source area)
    #[arg(short, long, num_args = 2, value_names = ["W", "H"], allow_negative_numbers = true)]
    pub target_area: Option<Vec<f64>>,

    /// Target area offset in the given units (x and y offset)
    #[arg(short = 'o', long, num_args = 2, value_names = ["DX", "DY"], allow_negative_numbers = true)]
    pub target_offset: Option<Vec<f64>>,

    /// Units of area shapes and offsets: 'm' (meters) or 'd' (degrees)
    #[arg(short, long, value_enum, default_value = "m")]
    pub units: Units,

    /// (Re)scale factor applied to the output image, within [0, 1]
    #[arg(short, long, value_parser = parse_rescale, default_value_t = 1.0)]
    pub rescale: f64,

    /// Projection applied to source and target areas
    #[arg(short, long, default_value = DEFAULT_PROJECTION)]
    pub projection: String,

    /// Number of processors used for resampling (default: all available)
    #[arg(long, value_name = "N", value_parser = parse_nprocs)]
    pub nprocs: Option<usize>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

fn parse_rescale(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(WindGridError::InvalidScale(value).to_string());
    }
    Ok(value)
}

fn parse_nprocs(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    if value < 1 {
        return Err(format!(
            "{} is not a valid number of processors, must be positive greater than 0",
            value
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let mut argv = vec!["windgrid"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["u.png", "v.png", "out.png"]);
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.u_file, PathBuf::from("u.png"));
        assert_eq!(args.o_file, PathBuf::from("out.png"));
        assert_eq!(args.source_area, vec![500.0, 500.0]);
        assert!(args.target_area.is_none());
        assert!(args.target_offset.is_none());
        assert_eq!(args.units, Units::Meters);
        assert_eq!(args.rescale, 1.0);
        assert_eq!(args.projection, DEFAULT_PROJECTION);
        assert!(args.nprocs.is_none());
    }

    #[test]
    fn test_area_and_negative_offset() {
        let args = parse(&["-s", "500", "500", "-t", "250", "250", "-o", "125", "-125"]).unwrap();
        assert_eq!(args.target_area, Some(vec![250.0, 250.0]));
        assert_eq!(args.target_offset, Some(vec![125.0, -125.0]));
    }

    #[test]
    fn test_rescale_validation() {
        assert_eq!(parse(&["-r", "0.25"]).unwrap().rescale, 0.25);
        assert!(parse(&["-r", "1.5"]).is_err());
        assert!(parse(&["-r", "-0.1"]).is_err());
        assert!(parse(&["-r", "half"]).is_err());
    }

    #[test]
    fn test_units_validation() {
        assert_eq!(parse(&["-u", "d"]).unwrap().units, Units::Degrees);
        assert!(parse(&["-u", "km"]).is_err());
    }

    #[test]
    fn test_nprocs_validation() {
        assert_eq!(parse(&["--nprocs", "1"]).unwrap().nprocs, Some(1));
        assert!(parse(&["--nprocs", "0"]).is_err());
        assert!(parse(&["--nprocs", "-2"]).is_err());
    }

    #[test]
    fn test_missing_positional() {
        assert!(Args::try_parse_from(["windgrid", "u.png", "v.png"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Args::try_parse_from(["windgrid", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
