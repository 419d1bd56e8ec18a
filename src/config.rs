use crate::cli::Args;
use crate::error::{Result, WindGridError};
use clap::ValueEnum;
use log::debug;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_AREA: [f64; 2] = [500.0, 500.0];
pub const DEFAULT_PROJECTION: &str = "+proj=utm +zone=13 +ellps=WGS84 +units=m";

/// Fixed conversion ratio of 500 m per 0.005 degrees. This ignores the
/// latitude dependence of both the meridional and zonal degree lengths.
pub const DEGREES_TO_METERS: f64 = 500.0 / 0.005;

/// Units of user-facing area shapes and offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Units {
    /// Meters
    #[value(name = "m")]
    Meters,
    /// Degrees, converted at a fixed ratio
    #[value(name = "d")]
    Degrees,
}

impl Units {
    pub fn to_meters(self, pair: [f64; 2]) -> [f64; 2] {
        match self {
            Units::Meters => pair,
            Units::Degrees => pair.map(|v| v * DEGREES_TO_METERS),
        }
    }
}

/// Number of processors on this host, at least 1
pub fn host_cpus() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Fully resolved run parameters. All lengths are meters.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub u_file: PathBuf,
    pub v_file: PathBuf,
    pub o_file: PathBuf,
    pub source_area: [f64; 2],
    pub target_area: [f64; 2],
    /// `None` selects the corner-anchored default placement
    pub target_offset: Option<[f64; 2]>,
    pub rescale: f64,
    pub projection: String,
    pub nprocs: usize,
}

impl RunConfig {
    /// Config with defaults for everything but the file paths
    pub fn new(
        u_file: impl Into<PathBuf>,
        v_file: impl Into<PathBuf>,
        o_file: impl Into<PathBuf>,
        nprocs: usize,
    ) -> Self {
        Self {
            u_file: u_file.into(),
            v_file: v_file.into(),
            o_file: o_file.into(),
            source_area: DEFAULT_SOURCE_AREA,
            target_area: DEFAULT_SOURCE_AREA,
            target_offset: Some([0.0, 0.0]),
            rescale: 1.0,
            projection: DEFAULT_PROJECTION.to_string(),
            nprocs,
        }
    }

    /// Resolve parsed arguments against the host processor count.
    ///
    /// Shapes and offsets are normalized to meters. Without a target area
    /// the target is the source area, centred, and any offset is dropped.
    pub fn from_args(args: Args, host_cpus: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&args.rescale) {
            return Err(WindGridError::InvalidScale(args.rescale));
        }

        let nprocs = args.nprocs.unwrap_or(host_cpus);
        if nprocs < 1 || nprocs > host_cpus {
            return Err(WindGridError::InvalidWorkerCount {
                requested: nprocs,
                available: host_cpus,
            });
        }

        let units = args.units;
        let source_area = units.to_meters(pair("source-area", &args.source_area)?);
        let (target_area, target_offset) = match args.target_area {
            Some(area) => {
                let offset = match args.target_offset {
                    Some(offset) => Some(units.to_meters(pair("target-offset", &offset)?)),
                    None => None,
                };
                (units.to_meters(pair("target-area", &area)?), offset)
            }
            None => (source_area, Some([0.0, 0.0])),
        };

        let config = Self {
            u_file: args.u_file,
            v_file: args.v_file,
            o_file: args.o_file,
            source_area,
            target_area,
            target_offset,
            rescale: args.rescale,
            projection: args.projection,
            nprocs,
        };
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

fn pair(name: &'static str, values: &[f64]) -> Result<[f64; 2]> {
    <[f64; 2]>::try_from(values).map_err(|_| WindGridError::InvalidPair {
        name,
        len: values.len(),
    })
}
