//! Trace I/O around the simulator.
//!
//! # Components
//! - [`TraceReader`] - Parses page references from a line-delimited source
//! - [`ResultWriter`] - Renders classified references and the fault rate
//! - [`replay_file`] - Reads a trace file, simulates, writes the result file

mod reader;
mod writer;

use std::path::Path;

pub use reader::{read_trace, read_trace_file, TraceReader};
pub use writer::{render_report, write_report_file, ResultWriter};

use crate::common::{Result, SimulationConfig};
use crate::simulator::{simulate, SimulationReport};

/// One complete batch run from `input` to `output`.
///
/// Any failure aborts the run and leaves `output` untouched.
pub fn replay_file(
    config: SimulationConfig,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<SimulationReport> {
    let trace = read_trace_file(input)?;
    let report = simulate(config, trace)?;
    write_report_file(output, &report)?;
    Ok(report)
}
