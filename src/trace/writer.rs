//! Result trace output.
//!
//! One record per reference, then the fault-rate summary:
//! ```text
//! 1	PF
//! 1	HIT
//! PF Rate : 50.00%
//! ```
//! The summary line carries no trailing newline.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::common::config::FAULT_RATE_PREFIX;
use crate::common::{Error, Result};
use crate::simulator::SimulationReport;

/// Renders a [`SimulationReport`] onto any sink.
#[derive(Debug)]
pub struct ResultWriter<W> {
    sink: W,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write every record and the summary.
    ///
    /// The fault rate is computed first, so an empty report fails with
    /// `Error::UndefinedRate` before a single byte reaches the sink.
    pub fn write_report(&mut self, report: &SimulationReport) -> Result<()> {
        let rate = report.fault_rate()?;

        for reference in report.results() {
            writeln!(self.sink, "{}\t{}", reference.page_id, reference.outcome)?;
        }
        write!(self.sink, "{}{:.2}%", FAULT_RATE_PREFIX, rate)?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Render a report to bytes.
pub fn render_report(report: &SimulationReport) -> Result<Vec<u8>> {
    let mut writer = ResultWriter::new(Vec::new());
    writer.write_report(report)?;
    Ok(writer.into_inner())
}

/// Write a report to `path`.
///
/// The output is rendered in memory first: if rendering fails the file is
/// never created, so a failed run leaves no partial artifact behind.
///
/// # Errors
/// - `Error::UndefinedRate` for an empty report
/// - `Error::FileIo` naming `path` if it cannot be written
pub fn write_report_file(path: impl AsRef<Path>, report: &SimulationReport) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_report(report)?;

    fs::write(path, &bytes).map_err(|e| Error::file(path, e))?;

    debug!("Wrote {} records to {}", report.len(), path.display());
    Ok(())
}
