use std::fmt;
use std::io::{self, Write};

use singleton_holder::Holder;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Arguments for the two accessor calls.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub first: String,
    pub second: String,
}

/// What the driver observed through the two handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub identical: bool,
    pub first_value: String,
    pub second_value: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.identical)?;
        writeln!(f, "{}", self.first_value)?;
        write!(f, "{}", self.second_value)
    }
}

/// Requests the holder twice and writes the identity verdict followed by the
/// value seen through each handle.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<Report, DriverError> {
    let first = Holder::get_instance(config.first.as_str());
    let second = Holder::get_instance(config.second.as_str());

    let report = Report {
        identical: first.is_same(second),
        first_value: first.value().to_string(),
        second_value: second.value().to_string(),
    };
    debug!(identical = report.identical, "compared holder handles");

    writeln!(out, "{report}")?;
    out.flush()?;
    Ok(report)
}
