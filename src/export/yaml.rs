//! YAML export

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::error::{EventDeskError, EventDeskResult};

/// Serialize any report as YAML under a short comment header
pub fn write_yaml<T, W>(report: &T, title: &str, writer: &mut W) -> EventDeskResult<()>
where
    T: Serialize,
    W: Write,
{
    let export_err = |e: std::io::Error| EventDeskError::Export(e.to_string());

    writeln!(writer, "# EventDesk {}", title).map_err(export_err)?;
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    writeln!(writer, "# Generated: {}", generated).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, report)
        .map_err(|e| EventDeskError::Export(e.to_string()))?;

    Ok(())
}
