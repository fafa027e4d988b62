//! Machine-readable report output.
//!
//! Writes compact single-line JSON so the report can be piped into other tools.

use std::io::Write;

use serde::Serialize;

use crate::domain::AppError;

/// Serialize `output` as single-line JSON.
pub fn to_json_line<T: Serialize>(output: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(output).map_err(|e| AppError::Serialization {
        what: "report".to_string(),
        details: e.to_string(),
    })?;

    debug_assert!(!json.contains('\n'), "report JSON must be single-line");
    Ok(json)
}

/// Write `output` as one JSON line to `writer`.
pub fn write_json<T: Serialize, W: Write>(output: &T, writer: &mut W) -> Result<(), AppError> {
    let json = to_json_line(output)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}
