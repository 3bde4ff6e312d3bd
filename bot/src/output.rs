use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Context as _;

pub const RESULT_OUTPUT: &str = "result";

/// Appends `result=<json>` to the step output file so later steps can read it.
pub fn write_step_output(path: &Path, result: &serde_json::Value) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open step output file {}", path.display()))?;

    // Compact JSON never contains a newline, so the single-line form is safe
    writeln!(file, "{RESULT_OUTPUT}={}", serde_json::to_string(result)?)
        .with_context(|| format!("Failed to write step output file {}", path.display()))?;

    Ok(())
}
