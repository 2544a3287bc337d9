//! Optional script-witness flags shared by withdrawals and certificates

use anyhow::Result;
use stoa_common::{ExUnits, FileStore, ScriptRef};

/// Emit the `<prefix>-script-file`, `<prefix>-script-datum-value`,
/// `<prefix>-script-redeemer-value` and `<prefix>-execution-units` flags for
/// one component, persisting inline script content first
pub(crate) fn script_witness_flags(
    prefix: &str,
    script: Option<&ScriptRef>,
    datum: Option<&str>,
    redeemer: Option<&str>,
    units: Option<&ExUnits>,
    files: &dyn FileStore,
) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    if let Some(script) = script {
        script.validate(&format!("{} script", prefix.trim_start_matches("--")))?;
        files.write(&script.path, &script.content)?;
        tokens.push(format!("{prefix}-script-file"));
        tokens.push(script.path.display().to_string());
    }
    if let Some(datum) = datum {
        tokens.push(format!("{prefix}-script-datum-value"));
        tokens.push(format!("'{datum}'"));
    }
    if let Some(redeemer) = redeemer {
        tokens.push(format!("{prefix}-script-redeemer-value"));
        tokens.push(format!("'{redeemer}'"));
    }
    if let Some(units) = units {
        tokens.push(format!("{prefix}-execution-units"));
        tokens.push(units.to_arg());
    }
    Ok(tokens)
}
