//! Encoding of metadata and auxiliary scripts

use anyhow::Result;
use stoa_common::{FileStore, ScriptRef};

/// Persist metadata JSON content and emit `--metadata-json-file <path>`
pub fn encode_metadata(metadata: &ScriptRef, files: &dyn FileStore) -> Result<Vec<String>> {
    metadata.validate("metadata")?;
    files.write(&metadata.path, &metadata.content)?;
    Ok(vec![
        "--metadata-json-file".to_string(),
        metadata.path.display().to_string(),
    ])
}

/// Persist each auxiliary script and emit one `--auxiliary-script-file`
/// flag per entry
pub fn encode_auxiliary_scripts(
    scripts: &[ScriptRef],
    files: &dyn FileStore,
) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for script in scripts {
        script.validate("auxiliary script")?;
        files.write(&script.path, &script.content)?;
        tokens.push("--auxiliary-script-file".to_string());
        tokens.push(script.path.display().to_string());
    }
    Ok(tokens)
}
