//! Encoding of transaction inputs and collateral

use anyhow::Result;
use stoa_common::{Datum, FileStore, TxInputDescriptor};

/// `<hash>#<index>`, as the grammar spells an outpoint
pub fn outpoint(input: &TxInputDescriptor) -> String {
    format!("{}#{}", input.tx_hash, input.index)
}

/// Encode one `--tx-in` with its optional script, datum, redeemer and
/// execution-units flags. Inline script content is persisted first.
pub fn encode_input(input: &TxInputDescriptor, files: &dyn FileStore) -> Result<Vec<String>> {
    encode_spend(input, "--tx-in", files)
}

/// Collateral inputs share the input grammar under a distinct flag
pub fn encode_collateral(input: &TxInputDescriptor, files: &dyn FileStore) -> Result<Vec<String>> {
    encode_spend(input, "--tx-in-collateral", files)
}

fn encode_spend(
    input: &TxInputDescriptor,
    flag: &str,
    files: &dyn FileStore,
) -> Result<Vec<String>> {
    let mut tokens = vec![flag.to_string(), outpoint(input)];

    if let Some(script) = &input.script {
        script.validate("input script")?;
        files.write(&script.path, &script.content)?;
        tokens.push("--tx-in-script-file".to_string());
        tokens.push(script.path.display().to_string());
    }
    match &input.datum {
        // Only a literal datum is spelled on the command line; a hash is
        // already part of the UTxO being spent
        Some(Datum::Value(datum)) => {
            tokens.push("--tx-in-datum-value".to_string());
            tokens.push(format!("'{datum}'"));
        }
        Some(Datum::Hash(_)) | None => {}
    }
    if let Some(redeemer) = &input.redeemer {
        tokens.push("--tx-in-redeemer-value".to_string());
        tokens.push(format!("'{redeemer}'"));
    }
    if let Some(units) = &input.execution_units {
        tokens.push("--tx-in-execution-units".to_string());
        tokens.push(units.to_arg());
    }
    Ok(tokens)
}
