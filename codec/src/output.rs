//! Encoding of transaction outputs

use anyhow::Result;
use dashu_int::UBig;
use stoa_common::{TxOutputDescriptor, ValidationError, LOVELACE};

/// Encode one `--tx-out`: `<address>+<lovelace>` with any non-base assets
/// appended as a quoted `+`-joined list, then an optional datum hash flag.
///
/// An output whose bundle lacks a positive lovelace entry is rejected
/// outright rather than defaulted to zero.
pub fn encode_output(output: &TxOutputDescriptor) -> Result<Vec<String>> {
    let lovelace = output.value.get(LOVELACE);
    if lovelace == UBig::ZERO {
        return Err(ValidationError::OutputWithoutLovelace {
            address: output.address.clone(),
        }
        .into());
    }

    let mut target = format!("{}+{}", output.address, lovelace);
    let assets: Vec<String> = output
        .value
        .non_lovelace()
        .map(|(id, quantity)| format!("{quantity} {id}"))
        .collect();
    if !assets.is_empty() {
        target.push_str(&format!("+\"{}\"", assets.join("+")));
    }

    let mut tokens = vec!["--tx-out".to_string(), target];
    if let Some(hash) = &output.datum_hash {
        tokens.push("--tx-out-datum-hash".to_string());
        tokens.push(hash.clone());
    }
    Ok(tokens)
}
