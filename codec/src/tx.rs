//! Whole-transaction encoding and the fixed grammar order

use std::path::Path;

use anyhow::Result;
use dashu_int::UBig;
use stoa_common::{FileStore, SignDescriptor, TxDescriptor, ValidationError, LOVELACE};
use tracing::debug;

use crate::{
    encode_auxiliary_scripts, encode_certificate, encode_collateral, encode_input,
    encode_metadata, encode_mints, encode_output, encode_tail, encode_validity,
    encode_withdrawal, validate_mints,
};

/// Encode a full `transaction build-raw` argument list
///
/// The grammar order is fixed: era, inputs, outputs, collateral,
/// certificates, withdrawals, mints, auxiliary scripts, metadata, validity
/// flags, fee, out-file, protocol-params-file. Validation runs over the
/// whole descriptor before any file write, so a failing component can never
/// leave partial side effects behind.
pub fn encode_build_raw(tx: &TxDescriptor, files: &dyn FileStore) -> Result<Vec<String>> {
    validate_tx(tx)?;

    let mut tokens = Vec::new();
    if let Some(era) = tx.era {
        tokens.push(era.as_flag().to_string());
    }
    for input in &tx.inputs {
        tokens.extend(encode_input(input, files)?);
    }
    for output in &tx.outputs {
        tokens.extend(encode_output(output)?);
    }
    for input in &tx.collateral {
        tokens.extend(encode_collateral(input, files)?);
    }
    for certificate in &tx.certificates {
        tokens.extend(encode_certificate(certificate, files)?);
    }
    for withdrawal in &tx.withdrawals {
        tokens.extend(encode_withdrawal(withdrawal, files)?);
    }
    tokens.extend(encode_mints(&tx.mints, files)?);
    tokens.extend(encode_auxiliary_scripts(&tx.auxiliary_scripts, files)?);
    if let Some(metadata) = &tx.metadata {
        tokens.extend(encode_metadata(metadata, files)?);
    }
    tokens.extend(encode_validity(&tx.validity));
    tokens.extend(encode_tail(tx.fee, &tx.out_file, &tx.protocol_params_file));

    debug!(tokens = tokens.len(), "encoded build-raw arguments");
    Ok(tokens)
}

/// Reject an invalid descriptor before any side effect
pub fn validate_tx(tx: &TxDescriptor) -> Result<(), ValidationError> {
    for output in &tx.outputs {
        if output.value.get(LOVELACE) == UBig::ZERO {
            return Err(ValidationError::OutputWithoutLovelace {
                address: output.address.clone(),
            });
        }
    }
    validate_mints(&tx.mints)?;
    for input in tx.inputs.iter().chain(&tx.collateral) {
        if let Some(script) = &input.script {
            script.validate("input script")?;
        }
    }
    for withdrawal in &tx.withdrawals {
        if let Some(script) = &withdrawal.script {
            script.validate("withdrawal script")?;
        }
    }
    for certificate in &tx.certificates {
        if let Some(script) = &certificate.script {
            script.validate("certificate script")?;
        }
    }
    for script in &tx.auxiliary_scripts {
        script.validate("auxiliary script")?;
    }
    if let Some(metadata) = &tx.metadata {
        metadata.validate("metadata")?;
    }
    Ok(())
}

/// Join a token list into the final command-line fragment
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Encode a `transaction sign` argument list; the descriptor must reference
/// either a tx body or an already-signed tx
pub fn encode_sign(sign: &SignDescriptor) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    match (&sign.tx_body_file, &sign.tx_file) {
        (None, None) => return Err(ValidationError::MissingTxReference.into()),
        (Some(body), _) => {
            tokens.push("--tx-body-file".to_string());
            tokens.push(body.display().to_string());
        }
        (None, Some(tx)) => {
            tokens.push("--tx-file".to_string());
            tokens.push(tx.display().to_string());
        }
    }
    for key in &sign.signing_key_files {
        tokens.push("--signing-key-file".to_string());
        tokens.push(key.display().to_string());
    }
    tokens.push("--out-file".to_string());
    tokens.push(sign.out_file.display().to_string());
    Ok(tokens)
}

/// Encode a `transaction calculate-min-fee` argument list
pub fn encode_min_fee(
    tx_body_file: &Path,
    tx_in_count: usize,
    tx_out_count: usize,
    witness_count: usize,
    protocol_params_file: &Path,
) -> Vec<String> {
    vec![
        "--tx-body-file".to_string(),
        tx_body_file.display().to_string(),
        "--tx-in-count".to_string(),
        tx_in_count.to_string(),
        "--tx-out-count".to_string(),
        tx_out_count.to_string(),
        "--witness-count".to_string(),
        witness_count.to_string(),
        "--protocol-params-file".to_string(),
        protocol_params_file.display().to_string(),
    ]
}
