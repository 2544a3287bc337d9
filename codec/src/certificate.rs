//! Encoding of certificate inclusions

use anyhow::Result;
use stoa_common::{CertificateDescriptor, FileStore};

use crate::witness::script_witness_flags;

/// Encode one `--certificate <payload>` with its optional script witness
/// flags
pub fn encode_certificate(
    certificate: &CertificateDescriptor,
    files: &dyn FileStore,
) -> Result<Vec<String>> {
    let mut tokens = vec!["--certificate".to_string(), certificate.payload.clone()];
    tokens.extend(script_witness_flags(
        "--certificate",
        certificate.script.as_ref(),
        certificate.datum.as_deref(),
        certificate.redeemer.as_deref(),
        certificate.execution_units.as_ref(),
        files,
    )?);
    Ok(tokens)
}
