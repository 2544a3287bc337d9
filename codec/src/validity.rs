//! Validity window and trailing build flags

use std::path::Path;

use stoa_common::{Lovelace, ValidityWindow};

/// `--script-invalid`, `--invalid-before` and `--invalid-hereafter`, in that
/// order, only for the bounds that are set
pub fn encode_validity(window: &ValidityWindow) -> Vec<String> {
    let mut tokens = Vec::new();
    if window.script_invalid {
        tokens.push("--script-invalid".to_string());
    }
    if let Some(slot) = window.invalid_before {
        tokens.push("--invalid-before".to_string());
        tokens.push(slot.to_string());
    }
    if let Some(slot) = window.invalid_hereafter {
        tokens.push("--invalid-hereafter".to_string());
        tokens.push(slot.to_string());
    }
    tokens
}

/// The fixed tail every build carries: fee, out-file, protocol parameters
pub fn encode_tail(fee: Lovelace, out_file: &Path, protocol_params_file: &Path) -> Vec<String> {
    vec![
        "--fee".to_string(),
        fee.to_string(),
        "--out-file".to_string(),
        out_file.display().to_string(),
        "--protocol-params-file".to_string(),
        protocol_params_file.display().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_encodes_nothing() {
        assert!(encode_validity(&ValidityWindow::default()).is_empty());
    }

    #[test]
    fn test_full_window_order() {
        let window = ValidityWindow {
            invalid_before: Some(100),
            invalid_hereafter: Some(200),
            script_invalid: true,
        };
        assert_eq!(
            encode_validity(&window),
            vec![
                "--script-invalid",
                "--invalid-before",
                "100",
                "--invalid-hereafter",
                "200",
            ]
        );
    }

    #[test]
    fn test_tail() {
        assert_eq!(
            encode_tail(180000, Path::new("tx.raw"), Path::new("params.json")),
            vec![
                "--fee",
                "180000",
                "--out-file",
                "tx.raw",
                "--protocol-params-file",
                "params.json",
            ]
        );
    }
}
