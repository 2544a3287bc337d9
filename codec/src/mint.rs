//! Encoding of mint and burn actions

use anyhow::Result;
use dashu_int::UBig;
use stoa_common::{FileStore, MintAction, MintActionTag, ValidationError};

/// Check a mint list without touching any file
pub fn validate_mints(mints: &[MintAction]) -> Result<(), ValidationError> {
    for mint in mints {
        if mint.asset_id.is_empty() {
            return Err(ValidationError::EmptyMintAssetId);
        }
        if mint.quantity == UBig::ZERO {
            return Err(ValidationError::ZeroMintQuantity {
                asset_id: mint.asset_id.clone(),
            });
        }
        mint.policy_script.validate("mint policy script")?;
    }
    Ok(())
}

/// Encode the single quoted mint term list, then each action's policy
/// script, redeemer and execution-units flags
///
/// Quantities of every action merge into one `+`-joined list, burn
/// magnitudes prefixed with `-`, no separator after the last entry. The
/// per-action flags follow the list even though the quantities were merged.
pub fn encode_mints(mints: &[MintAction], files: &dyn FileStore) -> Result<Vec<String>> {
    if mints.is_empty() {
        return Ok(Vec::new());
    }
    validate_mints(mints)?;

    let terms: Vec<String> = mints
        .iter()
        .map(|mint| match mint.action {
            MintActionTag::Mint => format!("{} {}", mint.quantity, mint.asset_id),
            MintActionTag::Burn => format!("-{} {}", mint.quantity, mint.asset_id),
        })
        .collect();

    let mut tokens = vec![format!("--mint=\"{}\"", terms.join("+"))];

    for mint in mints {
        files.write(&mint.policy_script.path, &mint.policy_script.content)?;
        tokens.push("--mint-script-file".to_string());
        tokens.push(mint.policy_script.path.display().to_string());
        if let Some(redeemer) = &mint.redeemer {
            tokens.push("--mint-redeemer-value".to_string());
            tokens.push(format!("'{redeemer}'"));
        }
        if let Some(units) = &mint.execution_units {
            tokens.push("--mint-execution-units".to_string());
            tokens.push(units.to_arg());
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stoa_common::{ExUnits, MemoryFileStore, ScriptRef};

    fn action(tag: MintActionTag, asset_id: &str, quantity: u64) -> MintAction {
        MintAction {
            action: tag,
            asset_id: asset_id.to_string(),
            quantity: UBig::from(quantity),
            policy_script: ScriptRef::new(format!("{asset_id}.script"), "{\"type\": \"all\"}"),
            redeemer: None,
            execution_units: None,
        }
    }

    #[test]
    fn test_mint_and_burn_term_list() {
        let files = MemoryFileStore::new();
        let mints = vec![
            action(MintActionTag::Mint, "p1.a", 5),
            action(MintActionTag::Burn, "p2.b", 2),
        ];

        let tokens = encode_mints(&mints, &files).unwrap();
        assert_eq!(tokens[0], "--mint=\"5 p1.a+-2 p2.b\"");
        assert_eq!(
            &tokens[1..],
            &[
                "--mint-script-file",
                "p1.a.script",
                "--mint-script-file",
                "p2.b.script",
            ]
        );
        assert_eq!(files.len(), 2);
        assert!(files.get(Path::new("p2.b.script")).is_some());
    }

    #[test]
    fn test_burn_terms_carry_a_leading_minus() {
        let mints = vec![
            action(MintActionTag::Burn, "p.x", 9),
            action(MintActionTag::Mint, "p.y", 1),
        ];
        let tokens = encode_mints(&mints, &MemoryFileStore::new()).unwrap();
        assert_eq!(tokens[0], "--mint=\"-9 p.x+1 p.y\"");
    }

    #[test]
    fn test_per_action_redeemer_and_units() {
        let mut mint = action(MintActionTag::Mint, "p.a", 1);
        mint.redeemer = Some("[]".to_string());
        mint.execution_units = Some(ExUnits::new(100, 200));

        let tokens = encode_mints(&[mint], &MemoryFileStore::new()).unwrap();
        assert_eq!(
            tokens,
            vec![
                "--mint=\"1 p.a\"",
                "--mint-script-file",
                "p.a.script",
                "--mint-redeemer-value",
                "'[]'",
                "--mint-execution-units",
                "\"(100,200)\"",
            ]
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected_before_any_write() {
        let files = MemoryFileStore::new();
        let mints = vec![
            action(MintActionTag::Mint, "p.good", 1),
            action(MintActionTag::Burn, "p.bad", 0),
        ];

        assert_eq!(
            encode_mints(&mints, &files)
                .unwrap_err()
                .downcast::<ValidationError>()
                .unwrap(),
            ValidationError::ZeroMintQuantity {
                asset_id: "p.bad".to_string()
            }
        );
        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_asset_id_is_rejected() {
        let mints = vec![action(MintActionTag::Mint, "", 5)];
        assert_eq!(
            encode_mints(&mints, &MemoryFileStore::new())
                .unwrap_err()
                .downcast::<ValidationError>()
                .unwrap(),
            ValidationError::EmptyMintAssetId
        );
    }

    #[test]
    fn test_empty_mint_list_encodes_nothing() {
        assert!(encode_mints(&[], &MemoryFileStore::new()).unwrap().is_empty());
    }
}
