//! Encoding of reward withdrawals

use anyhow::Result;
use stoa_common::{FileStore, WithdrawalDescriptor};

use crate::witness::script_witness_flags;

/// Encode one `--withdrawal <stakeAddress>+<amount>` with its optional
/// script witness flags
pub fn encode_withdrawal(
    withdrawal: &WithdrawalDescriptor,
    files: &dyn FileStore,
) -> Result<Vec<String>> {
    let mut tokens = vec![
        "--withdrawal".to_string(),
        format!("{}+{}", withdrawal.stake_address, withdrawal.amount),
    ];
    tokens.extend(script_witness_flags(
        "--withdrawal",
        withdrawal.script.as_ref(),
        withdrawal.datum.as_deref(),
        withdrawal.redeemer.as_deref(),
        withdrawal.execution_units.as_ref(),
        files,
    )?);
    Ok(tokens)
}
