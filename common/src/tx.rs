//! Transaction descriptors handed to the encoders
//!
//! All of these are immutable value objects built by the caller for a single
//! encode call; none persist beyond it.

use std::path::PathBuf;

use crate::{AssetBundle, AssetId, Lovelace, Quantity, ValidationError};

/// Inline textual content plus the path it must be persisted to before the
/// grammar can reference it
///
/// The encoder's only side effect is writing the content through a
/// `FileStore`; it does not retain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRef {
    pub path: PathBuf,
    pub content: String,
}

impl ScriptRef {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The path/content pair is mandatory; an empty half means the caller
    /// built the reference from missing data
    pub fn validate(&self, context: &str) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() || self.content.is_empty() {
            return Err(ValidationError::IncompleteScriptRef {
                context: context.to_string(),
            });
        }
        Ok(())
    }
}

/// Script execution budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExUnits {
    pub mem: u64,
    pub steps: u64,
}

impl ExUnits {
    pub fn new(mem: u64, steps: u64) -> Self {
        Self { mem, steps }
    }

    /// `"(mem,steps)"` as the grammar spells a budget pair
    pub fn to_arg(&self) -> String {
        format!("\"({},{})\"", self.mem, self.steps)
    }
}

/// Datum attached to an input: a literal value or its hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Datum {
    Value(String),
    Hash(String),
}

/// One transaction input
#[derive(Debug, Clone, Default)]
pub struct TxInputDescriptor {
    /// Source transaction hash, hex
    pub tx_hash: String,
    /// Output index within the source transaction
    pub index: u16,
    /// Assets expected to be consumed; informational only, never encoded
    pub expected: Option<AssetBundle>,
    pub script: Option<ScriptRef>,
    pub datum: Option<Datum>,
    pub redeemer: Option<String>,
    pub execution_units: Option<ExUnits>,
}

impl TxInputDescriptor {
    pub fn new(tx_hash: impl Into<String>, index: u16) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            index,
            ..Self::default()
        }
    }
}

/// One transaction output; the bundle must carry a positive lovelace entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutputDescriptor {
    pub address: String,
    pub value: AssetBundle,
    pub datum_hash: Option<String>,
}

impl TxOutputDescriptor {
    pub fn new(address: impl Into<String>, value: AssetBundle) -> Self {
        Self {
            address: address.into(),
            value,
            datum_hash: None,
        }
    }
}

/// Whether a mint action creates or destroys tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintActionTag {
    Mint,
    Burn,
}

/// A single mint or burn of one asset
#[derive(Debug, Clone)]
pub struct MintAction {
    pub action: MintActionTag,
    pub asset_id: AssetId,
    /// Magnitude; the sign comes from `action`, never from the quantity
    pub quantity: Quantity,
    pub policy_script: ScriptRef,
    pub redeemer: Option<String>,
    pub execution_units: Option<ExUnits>,
}

/// Reward withdrawal from a stake address
#[derive(Debug, Clone)]
pub struct WithdrawalDescriptor {
    pub stake_address: String,
    pub amount: Lovelace,
    pub script: Option<ScriptRef>,
    pub datum: Option<String>,
    pub redeemer: Option<String>,
    pub execution_units: Option<ExUnits>,
}

/// Certificate inclusion
#[derive(Debug, Clone)]
pub struct CertificateDescriptor {
    pub payload: String,
    pub script: Option<ScriptRef>,
    pub datum: Option<String>,
    pub redeemer: Option<String>,
    pub execution_units: Option<ExUnits>,
}

/// Slot range within which the transaction is valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityWindow {
    pub invalid_before: Option<u64>,
    pub invalid_hereafter: Option<u64>,
    pub script_invalid: bool,
}

/// Ledger era marker accepted by the build grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Shelley,
    Allegra,
    Mary,
    Alonzo,
    Babbage,
    Conway,
}

impl Era {
    pub fn as_flag(&self) -> &'static str {
        match self {
            Era::Shelley => "--shelley-era",
            Era::Allegra => "--allegra-era",
            Era::Mary => "--mary-era",
            Era::Alonzo => "--alonzo-era",
            Era::Babbage => "--babbage-era",
            Era::Conway => "--conway-era",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "shelley" => Some(Era::Shelley),
            "allegra" => Some(Era::Allegra),
            "mary" => Some(Era::Mary),
            "alonzo" => Some(Era::Alonzo),
            "babbage" => Some(Era::Babbage),
            "conway" => Some(Era::Conway),
            _ => None,
        }
    }
}

/// Full `transaction build-raw` descriptor
#[derive(Debug, Clone, Default)]
pub struct TxDescriptor {
    pub era: Option<Era>,
    pub inputs: Vec<TxInputDescriptor>,
    pub outputs: Vec<TxOutputDescriptor>,
    pub collateral: Vec<TxInputDescriptor>,
    pub certificates: Vec<CertificateDescriptor>,
    pub withdrawals: Vec<WithdrawalDescriptor>,
    pub mints: Vec<MintAction>,
    pub auxiliary_scripts: Vec<ScriptRef>,
    /// Metadata JSON content persisted to its designated path
    pub metadata: Option<ScriptRef>,
    pub validity: ValidityWindow,
    pub fee: Lovelace,
    pub out_file: PathBuf,
    pub protocol_params_file: PathBuf,
}

/// Reference to an already-built transaction on disk, for signing
#[derive(Debug, Clone, Default)]
pub struct SignDescriptor {
    /// Unsigned body, as written by build-raw
    pub tx_body_file: Option<PathBuf>,
    /// Previously signed transaction, for adding further signatures
    pub tx_file: Option<PathBuf>,
    pub signing_key_files: Vec<PathBuf>,
    pub out_file: PathBuf,
}

/// One unspent output as reported by the node tool's listing
///
/// Produced only by parsing; callers never construct these directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtxoRecord {
    pub tx_hash: String,
    pub index: u16,
    pub datum_hash: Option<String>,
    pub value: AssetBundle,
}

/// A wallet address with its unspent outputs and aggregated balance
#[derive(Debug, Clone)]
pub struct WalletInfo {
    pub address: String,
    pub utxos: Vec<UtxoRecord>,
    pub balance: AssetBundle,
}
