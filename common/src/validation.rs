//! Error taxonomy for the codec

use thiserror::Error;

/// Descriptor rejected before any encoding or file write
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Outputs must spell an explicit positive base-coin quantity; there is
    /// no silent zero default
    #[error("output to {address} has no positive lovelace quantity")]
    OutputWithoutLovelace { address: String },

    #[error("mint action for {asset_id} has a zero quantity")]
    ZeroMintQuantity { asset_id: String },

    #[error("mint action has an empty asset id")]
    EmptyMintAssetId,

    #[error("{context} must supply both inline content and a destination path")]
    IncompleteScriptRef { context: String },

    #[error("sign descriptor references neither a tx-body-file nor a tx-file")]
    MissingTxReference,
}

/// Tool output that does not match the expected shape
///
/// An empty or header-only listing is a valid empty UTxO set, not an error;
/// anything malformed beyond that raises rather than being skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("listing is shorter than its two header lines")]
    TruncatedListing,

    #[error("listing row {row} has fewer than three columns")]
    ShortRow { row: usize },

    #[error("listing row {row} has an unparsable index {index:?}")]
    BadIndex { row: usize, index: String },

    #[error("listing row {row} has a malformed asset segment {segment:?}")]
    BadAssetSegment { row: usize, segment: String },

    #[error("expected an integer fee, got {line:?}")]
    BadFeeLine { line: String },

    #[error("expected a transaction id, got an empty response")]
    EmptyTxId,
}
