//! Scalar extraction from single-line tool responses

use stoa_common::{Lovelace, ParseError};

/// First whitespace token of the min-fee response, as lovelace
///
/// The remainder of the line (a unit suffix) is ignored.
pub fn parse_min_fee(response: &str) -> Result<Lovelace, ParseError> {
    let token = response.split_whitespace().next().ok_or_else(|| ParseError::BadFeeLine {
        line: response.to_string(),
    })?;
    token.parse::<Lovelace>().map_err(|_| ParseError::BadFeeLine {
        line: response.to_string(),
    })
}

/// The tx-id response is a single trimmed line; no further parsing
pub fn parse_tx_id(response: &str) -> Result<String, ParseError> {
    let id = response.trim();
    if id.is_empty() {
        return Err(ParseError::EmptyTxId);
    }
    Ok(id.to_string())
}
