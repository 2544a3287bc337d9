//! Decoding of the node tool's UTxO listing

use dashu_int::UBig;
use stoa_common::{AssetBundle, ParseError, Quantity, UtxoRecord};

const DATUM_NONE: &str = "TxOutDatumNone";
const DATUM_HASH: &str = "TxOutDatumHash";

/// Parse the columnar listing: two header lines, then one row per UTxO
///
/// A blank or header-only listing is a valid empty set. A malformed row
/// raises; rows are never silently skipped. Row order is preserved.
pub fn parse_utxo_listing(listing: &str) -> Result<Vec<UtxoRecord>, ParseError> {
    if listing.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = listing.lines();
    // Title and separator rows carry no data
    if lines.next().is_none() || lines.next().is_none() {
        return Err(ParseError::TruncatedListing);
    }

    let mut records = Vec::new();
    for (row, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(row, line)?);
    }
    Ok(records)
}

fn parse_row(row: usize, line: &str) -> Result<UtxoRecord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::ShortRow { row });
    }

    let tx_hash = tokens[0].to_string();
    let index = tokens[1].parse::<u16>().map_err(|_| ParseError::BadIndex {
        row,
        index: tokens[1].to_string(),
    })?;

    let mut value = AssetBundle::new();
    let mut datum_hash = None;

    // The remaining columns form `+`-joined segments: asset amounts and one
    // datum marker
    let rest = tokens[2..].join(" ");
    for segment in rest.split('+') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if segment.contains(DATUM_NONE) {
            continue;
        }
        if segment.contains(DATUM_HASH) {
            // `TxOutDatumHash <era tag> "<hash>"`
            datum_hash = segment
                .split_whitespace()
                .nth(2)
                .map(|token| token.trim_matches('"').to_string());
            continue;
        }

        let (quantity, asset_id) =
            segment.split_once(' ').ok_or_else(|| ParseError::BadAssetSegment {
                row,
                segment: segment.to_string(),
            })?;
        let quantity: Quantity =
            quantity.parse::<UBig>().map_err(|_| ParseError::BadAssetSegment {
                row,
                segment: segment.to_string(),
            })?;
        // A repeated id within one row is summed, not rejected
        value.add(asset_id.trim().to_string(), quantity);
    }

    Ok(UtxoRecord {
        tx_hash,
        index,
        datum_hash,
        value,
    })
}

/// Fold a set of UTxO records into one balance
///
/// Seeded with a zero base-coin entry so the balance always reports
/// lovelace, including for an empty set.
pub fn aggregate_balance(records: &[UtxoRecord]) -> AssetBundle {
    let mut balance = AssetBundle::from_lovelace(0u64);
    for record in records {
        balance.merge_from(&record.value);
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoa_common::LOVELACE;

    const HEADER: &str = "                           TxHash                                 TxIx        Amount\n--------------------------------------------------------------------------------------\n";

    #[test]
    fn test_header_only_listing_is_empty() {
        assert!(parse_utxo_listing(HEADER).unwrap().is_empty());
        assert!(parse_utxo_listing("").unwrap().is_empty());
        assert!(parse_utxo_listing("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_single_line_listing_is_truncated() {
        assert_eq!(
            parse_utxo_listing("TxHash TxIx Amount"),
            Err(ParseError::TruncatedListing)
        );
    }

    #[test]
    fn test_multi_asset_row() {
        let listing = format!(
            "{HEADER}5291dee7e     1        1400000 lovelace + 2 538067.756e646566696e6564 + TxOutDatumNone\n"
        );
        let records = parse_utxo_listing(&listing).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.tx_hash, "5291dee7e");
        assert_eq!(record.index, 1);
        assert_eq!(record.datum_hash, None);
        assert_eq!(record.value.get(LOVELACE), UBig::from(1400000u64));
        assert_eq!(
            record.value.get("538067.756e646566696e6564"),
            UBig::from(2u64)
        );
        assert_eq!(record.value.len(), 2);
    }

    #[test]
    fn test_datum_hash_row() {
        let listing = format!(
            "{HEADER}aa 0 5000000 lovelace + TxOutDatumHash ScriptDataInBabbageEra \"93b8\"\n"
        );
        let records = parse_utxo_listing(&listing).unwrap();
        assert_eq!(records[0].datum_hash.as_deref(), Some("93b8"));
        assert_eq!(records[0].value.get(LOVELACE), UBig::from(5000000u64));
    }

    #[test]
    fn test_row_order_is_preserved() {
        let listing = format!(
            "{HEADER}aa 0 1 lovelace + TxOutDatumNone\nbb 1 2 lovelace + TxOutDatumNone\n"
        );
        let records = parse_utxo_listing(&listing).unwrap();
        assert_eq!(records[0].tx_hash, "aa");
        assert_eq!(records[1].tx_hash, "bb");
    }

    #[test]
    fn test_repeated_asset_in_one_row_is_summed() {
        let listing = format!("{HEADER}aa 0 10 lovelace + 3 p.t + 4 p.t + TxOutDatumNone\n");
        let records = parse_utxo_listing(&listing).unwrap();
        assert_eq!(records[0].value.get("p.t"), UBig::from(7u64));
    }

    #[test]
    fn test_bad_index_raises() {
        let listing = format!("{HEADER}aa xx 10 lovelace + TxOutDatumNone\n");
        assert_eq!(
            parse_utxo_listing(&listing),
            Err(ParseError::BadIndex {
                row: 0,
                index: "xx".to_string()
            })
        );
    }

    #[test]
    fn test_bad_asset_segment_raises() {
        let listing = format!("{HEADER}aa 0 notanumber lovelace + garbage + TxOutDatumNone\n");
        assert!(matches!(
            parse_utxo_listing(&listing),
            Err(ParseError::BadAssetSegment { .. })
        ));
    }

    #[test]
    fn test_short_row_raises() {
        let listing = format!("{HEADER}aa 0\n");
        assert_eq!(
            parse_utxo_listing(&listing),
            Err(ParseError::ShortRow { row: 0 })
        );
    }

    #[test]
    fn test_balance_aggregation() {
        let listing = format!(
            "{HEADER}aa 0 90 lovelace + TxOutDatumNone\nbb 1 30 lovelace + 1 nft1 + TxOutDatumNone\n"
        );
        let records = parse_utxo_listing(&listing).unwrap();
        let balance = aggregate_balance(&records);

        assert_eq!(balance.get(LOVELACE), UBig::from(120u64));
        assert_eq!(balance.get("nft1"), UBig::from(1u64));
        assert_eq!(balance.len(), 2);
    }

    #[test]
    fn test_empty_set_balance_still_reports_lovelace() {
        let balance = aggregate_balance(&[]);
        assert!(balance.contains(LOVELACE));
        assert_eq!(balance.get(LOVELACE), UBig::ZERO);
    }
}
