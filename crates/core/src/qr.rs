//! Scan key decoding for the QR resolver.
//!
//! A scanned code carries an opaque key of the form
//! `"<qrTypeId>and<subjectId>"`. Decoding is strict: the literal separator
//! must occur exactly once, both segments must be non-empty, and the type
//! id segment must parse as a decimal integer. Anything else is a
//! malformed key, reported as a value rather than a panic so the API layer
//! can answer with a 4xx.

use crate::types::DbId;

/// Literal separator between the QrType id and the subject id.
pub const SCAN_KEY_SEPARATOR: &str = "and";

/// A decoded scan key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanKey {
    /// Identifier of the QrType metadata record (segment 0).
    pub qr_type_id: DbId,
    /// Opaque subject identifier (segment 1), passed verbatim to the
    /// generic lookup. Its interpretation depends on the QrType's target
    /// column.
    pub subject: String,
}

/// A scan key that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed scan key {key:?}: {reason}")]
pub struct MalformedScanKey {
    pub key: String,
    pub reason: &'static str,
}

impl MalformedScanKey {
    fn new(key: &str, reason: &'static str) -> Self {
        Self {
            key: key.to_string(),
            reason,
        }
    }
}

/// Decode a raw scan key into its (type id, subject) parts.
///
/// The key must split on [`SCAN_KEY_SEPARATOR`] into exactly two non-empty
/// segments. Numeric type ids cannot themselves contain the separator, so
/// a key whose subject contains `"and"` is rejected rather than guessed at.
pub fn parse_scan_key(raw: &str) -> Result<ScanKey, MalformedScanKey> {
    let mut segments = raw.split(SCAN_KEY_SEPARATOR);
    let (type_segment, subject) = match (segments.next(), segments.next(), segments.next()) {
        (Some(t), Some(s), None) => (t, s),
        _ => {
            return Err(MalformedScanKey::new(
                raw,
                "expected exactly one 'and' separator",
            ))
        }
    };

    if type_segment.is_empty() || subject.is_empty() {
        return Err(MalformedScanKey::new(
            raw,
            "type id and subject must both be non-empty",
        ));
    }

    let qr_type_id: DbId = type_segment
        .parse()
        .map_err(|_| MalformedScanKey::new(raw, "type id is not a number"))?;

    Ok(ScanKey {
        qr_type_id,
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_simple_key() {
        assert_eq!(
            parse_scan_key("7and42"),
            Ok(ScanKey {
                qr_type_id: 7,
                subject: "42".to_string(),
            })
        );
    }

    #[test]
    fn subject_is_preserved_verbatim() {
        let key = parse_scan_key("3andABC-001").unwrap();
        assert_eq!(key.qr_type_id, 3);
        assert_eq!(key.subject, "ABC-001");
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = parse_scan_key("notanumber").unwrap_err();
        assert_eq!(err.reason, "expected exactly one 'and' separator");
    }

    #[test]
    fn repeated_separator_is_malformed() {
        assert!(parse_scan_key("7and42and9").is_err());
    }

    #[test]
    fn empty_segments_are_malformed() {
        // Trailing separator leaves an empty subject.
        assert!(parse_scan_key("7and").is_err());
        // Leading separator leaves an empty type id.
        assert!(parse_scan_key("and42").is_err());
        assert!(parse_scan_key("and").is_err());
    }

    #[test]
    fn non_numeric_type_id_is_malformed() {
        let err = parse_scan_key("sevenand42").unwrap_err();
        assert_eq!(err.reason, "type id is not a number");
    }

    #[test]
    fn empty_key_is_malformed() {
        assert!(parse_scan_key("").is_err());
    }
}
