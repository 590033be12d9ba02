//! Filename decoding for flight snapshot files.
//!
//! Snapshot files follow the convention
//! `flight-history-tropical-flights-<destination>-<origin>-<suffix>.json`,
//! where `<destination>` is normally a single hyphen-delimited token.

/// Fixed filename prefix every snapshot file carries.
pub const FILE_PREFIX: &str = "flight-history-tropical-flights-";

/// Fixed extension every snapshot file carries.
pub const FILE_SUFFIX: &str = ".json";

/// The one destination whose code itself contains the delimiter.
const MULTI_TOKEN_DESTINATION: &str = "gran-canaria";

/// Strips the fixed prefix and `.json` extension from a filename,
/// returning the encoded route label. Filenames outside the convention
/// return `None` and are not snapshot files.
pub fn label_from_filename(filename: &str) -> Option<&str> {
    filename.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)
}

/// Decodes a route label into `(destination_code, origin_airport_code)`.
///
/// The label is hyphen-delimited: the first token is the destination and
/// the second the origin airport. Destination codes are not guaranteed
/// single-token, so the one known multi-token code is matched as a whole
/// before general tokenization. Any other hyphenated destination added to
/// the lookup tables needs its own branch here; general disambiguation is
/// not attempted.
///
/// Labels with fewer than two tokens, or an empty token in either
/// position, decode to `None`.
pub fn decode_label(label: &str) -> Option<(String, String)> {
    // The bare multi-token name leaves no token for the origin.
    if label == MULTI_TOKEN_DESTINATION {
        return None;
    }

    let (destination, rest) = match label
        .strip_prefix(MULTI_TOKEN_DESTINATION)
        .and_then(|rest| rest.strip_prefix('-'))
    {
        Some(rest) => (MULTI_TOKEN_DESTINATION, rest),
        None => {
            let mut parts = label.splitn(2, '-');
            (parts.next()?, parts.next()?)
        }
    };

    let origin = rest.split('-').next().unwrap_or("");

    if destination.is_empty() || origin.is_empty() {
        return None;
    }

    Some((destination.to_string(), origin.to_string()))
}
