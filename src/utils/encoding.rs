//! Base64 helpers for judge payloads

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode a string for submission to the judge
pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode a base64 field defensively.
///
/// The judge occasionally returns fields that are not valid base64 (or not
/// valid UTF-8 once decoded). In that case the original string is returned
/// unchanged so the caller still gets some diagnostic text.
pub fn decode_base64_lossy(input: &str) -> String {
    // The judge wraps long payloads with newlines
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => input.to_string(),
        },
        Err(_) => input.to_string(),
    }
}
