//! # Club Entry
//!
//! The active session screen shows a QR code the door scanner reads. The
//! image itself comes from a public QR rendering service; this module only
//! builds the payload and the request URL, it never calls the service.

use url::Url;

use crate::error::CoreResult;

/// Prefix of every entry payload.
pub const ENTRY_PREFIX: &str = "TENERGY-ENTRY-";

/// QR rendering endpoint.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default QR image edge in pixels.
pub const DEFAULT_QR_SIZE: u32 = 200;

/// String encoded in the QR code for a booking.
pub fn entry_payload(booking_id: &str) -> String {
    format!("{}{}", ENTRY_PREFIX, booking_id)
}

/// URL of a square QR image encoding `payload`.
///
/// ## Example
/// ```rust
/// use tenergy_core::entry::{entry_payload, qr_code_url};
///
/// let url = qr_code_url(&entry_payload("abc123"), 200).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=TENERGY-ENTRY-abc123"
/// );
/// ```
pub fn qr_code_url(payload: &str, size: u32) -> CoreResult<Url> {
    let size = format!("{}x{}", size, size);
    let url = Url::parse_with_params(QR_ENDPOINT, &[("size", size.as_str()), ("data", payload)])?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_prefix() {
        assert_eq!(entry_payload("42"), "TENERGY-ENTRY-42");
    }

    #[test]
    fn test_payload_is_query_encoded() {
        let url = qr_code_url("a b&c", 120).unwrap();
        let data: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            data,
            vec![
                ("size".to_string(), "120x120".to_string()),
                ("data".to_string(), "a b&c".to_string()),
            ]
        );
        assert!(!url.as_str().contains("a b"));
    }

    #[test]
    fn test_uuid_payload_survives_verbatim() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let url = qr_code_url(&entry_payload(id), DEFAULT_QR_SIZE).unwrap();
        assert!(url.as_str().ends_with(&format!("data=TENERGY-ENTRY-{}", id)));
    }
}
