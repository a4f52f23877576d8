//! Wallet address normalization utilities.
//!
//! This module is the canonical source for address normalization in the
//! workspace. Other crates should import from here rather than defining
//! their own logic.
//!
//! Wallet addresses are 20-byte values, but they arrive in different shapes:
//! - Mixed case: "0x1f1F860A0A3bEC70107d31CFDcAEfF2E59631a27"
//! - Without prefix: "1f1f860a..."
//!
//! This module provides utilities to normalize addresses to a consistent
//! format and to render the short display form shown next to the connect
//! indicator.

/// Number of hex characters in a full wallet address (20 bytes).
const ADDRESS_HEX_LEN: usize = 40;

/// Normalize an address to lowercase with 0x prefix and full 40 hex characters.
///
/// This is the canonical address format for internal use and comparisons.
///
/// # Examples
///
/// ```
/// use mint_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x1f1F860A0A3bEC70107d31CFDcAEfF2E59631a27"),
///     "0x1f1f860a0a3bec70107d31cfdcaeff2e59631a27"
/// );
/// assert_eq!(
///     normalize_address("ABC"),
///     "0x0000000000000000000000000000000000000abc"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let addr = addr.trim();
    let hex = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr)
        .to_lowercase();
    if hex.len() < ADDRESS_HEX_LEN {
        format!("0x{:0>40}", hex)
    } else {
        format!("0x{}", &hex[..ADDRESS_HEX_LEN])
    }
}

/// Normalize an address, returning None if it's not a valid hex address.
///
/// # Examples
///
/// ```
/// use mint_types::address::normalize_address_checked;
///
/// assert!(normalize_address_checked("0x1f1F860A0A3bEC70107d31CFDcAEfF2E59631a27").is_some());
/// assert_eq!(normalize_address_checked("not-hex"), None);
/// ```
pub fn normalize_address_checked(addr: &str) -> Option<String> {
    let normalized = normalize_address(addr);
    // Validate by decoding the hex payload back to 20 bytes
    let bytes = hex::decode(normalized.strip_prefix("0x")?).ok()?;
    if bytes.len() != 20 {
        return None;
    }
    Some(normalized)
}

/// Render the short display form: first four bytes, ellipsis, last two.
///
/// This is the form shown next to the wallet connection indicator.
///
/// # Examples
///
/// ```
/// use mint_types::address::short_address;
///
/// assert_eq!(
///     short_address("0x1f1f860a0a3bec70107d31cfdcaeff2e59631a27"),
///     "0x1f1f...1a27"
/// );
/// ```
pub fn short_address(addr: &str) -> String {
    let normalized = normalize_address(addr);
    format!(
        "{}...{}",
        &normalized[..6],
        &normalized[normalized.len() - 4..]
    )
}
