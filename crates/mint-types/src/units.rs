//! Wei/ETH unit helpers.
//!
//! Costs come off the chain as integer wei. The storefront displays prices
//! as ETH with four decimal places, so this module owns the conversion in
//! both directions. Keeping amounts as `u128` wei internally avoids float
//! drift when multiplying cost by quantity.

use anyhow::{anyhow, Result};

/// Wei per whole ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

// 10^14 wei = 0.0001 ETH, the display resolution
const WEI_PER_DISPLAY_UNIT: u128 = 100_000_000_000_000;

/// Format a wei amount as an ETH string with four decimal places.
///
/// Rounds half-up at the fourth decimal, matching the storefront display.
///
/// # Examples
///
/// ```
/// use mint_types::units::{format_eth, WEI_PER_ETH};
///
/// assert_eq!(format_eth(WEI_PER_ETH / 100), "0.0100");
/// assert_eq!(format_eth(3 * WEI_PER_ETH / 2), "1.5000");
/// assert_eq!(format_eth(0), "0.0000");
/// ```
pub fn format_eth(wei: u128) -> String {
    // Round to the nearest display unit, then split whole/fractional
    let rounded_units = (wei + WEI_PER_DISPLAY_UNIT / 2) / WEI_PER_DISPLAY_UNIT;
    let whole = rounded_units / 10_000;
    let frac = rounded_units % 10_000;
    format!("{}.{:04}", whole, frac)
}

/// Parse a decimal ETH string (e.g. "0.05") into wei.
///
/// Accepts up to 18 fractional digits; anything beyond that is rejected
/// rather than silently truncated.
pub fn parse_eth(value: &str) -> Result<u128> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("empty ETH amount"));
    }
    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };
    if frac.len() > 18 {
        return Err(anyhow!(
            "ETH amount '{}' has more than 18 fractional digits",
            value
        ));
    }
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| anyhow!("invalid ETH amount '{}'", value))?
    };
    let frac_wei: u128 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<18}", frac);
        padded
            .parse()
            .map_err(|_| anyhow!("invalid ETH amount '{}'", value))?
    };
    whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| anyhow!("ETH amount '{}' overflows", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(0), "0.0000");
        assert_eq!(format_eth(WEI_PER_ETH), "1.0000");
        assert_eq!(format_eth(WEI_PER_ETH / 20), "0.0500");
        assert_eq!(format_eth(25 * WEI_PER_ETH / 10), "2.5000");
        // Rounds half-up at the fourth decimal
        assert_eq!(format_eth(WEI_PER_DISPLAY_UNIT / 2), "0.0001");
        assert_eq!(format_eth(WEI_PER_DISPLAY_UNIT / 2 - 1), "0.0000");
    }

    #[test]
    fn test_parse_eth() {
        assert_eq!(parse_eth("1").unwrap(), WEI_PER_ETH);
        assert_eq!(parse_eth("0.05").unwrap(), WEI_PER_ETH / 20);
        assert_eq!(parse_eth(".5").unwrap(), WEI_PER_ETH / 2);
        assert_eq!(parse_eth("2.5").unwrap(), 5 * WEI_PER_ETH / 2);
        assert!(parse_eth("").is_err());
        assert!(parse_eth("abc").is_err());
        assert!(parse_eth("0.0000000000000000001").is_err());
    }

    #[test]
    fn test_round_trip() {
        let wei = parse_eth("0.0420").unwrap();
        assert_eq!(format_eth(wei), "0.0420");
    }
}
