//! Human-readable amounts.

use alloy::primitives::{utils, U256};

/// Scale `value` down by `decimals` and render it without trailing
/// fractional zeros.
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    // alloy's units stop at 77; any U256 is below 10^78, so beyond that the
    // integer part is always zero
    let scaled = utils::format_units(value, decimals)
        .unwrap_or_else(|_| format!("0.{:0>width$}", value, width = decimals as usize));
    trim_fraction(&scaled).to_string()
}

/// Format a wei amount as ether.
pub fn format_ether(wei: U256) -> String {
    format_units(wei, 18)
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
