use anyhow::{ensure, Context, Result};
use itertools::Itertools;

/// Optional $ or 0x prefix, then one or two hex digits.
pub fn decode_u8(mut s: &str) -> Result<u8> {
    ensure!(!s.contains(char::is_whitespace), "unexpected whitespace in {s:?}");

    if let Some(stripped) = s.strip_prefix('$') {
        s = stripped;
    } else if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        s = stripped;
    }

    ensure!(!s.is_empty(), "no hex digits");
    ensure!(s.len() <= 2, "too many hex digits: {s:?}");

    let digits = format!("{s:0>2}");
    let (hi, lo) = digits
        .chars()
        .collect_tuple()
        .with_context(|| format!("not a hex byte: {s:?}"))?;
    let hi = hex_to_nibble(hi)?;
    let lo = hex_to_nibble(lo)?;
    Ok(hi << 4 | lo)
}

/// Two uppercase digits, no prefix.
pub fn encode_u8(byte: u8) -> String {
    format!("{byte:02X}")
}

fn hex_to_nibble(c: char) -> Result<u8> {
    let n: u32 = c
        .to_digit(16)
        .with_context(|| format!("not a hex digit: {c:?}"))?;
    Ok(n as u8)
}
