//! Hex text form shared by the 32-byte identity types.

use core::fmt;

use crate::error::PoolError;

/// Writes `bytes` as `0x`-prefixed lowercase hex.
pub(super) fn write(bytes: &[u8; 32], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "0x{}", hex::encode(bytes))
}

/// Parses 64 hex digits, with or without a `0x` prefix.
pub(super) fn parse(text: &str) -> Result<[u8; 32], PoolError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| PoolError::InvalidToken("expected 32 bytes of hex"))?;
    Ok(out)
}
