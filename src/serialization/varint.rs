//! CompactSize VarInt encoding/decoding
//!
//! The VarInt prefixes every variable-length list on the wire, including the
//! transaction count of a block message. It uses 1, 3, 5 or 9 bytes:
//!
//! - value < 0xfd: single byte
//! - value <= 0xffff: 0xfd prefix + 2 bytes (little-endian)
//! - value <= 0xffffffff: 0xfe prefix + 4 bytes (little-endian)
//! - otherwise: 0xff prefix + 8 bytes (little-endian)
//!
//! Decoding rejects values that were not encoded in their shortest form, as
//! the reference node does.

use crate::error::{Result, WireError};

/// Number of bytes `value` occupies once encoded
#[inline]
pub fn varint_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append the VarInt encoding of `value` to `buf`
pub fn write_varint(buf: &mut Vec<u8>, value: u64) {
    match varint_len(value) {
        1 => buf.push(value as u8),
        3 => {
            buf.push(0xfd);
            buf.extend_from_slice(&(value as u16).to_le_bytes());
        }
        5 => {
            buf.push(0xfe);
            buf.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Encode a u64 value as a VarInt
///
/// # Examples
///
/// ```
/// use blvm_wire::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(252), vec![252]);
/// assert_eq!(encode_varint(253), vec![0xfd, 253, 0]);
/// assert_eq!(encode_varint(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(varint_len(value));
    write_varint(&mut result, value);
    debug_assert_eq!(result.len(), varint_len(value));
    result
}

/// Decode a VarInt from the start of `data`
///
/// Returns the decoded value and the number of bytes consumed. Bytes after
/// the VarInt are ignored.
///
/// # Examples
///
/// ```
/// use blvm_wire::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[252]), Ok((252, 1)));
/// assert_eq!(decode_varint(&[0xfd, 253, 0]), Ok((253, 3)));
/// assert!(decode_varint(&[]).is_err());
/// assert!(decode_varint(&[0xfd, 252, 0]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let first_byte = *data.first().ok_or(WireError::TruncatedInput {
        needed: 1,
        remaining: 0,
    })?;

    let (width, minimum) = match first_byte {
        b if b < 0xfd => return Ok((b as u64, 1)),
        0xfd => (2, 0xfd),
        0xfe => (4, 0x1_0000),
        _ => (8, 0x1_0000_0000),
    };

    let total = 1 + width;
    if data.len() < total {
        return Err(WireError::TruncatedInput {
            needed: total,
            remaining: data.len(),
        });
    }

    let mut le = [0u8; 8];
    le[..width].copy_from_slice(&data[1..total]);
    let value = u64::from_le_bytes(le);

    if value < minimum {
        return Err(WireError::NonCanonicalVarInt(value));
    }

    Ok((value, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_varint_each_width() {
        assert_eq!(encode_varint(1), vec![1]);
        assert_eq!(encode_varint(256), vec![0xfd, 0, 1]);
        assert_eq!(encode_varint(0xffffffff), vec![0xfe, 255, 255, 255, 255]);
        assert_eq!(
            encode_varint(0x100000000),
            vec![0xff, 0, 0, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn test_write_varint_appends() {
        let mut buf = vec![0xaa];
        write_varint(&mut buf, 0xfd);
        assert_eq!(buf, vec![0xaa, 0xfd, 0xfd, 0x00]);
    }

    #[test]
    fn test_decode_varint_ignores_trailing_bytes() {
        assert_eq!(decode_varint(&[0x05, 0xff, 0xff]), Ok((5, 1)));
        assert_eq!(decode_varint(&[0xfe, 0, 0, 1, 0, 9]), Ok((65536, 5)));
    }

    #[test]
    fn test_decode_varint_insufficient_bytes() {
        assert_eq!(
            decode_varint(&[]),
            Err(WireError::TruncatedInput {
                needed: 1,
                remaining: 0
            })
        );
        assert_eq!(
            decode_varint(&[0xfd, 0]),
            Err(WireError::TruncatedInput {
                needed: 3,
                remaining: 2
            })
        );
        assert!(decode_varint(&[0xfe, 0, 0, 0]).is_err());
        assert!(decode_varint(&[0xff, 0, 0, 0, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_decode_varint_non_canonical() {
        assert_eq!(
            decode_varint(&[0xfd, 252, 0]),
            Err(WireError::NonCanonicalVarInt(252))
        );
        assert_eq!(
            decode_varint(&[0xfe, 255, 255, 0, 0]),
            Err(WireError::NonCanonicalVarInt(0xffff))
        );
        assert_eq!(
            decode_varint(&[0xff, 255, 255, 255, 255, 0, 0, 0, 0]),
            Err(WireError::NonCanonicalVarInt(0xffffffff))
        );
    }

    #[test]
    fn test_varint_len_matches_encoding() {
        for value in [0, 0xfc, 0xfd, 0xffff, 0x10000, 0xffffffff, 0x100000000, u64::MAX] {
            assert_eq!(varint_len(value), encode_varint(value).len());
        }
    }
}
