//! Zigzag VarInt codec.
//!
//! A signed value is folded with `(v << 1) ^ (v >> 63)` so that small
//! magnitudes of either sign become small unsigned numbers, then written
//! 7 bits at a time, least significant group first.  Bit 0x80 is set on every
//! byte except the last.

use crate::error::DecodeError;

/// Upper bound on the encoded size of any `i64` (ceil(64 / 7)).
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK:   u8 = 0x7F;
/// Only bit 63 is left for the tenth group.
const LAST_GROUP_MASK: u8 = 0x01;

#[inline]
fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
fn unzigzag(acc: u64) -> i64 {
    ((acc >> 1) as i64) ^ -((acc & 1) as i64)
}

/// Append the encoding of `value` to `out`.
pub fn write_varint(out: &mut Vec<u8>, value: i64) {
    let mut rest = zigzag(value);
    loop {
        let group = (rest as u8) & GROUP_MASK;
        rest >>= 7;
        if rest == 0 {
            out.push(group);
            return;
        }
        out.push(group | CONTINUATION);
    }
}

/// Encode `value` into a fresh, minimal-length buffer.
pub fn encode_varint(value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    write_varint(&mut out, value);
    out
}

/// Decode one VarInt from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.  At most
/// [`MAX_VARINT_LEN`] bytes are examined regardless of input length, and a
/// final group carrying bits past bit 63 is rejected rather than truncated.
pub fn decode_varint(bytes: &[u8]) -> Result<(i64, usize), DecodeError> {
    let mut acc: u64 = 0;
    for (i, &b) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        let last = b & CONTINUATION == 0;
        if last && i == MAX_VARINT_LEN - 1 && b & GROUP_MASK & !LAST_GROUP_MASK != 0 {
            return Err(DecodeError::VarIntOverflow { offset: 0 });
        }
        acc |= u64::from(b & GROUP_MASK) << (7 * i);
        if last {
            return Ok((unzigzag(acc), i + 1));
        }
    }
    if bytes.len() >= MAX_VARINT_LEN {
        Err(DecodeError::VarIntTooLong { offset: 0 })
    } else {
        Err(DecodeError::UnexpectedEndOfBytes { offset: bytes.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CASES: &[i64] = &[
        0,
        1,
        -1,
        42,
        -42,
        1000,
        -1000,
        i16::MAX as i64,
        i16::MIN as i64,
        1 << 15,
        -(1 << 15),
        i32::MAX as i64,
        i32::MIN as i64,
        1 << 31,
        -(1 << 31),
        i64::MAX,
        i64::MIN,
    ];

    #[test]
    fn roundtrip_known_values() {
        for &v in CASES {
            let bytes = encode_varint(v);
            let (decoded, used) = decode_varint(&bytes).unwrap();
            assert_eq!(decoded, v);
            assert_eq!(used, bytes.len(), "length mismatch for {v}");
        }
    }

    #[test]
    fn small_values_are_single_byte() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(-1), vec![0x01]);
        assert_eq!(encode_varint(1), vec![0x02]);
        assert_eq!(encode_varint(-64), vec![0x7F]);
        assert_eq!(encode_varint(64), vec![0x80, 0x01]);
    }

    #[test]
    fn extremes_take_ten_bytes() {
        assert_eq!(encode_varint(i64::MAX).len(), MAX_VARINT_LEN);
        assert_eq!(encode_varint(i64::MIN).len(), MAX_VARINT_LEN);
    }

    #[test]
    fn trailing_bytes_are_left_alone() {
        let (v, used) = decode_varint(&[0x02, 0xFF, 0xFF]).unwrap();
        assert_eq!((v, used), (1, 1));
    }

    #[test]
    fn continuation_on_last_byte() {
        assert_eq!(
            decode_varint(&[0x80, 0x80]),
            Err(DecodeError::UnexpectedEndOfBytes { offset: 2 })
        );
        assert_eq!(
            decode_varint(&[]),
            Err(DecodeError::UnexpectedEndOfBytes { offset: 0 })
        );
    }

    #[test]
    fn unterminated_run_is_bounded() {
        let hostile = vec![0xFFu8; 4096];
        assert_eq!(
            decode_varint(&hostile),
            Err(DecodeError::VarIntTooLong { offset: 0 })
        );
    }

    #[test]
    fn tenth_byte_beyond_bit_63() {
        let mut bytes = vec![0xFFu8; MAX_VARINT_LEN - 1];
        bytes.push(0x7F);
        assert_eq!(decode_varint(&bytes), Err(DecodeError::VarIntOverflow { offset: 0 }));
        bytes[MAX_VARINT_LEN - 1] = 0x02;
        assert_eq!(decode_varint(&bytes), Err(DecodeError::VarIntOverflow { offset: 0 }));

        // 0x01 is the only legal tenth byte and is what the extremes end with
        bytes[MAX_VARINT_LEN - 1] = 0x01;
        assert_eq!(decode_varint(&bytes), Ok((i64::MIN, MAX_VARINT_LEN)));
        assert_eq!(encode_varint(i64::MIN), bytes);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(v in any::<i64>()) {
            let bytes = encode_varint(v);
            prop_assert!(bytes.len() <= MAX_VARINT_LEN);
            prop_assert_eq!(decode_varint(&bytes).unwrap(), (v, bytes.len()));
        }

        #[test]
        fn prop_no_superfluous_continuation(v in any::<i64>()) {
            let bytes = encode_varint(v);
            let last = bytes[bytes.len() - 1];
            prop_assert_eq!(last & CONTINUATION, 0);
            if bytes.len() > 1 {
                prop_assert_ne!(last, 0);
            }
        }
    }
}
