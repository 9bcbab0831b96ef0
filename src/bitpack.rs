//! Fixed-width bit fields packed MSB-first across byte boundaries.
//!
//! Field `i`, bit `j` (counting from the field's most significant bit) lands
//! on stream bit `i * FIELD_BITS + j`, which is byte `idx / 8`, bit
//! `7 - idx % 8`.

/// Width of one packed field.
pub const FIELD_BITS: usize = 5;

const FIELD_MASK: u8 = (1 << FIELD_BITS) - 1;

/// Number of bytes needed to hold `count` fields.
pub fn packed_len(count: usize) -> usize {
    (count * FIELD_BITS + 7) / 8
}

/// Pack each value's low [`FIELD_BITS`] bits.
pub fn pack(fields: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(fields.len())];
    for (i, &field) in fields.iter().enumerate() {
        let field = field & FIELD_MASK;
        for j in 0..FIELD_BITS {
            let idx = i * FIELD_BITS + j;
            let bit = (field >> (FIELD_BITS - 1 - j)) & 1;
            out[idx / 8] |= bit << (7 - idx % 8);
        }
    }
    out
}

/// Extract `count` fields from `bytes`.
///
/// Returns `None` if `bytes` is shorter than [`packed_len`]`(count)`.
pub fn unpack(bytes: &[u8], count: usize) -> Option<Vec<u8>> {
    if bytes.len() < packed_len(count) {
        return None;
    }
    let fields = (0..count)
        .map(|i| {
            (0..FIELD_BITS).fold(0u8, |field, j| {
                let idx = i * FIELD_BITS + j;
                let bit = (bytes[idx / 8] >> (7 - idx % 8)) & 1;
                field | (bit << (FIELD_BITS - 1 - j))
            })
        })
        .collect();
    Some(fields)
}
