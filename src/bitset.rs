//! C8 — Bitset export for the external tape collaborator (spec §6).
//!
//! Packs the alive (`s == 1`) projection of a snapshot into a row-major
//! bitset of `W*H` bits. Repurposes the teacher's original storage layout
//! (`lib.rs::Grid`'s row-major `Vec<u64>` of 64-cell words) as an export
//! format rather than the grid's primary storage, since the kernel now needs
//! `u16`-wide cells to carry decay states.
//!
//! Round-trip guarantee (spec §6): `unpack(pack(snapshot)) == snapshot` when
//! `numStates == 2`. For `numStates > 2` only the alive projection survives;
//! decay states are intentionally lossy under this wire format.

/// Pack the alive projection of `snapshot` (row-major, `width * height`
/// cells) into `ceil(width*height / 64)` 64-bit words.
pub fn pack(snapshot: &[u16], width: usize, height: usize) -> Vec<u64> {
    let total = width * height;
    let words = total.div_ceil(64);
    let mut bits = vec![0u64; words];
    for (i, &state) in snapshot.iter().enumerate().take(total) {
        if state == 1 {
            bits[i / 64] |= 1u64 << (i % 64);
        }
    }
    bits
}

/// Unpack a bitset produced by `pack` back into a `width * height` cell
/// vector of `0`/`1` values (the alive/dead projection).
pub fn unpack(bits: &[u64], width: usize, height: usize) -> Vec<u16> {
    let total = width * height;
    let mut out = vec![0u16; total];
    for (i, slot) in out.iter_mut().enumerate() {
        let word = bits.get(i / 64).copied().unwrap_or(0);
        if word & (1u64 << (i % 64)) != 0 {
            *slot = 1;
        }
    }
    out
}
