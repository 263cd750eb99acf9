//! Deterministic vertex-id scrambling.
//!
//! The recursive address of an R-MAT vertex encodes the quadrant choices made
//! while it was synthesized, so low ids are systematically heavier than high
//! ids. Scrambling runs a SplitMix64-style finalizer restricted to the id
//! width, which keeps the output inside the id space and makes the mapping a
//! bijection on `bits`-wide values.

use crate::VertexId;

const SCRAMBLE_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;
const SCRAMBLE_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SCRAMBLE_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Returns the mask selecting the low `bits` bits of a vertex id.
///
/// # Examples
/// ```
/// use rmat_core::id_mask;
///
/// assert_eq!(id_mask(0), 0);
/// assert_eq!(id_mask(3), 0b111);
/// assert_eq!(id_mask(64), u64::MAX);
/// ```
#[must_use]
pub const fn id_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    }
}

/// Scrambles `id` within a `bits`-wide id space.
///
/// The function is pure: equal inputs always give equal outputs, on every
/// platform. Bits of `id` above `bits` are ignored, and the result never
/// exceeds [`id_mask`]`(bits)`. Every step (offset addition, xor-shift, odd
/// multiplication) is invertible modulo `2^bits`, so no two ids collide.
///
/// # Examples
/// ```
/// use rmat_core::scramble;
///
/// let scrambled: Vec<u64> = (0..8).map(|id| scramble(id, 3)).collect();
/// let mut sorted = scrambled.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..8).collect::<Vec<_>>());
/// assert_ne!(scrambled, sorted);
/// ```
#[must_use]
pub const fn scramble(id: VertexId, bits: u32) -> VertexId {
    if bits == 0 {
        return 0;
    }
    let mask = id_mask(bits);
    let shift = bits.div_ceil(2);

    let mut state = id.wrapping_add(SCRAMBLE_OFFSET) & mask;
    state = (state ^ (state >> shift)).wrapping_mul(SCRAMBLE_MULT_A) & mask;
    state = (state ^ (state >> shift)).wrapping_mul(SCRAMBLE_MULT_B) & mask;
    state ^ (state >> shift)
}
