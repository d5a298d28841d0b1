//! Stable string hashing used for fallback color assignment.
//!
//! The hash must give the same value on every platform and in every process,
//! so `std::hash::DefaultHasher` (randomly seeded per process) is not usable here.

/// Seed of the djb2 hash.
pub const DJB2_SEED: u32 = 5381;

/// djb2 (XOR variant) over the UTF-16 code units of `input`.
///
/// Per unit: `acc = (acc * 33) ^ unit`, with 32-bit unsigned wraparound.
/// UTF-16 units are hashed (not bytes or chars) so labels map to the same
/// fallback color as in the browser front-end.
///
/// ```
/// use chart_palette::hash::djb2;
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("a"), 177_604);
/// ```
pub fn djb2(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(DJB2_SEED, |acc, unit| acc.wrapping_mul(33) ^ u32::from(unit))
}
