//! Line-merge kernel.
//!
//! All four directional moves reduce to this single left-biased kernel
//! applied to rows or columns, reversed where needed. There is exactly
//! one merge implementation in the crate.

use smallvec::SmallVec;

/// Inline capacity for line scratch buffers. Boards up to 8×8 are
/// processed without heap allocation.
pub(crate) const LINE_INLINE: usize = 8;

/// Scratch buffer for one row or column.
pub(crate) type LineBuf = SmallVec<[u32; LINE_INLINE]>;

/// Compress and merge one line toward index 0, in place.
///
/// 1. Drop zeros, preserving the relative order of tiles.
/// 2. Scan left to right; a tile equal to its immediate right neighbor
///    merges into one tile of double value, and the consumed neighbor
///    is skipped so no tile merges twice in one pass. A run of three
///    equal tiles merges the leftmost pair only: `[2,2,2,0]` becomes
///    `[4,2,0,0]`, never `[8,...]`.
/// 3. Pad the right with zeros back to the original length.
///
/// Returns the total value of merged tiles (the score gain). The kernel
/// is pure over its slice and idempotent on its own output.
pub fn merge_line_left(line: &mut [u32]) -> u32 {
    let packed: LineBuf = line.iter().copied().filter(|&v| v != 0).collect();

    let mut gain = 0;
    let mut write = 0;
    let mut read = 0;
    while read < packed.len() {
        let mut value = packed[read];
        if read + 1 < packed.len() && packed[read + 1] == value {
            value *= 2;
            gain += value;
            read += 1;
        }
        line[write] = value;
        write += 1;
        read += 1;
    }
    for slot in &mut line[write..] {
        *slot = 0;
    }
    gain
}
