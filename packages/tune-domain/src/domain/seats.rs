//! Seat rotation helpers.
//!
//! Roles move one seat per round. These helpers are the single source of
//! truth for that rotation so role assignment and the planner agree.

/// Rotation offset for a 1-based round number over `len` seats.
///
/// Round 1 → 0, round 2 → 1, ..., wrapping every `len` rounds.
#[inline]
pub fn rotation_offset(round_number: u32, len: usize) -> usize {
    debug_assert!(round_number >= 1, "round_number is 1-based and must be >= 1");
    if len == 0 {
        return 0;
    }
    round_number.saturating_sub(1) as usize % len
}

/// Copy of `items` rotated left by `offset` (index `offset` becomes index 0).
pub fn rotate_left<T: Clone>(items: &[T], offset: usize) -> Vec<T> {
    let mut rotated = items.to_vec();
    if !rotated.is_empty() {
        let shift = offset % rotated.len();
        rotated.rotate_left(shift);
    }
    rotated
}

/// Seat order for a round: `items` rotated by the round's offset.
pub fn rotated_for_round<T: Clone>(items: &[T], round_number: u32) -> Vec<T> {
    rotate_left(items, rotation_offset(round_number, items.len()))
}
