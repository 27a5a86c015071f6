/// Index before `index` in a list of `len` items, wrapping to the last one.
/// An empty list always yields 0.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    match (index, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (index, len) if index >= len => len - 1,
        (index, _) => index - 1,
    }
}

/// Index after `index` in a list of `len` items, wrapping to the first one.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_increment(0, 3), 1);
    }

    #[test]
    fn empty_lists_stay_at_zero() {
        assert_eq!(wrap_decrement(0, 0), 0);
        assert_eq!(wrap_increment(5, 0), 0);
    }

    #[test]
    fn stale_index_is_clamped_going_back() {
        assert_eq!(wrap_decrement(7, 3), 2);
    }
}
