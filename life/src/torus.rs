//! Index arithmetic on a torus.

/// Moves `coord` by `offset` on an axis of length `size`, wrapping at both ends.
#[inline]
pub fn wrap(coord: usize, size: usize, offset: isize) -> usize {
    (coord as isize + offset).rem_euclid(size as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inside() {
        assert_eq!(wrap(3, 8, 1), 4);
        assert_eq!(wrap(3, 8, -1), 2);
        assert_eq!(wrap(3, 8, 0), 3);
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(0, 8, -1), 7);
        assert_eq!(wrap(7, 8, 1), 0);
        assert_eq!(wrap(7, 8, 2), 1);
        assert_eq!(wrap(6, 8, 2), 0);
    }

    #[test]
    fn test_wrap_offsets_larger_than_axis() {
        assert_eq!(wrap(1, 3, 5), 0);
        assert_eq!(wrap(1, 3, -5), 2);
    }
}
