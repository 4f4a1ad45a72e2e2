//! FNV-1a over the grid packed to one bit per cell.

use crate::grid::Grid;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Digest of every cell's state and position.
///
/// Eight cells go into each hashed byte, column 0 in bit 7 down to column 7
/// in bit 0. Only the top bit of a cell is read, which is the one bit that
/// differs between the two sentinels.
pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for y in 0..grid.height() {
        for octet in grid.row(y).chunks_exact(8) {
            let packed = octet
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &cell)| acc | (cell & (0x80 >> i)));
            hash ^= u64::from(packed);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_grid(seed: u64) -> Grid {
        let mut grid = Grid::new(64, 32);
        grid.randomize(&mut StdRng::seed_from_u64(seed));
        grid
    }

    #[test]
    fn test_empty_row_hash() {
        // One zero byte through FNV-1a.
        let grid = Grid::new(8, 1);
        assert_eq!(fingerprint(&grid), 0xaf63_bd4c_8601_b7df);
    }

    #[test]
    fn test_position_matters() {
        let mut a = Grid::new(16, 4);
        let mut b = Grid::new(16, 4);
        a.set(0, 0, true);
        b.set(8, 0, true);
        assert_ne!(fingerprint(&a), fingerprint(&b));

        let mut c = Grid::new(16, 4);
        c.set(0, 1, true);
        assert_ne!(fingerprint(&a), fingerprint(&c));
    }

    proptest! {
        #[test]
        fn prop_deterministic(seed in any::<u64>()) {
            let grid = random_grid(seed);
            prop_assert_eq!(fingerprint(&grid), fingerprint(&grid.clone()));
        }

        #[test]
        fn prop_single_flip_changes_digest(seed in any::<u64>(), x in 0usize..64, y in 0usize..32) {
            let grid = random_grid(seed);
            let mut flipped = grid.clone();
            flipped.set(x, y, !grid.is_alive(x, y));
            prop_assert_ne!(fingerprint(&grid), fingerprint(&flipped));
        }
    }
}
