/// Property tests for the approximate-distance metric the placement
/// selector ranks candidates with.

use broodlink_shared::{Position, TilePosition};
use proptest::prelude::*;

proptest! {
    #[test]
    fn distance_is_symmetric(
        ax in 0..4096i32, ay in 0..4096i32,
        bx in 0..4096i32, by in 0..4096i32,
    ) {
        let a = Position::new(ax, ay);
        let b = Position::new(bx, by);
        prop_assert_eq!(a.approx_distance(&b), b.approx_distance(&a));
    }

    #[test]
    fn distance_is_bounded_by_chebyshev_and_manhattan(
        ax in 0..4096i32, ay in 0..4096i32,
        bx in 0..4096i32, by in 0..4096i32,
    ) {
        let a = Position::new(ax, ay);
        let b = Position::new(bx, by);
        let dx = (ax - bx).unsigned_abs();
        let dy = (ay - by).unsigned_abs();
        let d = a.approx_distance(&b);
        prop_assert!(d >= dx.max(dy), "{d} under the chebyshev floor");
        prop_assert!(d <= dx + dy, "{d} over the manhattan ceiling");
    }

    #[test]
    fn tile_distance_matches_the_same_formula(
        ax in 0..256i32, ay in 0..256i32,
        bx in 0..256i32, by in 0..256i32,
    ) {
        let scaled = Position::new(ax, ay).approx_distance(&Position::new(bx, by));
        let tiles = TilePosition::new(ax, ay).approx_distance(&TilePosition::new(bx, by));
        prop_assert_eq!(scaled, tiles);
    }
}
