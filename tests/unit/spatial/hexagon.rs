//! Tests for hexagon validation and boundary geometry

#[cfg(test)]
mod tests {
    use lozenge_cftp::io::configuration::MAX_SIDE_LENGTH;
    use lozenge_cftp::math::geometry::double_signed_area;
    use lozenge_cftp::{HexagonSize, SamplerError};

    // Tests zero side lengths are rejected with the offending parameter named
    // Verified by only validating side a
    #[test]
    fn test_zero_side_rejected() {
        for (a, b, c, name) in [(0, 1, 1, "a"), (1, 0, 1, "b"), (1, 1, 0, "c")] {
            match HexagonSize::new(a, b, c) {
                Err(SamplerError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, name),
                other => unreachable!("expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests oversized hexagons are rejected
    // Verified by removing the upper bound
    #[test]
    fn test_oversized_side_rejected() {
        assert!(HexagonSize::new(1, MAX_SIDE_LENGTH + 1, 1).is_err());
        assert!(HexagonSize::new(MAX_SIDE_LENGTH, 1, 1).is_ok());
    }

    // Tests derived dimensions
    // Verified by omitting the boundary paths from the path count
    #[test]
    fn test_dimensions() {
        let size = HexagonSize::new(2, 3, 4).expect("valid hexagon");
        assert_eq!((size.a(), size.b(), size.c()), (2, 3, 4));
        assert_eq!(size.path_count(), 6);
        assert_eq!(size.position_count(), 6);
        assert_eq!(size.area(), 6 + 12 + 8);
    }

    // Tests the outline encloses exactly the hexagon area
    // Verified by swapping a and b in the outline
    #[test]
    fn test_outline_area() {
        for (a, b, c) in [(1, 1, 1), (2, 3, 4), (5, 1, 3)] {
            let size = HexagonSize::new(a, b, c).expect("valid hexagon");
            let outline = size.outline();
            assert_eq!(double_signed_area(&outline), 2 * size.area() as i64);
        }
    }
}
