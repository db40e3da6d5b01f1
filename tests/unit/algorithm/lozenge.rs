//! Tests for the lozenge tiling chain: extremal states, local moves and monotonicity

#[cfg(test)]
mod tests {
    use lozenge_cftp::algorithm::enumeration::enumerate_tilings;
    use lozenge_cftp::{
        HexagonSize, LocalMove, LozengeTilingChain, MonotoneChain, PathSystem, Push,
    };
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn chain(a: usize, b: usize, c: usize) -> LozengeTilingChain {
        LozengeTilingChain::new(HexagonSize::new(a, b, c).expect("valid hexagon"))
    }

    // Tests extremal states are valid and ordered for a range of hexagons
    // Verified by swapping the closed forms of the two states
    #[test]
    fn test_min_max_states_valid_and_ordered() {
        for (a, b, c) in [(1, 1, 1), (2, 3, 4), (5, 1, 2), (4, 4, 1), (3, 3, 3)] {
            let (min, max) = chain(a, b, c).min_max_states();
            assert!(min.is_valid(), "{:?}", min.validate());
            assert!(max.is_valid(), "{:?}", max.validate());
            assert!(min <= max);
            assert_ne!(min, max);
        }
    }

    // Tests extremal states are deterministic
    // Verified by drawing random heights for free paths
    #[test]
    fn test_min_max_states_deterministic() {
        let chain = chain(3, 2, 4);
        assert_eq!(chain.min_max_states(), chain.min_max_states());
    }

    // Tests random updates stay within the free paths and interior positions
    // Verified by drawing paths from 0..=c+1
    #[test]
    fn test_random_update_ranges() {
        let chain = chain(3, 2, 4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_up = false;
        let mut saw_down = false;
        for _ in 0..2000 {
            let mv = chain.new_random_update(&mut rng);
            assert!((1..=4).contains(&mv.path));
            assert!((1..5).contains(&mv.position));
            saw_up |= mv.direction == Push::Up;
            saw_down |= mv.direction == Push::Down;
        }
        assert!(saw_up && saw_down);
    }

    // Tests a legal push up raises exactly one cell
    // Verified by raising the whole path
    #[test]
    fn test_push_up_legal() {
        let chain = chain(1, 1, 1);
        let (mut state, _) = chain.min_max_states();
        let mv = LocalMove {
            path: 1,
            position: 1,
            direction: Push::Up,
        };
        assert!(LozengeTilingChain::is_legal(&state, &mv));

        let before = state.clone();
        chain.update(&mut state, &mv);
        assert_eq!(state.height(1, 1), before.height(1, 1).map(|h| h + 1));
        assert!(state.is_valid());
        assert_eq!(state, chain.min_max_states().1);
    }

    // Tests a legal push down is the inverse of the push up
    // Verified by lowering by two units
    #[test]
    fn test_push_down_inverts_push_up() {
        let chain = chain(1, 1, 1);
        let (min, mut state) = chain.min_max_states();
        chain.update(
            &mut state,
            &LocalMove {
                path: 1,
                position: 1,
                direction: Push::Down,
            },
        );
        assert_eq!(state, min);
    }

    // Tests illegal moves leave the state untouched
    // Verified by applying moves without checking legality
    #[test]
    fn test_illegal_moves_are_no_ops() {
        let chain = chain(2, 2, 2);
        let (min, max) = chain.min_max_states();
        let moves = [
            // Minimum cannot go down, maximum cannot go up
            (min.clone(), LocalMove { path: 1, position: 2, direction: Push::Down }),
            (max.clone(), LocalMove { path: 2, position: 2, direction: Push::Up }),
            // Boundary paths and endpoints never move
            (min.clone(), LocalMove { path: 0, position: 2, direction: Push::Up }),
            (max.clone(), LocalMove { path: 3, position: 2, direction: Push::Down }),
            (min.clone(), LocalMove { path: 1, position: 0, direction: Push::Up }),
            (max.clone(), LocalMove { path: 1, position: 4, direction: Push::Down }),
            // Out of range indices
            (min, LocalMove { path: 9, position: 9, direction: Push::Up }),
            (max, LocalMove { path: 1, position: 99, direction: Push::Down }),
        ];

        for (state, mv) in moves {
            assert!(!LozengeTilingChain::is_legal(&state, &mv), "{mv:?}");
            let mut updated = state.clone();
            chain.update(&mut updated, &mv);
            assert_eq!(updated, state, "{mv:?} changed the state");
        }
    }

    // Tests every reachable state keeps all invariants along a long random run
    // Verified by dropping the non-crossing condition from push up
    #[test]
    fn test_random_walk_preserves_invariants() {
        let chain = chain(3, 4, 3);
        let mut rng = StdRng::seed_from_u64(99);
        let (mut state, _) = chain.min_max_states();
        for _ in 0..5000 {
            let mv = chain.new_random_update(&mut rng);
            chain.update(&mut state, &mv);
            assert!(state.is_valid(), "{:?} after {mv:?}", state.validate());
        }
    }

    // Tests the chain exposes the tiles of its states
    // Verified by returning an empty tile set
    #[test]
    fn test_tiles_of_state() {
        let chain = chain(2, 3, 4);
        let (min, _) = chain.min_max_states();
        assert_eq!(chain.tiles(&min).len(), chain.size().area());
    }

    fn move_strategy(c: usize, positions: usize) -> impl Strategy<Value = LocalMove> {
        (1..=c, 1..positions, any::<bool>()).prop_map(|(path, position, up)| LocalMove {
            path,
            position,
            direction: if up { Push::Up } else { Push::Down },
        })
    }

    /// Two tilings in order, pairing with the maximum when they are incomparable
    fn ordered_pair(tilings: &[PathSystem], i: usize, j: usize) -> (PathSystem, PathSystem) {
        let s = tilings.get(i % tilings.len()).cloned();
        let t = tilings.get(j % tilings.len()).cloned();
        match (s, t) {
            (Some(s), Some(t)) if s <= t => (s, t),
            (Some(s), Some(t)) if t <= s => (t, s),
            (Some(s), _) => {
                let max = PathSystem::highest(s.size());
                (s, max)
            }
            _ => (PathSystem::lowest(tilings_size()), PathSystem::highest(tilings_size())),
        }
    }

    fn tilings_size() -> HexagonSize {
        HexagonSize::new(2, 3, 2).expect("valid hexagon")
    }

    proptest! {
        #[test]
        fn update_is_monotone(
            i in any::<usize>(),
            j in any::<usize>(),
            mv in move_strategy(2, 5),
        ) {
            let chain = LozengeTilingChain::new(tilings_size());
            let tilings = enumerate_tilings(chain.size());
            let (mut lower, mut upper) = ordered_pair(&tilings, i, j);
            prop_assert!(lower <= upper);

            chain.update(&mut lower, &mv);
            chain.update(&mut upper, &mv);
            prop_assert!(lower <= upper);
            prop_assert!(lower.is_valid());
            prop_assert!(upper.is_valid());
        }

        #[test]
        fn update_sequences_stay_ordered(
            moves in prop::collection::vec(move_strategy(3, 6), 1..200),
        ) {
            let chain = chain(3, 3, 3);
            let (mut lower, mut upper) = chain.min_max_states();
            for mv in &moves {
                chain.update(&mut lower, mv);
                chain.update(&mut upper, mv);
                prop_assert!(lower <= upper);
            }
        }

        #[test]
        fn update_changes_only_when_legal(
            i in any::<usize>(),
            mv in move_strategy(2, 4),
        ) {
            let chain = chain(2, 2, 2);
            let tilings = enumerate_tilings(chain.size());
            let Some(state) = tilings.get(i % tilings.len()).cloned() else {
                return Ok(());
            };

            let mut updated = state.clone();
            chain.update(&mut updated, &mv);
            if LozengeTilingChain::is_legal(&state, &mv) {
                let before = state.height(mv.path, mv.position).unwrap_or_default();
                let after = updated.height(mv.path, mv.position).unwrap_or_default();
                prop_assert_eq!((after - before).abs(), 1);
                prop_assert!(updated.is_valid());
            } else {
                prop_assert_eq!(updated, state);
            }
        }
    }
}
