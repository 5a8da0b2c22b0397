//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GridPos;

    #[test]
    fn euclidean_distance() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn chebyshev_and_neighbors() {
        let c = GridPos::new(5, 5);
        assert_eq!(c.chebyshev(GridPos::new(6, 4)), 1);
        assert_eq!(c.chebyshev(GridPos::new(7, 5)), 2);
        assert!(c.is_moore_neighbor(GridPos::new(4, 4)));
        assert!(!c.is_moore_neighbor(c), "a cell is not its own neighbour");
        assert!(!c.is_moore_neighbor(GridPos::new(5, 7)));
    }

    #[test]
    fn moore_ring_has_eight_distinct_cells() {
        let c = GridPos::new(2, 2);
        let ring: Vec<GridPos> = c.moore_ring().collect();
        assert_eq!(ring.len(), 8);
        assert!(!ring.contains(&c));
        assert!(ring.iter().all(|p| c.is_moore_neighbor(*p)));
    }

    #[test]
    fn moore_block_is_column_major_and_contains_centre() {
        let c = GridPos::new(1, 1);
        let block: Vec<GridPos> = c.moore_block().collect();
        assert_eq!(block.len(), 9);
        assert_eq!(block[0], GridPos::new(0, 0));
        assert_eq!(block[1], GridPos::new(0, 1));
        assert_eq!(block[4], c);
        assert_eq!(block[8], GridPos::new(2, 2));
    }
}

#[cfg(test)]
mod strategy {
    use crate::Strategy;

    #[test]
    fn cycle_visits_all_three() {
        let s = Strategy::Patient;
        assert_eq!(s.cycled(), Strategy::Impatient);
        assert_eq!(s.cycled().cycled(), Strategy::Neutral);
        assert_eq!(s.cycled().cycled().cycled(), Strategy::Patient);
    }

    #[test]
    fn display() {
        assert_eq!(Strategy::Impatient.to_string(), "impatient");
        assert_eq!(Strategy::Neutral.to_string(), "neutral");
    }
}

#[cfg(test)]
mod time {
    use crate::{Phase, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn phases_alternate_from_strategy() {
        assert_eq!(Tick(0).phase(), Phase::Strategy);
        assert_eq!(Tick(1).phase(), Phase::Movement);
        assert_eq!(Tick(6).phase(), Phase::Strategy);
        assert_eq!(Tick(7).macro_step(), 3);
        assert_eq!(Phase::Strategy.flipped(), Phase::Movement);
        assert_eq!(Phase::Movement.flipped(), Phase::Strategy);
    }
}

#[cfg(test)]
mod config {
    use crate::{EvacConfig, GridPos};

    #[test]
    fn default_is_valid() {
        EvacConfig::default().validate().unwrap();
    }

    #[test]
    fn with_interior_adds_border_ring() {
        let cfg = EvacConfig::with_interior(3, 3, GridPos::new(2, 2));
        assert_eq!((cfg.width, cfg.height), (5, 5));
        assert_eq!(cfg.exit, GridPos::new(3, 3));
        cfg.validate().unwrap();
    }

    #[test]
    fn exit_on_border_rejected() {
        let cfg = EvacConfig { exit: GridPos::new(0, 3), ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = EvacConfig { exit_capacity: 0, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_strength_rejected() {
        let cfg = EvacConfig { sf_strength: -1.0, ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn tiny_grid_rejected() {
        let cfg = EvacConfig { width: 2, height: 2, exit: GridPos::new(1, 1), ..EvacConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bounds_and_interior() {
        let cfg = EvacConfig::with_interior(3, 3, GridPos::new(0, 0));
        assert!(cfg.in_bounds(GridPos::new(0, 0)));
        assert!(cfg.in_bounds(GridPos::new(4, 4)));
        assert!(!cfg.in_bounds(GridPos::new(5, 0)));
        assert!(!cfg.in_bounds(GridPos::new(-1, 2)));
        assert!(!cfg.is_interior(GridPos::new(0, 2)));
        assert!(cfg.is_interior(GridPos::new(1, 3)));
        assert!(!cfg.is_interior(GridPos::new(4, 3)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            let i = rng.weighted_index(&[0.0, 2.0, 0.0, 1.0]).unwrap();
            assert!(i == 1 || i == 3, "zero-weight index {i} drawn");
        }
    }

    #[test]
    fn weighted_index_degenerate_is_none() {
        let mut rng = SimRng::new(7);
        assert!(rng.weighted_index(&[]).is_none());
        assert!(rng.weighted_index(&[0.0, 0.0]).is_none());
        assert!(rng.weighted_index(&[f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn choose_index_bounds() {
        let mut rng = SimRng::new(0);
        assert!(rng.choose_index(0).is_none());
        for _ in 0..100 {
            assert!(rng.choose_index(3).unwrap() < 3);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}
