//! Unit tests for evac-grid.

#[cfg(test)]
mod construction {
    use evac_core::{EvacConfig, GridPos};

    use crate::{FloorFieldGrid, GridError};

    #[test]
    fn border_ring_is_wall() {
        let g = FloorFieldGrid::new(5, 4, GridPos::new(2, 2)).unwrap();
        assert_eq!(g.cells().count(), 20);
        for c in g.cells() {
            let on_ring = c.pos.x == 0 || c.pos.y == 0 || c.pos.x == 4 || c.pos.y == 3;
            assert_eq!(c.is_border, on_ring, "{}", c.pos);
            assert_eq!(c.is_wall, on_ring);
            if on_ring {
                assert!(c.occupied, "walls are always occupied");
            }
            assert_eq!(c.dynamic_field, 0.0);
        }
    }

    #[test]
    fn too_small_rejected() {
        assert_eq!(
            FloorFieldGrid::new(2, 5, GridPos::new(1, 1)).err(),
            Some(GridError::TooSmall { width: 2, height: 5 })
        );
    }

    #[test]
    fn exit_on_border_rejected() {
        let err = FloorFieldGrid::new(5, 5, GridPos::new(4, 2)).err();
        assert_eq!(err, Some(GridError::ExitNotInterior(GridPos::new(4, 2))));
    }

    #[test]
    fn from_default_config() {
        let g = FloorFieldGrid::from_config(&EvacConfig::default()).unwrap();
        assert_eq!((g.width(), g.height()), (27, 27));
        assert_eq!(g.exit(), GridPos::new(25, 25));
    }

    #[test]
    fn moore_neighbors_filtered_to_bounds() {
        let g = FloorFieldGrid::new(5, 5, GridPos::new(2, 2)).unwrap();
        assert_eq!(g.moore_neighbors(GridPos::new(0, 0)).count(), 3);
        assert_eq!(g.moore_neighbors(GridPos::new(2, 0)).count(), 5);
        assert_eq!(g.moore_neighbors(GridPos::new(2, 2)).count(), 8);
    }
}

#[cfg(test)]
mod static_field {
    use evac_core::GridPos;

    use crate::FloorFieldGrid;

    #[test]
    fn exit_has_unit_static_field() {
        let g = FloorFieldGrid::new(7, 7, GridPos::new(3, 3)).unwrap();
        assert!((g.static_field(GridPos::new(3, 3)).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalised_by_diagonal() {
        let g = FloorFieldGrid::new(5, 5, GridPos::new(3, 3)).unwrap();
        let diag = (16.0f64 + 16.0).sqrt();
        let expected = 1.0 - GridPos::new(1, 1).distance(GridPos::new(3, 3)) / diag;
        assert!((g.static_field(GridPos::new(1, 1)).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn decreases_with_distance() {
        let g = FloorFieldGrid::new(9, 9, GridPos::new(7, 7)).unwrap();
        let near = g.static_field(GridPos::new(6, 6)).unwrap();
        let far = g.static_field(GridPos::new(1, 1)).unwrap();
        assert!(near > far);
    }

    #[test]
    fn set_exit_recomputes() {
        let mut g = FloorFieldGrid::new(7, 7, GridPos::new(5, 5)).unwrap();
        let before = g.static_field(GridPos::new(1, 1)).unwrap();
        g.set_exit(GridPos::new(1, 1)).unwrap();
        assert_eq!(g.exit(), GridPos::new(1, 1));
        assert!((g.static_field(GridPos::new(1, 1)).unwrap() - 1.0).abs() < 1e-12);
        assert!(g.static_field(GridPos::new(1, 1)).unwrap() > before);
        assert!(g.set_exit(GridPos::new(0, 3)).is_err());
    }
}

#[cfg(test)]
mod dynamic_field {
    use evac_core::GridPos;

    use crate::FloorFieldGrid;

    fn grid() -> FloorFieldGrid {
        FloorFieldGrid::new(7, 7, GridPos::new(5, 5)).unwrap()
    }

    #[test]
    fn change_is_pending_until_commit() {
        let mut g = grid();
        let p = GridPos::new(2, 2);
        g.change_dynamic_field(p, 0.3).unwrap();
        assert_eq!(g.dynamic_field(p), Some(0.0));
        assert_eq!(g.cell(p).unwrap().pending_dynamic_delta, 0.3);
        g.commit_dynamic_field(p).unwrap();
        assert!((g.dynamic_field(p).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(g.cell(p).unwrap().pending_dynamic_delta, 0.0);
    }

    #[test]
    fn commit_clamps_to_unit_interval() {
        let mut g = grid();
        let p = GridPos::new(2, 2);
        g.change_dynamic_field(p, 5.0).unwrap();
        g.commit_dynamic_field(p).unwrap();
        assert_eq!(g.dynamic_field(p), Some(1.0));
        g.change_dynamic_field(p, -7.0).unwrap();
        g.commit_dynamic_field(p).unwrap();
        assert_eq!(g.dynamic_field(p), Some(0.0));
    }

    #[test]
    fn out_of_bounds_change_is_error() {
        let mut g = grid();
        assert!(g.change_dynamic_field(GridPos::new(9, 9), 0.1).is_err());
    }

    #[test]
    fn diffusion_conserves_mass_without_clamping() {
        let mut g = grid();
        let p = GridPos::new(3, 3);
        g.change_dynamic_field(p, 0.8).unwrap();
        g.commit_dynamic_field(p).unwrap();
        g.diffuse(0.4);
        assert!((g.dynamic_field(p).unwrap() - 0.4).abs() < 1e-12);
        for n in g.moore_neighbors(p).collect::<Vec<_>>() {
            assert!((g.dynamic_field(n).unwrap() - 0.05).abs() < 1e-12);
        }
        assert!((g.total_dynamic_field() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn diffusion_sheds_at_most_what_is_there() {
        let mut g = grid();
        let p = GridPos::new(3, 3);
        g.change_dynamic_field(p, 0.1).unwrap();
        g.commit_dynamic_field(p).unwrap();
        g.diffuse(0.4);
        assert!(g.dynamic_field(p).unwrap().abs() < 1e-12);
        assert!((g.total_dynamic_field() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn field_stays_in_unit_interval_under_repeated_diffusion() {
        let mut g = grid();
        for (i, p) in [GridPos::new(1, 1), GridPos::new(2, 1), GridPos::new(5, 5)].into_iter().enumerate() {
            g.change_dynamic_field(p, 0.9 + i as f64).unwrap();
            g.commit_dynamic_field(p).unwrap();
        }
        for _ in 0..50 {
            g.diffuse(0.4);
            assert!(g.cells().all(|c| (0.0..=1.0).contains(&c.dynamic_field)));
        }
    }
}

#[cfg(test)]
mod walls {
    use evac_core::GridPos;

    use crate::{FloorFieldGrid, GridError};

    fn grid() -> FloorFieldGrid {
        FloorFieldGrid::new(6, 6, GridPos::new(4, 4)).unwrap()
    }

    #[test]
    fn add_and_remove_interior_wall() {
        let mut g = grid();
        let p = GridPos::new(2, 3);
        g.add_wall(p).unwrap();
        assert!(g.is_wall(p));
        assert!(!g.is_free(p));
        g.remove_wall(p).unwrap();
        assert!(!g.is_wall(p));
        assert!(g.is_free(p));
    }

    #[test]
    fn wall_refused_on_occupied_or_exit() {
        let mut g = grid();
        let p = GridPos::new(2, 2);
        g.set_occupied(p, true).unwrap();
        assert_eq!(g.add_wall(p), Err(GridError::Occupied(p)));
        assert_eq!(g.add_wall(GridPos::new(4, 4)), Err(GridError::IsExit(GridPos::new(4, 4))));
        assert_eq!(g.add_wall(GridPos::new(0, 0)), Err(GridError::Occupied(GridPos::new(0, 0))));
    }

    #[test]
    fn border_wall_is_permanent() {
        let mut g = grid();
        assert_eq!(g.remove_wall(GridPos::new(0, 2)), Err(GridError::BorderWall(GridPos::new(0, 2))));
        assert!(g.is_wall(GridPos::new(0, 2)));
    }

    #[test]
    fn remove_non_wall_refused() {
        let mut g = grid();
        assert_eq!(g.remove_wall(GridPos::new(2, 2)), Err(GridError::NotAWall(GridPos::new(2, 2))));
    }

    #[test]
    fn occupancy_cannot_clear_a_wall() {
        let mut g = grid();
        assert!(g.set_occupied(GridPos::new(0, 0), false).is_err());
        assert!(g.cell(GridPos::new(0, 0)).unwrap().occupied);
    }
}
