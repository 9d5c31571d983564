//! Unit tests for sov-model.

use sov_core::{FixedUniform, ModelConfig, ScriptedUniform, SimRng};

use crate::{SovModel, Vehicle, VehicleRegister};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn register(cells: usize, vehicles: &[(usize, f64)]) -> VehicleRegister {
    VehicleRegister::from_vehicles(cells, vehicles.iter().map(|&(p, v)| Vehicle::new(p, v)))
        .expect("valid test register")
}

fn model_with<R: sov_core::UniformSource>(
    config: ModelConfig,
    vehicles: &[(usize, f64)],
    rng: R,
) -> SovModel<R> {
    SovModel::with_register(config, register(config.cells, vehicles), rng).unwrap()
}

// ── Optimal velocity function ─────────────────────────────────────────────────

#[cfg(test)]
mod velocity {
    use crate::optimal_velocity;

    const C: f64 = 1.5;

    #[test]
    fn zero_headway_is_zero() {
        assert!(optimal_velocity(0.0, C).abs() < 1e-15);
    }

    #[test]
    fn non_decreasing() {
        let mut prev = optimal_velocity(-5.0, C);
        for i in -49..400 {
            let v = optimal_velocity(i as f64 * 0.1, C);
            assert!(v >= prev, "V dropped at dx={}", i as f64 * 0.1);
            prev = v;
        }
    }

    #[test]
    fn saturates_toward_one() {
        assert!((optimal_velocity(50.0, C) - 1.0).abs() < 1e-9);
        assert!(optimal_velocity(10.0, C) < 1.0);
    }

    #[test]
    fn bounded_for_non_negative_headway() {
        for i in 0..200 {
            let v = optimal_velocity(i as f64 * 0.1, C);
            assert!((0.0..=1.0).contains(&v), "V({}) = {v}", i as f64 * 0.1);
        }
    }

    #[test]
    fn matches_closed_form_at_one() {
        let expected = ((1.0f64 - C).tanh() + C.tanh()) / (1.0 + C.tanh());
        assert!((optimal_velocity(1.0, C) - expected).abs() < 1e-15);
    }
}

// ── VehicleRegister ───────────────────────────────────────────────────────────

#[cfg(test)]
mod register_tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let r = VehicleRegister::new(200);
        assert!(r.is_empty());
        assert_eq!(r.cells(), 200);
        assert!(r.leading().is_none());
        assert!(r.rearmost().is_none());
        assert!(r.check_invariants().is_ok());
    }

    #[test]
    fn rejects_collision() {
        let r = VehicleRegister::from_vehicles(10, [Vehicle::new(3, 0.5), Vehicle::new(3, 0.5)]);
        assert!(r.is_err());
    }

    #[test]
    fn rejects_wrong_order() {
        let r = VehicleRegister::from_vehicles(10, [Vehicle::new(4, 0.5), Vehicle::new(2, 0.5)]);
        assert!(r.is_err());
    }

    #[test]
    fn rejects_out_of_segment() {
        assert!(VehicleRegister::from_vehicles(5, [Vehicle::new(5, 0.5)]).is_err());
    }

    #[test]
    fn rejects_bad_velocity() {
        assert!(VehicleRegister::from_vehicles(5, [Vehicle::new(1, 1.5)]).is_err());
        assert!(VehicleRegister::from_vehicles(5, [Vehicle::new(1, -0.1)]).is_err());
    }

    #[test]
    fn accessors() {
        let r = register(10, &[(1, 0.2), (4, 0.4), (9, 1.0)]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.rearmost().unwrap().position, 1);
        assert_eq!(r.leading().unwrap().position, 9);
        assert_eq!(r.get(1), Some(&Vehicle::new(4, 0.4)));
        assert_eq!(r.get(3), None);
        assert_eq!(r.positions(), vec![1, 4, 9]);
        assert_eq!(r.velocities(), vec![0.2, 0.4, 1.0]);
        assert!(r.is_occupied(4));
        assert!(!r.is_occupied(5));
    }

    #[test]
    fn render_marks_occupied_cells() {
        let r = register(5, &[(0, 1.0), (3, 1.0)]);
        assert_eq!(r.render(), "*--*-");
        assert_eq!(r.to_string(), "*--*-");
        assert_eq!(VehicleRegister::new(3).render(), "---");
    }
}

// ── Dynamics engine ───────────────────────────────────────────────────────────

#[cfg(test)]
mod dynamics_tests {
    use super::*;
    use crate::optimal_velocity;

    #[test]
    fn empty_register_returns_zero() {
        let mut m = SovModel::from_config(ModelConfig::new(0.0, 0.0), FixedUniform(0.0)).unwrap();
        assert_eq!(m.update(), 0.0);
        assert!(m.register().is_empty());
    }

    #[test]
    fn single_vehicle_is_leader() {
        let mut m = model_with(ModelConfig::new(0.0, 0.0), &[(0, 0.3)], FixedUniform(0.999));
        assert_eq!(m.update(), 1.0);
        let v = m.register().leading().unwrap();
        assert_eq!(v.position, 1);
        assert_eq!(v.velocity, 1.0);
    }

    #[test]
    fn leader_stops_at_exit() {
        let mut m = model_with(ModelConfig::new(0.0, 0.0), &[(199, 0.7)], FixedUniform(0.0));
        assert_eq!(m.update(), 0.0);
        let v = m.register().leading().unwrap();
        assert_eq!(v.position, 199);
        assert_eq!(v.velocity, 1.0);
    }

    #[test]
    fn relaxation_and_hop() {
        let cfg = ModelConfig::new(0.0, 0.0);
        let mut m = model_with(cfg, &[(0, 0.5), (2, 0.5), (3, 0.5)], FixedUniform(0.0));
        let moved = m.update();

        assert!((moved - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(m.register().positions(), vec![1, 2, 4]);

        let a = cfg.relaxation;
        let v = m.register().velocities();
        assert!((v[0] - ((1.0 - a) * 0.5 + a * optimal_velocity(1.0, cfg.shape))).abs() < 1e-12);
        // Gap of one cell: V(0) = 0, velocity only decays, no hop.
        assert!((v[1] - (1.0 - a) * 0.5).abs() < 1e-12);
        assert_eq!(v[2], 1.0);
    }

    #[test]
    fn high_draw_blocks_followers() {
        let mut m = model_with(ModelConfig::new(0.0, 0.0), &[(0, 0.5), (10, 0.5)], FixedUniform(0.999));
        assert_eq!(m.update(), 0.5);
        assert_eq!(m.register().positions(), vec![0, 11]);
    }

    #[test]
    fn gaps_use_pre_step_positions() {
        // Follower directly behind the leader must stay put even though the
        // leader vacates its cell during the same step.
        let mut m = model_with(ModelConfig::new(0.0, 0.0), &[(0, 1.0), (1, 1.0)], FixedUniform(0.0));
        m.update();
        assert_eq!(m.register().positions(), vec![0, 2]);

        let mut m = model_with(ModelConfig::new(0.0, 0.0), &[(0, 1.0), (2, 1.0)], FixedUniform(0.0));
        m.update();
        assert_eq!(m.register().positions(), vec![1, 3]);
    }

    #[test]
    fn blocked_follower_consumes_no_draw() {
        let mut m = model_with(
            ModelConfig::new(0.0, 0.0),
            &[(0, 1.0), (1, 1.0), (5, 1.0)],
            ScriptedUniform::new(vec![0.0]),
        );
        m.update();
        assert_eq!(m.rng_mut().consumed(), 1);
    }

    #[test]
    fn probe_matches_update_without_mutating() {
        let vehicles = [(0, 0.6), (3, 0.4), (4, 0.9), (9, 0.2), (30, 1.0)];
        let cfg = ModelConfig::new(0.0, 0.0);

        let mut probed = model_with(cfg, &vehicles, SimRng::new(7));
        let mut updated = model_with(cfg, &vehicles, SimRng::new(7));
        let before = probed.register().clone();

        let would_move = probed.probe();
        let did_move = updated.update();

        assert_eq!(would_move, did_move);
        assert_eq!(probed.register(), &before);
    }

    #[test]
    fn probe_on_empty_is_zero() {
        let mut m = SovModel::from_config(ModelConfig::new(0.0, 0.0), FixedUniform(0.0)).unwrap();
        assert_eq!(m.probe(), 0.0);
    }
}

// ── Boundary engine ───────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn forced_injection_into_empty() {
        let mut m = SovModel::from_config(ModelConfig::new(1.0, 0.0), FixedUniform(0.0)).unwrap();
        let events = m.boundary();
        assert!(events.injected);
        assert!(!events.ejected);
        assert_eq!(m.register().len(), 1);
        assert_eq!(m.register().rearmost(), Some(&Vehicle::entering()));
    }

    #[test]
    fn no_injection_onto_occupied_entrance() {
        let mut m = model_with(ModelConfig::new(1.0, 0.0), &[(0, 1.0)], ScriptedUniform::new(vec![0.0]));
        let events = m.boundary();
        assert!(!events.injected);
        assert_eq!(m.register().len(), 1);
        assert_eq!(m.rng_mut().consumed(), 0);
    }

    #[test]
    fn injection_goes_to_the_rear() {
        let mut m = model_with(ModelConfig::new(1.0, 0.0), &[(3, 0.5), (8, 0.5)], FixedUniform(0.0));
        m.boundary();
        assert_eq!(m.register().positions(), vec![0, 3, 8]);
        assert!(m.register().check_invariants().is_ok());
    }

    #[test]
    fn forced_ejection_of_leader() {
        let mut m = model_with(ModelConfig::new(0.0, 1.0), &[(10, 0.5), (199, 1.0)], FixedUniform(0.0));
        let events = m.boundary();
        assert!(events.ejected);
        assert!(!events.injected);
        assert_eq!(m.register().positions(), vec![10]);
    }

    #[test]
    fn no_ejection_before_exit() {
        let mut m = model_with(ModelConfig::new(0.0, 1.0), &[(198, 1.0)], FixedUniform(0.0));
        assert!(!m.boundary().ejected);
        assert_eq!(m.register().len(), 1);
    }

    #[test]
    fn both_events_in_one_call() {
        let mut m = model_with(ModelConfig::new(1.0, 1.0), &[(5, 0.5), (199, 1.0)], FixedUniform(0.0));
        let events = m.boundary();
        assert!(events.injected && events.ejected);
        assert_eq!(m.register().positions(), vec![0, 5]);
    }

    #[test]
    fn rejected_draws() {
        let mut m = model_with(ModelConfig::new(0.5, 0.5), &[(199, 1.0)], FixedUniform(0.5));
        let events = m.boundary();
        assert_eq!(events, crate::BoundaryEvents::default());
        assert_eq!(m.register().len(), 1);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn empty_observables_are_zero() {
        let m = SovModel::from_config(ModelConfig::new(0.0, 0.0), FixedUniform(0.0)).unwrap();
        assert_eq!(m.mean_velocity(), 0.0);
        assert_eq!(m.density(), 0.0);
        assert_eq!(m.flux(), 0.0);
    }

    #[test]
    fn mean_and_density() {
        let cfg = ModelConfig { cells: 10, ..ModelConfig::new(0.0, 0.0) };
        let m = model_with(cfg, &[(1, 0.2), (4, 0.4), (9, 0.9)], FixedUniform(0.0));
        assert!((m.mean_velocity() - 0.5).abs() < 1e-12);
        assert!((m.density() - 0.3).abs() < 1e-12);
        assert!((m.flux() - 0.15).abs() < 1e-12);
    }
}

// ── Model-level properties ────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn construct_defaults() {
        let m = SovModel::new(0.2, 0.6).unwrap();
        assert!(m.register().is_empty());
        assert_eq!(m.config().cells, 200);
        assert_eq!(m.render().len(), 200);
        assert!(m.render().chars().all(|c| c == '-'));
    }

    #[test]
    fn construct_rejects_bad_probability() {
        assert!(SovModel::new(1.5, 0.5).is_err());
        assert!(SovModel::new(0.5, -1.0).is_err());
    }

    #[test]
    fn register_length_mismatch_rejected() {
        let r = VehicleRegister::new(50);
        assert!(SovModel::with_register(ModelConfig::new(0.1, 0.1), r, FixedUniform(0.0)).is_err());
    }

    #[test]
    fn velocity_function_uses_shape() {
        let m = SovModel::new(0.0, 0.0).unwrap();
        assert_eq!(m.velocity_function(2.0), crate::optimal_velocity(2.0, 1.5));
    }

    #[test]
    fn invariants_hold_over_long_run() {
        let mut m = SovModel::seeded(ModelConfig::new(0.6, 0.4), 3).unwrap();
        for _ in 0..5_000 {
            let (moved, _) = m.step();
            assert!((0.0..=1.0).contains(&moved));
            assert!((0.0..=1.0).contains(&m.density()));
            assert!((0.0..=1.0).contains(&m.mean_velocity()));
            m.register().check_invariants().unwrap();
        }
        assert!(!m.register().is_empty());
    }

    #[test]
    fn update_fraction_in_range_and_zero_when_empty() {
        let mut m = SovModel::seeded(ModelConfig::new(0.3, 0.7), 11).unwrap();
        for _ in 0..2_000 {
            let moved = m.update();
            assert!((0.0..=1.0).contains(&moved));
            if m.register().is_empty() {
                assert_eq!(moved, 0.0);
            }
            m.boundary();
        }
    }

    #[test]
    fn zero_alpha_never_creates_vehicles() {
        let mut m = SovModel::seeded(ModelConfig::new(0.0, 0.5), 5).unwrap();
        for _ in 0..1_000 {
            m.step();
            assert_eq!(m.density(), 0.0);
        }
    }

    #[test]
    fn zero_beta_never_removes_vehicles() {
        let mut m = SovModel::seeded(ModelConfig::new(0.8, 0.0), 5).unwrap();
        let mut last = 0;
        for _ in 0..3_000 {
            m.step();
            let len = m.register().len();
            assert!(len >= last);
            last = len;
        }
        assert!(last > 0);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let cfg = ModelConfig::new(0.4, 0.5);
        let mut a = SovModel::seeded(cfg, 99).unwrap();
        let mut b = SovModel::seeded(cfg, 99).unwrap();
        for _ in 0..1_000 {
            assert_eq!(a.step(), b.step());
            assert_eq!(a.register(), b.register());
        }
    }

    #[test]
    fn display_is_render() {
        let m = model_with(ModelConfig { cells: 4, ..ModelConfig::new(0.0, 0.0) }, &[(2, 1.0)], FixedUniform(0.0));
        assert_eq!(m.to_string(), "--*-");
    }
}
