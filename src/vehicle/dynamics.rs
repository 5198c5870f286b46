//! Per-tick integration of driver intent into speed, heading, and position.
//!
//! [`step`] is a plain function over [`VehicleState`] so the driving model
//! can be exercised without an app; the system in the parent module wraps
//! it with frame time and the entity transform.

use bevy::prelude::*;

use super::constraint;
use crate::input::ControlIntent;
use crate::roads::RoadNetwork;

/// Tuning constants for the driving model.
#[derive(Resource, Clone)]
pub struct DrivingConfig {
    /// Top forward speed without turbo (units/sec).
    pub base_max_speed: f32,
    /// Multiplier on top speed while turbo is held.
    pub turbo_multiplier: f32,
    /// Top reverse speed (positive magnitude).
    pub max_reverse_speed: f32,
    /// Throttle acceleration (units/sec^2).
    pub acceleration: f32,
    /// Throttle acceleration while turbo is held.
    pub turbo_acceleration: f32,
    /// Active braking deceleration.
    pub braking_decel: f32,
    /// Passive friction at standstill; scales mildly with speed.
    pub friction_base: f32,
    /// Steering rate at low speed (rad/sec).
    pub rotation_speed: f32,
    /// Footprint expansion for the on-road test.
    pub on_road_tolerance: f32,
    /// Furthest an off-road proposal may be pulled back onto a corridor.
    pub snap_distance: f32,
    /// Hard bound on |x| and |z| regardless of road coverage.
    pub world_bound: f32,
    /// Height of the van origin above the ground plane.
    pub spawn_height: f32,
}

impl Default for DrivingConfig {
    fn default() -> Self {
        Self {
            base_max_speed: 7.5,
            turbo_multiplier: 1.8,
            max_reverse_speed: 4.0,
            acceleration: 8.0,
            turbo_acceleration: 12.0,
            braking_decel: 12.0,
            friction_base: 3.0,
            rotation_speed: 2.5,
            on_road_tolerance: 0.3,
            snap_distance: 2.0,
            world_bound: 100.0,
            spawn_height: 0.5,
        }
    }
}

impl DrivingConfig {
    /// Effective top speed for the current turbo state.
    pub fn max_speed(&self, turbo: bool) -> f32 {
        if turbo {
            self.base_max_speed * self.turbo_multiplier
        } else {
            self.base_max_speed
        }
    }

    /// Effective throttle acceleration for the current turbo state.
    pub fn throttle_accel(&self, turbo: bool) -> f32 {
        if turbo {
            self.turbo_acceleration
        } else {
            self.acceleration
        }
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(0.0, self.spawn_height, 0.0)
    }
}

/// Simulation state of the player van.
///
/// Mutated exactly once per tick by [`step`]; the reset handler in the
/// parent module is the only other write path.
#[derive(Component, Clone, Debug)]
pub struct VehicleState {
    /// World position; y stays at the spawn height.
    pub position: Vec3,
    /// Signed heading in radians, 0 = facing +Z.
    pub heading: f32,
    /// Signed scalar speed; positive = forward.
    pub speed: f32,
}

impl VehicleState {
    pub fn spawned(config: &DrivingConfig) -> Self {
        Self {
            position: config.spawn_position(),
            heading: 0.0,
            speed: 0.0,
        }
    }

    /// Restore spawn defaults, bypassing the tick entirely.
    pub fn reset(&mut self, config: &DrivingConfig) {
        self.position = config.spawn_position();
        self.heading = 0.0;
        self.speed = 0.0;
    }
}

/// Advance the van by one tick.
///
/// `delta` is the elapsed frame time in seconds, supplied by the frame loop
/// and assumed non-negative. It is the single timestep multiplier; nothing
/// here assumes a fixed frame rate.
pub fn step(
    state: &mut VehicleState,
    intent: &ControlIntent,
    delta: f32,
    network: &RoadNetwork,
    config: &DrivingConfig,
) {
    let current_speed = state.speed.abs();
    let moving_forward = state.speed > 0.1;
    let max_speed = config.max_speed(intent.turbo);

    if intent.forward {
        // Fast spin-up from rest with diminishing returns near the cap.
        // The 0.3 floor keeps the van from stalling right at top speed.
        let accel_factor = (1.0 - current_speed / max_speed).max(0.3);
        state.speed += delta * config.throttle_accel(intent.turbo) * accel_factor;
        state.speed = state.speed.min(max_speed);
    } else if intent.backward {
        if moving_forward {
            // Active braking. Deliberately unclamped at zero: a hard brake
            // at low speed may roll into a small reverse within one tick,
            // and the next tick's branches sort it out.
            state.speed -= delta * config.braking_decel;
        } else {
            let accel_factor = (1.0 - current_speed / config.max_reverse_speed).max(0.3);
            state.speed -= delta * config.acceleration * 0.7 * accel_factor;
            state.speed = state.speed.max(-config.max_reverse_speed);
        }
    } else if current_speed > 0.01 {
        // Passive friction, never crossing zero.
        let friction = delta * config.friction_base * (1.0 + current_speed * 0.1);
        if state.speed > 0.0 {
            state.speed = (state.speed - friction).max(0.0);
        } else {
            state.speed = (state.speed + friction).min(0.0);
        }
    } else {
        state.speed = 0.0;
    }

    // Steering is disabled near standstill. Responsiveness falls off with
    // speed, and sign(speed) flips the turn while backing up to match real
    // wheel geometry.
    if state.speed.abs() > 0.5 {
        let turn_factor = 1.0 / (1.0 + current_speed * 0.15);
        let turn_speed = config.rotation_speed * turn_factor;
        if intent.left {
            state.heading += delta * turn_speed * state.speed.signum();
        }
        if intent.right {
            state.heading -= delta * turn_speed * state.speed.signum();
        }
    }

    let proposed = Vec2::new(
        state.position.x + state.heading.sin() * state.speed * delta,
        state.position.z + state.heading.cos() * state.speed * delta,
    );

    let result = constraint::resolve(
        network,
        Vec2::new(state.position.x, state.position.z),
        proposed,
        config.on_road_tolerance,
        config.snap_distance,
    );

    // Heading always commits; only translation can be rejected.
    state.position.x = result.x;
    state.position.z = result.z;

    if result.clamped {
        // Curb hit: scrub 30% of speed, never below zero even when the van
        // was reversing.
        state.speed = (state.speed * 0.7).max(0.0);
    }

    let bound = config.world_bound;
    state.position.x = state.position.x.clamp(-bound, bound);
    state.position.z = state.position.z.clamp(-bound, bound);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle() -> ControlIntent {
        ControlIntent {
            forward: true,
            ..Default::default()
        }
    }

    fn coasting() -> ControlIntent {
        ControlIntent::default()
    }

    /// Drive straight up the main vertical avenue for `ticks` frames.
    fn run_ticks(
        state: &mut VehicleState,
        intent: &ControlIntent,
        delta: f32,
        ticks: usize,
        network: &RoadNetwork,
        config: &DrivingConfig,
    ) {
        for _ in 0..ticks {
            step(state, intent, delta, network, config);
        }
    }

    #[test]
    fn throttle_converges_to_max_speed_without_overshoot() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);

        for _ in 0..300 {
            step(&mut state, &throttle(), 0.016, &network, &config);
            assert!(state.speed <= config.base_max_speed + 1e-6);
        }
        assert!((state.speed - config.base_max_speed).abs() < 1e-4);
    }

    #[test]
    fn speed_cap_is_independent_of_delta_partition() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();

        // Same 3 seconds of throttle, chopped up two different ways.
        let mut fine = VehicleState::spawned(&config);
        run_ticks(&mut fine, &throttle(), 0.01, 300, &network, &config);
        let mut coarse = VehicleState::spawned(&config);
        run_ticks(&mut coarse, &throttle(), 0.06, 50, &network, &config);

        assert!((fine.speed - config.base_max_speed).abs() < 1e-4);
        assert!((coarse.speed - config.base_max_speed).abs() < 1e-4);
    }

    #[test]
    fn turbo_raises_the_cap_and_never_exceeds_it() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        let intent = ControlIntent {
            forward: true,
            turbo: true,
            ..Default::default()
        };

        for _ in 0..400 {
            step(&mut state, &intent, 0.016, &network, &config);
            assert!(state.speed <= config.max_speed(true) + 1e-6);
        }
        assert!((state.speed - 13.5).abs() < 1e-4);
    }

    #[test]
    fn reverse_converges_to_reverse_cap() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        let intent = ControlIntent {
            backward: true,
            ..Default::default()
        };

        for _ in 0..400 {
            step(&mut state, &intent, 0.016, &network, &config);
            assert!(state.speed >= -config.max_reverse_speed - 1e-6);
        }
        assert!((state.speed + config.max_reverse_speed).abs() < 1e-4);
    }

    #[test]
    fn friction_snaps_tiny_speeds_to_exactly_zero() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();

        let mut state = VehicleState::spawned(&config);
        state.speed = 0.009;
        step(&mut state, &coasting(), 0.016, &network, &config);
        assert_eq!(state.speed, 0.0);

        state.speed = -0.005;
        step(&mut state, &coasting(), 0.016, &network, &config);
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn friction_never_crosses_zero() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.speed = 0.05;

        // One big coasting tick would overshoot without the clamp.
        step(&mut state, &coasting(), 0.5, &network, &config);
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn hard_braking_may_roll_into_reverse_within_a_tick() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.speed = 0.2;
        let intent = ControlIntent {
            backward: true,
            ..Default::default()
        };

        // The braking formula is applied literally, with no zero clamp.
        step(&mut state, &intent, 0.1, &network, &config);
        assert!((state.speed - (0.2 - 0.1 * config.braking_decel)).abs() < 1e-6);
        assert!(state.speed < 0.0);
    }

    #[test]
    fn steering_sign_flips_when_reversing() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let left = ControlIntent {
            left: true,
            ..Default::default()
        };

        let mut forward = VehicleState::spawned(&config);
        forward.speed = 3.0;
        step(&mut forward, &left, 0.016, &network, &config);

        let mut reversing = VehicleState::spawned(&config);
        reversing.speed = -3.0;
        step(&mut reversing, &left, 0.016, &network, &config);

        assert!(forward.heading > 0.0);
        assert!(reversing.heading < 0.0);
        assert!((forward.heading + reversing.heading).abs() < 1e-6);
    }

    #[test]
    fn no_steering_near_standstill() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.speed = 0.4;
        let intent = ControlIntent {
            left: true,
            ..Default::default()
        };

        step(&mut state, &intent, 0.016, &network, &config);
        assert_eq!(state.heading, 0.0);
    }

    #[test]
    fn turn_rate_falls_off_with_speed() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let left = ControlIntent {
            left: true,
            ..Default::default()
        };

        let mut slow = VehicleState::spawned(&config);
        slow.speed = 1.0;
        step(&mut slow, &left, 0.016, &network, &config);

        let mut fast = VehicleState::spawned(&config);
        fast.speed = 7.0;
        step(&mut fast, &left, 0.016, &network, &config);

        assert!(slow.heading > fast.heading);
    }

    #[test]
    fn on_road_corridor_edge_proposal_is_accepted() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        // Riding the x = 25 corridor 1.5 units off its centerline.
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(26.5, 0.5, 0.0);
        state.heading = 0.0;
        state.speed = 5.0;

        step(&mut state, &throttle(), 0.1, &network, &config);

        // Heading 0 moves straight along +z, so x is untouched and the
        // proposal stays on the corridor.
        assert!((state.position.x - 26.5).abs() < 1e-6);
        assert!(state.position.z > 0.0);
        assert!(state.speed > 5.0);
    }

    #[test]
    fn clamp_penalty_scrubs_thirty_percent_of_speed() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(10.0, 0.5, 10.0);
        state.speed = 6.0;

        // Zero delta leaves integration untouched, so the off-road freeze
        // penalty is the only effect.
        step(&mut state, &throttle(), 0.0, &network, &config);
        assert!((state.speed - 4.2).abs() < 1e-6);
        assert_eq!(state.position, Vec3::new(10.0, 0.5, 10.0));
    }

    #[test]
    fn clamp_penalty_never_leaves_speed_negative() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(10.0, 0.5, 10.0);
        state.speed = -3.0;

        step(&mut state, &coasting(), 0.0, &network, &config);
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn off_road_excursion_freezes_the_van() {
        let network = RoadNetwork::city_grid();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(10.0, 0.5, 10.0);
        state.heading = std::f32::consts::FRAC_PI_4;
        state.speed = 7.0;

        step(&mut state, &throttle(), 0.3, &network, &config);
        assert!((state.position.x - 10.0).abs() < 1e-6);
        assert!((state.position.z - 10.0).abs() < 1e-6);
    }

    #[test]
    fn world_bound_clamps_even_on_road() {
        // A corridor that runs past the safety bound.
        let network = RoadNetwork::new(vec![crate::roads::Road::horizontal(
            0.0, 0.0, 6.0, 300.0,
        )]);
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(99.5, 0.5, 0.0);
        state.heading = std::f32::consts::FRAC_PI_2;
        state.speed = 7.5;

        step(&mut state, &throttle(), 0.5, &network, &config);
        assert!(state.position.x <= config.world_bound);
    }

    #[test]
    fn empty_network_leaves_the_van_frozen_at_spawn() {
        let network = RoadNetwork::default();
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);

        run_ticks(&mut state, &throttle(), 0.016, 120, &network, &config);
        assert_eq!(state.position.x, 0.0);
        assert_eq!(state.position.z, 0.0);
    }

    #[test]
    fn reset_is_absolute_and_idempotent() {
        let config = DrivingConfig::default();
        let mut state = VehicleState::spawned(&config);
        state.position = Vec3::new(40.0, 0.5, -23.0);
        state.heading = 2.4;
        state.speed = -3.0;

        state.reset(&config);
        state.reset(&config);
        assert_eq!(state.position, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(state.heading, 0.0);
        assert_eq!(state.speed, 0.0);
    }
}
