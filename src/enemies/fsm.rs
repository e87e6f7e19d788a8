//! Patrol/chase state machine for stalker enemies.
//!
//! This is the pure part of the enemy AI: it knows nothing about queries,
//! transforms or physics. The ECS systems in `ai.rs` gather the inputs for
//! one frame, call [`EnemyFsm::tick`], and apply the outcome.
//!
//! All positions are on the ground plane (world x/z packed into a `Vec2`).

use bevy::prelude::*;

use super::components::{EnemyStats, JumpscarePolicy};

/// Distance under which a waypoint counts as reached.
pub const WAYPOINT_ARRIVAL_EPSILON: f32 = 0.1;

/// Which behavior the enemy is running.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiMode {
    /// Following the waypoint cycle.
    #[default]
    Patrol,
    /// Moving straight at the target.
    Chase,
}

/// Everything the machine needs to know about the outside world for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    /// Target position, or None when there is nothing to chase.
    pub target: Option<Vec2>,
    /// Seconds since the previous tick.
    pub delta: f32,
    /// The flashlight caught this enemy this tick.
    pub exposed: bool,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// New ground-plane position.
    pub position: Vec2,
    /// The target should be jumpscared.
    pub jumpscare: bool,
    /// The flashlight forced the enemy back onto its route.
    pub returned_to_path: bool,
}

/// Per-enemy state machine.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct EnemyFsm {
    mode: AiMode,
    waypoint_index: usize,
    jumpscare_fired: bool,
}

impl EnemyFsm {
    /// Fresh machine: patrolling toward waypoint 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where an enemy on `route` starts. None for an empty route.
    pub fn spawn_position(route: &[Vec2]) -> Option<Vec2> {
        route.first().copied()
    }

    /// Current behavior.
    pub fn mode(&self) -> AiMode {
        self.mode
    }

    /// Index of the waypoint the enemy is heading to (or will resume from).
    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    /// Whether this enemy has already jumpscared its target.
    pub fn has_jumpscared(&self) -> bool {
        self.jumpscare_fired
    }

    /// Advance the machine by one frame.
    pub fn tick(
        &mut self,
        position: Vec2,
        route: &[Vec2],
        stats: &EnemyStats,
        input: &TickInput,
    ) -> TickOutcome {
        let step = stats.move_speed * input.delta;

        let position = match self.mode {
            AiMode::Patrol => self.patrol(position, route, stats, input.target, step),
            AiMode::Chase => self.chase(position, stats, input.target, step),
        };

        let returned_to_path = input.exposed;
        if returned_to_path {
            self.return_to_path(position, route);
        }

        let jumpscare = match input.target {
            Some(target) if position.distance(target) <= stats.jumpscare_distance => {
                self.fire_jumpscare(stats.jumpscare_policy)
            }
            _ => false,
        };

        TickOutcome {
            position,
            jumpscare,
            returned_to_path,
        }
    }

    fn patrol(
        &mut self,
        position: Vec2,
        route: &[Vec2],
        stats: &EnemyStats,
        target: Option<Vec2>,
        step: f32,
    ) -> Vec2 {
        let Some(&waypoint) = route.get(self.waypoint_index) else {
            return position;
        };

        let position = move_towards(position, waypoint, step);

        if position.distance(waypoint) < WAYPOINT_ARRIVAL_EPSILON {
            self.waypoint_index = (self.waypoint_index + 1) % route.len();
        }

        if let Some(target) = target {
            if position.distance(target) <= stats.chase_range {
                self.mode = AiMode::Chase;
            }
        }

        position
    }

    fn chase(
        &mut self,
        position: Vec2,
        stats: &EnemyStats,
        target: Option<Vec2>,
        step: f32,
    ) -> Vec2 {
        let Some(target) = target else {
            return position;
        };

        let position = move_towards(position, target, step);

        if position.distance(target) <= stats.stopping_distance {
            self.mode = AiMode::Patrol;
        }

        position
    }

    /// Drop back to patrol, resuming from the closest waypoint.
    fn return_to_path(&mut self, position: Vec2, route: &[Vec2]) {
        self.waypoint_index = nearest_waypoint(position, route).unwrap_or(0);
        self.mode = AiMode::Patrol;
    }

    fn fire_jumpscare(&mut self, policy: JumpscarePolicy) -> bool {
        match policy {
            JumpscarePolicy::Once if self.jumpscare_fired => false,
            _ => {
                self.jumpscare_fired = true;
                true
            }
        }
    }
}

/// Index of the waypoint closest to `position`; the first one wins ties.
pub fn nearest_waypoint(position: Vec2, route: &[Vec2]) -> Option<usize> {
    let mut nearest = None;
    let mut min_distance = f32::MAX;

    for (index, waypoint) in route.iter().enumerate() {
        let distance = position.distance(*waypoint);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(index);
        }
    }

    nearest
}

/// Step from `from` toward `to` by at most `max_step`, landing on `to`
/// rather than overshooting it.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let offset = to - from;
    let distance = offset.length();

    if distance <= max_step || distance <= f32::EPSILON {
        to
    } else {
        from + offset / distance * max_step.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn stats() -> EnemyStats {
        EnemyStats::default()
    }

    fn square_route() -> Vec<Vec2> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0)]
    }

    fn input(target: Option<Vec2>) -> TickInput {
        TickInput {
            target,
            delta: DT,
            exposed: false,
        }
    }

    fn fsm(mode: AiMode, waypoint_index: usize) -> EnemyFsm {
        EnemyFsm {
            mode,
            waypoint_index,
            jumpscare_fired: false,
        }
    }

    #[test]
    fn starts_patrolling_at_first_waypoint() {
        let machine = EnemyFsm::new();
        assert_eq!(machine.mode(), AiMode::Patrol);
        assert_eq!(machine.waypoint_index(), 0);
        assert_eq!(
            EnemyFsm::spawn_position(&square_route()),
            Some(Vec2::new(0.0, 0.0))
        );
        assert_eq!(EnemyFsm::spawn_position(&[]), None);
    }

    #[test]
    fn patrol_cycles_through_every_waypoint_when_target_is_far() {
        let route = square_route();
        let stats = stats();
        let mut machine = EnemyFsm::new();
        let mut position = EnemyFsm::spawn_position(&route).unwrap();
        let far_target = Some(Vec2::new(20.0, 20.0));

        let mut visited = vec![machine.waypoint_index()];
        for _ in 0..2000 {
            let outcome = machine.tick(position, &route, &stats, &input(far_target));
            position = outcome.position;
            assert!(!outcome.jumpscare);
            assert_eq!(machine.mode(), AiMode::Patrol);
            assert!(machine.waypoint_index() < route.len());

            if *visited.last().unwrap() != machine.waypoint_index() {
                visited.push(machine.waypoint_index());
            }
        }

        // 0 -> 1 -> 2 -> 0 -> ... in cyclic order
        assert!(visited.len() >= 4, "visited only {:?}", visited);
        for pair in visited.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % route.len());
        }
    }

    #[test]
    fn patrol_without_target_still_cycles() {
        let route = square_route();
        let stats = stats();
        let mut machine = EnemyFsm::new();
        let mut position = route[0];

        let mut seen = [false; 3];
        for _ in 0..1000 {
            position = machine.tick(position, &route, &stats, &input(None)).position;
            seen[machine.waypoint_index()] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn patrol_moves_at_move_speed_on_ground_plane() {
        let route = vec![Vec2::new(10.0, 0.0)];
        let stats = stats();
        let mut machine = EnemyFsm::new();

        let outcome = machine.tick(Vec2::ZERO, &route, &stats, &input(None));

        assert!((outcome.position.x - stats.move_speed * DT).abs() < 1e-5);
        assert_eq!(outcome.position.y, 0.0);
    }

    #[test]
    fn target_in_chase_range_switches_to_chase_same_tick() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Patrol, 1);
        let position = Vec2::new(5.0, 0.0);

        machine.tick(position, &route, &stats, &input(Some(Vec2::new(8.0, 0.0))));

        assert_eq!(machine.mode(), AiMode::Chase);
    }

    #[test]
    fn target_outside_chase_range_keeps_patrolling() {
        let route = square_route();
        let stats = stats();
        let mut machine = EnemyFsm::new();

        machine.tick(route[0], &route, &stats, &input(Some(Vec2::new(0.0, 9.0))));

        assert_eq!(machine.mode(), AiMode::Patrol);
    }

    #[test]
    fn chase_beelines_toward_target_ignoring_waypoints() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 1);
        let target = Vec2::new(5.0, -4.0);
        let mut position = Vec2::new(5.0, 0.0);

        for _ in 0..30 {
            let before = position.distance(target);
            position = machine.tick(position, &route, &stats, &input(Some(target))).position;
            if machine.mode() == AiMode::Patrol {
                break;
            }
            assert!(position.distance(target) < before);
            assert!((position.x - 5.0).abs() < 1e-5);
        }

        assert_eq!(machine.waypoint_index(), 1);
    }

    #[test]
    fn chase_stops_at_stopping_distance_without_touching_index() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 2);

        machine.tick(
            Vec2::new(1.0, 1.0),
            &route,
            &stats,
            &input(Some(Vec2::new(1.5, 1.0))),
        );

        assert_eq!(machine.mode(), AiMode::Patrol);
        assert_eq!(machine.waypoint_index(), 2);
    }

    #[test]
    fn chase_without_target_does_nothing() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 1);
        let position = Vec2::new(3.0, 3.0);

        let outcome = machine.tick(position, &route, &stats, &input(None));

        assert_eq!(outcome.position, position);
        assert_eq!(machine.mode(), AiMode::Chase);
        assert!(!outcome.jumpscare);
    }

    #[test]
    fn flashlight_forces_patrol_and_snaps_to_nearest_waypoint() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 0);
        let tick = TickInput {
            target: None,
            delta: DT,
            exposed: true,
        };

        let outcome = machine.tick(Vec2::new(4.5, 4.0), &route, &stats, &tick);

        assert!(outcome.returned_to_path);
        assert_eq!(machine.mode(), AiMode::Patrol);
        assert_eq!(machine.waypoint_index(), 2);
    }

    #[test]
    fn flashlight_overrides_a_chase_started_this_tick() {
        let route = square_route();
        let stats = stats();
        let mut machine = EnemyFsm::new();
        let tick = TickInput {
            target: Some(Vec2::new(3.0, 0.0)),
            delta: DT,
            exposed: true,
        };

        machine.tick(route[0], &route, &stats, &tick);

        assert_eq!(machine.mode(), AiMode::Patrol);
    }

    #[test]
    fn nearest_waypoint_prefers_lowest_index_on_ties() {
        let route = vec![
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];

        assert_eq!(nearest_waypoint(Vec2::ZERO, &route), Some(0));
        assert_eq!(nearest_waypoint(Vec2::new(0.9, 0.0), &route), Some(1));
        assert_eq!(nearest_waypoint(Vec2::ZERO, &[]), None);
    }

    #[test]
    fn jumpscare_fires_once_by_default() {
        let route = square_route();
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 0);
        let target = Some(Vec2::new(2.5, 2.5));
        let position = Vec2::new(2.0, 2.5);

        let first = machine.tick(position, &route, &stats, &input(target));
        let second = machine.tick(first.position, &route, &stats, &input(target));

        assert!(first.jumpscare);
        assert!(!second.jumpscare);
        assert!(machine.has_jumpscared());
    }

    #[test]
    fn jumpscare_repeats_every_tick_when_configured() {
        let route = square_route();
        let stats = EnemyStats {
            jumpscare_policy: JumpscarePolicy::EveryTick,
            ..stats()
        };
        let mut machine = fsm(AiMode::Patrol, 0);
        let target = Some(Vec2::new(0.5, 0.0));
        let mut position = route[0];

        for _ in 0..5 {
            let outcome = machine.tick(position, &route, &stats, &input(target));
            position = outcome.position;
            assert!(outcome.jumpscare);
        }
    }

    #[test]
    fn no_jumpscare_without_target() {
        let route = square_route();
        let stats = stats();
        let mut machine = EnemyFsm::new();

        let outcome = machine.tick(route[0], &route, &stats, &input(None));

        assert!(!outcome.jumpscare);
    }

    #[test]
    fn empty_route_is_inert() {
        let stats = stats();
        let mut machine = EnemyFsm::new();
        let position = Vec2::new(2.0, 3.0);

        let outcome = machine.tick(position, &[], &stats, &input(Some(Vec2::new(4.0, 3.0))));

        assert_eq!(outcome.position, position);
        assert_eq!(machine.mode(), AiMode::Patrol);
        assert_eq!(machine.waypoint_index(), 0);
    }

    #[test]
    fn empty_route_survives_flashlight() {
        let stats = stats();
        let mut machine = fsm(AiMode::Chase, 0);
        let tick = TickInput {
            target: None,
            delta: DT,
            exposed: true,
        };

        machine.tick(Vec2::ZERO, &[], &stats, &tick);

        assert_eq!(machine.mode(), AiMode::Patrol);
        assert_eq!(machine.waypoint_index(), 0);
    }

    #[test]
    fn move_towards_never_overshoots() {
        let to = Vec2::new(1.0, 0.0);
        assert_eq!(move_towards(Vec2::ZERO, to, 5.0), to);
        assert_eq!(move_towards(to, to, 1.0), to);

        let halfway = move_towards(Vec2::ZERO, Vec2::new(0.0, 4.0), 2.0);
        assert!((halfway - Vec2::new(0.0, 2.0)).length() < 1e-6);
    }
}
