//! Frame-stepped animation clock

use bevy::prelude::*;

/// Animation time accumulator, advanced by a fixed step each frame.
///
/// Not tied to wall-clock time: a slow frame moves the constellation by the
/// same amount as a fast one.
#[derive(Resource, Debug, Clone)]
pub struct OrbitClock {
    elapsed: f64,
    step: f64,
    running: bool,
    frames: u64,
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self::new(0.003)
    }
}

impl OrbitClock {
    /// A running clock at t = 0.
    pub fn new(step: f64) -> Self {
        Self {
            elapsed: 0.0,
            step,
            running: true,
            frames: 0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[cfg(test)]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Frames advanced since startup
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one frame if running and return the current time.
    pub fn tick(&mut self) -> f64 {
        if self.running {
            self.elapsed += self.step;
            self.frames += 1;
        }
        self.elapsed
    }
}

/// System to advance the orbit clock once per frame
pub fn advance_orbit_clock(mut clock: ResMut<OrbitClock>) {
    clock.tick();
}

/// System to pause and resume the animation with the space bar
pub fn toggle_orbit_clock(input: Res<ButtonInput<KeyCode>>, mut clock: ResMut<OrbitClock>) {
    if input.just_pressed(KeyCode::Space) {
        if clock.is_running() {
            clock.stop();
        } else {
            clock.start();
        }
        info!(
            "Animation {} at t = {:.3}",
            if clock.is_running() { "resumed" } else { "paused" },
            clock.elapsed()
        );
    }
}

/// System to stop the clock when the app is shutting down
pub fn stop_orbit_clock_on_exit(mut exits: MessageReader<AppExit>, mut clock: ResMut<OrbitClock>) {
    if exits.read().next().is_some() && clock.is_running() {
        clock.stop();
        info!(
            "Orbit clock stopped after {} frames (t = {:.3})",
            clock.frames(),
            clock.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_clock_default() {
        let clock = OrbitClock::default();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.step(), 0.003);
        assert!(clock.is_running());
    }

    #[test]
    fn test_k_ticks_accumulate_k_steps() {
        let mut clock = OrbitClock::new(0.003);
        let k = 10_000;
        for _ in 0..k {
            clock.tick();
        }
        assert_eq!(clock.frames(), k);
        assert!((clock.elapsed() - k as f64 * 0.003).abs() < 1e-9);
    }

    #[test]
    fn test_stopped_clock_does_not_advance() {
        let mut clock = OrbitClock::new(0.5);
        clock.tick();
        clock.stop();
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.frames(), 1);

        clock.start();
        assert_eq!(clock.tick(), 1.0);
    }

    #[test]
    fn test_space_pauses_and_resumes() {
        let mut world = World::new();
        world.insert_resource(OrbitClock::new(0.25));
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::Space);
        world.insert_resource(input);

        world.run_system_once(toggle_orbit_clock).unwrap();
        assert!(!world.resource::<OrbitClock>().is_running());
        world.run_system_once(advance_orbit_clock).unwrap();
        assert_eq!(world.resource::<OrbitClock>().elapsed(), 0.0);

        // Held across a frame boundary: no second toggle
        world.resource_mut::<ButtonInput<KeyCode>>().clear();
        world.run_system_once(toggle_orbit_clock).unwrap();
        assert!(!world.resource::<OrbitClock>().is_running());

        let mut input = world.resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::Space);
        input.clear();
        input.press(KeyCode::Space);
        world.run_system_once(toggle_orbit_clock).unwrap();
        assert!(world.resource::<OrbitClock>().is_running());
        world.run_system_once(advance_orbit_clock).unwrap();
        assert_eq!(world.resource::<OrbitClock>().elapsed(), 0.25);
    }

    #[test]
    fn test_advance_system_ticks_resource() {
        let mut world = World::new();
        world.insert_resource(OrbitClock::new(0.25));
        world.run_system_once(advance_orbit_clock).unwrap();
        world.run_system_once(advance_orbit_clock).unwrap();
        assert_eq!(world.resource::<OrbitClock>().elapsed(), 0.5);
    }
}
