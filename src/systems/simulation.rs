//! Simulation system
//!
//! Owns the run/pause state and the target frame rate, paces frames, and
//! applies keyboard actions to the scene. Each simulated frame advances
//! physics by exactly `1 / target_fps` seconds, split into substeps no
//! longer than [`MAX_SUBSTEP`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::SimulationConfig;
use crate::input::InputAction;
use crate::scene::Scene;

/// Frame intervals averaged for the FPS readout
pub const FPS_SAMPLE_FRAMES: usize = 10;

/// Longest physics step the joints stay stiff under (seconds)
pub const MAX_SUBSTEP: f32 = 1.0 / 50.0;

/// What the caller must do after an action was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The simulation or scene took care of it
    Handled,
    /// Switch the window in or out of fullscreen
    ToggleFullscreen,
    /// Close the application
    Exit,
}

/// Frame deadline plus a rolling FPS measurement
#[derive(Debug, Clone)]
pub struct FrameClock {
    next_frame_at: Instant,
    last_tick: Option<Instant>,
    intervals: VecDeque<Duration>,
}

impl FrameClock {
    /// Create a clock whose first frame is due at `now`
    pub fn new(now: Instant) -> Self {
        Self {
            next_frame_at: now,
            last_tick: None,
            intervals: VecDeque::with_capacity(FPS_SAMPLE_FRAMES),
        }
    }

    /// Mark a frame as started and schedule the next one `1 / fps` later
    ///
    /// A frame that starts late does not make the following ones early.
    pub fn tick(&mut self, now: Instant, fps: u32) {
        if let Some(last) = self.last_tick {
            if self.intervals.len() == FPS_SAMPLE_FRAMES {
                self.intervals.pop_front();
            }
            self.intervals.push_back(now.saturating_duration_since(last));
        }
        self.last_tick = Some(now);

        let period = Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)));
        let scheduled = self.next_frame_at + period;
        self.next_frame_at = if scheduled > now { scheduled } else { now };
    }

    /// Forget the schedule and measurements, e.g. after the window appears
    pub fn restart(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    pub fn next_frame_at(&self) -> Instant {
        self.next_frame_at
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame_at
    }

    /// Average frames per second over the recent intervals (0 until measured)
    pub fn fps(&self) -> f32 {
        let total: Duration = self.intervals.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.intervals.len() as f32 / total.as_secs_f32()
    }
}

/// Manages pausing, frame rate, and stepping the scene
pub struct SimulationSystem {
    paused: bool,
    target_fps: u32,
    min_fps: u32,
    max_fps: u32,
    clock: FrameClock,
}

impl SimulationSystem {
    /// Create a simulation system from config
    pub fn new(config: &SimulationConfig) -> Self {
        let min_fps = config.min_fps.max(1);
        let max_fps = config.max_fps.max(min_fps);
        Self {
            paused: config.start_paused,
            target_fps: config.target_fps.clamp(min_fps, max_fps),
            min_fps,
            max_fps,
            clock: FrameClock::new(Instant::now()),
        }
    }

    /// Fixed physics step for one frame
    pub fn step_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }

    /// Physics steps taken per simulated frame
    pub fn substeps(&self) -> u32 {
        (self.step_dt() / MAX_SUBSTEP).ceil().max(1.0) as u32
    }

    /// Run one frame: step and record trails unless paused
    ///
    /// Returns whether the scene advanced.
    pub fn update(&mut self, scene: &mut Scene) -> bool {
        if self.paused {
            return false;
        }
        let substeps = self.substeps();
        let dt = self.step_dt() / substeps as f32;
        for _ in 0..substeps {
            scene.step(dt);
        }
        scene.record_trails();
        true
    }

    /// Run a frame if its deadline has passed
    ///
    /// Redraws that arrive early (key presses, expose events) leave the
    /// scene and the clock untouched. Returns whether the scene advanced.
    pub fn advance(&mut self, now: Instant, scene: &mut Scene) -> bool {
        if !self.clock.is_due(now) {
            return false;
        }
        self.clock.tick(now, self.target_fps);
        self.update(scene)
    }

    /// Apply an action; window-level actions are handed back to the caller
    pub fn handle_action(&mut self, action: InputAction, scene: &mut Scene) -> ActionOutcome {
        match action {
            InputAction::TogglePause => {
                self.paused = !self.paused;
                log::info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
            }
            InputAction::DecreaseFps => {
                if self.target_fps > self.min_fps {
                    self.target_fps -= 1;
                    log::info!("FPS decreased to {}", self.target_fps);
                } else {
                    log::debug!("FPS already at minimum ({})", self.min_fps);
                }
            }
            InputAction::IncreaseFps => {
                if self.target_fps < self.max_fps {
                    self.target_fps += 1;
                    log::info!("FPS increased to {}", self.target_fps);
                } else {
                    log::debug!("FPS already at maximum ({})", self.max_fps);
                }
            }
            InputAction::Reset => match scene.reset() {
                Ok(()) => log::info!("Scene reset"),
                Err(e) => log::error!("Failed to reset scene: {}", e),
            },
            InputAction::Disturb => {
                let impulse = scene.disturb_impulse();
                let count = scene.disturb(impulse);
                log::info!("Disturbed {} bodies", count);
            }
            InputAction::ToggleTrails => {
                let shown = scene.toggle_trails();
                log::info!("Trails {}", if shown { "shown" } else { "hidden" });
            }
            InputAction::ClearTrails => {
                scene.clear_trails();
                log::info!("Trails cleared");
            }
            InputAction::ToggleConnectors => {
                let shown = scene.toggle_connectors();
                log::info!("Connectors {}", if shown { "shown" } else { "hidden" });
            }
            InputAction::ToggleFullscreen => return ActionOutcome::ToggleFullscreen,
            InputAction::Exit => return ActionOutcome::Exit,
        }
        ActionOutcome::Handled
    }

    /// Restart frame pacing from `now`
    pub fn restart_clock(&mut self, now: Instant) {
        self.clock.restart(now);
    }

    pub fn is_frame_due(&self, now: Instant) -> bool {
        self.clock.is_due(now)
    }

    pub fn next_frame_at(&self) -> Instant {
        self.clock.next_frame_at()
    }

    /// Measured frames per second
    pub fn measured_fps(&self) -> f32 {
        self.clock.fps()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
