//! Session controller
//!
//! Owns the [`SimulationState`], applies queued user commands and advances
//! time once per rendered frame. Every input is normalized here so the engine
//! only ever sees `0 <= beta <= beta_max < 1` and `global_time >= 0`.

use super::scene::{Scene, build_scene};
use super::state::{PlayState, SimulationState};
use crate::consts::{DEFAULT_START_BETA, SEEK_EPSILON};
use crate::settings::Geometry;

/// Commands the input layer can issue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Stop,
    /// Step time back by `step / (beta + epsilon)` seconds (paused only)
    SeekBackward(f64),
    /// Step time forward by `step / (beta + epsilon)` seconds (paused only)
    SeekForward(f64),
    /// Velocity fraction of `C` (only before any time has elapsed)
    SetVelocity(f64),
    ToggleTransformMode,
}

/// Commands waiting for the next tick, in arrival order
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Take all pending commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Drives one session
#[derive(Debug)]
pub struct Controller {
    state: SimulationState,
    geometry: Geometry,
    queue: CommandQueue,
}

impl Controller {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            state: SimulationState::new(),
            geometry,
            queue: CommandQueue::new(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Queue a command for the next [`tick`](Self::tick)
    pub fn push(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Apply a command immediately. Returns `false` when the command does not
    /// apply in the current state and was ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        let state = &mut self.state;
        let accepted = match command {
            Command::Start => match state.play_state {
                PlayState::Running => false,
                PlayState::Stopped | PlayState::Paused => {
                    if state.beta == 0.0 {
                        state.reanchor(self.geometry.light_speed);
                        state.beta = DEFAULT_START_BETA.min(self.geometry.beta_max);
                    }
                    state.play_state = PlayState::Running;
                    log::info!("Started at {:.3} c", state.beta);
                    true
                }
            },

            Command::Pause => {
                if state.play_state == PlayState::Running {
                    state.play_state = PlayState::Paused;
                    log::info!("Paused at t={:.2}", state.global_time);
                    true
                } else {
                    false
                }
            }

            Command::Resume => {
                if state.play_state == PlayState::Paused {
                    state.play_state = PlayState::Running;
                    log::info!("Resumed at t={:.2}", state.global_time);
                    true
                } else {
                    false
                }
            }

            Command::Stop => {
                // Mode survives a stop; everything else returns to the initial state
                *state = SimulationState {
                    transform_mode: state.transform_mode,
                    ..SimulationState::new()
                };
                log::info!("Stopped");
                true
            }

            Command::SeekBackward(step) => Self::seek(state, -step),
            Command::SeekForward(step) => Self::seek(state, step),

            Command::SetVelocity(fraction) => {
                if state.global_time != 0.0 || !fraction.is_finite() {
                    false
                } else {
                    let beta = fraction.clamp(0.0, self.geometry.beta_max);
                    if beta != fraction {
                        log::debug!("Velocity {} clamped to {}", fraction, beta);
                    }
                    state.reanchor(self.geometry.light_speed);
                    state.beta = beta;
                    log::info!("Velocity set to {:.3} c", beta);
                    true
                }
            }

            Command::ToggleTransformMode => {
                state.transform_mode = state.transform_mode.toggled();
                log::info!("Transform mode: {}", state.transform_mode.as_str());
                true
            }
        };

        if !accepted {
            log::debug!("Ignored {:?} while {:?}", command, self.state.play_state);
        }
        accepted
    }

    fn seek(state: &mut SimulationState, step: f64) -> bool {
        if state.play_state != PlayState::Paused || !step.is_finite() {
            return false;
        }
        // Slower rockets take bigger time steps so pillars cross at a similar rate
        let delta = step / (state.beta + SEEK_EPSILON);
        state.global_time = (state.global_time + delta).max(0.0);
        true
    }

    /// Advance one rendered frame.
    ///
    /// Drains queued commands, advances time if running, and returns the scene
    /// for the resulting state. A paused or stopped session still yields a scene.
    pub fn tick(&mut self, elapsed_wall_ms: f64) -> Scene {
        for command in self.queue.drain() {
            self.apply(command);
        }

        if self.state.play_state == PlayState::Running
            && elapsed_wall_ms.is_finite()
            && elapsed_wall_ms > 0.0
        {
            self.state.global_time += elapsed_wall_ms / 1000.0;
        }

        self.scene()
    }

    /// Scene for the current state without advancing time
    pub fn scene(&self) -> Scene {
        build_scene(&self.state, &self.geometry)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Geometry::default())
    }
}
