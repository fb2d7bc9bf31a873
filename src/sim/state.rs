//! Simulation state and core types
//!
//! Every piece of mutable simulation data lives here, owned by a single
//! [`SimState`] that the driver passes into each component. No globals, no
//! data stashed on renderable objects: presentation reads positions and
//! rotation off this struct and applies them to the scene.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Spin intensity tier selected by the level buttons. Also fixes the win
/// probability for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// Probability that this spin is a winning draw
    pub fn win_probability(&self) -> f64 {
        match self {
            Level::One => 1.0 / 3.0,
            Level::Two => 0.5,
            Level::Three => 1.0,
        }
    }
}

/// The rotating drum. `rotation_angle` is purely presentational; the
/// simulation only cares about angular velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Drum {
    /// rad/tick, always in [0, MAX_ANGULAR_VELOCITY]
    pub angular_velocity: f32,
    /// rad, wraps at 2π
    pub rotation_angle: f32,
    /// True between start_spin and a stop request
    pub spinning: bool,
}

/// The single active ball. Captive means it is still inside the drum and
/// moves with it; once released it is a free projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Identity for scene add/remove correlation
    pub id: u64,
    pub captive: bool,
    /// Position relative to drum center, valid only while captive
    pub local_pos: Vec3,
    /// World position, valid always
    pub world_pos: Vec3,
    /// Velocity, valid only while free
    pub vel: Vec3,
    /// Decided at arm time, attached at release
    pub is_winner: bool,
    /// Latched on first floor contact so the result fires exactly once
    pub result_shown: bool,
}

impl Ball {
    /// New captive ball at the drum center
    pub fn new(id: u64) -> Self {
        Self {
            id,
            captive: true,
            local_pos: Vec3::ZERO,
            world_pos: DRUM_CENTER,
            vel: Vec3::ZERO,
            is_winner: false,
            result_shown: false,
        }
    }
}

/// One armed spin: the outcome and the two randomized deadlines.
///
/// Deadlines are absolute timestamps on the injected clock, consumed (set to
/// `None`) when they fire or are cancelled. Replacing the session at the next
/// `start_spin` discards any still-pending deadlines wholesale, so a stale
/// timer can never mutate a newer session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinSession {
    /// Monotonically increasing version, for event attribution
    pub id: u64,
    pub level: Level,
    /// Drawn at arm time, carried onto the ball at release
    pub is_winner: bool,
    pub eject_deadline: Option<f64>,
    pub stop_deadline: Option<f64>,
    pub ejected: bool,
}

/// Camera transition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraPhase {
    #[default]
    Idle,
    Departing,
    Holding,
    Returning,
}

/// Scripted dolly-in/hold/dolly-out sequence state. Reused across sessions;
/// only ever reset back to Idle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraTransition {
    pub phase: CameraPhase,
    pub phase_start_ms: f64,
    /// Captured fresh on every Idle -> Departing transition
    pub origin: Vec3,
    pub target: Vec3,
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self {
            phase: CameraPhase::Idle,
            phase_start_ms: 0.0,
            origin: CAMERA_HOME,
            target: CAMERA_TARGET,
        }
    }
}

/// Presentation-facing events, drained by the host after each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A fresh captive ball exists; add it to the scene
    BallSpawned { id: u64 },
    /// The previous ball was superseded; remove it from the scene
    BallRemoved { id: u64 },
    /// The ball left the drum through the chute
    Ejected { session: u64 },
    /// First floor contact; show the win/lose marker. Fires exactly once per
    /// ball regardless of later bounces.
    ResultLanded { winner: bool },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub drum: Drum,
    pub ball: Ball,
    /// At most one live session
    pub session: Option<SpinSession>,
    pub camera: CameraTransition,
    /// Live camera position. Host orbit controls own it while the sequencer
    /// is Idle; the sequencer writes it exclusively otherwise.
    pub camera_pos: Vec3,
    /// Timestamp of the last accepted tick, for the ~60 Hz gate
    pub last_tick_ms: Option<f64>,
    /// Pending presentation events (not part of the deterministic state)
    #[serde(skip)]
    pub events: Vec<SimEvent>,
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    next_ball: u64,
    next_session: u64,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl SimState {
    /// Create a new simulation with the given seed. The initial captive ball
    /// is spawned immediately (and announced via `BallSpawned`).
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            drum: Drum::default(),
            ball: Ball::new(1),
            session: None,
            camera: CameraTransition::default(),
            camera_pos: CAMERA_HOME,
            last_tick_ms: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_ball: 2,
            next_session: 1,
        };
        state.events.push(SimEvent::BallSpawned { id: 1 });
        state
    }

    /// Allocate the next ball identity
    pub fn next_ball_id(&mut self) -> u64 {
        let id = self.next_ball;
        self.next_ball += 1;
        id
    }

    /// Allocate the next session version
    pub fn next_session_id(&mut self) -> u64 {
        let id = self.next_session;
        self.next_session += 1;
        id
    }

    /// Replace the active ball with a fresh captive one and queue the scene
    /// remove/add pair for the presentation adapter.
    pub fn replace_ball(&mut self) {
        let old_id = self.ball.id;
        let id = self.next_ball_id();
        self.ball = Ball::new(id);
        self.events.push(SimEvent::BallRemoved { id: old_id });
        self.events.push(SimEvent::BallSpawned { id });
        log::debug!("ball {old_id} replaced by {id}");
    }

    /// Drain pending presentation events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
