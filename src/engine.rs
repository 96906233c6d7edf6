// Playable engine contract and playback state types

use crate::config::PlayerConfig;
use crate::error::Result;

/// Playback lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing loaded
    Idle,
    /// Media is loading or rebuffering
    Buffering,
    /// Media is loaded and ready to play
    Ready,
    /// Media is currently playing
    Playing,
    /// Playback is paused
    Paused,
    /// Playback reached the end of the media
    Ended,
    /// Engine encountered an error
    Error,
}

/// Playback status information
#[derive(Debug, Clone)]
pub struct PlaybackStatus {
    /// Current playback position in milliseconds
    pub position_ms: u64,
    /// Total duration in milliseconds
    pub duration_ms: u64,
    /// Current playback speed/rate
    pub playback_rate: f32,
    /// Whether the engine is buffering
    pub buffering: bool,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self {
            position_ms: 0,
            duration_ms: 0,
            playback_rate: 1.0,
            buffering: false,
        }
    }
}

/// Abstract playable engine contract.
///
/// The host framework supplies the implementation (rendering pipeline,
/// buffering, track selection and DRM all live behind it). The decorator in
/// [`crate::player`] wraps any engine satisfying this trait and intercepts
/// only the volume mutator.
pub trait MediaEngine: Send {
    /// Load media from a source locator
    fn load(&mut self, source: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Stop playback and reset position
    fn stop(&mut self) -> Result<()>;

    /// Seek to a specific position (in milliseconds)
    fn seek(&mut self, position_ms: u64) -> Result<()>;

    /// Raw volume setter (0.0 - 1.0).
    ///
    /// This is the engine's own gain control, an in-memory operation with
    /// no failure mode. External callers should go through
    /// [`crate::player::VolumeAwarePlayer`]; the decorator uses this path
    /// to push the final level down.
    fn set_volume(&mut self, volume: f32);

    /// Set playback rate/speed (1.0 = normal speed)
    fn set_playback_rate(&mut self, rate: f32) -> Result<()>;

    /// Get the current lifecycle state
    fn state(&self) -> PlayerState;

    /// Get the current playback status
    fn status(&self) -> PlaybackStatus;

    /// Release all resources
    fn release(&mut self) -> Result<()>;
}

/// Engines that can be built directly from a [`PlayerConfig`]
pub trait ConfigurableEngine: MediaEngine + Sized {
    /// Build the engine from the construction bundle.
    /// Validation of the handles is entirely the engine's business.
    fn open(config: PlayerConfig) -> Result<Self>;
}
