// Volume-aware adapter layer over a pluggable media playback engine
//
// The engine itself (decoding, buffering, rendering, track selection, DRM)
// is supplied by the host framework; this crate defines the seams it plugs
// into and decorates it with structured volume tracking and change fan-out.

pub mod config;
pub mod engine;
pub mod error;
pub mod listener;
pub mod player;
pub mod volume;

// Re-export commonly used types
pub use config::{
    BandwidthMeter, DrmSessionManager, ExecutionContext, LoadControl, PlayerConfig,
    RendererBackend, TrackSelector,
};
pub use engine::{ConfigurableEngine, MediaEngine, PlaybackStatus, PlayerState};
pub use error::{PlayerError, Result};
pub use listener::{OnVolumeChangeListener, VolumeChangeListeners};
pub use player::VolumeAwarePlayer;
pub use volume::VolumeInfo;
