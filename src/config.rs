// Pass-through construction bundle for the wrapped engine
//
// None of these handles are interpreted here; the decorator hands the whole
// bundle to the engine's initializer unchanged.

use std::sync::Arc;

/// Rendering backend handle (video/audio renderers), opaque to this crate
pub trait RendererBackend: Send + Sync {}

/// Track selection strategy handle, opaque to this crate
pub trait TrackSelector: Send + Sync {}

/// Buffering and load-control policy handle, opaque to this crate
pub trait LoadControl: Send + Sync {}

/// Bandwidth estimation strategy handle, opaque to this crate
pub trait BandwidthMeter: Send + Sync {}

/// DRM session manager handle; the decryption scheme lives behind the
/// trait object
pub trait DrmSessionManager: Send + Sync {}

/// Handle to the engine's designated execution context (the single logical
/// thread all player operations run on)
pub trait ExecutionContext: Send + Sync {}

/// Everything a playable engine needs at construction time.
///
/// Mirrors the host framework's engine constructor; the DRM session manager
/// is the only optional piece.
#[derive(Clone)]
pub struct PlayerConfig {
    pub renderers: Arc<dyn RendererBackend>,
    pub track_selector: Arc<dyn TrackSelector>,
    pub load_control: Arc<dyn LoadControl>,
    pub bandwidth_meter: Arc<dyn BandwidthMeter>,
    pub drm_sessions: Option<Arc<dyn DrmSessionManager>>,
    pub context: Arc<dyn ExecutionContext>,
}
