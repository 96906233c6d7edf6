// Volume-aware decorator over a playable engine
//
// Intercepts the volume mutator, suppresses redundant updates, and fans out
// change notifications. Every other engine operation passes straight through.

use crate::config::PlayerConfig;
use crate::engine::{ConfigurableEngine, MediaEngine, PlaybackStatus, PlayerState};
use crate::error::Result;
use crate::listener::{OnVolumeChangeListener, VolumeChangeListeners};
use crate::volume::VolumeInfo;
use std::fmt;
use std::sync::Arc;

/// Wraps a [`MediaEngine`] and tracks volume as a structured
/// [`VolumeInfo`], notifying registered listeners whenever the state
/// actually changes.
///
/// The decorator holds two distinct call paths to the volume primitive:
/// the public, intercepting [`set_volume`](Self::set_volume), and the
/// engine's own raw setter which only the decorator calls. Composition
/// keeps the paths separate, so an update can never re-enter the
/// interception.
pub struct VolumeAwarePlayer<E: MediaEngine> {
    engine: E,
    volume_info: VolumeInfo,
    listeners: VolumeChangeListeners,
}

impl<E: MediaEngine> VolumeAwarePlayer<E> {
    /// Wrap an already-built engine
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            volume_info: VolumeInfo::default(),
            listeners: VolumeChangeListeners::new(),
        }
    }

    /// Build the engine from `config` and wrap it.
    /// The bundle is handed to the engine unchanged.
    pub fn from_config(config: PlayerConfig) -> Result<Self>
    where
        E: ConfigurableEngine,
    {
        Ok(Self::new(E::open(config)?))
    }

    /// Set the volume from a plain scalar level; level 0 mutes.
    ///
    /// Returns `true` when the stored state actually changed.
    pub fn set_volume(&mut self, level: f32) -> bool {
        self.set_volume_info(VolumeInfo::from_level(level))
    }

    /// Apply a structured volume state.
    ///
    /// Redundant updates are suppressed: when `info` equals the stored
    /// state nothing happens and `false` is returned. On a real change the
    /// effective level goes into the wrapped engine through its raw setter,
    /// the new state is committed, and every registered listener is
    /// notified in registration order, synchronously, on the calling
    /// thread. A panicking listener propagates to the caller and leaves
    /// later listeners un-notified for that event.
    pub fn set_volume_info(&mut self, info: VolumeInfo) -> bool {
        if info == self.volume_info {
            return false;
        }
        self.engine.set_volume(info.effective_level());
        self.volume_info = info;
        log::debug!("{}: volume changed to {}", self, info);
        self.listeners.notify(info);
        true
    }

    /// Current volume state, by value
    pub fn volume_info(&self) -> VolumeInfo {
        self.volume_info
    }

    /// Register `listener`; registration order is notification order.
    /// Repeated registration of the same handle is kept, each entry firing
    /// once per event.
    pub fn add_volume_change_listener(&self, listener: Arc<dyn OnVolumeChangeListener>) {
        self.listeners.add(listener);
    }

    /// Unregister `listener`; no-op when it was never registered
    pub fn remove_volume_change_listener(&self, listener: &Arc<dyn OnVolumeChangeListener>) {
        self.listeners.remove(listener);
    }

    /// Drop all registrations. Volume state tracking is unaffected.
    pub fn clear_volume_change_listeners(&self) {
        self.listeners.clear();
    }

    /// Read-only access to the wrapped engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Unwrap the decorator, dropping all listener registrations
    pub fn into_inner(self) -> E {
        self.engine
    }
}

impl<E: MediaEngine> MediaEngine for VolumeAwarePlayer<E> {
    fn load(&mut self, source: &str) -> Result<()> {
        self.engine.load(source)
    }

    fn play(&mut self) -> Result<()> {
        self.engine.play()
    }

    fn pause(&mut self) -> Result<()> {
        self.engine.pause()
    }

    fn stop(&mut self) -> Result<()> {
        self.engine.stop()
    }

    fn seek(&mut self, position_ms: u64) -> Result<()> {
        self.engine.seek(position_ms)
    }

    fn set_volume(&mut self, volume: f32) {
        // Route through the interception; engine callers ignore the flag
        VolumeAwarePlayer::set_volume(self, volume);
    }

    fn set_playback_rate(&mut self, rate: f32) -> Result<()> {
        self.engine.set_playback_rate(rate)
    }

    fn state(&self) -> PlayerState {
        self.engine.state()
    }

    fn status(&self) -> PlaybackStatus {
        self.engine.status()
    }

    fn release(&mut self) -> Result<()> {
        self.engine.release()
    }
}

impl<E: MediaEngine> fmt::Display for VolumeAwarePlayer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player:volume:{:x}", self as *const Self as usize)
    }
}
