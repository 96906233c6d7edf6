// Structured volume state shared between the player and its listeners

use std::fmt;

/// Snapshot of the player volume: a mute flag plus the scalar level.
///
/// Plain value type with structural equality; two snapshots describe the
/// same state exactly when both the mute flag and the level match. The
/// level kept here survives a mute, so unmuting can restore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeInfo {
    /// Whether the player is muted
    pub mute: bool,
    /// Volume level (0.0 - 1.0)
    pub volume: f32,
}

impl VolumeInfo {
    pub fn new(mute: bool, volume: f32) -> Self {
        Self { mute, volume }
    }

    /// Derive the structured state from a plain scalar level.
    ///
    /// Level 0 means muted. No clamping happens here; out-of-range values
    /// pass through and the engine's own range handling applies.
    pub fn from_level(level: f32) -> Self {
        Self {
            mute: level == 0.0,
            volume: level,
        }
    }

    /// The level actually pushed into the engine: 0 while muted, else the
    /// stored level.
    pub fn effective_level(&self) -> f32 {
        if self.mute {
            0.0
        } else {
            self.volume
        }
    }
}

impl Default for VolumeInfo {
    fn default() -> Self {
        Self {
            mute: false,
            volume: 1.0,
        }
    }
}

impl fmt::Display for VolumeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Volume{{mute={}, level={}}}", self.mute, self.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_derives_mute() {
        let muted = VolumeInfo::from_level(0.0);
        assert!(muted.mute);
        assert_eq!(muted.volume, 0.0);

        let audible = VolumeInfo::from_level(0.5);
        assert!(!audible.mute);
        assert_eq!(audible.volume, 0.5);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(VolumeInfo::new(true, 0.3), VolumeInfo::new(true, 0.3));
        // Same mute flag, different level: still a different state
        assert_ne!(VolumeInfo::new(true, 0.3), VolumeInfo::new(true, 0.4));
        assert_ne!(VolumeInfo::new(true, 0.3), VolumeInfo::new(false, 0.3));
    }

    #[test]
    fn test_effective_level_is_zero_while_muted() {
        assert_eq!(VolumeInfo::new(true, 0.7).effective_level(), 0.0);
        assert_eq!(VolumeInfo::new(false, 0.7).effective_level(), 0.7);
    }

    #[test]
    fn test_default_is_audible_full_volume() {
        let info = VolumeInfo::default();
        assert!(!info.mute);
        assert_eq!(info.volume, 1.0);
    }
}
