// Ordered listener registry for volume change fan-out

use crate::volume::VolumeInfo;
use parking_lot::Mutex;
use std::sync::Arc;

/// Volume change listener trait
/// Callbacks run inline on the thread that mutated the volume and should
/// return quickly to avoid blocking playback control.
pub trait OnVolumeChangeListener: Send + Sync {
    /// Called after a volume state change has been applied to the engine
    fn on_volume_changed(&self, info: VolumeInfo);
}

/// Ordered collection of volume change listeners.
///
/// Always initialized, possibly empty; notification with no listeners is
/// just an empty iteration. Insertion order is preserved and handles are
/// identified by pointer, so registering the same handle twice keeps both
/// entries and each fires once per event.
pub struct VolumeChangeListeners {
    listeners: Mutex<Vec<Arc<dyn OnVolumeChangeListener>>>,
}

impl VolumeChangeListeners {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&self, listener: Arc<dyn OnVolumeChangeListener>) {
        self.listeners.lock().push(listener);
    }

    /// Remove the first registration of `listener`; no-op when absent
    pub fn remove(&self, listener: &Arc<dyn OnVolumeChangeListener>) {
        let mut listeners = self.listeners.lock();
        if let Some(index) = listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            listeners.remove(index);
        }
    }

    pub fn clear(&self) {
        self.listeners.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Invoke every registered listener in registration order.
    ///
    /// Iterates over a snapshot of the handles so a callback may mutate the
    /// registry without deadlocking; such a mutation takes effect from the
    /// next event on.
    pub fn notify(&self, info: VolumeInfo) {
        let snapshot: Vec<_> = self.listeners.lock().clone();
        for listener in snapshot {
            listener.on_volume_changed(info);
        }
    }
}

impl Default for VolumeChangeListeners {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Appends its label to a shared log on every event
    struct RecordingListener {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingListener {
        fn new(label: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Arc<Self> {
            Arc::new(Self { label, log })
        }
    }

    impl OnVolumeChangeListener for RecordingListener {
        fn on_volume_changed(&self, _info: VolumeInfo) {
            self.log.lock().push(self.label);
        }
    }

    #[test]
    fn test_notify_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = VolumeChangeListeners::new();
        registry.add(RecordingListener::new("l1", log.clone()));
        registry.add(RecordingListener::new("l2", log.clone()));
        registry.add(RecordingListener::new("l3", log.clone()));

        registry.notify(VolumeInfo::from_level(0.5));

        assert_eq!(*log.lock(), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_remove_skips_only_the_removed_listener() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = VolumeChangeListeners::new();
        let l1 = RecordingListener::new("l1", log.clone());
        let l2: Arc<dyn OnVolumeChangeListener> = RecordingListener::new("l2", log.clone());
        let l3 = RecordingListener::new("l3", log.clone());
        registry.add(l1);
        registry.add(l2.clone());
        registry.add(l3);

        registry.remove(&l2);
        registry.notify(VolumeInfo::from_level(0.5));

        assert_eq!(*log.lock(), vec!["l1", "l3"]);
    }

    #[test]
    fn test_remove_of_unknown_listener_is_a_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = VolumeChangeListeners::new();
        registry.add(RecordingListener::new("l1", log.clone()));

        let stranger: Arc<dyn OnVolumeChangeListener> = RecordingListener::new("l2", log.clone());
        registry.remove(&stranger);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fires_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = VolumeChangeListeners::new();
        let listener = RecordingListener::new("l1", log.clone());
        registry.add(listener.clone());
        registry.add(listener);

        registry.notify(VolumeInfo::from_level(0.5));

        assert_eq!(*log.lock(), vec!["l1", "l1"]);
    }

    #[test]
    fn test_clear_empties_the_registry() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = VolumeChangeListeners::new();
        registry.add(RecordingListener::new("l1", log.clone()));
        registry.add(RecordingListener::new("l2", log.clone()));

        registry.clear();
        registry.notify(VolumeInfo::from_level(0.5));

        assert!(registry.is_empty());
        assert!(log.lock().is_empty());
    }
}
