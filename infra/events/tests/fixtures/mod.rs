use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switched(pub u32);

/// Records every event a callback sees, tagged with the observer's label.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<(&'static str, u32)>>>);

impl Journal {
    pub fn observer(&self, label: &'static str) -> impl Fn(&Switched) + Send + Sync + 'static {
        let entries = Arc::clone(&self.0);
        move |event: &Switched| entries.lock().push((label, event.0))
    }

    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        self.0.lock().clone()
    }
}
