//! Single-instance audio resource
//!
//! Every reader page has exactly one audio output. Instead of ad hoc
//! variable reassignment, the clip is an explicitly owned resource:
//! acquiring a new clip always releases the one that is playing, so at
//! most one clip is ever active.

/// Handle to an acquired clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub id: u64,
    pub label: String,
}

/// Owner of the page's one audio output
#[derive(Debug, Default)]
pub struct AudioSlot {
    next_id: u64,
    active: Option<Clip>,
}

impl AudioSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the slot for a new clip, releasing any clip currently
    /// playing. Returns the new clip and the one that was stopped, if
    /// any.
    pub fn acquire(&mut self, label: impl Into<String>) -> (Clip, Option<Clip>) {
        let released = self.active.take();

        let clip = Clip {
            id: self.next_id,
            label: label.into(),
        };
        self.next_id += 1;
        self.active = Some(clip.clone());

        (clip, released)
    }

    /// Release a clip by id. Releasing a stale id (already replaced) is a
    /// no-op and returns false.
    pub fn release(&mut self, id: u64) -> bool {
        match &self.active {
            Some(clip) if clip.id == id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Stop whatever is playing.
    pub fn stop(&mut self) -> Option<Clip> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&Clip> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: u64) -> bool {
        matches!(&self.active, Some(clip) if clip.id == id)
    }
}
