use egui::Id;

/// Tracks which dropdown, if any, is currently expanded.
///
/// The host owns one registry and lends it to every dropdown it shows, so
/// the single-open rule holds across the whole interface without any
/// module-level mutable state. The slot holds at most one instance id:
/// acquiring it displaces the previous holder, and that instance notices
/// the loss on its next frame and collapses itself.
#[derive(Debug, Default)]
pub struct OpenRegistry {
    holder: Option<Id>,
}

impl OpenRegistry {
    pub fn new() -> Self {
        Self { holder: None }
    }

    /// Claim the slot for `id`, returning the instance that was displaced.
    pub fn acquire(&mut self, id: Id) -> Option<Id> {
        let previous = self.holder.filter(|held| *held != id);
        self.holder = Some(id);
        previous
    }

    /// Give the slot up, but only if `id` still holds it. A dropdown that
    /// was displaced must not clear out whoever displaced it.
    pub fn release(&mut self, id: Id) {
        if self.holder == Some(id) {
            self.holder = None;
        }
    }

    pub fn is_holder(&self, id: Id) -> bool {
        self.holder == Some(id)
    }

    pub fn holder(&self) -> Option<Id> {
        self.holder
    }
}
