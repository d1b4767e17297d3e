//! Input - events from the windowing layer and the set of held inputs

use std::collections::HashSet;

use hexad_core::RealmId;

/// Logical keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Number row 0-9, toggles the realm with that id
    Digit(u8),
    /// Extra key for realm 10
    RealmTen,
    /// Held to unfold
    SliderUp,
    /// Held to fold
    SliderDown,
    /// Anything else, by platform key code
    Other(u32),
}

impl Key {
    /// Realm toggled by this key, if any
    pub fn realm(self) -> Option<RealmId> {
        match self {
            Key::Digit(d) if d <= 9 => RealmId::new(d).ok(),
            Key::RealmTen => Some(RealmId::FULL),
            _ => None,
        }
    }
}

/// Input events fed to the viewer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Primary pointer button pressed (starts a drag)
    PointerDown,
    /// Primary pointer button released
    PointerUp,
    /// Pointer moved by (dx, dy) pixels since the last motion event
    PointerMotion { dx: f64, dy: f64 },
    /// Wheel steps, positive zooms in
    Scroll { steps: i32 },
    Resize { width: u32, height: u32 },
}

/// Identifier of something that can be held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Key(Key),
    PointerDrag,
}

/// Inputs currently held
#[derive(Debug, Clone, Default)]
pub struct ActiveInputs {
    held: HashSet<InputId>,
}

impl ActiveInputs {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self, id: InputId) -> bool {
        self.held.contains(&id)
    }

    /// Mark `id` held. Returns false if it already was.
    pub fn activate(&mut self, id: InputId) -> bool {
        self.held.insert(id)
    }

    /// Mark `id` released. Returns false if it was not held.
    pub fn deactivate(&mut self, id: InputId) -> bool {
        self.held.remove(&id)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.is_active(InputId::PointerDrag)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_realms() {
        assert_eq!(Key::Digit(0).realm(), Some(RealmId::EMPTY));
        assert_eq!(Key::Digit(9).realm().map(RealmId::get), Some(9));
        assert_eq!(Key::Digit(12).realm(), None);
        assert_eq!(Key::RealmTen.realm(), Some(RealmId::FULL));
        assert_eq!(Key::SliderUp.realm(), None);
    }

    #[test]
    fn test_active_inputs() {
        let mut active = ActiveInputs::new();
        let up = InputId::Key(Key::SliderUp);

        assert!(!active.is_active(up));
        assert!(active.activate(up));
        assert!(!active.activate(up));
        assert!(active.is_active(up));
        assert_eq!(active.len(), 1);

        assert!(active.deactivate(up));
        assert!(!active.deactivate(up));
        assert!(active.is_empty());
    }

    #[test]
    fn test_drag_tracking() {
        let mut active = ActiveInputs::new();
        active.activate(InputId::PointerDrag);
        assert!(active.is_dragging());
        active.clear();
        assert!(!active.is_dragging());
    }
}
