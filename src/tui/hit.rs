use crate::select::{ControlId, EventTarget};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub control: ControlId,
    pub target: EventTarget,
}

/// Screen regions recorded while drawing, looked up on mouse events.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, control: ControlId, target: EventTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, Hit { control, target }));
        }
    }

    /// The topmost region under the pointer. Later registrations are drawn
    /// on top, so the search runs backwards.
    pub fn at(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, hit)| *hit)
    }
}
