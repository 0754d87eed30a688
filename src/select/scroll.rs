/// Something that can bring the option at `index` into view.
pub trait ScrollIntoView {
    fn scroll_into_view(&mut self, index: usize);
}

/// Ignores every request. For hosts that show the whole catalog at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScroll;

impl ScrollIntoView for NoScroll {
    fn scroll_into_view(&mut self, _index: usize) {}
}

/// The visible window of the options panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelViewport {
    offset: usize,
    height: usize,
}

impl PanelViewport {
    pub fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.height
    }
}

impl ScrollIntoView for PanelViewport {
    /// Nearest-edge scrolling: nothing moves when the row is already visible,
    /// otherwise the row lands on the top or bottom edge, whichever is closer.
    fn scroll_into_view(&mut self, index: usize) {
        if self.height == 0 || self.is_visible(index) {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else {
            self.offset = index + 1 - self.height;
        }
    }
}
