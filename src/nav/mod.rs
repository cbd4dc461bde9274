//! Navigation state machine
//!
//! Tracks the selected project tab, the selected row, and the scrolling
//! viewport over the current project's rule list. Every transition is total:
//! out-of-range inputs clamp, they never fail. The viewport slides by the
//! minimum amount needed to keep the selection visible, so the selected row
//! becomes the top or bottom visible line and never overshoots.

/// Selection and viewport state for the rule list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    selected_project: usize,
    selected_row: usize,
    viewport_start: usize,
    viewport_height: usize,
}

impl NavState {
    /// Create navigation state with the given viewport height
    pub fn new(viewport_height: usize) -> Self {
        Self {
            selected_project: 0,
            selected_row: 0,
            viewport_start: 0,
            viewport_height,
        }
    }

    /// Index of the selected project tab
    pub fn selected_project(&self) -> usize {
        self.selected_project
    }

    /// Index of the selected row within the current project
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// First visible row index
    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Number of visible rows
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Move the selection one row up
    pub fn move_up(&mut self, row_count: usize) {
        self.select(self.selected_row.saturating_sub(1), row_count);
    }

    /// Move the selection one row down
    pub fn move_down(&mut self, row_count: usize) {
        self.select(self.selected_row.saturating_add(1), row_count);
    }

    /// Wheel scroll up; shares the clamping logic with `move_up`
    pub fn scroll_up(&mut self, row_count: usize) {
        self.move_up(row_count);
    }

    /// Wheel scroll down; shares the clamping logic with `move_down`
    pub fn scroll_down(&mut self, row_count: usize) {
        self.move_down(row_count);
    }

    /// Switch to the next project tab; selection returns to the top
    pub fn next_project(&mut self, project_count: usize) {
        let count = project_count.max(1);
        self.selected_project = (self.selected_project + 1) % count;
        self.reset_rows();
    }

    /// Switch to the previous project tab; selection returns to the top
    pub fn prev_project(&mut self, project_count: usize) {
        let count = project_count.max(1);
        self.selected_project = (self.selected_project + count - 1) % count;
        self.reset_rows();
    }

    /// Re-clamp after an external row-count change
    pub fn clamp_rows(&mut self, row_count: usize) {
        self.select(self.selected_row, row_count);
    }

    /// Adopt a new viewport height and re-derive the window
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.ensure_visible();
    }

    /// The visible slice of a list with `row_count` rows
    pub fn visible_range(&self, row_count: usize) -> std::ops::Range<usize> {
        let end = row_count.min(self.viewport_start + self.viewport_height);
        let start = self.viewport_start.min(end);
        start..end
    }

    fn select(&mut self, row: usize, row_count: usize) {
        self.selected_row = if row_count == 0 {
            0
        } else {
            row.min(row_count - 1)
        };
        self.ensure_visible();
    }

    fn reset_rows(&mut self) {
        self.selected_row = 0;
        self.viewport_start = 0;
    }

    fn ensure_visible(&mut self) {
        if self.viewport_height == 0 {
            self.viewport_start = self.selected_row;
            return;
        }
        if self.selected_row < self.viewport_start {
            // Selection moved above the window: it becomes the top line
            self.viewport_start = self.selected_row;
        } else if self.selected_row >= self.viewport_start + self.viewport_height {
            // Selection moved below: it becomes the bottom line
            self.viewport_start = self.selected_row + 1 - self.viewport_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_clamps_at_last_row() {
        let mut nav = NavState::new(10);
        for _ in 0..20 {
            nav.move_down(5);
        }
        assert_eq!(nav.selected_row(), 4);
    }

    #[test]
    fn test_up_clamps_at_zero() {
        let mut nav = NavState::new(10);
        nav.move_up(5);
        assert_eq!(nav.selected_row(), 0);
        assert_eq!(nav.viewport_start(), 0);
    }

    #[test]
    fn test_viewport_slides_down_minimally() {
        // Height 20, 30 rows: moving from row 19 to 20 slides the window to 1
        let mut nav = NavState::new(20);
        for _ in 0..19 {
            nav.move_down(30);
        }
        assert_eq!(nav.selected_row(), 19);
        assert_eq!(nav.viewport_start(), 0);

        nav.move_down(30);
        assert_eq!(nav.selected_row(), 20);
        assert_eq!(nav.viewport_start(), 1);
        assert_eq!(nav.visible_range(30), 1..21);
    }

    #[test]
    fn test_viewport_slides_up_minimally() {
        let mut nav = NavState::new(5);
        for _ in 0..9 {
            nav.move_down(10);
        }
        assert_eq!(nav.viewport_start(), 5);

        // Walk back above the window: the selection becomes the top line
        for _ in 0..5 {
            nav.move_up(10);
        }
        assert_eq!(nav.selected_row(), 4);
        assert_eq!(nav.viewport_start(), 4);
    }

    #[test]
    fn test_project_switch_resets_rows() {
        let mut nav = NavState::new(5);
        for _ in 0..7 {
            nav.move_down(10);
        }

        nav.next_project(3);
        assert_eq!(nav.selected_project(), 1);
        assert_eq!(nav.selected_row(), 0);
        assert_eq!(nav.viewport_start(), 0);
    }

    #[test]
    fn test_project_cycling_is_modular() {
        let mut nav = NavState::new(5);
        nav.prev_project(3);
        assert_eq!(nav.selected_project(), 2);
        nav.next_project(3);
        assert_eq!(nav.selected_project(), 0);

        // Zero projects never divides by zero
        nav.next_project(0);
        assert_eq!(nav.selected_project(), 0);
    }

    #[test]
    fn test_clamp_after_row_count_shrink() {
        let mut nav = NavState::new(5);
        for _ in 0..9 {
            nav.move_down(10);
        }
        assert_eq!(nav.selected_row(), 9);

        nav.clamp_rows(3);
        assert_eq!(nav.selected_row(), 2);
        assert_eq!(nav.viewport_start(), 2);

        nav.clamp_rows(0);
        assert_eq!(nav.selected_row(), 0);
    }

    #[test]
    fn test_scroll_matches_cursor_semantics() {
        let mut cursor = NavState::new(4);
        let mut wheel = NavState::new(4);
        for _ in 0..6 {
            cursor.move_down(20);
            wheel.scroll_down(20);
        }
        assert_eq!(cursor, wheel);

        cursor.move_up(20);
        wheel.scroll_up(20);
        assert_eq!(cursor, wheel);
    }

    #[test]
    fn test_visible_range_with_short_list() {
        let nav = NavState::new(20);
        assert_eq!(nav.visible_range(3), 0..3);
        assert_eq!(nav.visible_range(0), 0..0);
    }
}
