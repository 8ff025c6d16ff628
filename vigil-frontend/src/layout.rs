use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub filterline: Rect,
    pub table: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(100),
                Constraint::Length(1),
            ])
            .split(rect);

        Self {
            filterline: main[0],
            table: main[1],
            statusline: main[2],
        }
    }
}

#[cfg(test)]
mod test {
    use ratatui::prelude::Rect;

    use super::AppLayout;

    #[test]
    fn layout_splits_terminal_size_into_rows() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));

        assert_eq!(Rect::new(0, 0, 120, 1), layout.filterline);
        assert_eq!(Rect::new(0, 1, 120, 38), layout.table);
        assert_eq!(Rect::new(0, 39, 120, 1), layout.statusline);
    }
}
