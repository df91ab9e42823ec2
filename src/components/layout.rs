//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one result card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Main screen areas, top to bottom
pub struct MainLayout {
    pub search: Rect,
    pub nav: Rect,
    pub status: Rect,
    pub body: Rect,
    pub hints: Rect,
}

/// Calculate centered popup area inside `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        search: chunks[0],
        nav: chunks[1],
        status: chunks[2],
        body: chunks[3],
        hints: chunks[4],
    }
}

/// Grid columns for a given width: one on narrow screens, up to three on wide ones
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=119 => 2,
        _ => 3,
    }
}

/// Rows of cards that fit into `height`
pub fn visible_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// Place `count` cards in a grid, starting at card row `first_row`
///
/// Returns `(card index, area)` for every card that fits.
pub fn card_rects(area: Rect, count: usize, columns: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let rows = visible_rows(area.height);
    if area.height < CARD_HEIGHT {
        return Vec::new();
    }

    let card_width = area.width / columns as u16;
    let mut rects = Vec::new();

    for row in 0..rows {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            if index >= count {
                return rects;
            }
            // Last column takes the remainder so the grid spans the full width
            let width = if col == columns - 1 {
                area.width - card_width * (columns as u16 - 1)
            } else {
                card_width
            };
            rects.push((
                index,
                Rect::new(
                    area.x + card_width * col as u16,
                    area.y + CARD_HEIGHT * row as u16,
                    width,
                    CARD_HEIGHT,
                ),
            ));
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(40, 1)]
    #[case(59, 1)]
    #[case(60, 2)]
    #[case(119, 2)]
    #[case(120, 3)]
    #[case(300, 3)]
    fn test_grid_columns(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(grid_columns(width), expected);
    }

    #[test]
    fn test_centered_popup_respects_origin() {
        let area = Rect::new(10, 5, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(40, 20, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_popup(area, 40, 10), area);
    }

    #[test]
    fn test_main_layout_heights() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.nav.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.body.height, 24);
    }

    #[test]
    fn test_card_rects_fill_rows() {
        let area = Rect::new(0, 0, 90, 12);
        let rects = card_rects(area, 5, 3, 0);
        let indices: Vec<usize> = rects.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(rects[3].1, Rect::new(0, CARD_HEIGHT, 30, CARD_HEIGHT));
    }

    #[test]
    fn test_card_rects_scrolled() {
        let area = Rect::new(0, 0, 50, 6);
        let rects = card_rects(area, 4, 1, 2);
        assert_eq!(rects, vec![(2, Rect::new(0, 0, 50, CARD_HEIGHT))]);
    }

    #[test]
    fn test_card_rects_last_column_takes_remainder() {
        let rects = card_rects(Rect::new(0, 0, 100, 6), 3, 3, 0);
        assert_eq!(rects[2].1.width, 34);
    }

    #[test]
    fn test_card_rects_too_short() {
        assert!(card_rects(Rect::new(0, 0, 80, 3), 3, 2, 0).is_empty());
    }
}
