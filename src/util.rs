use ratatui::layout::{Rect, Size};

/// Return a rectangle of (at most) the given size centered within `area`.
/// Odd leftover space puts the extra column/row after the rectangle.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 30, 8), Size::new(26, 4), Rect::new(2, 2, 26, 4))]
    #[case(Rect::new(0, 0, 30, 8), Size::new(27, 3), Rect::new(1, 2, 27, 3))]
    #[case(Rect::new(5, 7, 10, 10), Size::new(4, 4), Rect::new(8, 10, 4, 4))]
    #[case(Rect::new(5, 7, 10, 10), Size::new(20, 3), Rect::new(5, 10, 10, 3))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(0, 0), Rect::new(5, 5, 0, 0))]
    #[case(Rect::ZERO, Size::new(3, 3), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
