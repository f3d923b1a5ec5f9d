//! Dropdown sizing and placement.
//!
//! Text measurement is supplied by the caller through [`TextMeasure`], so
//! sizing stays a pure computation over the rows; any closure of the form
//! `Fn(&str) -> f32` can serve as the measurer.

use crate::widget::RowView;

/// Extra height added to the content so the border never clips the last row.
const BORDER_ALLOWANCE: f32 = 2.0;

/// Measures the rendered width of a label.
pub trait TextMeasure {
    /// Width of `text` in pixels, without any row padding.
    fn text_width(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn text_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Box metrics shared by every row of the dropdown list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Height of one row.
    pub row_height: f32,
    /// Left plus right padding, border and margin of a row, before indent.
    pub horizontal_insets: f32,
    /// Width taken by a vertical scrollbar when one is shown.
    pub scrollbar_width: f32,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            horizontal_insets: 8.0,
            scrollbar_width: 17.0,
        }
    }
}

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }
}

/// Computed dropdown size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownGeometry {
    /// Width including the scrollbar, when one is needed.
    pub width: f32,
    /// Visible height, capped by the maximum drop height.
    pub height: f32,
    /// Whether the content overflows and scrolls vertically.
    pub scrolls: bool,
}

/// Where the dropdown opens relative to the closed control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Below,
    Above,
}

/// Size the dropdown for `rows`.
///
/// The width fits the widest indented label; the height fits all rows up to
/// `max_drop_height`, beyond which the list scrolls and the scrollbar width
/// is added.
pub fn dropdown_geometry(
    rows: &[RowView],
    measure: &impl TextMeasure,
    metrics: &RowMetrics,
    max_drop_height: f32,
) -> DropdownGeometry {
    let content_width = rows
        .iter()
        .map(|row| measure.text_width(&row.label) + row.indent + metrics.horizontal_insets)
        .fold(0.0_f32, f32::max);
    let content_height = rows.len() as f32 * metrics.row_height + BORDER_ALLOWANCE;

    let scrolls = content_height > max_drop_height;
    let width = if scrolls {
        content_width + metrics.scrollbar_width
    } else {
        content_width
    };

    DropdownGeometry {
        width,
        height: content_height.min(max_drop_height),
        scrolls,
    }
}

/// Decide where a dropdown of `dropdown_height` opens next to `anchor`.
///
/// Returns the placement and the dropdown's top-left corner. The dropdown
/// opens below the anchor when it fits inside the viewport, otherwise above
/// it; left edges are aligned either way.
pub fn place_dropdown(anchor: Rect, dropdown_height: f32, viewport_height: f32) -> (Placement, f32, f32) {
    if anchor.bottom() + dropdown_height < viewport_height {
        (Placement::Below, anchor.left(), anchor.bottom())
    } else {
        (Placement::Above, anchor.left(), anchor.top() - dropdown_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_checklist_core::{CheckState, NodePath, NodeRole};

    fn row(label: &str, depth: usize) -> RowView {
        RowView {
            path: NodePath::from(vec![1; depth + 1]),
            label: label.to_string(),
            role: NodeRole::Item,
            state: CheckState::Checked,
            depth,
            indent: depth as f32 * 15.0,
        }
    }

    fn char_width(text: &str) -> f32 {
        text.chars().count() as f32 * 7.0
    }

    #[test]
    fn test_geometry_without_scrolling() {
        let rows = [row("Fruit", 0), row("Banana", 1)];
        let metrics = RowMetrics::default();
        let geometry = dropdown_geometry(&rows, &char_width, &metrics, 200.0);

        // "Banana" at depth 1: 42 + 15 + 8
        assert_eq!(geometry.width, 65.0);
        assert_eq!(geometry.height, 42.0);
        assert!(!geometry.scrolls);
    }

    #[test]
    fn test_geometry_with_scrolling() {
        let rows: Vec<_> = (0..20).map(|_| row("Item", 0)).collect();
        let metrics = RowMetrics::default();
        let geometry = dropdown_geometry(&rows, &char_width, &metrics, 200.0);

        assert!(geometry.scrolls);
        assert_eq!(geometry.height, 200.0);
        assert_eq!(geometry.width, 28.0 + 8.0 + 17.0);
    }

    #[test]
    fn test_geometry_with_closure_measurer() {
        let fixed = |_: &str| 50.0_f32;
        let geometry = dropdown_geometry(&[row("x", 2)], &fixed, &RowMetrics::default(), 200.0);
        assert_eq!(geometry.width, 50.0 + 30.0 + 8.0);
    }

    #[test]
    fn test_placement() {
        let anchor = Rect::new(10.0, 100.0, 120.0, 24.0);

        let (placement, x, y) = place_dropdown(anchor, 150.0, 600.0);
        assert_eq!(placement, Placement::Below);
        assert_eq!((x, y), (10.0, 124.0));

        let (placement, x, y) = place_dropdown(anchor, 150.0, 250.0);
        assert_eq!(placement, Placement::Above);
        assert_eq!((x, y), (10.0, -50.0));
    }
}
