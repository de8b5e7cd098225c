//! The page background: a surface ion trap seen from above.
//!
//! Six rows of electrodes stacked top to bottom. The outer rows are split into segments, the inner
//! ones span the full width. Thin white lines mark the gaps between electrodes.
use maud::{Markup, Render, html};

/// Number of segments in a segmented row.
pub const SEGMENTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapRow {
    /// Height, in percent of the background.
    pub height: u8,
    pub segmented: bool,
}

/// Rows from top to bottom, symmetric around the middle.
pub static ROWS: [TrapRow; 6] = [
    TrapRow {
        height: 25,
        segmented: true,
    },
    TrapRow {
        height: 15,
        segmented: false,
    },
    TrapRow {
        height: 10,
        segmented: false,
    },
    TrapRow {
        height: 10,
        segmented: false,
    },
    TrapRow {
        height: 15,
        segmented: false,
    },
    TrapRow {
        height: 25,
        segmented: true,
    },
];

/// A rectangle positioned in percent of the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: u8,
    pub left: u8,
    pub width: u8,
    pub height: u8,
}

impl Rect {
    fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; width: {}%; height: {}%",
            self.top, self.left, self.width, self.height
        )
    }
}

/// Rows with the offset of their top edge.
fn placed_rows() -> impl Iterator<Item = (u8, TrapRow)> {
    ROWS.iter().scan(0, |top, row| {
        let placed = (*top, *row);
        *top += row.height;
        Some(placed)
    })
}

/// Electrode surfaces.
pub fn electrodes() -> Vec<Rect> {
    let segment_width = 100 / SEGMENTS;

    placed_rows()
        .flat_map(|(top, row)| {
            let segments = if row.segmented { SEGMENTS } else { 1 };
            let width = if row.segmented { segment_width } else { 100 };

            (0..segments).map(move |i| Rect {
                top,
                left: i * width,
                width,
                height: row.height,
            })
        })
        .collect()
}

/// Offsets of the horizontal gaps, one at the top edge of every row.
pub fn horizontal_gaps() -> Vec<u8> {
    placed_rows().map(|(top, _)| top).collect()
}

/// Vertical gaps between the segments of segmented rows, as `(top, left, height)`.
pub fn vertical_gaps() -> Vec<(u8, u8, u8)> {
    let segment_width = 100 / SEGMENTS;

    placed_rows()
        .filter(|(_, row)| row.segmented)
        .flat_map(|(top, row)| (1..SEGMENTS).map(move |i| (top, i * segment_width, row.height)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrapBackground {
    /// CSS color laid over the electrodes.
    pub tint: Option<&'static str>,
}

impl TrapBackground {
    pub fn tinted(tint: &'static str) -> Self {
        Self { tint: Some(tint) }
    }
}

impl Render for TrapBackground {
    fn render(&self) -> Markup {
        html! {
            div.trap-background aria-hidden="true" {
                @for rect in electrodes() {
                    div.electrode-surface style=(rect.style()) {}
                }
                @for top in horizontal_gaps() {
                    div.gap-horizontal style=(format!("top: {top}%")) {}
                }
                @for (top, left, height) in vertical_gaps() {
                    div.gap-vertical style=(format!("top: {top}%; left: {left}%; height: {height}%")) {}
                }
                @if let Some(tint) = self.tint {
                    div.trap-tint style=(format!("background: {tint}")) {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_tile_the_full_height() {
        assert_eq!(ROWS.iter().map(|row| row.height as u32).sum::<u32>(), 100);

        let heights: Vec<u8> = ROWS.iter().map(|row| row.height).collect();
        let mut mirrored = heights.clone();
        mirrored.reverse();
        assert_eq!(heights, mirrored);
    }

    #[test]
    fn test_segmented_rows_split_into_five() {
        let electrodes = electrodes();
        assert_eq!(electrodes.len(), 5 + 1 + 1 + 1 + 1 + 5);

        let first_row: Vec<&Rect> = electrodes.iter().filter(|r| r.top == 0).collect();
        assert_eq!(first_row.len(), 5);
        assert!(first_row.iter().all(|r| r.width == 20 && r.height == 25));
        assert_eq!(
            first_row.iter().map(|r| r.left).collect::<Vec<_>>(),
            vec![0, 20, 40, 60, 80]
        );

        let last_row = electrodes.iter().filter(|r| r.top == 75).count();
        assert_eq!(last_row, 5);
    }

    #[test]
    fn test_every_row_spans_the_full_width() {
        for (top, _) in placed_rows() {
            let width: u32 = electrodes()
                .iter()
                .filter(|r| r.top == top)
                .map(|r| r.width as u32)
                .sum();
            assert_eq!(width, 100, "row at {top}%");
        }
    }

    #[test]
    fn test_gaps() {
        assert_eq!(horizontal_gaps(), vec![0, 25, 40, 50, 60, 75]);

        let vertical = vertical_gaps();
        assert_eq!(vertical.len(), 8);
        assert!(vertical.contains(&(0, 20, 25)));
        assert!(vertical.contains(&(75, 80, 25)));
    }

    #[test]
    fn test_tint_is_only_rendered_when_set() {
        let plain = TrapBackground::default().render().into_string();
        assert!(!plain.contains("trap-tint"));

        let tinted = TrapBackground::tinted("rgba(100, 0, 255, 0.03)")
            .render()
            .into_string();
        assert!(tinted.contains("background: rgba(100, 0, 255, 0.03)"));
    }
}
