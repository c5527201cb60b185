//! Justified row packing
//!
//! Tiles are appended to the current row at the target row height. Once the
//! row would reach the container width, it is closed and rescaled so its
//! tiles exactly fill the width. If leaving the overflowing tile for the next
//! row gives a height closer to the target (and within the maximum), the row
//! is closed without it instead. The trailing row is left at the target
//! height rather than stretched.

use super::display_list::{GridLayout, TileBox};
use super::geometry::DisplaySize;
use crate::config::GridConfig;

/// Compute the justified layout for tiles of the given display sizes
pub fn compute_layout(sizes: &[DisplaySize], container_width: f64, config: &GridConfig) -> GridLayout {
    let mut layout = GridLayout {
        boxes: Vec::with_capacity(sizes.len()),
        width: container_width,
        height: 0.0,
    };

    if sizes.is_empty() {
        return layout;
    }

    // Hidden or unmeasured container: a single unjustified row
    if container_width <= 0.0 {
        place_row(&mut layout.boxes, sizes, 0, sizes.len(), config.row_height, 0.0, 0, config.margin);
        layout.height = config.row_height;
        return layout;
    }

    let margin = config.margin;
    let target = config.row_height;
    let mut top = 0.0;
    let mut row = 0;
    let mut row_start = 0;
    let mut aspect_sum = 0.0;
    let mut i = 0;

    while i < sizes.len() {
        let with_sum = aspect_sum + sizes[i].aspect();
        let count_with = i - row_start + 1;
        let width_at_target = with_sum * target + gaps(margin, count_with);

        if width_at_target < container_width {
            aspect_sum = with_sum;
            i += 1;
            continue;
        }

        let with_height = fill_height(container_width, margin, count_with, with_sum);

        let count_without = count_with - 1;
        if count_without > 0 {
            let without_height = fill_height(container_width, margin, count_without, aspect_sum);
            if without_height <= config.max_row_height
                && (without_height - target) < (target - with_height)
            {
                place_row(&mut layout.boxes, sizes, row_start, i, without_height, top, row, margin);
                top += without_height + margin;
                row += 1;
                row_start = i;
                aspect_sum = 0.0;
                continue;
            }
        }

        let height = with_height.min(config.max_row_height);
        place_row(&mut layout.boxes, sizes, row_start, i + 1, height, top, row, margin);
        top += height + margin;
        row += 1;
        row_start = i + 1;
        aspect_sum = 0.0;
        i += 1;
    }

    if row_start < sizes.len() {
        place_row(&mut layout.boxes, sizes, row_start, sizes.len(), target, top, row, margin);
        top += target;
    } else {
        top -= margin;
    }

    layout.height = top;
    layout
}

fn gaps(margin: f64, count: usize) -> f64 {
    margin * count.saturating_sub(1) as f64
}

/// Row height at which `count` tiles with the given aspect sum fill the width
fn fill_height(container_width: f64, margin: f64, count: usize, aspect_sum: f64) -> f64 {
    (container_width - gaps(margin, count)).max(0.0) / aspect_sum
}

#[allow(clippy::too_many_arguments)]
fn place_row(
    boxes: &mut Vec<TileBox>,
    sizes: &[DisplaySize],
    start: usize,
    end: usize,
    height: f64,
    top: f64,
    row: usize,
    margin: f64,
) {
    let mut left = 0.0;
    for (index, size) in sizes.iter().enumerate().take(end).skip(start) {
        let width = size.aspect() * height;
        boxes.push(TileBox { index, row, left, top, width, height });
        left += width + margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(aspects: &[f64]) -> Vec<DisplaySize> {
        aspects
            .iter()
            .map(|a| DisplaySize { width: a * 100.0, height: 100.0 })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let layout = compute_layout(&[], 1000.0, &GridConfig::default());
        assert!(layout.boxes.is_empty());
        assert_eq!(layout.height, 0.0);
    }

    #[test]
    fn test_full_row_fills_width_exactly() {
        let config = GridConfig::default();
        // Four 1:1 tiles at 250px need 1006px, so they close a row at 1000px.
        let layout = compute_layout(&sizes(&[1.0, 1.0, 1.0, 1.0]), 1000.0, &config);

        assert_eq!(layout.row_count(), 1);
        let last = layout.boxes.last().unwrap();
        assert!((last.left + last.width - 1000.0).abs() < 1e-6);
        assert!(last.height < config.row_height);
    }

    #[test]
    fn test_trailing_row_keeps_target_height() {
        let config = GridConfig::default();
        let layout = compute_layout(&sizes(&[1.0, 1.0, 1.0, 1.0, 1.5]), 1000.0, &config);

        assert_eq!(layout.row_count(), 2);
        let trailing: Vec<_> = layout.row(1).collect();
        assert_eq!(trailing.len(), 1);
        assert_eq!(trailing[0].height, 250.0);
        assert_eq!(trailing[0].top, layout.boxes[0].height + config.margin);
        assert_eq!(layout.height, trailing[0].top + 250.0);
    }

    #[test]
    fn test_overflowing_tile_moves_to_next_row_when_closer_to_target() {
        let config = GridConfig::default();
        // Three 1:1 tiles fill 1000px at ~332px; adding a wide 3:1 tile
        // would shrink the row far below 250px.
        let layout = compute_layout(&sizes(&[1.0, 1.0, 1.0, 3.0]), 1000.0, &config);

        let first: Vec<_> = layout.row(0).collect();
        assert_eq!(first.len(), 3);
        assert!(first[0].height > config.row_height);
        assert!(first[0].height <= config.max_row_height);
        assert_eq!(layout.boxes[3].row, 1);
    }

    #[test]
    fn test_rows_never_exceed_max_height() {
        let config = GridConfig::default();
        let layout = compute_layout(&sizes(&[0.5, 0.5, 4.0, 0.7, 2.0, 1.0, 1.0, 0.3]), 900.0, &config);
        assert!(layout.boxes.iter().all(|b| b.height <= config.max_row_height));
    }

    #[test]
    fn test_order_preserved() {
        let layout = compute_layout(&sizes(&[1.0, 2.0, 0.5, 1.5, 1.0, 1.0, 3.0]), 800.0, &GridConfig::default());
        let indices: Vec<usize> = layout.boxes.iter().map(|b| b.index).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_margin_between_tiles() {
        let config = GridConfig::default();
        let layout = compute_layout(&sizes(&[1.0, 1.0]), 2000.0, &config);
        let (a, b) = (layout.boxes[0], layout.boxes[1]);
        assert!((b.left - (a.left + a.width + config.margin)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_container_single_row() {
        let layout = compute_layout(&sizes(&[1.0, 2.0]), 0.0, &GridConfig::default());
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.height, 250.0);
    }
}
