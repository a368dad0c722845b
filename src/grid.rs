//! Grid geometry: cell identity, spans, placement strings and re-flow on resize

use tracing::debug;

use crate::constants::grid::{CELL_ID_PREFIX, DEFAULT_Z_INDEX, SPANNING_Z_INDEX};
use crate::types::GridItem;

/// Lattice id of the cell at (row, col), both 1-based
pub fn cell_id(row: u32, col: u32) -> String {
    format!("{CELL_ID_PREFIX}{row}-{col}")
}

/// CSS grid placement for a rectangle anchored at (col, row)
pub fn cell_style(col: u32, row: u32, col_span: u32, row_span: u32) -> String {
    let z_index = if col_span > 1 || row_span > 1 {
        SPANNING_Z_INDEX
    } else {
        DEFAULT_Z_INDEX
    };
    format!(
        "grid-column: {} / {}; grid-row: {} / {}; z-index: {};",
        col,
        col + col_span,
        row,
        row + row_span,
        z_index
    )
}

/// `cols * rows` empty items in row-major order
pub fn empty_lattice(cols: u32, rows: u32) -> Vec<GridItem> {
    let mut items = Vec::with_capacity((cols as usize).saturating_mul(rows as usize));
    for row in 1..=rows {
        for col in 1..=cols {
            items.push(GridItem::empty(cell_id(row, col), col, row));
        }
    }
    items
}

/// Clamp a span so that `origin + span - 1` stays within `limit`
pub fn clamp_span(origin: u32, requested: u32, limit: u32) -> u32 {
    let max = (limit + 1).saturating_sub(origin).max(1);
    requested.clamp(1, max)
}

/// Re-flow items onto a fresh `new_cols × new_rows` lattice.
///
/// Filled items whose origin still fits keep their content, with spans clamped
/// to the new bounds; they take the lattice id at their origin. Filled items
/// whose origin falls outside are dropped. Empty items are always regenerated.
pub fn update_grid_dimensions(items: &[GridItem], new_cols: u32, new_rows: u32) -> Vec<GridItem> {
    let mut lattice = empty_lattice(new_cols, new_rows);

    for item in items.iter().filter(|item| !item.is_empty) {
        let (col, row) = (item.grid_column, item.grid_row);
        if col < 1 || row < 1 || col > new_cols || row > new_rows {
            debug!(item = %item.id, col = col, row = row, "Dropping item outside resized grid");
            continue;
        }

        let Some(slot) = lattice
            .iter_mut()
            .find(|slot| slot.grid_column == col && slot.grid_row == row)
        else {
            continue;
        };

        let id = std::mem::take(&mut slot.id);
        *slot = item.clone();
        slot.id = id;
        slot.col_span = clamp_span(col, item.col_span, new_cols);
        slot.row_span = clamp_span(row, item.row_span, new_rows);
        slot.style = cell_style(col, row, slot.col_span, slot.row_span);
    }

    lattice
}

/// Placement value for exported CSS: `{origin}` or `{origin} / span {n}`
pub fn placement(origin: u32, span: u32) -> String {
    if span > 1 {
        format!("{origin} / span {span}")
    } else {
        origin.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled(col: u32, row: u32, col_span: u32, row_span: u32, content: &str) -> GridItem {
        let mut item = GridItem::empty(cell_id(row, col), col, row);
        item.is_empty = false;
        item.content = content.to_string();
        item.col_span = col_span;
        item.row_span = row_span;
        item.draggable = true;
        item.style = cell_style(col, row, col_span, row_span);
        item
    }

    #[test]
    fn test_cell_style_single_and_spanning() {
        assert_eq!(
            cell_style(2, 1, 1, 1),
            "grid-column: 2 / 3; grid-row: 1 / 2; z-index: 1;"
        );
        assert_eq!(
            cell_style(1, 2, 2, 1),
            "grid-column: 1 / 3; grid-row: 2 / 3; z-index: 10;"
        );
    }

    #[test]
    fn test_empty_lattice_desktop() {
        let items = empty_lattice(4, 3);
        assert_eq!(items.len(), 12);
        assert_eq!(items[0].id, "cell-1-1");
        assert_eq!(items[3].id, "cell-1-4");
        assert_eq!(items[11].id, "cell-3-4");
        assert!(items.iter().all(|item| item.is_empty));
    }

    #[test]
    fn test_shrink_drops_items_outside() {
        let mut items = empty_lattice(4, 3);
        items[0] = filled(1, 1, 1, 1, "Home");
        items[2] = filled(3, 1, 1, 1, "Contact");

        let result = update_grid_dimensions(&items, 2, 2);
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|item| item.content != "Contact"));

        let home = result.iter().find(|item| item.content == "Home").unwrap();
        assert_eq!(home.col_span, 1);
        assert_eq!(home.id, "cell-1-1");
    }

    #[test]
    fn test_shrink_clamps_spans() {
        let mut items = empty_lattice(4, 3);
        items[1] = filled(2, 1, 3, 3, "Wide");

        let result = update_grid_dimensions(&items, 3, 2);
        let wide = result.iter().find(|item| item.content == "Wide").unwrap();
        assert_eq!((wide.col_span, wide.row_span), (2, 2));
        assert_eq!(wide.style, "grid-column: 2 / 4; grid-row: 1 / 3; z-index: 10;");
    }

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(3, 5, 4), 2);
        assert_eq!(clamp_span(1, 0, 4), 1);
        assert_eq!(clamp_span(4, 1, 4), 1);
        assert_eq!(clamp_span(6, 2, 4), 1);
    }

    #[test]
    fn test_placement() {
        assert_eq!(placement(2, 1), "2");
        assert_eq!(placement(2, 3), "2 / span 3");
    }

    proptest! {
        #[test]
        fn test_update_grid_dimensions_idempotent(
            cols in 1u32..6,
            rows in 1u32..6,
            new_cols in 1u32..6,
            new_rows in 1u32..6,
            fills in proptest::collection::vec((1u32..6, 1u32..6, 1u32..4, 1u32..4), 0..5),
        ) {
            let mut items = empty_lattice(cols, rows);
            for (col, row, cs, rs) in fills {
                if let Some(slot) = items.iter_mut().find(|i| i.grid_column == col && i.grid_row == row) {
                    let mut item = filled(col, row, cs, rs, "x");
                    item.id = slot.id.clone();
                    *slot = item;
                }
            }

            let once = update_grid_dimensions(&items, new_cols, new_rows);
            let twice = update_grid_dimensions(&once, new_cols, new_rows);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.len() as u32, new_cols * new_rows);
            for item in &once {
                prop_assert!(item.fits(new_cols, new_rows));
                if item.is_empty {
                    prop_assert_eq!(item.col_span, 1);
                    prop_assert_eq!(item.row_span, 1);
                    prop_assert!(!item.draggable);
                    prop_assert_eq!(item.content.as_str(), "");
                }
            }
        }
    }
}
