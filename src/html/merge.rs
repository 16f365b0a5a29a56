//! Vertical merge resolution.
//!
//! Word stores a vertical merge as one `restart` cell followed, in the same
//! column of the next rows, by `continue` cells. HTML wants a single cell with
//! a `rowspan`. [`MergePlan::resolve`] walks the table once, top to bottom,
//! keeping one small state machine per column, and records for every anchor
//! how many rows it covers and which continuation cells lie beneath it.
//!
//! Columns are positional: the j-th cell of a row is column j. A row that is
//! too short to have a cell in column j ends any merge running there.
use std::collections::HashMap;

use smallvec::SmallVec;

use crate::document::{Table, VMergeState};

/// A resolved vertical merge, keyed by its anchor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSpan {
    /// Number of rows covered, anchor included
    pub row_span: usize,
    /// Row indices of the continuation cells, top to bottom
    pub continuations: SmallVec<[usize; 4]>,
}

impl MergeSpan {
    fn new() -> Self {
        Self {
            row_span: 1,
            continuations: SmallVec::new(),
        }
    }
}

#[derive(Debug)]
enum ColumnState {
    Idle,
    InSpan { anchor_row: usize, span: MergeSpan },
}

/// Merge spans of a whole table.
#[derive(Debug, Default)]
pub struct MergePlan {
    spans: HashMap<(usize, usize), MergeSpan>,
    orphans: usize,
}

impl MergePlan {
    /// Resolve every vertical merge of `table`.
    pub fn resolve(table: &Table) -> Self {
        let mut plan = MergePlan::default();
        let mut columns: Vec<ColumnState> = Vec::new();

        for (row_idx, row) in table.rows().iter().enumerate() {
            if columns.len() < row.cell_count() {
                columns.resize_with(row.cell_count(), || ColumnState::Idle);
            }

            for (col, state) in columns.iter_mut().enumerate() {
                let merge = row.cell(col).and_then(|cell| cell.v_merge());
                match (merge, state) {
                    (Some(VMergeState::Continue), ColumnState::InSpan { span, .. }) => {
                        span.row_span += 1;
                        span.continuations.push(row_idx);
                    },
                    (Some(VMergeState::Continue), ColumnState::Idle) => {
                        log::warn!(
                            "Continuation cell at row {}, column {} has no merge anchor above it",
                            row_idx,
                            col
                        );
                        plan.orphans += 1;
                    },
                    (merge, state) => {
                        plan.close(state, col);
                        if merge == Some(VMergeState::Restart) {
                            *state = ColumnState::InSpan {
                                anchor_row: row_idx,
                                span: MergeSpan::new(),
                            };
                        }
                    },
                }
            }
        }

        for (col, state) in columns.iter_mut().enumerate() {
            plan.close(state, col);
        }

        plan
    }

    fn close(&mut self, state: &mut ColumnState, col: usize) {
        if let ColumnState::InSpan { anchor_row, span } =
            std::mem::replace(state, ColumnState::Idle)
        {
            log::trace!(
                "Vertical merge at row {}, column {} spans {} rows",
                anchor_row,
                col,
                span.row_span
            );
            self.spans.insert((anchor_row, col), span);
        }
    }

    /// Merge anchored at (`row`, `col`), if that cell starts one.
    #[inline]
    pub fn span_at(&self, row: usize, col: usize) -> Option<&MergeSpan> {
        self.spans.get(&(row, col))
    }

    /// Rows covered by the cell at (`row`, `col`); 1 for unmerged cells.
    #[inline]
    pub fn row_span(&self, row: usize, col: usize) -> usize {
        self.span_at(row, col).map_or(1, |span| span.row_span)
    }

    /// Number of merge anchors, including ones with nothing below them.
    #[inline]
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of continuation cells with no anchor above them.
    #[inline]
    pub fn orphan_count(&self) -> usize {
        self.orphans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a table from a grid of merge states. Ragged rows are shorter
    /// vectors.
    fn table_from(grid: &[Vec<Option<VMergeState>>]) -> Table {
        let mut table = Table::default();
        for states in grid {
            let row = table.add_row(states.len());
            for (col, state) in states.iter().enumerate() {
                if let Some(cell) = row.cell_mut(col) {
                    cell.set_v_merge(*state);
                }
            }
        }
        table
    }

    const R: Option<VMergeState> = Some(VMergeState::Restart);
    const C: Option<VMergeState> = Some(VMergeState::Continue);
    const N: Option<VMergeState> = None;

    #[test]
    fn test_start_two_continues_then_none() {
        let table = table_from(&[vec![R, N], vec![C, N], vec![C, N], vec![N, N]]);
        let plan = MergePlan::resolve(&table);

        assert_eq!(plan.row_span(0, 0), 3);
        assert_eq!(plan.span_at(0, 0).unwrap().continuations.as_slice(), &[1, 2]);
        assert_eq!(plan.row_span(3, 0), 1);
        assert!(plan.span_at(3, 0).is_none());
        assert_eq!(plan.span_count(), 1);
        assert_eq!(plan.orphan_count(), 0);
    }

    #[test]
    fn test_restart_closes_previous_span() {
        let table = table_from(&[vec![R], vec![C], vec![R], vec![C], vec![C]]);
        let plan = MergePlan::resolve(&table);

        assert_eq!(plan.row_span(0, 0), 2);
        assert_eq!(plan.row_span(2, 0), 3);
    }

    #[test]
    fn test_short_row_terminates_span() {
        let table = table_from(&[vec![N, R], vec![N], vec![N, C]]);
        let plan = MergePlan::resolve(&table);

        assert_eq!(plan.row_span(0, 1), 1);
        assert_eq!(plan.orphan_count(), 1);
    }

    #[test]
    fn test_orphan_continuation_is_counted() {
        let table = table_from(&[vec![C, N], vec![C, R], vec![N, C]]);
        let plan = MergePlan::resolve(&table);

        assert_eq!(plan.orphan_count(), 2);
        assert_eq!(plan.row_span(1, 1), 2);
        assert!(plan.span_at(0, 0).is_none());
    }

    #[test]
    fn test_span_reaching_last_row() {
        let table = table_from(&[vec![N, R], vec![N, C]]);
        let plan = MergePlan::resolve(&table);
        assert_eq!(plan.row_span(0, 1), 2);
    }

    #[test]
    fn test_lone_restart() {
        let table = table_from(&[vec![R], vec![N]]);
        let plan = MergePlan::resolve(&table);
        assert_eq!(plan.row_span(0, 0), 1);
        assert_eq!(plan.span_count(), 1);
    }

    /// Row span computed by walking down from the anchor.
    fn walk_down(grid: &[Vec<Option<VMergeState>>], row: usize, col: usize) -> usize {
        let mut span = 1;
        for states in &grid[row + 1..] {
            match states.get(col) {
                Some(&C) => span += 1,
                _ => break,
            }
        }
        span
    }

    fn state_strategy() -> impl Strategy<Value = Option<VMergeState>> {
        prop_oneof![Just(R), Just(C), Just(N)]
    }

    proptest! {
        #[test]
        fn prop_matches_forward_walk(
            grid in prop::collection::vec(prop::collection::vec(state_strategy(), 0..5), 0..8)
        ) {
            let table = table_from(&grid);
            let plan = MergePlan::resolve(&table);

            for (row, states) in grid.iter().enumerate() {
                for (col, state) in states.iter().enumerate() {
                    if *state == R {
                        prop_assert_eq!(plan.row_span(row, col), walk_down(&grid, row, col));
                    } else {
                        prop_assert!(plan.span_at(row, col).is_none());
                    }
                }
            }
        }
    }
}
