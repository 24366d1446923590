//! Property-based tests for board invariants
//!
//! Random sequences of commands and gesture events must never leave an item in
//! two lists, lose one, or let its owner field drift from the list holding it.

use proptest::prelude::*;
use std::collections::HashSet;
use taskboard::{DragGeometry, Rect, TaskBoard};

const LISTS: &[&str] = &["todo", "inProgress", "done", "ghost"];

#[derive(Debug, Clone)]
enum Step {
    Add { list: usize },
    Remove { list: usize, pick: usize },
    Start { pick: usize },
    Over { target: usize, on_list: bool, below: bool },
    Leave,
    End { target: usize, on_list: bool, released: bool },
    Cancel,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..LISTS.len()).prop_map(|list| Step::Add { list }),
        (0..LISTS.len(), any::<usize>()).prop_map(|(list, pick)| Step::Remove { list, pick }),
        any::<usize>().prop_map(|pick| Step::Start { pick }),
        (any::<usize>(), any::<bool>(), any::<bool>())
            .prop_map(|(target, on_list, below)| Step::Over { target, on_list, below }),
        Just(Step::Leave),
        (any::<usize>(), any::<bool>(), any::<bool>())
            .prop_map(|(target, on_list, released)| Step::End { target, on_list, released }),
        Just(Step::Cancel),
    ]
}

/// All item ids, in board order
fn all_items(board: &TaskBoard) -> Vec<String> {
    board
        .snapshot()
        .lists
        .iter()
        .flat_map(|list| list.items.iter().map(|item| item.id.to_string()))
        .collect()
}

/// Pick an item id or a list id from the current board
fn target_id(board: &TaskBoard, target: usize, on_list: bool) -> Option<String> {
    if on_list {
        return Some(LISTS[target % LISTS.len()].to_string());
    }
    let items = all_items(board);
    (!items.is_empty()).then(|| items[target % items.len()].clone())
}

fn run(board: &mut TaskBoard, step: &Step) {
    match step {
        Step::Add { list } => {
            let _ = board.add_item(LISTS[*list], "card");
        }
        Step::Remove { list, pick } => {
            let items = all_items(board);
            if !items.is_empty() {
                let _ = board.remove_item(LISTS[*list], &items[pick % items.len()]);
            }
        }
        Step::Start { pick } => {
            let items = all_items(board);
            if !items.is_empty() {
                board.on_drag_start(&items[pick % items.len()]);
            }
        }
        Step::Over { target, on_list, below } => {
            let Some(active) = board.drag_session().map(|s| s.item.to_string()) else {
                return;
            };
            let over = target_id(board, *target, *on_list);
            let top = if *below { 500.0 } else { 5.0 };
            let geometry = DragGeometry::new(Rect::new(0.0, 40.0), top);
            board.on_drag_over(&active, over.as_deref(), &geometry);
        }
        Step::Leave => {
            if let Some(active) = board.drag_session().map(|s| s.item.to_string()) {
                board.on_drag_over(&active, None, &DragGeometry::default());
            }
        }
        Step::End { target, on_list, released } => {
            let Some(active) = board.drag_session().map(|s| s.item.to_string()) else {
                return;
            };
            let over = if *released {
                None
            } else {
                target_id(board, *target, *on_list)
            };
            board.on_drag_end(&active, over.as_deref());
        }
        Step::Cancel => {
            board.on_drag_cancel();
        }
    }
}

proptest! {
    /// Property: every item lives in exactly one list and knows which one
    #[test]
    fn prop_partition_and_owner_hold(steps in prop::collection::vec(step(), 0..60)) {
        let mut board = TaskBoard::demo().unwrap();
        for step in &steps {
            run(&mut board, step);
            prop_assert!(board.store().verify().is_ok(), "invariant broken after {:?}", step);
        }

        let ids = all_items(&board);
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(board.store().item_count(), ids.len());
    }

    /// Property: drags only move items, they never create or destroy them
    #[test]
    fn prop_drags_preserve_item_set(steps in prop::collection::vec(step(), 0..60)) {
        let mut board = TaskBoard::demo().unwrap();
        let mut expected: HashSet<String> = all_items(&board).into_iter().collect();

        for step in &steps {
            let before: HashSet<String> = all_items(&board).into_iter().collect();
            run(&mut board, step);
            let after: HashSet<String> = all_items(&board).into_iter().collect();

            match step {
                Step::Add { .. } | Step::Remove { .. } => expected = after,
                _ => {
                    prop_assert_eq!(&before, &after);
                    prop_assert_eq!(&after, &expected);
                }
            }
        }
    }
}
