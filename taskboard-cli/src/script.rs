//! Gesture scripts: recorded drag events interleaved with board commands.
//!
//! A script is a YAML or JSON array. Each step is either a gesture event
//! (`start`, `over`, `end`, `cancel`) or a command (`add_list`, `add_item`,
//! `remove_item`), distinguished by its `type` field:
//!
//! ```yaml
//! - type: add_item
//!   list: todo
//!   title: Write release notes
//! - type: start
//!   active: task-1
//! - type: over
//!   active: task-1
//!   over: done
//! - type: end
//!   active: task-1
//!   over: done
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taskboard::{ColorTag, DragOutcome, GestureEvent, Item, ListId, TaskBoard};
use tracing::{debug, info};

/// A board command issued outside of a drag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddList {
        id: ListId,
        title: String,
        #[serde(default, rename = "colorTag")]
        color: Option<ColorTag>,
    },
    AddItem {
        list: ListId,
        title: String,
    },
    RemoveItem {
        list: ListId,
        item: String,
    },
}

/// One script step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Gesture(GestureEvent),
    Command(Command),
}

impl Step {
    /// Short label for reports
    pub fn label(&self) -> String {
        match self {
            Step::Gesture(GestureEvent::Start { active }) => format!("start {active}"),
            Step::Gesture(GestureEvent::Over { active, over, .. }) => {
                format!("over {active} -> {}", over.as_deref().unwrap_or("-"))
            }
            Step::Gesture(GestureEvent::End { active, over }) => {
                format!("end {active} -> {}", over.as_deref().unwrap_or("-"))
            }
            Step::Gesture(GestureEvent::Cancel) => "cancel".to_string(),
            Step::Command(Command::AddList { id, .. }) => format!("add_list {id}"),
            Step::Command(Command::AddItem { list, title }) => format!("add_item {list} '{title}'"),
            Step::Command(Command::RemoveItem { list, item }) => format!("remove_item {list} {item}"),
        }
    }
}

/// What a step did to the board
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepResult {
    Drag(DragOutcome),
    ListAdded { list: ListId },
    ItemAdded { added: Item },
    ItemRemoved { removed: Option<Item> },
}

impl StepResult {
    /// Short label for reports
    pub fn summary(&self) -> String {
        match self {
            StepResult::Drag(outcome) => match outcome {
                DragOutcome::Started { item, list } => format!("started {item} from {list}"),
                DragOutcome::Previewed {
                    item,
                    from,
                    to,
                    index,
                } => format!("moved {item} {from} -> {to} at {index}"),
                DragOutcome::Held => "held".to_string(),
                DragOutcome::Reordered { list, from, to } => {
                    format!("reordered {list} {from} -> {to}")
                }
                DragOutcome::Dropped => "dropped".to_string(),
                DragOutcome::Cancelled => "cancelled".to_string(),
                DragOutcome::Abandoned { reason } => format!("abandoned: {reason}"),
                DragOutcome::Ignored => "ignored".to_string(),
            },
            StepResult::ListAdded { list } => format!("added list {list}"),
            StepResult::ItemAdded { added } => format!("added {}", added.id),
            StepResult::ItemRemoved { removed: Some(item) } => format!("removed {}", item.id),
            StepResult::ItemRemoved { removed: None } => "nothing removed".to_string(),
        }
    }
}

/// A step paired with its result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub label: String,
    pub result: StepResult,
    /// Whether the board layout differs from before the step
    pub changed: bool,
}

/// Parse a script, choosing JSON or YAML by file extension
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let steps: Vec<Step> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON script {}", path.display()))?
    } else {
        serde_yaml_ng::from_str(&content)
            .with_context(|| format!("invalid YAML script {}", path.display()))?
    };
    debug!(path = %path.display(), steps = steps.len(), "loaded script");
    Ok(steps)
}

/// Apply every step in order.
///
/// Drag events never fail; a failing command stops the replay.
pub fn replay(board: &mut TaskBoard, steps: &[Step]) -> Result<Vec<StepReport>> {
    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let number = index + 1;
        let before = board.snapshot();
        let result = apply(board, step).with_context(|| format!("step {number} ({})", step.label()))?;
        let changed = !board.snapshot().same_layout(&before);
        debug!(step = number, result = %result.summary(), changed, "replayed step");
        reports.push(StepReport {
            step: number,
            label: step.label(),
            result,
            changed,
        });
    }
    info!(steps = reports.len(), revision = board.store().revision(), "replay finished");
    Ok(reports)
}

fn apply(board: &mut TaskBoard, step: &Step) -> Result<StepResult> {
    let result = match step {
        Step::Gesture(event) => StepResult::Drag(board.dispatch(event)),
        Step::Command(Command::AddList { id, title, color }) => {
            let list = board.add_list(id.as_str(), title, color.clone())?;
            StepResult::ListAdded {
                list: list.id.clone(),
            }
        }
        Step::Command(Command::AddItem { list, title }) => StepResult::ItemAdded {
            added: board.add_item(list.as_str(), title)?,
        },
        Step::Command(Command::RemoveItem { list, item }) => StepResult::ItemRemoved {
            removed: board.remove_item(list.as_str(), item)?,
        },
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SCRIPT: &str = r#"
- type: add_list
  id: backlog
  title: Backlog
- type: add_item
  list: backlog
  title: "  Triage bugs  "
- type: start
  active: task-1
- type: over
  active: task-1
  over: backlog
- type: end
  active: task-1
  over: backlog
- type: remove_item
  list: done
  item: task-8
"#;

    #[test]
    fn test_steps_parse_both_kinds() {
        let steps: Vec<Step> = serde_yaml_ng::from_str(SCRIPT).unwrap();
        assert_eq!(steps.len(), 6);
        assert!(matches!(steps[0], Step::Command(Command::AddList { .. })));
        assert!(matches!(steps[2], Step::Gesture(GestureEvent::Start { .. })));
        assert_eq!(steps[3].label(), "over task-1 -> backlog");
    }

    #[test]
    fn test_replay_demo_board() {
        let steps: Vec<Step> = serde_yaml_ng::from_str(SCRIPT).unwrap();
        let mut board = TaskBoard::demo().unwrap();

        let reports = replay(&mut board, &steps).unwrap();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[3].result.summary(), "moved task-1 todo -> backlog at 1");
        assert_eq!(reports[4].result, StepResult::Drag(DragOutcome::Dropped));
        let changed: Vec<_> = reports.iter().map(|r| r.changed).collect();
        assert_eq!(changed, [true, true, false, true, false, true]);

        let snapshot = board.snapshot();
        let backlog = snapshot.list("backlog").unwrap();
        assert_eq!(backlog.items[0].title, "Triage bugs");
        assert_eq!(backlog.items[1].id, "task-1");
        assert_eq!(snapshot.item_ids("done"), ["task-7"]);
    }

    #[test]
    fn test_failing_command_names_the_step() {
        let steps: Vec<Step> =
            serde_yaml_ng::from_str("- type: add_item\n  list: nowhere\n  title: x\n").unwrap();
        let mut board = TaskBoard::demo().unwrap();

        let err = replay(&mut board, &steps).unwrap_err();
        assert!(format!("{err:#}").contains("step 1"));
        assert!(format!("{err:#}").contains("list not found: nowhere"));
    }

    #[test]
    fn test_load_json_script() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drag.json");
        fs::write(
            &path,
            r#"[{"type": "start", "active": "task-5"}, {"type": "cancel"}]"#,
        )
        .unwrap();

        let steps = load(&path).unwrap();
        assert_eq!(steps[1], Step::Gesture(GestureEvent::Cancel));
    }

    #[test]
    fn test_load_rejects_unknown_step() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "- type: teleport\n  active: task-1\n").unwrap();

        assert!(load(&path).is_err());
    }
}
