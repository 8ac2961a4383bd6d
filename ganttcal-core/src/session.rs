//! The editable in-memory task list.
//!
//! The session replaces the shared module-level task list of the original
//! design: it is owned by the presentation layer and passed by reference
//! into loader/mapper/serializer calls, so there is exactly one place a
//! task list can live and be replaced.

use crate::error::GanttCalResult;
use crate::event::CalendarEvent;
use crate::ics::generate_ics;
use crate::task::{TimelineTask, tasks_from_events};
use chrono::NaiveDate;
use serde::Deserialize;

/// Partial update for a single task. `None` fields leave the current
/// value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub description: Option<String>,
}

/// One user's in-memory planning state: the current task list.
///
/// Edits on an unknown id are deliberate no-ops (the id is internal; a
/// miss means a stale reference, not bad user input) but every operation
/// reports whether it matched.
#[derive(Debug, Default)]
pub struct Session {
    tasks: Vec<TimelineTask>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current list and map a freshly loaded event list.
    pub fn load_events(&mut self, events: &[CalendarEvent]) {
        self.tasks = tasks_from_events(events);
    }

    /// Discard the current list in favor of an already-mapped one.
    pub fn replace(&mut self, tasks: Vec<TimelineTask>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[TimelineTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Overwrite a task's date range; the edge the timeline widget's drag
    /// callback feeds. Returns the updated task, or `None` on a stale id.
    pub fn update_dates(
        &mut self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<&TimelineTask> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.start = start;
        task.end = end;
        Some(task)
    }

    /// Apply a partial field edit. Returns the updated task, or `None` on
    /// a stale id.
    pub fn update_fields(&mut self, id: &str, patch: TaskPatch) -> Option<&TimelineTask> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(start) = patch.start {
            task.start = start;
        }
        if let Some(end) = patch.end {
            task.end = end;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        Some(task)
    }

    /// Delete the task with the given id, preserving the order of the
    /// rest. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Serialize the current list to ICS for download.
    pub fn export(&self, origin_host: &str) -> GanttCalResult<String> {
        generate_ics(&self.tasks, origin_host)
    }
}
