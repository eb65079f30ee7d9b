//! Live task storage.

use tracing::debug;

use crate::core::Result;
use crate::io::{Canvas, ControlSource};
use crate::task::{Status, Task, TickContext};

/// Stable identifier handed out when a task enters the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

struct Entry {
    id: TaskId,
    task: Box<dyn Task>,
    finished: bool,
}

/// Counts from one pass over the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    pub stepped: usize,
    pub finished: usize,
    pub spawned: usize,
}

/// The set of live tasks.
///
/// A pass steps every entry present when the pass starts, then drops the
/// finished ones, then admits whatever was spawned during the pass.
#[derive(Default)]
pub struct TaskRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, task: Box<dyn Task>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        debug!(task = task.name(), id = id.0, "task spawned");
        self.entries.push(Entry {
            id,
            task,
            finished: false,
        });
        id
    }

    /// Number of live tasks with the given name.
    pub fn count_named(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.task.name() == name).count()
    }

    /// Step every live task once.
    ///
    /// An error from any step is returned immediately; the registry is left as
    /// it was at that point and the pass is not completed.
    pub fn run_pass(
        &mut self,
        canvas: &mut dyn Canvas,
        controls: &mut dyn ControlSource,
    ) -> Result<PassSummary> {
        let mut spawned = Vec::new();
        let mut summary = PassSummary::default();

        {
            let mut cx = TickContext::new(canvas, controls, &mut spawned);
            for entry in &mut self.entries {
                if entry.task.step(&mut cx)? == Status::Finished {
                    entry.finished = true;
                    summary.finished += 1;
                }
                summary.stepped += 1;
            }
        }

        self.entries.retain(|e| {
            if e.finished {
                debug!(task = e.task.name(), id = e.id.0, "task finished");
            }
            !e.finished
        });

        summary.spawned = spawned.len();
        for task in spawned {
            self.insert(task);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::io::IdleControls;
    use crate::testing::RecordingCanvas;

    /// Counts its own steps; finishes after `lifetime` of them.
    struct Counter {
        steps: Rc<Cell<u32>>,
        lifetime: u32,
    }

    impl Task for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn step(&mut self, _cx: &mut TickContext<'_>) -> Result<Status> {
            self.steps.set(self.steps.get() + 1);
            if self.steps.get() >= self.lifetime {
                Ok(Status::Finished)
            } else {
                Ok(Status::Suspended)
            }
        }
    }

    /// Spawns one counter on its first step.
    struct Parent {
        child_steps: Rc<Cell<u32>>,
        spawned: bool,
    }

    impl Task for Parent {
        fn name(&self) -> &'static str {
            "parent"
        }

        fn step(&mut self, cx: &mut TickContext<'_>) -> Result<Status> {
            if !self.spawned {
                self.spawned = true;
                cx.spawn(Box::new(Counter {
                    steps: Rc::clone(&self.child_steps),
                    lifetime: u32::MAX,
                }));
            }
            Ok(Status::Suspended)
        }
    }

    #[test]
    fn finished_tasks_are_dropped_after_the_pass() {
        let mut registry = TaskRegistry::new();
        let steps = Rc::new(Cell::new(0));
        registry.insert(Box::new(Counter {
            steps: Rc::clone(&steps),
            lifetime: 2,
        }));

        let mut canvas = RecordingCanvas::new(5, 5);
        let summary = registry.run_pass(&mut canvas, &mut IdleControls).unwrap();
        assert_eq!(summary.finished, 0);
        assert_eq!(registry.len(), 1);

        let summary = registry.run_pass(&mut canvas, &mut IdleControls).unwrap();
        assert_eq!(summary.finished, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn spawned_task_waits_for_the_next_pass() {
        let mut registry = TaskRegistry::new();
        let child_steps = Rc::new(Cell::new(0));
        registry.insert(Box::new(Parent {
            child_steps: Rc::clone(&child_steps),
            spawned: false,
        }));

        let mut canvas = RecordingCanvas::new(5, 5);
        let summary = registry.run_pass(&mut canvas, &mut IdleControls).unwrap();
        assert_eq!(summary.spawned, 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(child_steps.get(), 0);

        registry.run_pass(&mut canvas, &mut IdleControls).unwrap();
        assert_eq!(child_steps.get(), 1);
        assert_eq!(registry.count_named("counter"), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = TaskRegistry::new();
        let steps = Rc::new(Cell::new(0));
        for _ in 0..3 {
            registry.insert(Box::new(Counter {
                steps: Rc::clone(&steps),
                lifetime: 1,
            }));
        }
        let mut canvas = RecordingCanvas::new(5, 5);
        registry.run_pass(&mut canvas, &mut IdleControls).unwrap();
        assert!(registry.is_empty());

        let id = registry.insert(Box::new(Counter { steps, lifetime: 1 }));
        assert_eq!(id, TaskId(3));
    }
}
