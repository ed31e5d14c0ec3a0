//! Test doubles: recording elements and a virtual-time scheduler.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use crate::platform::{ClassList, FormSurface, NavLink, ScrollLock, Scheduler, SlideTrack};

/// Element with a class set, optionally an href.
#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
    href: Option<String>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(href: &str) -> Self {
        Self {
            classes: Rc::default(),
            href: Some(href.to_string()),
        }
    }
}

impl ClassList for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl NavLink for FakeElement {
    fn href(&self) -> Option<String> {
        self.href.clone()
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeBody {
    pub locked: Rc<Cell<bool>>,
}

impl ScrollLock for FakeBody {
    fn set_scroll_locked(&self, locked: bool) {
        self.locked.set(locked);
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeTrack {
    pub transform: Rc<RefCell<Option<String>>>,
}

impl FakeTrack {
    pub fn transform(&self) -> Option<String> {
        self.transform.borrow().clone()
    }
}

impl SlideTrack for FakeTrack {
    fn set_transform(&self, transform: &str) {
        *self.transform.borrow_mut() = Some(transform.to_string());
    }
}

#[derive(Debug, Default)]
pub struct FormView {
    pub label: String,
    pub disabled: bool,
    pub background: Option<String>,
    pub status: String,
    pub status_color: Option<String>,
    pub resets: usize,
}

#[derive(Debug, Default, Clone)]
pub struct FakeForm {
    pub view: Rc<RefCell<FormView>>,
}

impl FakeForm {
    pub fn with_label(label: &str) -> Self {
        let form = Self::default();
        form.view.borrow_mut().label = label.to_string();
        form
    }
}

impl FormSurface for FakeForm {
    fn button_label(&self) -> String {
        self.view.borrow().label.clone()
    }

    fn set_button_label(&self, label: &str) {
        self.view.borrow_mut().label = label.to_string();
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.view.borrow_mut().disabled = disabled;
    }

    fn set_button_background(&self, color: Option<&str>) {
        self.view.borrow_mut().background = color.map(str::to_string);
    }

    fn set_status_text(&self, text: &str) {
        self.view.borrow_mut().status = text.to_string();
    }

    fn set_status_color(&self, color: &str) {
        self.view.borrow_mut().status_color = Some(color.to_string());
    }

    fn reset_fields(&self) {
        self.view.borrow_mut().resets += 1;
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    period: Option<u64>,
    task: Option<Task>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// Deterministic scheduler driven by `advance`.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its task on drop.
pub struct VirtualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for VirtualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().entries.remove(&self.id);
        }
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tasks.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    fn schedule(&self, delay: u64, period: Option<u64>, task: Task) -> VirtualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.entries.insert(
            id,
            Entry {
                due,
                period,
                task: Some(task),
            },
        );
        VirtualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }

    /// Move time forward, firing every task that comes due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let clock = self.clock.borrow();
                clock
                    .entries
                    .iter()
                    .filter(|(_, e)| e.due <= target && e.task.is_some())
                    .min_by_key(|(id, e)| (e.due, **id))
                    .map(|(id, e)| (*id, e.due))
            };
            let Some((id, due)) = next else {
                break;
            };

            let task = {
                let mut clock = self.clock.borrow_mut();
                clock.now = due;
                clock.entries.get_mut(&id).and_then(|e| e.task.take())
            };

            match task {
                Some(Task::Once(f)) => {
                    f();
                    self.clock.borrow_mut().entries.remove(&id);
                }
                Some(Task::Repeat(mut f)) => {
                    f();
                    let mut clock = self.clock.borrow_mut();
                    // Still registered unless the callback dropped its own handle.
                    if let Some(entry) = clock.entries.get_mut(&id) {
                        entry.due += entry.period.unwrap_or(1).max(1);
                        entry.task = Some(Task::Repeat(f));
                    }
                }
                None => {}
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = VirtualHandle;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        self.schedule(delay_ms as u64, None, Task::Once(callback))
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle {
        let period = period_ms as u64;
        self.schedule(period, Some(period), Task::Repeat(callback))
    }
}
