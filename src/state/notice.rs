//! Keyed toast notices, one visible notice per key

use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Loading,
    Success,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Loading => "loading",
            NoticeKind::Success => "success",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub key: &'static str,
    pub kind: NoticeKind,
    pub content: String,
    /// Auto-dismiss delay; `None` keeps the notice until it is replaced
    pub duration_ms: Option<u32>,
}

impl Notice {
    pub fn loading(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            key,
            kind: NoticeKind::Loading,
            content: content.into(),
            duration_ms: None,
        }
    }

    pub fn success(key: &'static str, content: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            key,
            kind: NoticeKind::Success,
            content: content.into(),
            duration_ms: Some(duration_ms),
        }
    }
}

/// Visible notices in display order
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl NoticeQueue {
    /// Show a notice, replacing any notice with the same key in place
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        match self.items.iter_mut().find(|(_, n)| n.key == notice.key) {
            Some(slot) => *slot = (id, notice),
            None => self.items.push((id, notice)),
        }
        id
    }

    /// Dismiss by id; ids of replaced notices are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn items(&self) -> &[(u64, Notice)] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NoticeContext {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeContext {
    pub fn show(&self, notice: Notice) {
        let duration = notice.duration_ms;
        let mut id = 0;
        self.queue.update(|q| id = q.show(notice));

        if let Some(ms) = duration {
            self.dismiss_after(id, ms);
        }
    }

    pub fn items(&self) -> Vec<(u64, Notice)> {
        self.queue.with(|q| q.items().to_vec())
    }

    fn dismiss_after(&self, id: u64, ms: u32) {
        let queue = self.queue;
        Timeout::new(ms, move || queue.update(|q| q.dismiss(id))).forget();
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let ctx = NoticeContext {
        queue: create_rw_signal(NoticeQueue::default()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext must be provided by a parent component")
}
