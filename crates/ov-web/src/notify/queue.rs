use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Info,
    Success,
    Warning,
    /// Failures; styled as destructive on the panel surface.
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

/// Per-surface queue limits and display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLimits {
    /// Older toasts are dropped beyond this many. `None` keeps them all.
    pub max_queued: Option<usize>,
    pub max_visible: usize,
    pub duration_ms: u64,
}

impl SurfaceLimits {
    /// Panel toasts: one at a time, a new one replaces the old.
    pub const TOASTER: SurfaceLimits = SurfaceLimits {
        max_queued: Some(1),
        max_visible: 1,
        duration_ms: 5_000,
    };

    /// Stacked toasts: unbounded queue, newest three shown.
    pub const SONNER: SurfaceLimits = SurfaceLimits {
        max_queued: None,
        max_visible: 3,
        duration_ms: 4_000,
    };

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
}

/// FIFO toast queue for one surface.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    limits: SurfaceLimits,
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(limits: SurfaceLimits) -> Self {
        Self {
            limits,
            toasts: VecDeque::new(),
            next_id: 1,
        }
    }

    pub fn limits(&self) -> SurfaceLimits {
        self.limits
    }

    /// Enqueue a toast and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            title: title.into(),
            description,
            kind,
            created_at: now,
        });

        if let Some(max) = self.limits.max_queued {
            while self.toasts.len() > max {
                self.toasts.pop_front();
            }
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop toasts whose display time has elapsed at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = TimeDelta::milliseconds(self.limits.duration_ms as i64);
        let before = self.toasts.len();
        self.toasts.retain(|t| now - t.created_at < ttl);
        before - self.toasts.len()
    }

    /// The newest `max_visible` toasts, oldest of them first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        let skip = self.toasts.len().saturating_sub(self.limits.max_visible);
        self.toasts.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(q: &ToastQueue) -> Vec<&str> {
        q.visible().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn toaster_keeps_only_latest() {
        let now = Utc::now();
        let mut q = ToastQueue::new(SurfaceLimits::TOASTER);
        q.push("first", None, ToastKind::Default, now);
        q.push("second", Some("details".into()), ToastKind::Error, now);
        assert_eq!(q.len(), 1);
        assert_eq!(titles(&q), ["second"]);
    }

    #[test]
    fn sonner_queues_all_and_shows_three() {
        let now = Utc::now();
        let mut q = ToastQueue::new(SurfaceLimits::SONNER);
        for title in ["a", "b", "c", "d"] {
            q.push(title, None, ToastKind::Info, now);
        }
        assert_eq!(q.len(), 4);
        assert_eq!(titles(&q), ["b", "c", "d"]);
    }

    #[test]
    fn ids_are_unique_and_dismissable() {
        let now = Utc::now();
        let mut q = ToastQueue::new(SurfaceLimits::SONNER);
        let a = q.push("a", None, ToastKind::Success, now);
        let b = q.push("b", None, ToastKind::Success, now);
        assert_ne!(a, b);

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(titles(&q), ["b"]);

        assert!(q.dismiss(b));
        assert!(q.is_empty());
    }

    #[test]
    fn expiry_uses_surface_duration() {
        let t0 = Utc::now();
        let mut q = ToastQueue::new(SurfaceLimits::SONNER);
        q.push("old", None, ToastKind::Warning, t0);
        q.push("new", None, ToastKind::Warning, t0 + TimeDelta::seconds(3));

        assert_eq!(q.expire(t0 + TimeDelta::milliseconds(3_999)), 0);
        assert_eq!(q.expire(t0 + TimeDelta::seconds(4)), 1);
        assert_eq!(titles(&q), ["new"]);
    }
}
