use chrono::Utc;
use leptos::prelude::*;

use super::queue::{SurfaceLimits, Toast, ToastKind, ToastQueue};

/// Handle to one surface's queue. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    fn new(limits: SurfaceLimits) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(limits)),
        }
    }

    pub fn push(&self, title: impl Into<String>, description: Option<String>, kind: ToastKind) -> u64 {
        let title = title.into();
        let now = Utc::now();
        let mut id = 0;
        self.queue.update(|q| id = q.push(title, description, kind, now));
        self.schedule_expiry();
        id
    }

    pub fn info(&self, title: impl Into<String>) -> u64 {
        self.push(title, None, ToastKind::Info)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, Some(description.into()), ToastKind::Error)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.visible().cloned().collect())
    }

    /// Sweep the queue once the toast just pushed has outlived its duration.
    fn schedule_expiry(&self) {
        // Timers only exist in the browser; server renders never show toasts.
        #[cfg(feature = "hydrate")]
        {
            let queue = self.queue;
            // Slightly past the deadline so the sweep sees it as elapsed.
            let after = queue.with_untracked(|q| q.limits().duration()) + std::time::Duration::from_millis(50);
            set_timeout(
                move || {
                    queue.try_update(|q| q.expire(Utc::now()));
                },
                after,
            );
        }
    }
}

/// Both surfaces, as seen by pages.
#[derive(Clone, Copy)]
pub struct Notifications {
    /// Panel toasts with title and description.
    pub toaster: Toasts,
    /// Stacked one-line toasts.
    pub sonner: Toasts,
}

/// Create both queues and put them into context. Call once, above the router.
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications {
        toaster: Toasts::new(SurfaceLimits::TOASTER),
        sonner: Toasts::new(SurfaceLimits::SONNER),
    };
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts, #[prop(into)] surface: String) -> impl IntoView {
    let id = toast.id;
    let class = format!("{surface}-item {surface}-{}", toast.kind.as_str());
    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };

    view! {
        <li class=class role=role>
            <div class="font-bold">{toast.title}</div>
            {toast.description.map(|d| view! { <div class="text-sm">{d}</div> })}
            <button type="button" class="toast-close" aria-label="Close" on:click=move |_| toasts.dismiss(id)>
                "\u{00D7}"
            </button>
        </li>
    }
}

/// Panel toast region.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_notifications().toaster;

    view! {
        <ol class="toaster" aria-label="Notifications">
            <For each=move || toasts.visible() key=|toast| toast.id let:toast>
                <ToastItem toast=toast toasts=toasts surface="toaster" />
            </For>
        </ol>
    }
}

/// Stacked toast region.
#[component]
pub fn Sonner() -> impl IntoView {
    let toasts = use_notifications().sonner;

    view! {
        <ol class="sonner" aria-label="Notifications (stacked)">
            <For each=move || toasts.visible() key=|toast| toast.id let:toast>
                <ToastItem toast=toast toasts=toasts surface="sonner" />
            </For>
        </ol>
    }
}
