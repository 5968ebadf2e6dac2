//! Toast notifications: two independent surfaces mounted once above the
//! router, so queued messages survive navigation.

mod queue;
mod surfaces;

pub use queue::{SurfaceLimits, Toast, ToastKind, ToastQueue};
pub use surfaces::{Notifications, Sonner, Toaster, Toasts, provide_notifications, use_notifications};
