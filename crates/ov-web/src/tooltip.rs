use leptos::prelude::*;

/// Hover timing shared by every [`Tooltip`] below a [`TooltipProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Hover time before a tooltip opens.
    pub delay_ms: u32,
    /// Window after closing one tooltip in which the next opens immediately.
    pub skip_delay_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            delay_ms: 700,
            skip_delay_ms: 300,
        }
    }
}

impl TooltipConfig {
    fn style(&self) -> String {
        format!(
            "--tooltip-delay: {}ms; --tooltip-skip-delay: {}ms",
            self.delay_ms, self.skip_delay_ms
        )
    }
}

#[component]
pub fn TooltipProvider(#[prop(optional)] config: Option<TooltipConfig>, children: Children) -> impl IntoView {
    provide_context(config.unwrap_or_default());
    children()
}

/// Shows `label` when the wrapped content is hovered or focused.
#[component]
pub fn Tooltip(#[prop(into)] label: String, children: Children) -> impl IntoView {
    let config = use_context::<TooltipConfig>().unwrap_or_default();

    view! {
        <span class="tooltip" tabindex="0" data-tooltip=label.clone() aria-label=label style=config.style()>
            {children()}
        </span>
    }
}
