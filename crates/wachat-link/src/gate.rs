//! Whether a button should be rendered at all.

use wachat_core::settings::Settings;

/// Where a link is about to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSite {
    /// Inline button in the product summary.
    ProductButton,
    /// Corner button in the page footer.
    FloatingButton,
}

/// The independent checks made before building a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub is_product_page: bool,
    pub settings_enabled: bool,
    pub has_phone: bool,
}

impl RenderContext {
    /// Gather the checks for `site` from the current settings.
    ///
    /// The floating button also needs its own toggle on, which is folded
    /// into `settings_enabled`.
    pub fn for_site(site: RenderSite, settings: &Settings, is_product_page: bool) -> Self {
        let settings_enabled = match site {
            RenderSite::ProductButton => settings.enabled,
            RenderSite::FloatingButton => settings.enabled && settings.floating_enabled,
        };
        Self {
            is_product_page,
            settings_enabled,
            has_phone: settings.has_phone(),
        }
    }
}

/// True only when every check passes.
pub fn should_render(context: RenderContext) -> bool {
    context.is_product_page && context.settings_enabled && context.has_phone
}
