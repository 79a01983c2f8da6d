//! Compact status badge with themed variants.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::fragment::Fragment;
use vitrine_core::theme::Theme;

/// Visual variant of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Accent-colored badge for neutral statuses ("Pending").
    #[default]
    Default,
    /// Positive status ("Confirmed").
    Success,
    /// Negative status ("Denied").
    Error,
    /// Muted high-contrast status ("On hold").
    Contrast,
}

/// Messages for the badge component. Badges are static; they accept none.
#[derive(Debug, Clone)]
pub enum Message {}

/// A small inline label that colors a short status text.
///
/// Badges carry no state beyond their label and variant. For embedding in a
/// static layout, [`node`](Badge::node) yields the badge as a fragment leaf:
///
/// ```rust,ignore
/// let row = Fragment::row()
///     .spacing(1)
///     .child(Badge::new("Pending").node(&theme))
///     .child(Badge::new("Confirmed").with_variant(Variant::Success).node(&theme));
/// ```
pub struct Badge {
    label: String,
    variant: Variant,
}

impl Badge {
    /// Create a badge with the given label and the default variant.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
        }
    }

    /// Set the badge variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// The badge label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The badge variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Resolve the badge fill style against a theme.
    pub fn style(&self, theme: &Theme) -> Style {
        let fill = match self.variant {
            Variant::Default => theme.accent,
            Variant::Success => theme.success,
            Variant::Error => theme.error,
            Variant::Contrast => theme.contrast,
        };
        Style::default().fg(theme.on_accent).bg(fill)
    }

    /// The badge as a pre-styled fragment leaf for use in layouts.
    pub fn node(&self, theme: &Theme) -> Fragment {
        Fragment::styled(format!(" {} ", self.label), self.style(theme))
    }
}

impl Component for Badge {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {}
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        self.node(&theme).render(&theme, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_uses_accent() {
        let theme = Theme::dark();
        let badge = Badge::new("Pending");
        assert_eq!(badge.style(&theme).bg, Some(theme.accent));
    }

    #[test]
    fn variants_map_to_theme_colors() {
        let theme = Theme::dark();
        let success = Badge::new("Confirmed").with_variant(Variant::Success);
        let error = Badge::new("Denied").with_variant(Variant::Error);
        let contrast = Badge::new("On hold").with_variant(Variant::Contrast);
        assert_eq!(success.style(&theme).bg, Some(theme.success));
        assert_eq!(error.style(&theme).bg, Some(theme.error));
        assert_eq!(contrast.style(&theme).bg, Some(theme.contrast));
    }

    #[test]
    fn node_pads_the_label() {
        let theme = Theme::dark();
        let node = Badge::new("Pending").node(&theme);
        // " Pending " is 9 columns wide
        assert_eq!(node.width(), 9);
        assert_eq!(node.height(), 1);
    }
}
