//! Named visual themes and the per-demo theming bootstrap.
//!
//! A [`Theme`] is an explicit configuration value: every demo receives one at
//! construction time (through its `Flags`) and applies it to its own
//! [`RenderRoot`] before first render.  There is no shared mutable theme
//! state, so two demo instances can never affect each other's styling.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// A style role resolved against a [`Theme`] when a fragment is rendered.
///
/// Roles name intent ("secondary text", "error") rather than concrete colors,
/// so the same fragment tree renders correctly under any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Regular body text.
    #[default]
    Body,
    /// De-emphasized text (captions, professions, hints).
    Secondary,
    /// Emphasized body text.
    Strong,
    /// Accent-colored text (links, primary actions).
    Accent,
    /// Positive/confirmation text.
    Success,
    /// Error text.
    Error,
    /// High-contrast text on a filled background.
    Contrast,
}

/// A named visual theme: the palette every widget and fragment resolves its
/// style roles against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Human-readable theme name (e.g. "lumen-dark").
    pub name: &'static str,
    /// Regular text color.
    pub text: Color,
    /// De-emphasized text color.
    pub secondary_text: Color,
    /// Accent color for selection, focus, and primary actions.
    pub accent: Color,
    /// Text color rendered on top of accent-filled backgrounds.
    pub on_accent: Color,
    /// Border and divider color.
    pub border: Color,
    /// Positive/confirmation color.
    pub success: Color,
    /// Error color.
    pub error: Color,
    /// High-contrast fill color.
    pub contrast: Color,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "lumen-dark",
            text: Color::White,
            secondary_text: Color::DarkGray,
            accent: Color::Cyan,
            on_accent: Color::Black,
            border: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            contrast: Color::Gray,
        }
    }

    /// A light-terminal variant of the palette.
    pub fn light() -> Self {
        Self {
            name: "lumen-light",
            text: Color::Black,
            secondary_text: Color::Gray,
            accent: Color::Blue,
            on_accent: Color::White,
            border: Color::Gray,
            success: Color::Green,
            error: Color::Red,
            contrast: Color::DarkGray,
        }
    }

    /// Resolve a style [`Role`] to a concrete [`Style`].
    pub fn style_for(&self, role: Role) -> Style {
        match role {
            Role::Body => Style::default().fg(self.text),
            Role::Secondary => Style::default().fg(self.secondary_text),
            Role::Strong => Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            Role::Accent => Style::default().fg(self.accent),
            Role::Success => Style::default().fg(self.success),
            Role::Error => Style::default().fg(self.error),
            Role::Contrast => Style::default()
                .fg(self.on_accent)
                .bg(self.contrast),
        }
    }

    /// Style for borders and dividers.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

/// The owning context a demo renders its markup into: a frame area plus the
/// theme in effect for that area.
///
/// Each demo creates its own root from the frame and applies its theme with
/// [`apply_theme`] (or [`RenderRoot::themed`]) before rendering.  Roots are
/// plain values; nothing about them is shared between instances.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRoot {
    area: Rect,
    theme: Theme,
}

impl RenderRoot {
    /// Create a render root over the given area with the default theme.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            theme: Theme::default(),
        }
    }

    /// Replace the root's theme, consuming and returning the root.
    pub fn themed(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }

    /// The area this root renders into.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The theme in effect for this root.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

/// Apply a named theme to a render root, returning the themed root.
///
/// Idempotent: applying the same theme again yields an identical root. There
/// are no error conditions and no effects beyond the returned value.
pub fn apply_theme(root: RenderRoot, theme: &Theme) -> RenderRoot {
    root.themed(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_theme_is_idempotent() {
        let theme = Theme::light();
        let root = RenderRoot::new(Rect::new(0, 0, 80, 24));
        let once = apply_theme(root, &theme);
        let twice = apply_theme(once.clone(), &theme);
        assert_eq!(once, twice);
    }

    #[test]
    fn roots_are_isolated() {
        let a = apply_theme(RenderRoot::new(Rect::new(0, 0, 80, 24)), &Theme::dark());
        let b = apply_theme(RenderRoot::new(Rect::new(0, 0, 80, 24)), &Theme::light());
        // Styling one root must not depend on the other.
        assert_eq!(a.theme().name, "lumen-dark");
        assert_eq!(b.theme().name, "lumen-light");
    }

    #[test]
    fn named_themes_have_distinct_palettes() {
        assert_ne!(Theme::dark(), Theme::light());
    }

    #[test]
    fn contrast_role_fills_background() {
        let theme = Theme::dark();
        let style = theme.style_for(Role::Contrast);
        assert!(style.bg.is_some());
    }

    #[test]
    fn strong_role_is_bold() {
        let theme = Theme::dark();
        let style = theme.style_for(Role::Strong);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
