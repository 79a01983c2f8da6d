//! Initials avatar for list items and headers.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::fragment::Fragment;
use vitrine_core::theme::Theme;

/// Messages for the avatar component. Avatars are static; they accept none.
#[derive(Debug, Clone)]
pub enum Message {}

/// A compact identity marker showing the initials of a display name.
///
/// A picture URL can be attached and is carried opaquely; terminals have no
/// way to paint it, so the initials always render.
pub struct Avatar {
    name: String,
    picture_url: Option<String>,
    abbreviation: Option<String>,
}

impl Avatar {
    /// Create an avatar for the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            picture_url: None,
            abbreviation: None,
        }
    }

    /// Attach a picture URL (carried, never painted).
    pub fn with_picture_url(mut self, url: impl Into<String>) -> Self {
        self.picture_url = Some(url.into());
        self
    }

    /// Override the derived initials.
    pub fn with_abbreviation(mut self, abbr: impl Into<String>) -> Self {
        self.abbreviation = Some(abbr.into());
        self
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached picture URL, if any.
    pub fn picture_url(&self) -> Option<&str> {
        self.picture_url.as_deref()
    }

    /// The initials shown in the avatar: the first letter of the first two
    /// words of the name, uppercased, unless an override was set.
    pub fn initials(&self) -> String {
        if let Some(ref abbr) = self.abbreviation {
            return abbr.clone();
        }
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// The avatar as a pre-styled fragment leaf.
    pub fn node(&self, theme: &Theme) -> Fragment {
        let style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        Fragment::styled(format!("({})", self.initials()), style)
    }
}

impl Component for Avatar {
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
    fn initials_from_two_word_name() {
        assert_eq!(Avatar::new("Jane Doe").initials(), "JD");
    }

    #[test]
    fn initials_from_single_word_name() {
        assert_eq!(Avatar::new("Plato").initials(), "P");
    }

    #[test]
    fn initials_ignore_extra_words() {
        assert_eq!(Avatar::new("Ana de la Cruz").initials(), "AD");
    }

    #[test]
    fn abbreviation_overrides_derivation() {
        let avatar = Avatar::new("Jane Doe").with_abbreviation("XY");
        assert_eq!(avatar.initials(), "XY");
    }

    #[test]
    fn picture_url_is_carried_opaquely() {
        let avatar = Avatar::new("Jane Doe").with_picture_url("https://example.test/p/1.jpg");
        assert_eq!(avatar.picture_url(), Some("https://example.test/p/1.jpg"));
        // The rendered node still shows initials.
        assert_eq!(avatar.node(&Theme::dark()).width(), 4);
    }
}
