//! Tab navigation component for switching between views.
//!
//! When the tab bar is narrower than its labels the bar scrolls: only a
//! window of tabs containing the selection is drawn, with `‹` / `›`
//! indicators marking clipped tabs on either side. The indicators can be
//! hidden, in which case keyboard navigation is the only hint that more
//! tabs exist.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::theme::Theme;

/// Messages for the tabs component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the tabs component.
    KeyPress(KeyEvent),
    /// Emitted when a tab is selected, carrying the tab index.
    Select(usize),
}

/// Visual style configuration for the [`Tabs`] component.
#[derive(Debug, Clone)]
pub struct TabsStyle {
    /// Style applied to unselected tab labels.
    pub normal: Style,
    /// Style applied to the currently selected tab label.
    pub selected: Style,
    /// Style applied to the tab bar border and overflow indicators.
    pub border: Style,
    /// String used as a divider between tab labels.
    pub divider: String,
}

impl Default for TabsStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            divider: " | ".to_string(),
        }
    }
}

impl TabsStyle {
    /// Derive the tab bar style from a theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            normal: Style::default().fg(theme.secondary_text),
            selected: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            border: theme.border_style(),
            divider: " | ".to_string(),
        }
    }
}

/// A horizontal row of labeled tabs tracking the currently selected index.
pub struct Tabs {
    titles: Vec<String>,
    selected: usize,
    focus: bool,
    hide_scroll_buttons: bool,
    style: TabsStyle,
}

/// The window of tabs visible at a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: usize,
    end: usize,
    clipped_left: bool,
    clipped_right: bool,
}

impl Tabs {
    /// Create a new tabs component with the given tab titles.
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            selected: 0,
            focus: false,
            hide_scroll_buttons: false,
            style: TabsStyle::default(),
        }
    }

    /// Set the visual style for this tabs component.
    pub fn with_style(mut self, style: TabsStyle) -> Self {
        self.style = style;
        self
    }

    /// Hide the `‹` / `›` overflow indicators. Scrolling via keyboard
    /// navigation keeps working; clipped tabs are simply not hinted at.
    pub fn with_hide_scroll_buttons(mut self, hide: bool) -> Self {
        self.hide_scroll_buttons = hide;
        self
    }

    /// Give this tabs component keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this tabs component.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Return the index of the currently selected tab.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The tab titles.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Select the tab at the given index. No-op if the index is out of bounds.
    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.selected = index;
        }
    }

    /// Advance to the next tab, wrapping around to the first tab after the last.
    pub fn select_next(&mut self) {
        if !self.titles.is_empty() {
            self.selected = (self.selected + 1) % self.titles.len();
        }
    }

    /// Move to the previous tab, wrapping around to the last tab before the first.
    pub fn select_prev(&mut self) {
        if !self.titles.is_empty() {
            self.selected = (self.selected + self.titles.len() - 1) % self.titles.len();
        }
    }

    fn label_width(&self, index: usize) -> usize {
        self.titles[index].width()
    }

    /// Compute the visible window for a bar of the given width, keeping the
    /// selected tab inside it. Derived fresh on every render; no scroll
    /// offset is stored.
    fn window(&self, width: u16) -> Window {
        let divider = self.style.divider.width();
        let total: usize = self
            .titles
            .iter()
            .map(|t| t.width())
            .sum::<usize>()
            + divider * self.titles.len().saturating_sub(1);
        if total <= width as usize || self.titles.is_empty() {
            return Window {
                start: 0,
                end: self.titles.len(),
                clipped_left: false,
                clipped_right: false,
            };
        }

        // Room for one indicator (plus a space) on each side.
        let reserve = if self.hide_scroll_buttons { 0 } else { 4 };
        let avail = (width as usize).saturating_sub(reserve);

        // Walk the start forward until the span from start through the
        // selected tab fits.
        let mut start = 0;
        loop {
            let span: usize = (start..=self.selected)
                .map(|i| self.label_width(i))
                .sum::<usize>()
                + divider * (self.selected - start);
            if span <= avail || start == self.selected {
                break;
            }
            start += 1;
        }

        // Then extend the end as far as fits.
        let mut end = self.selected + 1;
        let mut used: usize = (start..end).map(|i| self.label_width(i)).sum::<usize>()
            + divider * (end - start - 1);
        while end < self.titles.len() {
            let next = used + divider + self.label_width(end);
            if next > avail {
                break;
            }
            used = next;
            end += 1;
        }

        Window {
            start,
            end,
            clipped_left: start > 0,
            clipped_right: end < self.titles.len(),
        }
    }
}

impl Component for Tabs {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_prev();
                    Command::message(Message::Select(self.selected))
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.select_next();
                    Command::message(Message::Select(self.selected))
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let idx = c.to_digit(10).map(|d| d as usize).unwrap_or(0);
                    if idx > 0 && idx <= self.titles.len() {
                        self.selected = idx - 1;
                        Command::message(Message::Select(self.selected))
                    } else {
                        Command::none()
                    }
                }
                _ => Command::none(),
            },
            Message::Select(i) => {
                self.select(i);
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let window = self.window(area.width);
        let mut spans: Vec<Span> = Vec::new();

        if window.clipped_left && !self.hide_scroll_buttons {
            spans.push(Span::styled("‹ ", self.style.border));
        }
        for i in window.start..window.end {
            if i > window.start {
                spans.push(Span::styled(self.style.divider.clone(), self.style.border));
            }
            let style = if i == self.selected {
                self.style.selected
            } else {
                self.style.normal
            };
            spans.push(Span::styled(self.titles[i].clone(), style));
        }
        if window.clipped_right && !self.hide_scroll_buttons {
            spans.push(Span::styled(" ›", self.style.border));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(self.style.border),
        );
        frame.render_widget(bar, area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use vitrine_core::testing::render_component;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn catalog_tabs() -> Tabs {
        Tabs::new(
            [
                "Analytics",
                "Customers",
                "Dashboards",
                "Documents",
                "Orders",
                "Products",
                "Tasks",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut tabs = catalog_tabs();
        tabs.focus();
        tabs.update(Message::KeyPress(key(KeyCode::Left)));
        assert_eq!(tabs.selected(), 6);
        tabs.update(Message::KeyPress(key(KeyCode::Right)));
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn select_out_of_bounds_is_noop() {
        let mut tabs = catalog_tabs();
        tabs.select(2);
        tabs.select(99);
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn digit_keys_jump_to_tab() {
        let mut tabs = catalog_tabs();
        tabs.focus();
        tabs.update(Message::KeyPress(key(KeyCode::Char('5'))));
        assert_eq!(tabs.selected(), 4);
        tabs.update(Message::KeyPress(key(KeyCode::Char('9'))));
        assert_eq!(tabs.selected(), 4);
    }

    #[test]
    fn wide_bar_shows_all_tabs() {
        let tabs = catalog_tabs();
        let window = tabs.window(200);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 7);
        assert!(!window.clipped_left);
        assert!(!window.clipped_right);
    }

    #[test]
    fn narrow_bar_keeps_selection_visible() {
        let mut tabs = catalog_tabs();
        tabs.select(6);
        let window = tabs.window(30);
        assert!(window.start > 0);
        assert!(window.end == 7);
        assert!((window.start..window.end).contains(&6));
        assert!(window.clipped_left);
        assert!(!window.clipped_right);
    }

    #[test]
    fn overflow_indicators_render_by_default() {
        let mut tabs = catalog_tabs();
        tabs.select(3);
        let out = render_component(&tabs, 30, 2);
        assert!(out.contains('›') || out.contains('‹'));
    }

    #[test]
    fn hidden_scroll_buttons_render_no_indicators() {
        let mut tabs = catalog_tabs().with_hide_scroll_buttons(true);
        tabs.select(3);
        let out = render_component(&tabs, 30, 2);
        assert!(!out.contains('›'));
        assert!(!out.contains('‹'));
    }
}
