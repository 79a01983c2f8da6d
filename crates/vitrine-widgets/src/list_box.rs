//! Scrollable list box with single or multiple selection and a custom item
//! presentation.
//!
//! The presentation of each item is a caller-supplied `Fn(&T) -> Fragment`
//! renderer, so an item can be anything from a single text line to an
//! avatar-plus-details card. The list box owns the cursor, the selection
//! set, and the scroll window; the renderer owns the markup.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::fragment::Fragment;
use vitrine_core::theme::Theme;

/// Messages for the list box component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the list box.
    KeyPress(KeyEvent),
    /// Toggle (or, in single-select mode, set) the selection at an index.
    Toggle(usize),
    /// Emitted after the selection set changes, carrying the sorted indices.
    SelectionChanged(Vec<usize>),
}

/// Visual style configuration for the [`ListBox`] component.
#[derive(Debug, Clone)]
pub struct ListBoxStyle {
    /// Style of the cursor marker next to the highlighted item.
    pub cursor: Style,
    /// Style of the selection marker next to selected items.
    pub marker: Style,
}

impl Default for ListBoxStyle {
    fn default() -> Self {
        Self {
            cursor: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            marker: Style::default().fg(Color::Green),
        }
    }
}

impl ListBoxStyle {
    /// Derive the list box style from a theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            cursor: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            marker: Style::default().fg(theme.success),
        }
    }
}

type ItemRenderer<T> = Box<dyn Fn(&T) -> Fragment + Send + Sync>;

/// A list of items with a cursor, a selection set, and a custom item
/// presentation.
///
/// # Example
///
/// ```rust,ignore
/// let list = ListBox::new(|person: &Person| {
///     Fragment::column()
///         .child(Fragment::text(format!("{} {}", person.first_name, person.last_name)))
///         .child(Fragment::text(&person.profession).role(Role::Secondary))
/// })
/// .with_multiple(true)
/// .with_selected([0, 2]);
/// ```
pub struct ListBox<T> {
    items: Vec<T>,
    renderer: ItemRenderer<T>,
    multiple: bool,
    selected: BTreeSet<usize>,
    cursor: usize,
    focus: bool,
    theme: Theme,
    style: ListBoxStyle,
}

impl<T: Send + 'static> ListBox<T> {
    /// Create an empty list box with the given item renderer.
    pub fn new(renderer: impl Fn(&T) -> Fragment + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            renderer: Box::new(renderer),
            multiple: false,
            selected: BTreeSet::new(),
            cursor: 0,
            focus: false,
            theme: Theme::default(),
            style: ListBoxStyle::default(),
        }
    }

    /// Allow more than one item to be selected at a time.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Preselect the given indices. Out-of-range indices are kept and take
    /// effect once items are present.
    pub fn with_selected(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.selected = indices.into_iter().collect();
        if !self.multiple && self.selected.len() > 1 {
            let first = self.selected.iter().next().copied();
            self.selected = first.into_iter().collect();
        }
        self
    }

    /// Set the theme item fragments are resolved against.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.style = ListBoxStyle::themed(theme);
        self.theme = theme.clone();
        self
    }

    /// Set the visual style for this list box.
    pub fn with_style(mut self, style: ListBoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the items. The cursor is clamped; selections outside the new
    /// length are dropped.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if !self.items.is_empty() {
            self.cursor = self.cursor.min(self.items.len() - 1);
        } else {
            self.cursor = 0;
        }
        let len = self.items.len();
        self.selected.retain(|&i| i < len);
    }

    /// The items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The highlighted (cursor) index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sorted indices of the selected items.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Give this list box keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this list box.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Toggle the selection state of an index (multiple mode) or make it the
    /// sole selection (single mode). No-op if out of range.
    fn toggle(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if self.multiple {
            if !self.selected.remove(&index) {
                self.selected.insert(index);
            }
        } else {
            self.selected.clear();
            self.selected.insert(index);
        }
        true
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }
}

impl<T: Send + 'static> Component for ListBox<T> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_cursor_up();
                    Command::none()
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_cursor_down();
                    Command::none()
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.toggle(self.cursor) {
                        Command::message(Message::SelectionChanged(self.selected_indices()))
                    } else {
                        Command::none()
                    }
                }
                _ => Command::none(),
            },
            Message::Toggle(index) => {
                if self.toggle(index) {
                    Command::message(Message::SelectionChanged(self.selected_indices()))
                } else {
                    Command::none()
                }
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let fragments: Vec<Fragment> = self.items.iter().map(|i| (self.renderer)(i)).collect();
        let heights: Vec<u16> = fragments.iter().map(|f| f.height().max(1)).collect();

        // Scroll the window so the cursor row is fully visible.
        let mut first = 0usize;
        loop {
            let mut used = 0u16;
            let mut cursor_fits = false;
            for (i, h) in heights.iter().enumerate().skip(first) {
                if used + h > area.height {
                    break;
                }
                used += h;
                if i == self.cursor {
                    cursor_fits = true;
                }
            }
            if cursor_fits || first >= self.cursor || first + 1 >= heights.len() {
                break;
            }
            first += 1;
        }

        let mut y = area.y;
        for (i, fragment) in fragments.iter().enumerate().skip(first) {
            let h = heights[i];
            if y + h > area.bottom() {
                break;
            }

            let cursor_mark = if self.focus && i == self.cursor {
                "❯"
            } else {
                " "
            };
            let select_mark = if self.selected.contains(&i) { "✓" } else { " " };
            frame.render_widget(
                Paragraph::new(Span::styled(cursor_mark, self.style.cursor)),
                Rect::new(area.x, y, 1, 1),
            );
            frame.render_widget(
                Paragraph::new(Span::styled(select_mark, self.style.marker)),
                Rect::new(area.x + 1, y, 1, 1),
            );

            let item_area = Rect::new(area.x + 3, y, area.width - 3, h);
            fragment.render(&self.theme, frame, item_area);
            y += h;
        }
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
    use vitrine_core::theme::Role;

    struct Person {
        first_name: &'static str,
        last_name: &'static str,
        profession: &'static str,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { first_name: "Aria", last_name: "Stone", profession: "Architect" },
            Person { first_name: "Bela", last_name: "Marsh", profession: "Sculptor" },
            Person { first_name: "Cato", last_name: "Reyes", profession: "Engineer" },
            Person { first_name: "Dina", last_name: "Falk", profession: "Composer" },
            Person { first_name: "Egon", last_name: "Hale", profession: "Historian" },
        ]
    }

    fn person_list() -> ListBox<Person> {
        let mut list = ListBox::new(|p: &Person| {
            Fragment::column()
                .child(Fragment::text(format!("{} {}", p.first_name, p.last_name)))
                .child(Fragment::text(p.profession).role(Role::Secondary))
        })
        .with_multiple(true);
        list.set_items(people());
        list
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn five_items_render_five_entries_unmodified() {
        let list = person_list();
        assert_eq!(list.len(), 5);
        let out = render_component(&list, 40, 10);
        for p in people() {
            assert!(out.contains(&format!("{} {}", p.first_name, p.last_name)));
            assert!(out.contains(p.profession));
        }
    }

    #[test]
    fn preselection_marks_items() {
        let mut list = ListBox::new(|p: &Person| Fragment::text(p.first_name))
            .with_multiple(true)
            .with_selected([0, 2]);
        list.set_items(people());
        assert_eq!(list.selected_indices(), vec![0, 2]);
    }

    #[test]
    fn space_toggles_selection_in_multiple_mode() {
        let mut list = person_list();
        list.focus();
        let cmd = list.update(Message::KeyPress(key(KeyCode::Char(' '))));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::SelectionChanged(v)) if v == vec![0]
        ));
        let cmd = list.update(Message::KeyPress(key(KeyCode::Char(' '))));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::SelectionChanged(v)) if v.is_empty()
        ));
    }

    #[test]
    fn single_mode_replaces_selection() {
        let mut list = ListBox::new(|p: &Person| Fragment::text(p.first_name));
        list.set_items(people());
        list.update(Message::Toggle(1));
        list.update(Message::Toggle(3));
        assert_eq!(list.selected_indices(), vec![3]);
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut list = person_list();
        list.focus();
        list.update(Message::KeyPress(key(KeyCode::Up)));
        assert_eq!(list.cursor(), 0);
        for _ in 0..10 {
            list.update(Message::KeyPress(key(KeyCode::Down)));
        }
        assert_eq!(list.cursor(), 4);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut list = person_list();
        let cmd = list.update(Message::Toggle(99));
        assert!(cmd.is_none());
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn set_items_drops_stale_selection() {
        let mut list = person_list();
        list.update(Message::Toggle(4));
        list.set_items(people().into_iter().take(2).collect());
        assert!(list.selected_indices().is_empty());
    }
}
