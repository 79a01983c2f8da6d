//! Tree-construction API for UI fragments.
//!
//! A [`Fragment`] is a plain data structure describing a piece of UI: text
//! leaves with style [`Role`]s, rows, and columns with spacing and padding.
//! Building a fragment performs no rendering; a fragment only touches the
//! screen when [`Fragment::render`] resolves it against a
//! [`Theme`](crate::theme::Theme) and paints it into a frame area.
//!
//! Widgets that accept caller-supplied content (notification bodies, list-box
//! item presentations) take fragments or `Fn(&T) -> Fragment` closures, so
//! demos describe their markup as data rather than drawing directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_core::fragment::Fragment;
//! use vitrine_core::theme::Role;
//!
//! let card = Fragment::column()
//!     .spacing(0)
//!     .child(Fragment::text("Jane Doe").role(Role::Strong))
//!     .child(Fragment::text("Architect").role(Role::Secondary));
//! ```

use crate::theme::{Role, Theme};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

enum Node {
    /// A text leaf whose style is resolved from the theme at render time.
    Text { content: String, role: Role },
    /// A text leaf carrying a concrete style (widget-contributed content).
    Styled { content: String, style: Style },
    Row(Group),
    Column(Group),
}

#[derive(Default)]
struct Group {
    children: Vec<Fragment>,
    spacing: u16,
    padding: u16,
}

/// A plain data description of a UI fragment. See the module docs.
pub struct Fragment {
    node: Node,
}

impl Fragment {
    /// A body-text leaf. Use [`role`](Fragment::role) to change its role.
    pub fn text(content: impl Into<String>) -> Self {
        Fragment {
            node: Node::Text {
                content: content.into(),
                role: Role::Body,
            },
        }
    }

    /// A leaf with a concrete pre-resolved style.
    ///
    /// Intended for widgets embedding their own chrome into a fragment;
    /// demos should prefer [`text`](Fragment::text) plus a [`Role`].
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Fragment {
            node: Node::Styled {
                content: content.into(),
                style,
            },
        }
    }

    /// An empty horizontal container.
    pub fn row() -> Self {
        Fragment {
            node: Node::Row(Group::default()),
        }
    }

    /// An empty vertical container.
    pub fn column() -> Self {
        Fragment {
            node: Node::Column(Group::default()),
        }
    }

    /// Set the style role of a text leaf. No-op on containers and
    /// pre-styled leaves.
    pub fn role(mut self, role: Role) -> Self {
        if let Node::Text { role: r, .. } = &mut self.node {
            *r = role;
        }
        self
    }

    /// Set the gap between children. No-op on leaves.
    pub fn spacing(mut self, spacing: u16) -> Self {
        if let Node::Row(g) | Node::Column(g) = &mut self.node {
            g.spacing = spacing;
        }
        self
    }

    /// Set the inset around children. No-op on leaves.
    pub fn padding(mut self, padding: u16) -> Self {
        if let Node::Row(g) | Node::Column(g) = &mut self.node {
            g.padding = padding;
        }
        self
    }

    /// Append a child fragment. No-op on leaves.
    pub fn child(mut self, child: Fragment) -> Self {
        if let Node::Row(g) | Node::Column(g) = &mut self.node {
            g.children.push(child);
        }
        self
    }

    /// Append every fragment from an iterator.
    pub fn children(mut self, iter: impl IntoIterator<Item = Fragment>) -> Self {
        if let Node::Row(g) | Node::Column(g) = &mut self.node {
            g.children.extend(iter);
        }
        self
    }

    /// Measured width in terminal columns.
    pub fn width(&self) -> u16 {
        match &self.node {
            Node::Text { content, .. } | Node::Styled { content, .. } => {
                content.width() as u16
            }
            Node::Row(g) => {
                let children: u16 = g.children.iter().map(Fragment::width).sum();
                let gaps = g.spacing * g.children.len().saturating_sub(1) as u16;
                children + gaps + 2 * g.padding
            }
            Node::Column(g) => {
                let widest = g.children.iter().map(Fragment::width).max().unwrap_or(0);
                widest + 2 * g.padding
            }
        }
    }

    /// Measured height in terminal rows.
    pub fn height(&self) -> u16 {
        match &self.node {
            Node::Text { .. } | Node::Styled { .. } => 1,
            Node::Row(g) => {
                let tallest = g.children.iter().map(Fragment::height).max().unwrap_or(0);
                tallest + 2 * g.padding
            }
            Node::Column(g) => {
                let children: u16 = g.children.iter().map(Fragment::height).sum();
                let gaps = g.spacing * g.children.len().saturating_sub(1) as u16;
                children + gaps + 2 * g.padding
            }
        }
    }

    /// Resolve the fragment against `theme` and paint it into `area`.
    ///
    /// Content that does not fit the area is clipped; nothing is wrapped.
    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match &self.node {
            Node::Text { content, role } => {
                let span = Span::styled(content.clone(), theme.style_for(*role));
                frame.render_widget(Paragraph::new(span), area);
            }
            Node::Styled { content, style } => {
                let span = Span::styled(content.clone(), *style);
                frame.render_widget(Paragraph::new(span), area);
            }
            Node::Row(g) => {
                let inner = inset(area, g.padding);
                let mut x = inner.x;
                for child in &g.children {
                    if x >= inner.right() {
                        break;
                    }
                    let w = child.width().min(inner.right() - x);
                    let h = child.height().min(inner.height);
                    child.render(theme, frame, Rect::new(x, inner.y, w, h));
                    x = x.saturating_add(w).saturating_add(g.spacing);
                }
            }
            Node::Column(g) => {
                let inner = inset(area, g.padding);
                let mut y = inner.y;
                for child in &g.children {
                    if y >= inner.bottom() {
                        break;
                    }
                    let w = child.width().min(inner.width);
                    let h = child.height().min(inner.bottom() - y);
                    child.render(theme, frame, Rect::new(inner.x, y, w, h));
                    y = y.saturating_add(h).saturating_add(g.spacing);
                }
            }
        }
    }
}

fn inset(area: Rect, padding: u16) -> Rect {
    let pad_x = padding.min(area.width / 2);
    let pad_y = padding.min(area.height / 2);
    Rect::new(
        area.x + pad_x,
        area.y + pad_y,
        area.width - 2 * pad_x,
        area.height - 2 * pad_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(fragment: &Fragment, width: u16, height: u16) -> String {
        let theme = Theme::dark();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| fragment.render(&theme, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn text_measures_unicode_width() {
        assert_eq!(Fragment::text("Pending").width(), 7);
        assert_eq!(Fragment::text("Pending").height(), 1);
    }

    #[test]
    fn row_width_includes_spacing() {
        let row = Fragment::row()
            .spacing(2)
            .child(Fragment::text("ab"))
            .child(Fragment::text("cd"));
        assert_eq!(row.width(), 6);
        assert_eq!(row.height(), 1);
    }

    #[test]
    fn column_height_includes_spacing_and_padding() {
        let col = Fragment::column()
            .spacing(1)
            .padding(1)
            .child(Fragment::text("a"))
            .child(Fragment::text("b"))
            .child(Fragment::text("c"));
        // 3 rows + 2 gaps + 2 padding rows
        assert_eq!(col.height(), 7);
    }

    #[test]
    fn row_renders_children_side_by_side() {
        let row = Fragment::row()
            .spacing(1)
            .child(Fragment::text("one"))
            .child(Fragment::text("two"));
        let out = render_to_string(&row, 10, 1);
        assert!(out.contains("one two"));
    }

    #[test]
    fn column_renders_children_stacked() {
        let col = Fragment::column()
            .child(Fragment::text("Button 1"))
            .child(Fragment::text("Button 2"));
        let out = render_to_string(&col, 10, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Button 1"));
        assert!(lines[1].contains("Button 2"));
    }

    #[test]
    fn padding_insets_content() {
        let col = Fragment::column().padding(1).child(Fragment::text("x"));
        let out = render_to_string(&col, 5, 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "");
        assert_eq!(lines[1].chars().nth(1), Some('x'));
    }

    #[test]
    fn role_resolves_theme_color() {
        let theme = Theme::dark();
        let backend = TestBackend::new(5, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let leaf = Fragment::text("err").role(Role::Error);
        terminal
            .draw(|frame| leaf.render(&theme, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        assert_eq!(buf[(0, 0)].style().fg, Some(theme.error));
    }

    #[test]
    fn oversized_content_is_clipped() {
        let row = Fragment::row()
            .child(Fragment::text("0123456789"))
            .child(Fragment::text("overflow"));
        // Must not panic on a narrow area.
        let out = render_to_string(&row, 4, 1);
        assert!(out.contains("0123"));
    }

    #[test]
    fn role_is_noop_on_containers() {
        let row = Fragment::row().role(Role::Error).child(Fragment::text("x"));
        assert_eq!(row.width(), 1);
    }
}
