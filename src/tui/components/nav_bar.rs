//! # NavBar Component
//!
//! Two-line header: the brand on the first line, one tab per view on the
//! second with the current view highlighted.
//!
//! ## Stateless Component
//!
//! NavBar is purely presentational. It receives the brand strings and the
//! current view as props:
//!
//! ```rust,ignore
//! let mut nav = NavBar::new(&app.dataset.brand, app.current_view());
//! nav.render(frame, nav_area);
//! ```
//!
//! ## Hit Testing
//!
//! Tabs are laid out left to right with a fixed separator, so the tab
//! under a mouse column can be computed from the labels alone with
//! [`tab_at_column`], without keeping layout state between frames.

use ratatui::Frame;
use ratatui::layout::Constraint::Length;
use ratatui::layout::{Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::dataset::Brand;
use crate::core::view::View;
use crate::tui::component::Component;

const TAB_SEPARATOR: &str = " │ ";
const TAB_PADDING: u16 = 1;

pub struct NavBar<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub current: View,
}

impl<'a> NavBar<'a> {
    pub fn new(brand: &'a Brand, current: View) -> Self {
        Self {
            title: &brand.title,
            subtitle: &brand.subtitle,
            current,
        }
    }

    fn brand_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if !self.subtitle.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(self.subtitle, Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(View::ALL.len() * 2);
        for (i, view) in View::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(TAB_SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let label = format!(" {} ", view.label());
            let style = if view == self.current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }
}

/// Column span `[start, end)` of each tab on the tabs line.
fn tab_spans() -> Vec<(u16, u16, View)> {
    let separator = TAB_SEPARATOR.width() as u16;
    let mut x: u16 = 0;
    let mut spans = Vec::with_capacity(View::ALL.len());
    for (i, view) in View::ALL.into_iter().enumerate() {
        if i > 0 {
            x += separator;
        }
        let width = view.label().width() as u16 + TAB_PADDING * 2;
        spans.push((x, x + width, view));
        x += width;
    }
    spans
}

/// Horizontal scroll of the tabs line that keeps `current` on screen.
pub fn tabs_offset(current: View, width: u16) -> u16 {
    tab_spans()
        .into_iter()
        .find(|(_, _, view)| *view == current)
        .map(|(_, end, _)| end.saturating_sub(width))
        .unwrap_or(0)
}

/// The view whose tab covers `column` (relative to the nav area), given
/// the tabs line is scrolled by `offset`.
pub fn tab_at_column(column: u16, offset: u16) -> Option<View> {
    let column = column.saturating_add(offset);
    tab_spans()
        .into_iter()
        .find(|(start, end, _)| (*start..*end).contains(&column))
        .map(|(_, _, view)| view)
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [brand_area, tabs_area] = Layout::vertical([Length(1), Length(1)]).areas(area);
        frame.render_widget(Paragraph::new(self.brand_line()), brand_area);

        let offset = tabs_offset(self.current, tabs_area.width);
        frame.render_widget(
            Paragraph::new(self.tabs_line()).scroll((0, offset)),
            tabs_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn brand() -> Brand {
        Brand {
            title: "Prediction AI".into(),
            subtitle: "Forecasting".into(),
            owner: String::new(),
            disclaimer: String::new(),
        }
    }

    #[test]
    fn test_tab_at_column() {
        // " Overview " occupies columns 0..10
        assert_eq!(tab_at_column(0, 0), Some(View::Overview));
        assert_eq!(tab_at_column(9, 0), Some(View::Overview));
        // separator
        assert_eq!(tab_at_column(11, 0), None);
        // " Ask " starts after the 3-column separator
        assert_eq!(tab_at_column(13, 0), Some(View::AskEngine));
        assert_eq!(tab_at_column(u16::MAX, 0), None);
        // scrolled by 13 columns, column 0 is the Ask tab
        assert_eq!(tab_at_column(0, 13), Some(View::AskEngine));
    }

    #[test]
    fn test_every_view_is_hittable() {
        for (start, _, view) in tab_spans() {
            assert_eq!(tab_at_column(start, 0), Some(view));
        }
    }

    #[test]
    fn test_tabs_offset_keeps_current_visible() {
        assert_eq!(tabs_offset(View::Overview, 40), 0);
        let offset = tabs_offset(View::Legal, 40);
        assert!(offset > 0);
        let (start, end, _) = *tab_spans().last().unwrap();
        assert!(start >= offset && end - offset <= 40);
        assert_eq!(tabs_offset(View::Legal, 1000), 0);
    }

    #[test]
    fn test_nav_bar_renders_brand_and_tabs() {
        let backend = TestBackend::new(240, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let brand = brand();
        terminal
            .draw(|f| {
                NavBar::new(&brand, View::DueDiligence).render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Prediction AI"));
        assert!(text.contains("Forecasting"));
        assert!(text.contains("Due Diligence"));
        assert!(text.contains("Legal"));
    }
}
