//! # Selection List Component
//!
//! Renders a `SingleSelectionGroup` as a bordered list: domain tabs, the
//! architecture sidebar and the Ask view's domain dropdown all use it.
//!
//! The active option is highlighted through a `ListState` built fresh each
//! frame from the group, so the list never disagrees with core state. The
//! scroll offset comes from [`list_offset`], which mouse hit testing uses
//! too.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::selection::SingleSelectionGroup;
use crate::tui::component::Component;

pub struct SelectionList<'a> {
    title: &'a str,
    group: &'a SingleSelectionGroup<String>,
    help: Option<&'a str>,
}

impl<'a> SelectionList<'a> {
    pub fn new(title: &'a str, group: &'a SingleSelectionGroup<String>) -> Self {
        Self {
            title,
            group,
            help: None,
        }
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }

    fn items(&self, inner_width: usize) -> Vec<ListItem<'a>> {
        self.group
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let active = self.group.active_index() == Some(i);
                let marker = if active { "● " } else { "○ " };
                let label = truncate_str(option, inner_width.saturating_sub(2));
                let style = if active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(label, style),
                ]))
            })
            .collect()
    }
}

impl Component for SelectionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        if let Some(help) = self.help {
            block = block.title_bottom(Line::from(format!(" {help} ")).centered());
        }

        // borders + padding
        let inner_width = usize::from(area.width.saturating_sub(4));
        let list = List::new(self.items(inner_width))
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let active = self.group.active_index();
        let visible_rows = usize::from(area.height.saturating_sub(2));
        let mut list_state = ListState::default()
            .with_offset(list_offset(active, visible_rows))
            .with_selected(active);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Index of the first option shown when `visible_rows` rows fit and
/// `active` must stay on screen. Matches the offset `List` settles on
/// when it starts from the top.
pub fn list_offset(active: Option<usize>, visible_rows: usize) -> usize {
    match active {
        Some(i) if visible_rows > 0 && i >= visible_rows => i + 1 - visible_rows,
        _ => 0,
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    let count = s.chars().count();
    if count <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}
