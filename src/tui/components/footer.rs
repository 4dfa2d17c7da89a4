//! Page footer: owner and year on one line, the disclaimer on the next.

use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::dataset::Brand;
use crate::tui::component::Component;

pub struct Footer<'a> {
    pub brand: &'a Brand,
    pub year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(brand: &'a Brand) -> Self {
        Self {
            brand,
            year: Local::now().year(),
        }
    }

    fn copyright(&self) -> String {
        format!("© {} {} · {}", self.year, self.brand.owner, self.brand.title)
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(self.copyright()),
            Line::from(self.brand.disclaimer.as_str()),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(style).alignment(Alignment::Center),
            area,
        );
    }
}
