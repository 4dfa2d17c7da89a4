//! # Content Builder
//!
//! Turns dataset text (headings, paragraphs, bullet lists, tables) into
//! pre-wrapped `Line`s for a given width. Wrapping happens here with
//! `textwrap` instead of in `Paragraph`, so the line count is exact and
//! the scroll pane knows its content height up front.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::{Options, WordSeparator, WrapAlgorithm};

use crate::core::dataset::{Page, Section, Table};

pub struct ContentBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
}

impl ContentBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            // textwrap needs at least one column
            width: usize::from(width).max(1),
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines pushed so far. Used to locate a row for scrolling.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn title(&mut self, text: &str) {
        self.wrapped(
            text,
            "",
            "",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        self.blank();
    }

    pub fn heading(&mut self, text: &str) {
        self.wrapped(
            text,
            "",
            "",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
    }

    pub fn paragraph(&mut self, text: &str) {
        self.paragraph_styled(text, Style::default());
    }

    pub fn paragraph_styled(&mut self, text: &str, style: Style) {
        if text.trim().is_empty() {
            return;
        }
        self.wrapped(text, "", "", style);
    }

    pub fn muted(&mut self, text: &str) {
        self.paragraph_styled(text, Style::default().fg(Color::DarkGray));
    }

    pub fn bullet(&mut self, text: &str) {
        self.wrapped(text, "• ", "  ", Style::default());
    }

    /// A line with a marker column, continuation lines indented to match.
    pub fn marked(&mut self, marker: &str, text: &str, style: Style) {
        let indent = " ".repeat(marker.chars().count());
        self.wrapped(text, marker, &indent, style);
    }

    pub fn indented(&mut self, text: &str, style: Style) {
        self.wrapped(text, "    ", "    ", style);
    }

    /// Tables render as one block per row: the first cell as a label, the
    /// remaining cells as `Column: value` lines. Terminal widths are too
    /// narrow for six-column grids.
    pub fn table(&mut self, table: &Table) {
        for row in &table.rows {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                self.wrapped(
                    first,
                    "▸ ",
                    "  ",
                    Style::default().add_modifier(Modifier::BOLD),
                );
            }
            for (column, cell) in table.columns.iter().skip(1).zip(cells) {
                self.labelled(column, cell);
            }
        }
    }

    fn labelled(&mut self, label: &str, value: &str) {
        let text = format!("{label}: {value}");
        self.wrapped(&text, "    ", "      ", Style::default().fg(Color::Gray));
    }

    pub fn section(&mut self, section: &Section) {
        self.heading(&section.heading);
        if let Some(body) = &section.body {
            self.paragraph(body);
        }
        for bullet in &section.bullets {
            self.bullet(bullet);
        }
        if let Some(table) = &section.table {
            self.table(table);
        }
        self.blank();
    }

    /// Title and intro of a page.
    pub fn page_header(&mut self, page: &Page) {
        self.title(&page.title);
        if !page.intro.is_empty() {
            self.muted(&page.intro);
            self.blank();
        }
    }

    pub fn page_sections(&mut self, page: &Page) {
        for section in &page.sections {
            self.section(section);
        }
    }

    pub fn page(&mut self, page: &Page) {
        self.page_header(page);
        self.page_sections(page);
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn wrapped(&mut self, text: &str, first: &str, rest: &str, style: Style) {
        let options = Options::new(self.width)
            .break_words(true)
            .word_separator(WordSeparator::AsciiSpace)
            .wrap_algorithm(WrapAlgorithm::FirstFit)
            .initial_indent(first)
            .subsequent_indent(rest);
        for piece in textwrap::wrap(text, options) {
            self.lines
                .push(Line::from(Span::styled(piece.into_owned(), style)));
        }
    }

    pub fn finish(self) -> Vec<Line<'static>> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_bullet_hanging_indent() {
        let mut b = ContentBuilder::new(12);
        b.bullet("alpha beta gamma delta");
        let text = plain(&b.finish());
        assert_eq!(text[0], "• alpha beta");
        assert!(text[1].starts_with("  "));
        assert!(text.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_wrap_fills_lines_greedily() {
        let mut b = ContentBuilder::new(10);
        b.paragraph("aaaa bbbb c dddddddd");
        assert_eq!(plain(&b.finish()), vec!["aaaa bbbb", "c dddddddd"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        let mut b = ContentBuilder::new(6);
        b.paragraph("abcdefghij");
        assert_eq!(plain(&b.finish()), vec!["abcdef", "ghij"]);
    }

    #[test]
    fn test_table_row_blocks() {
        let table = Table {
            columns: vec!["Name".into(), "Status".into()],
            rows: vec![vec!["Agent".into(), "Idle".into()]],
        };
        let mut b = ContentBuilder::new(40);
        b.table(&table);
        let text = plain(&b.finish());
        assert_eq!(text, vec!["▸ Agent".to_string(), "    Status: Idle".to_string()]);
    }

    #[test]
    fn test_section_layout() {
        let section = Section {
            heading: "Heading".into(),
            body: Some("Body text".into()),
            bullets: vec!["one".into()],
            table: None,
        };
        let mut b = ContentBuilder::new(40);
        b.section(&section);
        assert_eq!(
            plain(&b.finish()),
            vec!["Heading", "Body text", "• one", ""]
        );
    }

    #[test]
    fn test_zero_width_does_not_panic() {
        let mut b = ContentBuilder::new(0);
        b.paragraph("some words here");
        assert!(!b.is_empty());
    }

    #[test]
    fn test_blank_paragraph_skipped() {
        let mut b = ContentBuilder::new(20);
        b.paragraph("   ");
        assert_eq!(b.len(), 0);
    }
}
