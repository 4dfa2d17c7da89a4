use crate::core::selection::SingleSelectionGroup;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::{tab_at_column, tabs_offset};
use crate::tui::components::scroll_pane::has_more_below;
use crate::tui::components::selection_list::list_offset;
use crate::tui::components::{
    ContentBuilder, Footer, NavBar, ScrollPane, SelectionList, StatusBar, accordion_lines,
    prediction_cards,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

const DOMAIN_SIDEBAR_WIDTH: u16 = 22;
const ARCHITECTURE_SIDEBAR_WIDTH: u16 = 30;
const ASK_SIDEBAR_WIDTH: u16 = 36;
const QUESTION_FIELD_HEIGHT: u16 = 3;

/// Nav bar, page body, footer, status bar.
pub fn screen_areas(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(2), Min(0), Length(2), Length(1)]).areas(area)
}

fn body_area(frame_area: Rect) -> Rect {
    let [_, body, _, _] = screen_areas(frame_area);
    body.inner(Margin::new(1, 0))
}

fn sidebar_width(view: View) -> Option<u16> {
    match view {
        View::Domains => Some(DOMAIN_SIDEBAR_WIDTH),
        View::Architecture => Some(ARCHITECTURE_SIDEBAR_WIDTH),
        View::AskEngine => Some(ASK_SIDEBAR_WIDTH),
        _ => None,
    }
}

/// The group shown in the sidebar list of `view`, if it has one.
fn sidebar_group(app: &App, view: View) -> Option<&SingleSelectionGroup<String>> {
    match view {
        View::Domains => Some(&app.domain_tabs),
        View::Architecture => Some(&app.architecture_groups),
        View::AskEngine => Some(&app.ask.filter_choice),
        _ => None,
    }
}

/// Splits the body of a sidebar view into `[list, below_list, pane]`.
fn sidebar_areas(body: Rect, width: u16, list_len: usize) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let [left, pane] = Layout::horizontal([Length(width), Min(0)])
        .spacing(1)
        .areas(body);
    let list_height = u16::try_from(list_len).unwrap_or(u16::MAX).saturating_add(2);
    let [list, rest] = Layout::vertical([Length(list_height), Min(0)]).areas(left);
    [list, rest, pane]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [nav_area, _, footer_area, status_area] = screen_areas(frame.area());
    let body = body_area(frame.area());
    let view = app.current_view();

    NavBar::new(&app.dataset.brand, view).render(frame, nav_area);

    tui.has_more_below = match view {
        View::AskEngine => draw_ask(frame, body, app, tui),
        View::Domains => draw_domains(frame, body, app, tui),
        View::Architecture => draw_architecture(frame, body, app, tui),
        View::DueDiligence => draw_due_diligence(frame, body, app, tui),
        _ => draw_page(frame, body, app, tui),
    };

    Footer::new(&app.dataset.brand).render(frame, footer_area);
    StatusBar::new(view, &app.status_message, tui.has_more_below).render(frame, status_area);
}

/// Renders `builder` into a scroll pane. Returns whether content remains
/// below the window.
fn render_pane(
    frame: &mut Frame,
    area: Rect,
    builder: ContentBuilder,
    tui: &mut TuiState,
    view: View,
    keep_visible: Option<usize>,
) -> bool {
    let lines = builder.finish();
    let content_height = lines.len();
    let state = tui.scroll_state(view);
    ScrollPane::new(lines, state)
        .keep_visible(keep_visible)
        .render(frame, area);
    has_more_below(state, content_height, area.height)
}

fn missing_page(builder: &mut ContentBuilder, view: View) {
    builder.title(view.label());
    builder.muted("No content for this view in the loaded dataset.");
}

fn page_header_or_placeholder(builder: &mut ContentBuilder, app: &App) {
    match app.current_page() {
        Some(page) => builder.page_header(page),
        None => missing_page(builder, app.current_view()),
    }
}

fn page_sections(builder: &mut ContentBuilder, app: &App) {
    if let Some(page) = app.current_page() {
        builder.page_sections(page);
    }
}

fn draw_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) -> bool {
    let mut builder = ContentBuilder::new(ScrollPane::content_width(area.width));
    match app.current_page() {
        Some(page) => builder.page(page),
        None => missing_page(&mut builder, app.current_view()),
    }
    render_pane(frame, area, builder, tui, app.current_view(), None)
}

fn draw_domains(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) -> bool {
    let [list_area, _, pane_area] =
        sidebar_areas(area, DOMAIN_SIDEBAR_WIDTH, app.domain_tabs.options().len());
    SelectionList::new("Domains", &app.domain_tabs)
        .help("↑↓")
        .render(frame, list_area);

    let mut builder = ContentBuilder::new(ScrollPane::content_width(pane_area.width));
    page_header_or_placeholder(&mut builder, app);
    if let Some(domain) = app.active_domain() {
        builder.heading(&domain.title);
        builder.muted(&domain.intro);
        builder.blank();
        for row in &domain.rows {
            builder.marked("▸ ", &row.name, Style::default().add_modifier(Modifier::BOLD));
            builder.indented(&row.detail, Style::default());
            if !row.coverage.is_empty() {
                builder.indented(
                    &format!("Coverage: {}", row.coverage),
                    Style::default().fg(Color::Gray),
                );
            }
        }
        builder.blank();
    }
    page_sections(&mut builder, app);
    render_pane(frame, pane_area, builder, tui, View::Domains, None)
}

fn draw_architecture(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) -> bool {
    let [list_area, _, pane_area] = sidebar_areas(
        area,
        ARCHITECTURE_SIDEBAR_WIDTH,
        app.architecture_groups.options().len(),
    );
    SelectionList::new("Layer groups", &app.architecture_groups)
        .help("↑↓")
        .render(frame, list_area);

    let mut builder = ContentBuilder::new(ScrollPane::content_width(pane_area.width));
    page_header_or_placeholder(&mut builder, app);
    if let Some(group) = app.active_layer_group() {
        builder.heading(&group.group);
        builder.blank();
        for layer in &group.layers {
            builder.paragraph_styled(&layer.name, Style::default().add_modifier(Modifier::BOLD));
            for bullet in &layer.bullets {
                builder.bullet(bullet);
            }
            builder.blank();
        }
    }
    page_sections(&mut builder, app);
    render_pane(frame, pane_area, builder, tui, View::Architecture, None)
}

fn draw_due_diligence(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) -> bool {
    let mut builder = ContentBuilder::new(ScrollPane::content_width(area.width));
    page_header_or_placeholder(&mut builder, app);
    let cursor_line = accordion_lines(
        &mut builder,
        &app.dataset.faq,
        &app.faq,
        tui.faq_cursor.index,
    );
    builder.blank();
    page_sections(&mut builder, app);
    // only follow the cursor when it moved, so PgDn can read past it
    let keep_visible = if std::mem::take(&mut tui.faq_cursor.reveal) {
        cursor_line
    } else {
        None
    };
    render_pane(frame, area, builder, tui, View::DueDiligence, keep_visible)
}

fn draw_ask(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) -> bool {
    let [list_area, rest, pane_area] = sidebar_areas(
        area,
        ASK_SIDEBAR_WIDTH,
        app.ask.filter_choice.options().len(),
    );
    SelectionList::new("Domain", &app.ask.filter_choice)
        .help("↑↓")
        .render(frame, list_area);

    let [question_area, hint_area] = Layout::vertical([
        Constraint::Length(QUESTION_FIELD_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(rest);
    tui.question.render(frame, question_area);
    let hint = Paragraph::new(Line::from(
        "Results are scripted examples for the selected domain. The question text is not sent anywhere.",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    frame.render_widget(hint, hint_area.inner(Margin::new(1, 1)));

    let mut builder = ContentBuilder::new(ScrollPane::content_width(pane_area.width));
    page_header_or_placeholder(&mut builder, app);
    builder.heading("Results");
    let filter = app.ask.predictions.applied_filter();
    if app.ask.runs == 0 {
        builder.muted("Press Enter to run a mock prediction.");
    } else if app.ask.predictions.is_fallback() {
        builder.muted(&format!(
            "No {filter} examples yet, showing all {} (run {}).",
            app.ask.results().len(),
            app.ask.runs
        ));
    } else {
        builder.muted(&format!("Domain: {filter} (run {}).", app.ask.runs));
    }
    builder.blank();
    prediction_cards(&mut builder, &app.ask.results());
    builder.blank();
    page_sections(&mut builder, app);
    render_pane(frame, pane_area, builder, tui, View::AskEngine, None)
}

/// Hit test: the view whose nav tab is at screen position `(column, row)`.
pub fn hit_test_nav(column: u16, row: u16, frame_area: Rect, current: View) -> Option<View> {
    let [nav_area, _, _, _] = screen_areas(frame_area);
    // tabs sit on the second nav line
    if nav_area.height < 2 || row != nav_area.y + 1 {
        return None;
    }
    let column = column.checked_sub(nav_area.x)?;
    if column >= nav_area.width {
        return None;
    }
    tab_at_column(column, tabs_offset(current, nav_area.width))
}

/// Hit test: the option index in the current view's sidebar list at
/// screen position `(column, row)`.
pub fn hit_test_sidebar(column: u16, row: u16, frame_area: Rect, app: &App) -> Option<usize> {
    let view = app.current_view();
    let width = sidebar_width(view)?;
    let group = sidebar_group(app, view)?;
    let len = group.options().len();
    let [list, _, _] = sidebar_areas(body_area(frame_area), width, len);

    // inside the border
    let inner = list.inner(Margin::new(1, 1));
    if !inner.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let offset = list_offset(group.active_index(), usize::from(inner.height));
    let index = offset + usize::from(row - inner.y);
    (index < len).then_some(index)
}
