use crate::employee::Employee;
use crate::tui::app::{App, Focus, ResultsView};
use crate::tui::colors;
use crate::tui::dialog::DetailDialog;
use crate::tui::form::FormField;
use crate::tui::table::TableState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title strip
            Constraint::Length(7), // Criteria form
            Constraint::Min(5),    // Results area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_strip(frame, chunks[0]);
    draw_form(frame, app, chunks[1]);
    draw_results(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    if let Some(ref dialog) = app.detail {
        draw_detail_dialog(frame, dialog, area);
    }
}

fn draw_title_strip(frame: &mut Frame, area: Rect) {
    let title = format!(" EmSearch - Employee Directory  v{} ", crate::VERSION);

    let mut spans = vec![Span::styled(
        title.clone(),
        Style::default()
            .fg(Color::White)
            .bg(colors::CHROME_BG)
            .add_modifier(Modifier::BOLD),
    )];

    // Fill rest with background
    let remaining = (area.width as usize).saturating_sub(title.width());
    if remaining > 0 {
        spans.push(Span::styled(
            " ".repeat(remaining),
            Style::default().bg(colors::CHROME_BG),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let form_focused = app.focus == Focus::Form && app.detail.is_none();

    let border_style = if form_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search Criteria ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_w = 14u16;
    let field_w = inner.width.saturating_sub(label_w + 1);

    // Helper to draw a text field with placeholder
    let draw_field =
        |frame: &mut Frame, y: u16, label: &str, value: &str, placeholder: &str, focused: bool| {
            let label_area = Rect::new(inner.x + 1, y, label_w, 1);
            let value_area = Rect::new(inner.x + label_w + 1, y, field_w.saturating_sub(1), 1);

            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(Paragraph::new(label).style(label_style), label_area);

            let bg = if focused {
                Color::Rgb(0, 50, 70)
            } else {
                Color::Rgb(30, 30, 40)
            };
            let (display, style) = if value.is_empty() {
                (
                    placeholder.to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .bg(bg)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                (value.to_string(), Style::default().fg(Color::White).bg(bg))
            };
            frame.render_widget(Paragraph::new(display).style(style), value_area);
        };

    let mut y = inner.y;

    draw_field(
        frame,
        y,
        " Employee no.:",
        &form.employee_number,
        "e.g. DC0001",
        form_focused && form.focused_field == FormField::EmployeeNumber,
    );
    y += 1;
    frame.render_widget(
        Paragraph::new("   up to 10 alphanumeric characters")
            .style(Style::default().fg(Color::DarkGray)),
        Rect::new(inner.x + label_w + 1, y, field_w.saturating_sub(1), 1),
    );
    y += 1;

    draw_field(
        frame,
        y,
        " Name:",
        &form.name,
        "e.g. 山田 太郎",
        form_focused && form.focused_field == FormField::Name,
    );
    y += 1;
    frame.render_widget(
        Paragraph::new("   partial match, up to 50 characters")
            .style(Style::default().fg(Color::DarkGray)),
        Rect::new(inner.x + label_w + 1, y, field_w.saturating_sub(1), 1),
    );
    y += 1;

    // Buttons row
    let search_label = if matches!(app.view, ResultsView::Loading) {
        " [ Searching... ] "
    } else {
        " [ Search ] "
    };
    let search_style = if form_focused && form.focused_field == FormField::Search {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let clear_style = if form_focused && form.focused_field == FormField::Clear {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let buttons = Line::from(vec![
        Span::raw("    "),
        Span::styled(search_label, search_style),
        Span::raw("    "),
        Span::styled(" [ Clear ] ", clear_style),
    ]);
    frame.render_widget(
        Paragraph::new(buttons),
        Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1),
    );

    // Show cursor on the focused text input
    if form_focused && form.focused_field.is_text_input() {
        let (text, cursor, cursor_y) = match form.focused_field {
            FormField::EmployeeNumber => (
                form.employee_number.as_str(),
                form.employee_number_cursor,
                inner.y,
            ),
            _ => (form.name.as_str(), form.name_cursor, inner.y + 2),
        };
        // Display columns, not bytes: names may be double-width
        let cursor_x = inner.x + label_w + 1 + text[..cursor].width() as u16;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    // Visible rows: area height minus borders minus header
    app.table.visible_rows = area.height.saturating_sub(3) as usize;

    match &app.view {
        ResultsView::Idle => {} // initial state renders nothing
        ResultsView::Loading => draw_loading(frame, app.spinner_frame, area),
        ResultsView::Error(message) => draw_error(frame, message, area),
        ResultsView::Empty => draw_empty(frame, area),
        ResultsView::Results(results) => draw_table(frame, &app.table, results, area),
    }
}

fn draw_loading(frame: &mut Frame, spinner_frame: usize, area: Rect) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let popup_area = centered_rect(24, 3, area);

    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::styled(" Searching...", Style::default().fg(Color::Gray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect::new(popup_area.x, popup_area.y + 1, popup_area.width, 1),
    );
}

fn draw_error(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    let height = 4u16.min(area.height);
    let panel = Rect::new(area.x, area.y, area.width, height);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(44, 4, area);

    frame.render_widget(
        Paragraph::new("No matching employees found.")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        Rect::new(popup_area.x, popup_area.y + 1, popup_area.width, 1),
    );
    frame.render_widget(
        Paragraph::new("Try changing the search criteria.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        Rect::new(popup_area.x, popup_area.y + 2, popup_area.width, 1),
    );
}

fn draw_table(frame: &mut Frame, table: &TableState, results: &[Employee], area: Rect) {
    let header = Row::new(
        ["Employee No.", "Name", "Department", "Status"]
            .into_iter()
            .map(|name| {
                Cell::from(name).style(
                    Style::default()
                        .fg(Color::White)
                        .bg(colors::HEADER_BG)
                        .add_modifier(Modifier::BOLD),
                )
            }),
    )
    .height(1);

    // Build visible rows only
    let start = table.scroll_offset;
    let end = (start + table.visible_rows).min(results.len());

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, logical_idx)| {
            let employee = &results[logical_idx];
            let is_selected = table.selected == Some(logical_idx);

            // Alternating row background
            let bg = if is_selected {
                colors::ROW_SELECTED_BG
            } else if visual_idx % 2 == 1 {
                colors::ROW_ALT_BG
            } else {
                Color::Reset
            };

            let fg_modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            Row::new(vec![
                Cell::from(employee.employee_number.clone()).style(
                    Style::default().fg(Color::White).bg(bg).add_modifier(fg_modifier),
                ),
                Cell::from(employee.name.clone()).style(
                    Style::default()
                        .fg(Color::LightBlue)
                        .bg(bg)
                        .add_modifier(fg_modifier),
                ),
                Cell::from(employee.department.clone())
                    .style(Style::default().fg(Color::Gray).bg(bg)),
                Cell::from(employee.status.label()).style(
                    Style::default()
                        .fg(colors::status_color(employee.status))
                        .bg(bg),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(14),
    ];

    let results_table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Search Results ({}) ", results.len())),
    );

    frame.render_widget(results_table, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = match &app.view {
        ResultsView::Loading => " \u{23F3} Searching...".to_string(),
        ResultsView::Results(results) => format!(" {} employees found", results.len()),
        ResultsView::Empty => " 0 employees found".to_string(),
        ResultsView::Error(_) => " Error".to_string(),
        ResultsView::Idle => " Ready".to_string(),
    };

    let right_text = " Tab:Fields  Enter:Search  \u{2191}\u{2193}:Rows  Ctrl+L:Clear  Ctrl+Q:Quit ";

    // Left-aligned state + padding + right-aligned key hints
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::HEADER_BG));

    frame.render_widget(status, area);
}

/// Helper to create a centered popup area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_detail_dialog(frame: &mut Frame, dialog: &DetailDialog, area: Rect) {
    let max_line_len = dialog.lines.iter().map(|l| l.width()).max().unwrap_or(20);
    let width = ((max_line_len + 4) as u16)
        .max(30)
        .min(area.width.saturating_sub(4));
    let height = ((dialog.lines.len() + 3) as u16).min(area.height.saturating_sub(4));
    let popup_area = centered_rect(width, height, area);

    frame.render_widget(Clear, popup_area);

    let title = format!(" {} ", dialog.title);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    for (i, line) in dialog.lines.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let line_area = Rect::new(inner.x + 1, inner.y + i as u16, inner.width.saturating_sub(2), 1);
        frame.render_widget(
            Paragraph::new(line.as_str()).style(Style::default().fg(Color::White)),
            line_area,
        );
    }
}
