use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

impl DialogKind {
    fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A modal message drawn over the main window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App, dialog: Option<&Dialog>) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // instructions
            Constraint::Min(3),    // text box
            Constraint::Length(3), // footer
        ])
        .split(size);

    let label = Paragraph::new(app.instructions.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add Reminders from List"),
        );
    frame.render_widget(label, chunks[0]);

    draw_entry(frame, app, chunks[1], dialog.is_none());

    let (title, content) = if app.working {
        ("Status", "Adding reminders, please wait...".to_string())
    } else {
        (
            "Keys",
            "Ctrl+S / F2 add reminders | Enter new line | Esc close".to_string(),
        )
    };
    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(footer, chunks[2]);

    if let Some(dialog) = dialog {
        draw_dialog(frame, dialog, size);
    }
}

fn draw_entry(frame: &mut Frame, app: &App, area: Rect, show_cursor: bool) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;
    let (row, _) = app.entry.cursor();
    let col = app.entry.display_column();
    let v_scroll = row.saturating_sub(inner_height.saturating_sub(1));
    let h_scroll = col.saturating_sub(inner_width.saturating_sub(1));

    let lines: Vec<Line> = app
        .entry
        .lines()
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();
    let border_style = if app.working {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let text_box = Paragraph::new(lines)
        .scroll((v_scroll as u16, h_scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Tasks"),
        );
    frame.render_widget(text_box, area);

    if show_cursor && !app.working && inner_height > 0 && inner_width > 0 {
        let x = area.x + 1 + (col - h_scroll) as u16;
        let y = area.y + 1 + (row - v_scroll) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn draw_dialog(frame: &mut Frame, dialog: &Dialog, size: Rect) {
    let area = centered_rect(70, 60, size);
    let color = dialog.kind.color();

    let mut lines: Vec<Line> = dialog.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", dialog.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::ImportSettings;

    fn render(app: &App, dialog: Option<&Dialog>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, app, dialog)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn main_window_explains_syntax() {
        let app = App::new(&ImportSettings::default());
        let screen = render(&app, None);
        assert!(screen.contains("Add Reminders from List"));
        assert!(screen.contains("CATEGORY: Your Category Name"));
        assert!(screen.contains("'Reminders' list"));
        assert!(screen.contains("Ctrl+S"));
    }

    #[test]
    fn typed_text_is_visible() {
        let mut app = App::new(&ImportSettings::default());
        app.entry.insert_str("Buy milk\nCATEGORY: Work");
        let screen = render(&app, None);
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("CATEGORY: Work"));
    }

    #[test]
    fn dialog_is_drawn_on_top() {
        let app = App::new(&ImportSettings::default());
        let dialog = Dialog::new(DialogKind::Warning, "Category Issue", "Line 2: Couldn't use category 'X'.");
        let screen = render(&app, Some(&dialog));
        assert!(screen.contains("Category Issue"));
        assert!(screen.contains("Couldn't use category 'X'."));
        assert!(screen.contains("Press Enter to continue"));
    }

    #[test]
    fn cursor_accounts_for_wide_chars() {
        let mut app = App::new(&ImportSettings::default());
        app.entry.insert_str("a\n日本");
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, &app, None)).unwrap();
        // text box starts below the 8-row instructions; +1 for its border
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(5, 10));
    }

    #[test]
    fn working_footer() {
        let mut app = App::new(&ImportSettings::default());
        app.working = true;
        assert!(render(&app, None).contains("Adding reminders, please wait..."));
    }
}
