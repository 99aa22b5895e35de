use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{CalendarView, MonthGrid};
use crate::theme::Theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, view: CalendarView, grid: &MonthGrid, theme: &Theme) {
        let block = Block::default()
            .title(format!(" {} ", view.title()))
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(" [ prev  ] next ", theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Header row
        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:^5}", d), theme.header))
            .collect();
        let header = Line::from(header_cells);

        let weeks: Vec<Line> = grid
            .weeks
            .iter()
            .map(|week| {
                let cells: Vec<Span> = week
                    .iter()
                    .map(|cell| match cell.day {
                        Some(day) => {
                            let style = if cell.today { theme.today } else { Style::default() };
                            Span::styled(format!(" {:>2}  ", day), style)
                        }
                        None => Span::raw("     "),
                    })
                    .collect();
                Line::from(cells)
            })
            .collect();

        // Layout: header + weeks
        let mut constraints = vec![Constraint::Length(1)];
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }
    }
}
