use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tasks::TaskList;
use crate::theme::Theme;

pub struct TaskListView;

impl TaskListView {
    pub fn render(frame: &mut Frame, area: Rect, tasks: &TaskList, selected: usize, theme: &Theme) {
        let w = area.width as usize;

        let title = if w >= 25 {
            format!(" Tasks ({}) ", tasks.len())
        } else {
            " Tasks ".to_string()
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        if tasks.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No tasks. Press a to add one, v to speak.").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        const ACTIONS: &str = " [m]ark [d]elete";

        // Rows are rebuilt every frame; the selection indexes the current list.
        let items: Vec<ListItem> = tasks
            .rows()
            .into_iter()
            .map(|row| {
                let is_selected = row.index == selected;
                let label_style = if is_selected {
                    theme.selected
                } else if row.done {
                    theme.done
                } else {
                    Style::default()
                };

                let room = if is_selected {
                    inner_w.saturating_sub(ACTIONS.len())
                } else {
                    inner_w
                };
                let mut spans = vec![Span::styled(truncate(&row.label, room), label_style)];
                if is_selected && inner_w > ACTIONS.len() + 8 {
                    spans.push(Span::styled(ACTIONS, theme.dim));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(selected.min(tasks.len() - 1)));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}
