use chrono::NaiveTime;
use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use crate::clock::{hand_tip, HandAngles};
use crate::theme::Theme;

const MIN_WIDTH: u16 = 8;
const MIN_HEIGHT: u16 = 4;

pub struct ClockFace;

impl ClockFace {
    /// Draws the analog clock. Areas too small to hold a face are skipped.
    pub fn render(frame: &mut Frame, area: Rect, time: NaiveTime, theme: &Theme) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        let angles = HandAngles::at(&time);
        let hands = [
            (angles.hour, 0.5, theme.hour_hand),
            (angles.minute, 0.8, theme.minute_hand),
            (angles.second, 0.9, theme.second_hand),
        ];
        let rim = theme.border.fg.unwrap_or_default();

        let block = Block::default()
            .title(format!(" {} ", time.format("%H:%M:%S")))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        // Terminal cells are about twice as tall as wide.
        let inner = block.inner(area);
        let aspect = f64::from(inner.width.max(1)) / (2.0 * f64::from(inner.height.max(1)));
        let (x_span, y_span) = if aspect >= 1.0 { (aspect, 1.0) } else { (1.0, 1.0 / aspect) };

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-x_span, x_span])
            .y_bounds([-y_span, y_span])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: rim,
                });
                for (degrees, len, color) in hands {
                    let (x, y) = hand_tip(degrees, len);
                    ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, color));
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;

    #[test]
    fn draws_time_in_title() {
        let time = NaiveTime::from_hms_opt(9, 41, 7).unwrap();
        let screen = render_to_string(24, 12, |frame| {
            let area = frame.area();
            ClockFace::render(frame, area, time, &Theme::default());
        });
        assert!(screen.contains("09:41:07"));
    }

    #[test]
    fn tiny_area_is_skipped() {
        let time = NaiveTime::from_hms_opt(9, 41, 7).unwrap();
        let screen = render_to_string(6, 3, |frame| {
            let area = frame.area();
            ClockFace::render(frame, area, time, &Theme::default());
        });
        assert!(screen.trim().is_empty());
    }
}
