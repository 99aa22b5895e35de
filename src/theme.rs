use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub base: Style,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub done: Style,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            base: Style::default().fg(Color::Black).bg(Color::Rgb(250, 248, 240)),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::White).bg(Color::Blue),
            done: Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            hour_hand: Color::Black,
            minute_hand: Color::DarkGray,
            second_hand: Color::Red,
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "night" => Self::night(),
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn night() -> Self {
        Self {
            name: "night".to_string(),
            base: Style::default().fg(Color::Gray).bg(Color::Rgb(24, 26, 33)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(230, 180, 80)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(90, 140, 200)),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Rgb(60, 64, 78)),
            status: Style::default().fg(Color::White).bg(Color::Rgb(45, 48, 60)),
            done: Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            hour_hand: Color::White,
            minute_hand: Color::Gray,
            second_hand: Color::LightRed,
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            base: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(40, 42, 54)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(189, 147, 249)), // purple
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)), // cyan
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            done: Style::default()
                .fg(Color::Rgb(98, 114, 164))
                .add_modifier(Modifier::CROSSED_OUT),
            hour_hand: Color::Rgb(248, 248, 242),
            minute_hand: Color::Rgb(139, 233, 253),
            second_hand: Color::Rgb(255, 85, 85),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            base: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(40, 40, 40)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)), // aqua
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            done: Style::default()
                .fg(Color::Rgb(146, 131, 116))
                .add_modifier(Modifier::CROSSED_OUT),
            hour_hand: Color::Rgb(235, 219, 178),
            minute_hand: Color::Rgb(131, 165, 152),
            second_hand: Color::Rgb(251, 73, 52),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            base: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(46, 52, 64)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(235, 203, 139)), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)), // frost
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            done: Style::default()
                .fg(Color::Rgb(76, 86, 106))
                .add_modifier(Modifier::CROSSED_OUT),
            hour_hand: Color::Rgb(229, 233, 240),
            minute_hand: Color::Rgb(136, 192, 208),
            second_hand: Color::Rgb(191, 97, 106),
        }
    }
}

/// Day and night palettes; night mode picks between them.
#[derive(Debug, Clone)]
pub struct Themes {
    pub day: Theme,
    pub night: Theme,
}

impl Default for Themes {
    fn default() -> Self {
        ThemeConfig::default().into_themes()
    }
}

impl Themes {
    pub fn active(&self, night_mode: bool) -> &Theme {
        if night_mode {
            &self.night
        } else {
            &self.day
        }
    }
}

// ── TOML config types ──

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub day: Option<String>,
    pub night: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
}

impl ThemeConfig {
    pub fn into_themes(self) -> Themes {
        let day = self.apply_overrides(Theme::preset(self.day.as_deref().unwrap_or("default")));
        let night = self.apply_overrides(Theme::preset(self.night.as_deref().unwrap_or("night")));
        Themes { day, night }
    }

    // Overrides apply to both palettes.
    fn apply_overrides(&self, mut theme: Theme) -> Theme {
        if let Some(c) = self.today_fg.as_deref().and_then(parse_color) {
            theme.today = theme.today.fg(c);
        }
        if let Some(c) = self.today_bg.as_deref().and_then(parse_color) {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = self.selected_fg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.fg(c);
        }
        if let Some(c) = self.selected_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.header_fg.as_deref().and_then(parse_color) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}
