use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub cursor: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub override_marker: Color,
    pub weekday_header: Color,
    pub switch_on: Color,
    pub switch_off: Color,
    pub focus: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            cursor: Color::DarkGray,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            override_marker: Color::Magenta,
            weekday_header: Color::Yellow,
            switch_on: Color::Green,
            switch_off: Color::Red,
            focus: Color::Cyan,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            cursor: Color::Rgb(80, 73, 69),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            override_marker: Color::Rgb(211, 134, 155),
            weekday_header: Color::Rgb(254, 128, 25),
            switch_on: Color::Rgb(184, 187, 38),
            switch_off: Color::Rgb(251, 73, 52),
            focus: Color::Rgb(131, 165, 152),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            cursor: Color::Rgb(67, 76, 94),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            override_marker: Color::Rgb(180, 142, 173),
            weekday_header: Color::Rgb(235, 203, 139),
            switch_on: Color::Rgb(163, 190, 140),
            switch_off: Color::Rgb(191, 97, 106),
            focus: Color::Rgb(129, 161, 193),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn is_known(name: &str) -> bool {
        Self::available_themes().contains(&name.to_lowercase().as_str())
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
