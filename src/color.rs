//! Terminal color aliases and the palette used by the colorizer.
//!
//! Colors are applied as ANSI SGR foreground codes. A [`Palette`] maps the
//! semantic [`Role`] of a piece of text (key, value, number, ...) to a
//! [`Color`], and is passed to the colorizer explicitly rather than living in
//! process-wide state.

use core::fmt;
use core::str::FromStr;

/// SGR sequence that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Environment variable holding palette overrides.
///
/// Format: `key:value:number:anchor:comment:default`, each entry a color
/// name such as `light-blue`. Empty entries keep the default.
pub const COLORS_ENV: &str = "UTL_COLORS";

/// Foreground colors, named after their ANSI codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    LightRed,
    Green,
    LightGreen,
    Yellow,
    LightYellow,
    Blue,
    LightBlue,
    Magenta,
    LightMagenta,
    Cyan,
    LightCyan,
    White,
    LightWhite,
    DarkGray,
}

impl Color {
    /// Every color, in the order [`color_samples`] prints them.
    pub const ALL: [Color; 15] = [
        Color::LightRed,
        Color::LightBlue,
        Color::Green,
        Color::Yellow,
        Color::White,
        Color::Cyan,
        Color::LightMagenta,
        Color::DarkGray,
        Color::Red,
        Color::Blue,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightWhite,
        Color::LightCyan,
        Color::Magenta,
    ];

    /// The SGR foreground parameter for this color.
    pub fn sgr(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::DarkGray => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::LightWhite => 97,
        }
    }

    /// Kebab-case name, as accepted by [`Color::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::LightRed => "light-red",
            Color::Green => "green",
            Color::LightGreen => "light-green",
            Color::Yellow => "yellow",
            Color::LightYellow => "light-yellow",
            Color::Blue => "blue",
            Color::LightBlue => "light-blue",
            Color::Magenta => "magenta",
            Color::LightMagenta => "light-magenta",
            Color::Cyan => "cyan",
            Color::LightCyan => "light-cyan",
            Color::White => "white",
            Color::LightWhite => "light-white",
            Color::DarkGray => "dark-gray",
        }
    }

    /// Wrap `text` in this color. Empty text is returned unchanged.
    pub fn paint(self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("\x1b[{}m{}{}", self.sgr(), text, RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}'", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Semantic role of a colored span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Mapping keys and scalars that precede a `:` separator
    Key,
    /// Ordinary string scalars
    Value,
    /// Integers, floats and booleans
    Number,
    /// Anchor and alias markers and their names
    Anchor,
    /// Comments
    Comment,
    /// Everything else (punctuation, null, tags, ...)
    Default,
}

/// Mapping from [`Role`] to the color used to paint it.
///
/// `None` leaves text of that role unpainted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub key: Option<Color>,
    pub value: Option<Color>,
    pub number: Option<Color>,
    pub anchor: Option<Color>,
    pub comment: Option<Color>,
    pub default: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            key: Some(Color::LightBlue),
            value: Some(Color::Green),
            number: Some(Color::LightMagenta),
            anchor: Some(Color::Yellow),
            comment: Some(Color::White),
            default: Some(Color::White),
        }
    }
}

impl Palette {
    /// A palette that paints nothing.
    pub fn monochrome() -> Self {
        Palette {
            key: None,
            value: None,
            number: None,
            anchor: None,
            comment: None,
            default: None,
        }
    }

    /// Default palette with overrides from the `UTL_COLORS` variable.
    pub fn from_env() -> Self {
        match std::env::var(COLORS_ENV) {
            Ok(spec) => Palette::default().with_overrides(&spec),
            Err(_) => Palette::default(),
        }
    }

    /// Apply a `key:value:number:anchor:comment:default` override list.
    ///
    /// Empty entries keep the current color; unknown names are logged and
    /// ignored.
    pub fn with_overrides(mut self, spec: &str) -> Self {
        for (idx, name) in spec.split(':').enumerate() {
            if name.trim().is_empty() {
                continue;
            }
            let slot = match idx {
                0 => &mut self.key,
                1 => &mut self.value,
                2 => &mut self.number,
                3 => &mut self.anchor,
                4 => &mut self.comment,
                5 => &mut self.default,
                _ => {
                    log::warn!("{}: ignoring extra entry '{}'", COLORS_ENV, name);
                    continue;
                }
            };
            match name.parse::<Color>() {
                Ok(color) => *slot = Some(color),
                Err(err) => log::warn!("{}: {}", COLORS_ENV, err),
            }
        }
        self
    }

    /// Color assigned to `role`, if any.
    pub fn color(&self, role: Role) -> Option<Color> {
        match role {
            Role::Key => self.key,
            Role::Value => self.value,
            Role::Number => self.number,
            Role::Anchor => self.anchor,
            Role::Comment => self.comment,
            Role::Default => self.default,
        }
    }

    /// Paint `text` in the color of `role`.
    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.color(role) {
            Some(color) => color.paint(text),
            None => text.to_string(),
        }
    }
}

/// Remove ANSI SGR sequences (`ESC [ ... m`) from `text`.
///
/// Useful for measuring the printable width of colored output.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for p in chars.by_ref() {
                if p.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// One sample line per color alias, for eyeballing a terminal theme.
pub fn color_samples() -> Vec<String> {
    const SAMPLE: &str = "!@#$%#$%&#%*^2314897123589";
    Color::ALL
        .iter()
        .map(|c| format!("{:<14}{}", c.name(), c.paint(SAMPLE)))
        .collect()
}
