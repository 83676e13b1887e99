// File: crates/signline-core/src/theme.rs
// Summary: RGB color type, the named palette table and the four-color chart scheme.

/// Opaque RGB color. Backends convert it to their own color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const SHADE_FACTOR: f64 = 0.7;

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel down by the shade factor.
    pub fn darker(self) -> Self {
        let d = |c: u8| (c as f64 * SHADE_FACTOR).floor() as u8;
        Self::rgb(d(self.r), d(self.g), d(self.b))
    }

    /// Scale every channel up by the inverse shade factor. Pure black lifts to a
    /// dark gray so repeated brightening always makes progress.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::rgb(floor, floor, floor);
        }
        let u = |c: u8| {
            let c = if c > 0 && c < floor { floor } else { c };
            ((c as f64 / SHADE_FACTOR) as u32).min(255) as u8
        };
        Self::rgb(u(self.r), u(self.g), u(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Color;

    pub const GRAY: Color = Color::rgb(33, 33, 33);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const SAND: Color = Color::rgb(229, 215, 202);
    pub const DROPBOX: Color = Color::rgb(0, 139, 211);
    pub const RED: Color = Color::rgb(177, 34, 34);
    pub const TEAL: Color = Color::rgb(0, 150, 150);
    pub const CRIMSON: Color = Color::rgb(250, 0, 50);
    pub const MINT: Color = Color::rgb(84, 197, 143);
    pub const MUSTARD: Color = Color::rgb(210, 180, 10);
    pub const NAVY: Color = Color::rgb(0, 86, 124);
    pub const BROWN: Color = Color::rgb(101, 80, 59);
    pub const BLUE: Color = Color::rgb(0, 188, 212);
    pub const GREEN: Color = Color::rgb(205, 220, 57);
    pub const ORANGE: Color = Color::rgb(255, 87, 34);
    pub const PINK: Color = Color::rgb(233, 30, 99);
    pub const YELLOW: Color = Color::rgb(255, 193, 7);
    pub const INCOME_GREEN: Color = Color::rgb(121, 166, 37);

    /// Every named color, in declaration order.
    pub const TABLE: &[(&str, Color)] = &[
        ("gray", GRAY),
        ("white", WHITE),
        ("sand", SAND),
        ("dropbox", DROPBOX),
        ("red", RED),
        ("teal", TEAL),
        ("crimson", CRIMSON),
        ("mint", MINT),
        ("mustard", MUSTARD),
        ("navy", NAVY),
        ("brown", BROWN),
        ("blue", BLUE),
        ("green", GREEN),
        ("orange", ORANGE),
        ("pink", PINK),
        ("yellow", YELLOW),
        ("income-green", INCOME_GREEN),
    ];

    /// Find a palette color by name (case-insensitive).
    pub fn find(name: &str) -> Option<Color> {
        TABLE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }
}

/// The four configurable chart colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub positive: Color,
    pub negative: Color,
    pub background: Color,
    pub foreground: Color,
}

impl Theme {
    /// Color used for values on the given side of the zero row.
    pub fn sign_color(&self, non_negative: bool) -> Color {
        if non_negative { self.positive } else { self.negative }
    }

    /// Axis lines: the background brightened three times.
    pub fn axis(&self) -> Color {
        self.background.brighter().brighter().brighter()
    }

    /// Mean band: the background darkened once.
    pub fn mean(&self) -> Color {
        self.background.darker()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            positive: palette::GREEN,
            negative: palette::PINK,
            background: palette::GRAY,
            foreground: palette::WHITE,
        }
    }
}
