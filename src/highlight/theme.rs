use super::highlight::Style;

/// 24-bit terminal colour.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;

        let channel = |h: f64| {
            let h = if h < 0.0 {
                h + 1.0
            } else if h > 1.0 {
                h - 1.0
            } else {
                h
            };

            let value = if h * 6.0 < 1.0 {
                m1 + (m2 - m1) * h * 6.0
            } else if h * 2.0 < 1.0 {
                m2
            } else if h * 3.0 < 2.0 {
                m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
            } else {
                m1
            };

            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Color {
            red: channel(h + 1.0 / 3.0),
            green: channel(h),
            blue: channel(h - 1.0 / 3.0),
        }
    }

    pub fn ansi_background(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.red, self.green, self.blue)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct StyleSpec {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl StyleSpec {
    pub const fn plain(color: Color) -> StyleSpec {
        StyleSpec {
            color,
            bold: false,
            italic: false,
        }
    }

    /// Foreground escape sequence; bold and italic are always set or reset so
    /// switching styles never leaks attributes.
    pub fn ansi(&self) -> String {
        format!(
            "\x1b[38;2;{};{};{};{};{}m",
            self.color.red,
            self.color.green,
            self.color.blue,
            if self.bold { 1 } else { 22 },
            if self.italic { 3 } else { 23 }
        )
    }
}

pub const RESET: &str = "\x1b[m";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    styles: [StyleSpec; 9],
}

impl Theme {
    pub fn one_dark() -> Theme {
        let keyword = StyleSpec::plain(Color::hsl(286.0, 60.0, 67.0));
        let cyan = StyleSpec::plain(Color::hsl(187.0, 47.0, 55.0));

        Theme {
            name: "one-dark",
            background: Color::hsl(220.0, 13.0, 18.0),
            styles: [
                StyleSpec::plain(Color::hsl(220.0, 14.0, 71.0)),
                StyleSpec {
                    color: Color::hsl(220.0, 10.0, 40.0),
                    bold: false,
                    italic: true,
                },
                keyword,
                keyword,
                cyan,
                StyleSpec::plain(Color::hsl(29.0, 54.0, 61.0)),
                StyleSpec::plain(Color::hsl(95.0, 38.0, 62.0)),
                cyan,
                StyleSpec::plain(Color::hsl(207.0, 82.0, 66.0)),
            ],
        }
    }

    /// Styles are stored in declaration order of [`Style`].
    pub fn spec(&self, style: Style) -> &StyleSpec {
        &self.styles[style as usize]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::one_dark()
    }
}
