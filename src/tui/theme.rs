use ratatui::style::Color;

/// Catppuccin variant to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeVariant {
    /// Dark (default)
    #[default]
    Mocha,
    /// Light
    Latte,
}

/// The subset of the Catppuccin palette this app actually uses.
#[derive(Debug, Clone)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub subtext: Color,
    pub blue: Color,
    pub lavender: Color,
    pub mauve: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub teal: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self {
                base: Color::Rgb(0x1e, 0x1e, 0x2e),
                surface: Color::Rgb(0x31, 0x32, 0x44),
                overlay: Color::Rgb(0x6c, 0x70, 0x86),
                text: Color::Rgb(0xcd, 0xd6, 0xf4),
                subtext: Color::Rgb(0xa6, 0xad, 0xc8),
                blue: Color::Rgb(0x89, 0xb4, 0xfa),
                lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
                mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
                green: Color::Rgb(0xa6, 0xe3, 0xa1),
                yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
                peach: Color::Rgb(0xfa, 0xb3, 0x87),
                red: Color::Rgb(0xf3, 0x8b, 0xa8),
                teal: Color::Rgb(0x94, 0xe2, 0xd5),
            },
            ThemeVariant::Latte => Self {
                base: Color::Rgb(0xef, 0xf1, 0xf5),
                surface: Color::Rgb(0xcc, 0xd0, 0xda),
                overlay: Color::Rgb(0x9c, 0xa0, 0xb0),
                text: Color::Rgb(0x4c, 0x4f, 0x69),
                subtext: Color::Rgb(0x6c, 0x6f, 0x85),
                blue: Color::Rgb(0x1e, 0x66, 0xf5),
                lavender: Color::Rgb(0x72, 0x87, 0xfd),
                mauve: Color::Rgb(0x88, 0x39, 0xef),
                green: Color::Rgb(0x40, 0xa0, 0x2b),
                yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
                peach: Color::Rgb(0xfe, 0x64, 0x0b),
                red: Color::Rgb(0xd2, 0x0f, 0x39),
                teal: Color::Rgb(0x17, 0x92, 0x99),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::Mocha)
    }
}
