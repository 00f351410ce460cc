pub mod color;
pub mod config;
pub mod palette;
pub mod theme;

pub use color::HexColor;
pub use config::EditorConfig;
pub use palette::style_of;
pub use theme::{
    builtin_dark, builtin_light, ChromeColors, RandomStringColors, SurfaceColors, SyntaxColors,
    ThemeDefinition,
};
