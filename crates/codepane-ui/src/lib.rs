//! egui front end: the `CodeSurface` widget and a small demo host around it.

pub mod app;
pub mod editor;

pub use app::{App, StartupArgs, ThemeMode};
pub use editor::{CodeSurface, CodeSurfaceOutput, EditorTheme};
