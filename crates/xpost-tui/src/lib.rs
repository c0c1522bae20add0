pub mod animation;
pub mod app;
pub mod engagement;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod page_view;
pub mod text;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::{App, Effect};
pub use theme::Theme;
pub use themes::load_theme;
