pub mod app;
pub mod command;
pub mod runner;
pub mod runtime;
pub mod slideshow;
pub mod subscription;
pub mod theme;

pub use app::App;
pub use command::Command;
pub use runtime::Runtime;
pub use slideshow::{Slideshow, SlideshowState};
pub use subscription::Subscription;
pub use theme::{Theme, ThemeVariant};
