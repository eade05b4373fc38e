//! Terminal implementations of the profile screen's collaborators.

mod file_picker;
mod image_loader;
mod navigator;
mod notifier;

pub use file_picker::PathFilePicker;
pub use image_loader::HttpImageLoader;
pub use navigator::RecordingNavigator;
pub use notifier::{Notification, TerminalNotifier};
