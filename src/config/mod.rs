pub mod settings;

pub use settings::{check_hijri_offset, AppConfig};
