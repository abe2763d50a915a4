pub mod formatting;

pub use formatting::{format_file_size, format_precise_percent, format_whole_percent};
