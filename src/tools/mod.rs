mod file_mover;
mod file_scanner;
mod path_validator;

pub use file_mover::{move_file, move_file_with};
pub use file_scanner::{FileEntry, scan_top_level_files};
pub use path_validator::{is_existing_directory, validate_directory_exists};
