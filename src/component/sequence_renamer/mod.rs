//! 序號複製重新命名元件
//!
//! 將資料夾中的檔案依檔名排序，以 `%n` 樣式與補零序號複製到目標資料夾

mod engine;
mod error;
mod main;
mod pattern;

pub use engine::{
    PlannedRename, PreparedCopy, RenameOutcome, RenameRequest, STAGING_PREFIX, plan_files,
    rename_files,
};
pub use error::SequenceError;
pub use main::{NO_FILES_MESSAGE, SUCCESS_MESSAGE, SequenceRenamer, failure_message};
pub use pattern::{COUNTER_PLACEHOLDER, format_counter, resolve_extension, target_file_name};
