//! 序號重新命名的錯誤類型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Source directory does not exist: {}", .0.display())]
    SourceDirectoryMissing(PathBuf),

    #[error("Target directory does not exist: {}", .0.display())]
    TargetDirectoryMissing(PathBuf),

    #[error("Invalid destination pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to read source directory {}: {source}", .directory.display())]
    SourceUnreadable {
        directory: PathBuf,
        source: io::Error,
    },

    #[error("Failed to create staging directory: {0}")]
    StagingArea(#[source] io::Error),

    /// 複製到暫存區失敗，整批中止且目標資料夾未被變更
    #[error("Failed to copy {} to {}: {source}", .source_path.display(), .staging_path.display())]
    Staging {
        source_path: PathBuf,
        staging_path: PathBuf,
        source: io::Error,
    },

    /// 搬移到目標位置失敗，先前已搬移的檔案不會還原
    #[error("Failed to move {} to {}: {source}", .staging_path.display(), .final_path.display())]
    Commit {
        staging_path: PathBuf,
        final_path: PathBuf,
        source: io::Error,
    },
}

impl SequenceError {
    /// 是否為變更任何檔案前即偵測到的資料夾錯誤
    #[must_use]
    pub const fn is_missing_directory(&self) -> bool {
        matches!(
            self,
            Self::SourceDirectoryMissing(_) | Self::TargetDirectoryMissing(_)
        )
    }
}
