//! 序號複製重新命名引擎
//!
//! 分兩階段執行：先把所有檔案以新檔名複製到獨立的暫存資料夾，
//! 全部成功後才逐一搬移到目標資料夾。暫存資料夾在任何結束路徑都會被移除。

use super::error::SequenceError;
use super::pattern::{pattern_directory, pattern_file_name, target_file_name};
use crate::tools::{FileEntry, is_existing_directory, move_file, scan_top_level_files};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 暫存資料夾名稱前綴（建立於系統暫存目錄）
pub const STAGING_PREFIX: &str = "scripts-sequence-";

/// 一次重新命名的輸入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub source_directory: PathBuf,
    /// 資料夾部分必須存在，檔名部分包含 `%n`
    pub destination_pattern: PathBuf,
    pub zero_padding: usize,
}

impl RenameRequest {
    pub fn new(
        source_directory: impl Into<PathBuf>,
        destination_pattern: impl Into<PathBuf>,
        zero_padding: usize,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            destination_pattern: destination_pattern.into(),
            zero_padding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOutcome {
    pub processed: usize,
}

impl RenameOutcome {
    /// 來源資料夾沒有可處理的檔案
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.processed == 0
    }
}

/// 單一檔案已複製到暫存區的通知
#[derive(Debug, Clone, Copy)]
pub struct PreparedCopy<'a> {
    pub source_path: &'a Path,
    pub staging_path: &'a Path,
}

/// 預計的重新命名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub source_path: PathBuf,
    pub file_name: OsString,
    pub final_path: PathBuf,
}

struct Operation<'a> {
    staging_path: PathBuf,
    final_path: &'a Path,
}

struct Target {
    directory: PathBuf,
    pattern: String,
}

/// 計算重新命名結果但不變更任何檔案
pub fn plan_files(request: &RenameRequest) -> Result<Vec<PlannedRename>, SequenceError> {
    let target = check_preconditions(request)?;
    let files = scan_source(&request.source_directory)?;
    Ok(build_plan(&target, &files, request.zero_padding))
}

/// 依序號樣式複製並重新命名來源資料夾中的檔案
///
/// `on_prepare` 在每個檔案複製到暫存區後被呼叫，只用於回報進度。
/// 暫存階段任何失敗都不會改變目標資料夾；搬移階段失敗則不還原已搬移的檔案。
pub fn rename_files<F>(
    request: &RenameRequest,
    mut on_prepare: F,
) -> Result<RenameOutcome, SequenceError>
where
    F: FnMut(PreparedCopy<'_>),
{
    let target = check_preconditions(request)?;
    let files = scan_source(&request.source_directory)?;

    if files.is_empty() {
        info!("No files found in {}", request.source_directory.display());
        return Ok(RenameOutcome { processed: 0 });
    }

    let plan = build_plan(&target, &files, request.zero_padding);

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir()
        .map_err(SequenceError::StagingArea)?;
    info!(
        "Renaming {} files from {} into {} (staging in {})",
        plan.len(),
        request.source_directory.display(),
        target.directory.display(),
        staging.path().display()
    );

    let result = stage_and_commit(staging.path(), &plan, &mut on_prepare);

    let staging_path = staging.path().to_path_buf();
    if let Err(e) = staging.close()
        && e.kind() != ErrorKind::NotFound
    {
        warn!(
            "Failed to remove staging directory {}: {e}",
            staging_path.display()
        );
    }

    let processed = result?;
    info!("Renamed {processed} files");
    Ok(RenameOutcome { processed })
}

fn check_preconditions(request: &RenameRequest) -> Result<Target, SequenceError> {
    if !is_existing_directory(&request.source_directory) {
        return Err(SequenceError::SourceDirectoryMissing(
            request.source_directory.clone(),
        ));
    }

    let directory = pattern_directory(&request.destination_pattern);
    if !is_existing_directory(&directory) {
        return Err(SequenceError::TargetDirectoryMissing(directory));
    }

    let pattern = pattern_file_name(&request.destination_pattern)?;

    Ok(Target { directory, pattern })
}

fn scan_source(directory: &Path) -> Result<Vec<FileEntry>, SequenceError> {
    scan_top_level_files(directory).map_err(|source| SequenceError::SourceUnreadable {
        directory: directory.to_path_buf(),
        source,
    })
}

/// 依列舉順序指派序號，序號從 0 開始且不跳號
///
/// 樣式必定包含 `%n`，不同序號產生的檔名不會重複。
fn build_plan(target: &Target, files: &[FileEntry], zero_padding: usize) -> Vec<PlannedRename> {
    files
        .iter()
        .enumerate()
        .map(|(counter, file)| {
            let file_name =
                target_file_name(&target.pattern, counter, zero_padding, &file.file_name);
            PlannedRename {
                source_path: file.path.clone(),
                final_path: target.directory.join(&file_name),
                file_name,
            }
        })
        .collect()
}

fn stage_and_commit<F>(
    staging_dir: &Path,
    plan: &[PlannedRename],
    on_prepare: &mut F,
) -> Result<usize, SequenceError>
where
    F: FnMut(PreparedCopy<'_>),
{
    let mut operations = Vec::with_capacity(plan.len());

    for planned in plan {
        let staging_path = staging_dir.join(&planned.file_name);
        fs::copy(&planned.source_path, &staging_path).map_err(|source| SequenceError::Staging {
            source_path: planned.source_path.clone(),
            staging_path: staging_path.clone(),
            source,
        })?;
        debug!(
            "Staged {} -> {}",
            planned.source_path.display(),
            staging_path.display()
        );

        on_prepare(PreparedCopy {
            source_path: &planned.source_path,
            staging_path: &staging_path,
        });

        operations.push(Operation {
            staging_path,
            final_path: &planned.final_path,
        });
    }

    for operation in &operations {
        move_file(&operation.staging_path, operation.final_path).map_err(|source| {
            SequenceError::Commit {
                staging_path: operation.staging_path.clone(),
                final_path: operation.final_path.to_path_buf(),
                source,
            }
        })?;
    }

    Ok(operations.len())
}
