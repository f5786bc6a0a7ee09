use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 資料夾第一層的一般檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// 原始檔名，不經 UTF-8 轉換
    pub file_name: OsString,
}

/// 掃描資料夾第一層的一般檔案
///
/// 不進入子資料夾，略過資料夾、符號連結以及 `.` 開頭的隱藏檔，
/// 結果依檔名的位元組順序排序（不受語系影響）。
pub fn scan_top_level_files(directory: &Path) -> io::Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().as_encoded_bytes().starts_with(b".") {
            continue;
        }

        let file_name = entry.file_name().to_os_string();
        files.push(FileEntry {
            path: entry.into_path(),
            file_name,
        });
    }

    Ok(files)
}
