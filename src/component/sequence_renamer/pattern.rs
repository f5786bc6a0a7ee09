//! 檔名樣式處理
//!
//! 計算補零序號、解析副檔名，並由樣式產生目標檔名

use super::error::SequenceError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 樣式中的序號佔位符
pub const COUNTER_PLACEHOLDER: &str = "%n";

/// 以 `0` 左補至指定寬度，位數超過寬度時不截斷
#[must_use]
pub fn format_counter(counter: usize, width: usize) -> String {
    format!("{counter:0width$}")
}

/// 取最後一個 `.` 之後的副檔名，沒有 `.` 或副檔名為空時回傳 `None`
///
/// 直接操作 `OsStr`，非 UTF-8 的副檔名原樣保留。
#[must_use]
pub fn resolve_extension(filename: &OsStr) -> Option<&OsStr> {
    Path::new(filename)
        .extension()
        .filter(|extension| !extension.is_empty())
}

/// 產生目標檔名
///
/// 替換第一個 `%n`，若結果尚未以來源副檔名結尾則補上。
#[must_use]
pub fn target_file_name(
    pattern: &str,
    counter: usize,
    width: usize,
    source_name: &OsStr,
) -> OsString {
    let mut name = OsString::from(pattern.replacen(
        COUNTER_PLACEHOLDER,
        &format_counter(counter, width),
        1,
    ));

    if let Some(extension) = resolve_extension(source_name) {
        let mut suffix = OsString::from(".");
        suffix.push(extension);
        if !name
            .as_encoded_bytes()
            .ends_with(suffix.as_encoded_bytes())
        {
            name.push(&suffix);
        }
    }

    name
}

/// 目標樣式的資料夾部分，沒有資料夾部分時為目前目錄
#[must_use]
pub fn pattern_directory(pattern_path: &Path) -> PathBuf {
    match pattern_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// 目標樣式的檔名部分，必須為 UTF-8 且包含 `%n`
pub fn pattern_file_name(pattern_path: &Path) -> Result<String, SequenceError> {
    let file_name = pattern_path.file_name().ok_or_else(|| {
        SequenceError::InvalidPattern(format!(
            "{} has no file name component",
            pattern_path.display()
        ))
    })?;

    let file_name = file_name.to_str().ok_or_else(|| {
        SequenceError::InvalidPattern(format!(
            "{} is not valid UTF-8",
            pattern_path.display()
        ))
    })?;

    if !file_name.contains(COUNTER_PLACEHOLDER) {
        return Err(SequenceError::InvalidPattern(format!(
            "{file_name} does not contain {COUNTER_PLACEHOLDER}"
        )));
    }

    Ok(file_name.to_string())
}
