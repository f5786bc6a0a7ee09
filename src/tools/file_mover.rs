//! 檔案搬移
//!
//! 先嘗試原子性的 rename，若來源與目標位於不同檔案系統則改為複製後刪除

use log::{debug, warn};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// 搬移檔案，跨檔案系統時退回複製後刪除
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    move_file_with(source, target, |from, to| fs::rename(from, to))
}

/// 以指定的 rename 實作搬移檔案
///
/// 只有 `CrossesDevices` 錯誤會觸發複製後刪除，其他錯誤原樣回傳。
pub fn move_file_with<F>(source: &Path, target: &Path, rename: F) -> io::Result<()>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    match rename(source, target) {
        Ok(()) => {
            debug!("Moved {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            warn!(
                "Cross-device move, falling back to copy: {} -> {}",
                source.display(),
                target.display()
            );
            copy_and_delete(source, target)
        }
        Err(e) => Err(e),
    }
}

/// 複製檔案後刪除原檔案
fn copy_and_delete(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    fs::remove_file(source)
}
