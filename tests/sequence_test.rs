//! 序號重新命名整合測試
//!
//! 每個測試都在獨立的暫存資料夾內建立 input/output

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use utility_scripts::component::sequence_renamer::{
    RenameRequest, STAGING_PREFIX, SequenceError, failure_message, plan_files, rename_files,
};

struct Fixture {
    _temp_dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn fixture(files: &[&str]) -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();
    for name in files {
        fs::write(input.join(name), name).unwrap();
    }
    Fixture {
        _temp_dir: temp_dir,
        input,
        output,
    }
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// 基本情境：兩個檔案依檔名排序後編號
#[test]
fn test_basic_scenario() {
    let fx = fixture(&["b.txt", "a.txt"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let outcome = rename_files(&request, |_| {}).unwrap();

    assert_eq!(outcome.processed, 2);
    assert!(!outcome.is_empty());
    assert_eq!(sorted_names(&fx.output), vec!["frame_00.txt", "frame_01.txt"]);
    assert_eq!(fs::read_to_string(fx.output.join("frame_00.txt")).unwrap(), "a.txt");
    assert_eq!(fs::read_to_string(fx.output.join("frame_01.txt")).unwrap(), "b.txt");
}

/// 相同輸入重複執行時，同一檔案得到相同序號
#[test]
fn test_ordering_is_deterministic() {
    let fx = fixture(&["delta.txt", "alpha.txt", "charlie.txt", "bravo.txt"]);
    let first_output = fx.output.join("first");
    let second_output = fx.output.join("second");
    fs::create_dir(&first_output).unwrap();
    fs::create_dir(&second_output).unwrap();

    for output in [&first_output, &second_output] {
        let request = RenameRequest::new(&fx.input, output.join("f_%n"), 2);
        rename_files(&request, |_| {}).unwrap();
    }

    for (index, source) in ["alpha.txt", "bravo.txt", "charlie.txt", "delta.txt"]
        .iter()
        .enumerate()
    {
        let name = format!("f_{index:02}.txt");
        assert_eq!(fs::read_to_string(first_output.join(&name)).unwrap(), *source);
        assert_eq!(fs::read_to_string(second_output.join(&name)).unwrap(), *source);
    }
}

/// 隱藏檔不處理也不佔用序號
#[test]
fn test_hidden_files_are_ignored() {
    let fx = fixture(&[".DS_Store", ".hidden", "a.txt", "b.txt"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let outcome = rename_files(&request, |_| {}).unwrap();

    assert_eq!(outcome.processed, 2);
    assert_eq!(sorted_names(&fx.output), vec!["frame_00.txt", "frame_01.txt"]);
}

/// 子資料夾不處理
#[test]
fn test_subdirectories_are_ignored() {
    let fx = fixture(&["a.txt"]);
    fs::create_dir(fx.input.join("nested")).unwrap();
    fs::write(fx.input.join("nested").join("b.txt"), "b").unwrap();
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let outcome = rename_files(&request, |_| {}).unwrap();

    assert_eq!(outcome.processed, 1);
    assert_eq!(sorted_names(&fx.output), vec!["frame_00.txt"]);
}

/// 保留副檔名且不重複加上
#[test]
fn test_extension_preserved_without_duplication() {
    let fx = fixture(&["photo.jpg"]);

    let request = RenameRequest::new(&fx.input, fx.output.join("out_%n"), 3);
    rename_files(&request, |_| {}).unwrap();
    assert_eq!(sorted_names(&fx.output), vec!["out_000.jpg"]);

    fs::remove_file(fx.output.join("out_000.jpg")).unwrap();

    let request = RenameRequest::new(&fx.input, fx.output.join("out_%n.jpg"), 3);
    rename_files(&request, |_| {}).unwrap();
    assert_eq!(sorted_names(&fx.output), vec!["out_000.jpg"]);
}

/// 混合副檔名的來源各自保留副檔名
#[test]
fn test_mixed_extensions() {
    let fx = fixture(&["a.png", "b.jpg", "c.gif"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("img_%n"), 1);

    rename_files(&request, |_| {}).unwrap();

    assert_eq!(
        sorted_names(&fx.output),
        vec!["img_0.png", "img_1.jpg", "img_2.gif"]
    );
}

/// 沒有副檔名的檔案不補副檔名
#[test]
fn test_file_without_extension() {
    let fx = fixture(&["LICENSE", "README"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("doc_%n"), 2);

    rename_files(&request, |_| {}).unwrap();

    assert_eq!(sorted_names(&fx.output), vec!["doc_00", "doc_01"]);
}

/// 空資料夾直接回傳，不產生任何檔案
#[test]
fn test_empty_source() {
    let fx = fixture(&[".DS_Store"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let outcome = rename_files(&request, |_| panic!("nothing should be staged")).unwrap();

    assert_eq!(outcome.processed, 0);
    assert!(outcome.is_empty());
    assert!(sorted_names(&fx.output).is_empty());
}

/// 來源資料夾不存在
#[test]
fn test_missing_source_directory() {
    let fx = fixture(&[]);
    let missing = fx.input.join("does_not_exist");
    let request = RenameRequest::new(&missing, fx.output.join("frame_%n"), 2);

    let err = rename_files(&request, |_| panic!("nothing should be staged")).unwrap_err();

    assert!(matches!(err, SequenceError::SourceDirectoryMissing(_)));
    assert!(err.to_string().contains("Source directory does not exist"));
    assert_eq!(
        failure_message(&err),
        format!("Source directory does not exist: {}", missing.display())
    );
}

/// 目標資料夾不存在
#[test]
fn test_missing_target_directory() {
    let fx = fixture(&["a.txt"]);
    let missing = fx.output.join("does_not_exist");
    let request = RenameRequest::new(&fx.input, missing.join("frame_%n"), 2);

    let err = rename_files(&request, |_| panic!("nothing should be staged")).unwrap_err();

    assert!(matches!(err, SequenceError::TargetDirectoryMissing(_)));
    assert!(err.to_string().contains("Target directory does not exist"));
    assert_eq!(
        failure_message(&err),
        format!("Target directory does not exist: {}", missing.display())
    );
    assert!(fx.input.join("a.txt").exists());
}

/// 暫存階段第三個檔案失敗時，目標資料夾保持不變且暫存資料夾被移除
#[test]
fn test_staging_failure_leaves_destination_untouched() {
    let fx = fixture(&["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let mut staging_dir: Option<PathBuf> = None;
    let vanishing = fx.input.join("c.txt");
    let err = rename_files(&request, |prepared| {
        staging_dir = prepared.staging_path.parent().map(Path::to_path_buf);
        // 第二個檔案暫存後刪除第三個來源，模擬執行中來源消失
        if prepared.source_path.ends_with("b.txt") {
            fs::remove_file(&vanishing).unwrap();
        }
    })
    .unwrap_err();

    let SequenceError::Staging { source_path, .. } = &err else {
        panic!("expected staging failure, got {err:?}");
    };
    assert_eq!(source_path, &vanishing);
    assert!(failure_message(&err).starts_with("An error occurred: "));

    assert!(sorted_names(&fx.output).is_empty());

    let staging_dir = staging_dir.unwrap();
    assert!(
        staging_dir
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(STAGING_PREFIX)
    );
    assert!(!staging_dir.exists());

    assert_eq!(
        sorted_names(&fx.input),
        vec!["a.txt", "b.txt", "d.txt", "e.txt"]
    );
}

/// 序號位數超過補零寬度時不截斷
#[test]
fn test_padding_overflow() {
    let names: Vec<String> = (0..150).map(|i| format!("file_{i:03}.txt")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let fx = fixture(&refs);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame_%n"), 2);

    let outcome = rename_files(&request, |_| {}).unwrap();

    assert_eq!(outcome.processed, 150);
    assert_eq!(
        fs::read_to_string(fx.output.join("frame_99.txt")).unwrap(),
        "file_099.txt"
    );
    assert_eq!(
        fs::read_to_string(fx.output.join("frame_100.txt")).unwrap(),
        "file_100.txt"
    );
    assert_eq!(
        fs::read_to_string(fx.output.join("frame_149.txt")).unwrap(),
        "file_149.txt"
    );
    assert_eq!(sorted_names(&fx.output).len(), 150);
}

/// 預覽結果與實際執行一致
#[test]
fn test_plan_matches_rename() {
    let fx = fixture(&["b.png", "a.jpg", "c"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("shot_%n.jpg"), 3);

    let plan = plan_files(&request).unwrap();
    assert!(sorted_names(&fx.output).is_empty());

    rename_files(&request, |_| {}).unwrap();

    let mut planned: Vec<String> = plan
        .iter()
        .map(|p| p.file_name.to_string_lossy().into_owned())
        .collect();
    planned.sort();
    assert_eq!(planned, vec!["shot_000.jpg", "shot_001.jpg.png", "shot_002.jpg"]);
    assert_eq!(sorted_names(&fx.output), planned);
}

/// 樣式缺少 %n 時在任何變更前失敗
#[test]
fn test_pattern_without_placeholder() {
    let fx = fixture(&["a.txt", "b.txt"]);
    let request = RenameRequest::new(&fx.input, fx.output.join("frame.txt"), 2);

    let err = rename_files(&request, |_| panic!("nothing should be staged")).unwrap_err();

    assert!(matches!(err, SequenceError::InvalidPattern(_)));
    assert!(sorted_names(&fx.output).is_empty());
}
