//! 序號重新命名主模組
//!
//! 處理命令列與互動兩種執行方式，負責進度顯示與結果訊息

use super::engine::{PlannedRename, PreparedCopy, RenameRequest, plan_files, rename_files};
use super::error::SequenceError;
use super::pattern::COUNTER_PLACEHOLDER;
use crate::cli::SequenceArgs;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub const NO_FILES_MESSAGE: &str = "No files found in the source directory.";
pub const SUCCESS_MESSAGE: &str = "All files successfully copied and renamed.";

/// 預覽時最多列出的檔案數
const PREVIEW_LIMIT: usize = 20;

/// 序號重新命名元件
pub struct SequenceRenamer {
    config: Config,
}

impl SequenceRenamer {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 由命令列參數執行，回傳行程結束碼
    pub fn run_from_args(&self, args: &SequenceArgs) -> ExitCode {
        match self.run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                debug!("sequence failed: {e}");
                eprintln!("{}", failure_message(&e));
                ExitCode::FAILURE
            }
        }
    }

    pub fn run(&self, args: &SequenceArgs) -> Result<(), SequenceError> {
        let request = RenameRequest::new(&args.src_path, &args.dest_pattern, args.zero_padding);

        if args.dry_run {
            let plan = plan_files(&request)?;
            print_plan(&plan);
            Ok(())
        } else {
            execute(&request, args.quiet)
        }
    }

    /// 互動式執行，完成後把來源路徑記入最近使用清單
    pub fn run_interactive(&mut self) -> Result<()> {
        println!("{}", style("=== Sequence rename ===").cyan().bold());

        let Some(source) = self.prompt_source_directory()? else {
            return Ok(());
        };
        let pattern = prompt_pattern()?;
        let zero_padding = self.prompt_zero_padding()?;

        let request = RenameRequest::new(&source, pattern, zero_padding);

        let plan = match plan_files(&request) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("{}", style(failure_message(&e)).red());
                return Ok(());
            }
        };

        if plan.is_empty() {
            println!("{}", style(NO_FILES_MESSAGE).yellow());
            return Ok(());
        }

        display_preview(&plan);

        if !confirm_rename(plan.len())? {
            println!("{}", style("Cancelled").yellow());
            return Ok(());
        }

        if let Err(e) = execute(&request, true) {
            eprintln!("{}", style(failure_message(&e)).red());
            return Ok(());
        }

        add_recent_path(&mut self.config.settings, &source.display().to_string());
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("Failed to save recent paths: {e}");
        }

        Ok(())
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    fn prompt_source_directory(&self) -> Result<Option<PathBuf>> {
        let recent_paths = &self.config.settings.recent_paths;

        if recent_paths.is_empty() {
            return Ok(Some(input_directory()?));
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let indicator = if Path::new(p).is_dir() { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push("Enter a new path...".to_string());

        println!("{}", style("(ESC to go back)").dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Source directory")
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(PathBuf::from(&recent_paths[idx]))),
            Some(_) => Ok(Some(input_directory()?)),
        }
    }

    fn prompt_zero_padding(&self) -> Result<usize> {
        let padding: usize = Input::new()
            .with_prompt("Zero padding width")
            .default(self.config.settings.zero_padding)
            .interact_text()?;
        Ok(padding)
    }
}

/// 將錯誤轉為單行訊息，資料夾不存在的錯誤原樣輸出
#[must_use]
pub fn failure_message(error: &SequenceError) -> String {
    if error.is_missing_directory() {
        error.to_string()
    } else {
        format!("An error occurred: {error}")
    }
}

fn execute(request: &RenameRequest, quiet: bool) -> Result<(), SequenceError> {
    let progress_bar = ProgressBar::no_length();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} staged {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress_bar.set_message("Copying...");

    let result = rename_files(request, |prepared: PreparedCopy<'_>| {
        if !quiet {
            let line = format!(
                "Prepared to copy: {} -> {}",
                prepared.source_path.display(),
                prepared.staging_path.display()
            );
            if progress_bar.is_hidden() {
                println!("{line}");
            } else {
                progress_bar.println(line);
            }
        }
        progress_bar.inc(1);
    });
    progress_bar.finish_and_clear();

    let outcome = result?;
    if outcome.is_empty() {
        println!("{NO_FILES_MESSAGE}");
    } else {
        println!("{SUCCESS_MESSAGE}");
    }

    Ok(())
}

fn print_plan(plan: &[PlannedRename]) {
    if plan.is_empty() {
        println!("{NO_FILES_MESSAGE}");
        return;
    }

    for planned in plan {
        println!(
            "{} -> {}",
            planned.source_path.display(),
            planned.final_path.display()
        );
    }
    println!("{} files would be copied and renamed.", plan.len());
}

fn display_preview(plan: &[PlannedRename]) {
    println!();
    println!("{}", style("Preview:").cyan());
    println!();

    for planned in plan.iter().take(PREVIEW_LIMIT) {
        let current_name = planned
            .source_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();
        println!(
            "  {} {} {}",
            current_name,
            style("->").dim(),
            planned.file_name.to_string_lossy()
        );
    }

    if plan.len() > PREVIEW_LIMIT {
        println!(
            "  {}",
            style(format!("... and {} more", plan.len() - PREVIEW_LIMIT)).dim()
        );
    }
    println!();
}

fn input_directory() -> Result<PathBuf> {
    let path: String = Input::new()
        .with_prompt("Source directory path")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_directory_exists(Path::new(input.trim())).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

fn prompt_pattern() -> Result<PathBuf> {
    let pattern: String = Input::new()
        .with_prompt(format!(
            "Destination pattern ({COUNTER_PLACEHOLDER} becomes the number)"
        ))
        .validate_with(|input: &String| -> Result<(), String> {
            if input.contains(COUNTER_PLACEHOLDER) {
                Ok(())
            } else {
                Err(format!("The pattern must contain {COUNTER_PLACEHOLDER}"))
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(pattern.trim()))
}

fn confirm_rename(count: usize) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Copy and rename these {count} files?"))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
