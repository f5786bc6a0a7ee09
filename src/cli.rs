//! 命令列介面定義

use crate::config::DEFAULT_ZERO_PADDING;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Utility scripts bundled as a single command-line tool.
#[derive(Parser, Debug)]
#[command(name = "scripts")]
#[command(about = "Utility scripts bundled as a single command-line tool")]
#[command(version)]
pub struct Cli {
    /// 未指定子命令時進入互動選單
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy and rename files with sequential numbering.
    #[command(
        override_usage = "scripts sequence <SRC_PATH> <DEST_PATTERN> [-z <NUMBER>]",
        after_help = "Examples:\n  scripts sequence -z 4 ./frames ./output/frame_%n.png"
    )]
    Sequence(SequenceArgs),
}

/// Arguments for `scripts sequence`.
#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Source directory with files to rename.
    pub src_path: PathBuf,

    /// Output pattern where %n becomes the sequence number.
    pub dest_pattern: PathBuf,

    /// Zero padding width.
    #[arg(
        short = 'z',
        long = "zero-padding",
        value_name = "NUMBER",
        default_value_t = DEFAULT_ZERO_PADDING
    )]
    pub zero_padding: usize,

    /// Print the planned renames without touching any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print a line for every prepared file.
    #[arg(short, long)]
    pub quiet: bool,
}
