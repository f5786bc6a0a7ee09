use crate::config::save::save_settings;
use crate::config::types::Config;
use crate::menu::handlers::run_sequence_renamer;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use log::warn;

/// 主選單，回傳 `false` 表示離開程式
pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== Utility scripts ===").cyan().bold());
    println!("{}", style("(ESC to exit)").dim());

    let options = vec!["Sequence rename", "Settings", "Exit"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a script")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_sequence_renamer(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => Ok(false),
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== Settings ===").cyan().bold());
        println!("{}", style("(ESC to go back)").dim());

        let options = vec![
            format!("Default zero padding: {}", config.settings.zero_padding),
            format!("Clear recent paths ({})", config.settings.recent_paths.len()),
            "Back".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a setting")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => {
                let padding: usize = Input::new()
                    .with_prompt("Default zero padding")
                    .default(config.settings.zero_padding)
                    .interact_text()?;
                config.settings.zero_padding = padding;
            }
            Some(1) => config.settings.recent_paths.clear(),
            Some(2) | None => break,
            _ => unreachable!(),
        }

        if let Err(e) = save_settings(&config.settings) {
            warn!("Failed to save settings: {e}");
        }
    }

    Ok(())
}
