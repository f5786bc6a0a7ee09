use crate::component::SequenceRenamer;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};

pub fn run_sequence_renamer(term: &Term, config: &mut Config) -> Result<()> {
    let mut renamer = SequenceRenamer::new(config.clone());

    if let Err(e) = renamer.run_interactive() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
    }
    *config = renamer.into_config();

    pause(term)?;
    Ok(())
}
