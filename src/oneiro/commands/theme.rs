use crate::commands::{CmdMessage, CmdResult, JournalPaths};
use crate::config::{JournalConfig, Theme};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run(paths: &JournalPaths, action: ThemeAction) -> Result<CmdResult> {
    let mut config = JournalConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ThemeAction::Show => {}
        ThemeAction::Set(theme) => {
            config.theme = theme;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                theme.key()
            )));
        }
        ThemeAction::Toggle => {
            config.theme = config.theme.toggled();
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                config.theme.key()
            )));
        }
    }

    Ok(result.with_theme(config.theme))
}
