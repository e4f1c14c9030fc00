use anyhow::Result;
use rollcall_runtime::Config;
use std::path::Path;

use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::args::OutputFormat;
use crate::presentation::ViewMode;

pub fn show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let result = presenters::present_config(&config, config_path);
    ConsoleRenderer::new(format, ViewMode::default()).render(result)
}

pub fn init(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let written = if config_path.exists() && !force {
        false
    } else {
        Config::default().save_to(config_path)?;
        tracing::info!(path = %config_path.display(), "config written");
        true
    };

    let result = presenters::present_config_init(config_path, written);
    ConsoleRenderer::new(format, ViewMode::default()).render(result)
}
