use rollcall_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, StatusBadge, Tip,
};

pub fn present_config(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        endpoint: config.source.endpoint.clone(),
        results_per_page: config.source.results_per_page,
        seed: config.source.seed.clone(),
        locale: config.display.locale.clone(),
        color_rows: config.display.color_rows,
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result.with_tip(Tip::new("Write these defaults to disk", "rollcall config init"))
    }
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::Success("Config written".to_string()))
            .with_tip(Tip::new("Review it", "rollcall config show"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::Info("Config already exists".to_string()))
            .with_tip(Tip::new("Overwrite with defaults", "rollcall config init --force"))
    }
}
