use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", data.path);
        }

        let status = if data.exists {
            "loaded"
        } else {
            "not found, using defaults"
        };
        writeln!(f, "Config file: {} ({})", data.path, status)?;
        writeln!(f)?;
        writeln!(f, "[source]")?;
        writeln!(f, "  {:<18} {}", "endpoint", data.endpoint)?;
        writeln!(f, "  {:<18} {}", "results_per_page", data.results_per_page)?;
        writeln!(f, "  {:<18} {}", "seed", data.seed)?;
        writeln!(f, "[display]")?;
        writeln!(f, "  {:<18} {}", "locale", data.locale)?;
        writeln!(f, "  {:<18} {}", "color_rows", data.color_rows)?;

        Ok(())
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Path: {}", self.data.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_view_lists_both_sections() {
        let vm = ConfigViewModel {
            path: "/tmp/rollcall/config.toml".to_string(),
            exists: false,
            endpoint: "https://randomuser.me/api/".to_string(),
            results_per_page: 10,
            seed: "test".to_string(),
            locale: "en".to_string(),
            color_rows: false,
        };

        let output = ConfigView::new(&vm, ViewMode::Standard).to_string();
        insta::assert_snapshot!(output, @r"
        Config file: /tmp/rollcall/config.toml (not found, using defaults)

        [source]
          endpoint           https://randomuser.me/api/
          results_per_page   10
          seed               test
        [display]
          locale             en
          color_rows         false
        ");
    }
}
