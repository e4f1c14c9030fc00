use clap::Args;
use rollcall_types::ViewState;

use super::SortArg;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Minimal output (IDs only, for scripting)", group = "view_mode")]
    pub quiet: bool,

    #[arg(long, help = "Compact output (name and country only)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (adds thumbnails)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Sort, filter and color controls shared by `list` and `browse`.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortArg::None)]
    pub sort: SortArg,

    /// Keep only users whose country contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub country: Option<String>,

    /// Alternate row colors
    #[arg(long)]
    pub color: bool,
}

impl ViewArgs {
    /// Build the initial view. `color_default` comes from the config file.
    pub fn to_view_state(&self, color_default: bool) -> ViewState {
        let mut view = ViewState::new();
        view.set_sort(self.sort.into());
        if let Some(country) = &self.country {
            view.set_filter(country);
        }
        if self.color || color_default {
            view.toggle_color_rows();
        }
        view
    }
}
