use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use rollcall_providers::PageSource;
use rollcall_runtime::Config;
use rollcall_types::ViewState;
use std::sync::Arc;

use crate::presentation::renderers::{AppState, BrowseTui, TuiEvent};

pub fn handle(config: &Config, view: ViewState) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `rollcall list` instead");
    }

    let collator = config.collator()?;
    let client = Arc::new(config.client());
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let tui = BrowseTui::new();
    let tx = tui.sender();
    let app = AppState::new(collator, view);

    tracing::info!(endpoint = %config.source.endpoint, "browse started");

    tui.run(app, |token| {
        let client = Arc::clone(&client);
        let tx = tx.clone();
        runtime.spawn(async move {
            let result = client.fetch_page(token).await;
            let _ = tx.send(TuiEvent::PageLoaded(result));
        });
    })
}
