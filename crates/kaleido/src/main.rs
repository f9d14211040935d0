use kaleido_config::Config;
use tracing::info;

mod app;
mod logging;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config)?;
    info!(fps = config.fps(), "starting kaleido");

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();

    info!("kaleido exited");
    result
}
