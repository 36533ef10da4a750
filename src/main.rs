use remote_posts::{logging, settings, ui};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    logging::init_tracing();
    ensure_config_folder();

    let settings = settings::Settings::new()?;
    tracing::debug!(?settings, "Loaded settings");

    let args: Vec<String> = std::env::args().collect();
    if args.contains(&"--no-ui".to_string()) {
        ui::run_no_ui(settings)
    } else {
        run_ui(settings, &args)
    }
}

#[cfg(feature = "gui")]
fn run_ui(settings: settings::Settings, args: &[String]) -> eyre::Result<()> {
    ui::run_ui(settings, args)
}

#[cfg(not(feature = "gui"))]
fn run_ui(settings: settings::Settings, _args: &[String]) -> eyre::Result<()> {
    ui::run_no_ui(settings)
}

fn ensure_config_folder() {
    let path = settings::get_config_folder();
    if let Err(err) = std::fs::create_dir_all(&path) {
        tracing::warn!("Could not create config folder {path:?}: {err}");
    }
}
