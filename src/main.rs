mod interface;
mod worker;
mod gui;
mod rooms;
mod status;

use eframe::egui;
use env_logger;
use gui::RoombaDashboard;
use interface::RoombaDashboardConfig;


fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cfg : RoombaDashboardConfig = match confy::load("roomba-dashboard", None) {
    Ok( cfg ) => cfg,
    Err( e ) => {
      log::error!("Failed to load configuration : {}. Using defaults.", e);
      RoombaDashboardConfig::default()
    },
  };
  log::info!("Using rest980 at {}", cfg.rest980_config.base_url);

  let selectors = match &cfg.pmaps_file {
    None => {
      log::info!("No pmaps_file configured, room selectors are disabled");
      Vec::new()
    },
    Some( path ) => match rooms::load_pmaps(path) {
      Ok( pmaps ) => rooms::selectors_from_pmaps(&pmaps),
      Err( e ) => {
        log::error!("{}", e);
        Vec::new()
      },
    },
  };

  let mut native_options = eframe::NativeOptions::default();
  native_options.fullscreen = cfg.fullscreen;

  if let Err( e ) = eframe::run_native(
      "Roomba Dashboard",
      native_options,
      Box::new(move |cc| Box::new(RoombaDashboard::new(cc, cfg, selectors)) )
    )  {
    log::error!("Failed to run Roomba Dashboard {:?}", e);
  };
}
