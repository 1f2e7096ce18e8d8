use serde::{Serialize, Deserialize};
use std::option::Option;
use std::path::PathBuf;

use crate::rooms::CleanRoomsRequest;
use crate::status::{DerivedAttributes, VacuumActivity};

#[derive(Debug, Clone)]
pub struct RobotState {
  pub attributes : Option<DerivedAttributes>,
  pub activity : VacuumActivity,
  pub available : bool,
  pub model : Option<String>,
  pub battery_pct : Option<i64>,
  pub last_error : Option<String>,
}

impl Default for RobotState {
  fn default() -> Self {
    RobotState {
      attributes : None,
      activity : VacuumActivity::Idle,
      available : false,
      model : None,
      battery_pct : None,
      last_error : None,
    }
  }
}

#[derive(Debug)]
pub enum RobotCommand {
  CleanRooms(Vec<CleanRoomsRequest>),
  ReturnHome,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Language {
  Russian,
  English,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoombaDashboardConfig {
  pub rest980_config : Rest980Config,
  pub pmaps_file : Option<PathBuf>,
  pub language : Language,
  pub fullscreen : bool,
}

impl Default for RoombaDashboardConfig {
  fn default() -> Self {
    RoombaDashboardConfig {
      rest980_config : Rest980Config::default(),
      pmaps_file : None,
      language : Language::English,
      fullscreen : false,
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Rest980Config {
  pub base_url : String,
  pub poll_interval_secs : u64,
  pub request_timeout_secs : u64,
}

impl Default for Rest980Config {
  fn default() -> Self {
    Rest980Config {
      base_url : String::from("http://localhost:3000"),
      poll_interval_secs : 10,
      request_timeout_secs : 10,
    }
  }
}
