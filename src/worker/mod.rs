use crate::egui::Context; // b/c of re-export
use tokio::sync::mpsc::{Sender, Receiver};
use tokio::sync::mpsc::error::TrySendError;
use tokio;
use log;
use chrono::Utc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use crate::interface::*;
use crate::status::{self, raw::RawStatus};

mod rest980;
use rest980::*;

#[tokio::main]
pub async fn worker_thread(sender : Sender<RobotState>, receiver : Receiver<RobotCommand>, ctx : Context, cfg : Rest980Config) {
  let result = worker_thread_prime(sender, receiver, ctx, cfg).await;
  if let Err ( e ) = result {
    log::error!("Error in worker_thread : {}. exiting....", e);
  }
}

pub async fn worker_thread_prime(sender : Sender<RobotState>, receiver : Receiver<RobotCommand>, ctx : Context, cfg : Rest980Config) -> Result<(), String> {

  let client = Rest980Client::new(&cfg).map_err(|e| e.to_string())?;
  let poll_interval = Duration::from_secs(cfg.poll_interval_secs.max(1));

  let h1 = tokio::task::spawn( update_state_loop(sender, client.clone(), poll_interval, ctx) );
  let h2 = tokio::task::spawn( execute_command_loop(receiver, client) );

  match h1.await {
    Err( e ) => log::warn!("update_state_loop task is failed... {:?}", e),
    Ok( o ) => o?,
  }
  if let Err( e ) = h2.await {
    log::warn!("execute_command_loop task is failed... {:?}", e);
  }

  Ok(())
}

pub fn robot_state(raw_value : serde_json::Value) -> RobotState {
  let available = !matches!(&raw_value, serde_json::Value::Object( o ) if o.is_empty());
  let raw = RawStatus::from_value(raw_value);

  RobotState {
    attributes : Some( status::translate(&raw, Utc::now()) ),
    activity : status::activity(&raw),
    available,
    model : status::model(&raw),
    battery_pct : raw.bat_pct.as_ref().and_then(serde_json::Number::as_f64).map(|pct| pct.round() as i64),
    last_error : None,
  }
}

// keeps the last known attributes, only the header goes unavailable
fn poll_failed(state : &mut RobotState, err : &Rest980Error) {
  log::warn!("Failed to poll rest980 : {}", err);
  state.available = false;
  state.last_error = Some( err.to_string() );
}

async fn update_state_loop(
  sender : Sender<RobotState>,
  client : Rest980Client,
  poll_interval : Duration,
  egui_ctx : Context) -> Result<(), String>
{
  let mut state = RobotState::default();
  let mut interval = tokio::time::interval(poll_interval);
  interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

  loop {
    interval.tick().await;

    match client.state().await {
      Ok( raw_value ) => {
        log::debug!("Got state {}", raw_value);
        state = robot_state(raw_value);
      },
      Err( e ) => poll_failed(&mut state, &e),
    }

    match sender.try_send(state.clone()) {
      Ok(()) => egui_ctx.request_repaint(),
      Err( TrySendError::Full( _ ) ) => log::warn!("Failed to send data, GUI is not consuming it!"),
      Err( TrySendError::Closed( _ ) ) => {
        log::warn!("Failed to send data - channel is closed. Probably GUI is dead, exiting....");
        break;
      },
    }
  }

  Ok(())
}

async fn execute_command_loop(
  mut receiver : Receiver<RobotCommand>,
  client : Rest980Client,
  )
{
  loop {
      match receiver.recv().await {
      Some( cmd ) => execute_command( &client, cmd ).await,
      None => {
        log::warn!("Failed to receiver data, probably GUI is dead. Exiting...");
        break;
      },
     };

  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn empty_snapshot_is_unavailable_but_translated() {
    let state = robot_state(json!({}));
    assert!(!state.available);
    assert!(state.attributes.is_some());
    assert_eq!(state.activity, status::VacuumActivity::Idle);
  }

  #[test]
  fn snapshot_fills_header_fields() {
    let state = robot_state(json!({
      "sku": "i755020",
      "batPct": 64,
      "cleanMissionStatus": { "cycle": "clean", "phase": "run" },
    }));
    assert!(state.available);
    assert_eq!(state.model.as_deref(), Some("Roomba i755020"));
    assert_eq!(state.battery_pct, Some(64));
    assert_eq!(state.activity, status::VacuumActivity::Cleaning);
    assert_eq!(state.attributes.unwrap().phase, json!("Run"));
  }

  #[test]
  fn float_battery_reaches_header() {
    let state = robot_state(json!({ "batPct": 100.0 }));
    assert_eq!(state.battery_pct, Some(100));
  }

  #[test]
  fn failed_poll_keeps_last_attributes() {
    let mut state = robot_state(json!({
      "batPct": 64,
      "cleanMissionStatus": { "cycle": "clean", "phase": "run" },
    }));
    let attributes = state.attributes.clone();

    poll_failed(&mut state, &Rest980Error::Status(reqwest::StatusCode::BAD_GATEWAY));
    assert!(!state.available);
    assert_eq!(state.attributes, attributes);
    assert_eq!(state.battery_pct, Some(64));
    assert!(state.last_error.as_deref().unwrap().contains("502"));

    let state = robot_state(json!({ "batPct": 65 }));
    assert!(state.available);
    assert_eq!(state.last_error, None);
  }
}
