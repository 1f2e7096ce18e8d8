//! Turns the terse rest980 status snapshot into display attributes. Missing
//! fields become `"n-a"` or `null`, unknown codes are shown as the raw code.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Number, Value};

pub mod mop;
pub mod raw;
pub mod tables;

use mop::MopAttributes;
use raw::RawStatus;
use tables::*;

pub const NOT_AVAILABLE : &str = "n-a";

const NOT_READY_PENDING : i64 = 39;
const SQFT_PER_SQM : f64 = 10.764;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DerivedAttributes {
  #[serde(rename = "extendedStatus")]
  pub extended_status : Value,
  pub notready_msg : Value,
  pub error_msg : Value,
  pub battery : String,
  pub software_ver : Option<String>,
  pub phase : Value,
  pub bin : Value,
  pub bin_present : Value,
  pub clean_base : Value,
  pub location : String,
  pub rssi : Option<Number>,
  pub total_area : Option<String>,
  pub total_time : String,
  pub total_jobs : Option<Number>,
  pub dirt_events : Option<Number>,
  pub evac_events : Option<Number>,
  pub job_initiator : Value,
  pub job_time : String,
  pub job_recharge : String,
  pub job_expire : String,
  pub clean_mode : &'static str,
  pub carpet_boost : &'static str,
  pub clean_edges : &'static str,
  pub maint_due : bool,
  pub pmap0_id : Option<String>,
  #[serde(flatten)]
  pub mop : Option<MopAttributes>,
}

impl DerivedAttributes {
  pub fn to_map(&self) -> Map<String, Value> {
    match serde_json::to_value(self) {
      Ok( Value::Object( map ) ) => map,
      _ => Map::new(),
    }
  }
}

pub fn translate(raw : &RawStatus, now : DateTime<Utc>) -> DerivedAttributes {
  let mission = raw.mission();
  let cycle = mission.cycle.as_deref();
  let phase = mission.phase.as_deref();
  let not_ready = mission.not_ready;

  let job_minutes = elapsed_minutes(mission.mission_start, now);
  // hours are shown for all three timers once the job itself runs past an hour
  let long_form = matches!(job_minutes, Some( m ) if m > 60);
  let timer = |minutes : Option<i64>| match minutes {
    Some( m ) => format_elapsed(m, long_form),
    None => NOT_AVAILABLE.to_string(),
  };

  let bin = raw.bin.clone().unwrap_or(raw::BinStatus { full : Some(false), present : Some(false) });
  let runtime = raw.runtime_stats.clone().unwrap_or_default();

  DerivedAttributes {
    extended_status : extended_status(cycle, not_ready),
    notready_msg : NOT_READY.resolve(not_ready.as_ref()),
    error_msg : ERROR.resolve(mission.error.as_ref()),
    battery : match &raw.bat_pct {
      Some( pct ) => format!("{}%", pct),
      None => NOT_AVAILABLE.to_string(),
    },
    software_ver : raw.software_ver.as_deref().map(normalize_software_version),
    phase : phase_label(cycle, phase, raw.bat_pct.as_ref()),
    bin : BIN.resolve(bin.full.as_ref()),
    bin_present : YES_NO.resolve(bin.present.as_ref()),
    clean_base : CLEAN_BASE.resolve(raw.dock.as_ref().and_then(|d| d.state).as_ref()),
    location : location(raw),
    rssi : raw.signal.as_ref().and_then(|s| s.rssi.clone()),
    total_area : runtime.sqft.map(|sqft| format!("{}m²", (sqft / SQFT_PER_SQM * 100.0).round_ties_even() as i64)),
    total_time : match (&runtime.hr, &runtime.min) {
      (Some( hr ), Some( min )) => format!("{}h {}m", hr, min),
      _ => NOT_AVAILABLE.to_string(),
    },
    total_jobs : raw.bbmssn.as_ref().and_then(|b| b.missions.clone()),
    dirt_events : raw.bbrun.as_ref().and_then(|b| b.dirt_events.clone()),
    evac_events : raw.bbrun.as_ref().and_then(|b| b.evac_events.clone()),
    job_initiator : JOB_INITIATOR.resolve(mission.initiator.as_deref()),
    job_time : timer(job_minutes),
    job_recharge : timer(elapsed_minutes(mission.recharge, now)),
    job_expire : timer(elapsed_minutes(mission.expire, now)),
    clean_mode : clean_mode(raw.no_auto_passes, raw.two_pass),
    carpet_boost : carpet_boost(raw.vac_high, raw.carpet_boost),
    clean_edges : if raw.open_only.unwrap_or(false) { "false" } else { "true" },
    maint_due : false,
    pmap0_id : first_pmap_id(raw.pmaps.as_deref()),
    mop : mop::mop_attributes(raw, not_ready),
  }
}

fn extended_status(cycle : Option<&str>, not_ready : Option<i64>) -> Value {
  match not_ready {
    Some( NOT_READY_PENDING ) if cycle == Some("none") => Value::from("Pending"),
    Some( code ) if code > 0 => Value::from(format!("Not Ready ({})", code)),
    _ => CYCLE.resolve(cycle),
  }
}

fn phase_label(cycle : Option<&str>, phase : Option<&str>, battery : Option<&Number>) -> Value {
  if phase == Some("charge") && battery.and_then(Number::as_f64) == Some(100.0) {
    Value::from("Idle")
  } else if cycle == Some("none") && phase == Some("stop") {
    Value::from("Stopped")
  } else {
    PHASE.resolve(phase)
  }
}

/// Rounds half to even. A zero timestamp means "never".
pub fn elapsed_minutes(timestamp : Option<f64>, now : DateTime<Utc>) -> Option<i64> {
  let timestamp = timestamp.filter(|t| *t != 0.0 && t.is_finite())?;
  let now = now.timestamp_millis() as f64 / 1000.0;
  Some( ((now - timestamp) / 60.0).round_ties_even() as i64 )
}

pub fn format_elapsed(minutes : i64, long_form : bool) -> String {
  if long_form {
    format!("{}h {:0>2}m", minutes.div_euclid(60), minutes.rem_euclid(60))
  } else {
    format!("{}m", minutes)
  }
}

pub fn carpet_boost(vac_high : Option<bool>, carpet_boost : Option<bool>) -> &'static str {
  match (vac_high, carpet_boost.unwrap_or(false)) {
    (None, _) => NOT_AVAILABLE,
    (Some( false ), false) => "Eco",
    (Some( true ), false) => "Performance",
    (Some( _ ), true) => "Auto",
  }
}

pub fn clean_mode(no_auto_passes : Option<bool>, two_pass : Option<bool>) -> &'static str {
  match (no_auto_passes, two_pass) {
    (Some( true ), Some( false )) => "One",
    (Some( true ), Some( true )) => "Two",
    (Some( _ ), Some( _ )) => "Auto",
    _ => NOT_AVAILABLE,
  }
}

pub fn normalize_software_version(version : &str) -> String {
  match version.split('+').nth(1) {
    Some( build ) => build.to_string(),
    None => version.to_string(),
  }
}

fn location(raw : &RawStatus) -> String {
  let pose = match &raw.pose {
    Some( pose ) => pose,
    None => return NOT_AVAILABLE.to_string(),
  };
  let theta = match &pose.theta {
    Some( theta ) => theta,
    None => return NOT_AVAILABLE.to_string(),
  };
  let point = pose.point.clone().unwrap_or_default();
  let coord = |c : Option<serde_json::Number>| c.map(|n| n.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string());
  format!("{}, {}, {}", coord(point.x), coord(point.y), theta)
}

fn first_pmap_id(pmaps : Option<&[Value]>) -> Option<String> {
  pmaps?.first()?.as_object()?.keys().next().cloned()
}

pub fn is_truthy(value : &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool( b ) => *b,
    Value::Number( n ) => n.as_f64().map_or(false, |n| n != 0.0),
    Value::String( s ) => !s.is_empty(),
    Value::Array( a ) => !a.is_empty(),
    Value::Object( o ) => !o.is_empty(),
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacuumActivity {
  Idle,
  Error,
  Cleaning,
  Docked,
}

impl VacuumActivity {
  pub fn name(&self) -> &'static str {
    match self {
      VacuumActivity::Idle => "Idle",
      VacuumActivity::Error => "Error",
      VacuumActivity::Cleaning => "Cleaning",
      VacuumActivity::Docked => "Docked",
    }
  }
}

// later rules override earlier ones
pub fn activity(raw : &RawStatus) -> VacuumActivity {
  let mission = raw.mission();
  let mut activity = VacuumActivity::Idle;
  if matches!(mission.not_ready, Some( code ) if code > 0) {
    activity = VacuumActivity::Error;
  }
  match mission.cycle.as_deref() {
    Some( "clean" | "quick" | "spot" | "train" ) => activity = VacuumActivity::Cleaning,
    Some( "evac" | "dock" ) => activity = VacuumActivity::Docked,
    _ => (),
  }
  activity
}

pub fn battery_icon(pct : i64) -> &'static str {
  if pct >= 95 {
    "mdi:battery"
  } else if pct >= 60 {
    "mdi:battery-60"
  } else if pct >= 30 {
    "mdi:battery-30"
  } else {
    "mdi:battery-alert"
  }
}

pub fn model(raw : &RawStatus) -> Option<String> {
  raw.sku.as_ref().map(|sku| format!("Roomba {}", sku))
}
