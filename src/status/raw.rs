//! Raw status snapshot as the rest980 bridge reports it. A field with an
//! unexpected type reads as absent without affecting the others.

use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

fn lenient<'de, D, T>(deserializer : D) -> Result<Option<T>, D::Error>
  where D : Deserializer<'de>, T : DeserializeOwned
{
  let value = Value::deserialize(deserializer)?;
  Ok( serde_json::from_value(value).ok() )
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct RawStatus {
  #[serde(rename = "cleanMissionStatus", default, deserialize_with = "lenient")]
  pub mission : Option<MissionStatus>,
  #[serde(rename = "softwareVer", default, deserialize_with = "lenient")]
  pub software_ver : Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub sku : Option<String>,
  #[serde(rename = "vacHigh", default, deserialize_with = "lenient")]
  pub vac_high : Option<bool>,
  #[serde(rename = "carpetBoost", default, deserialize_with = "lenient")]
  pub carpet_boost : Option<bool>,
  #[serde(rename = "batPct", default, deserialize_with = "lenient")]
  pub bat_pct : Option<Number>,
  #[serde(default, deserialize_with = "lenient")]
  pub bin : Option<BinStatus>,
  #[serde(default, deserialize_with = "lenient")]
  pub dock : Option<DockStatus>,
  #[serde(default, deserialize_with = "lenient")]
  pub pose : Option<Pose>,
  #[serde(default, deserialize_with = "lenient")]
  pub signal : Option<Signal>,
  #[serde(rename = "runtimeStats", default, deserialize_with = "lenient")]
  pub runtime_stats : Option<RuntimeStats>,
  #[serde(default, deserialize_with = "lenient")]
  pub bbmssn : Option<MissionTotals>,
  #[serde(default, deserialize_with = "lenient")]
  pub bbrun : Option<RunTotals>,
  #[serde(default, deserialize_with = "lenient")]
  pub pmaps : Option<Vec<Value>>,
  #[serde(rename = "noAutoPasses", default, deserialize_with = "lenient")]
  pub no_auto_passes : Option<bool>,
  #[serde(rename = "twoPass", default, deserialize_with = "lenient")]
  pub two_pass : Option<bool>,
  #[serde(rename = "openOnly", default, deserialize_with = "lenient")]
  pub open_only : Option<bool>,
  #[serde(rename = "padWetness", default)]
  pub pad_wetness : Option<Value>,
  #[serde(rename = "rankOverlap", default, deserialize_with = "lenient")]
  pub rank_overlap : Option<i64>,
  #[serde(rename = "detectedPad", default, deserialize_with = "lenient")]
  pub detected_pad : Option<String>,
  #[serde(rename = "tankPresent", default, deserialize_with = "lenient")]
  pub tank_present : Option<bool>,
  #[serde(rename = "lidOpen", default, deserialize_with = "lenient")]
  pub lid_open : Option<bool>,
}

impl RawStatus {
  pub fn from_value(value : Value) -> RawStatus {
    serde_json::from_value(value).unwrap_or_default()
  }

  pub fn mission(&self) -> MissionStatus {
    self.mission.clone().unwrap_or_default()
  }
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct MissionStatus {
  #[serde(default, deserialize_with = "lenient")]
  pub cycle : Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub phase : Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub error : Option<i64>,
  #[serde(rename = "notReady", default, deserialize_with = "lenient")]
  pub not_ready : Option<i64>,
  #[serde(default, deserialize_with = "lenient")]
  pub initiator : Option<String>,
  #[serde(rename = "mssnStrtTm", default, deserialize_with = "lenient")]
  pub mission_start : Option<f64>,
  #[serde(rename = "rechrgTm", default, deserialize_with = "lenient")]
  pub recharge : Option<f64>,
  #[serde(rename = "expireTm", default, deserialize_with = "lenient")]
  pub expire : Option<f64>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct BinStatus {
  #[serde(default, deserialize_with = "lenient")]
  pub full : Option<bool>,
  #[serde(default, deserialize_with = "lenient")]
  pub present : Option<bool>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct DockStatus {
  #[serde(default, deserialize_with = "lenient")]
  pub state : Option<i64>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Pose {
  #[serde(default, deserialize_with = "lenient")]
  pub theta : Option<Number>,
  #[serde(default, deserialize_with = "lenient")]
  pub point : Option<Point>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Point {
  #[serde(default, deserialize_with = "lenient")]
  pub x : Option<Number>,
  #[serde(default, deserialize_with = "lenient")]
  pub y : Option<Number>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Signal {
  #[serde(default, deserialize_with = "lenient")]
  pub rssi : Option<Number>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct RuntimeStats {
  #[serde(default, deserialize_with = "lenient")]
  pub sqft : Option<f64>,
  #[serde(default, deserialize_with = "lenient")]
  pub hr : Option<Number>,
  #[serde(default, deserialize_with = "lenient")]
  pub min : Option<Number>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct MissionTotals {
  #[serde(rename = "nMssn", default, deserialize_with = "lenient")]
  pub missions : Option<Number>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct RunTotals {
  #[serde(rename = "nScrubs", default, deserialize_with = "lenient")]
  pub dirt_events : Option<Number>,
  #[serde(rename = "nEvacs", default, deserialize_with = "lenient")]
  pub evac_events : Option<Number>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn wrong_types_drop_only_that_field() {
    let raw = RawStatus::from_value(json!({
      "batPct": "full",
      "vacHigh": true,
      "cleanMissionStatus": { "cycle": 7, "phase": "run" },
    }));
    assert_eq!(raw.bat_pct, None);
    assert_eq!(raw.vac_high, Some(true));
    let mission = raw.mission();
    assert_eq!(mission.cycle, None);
    assert_eq!(mission.phase.as_deref(), Some("run"));
  }

  #[test]
  fn non_object_reads_as_empty() {
    let raw = RawStatus::from_value(json!([1, 2, 3]));
    assert!(raw.mission.is_none());
    assert!(raw.software_ver.is_none());
  }

  #[test]
  fn nulls_read_as_absent() {
    let raw = RawStatus::from_value(json!({ "bin": null, "dock": { "state": null } }));
    assert!(raw.bin.is_none());
    assert_eq!(raw.dock.and_then(|d| d.state), None);
  }
}
