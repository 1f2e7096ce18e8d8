use serde::Serialize;
use serde_json::Value;

use super::raw::RawStatus;
use super::tables::{MOP_RANK, PAD};
use super::{is_truthy, NOT_AVAILABLE};

const NOT_READY_FILL_TANK : i64 = 31;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MopAttributes {
  pub mop_behavior : Value,
  // unknown pad codes read as null, no pad detected omits the key
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pad : Option<Value>,
  pub tank : &'static str,
  pub pad_wetness : Value,
}

/// `None` for vacuum-only robots.
pub fn mop_attributes(raw : &RawStatus, not_ready : Option<i64>) -> Option<MopAttributes> {
  let pad_wetness = raw.pad_wetness.as_ref().filter(|v| is_truthy(v))?;

  let mop_behavior = match raw.rank_overlap {
    Some( rank ) if rank != 0 => MOP_RANK.resolve(Some(&rank)),
    _ => Value::from(NOT_AVAILABLE),
  };

  let pad = raw.detected_pad.as_deref()
    .filter(|code| !code.is_empty())
    .map(|code| PAD.get(code).map(Value::from).unwrap_or(Value::Null));

  Some( MopAttributes {
    mop_behavior,
    pad,
    tank : tank_status(raw.tank_present, not_ready, raw.lid_open),
    pad_wetness : wetness_override(pad_wetness),
  })
}

pub fn wetness_override(pad_wetness : &Value) -> Value {
  match pad_wetness {
    Value::Object( pad ) => pad.get("disposable")
      .or_else(|| pad.get("reusable"))
      .cloned()
      .unwrap_or(Value::from(0)),
    scalar => scalar.clone(),
  }
}

pub fn tank_status(tank_present : Option<bool>, not_ready : Option<i64>, lid_open : Option<bool>) -> &'static str {
  if !tank_present.unwrap_or(false) {
    "Tank Missing"
  } else if not_ready == Some(NOT_READY_FILL_TANK) {
    "Fill Tank"
  } else if !lid_open.unwrap_or(false) {
    "Ready"
  } else {
    "Lid Open"
  }
}
