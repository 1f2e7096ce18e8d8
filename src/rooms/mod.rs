//! Per-room and per-zone "how many passes" selectors built from persistent map details.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::status::tables::{icon_for, REGION_ICON, ZONE_ICON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanPasses {
  DontClean,
  OnePass,
  TwoPasses,
}

impl CleanPasses {
  pub const ALL : [CleanPasses; 3] = [CleanPasses::DontClean, CleanPasses::OnePass, CleanPasses::TwoPasses];

  pub fn label(&self) -> &'static str {
    match self {
      CleanPasses::DontClean => "Don't Clean",
      CleanPasses::OnePass => "One Pass",
      CleanPasses::TwoPasses => "Two Passes",
    }
  }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassParams {
  #[serde(rename = "noAutoPasses")]
  pub no_auto_passes : bool,
  #[serde(rename = "twoPass")]
  pub two_pass : bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
  #[serde(rename = "rid")]
  Region,
  #[serde(rename = "zid")]
  Zone,
}

impl RegionKind {
  fn tag(&self) -> &'static str {
    match self {
      RegionKind::Region => "r",
      RegionKind::Zone => "z",
    }
  }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegionPayload {
  // sent back exactly as the map details carry it, string or number
  pub region_id : Value,
  #[serde(rename = "type")]
  pub kind : RegionKind,
  pub params : PassParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomSelector {
  pub unique_id : String,
  pub name : String,
  pub icon : &'static str,
  pub pmap_id : String,
  selection : CleanPasses,
  payload : RegionPayload,
}

impl RoomSelector {
  pub fn new(pmap_id : &str, map_name : &str, region_id : impl Into<Value>, room_name : Option<&str>, room_type : Option<&str>, kind : RegionKind) -> RoomSelector {
    let (fallback_name, icons) = match kind {
      RegionKind::Region => ("Unnamed Room", &REGION_ICON),
      RegionKind::Zone => ("Unnamed Zone", &ZONE_ICON),
    };
    let room_name = room_name.filter(|n| !n.is_empty()).unwrap_or(fallback_name);
    let region_id = region_id.into();
    let id_text = match &region_id {
      Value::String( id ) => id.clone(),
      id => id.to_string(),
    };

    RoomSelector {
      unique_id : format!("p_{}_{}_{}", id_text, kind.tag(), pmap_id),
      name : format!("Clean {}: {}", map_name, room_name),
      icon : icon_for(icons, room_type),
      pmap_id : pmap_id.to_string(),
      selection : CleanPasses::DontClean,
      payload : RegionPayload { region_id, kind, params : PassParams::default() },
    }
  }

  pub fn selection(&self) -> CleanPasses {
    self.selection
  }

  /// "Don't Clean" keeps whatever pass parameters were last chosen.
  pub fn select(&mut self, option : CleanPasses) {
    match option {
      CleanPasses::TwoPasses => self.payload.params = PassParams { no_auto_passes : true, two_pass : true },
      CleanPasses::OnePass => self.payload.params = PassParams { no_auto_passes : false, two_pass : false },
      CleanPasses::DontClean => (),
    }
    self.selection = option;
  }

  pub fn region_payload(&self) -> &RegionPayload {
    &self.payload
  }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
  #[error("missing or invalid `{0}`")]
  MissingField(&'static str),
}

/// Broken maps and entries are logged and skipped.
pub fn selectors_from_pmaps(pmaps : &[Value]) -> Vec<RoomSelector> {
  let mut selectors = Vec::new();
  for pmap in pmaps {
    match selectors_for_pmap(pmap) {
      Ok( mut s ) => selectors.append(&mut s),
      Err( e ) => log::warn!("Failed to create selectors for pmap {} : {}",
        pmap.get("pmap_id").and_then(Value::as_str).unwrap_or("unknown"), e),
    }
  }
  selectors
}

fn selectors_for_pmap(pmap : &Value) -> Result<Vec<RoomSelector>, SelectorError> {
  let details = pmap.get("active_pmapv_details").ok_or(SelectorError::MissingField("active_pmapv_details"))?;
  let map_name = details.pointer("/map_header/name").and_then(Value::as_str)
    .ok_or(SelectorError::MissingField("map_header.name"))?;
  let pmap_id = details.pointer("/active_pmapv/pmap_id").and_then(Value::as_str)
    .ok_or(SelectorError::MissingField("active_pmapv.pmap_id"))?;

  let mut selectors = Vec::new();
  for (list, kind) in [("regions", RegionKind::Region), ("zones", RegionKind::Zone)] {
    let entries = match details.get(list).and_then(Value::as_array) {
      Some( entries ) => entries,
      None => continue,
    };
    for entry in entries {
      match selector_for_entry(pmap_id, map_name, entry, kind) {
        Ok( s ) => selectors.push(s),
        Err( e ) => log::warn!("Skipping {} entry of pmap {} : {}", list, pmap_id, e),
      }
    }
  }
  Ok( selectors )
}

fn selector_for_entry(pmap_id : &str, map_name : &str, entry : &Value, kind : RegionKind) -> Result<RoomSelector, SelectorError> {
  let region_id = match entry.get("id") {
    Some( id @ (Value::String( _ ) | Value::Number( _ )) ) => id.clone(),
    _ => return Err( SelectorError::MissingField("id") ),
  };
  let type_key = match kind {
    RegionKind::Region => "region_type",
    RegionKind::Zone => "zone_type",
  };
  Ok( RoomSelector::new(
    pmap_id,
    map_name,
    region_id,
    entry.get("name").and_then(Value::as_str),
    entry.get(type_key).and_then(Value::as_str),
    kind,
  ))
}

/// Accepts either a bare list of maps or a robot record holding them under `pmaps`.
pub fn load_pmaps(path : &Path) -> Result<Vec<Value>, String> {
  let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {} : {}", path.display(), e))?;
  let value : Value = serde_json::from_str(&text).map_err(|e| format!("Failed to parse {} : {}", path.display(), e))?;
  match value {
    Value::Array( pmaps ) => Ok( pmaps ),
    Value::Object( mut robot ) => match robot.remove("pmaps") {
      Some( Value::Array( pmaps ) ) => Ok( pmaps ),
      _ => Err( format!("{} has no `pmaps` list", path.display()) ),
    },
    _ => Err( format!("{} is neither a list of maps nor a robot record", path.display()) ),
  }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CleanRoomsRequest {
  pub ordered : u8,
  pub pmap_id : String,
  pub regions : Vec<RegionPayload>,
}

// one ordered request per map
pub fn clean_requests(selectors : &[RoomSelector]) -> Vec<CleanRoomsRequest> {
  let mut requests : Vec<CleanRoomsRequest> = Vec::new();
  for s in selectors.iter().filter(|s| s.selection != CleanPasses::DontClean) {
    match requests.iter().position(|r| r.pmap_id == s.pmap_id) {
      Some( i ) => requests[i].regions.push(s.payload.clone()),
      None => requests.push(CleanRoomsRequest {
        ordered : 1,
        pmap_id : s.pmap_id.clone(),
        regions : vec![s.payload.clone()],
      }),
    }
  }
  requests
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn pmap() -> Value {
    json!({
      "pmap_id": "BGQxV6zGTmCsalWFHr-S5g",
      "active_pmapv_details": {
        "map_header": { "id": "BGQxV6zGTmCsalWFHr-S5g", "name": "Ground Floor" },
        "active_pmapv": { "pmap_id": "BGQxV6zGTmCsalWFHr-S5g" },
        "regions": [
          { "id": "11", "name": "Kitchen", "region_type": "kitchen" },
          { "id": "9", "name": "", "region_type": "living_room" },
          { "name": "No Id", "region_type": "office" },
        ],
        "zones": [
          { "id": 3, "name": "Rug", "zone_type": "rug" },
        ],
      },
    })
  }

  #[test]
  fn builds_regions_and_zones_skipping_broken_entries() {
    let selectors = selectors_from_pmaps(&[pmap(), json!({ "pmap_id": "broken" })]);
    assert_eq!(selectors.len(), 3);

    assert_eq!(selectors[0].name, "Clean Ground Floor: Kitchen");
    assert_eq!(selectors[0].icon, "mdi:fridge");
    assert_eq!(selectors[0].unique_id, "p_11_r_BGQxV6zGTmCsalWFHr-S5g");
    assert_eq!(selectors[1].name, "Clean Ground Floor: Unnamed Room");
    assert_eq!(selectors[2].name, "Clean Ground Floor: Rug");
    assert_eq!(selectors[2].unique_id, "p_3_z_BGQxV6zGTmCsalWFHr-S5g");
    assert_eq!(selectors[2].region_payload().kind, RegionKind::Zone);
    assert_eq!(selectors[2].icon, "mdi:rug");
  }

  #[test]
  fn numeric_zone_id_stays_numeric_on_the_wire() {
    let selectors = selectors_from_pmaps(&[pmap()]);
    assert_eq!(selectors[0].region_payload().region_id, json!("11"));
    assert_eq!(serde_json::to_value(selectors[2].region_payload()).unwrap(), json!({
      "region_id": 3,
      "type": "zid",
      "params": { "noAutoPasses": false, "twoPass": false },
    }));
  }

  #[test]
  fn new_selector_defaults_to_dont_clean() {
    let s = RoomSelector::new("m", "Map", "1", Some("Hall"), None, RegionKind::Region);
    assert_eq!(s.selection(), CleanPasses::DontClean);
    assert_eq!(s.region_payload().params, PassParams { no_auto_passes : false, two_pass : false });
    assert_eq!(s.icon, "mdi:map-marker");
  }

  #[test]
  fn pass_choice_maps_to_params() {
    let mut s = RoomSelector::new("m", "Map", "1", Some("Hall"), None, RegionKind::Region);
    s.select(CleanPasses::TwoPasses);
    assert_eq!(s.region_payload().params, PassParams { no_auto_passes : true, two_pass : true });
    s.select(CleanPasses::DontClean);
    assert_eq!(s.selection(), CleanPasses::DontClean);
    assert_eq!(s.region_payload().params, PassParams { no_auto_passes : true, two_pass : true });
    s.select(CleanPasses::OnePass);
    assert_eq!(s.region_payload().params, PassParams { no_auto_passes : false, two_pass : false });
  }

  #[test]
  fn region_payload_wire_format() {
    let mut s = RoomSelector::new("m", "Map", "11", None, None, RegionKind::Zone);
    s.select(CleanPasses::TwoPasses);
    assert_eq!(serde_json::to_value(s.region_payload()).unwrap(), json!({
      "region_id": "11",
      "type": "zid",
      "params": { "noAutoPasses": true, "twoPass": true },
    }));
  }

  #[test]
  fn clean_requests_group_selected_rooms_by_map() {
    let mut a = RoomSelector::new("m1", "Up", "1", None, None, RegionKind::Region);
    let b = RoomSelector::new("m1", "Up", "2", None, None, RegionKind::Region);
    let mut c = RoomSelector::new("m2", "Down", "7", None, None, RegionKind::Zone);
    let mut d = RoomSelector::new("m1", "Up", "3", None, None, RegionKind::Region);
    a.select(CleanPasses::OnePass);
    c.select(CleanPasses::TwoPasses);
    d.select(CleanPasses::TwoPasses);

    let requests = clean_requests(&[a, b, c, d]);
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].pmap_id, "m1");
    let ids : Vec<&Value> = requests[0].regions.iter().map(|r| &r.region_id).collect();
    assert_eq!(ids, vec![&json!("1"), &json!("3")]);
    assert_eq!(requests[1].pmap_id, "m2");
    assert_eq!(requests[1].ordered, 1);
  }

  #[test]
  fn nothing_selected_means_no_requests() {
    let s = RoomSelector::new("m", "Map", "1", None, None, RegionKind::Region);
    assert!(clean_requests(&[s]).is_empty());
  }

  #[test]
  fn options_are_offered_in_order() {
    let labels : Vec<&str> = CleanPasses::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["Don't Clean", "One Pass", "Two Passes"]);
  }
}
