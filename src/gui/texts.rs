use crate::interface::Language;

pub struct Texts {
  language : Language,
}

impl Texts {
 pub fn new(language : Language) -> Texts {
   Texts {language}
 }

 /// Caption for a derived attribute key; unknown keys are shown as-is.
 pub fn attribute<'a>(&self, key : &'a str) -> &'a str {
     match key {
       "extendedStatus" => self.select("Состояние", "Status"),
       "notready_msg" => self.select("Не готов", "Not ready"),
       "error_msg" => self.select("Ошибка", "Error"),
       "battery" => self.select("Батарея", "Battery"),
       "software_ver" => self.select("Прошивка", "Software"),
       "phase" => self.select("Фаза", "Phase"),
       "bin" => self.select("Контейнер", "Bin"),
       "bin_present" => self.select("Контейнер на месте", "Bin present"),
       "clean_base" => self.select("База", "Clean base"),
       "location" => self.select("Положение", "Location"),
       "rssi" => self.select("Сигнал", "Signal"),
       "total_area" => self.select("Убрано всего", "Total area"),
       "total_time" => self.select("Время всего", "Total time"),
       "total_jobs" => self.select("Уборок всего", "Total jobs"),
       "dirt_events" => self.select("Грязные места", "Dirt events"),
       "evac_events" => self.select("Опустошения", "Evac events"),
       "job_initiator" => self.select("Запущено", "Started by"),
       "job_time" => self.select("Время уборки", "Job time"),
       "job_recharge" => self.select("Подзарядка", "Recharge"),
       "job_expire" => self.select("Истекает", "Expires"),
       "clean_mode" => self.select("Проходы", "Clean mode"),
       "carpet_boost" => self.select("Ковры", "Carpet boost"),
       "clean_edges" => self.select("Края", "Clean edges"),
       "maint_due" => self.select("Обслуживание", "Maintenance due"),
       "pmap0_id" => self.select("Карта", "Map id"),
       "mop_behavior" => self.select("Режим мытья", "Mop behavior"),
       "pad" => self.select("Салфетка", "Pad"),
       "tank" => self.select("Бак", "Tank"),
       "pad_wetness" => self.select("Влажность салфетки", "Pad wetness"),
       other => other,
     }
 }

 pub fn start<'a>(&self) -> &'a str {
     self.select("Убрать", "Clean")
 }

 pub fn dock<'a>(&self) -> &'a str {
     self.select("На базу", "Dock")
 }

 pub fn rooms<'a>(&self) -> &'a str {
     self.select("Комнаты", "Rooms")
 }

 pub fn unavailable<'a>(&self) -> &'a str {
     self.select("Нет связи", "Unavailable")
 }

 fn select<'a>(&self, t1 : &'a str, t2: &'a str) -> &'a str
 {
     if self.language == Language::Russian {
         t1
     } else {
         t2
     }
 }

}
