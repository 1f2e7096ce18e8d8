use eframe::egui;
use crate::egui::*;
use crate::egui::widget_text::RichText;
use tokio::sync::mpsc::{channel, Sender, Receiver};
use tokio::sync::mpsc::error::TryRecvError;
use std::thread;
use log;
use egui_extras::{TableBuilder, Column};
use serde_json::Value;

use crate::interface::*;
use crate::rooms::{self, CleanPasses, RoomSelector};
use crate::status::{self, VacuumActivity};
use crate::worker::worker_thread;

mod texts;
use texts::Texts;

pub struct RoombaDashboard {
  state : RobotState,
  receiver : Receiver<RobotState>,
  sender : Sender<RobotCommand>,
  selectors : Vec<RoomSelector>,
  texts : Texts,
}

impl RoombaDashboard {
  pub fn new(cc : &eframe::CreationContext<'_>, cfg : RoombaDashboardConfig, selectors : Vec<RoomSelector>) -> Self {

    log::debug!("RoombaDashboard created with IntegrationInfo {:?}", cc.integration_info);
    const MAX_NUM_MESSAGES : usize = 10;

    let (worker_sender, gui_receiver) = channel::<RobotState>(MAX_NUM_MESSAGES);
    let (gui_sender, worker_receiver) = channel::<RobotCommand>(MAX_NUM_MESSAGES);

    let ctx = cc.egui_ctx.clone();

    let mut style = (*ctx.style()).clone();
    style.visuals.selection.bg_fill = Color32::DARK_GREEN;
    ctx.set_style(style);

    let rest980_config = cfg.rest980_config.clone();
    // it detaches but we are control it via channels
    thread::spawn(move|| worker_thread(worker_sender, worker_receiver, ctx, rest980_config));

    RoombaDashboard {
     state : RobotState::default(),
     receiver : gui_receiver,
     sender : gui_sender,
     selectors,
     texts : Texts::new(cfg.language),
   }
  }

  fn send_command(&self, cmd : RobotCommand) {
    if let Err( err ) = self.sender.try_send( cmd ) {
      log::error!("Failed to send {:?} command. Ignoring.", err);
    }
  }

}

impl eframe::App for RoombaDashboard {
  fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {

    //only last message from channel is actual
    let mut new_state : Option<RobotState> = None;
    loop {
      match self.receiver.try_recv() {
        Ok( state ) => {
            new_state = Some( state );
         },
        Err( TryRecvError::Disconnected ) => {
          log::error!("Worker thread is dead. Closing...");
          frame.close();
          break;
        },
        _ => break,
      }
    }

    if let Some( new_state ) = new_state {
      log::debug!("recv: {:?}", new_state);
      self.state = new_state;
    }

    let mut command = None;
    let mut close = false;
    let state = &self.state;
    let texts = &self.texts;
    let selectors = &mut self.selectors;

    egui::CentralPanel::default().show(ctx, |ui| {
      header(ui, state, texts);
      ui.separator();

      ui.columns(2, |columns| {
        attributes_table(&mut columns[0], state, texts);
        command = rooms_group(&mut columns[1], selectors, texts);
      });

      if ui.ctx().input( |i| i.key_pressed(Key::Q) )   {
        close = true;
      }
    });

    if let Some( cmd ) = command {
      self.send_command(cmd);
    }
    if close {
      frame.close();
    }
  }

}

fn header(ui : &mut Ui, state : &RobotState, texts : &Texts) {
  let title = state.model.clone().unwrap_or_else(|| String::from("Roomba"));

  let activity_text = if !state.available {
    RichText::new(texts.unavailable()).heading().color(Color32::GRAY)
  } else {
    let color = match state.activity {
      VacuumActivity::Error => Color32::RED,
      VacuumActivity::Cleaning => Color32::GREEN,
      VacuumActivity::Docked | VacuumActivity::Idle => Color32::LIGHT_GREEN,
    };
    RichText::new(state.activity.name()).heading().color(color)
  };

  ui.horizontal(|ui| {
    ui.heading(title);
    ui.label(activity_text);
    if let Some( pct ) = state.battery_pct {
      ui.label(RichText::new(format!("{}%", pct)).heading())
        .on_hover_text(status::battery_icon(pct));
    }
  });

  if let Some( err ) = &state.last_error {
    ui.label(RichText::new(err).color(Color32::RED));
  }
}

fn attributes_table(ui : &mut Ui, state : &RobotState, texts : &Texts) {
  let rows : Vec<(String, String)> = match &state.attributes {
    None => Vec::new(),
    Some( attributes ) => attributes.to_map().into_iter()
      .map(|(key, value)| (texts.attribute(&key).to_string(), display_value(&value)))
      .collect(),
  };

  ui.push_id("Attributes Table", |ui| {
      TableBuilder::new(ui)
          .column(Column::auto())
          .column(Column::auto())
          .body(|body| {
              body.rows(24.0, rows.len(), |row_index, mut row| {
                  let (caption, value) = &rows[row_index];
                  row.col(|ui| {
                      ui.label( RichText::new(caption).color(Color32::GREEN) );
                  });
                  row.col(|ui| {
                      ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                          ui.label( RichText::new(value).strong() );
                      });
                  });
              });
          });
    });
}

fn rooms_group(ui : &mut Ui, selectors : &mut [RoomSelector], texts : &Texts) -> Option<RobotCommand> {
  let mut command = None;

  ui.group(|ui| {
    ui.vertical(|ui| {
      ui.heading(texts.rooms());
      for selector in selectors.iter_mut() {
        let mut selected = selector.selection();
        ui.horizontal(|ui| {
          ui.label(&selector.name).on_hover_text(selector.icon);
          ComboBox::from_id_source(&selector.unique_id)
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
              for option in CleanPasses::ALL {
                ui.selectable_value(&mut selected, option, option.label());
              }
            });
        });
        if selected != selector.selection() {
          log::debug!("{} set to {}", selector.unique_id, selected.label());
          selector.select(selected);
        }
      }

      ui.horizontal(|ui| {
        if ui.button(texts.start()).clicked() {
          command = Some( RobotCommand::CleanRooms(rooms::clean_requests(&*selectors)) );
        }
        if ui.button(texts.dock()).clicked() {
          command = Some( RobotCommand::ReturnHome );
        }
      });
    });
  });

  command
}

fn display_value(value : &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String( s ) => s.clone(),
    other => other.to_string(),
  }
}
