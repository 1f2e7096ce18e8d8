use reqwest;
use serde_json::Value;
use std::time::Duration;

use crate::interface::Rest980Config;
use crate::rooms::CleanRoomsRequest;

#[derive(Debug, thiserror::Error)]
pub enum Rest980Error {
  #[error("request to rest980 failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("rest980 answered {0}")]
  Status(reqwest::StatusCode),
}

#[derive(Clone)]
pub struct Rest980Client {
  client : reqwest::Client,
  base_url : String,
}

impl Rest980Client {
  pub fn new(cfg : &Rest980Config) -> Result<Self, Rest980Error> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(cfg.request_timeout_secs))
      .build()?;
    Ok( Rest980Client { client, base_url : cfg.base_url.trim_end_matches('/').to_string() } )
  }

  pub async fn state(&self) -> Result<Value, Rest980Error> {
    let resp = self.client.get(self.url("/api/local/info/state")).send().await?;
    let resp = check_status(resp)?;
    Ok( resp.json::<Value>().await? )
  }

  pub async fn clean_rooms(&self, request : &CleanRoomsRequest) -> Result<(), Rest980Error> {
    let resp = self.client.post(self.url("/api/local/action/cleanRoom")).json(request).send().await?;
    check_status(resp)?;
    Ok(())
  }

  pub async fn dock(&self) -> Result<(), Rest980Error> {
    let resp = self.client.get(self.url("/api/local/action/dock")).send().await?;
    check_status(resp)?;
    Ok(())
  }

  fn url(&self, path : &str) -> String {
    format!("{}{}", self.base_url, path)
  }
}

fn check_status(resp : reqwest::Response) -> Result<reqwest::Response, Rest980Error> {
  if resp.status().is_success() {
    Ok( resp )
  } else {
    Err( Rest980Error::Status(resp.status()) )
  }
}

pub async fn execute_command(client : &Rest980Client, cmd : crate::interface::RobotCommand)
{
  use crate::interface::RobotCommand;

  log::debug!("Got CMD: {:?}", cmd);
  match cmd {
    RobotCommand::CleanRooms( requests ) => {
      if requests.is_empty() {
        log::warn!("No rooms selected for cleaning");
      }
      for request in requests {
        if let Err( e ) = client.clean_rooms(&request).await {
          log::warn!("Error while starting clean of pmap {} : {}", request.pmap_id, e);
        }
      }
    },
    RobotCommand::ReturnHome =>
      if let Err( e ) = client.dock().await {
        log::warn!("Error while sending robot home : {}", e);
    },
  };
}
