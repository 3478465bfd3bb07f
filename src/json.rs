use erased_serde::Serialize as EraSerialize;
use log::info;
use rocket::response::Responder;
use rocket::response::content::RawJson;
use serde::Serialize;

use crate::error::CaptureError;

#[derive(Serialize, Debug, PartialEq)]
pub enum Status {
    Ok,
    /// The request was valid but the player has to act first (e.g. free a team slot)
    Blocked(String),
    Error(String),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Data<'a> {
    Owned(Box<dyn EraSerialize + 'static>),
    Ref(&'a dyn EraSerialize),
}

/// The `{status, data}` envelope every endpoint answers with
#[derive(Serialize)]
pub struct JsonStatus<'a> {
    status: Status,
    data: Data<'a>,
}

impl From<JsonStatus<'_>> for RawJson<String> {
    fn from(status: JsonStatus) -> Self {
        let body = serde_json::to_string(&status).unwrap_or_else(|e| {
            format!(
                "{{\"status\":{{\"Error\":\"Failed to serialize response: {}\"}},\"data\":[]}}",
                e
            )
        });
        RawJson(body)
    }
}

impl From<CaptureError> for JsonStatus<'static> {
    fn from(error: CaptureError) -> Self {
        match error {
            CaptureError::TeamFull { .. } => JsonStatus::blocked(error),
            _ => JsonStatus::error(error),
        }
    }
}

pub type JsonResult<'a> = Result<JsonStatus<'a>, JsonStatus<'static>>;

impl JsonStatus<'static> {
    pub fn new_owned(status: Status, data: impl EraSerialize + 'static) -> Self {
        JsonStatus {
            status,
            data: Data::Owned(Box::new(data)),
        }
    }

    pub fn new_empty(status: Status) -> Self {
        JsonStatus::new_owned(status, Vec::<String>::new())
    }

    pub fn error<T: ToString>(message: T) -> Self {
        info!("Error while running request: {}", message.to_string());
        JsonStatus::new_empty(Status::Error(message.to_string()))
    }

    pub fn blocked<T: ToString>(message: T) -> Self {
        info!("Request blocked: {}", message.to_string());
        JsonStatus::new_empty(Status::Blocked(message.to_string()))
    }

    pub fn ok<T: ToString>(message: Option<T>) -> Self {
        match message {
            Some(message) => JsonStatus::new_owned(Status::Ok, vec![message.to_string()]),
            None => JsonStatus::new_empty(Status::Ok),
        }
    }

    pub fn data_owned(data: impl EraSerialize + 'static) -> Self {
        JsonStatus::new_owned(Status::Ok, data)
    }

    pub fn from_anyhow(error: anyhow::Error) -> Self {
        JsonStatus::error(format!("{:#}", error))
    }
}

impl<'a> JsonStatus<'a> {
    pub fn data_ref<T: EraSerialize>(data: &'a T) -> Self {
        JsonStatus {
            status: Status::Ok,
            data: Data::Ref(data),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for JsonStatus<'o> {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        RawJson::<String>::from(self).respond_to(request)
    }
}
