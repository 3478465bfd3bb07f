/// HTTP endpoints for the theme preference
pub mod endpoints;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::CaptureError,
    storage::{StoreRecord, THEME_KEY},
};

/// The frontend colour scheme
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl StoreRecord for Theme {
    const STORE_KEY: &'static str = THEME_KEY;
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(CaptureError::UnknownTheme(s.to_string())),
        }
    }
}
