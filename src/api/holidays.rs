//! Public holiday lookup.
//!
//! The board only needs one capability from the outside world: "give me the
//! current list of upcoming public holidays". [`HolidaySource`] is that
//! capability; [`NagerClient`] implements it against the Nager.Date API
//! (or any endpoint returning the same JSON shape).
//!
//! ## Applying results
//!
//! [`refresh_holidays`] fetches once and applies the whole list with a single
//! `set_holidays` call. A failed fetch is reported and leaves the store's
//! holiday list untouched, so the grid simply renders without holidays.
//!
//! ```rust,no_run
//! use calboard::api::holidays::{refresh_holidays, NagerClient};
//! use calboard::libs::config::HolidaysConfig;
//! use calboard::libs::store::TaskStore;
//!
//! # async fn run() {
//! let mut store = TaskStore::new();
//! let client = NagerClient::new(&HolidaysConfig::default());
//! refresh_holidays(&client, &mut store).await;
//! # }
//! ```

use crate::libs::config::HolidaysConfig;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{parse_calendar_date, Holiday};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

/// Anything able to produce the current holiday list.
#[allow(async_fn_in_trait)]
pub trait HolidaySource {
    async fn fetch(&self) -> Result<Vec<Holiday>>;
}

/// One entry of the API response. Fields other than `date` and `name`
/// (country code, local name, ...) are ignored.
#[derive(Debug, Deserialize)]
struct HolidayEntry {
    date: String,
    name: String,
}

#[derive(Debug)]
pub struct NagerClient {
    client: Client,
    config: HolidaysConfig,
}

impl NagerClient {
    pub fn new(config: &HolidaysConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.config.api_url
    }
}

impl HolidaySource for NagerClient {
    async fn fetch(&self) -> Result<Vec<Holiday>> {
        msg_debug!(Message::HolidaysFetching(self.config.api_url.clone()));
        let response = self.client.get(&self.config.api_url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_holidays(&body)
    }
}

/// Parses an API response body into holidays.
///
/// Entries whose date cannot be read are skipped rather than failing the
/// whole list.
pub fn parse_holidays(body: &str) -> Result<Vec<Holiday>> {
    let entries: Vec<HolidayEntry> = serde_json::from_str(body)?;
    let holidays = entries
        .into_iter()
        .filter_map(|entry| match parse_calendar_date(&entry.date) {
            Some(date) => Some(Holiday { date, name: entry.name }),
            None => {
                warn!(date = %entry.date, name = %entry.name, "skipping holiday with unreadable date");
                None
            }
        })
        .collect();
    Ok(holidays)
}

/// Fetches holidays from `source` and replaces the store's list.
///
/// Returns the number of holidays applied, or `None` if the fetch failed.
pub async fn refresh_holidays<S: HolidaySource>(source: &S, store: &mut TaskStore) -> Option<usize> {
    match source.fetch().await {
        Ok(holidays) => {
            let count = holidays.len();
            store.set_holidays(holidays);
            msg_debug!(Message::HolidaysFetched(count));
            Some(count)
        }
        Err(error) => {
            msg_error!(Message::HolidaysFetchFailed(error.to_string()));
            None
        }
    }
}
