use crate::{
    api::holidays::{refresh_holidays, NagerClient},
    libs::{config::Config, messages::Message, store::TaskStore, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?.holidays_or_default();
    if !config.enabled {
        msg_info!(Message::HolidaysDisabled);
        return Ok(());
    }

    let client = NagerClient::new(&config);
    msg_info!(Message::HolidaysFetching(client.url().to_string()));

    let mut store = TaskStore::new();
    if refresh_holidays(&client, &mut store).await.is_none() {
        return Ok(());
    }

    if store.holidays().is_empty() {
        msg_info!(Message::NoHolidays);
        return Ok(());
    }

    msg_print!(Message::HolidaysHeader, true);
    View::holidays(store.holidays())?;
    Ok(())
}
