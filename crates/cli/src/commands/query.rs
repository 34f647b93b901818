use anyhow::Result;
use passage_archive_core::Category;

use crate::open_service;

pub(crate) async fn run_list(category: Option<Category>, limit: usize) -> Result<()> {
    let records = open_service()?.list_records(category, limit).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) async fn run_textbooks() -> Result<()> {
    let textbooks = open_service()?.textbook_options().await;
    println!("{}", serde_json::to_string_pretty(&textbooks)?);
    Ok(())
}

pub(crate) async fn run_units(textbook: &str) -> Result<()> {
    let units = open_service()?.unit_options(textbook).await;
    println!("{}", serde_json::to_string_pretty(&units)?);
    Ok(())
}
