use anyhow::Result;

use crate::{get_db_path, open_service};

pub(crate) async fn run() -> Result<()> {
    let rows = open_service()?.check().await?;
    println!("Archive reachable at {}: {rows} rows", get_db_path().display());
    Ok(())
}
