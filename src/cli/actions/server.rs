use crate::api;
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Fail fast on a connection string the pool could never use
            let dsn = Url::parse(&dsn)?;

            api::new(port, dsn.to_string(), globals).await?;
        }

        Action::Seed { .. } => return Err(anyhow!("unexpected action")),
    }

    Ok(())
}
