use anyhow::Result;
use spuro::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Server { .. } => actions::server::handle(action, &globals).await?,
        Action::Seed { .. } => actions::seed::handle(action).await?,
    }

    Ok(())
}
