use cinema_cart_app::{context::AppContext, domain::carts::CartViewModel};
use clap::{Parser, Subcommand};

use crate::config::{LoggingConfig, StorageConfig};

mod add;
mod clear;
mod remove;
mod render;
mod show;
mod update;

#[derive(Debug, Parser)]
#[command(name = "cinema-cart", about = "Cinema ticket cart", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) storage: StorageConfig,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the cart and its order summary
    Show,
    /// Add tickets for a screening
    Add(add::AddArgs),
    /// Remove a line from the cart
    Remove(remove::RemoveArgs),
    /// Replace the quantity of a line; zero or below removes it
    Update(update::UpdateArgs),
    /// Empty the cart
    Clear,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let app = AppContext::from_storage_dir(&self.storage.storage_dir)
            .await
            .map_err(|error| format!("{error}: {}", self.storage.storage_dir.display()))?;

        let mut view_model = CartViewModel::mount(app.carts).await;

        if let Some(message) = view_model.error() {
            return Err(message.to_owned());
        }

        match self.command {
            Commands::Show => show::run(&view_model),
            Commands::Add(args) => add::run(args, &mut view_model).await,
            Commands::Remove(args) => remove::run(args, &mut view_model).await,
            Commands::Update(args) => update::run(args, &mut view_model).await,
            Commands::Clear => clear::run(&mut view_model).await,
        }
    }
}

/// Turn a failed view-model request into a command error.
fn settled(view_model: &CartViewModel) -> Result<(), String> {
    match view_model.error() {
        Some(message) => Err(message.to_owned()),
        None => Ok(()),
    }
}
