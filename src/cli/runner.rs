//! CLI runner - executes commands

use crate::cli::commands::{BatchCommands, Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(&self.client_config()?)?;

        let cancel = client.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling request");
                cancel.cancel();
            }
        });

        match &self.cli.command {
            Commands::Batches { command } => self.batches(&client, command).await,
        }
    }

    /// Resolve configuration: file (or defaults), then environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        }
        .with_overrides(|key| std::env::var(key).ok());

        if let Some(url) = &self.cli.api_url {
            config = config.with_api_url(url);
        }
        if let Some(token) = &self.cli.auth_token {
            config = config.with_auth_token(token);
        }
        Ok(config)
    }

    async fn batches(&self, client: &Client, command: &BatchCommands) -> Result<()> {
        let service = client.batches();

        match command {
            BatchCommands::Get { id, query } => {
                let opts = query.to_options();
                let batch = service.get(id, opts.as_ref()).await?;
                self.print(&batch)
            }
            BatchCommands::List { project_id, query } => {
                let mut opts = query.to_options();
                let batches = service.list(project_id, opts.as_mut()).await?;
                if self.cli.verbose {
                    if let Some(meta) = opts.as_ref().and_then(|o| o.meta()) {
                        info!(
                            "Page {} of {} ({} total)",
                            meta.current_page_num, meta.last_page_num, meta.total
                        );
                    }
                }
                self.print(&batches)
            }
            BatchCommands::Delete { id, remove_devices } => {
                let response = service.delete(id, *remove_devices).await?;
                self.print(&json!({
                    "id": id,
                    "deleted": true,
                    "status": response.status,
                }))
            }
        }
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
