//! Waitline CLI - Command-line interface for the Waitline queue engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9641";

#[derive(Parser)]
#[command(name = "waitline")]
#[command(about = "Waitline queue engine CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "WAITLINE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everyone still waiting, in serving order
    List,

    /// Look up one client by position
    Get {
        /// Place in line (1 = next to be served)
        position: u32,
    },

    /// Join the back of the line
    Join {
        /// Client name (at most 20 characters)
        #[arg(short, long)]
        name: String,

        /// Service type: N (normal) or P (priority)
        #[arg(short, long, default_value = "N")]
        service_type: String,

        /// Entry date (defaults to today, DD/MM/YYYY)
        #[arg(short, long)]
        entry_date: Option<String>,
    },

    /// Serve the front of the line
    Advance,

    /// Remove a client by position
    Remove {
        /// Place in line of the client to remove
        position: u32,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize, Tabled)]
struct QueueRow {
    #[serde(rename = "Posição")]
    #[tabled(rename = "Posição")]
    position: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Entry Date")]
    entry_date: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "queue.list.v1", json!({})).await?;
            let rows: Vec<QueueRow> =
                serde_json::from_value(result["queue"].clone()).context("Unexpected response")?;

            if rows.is_empty() {
                println!("{}", "The queue is empty".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Get { position } => {
            let params = json!({ "position": position });
            let result = call_rpc(&cli.rpc_url, "queue.get.v1", params).await?;
            let row: QueueRow =
                serde_json::from_value(result["client"].clone()).context("Unexpected response")?;

            println!("{}", Table::new(vec![row]));
        }

        Commands::Join {
            name,
            service_type,
            entry_date,
        } => {
            let params = json!({
                "name": name,
                "service_type": service_type,
                "entry_date": entry_date,
            });

            let result = call_rpc(&cli.rpc_url, "queue.join.v1", params).await?;
            let position = &result["Posição"];

            println!(
                "{}",
                format!("✓ {} joined the queue at position {}", name, position)
                    .green()
                    .bold()
            );
        }

        Commands::Advance => {
            call_rpc(&cli.rpc_url, "queue.advance.v1", json!({})).await?;

            println!("{}", "✓ Front of the line served".green().bold());
        }

        Commands::Remove { position } => {
            let params = json!({ "position": position });

            call_rpc(&cli.rpc_url, "queue.remove.v1", params).await?;

            println!(
                "{}",
                format!("✓ Position {} removed, queue renumbered", position)
                    .green()
                    .bold()
            );
        }
    }

    Ok(())
}
