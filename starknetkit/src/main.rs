use anyhow::{Context, bail};
use dotenvy::dotenv;
use serde_json::{Value, json};
use tracing::info;

use starknetkit::{ArgumentValidator, ConnectOptions, parse_rpc_calls};
use starknetkit_common::map_target_url_to_network_id;

use crate::config::{Command, load_configuration};

mod config;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = load_configuration();
    starknetkit_common::telemetry::init_tracing(Some(config.log_level))
        .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?;

    let validator = if config.strict_execute {
        ArgumentValidator::strict()
    } else {
        ArgumentValidator::new()
    };

    let output = match config.command {
        Command::Validate { method, input } => {
            let Value::Array(args) = input.read()? else {
                bail!("arguments must be a JSON array");
            };
            let arguments = validator.validate_named(&method, &args)?;
            info!(method = %arguments.method(), "arguments are valid");
            json!({
                "method": arguments.method(),
                "args": arguments.to_raw_args().context("failed to serialize arguments")?,
            })
        }
        Command::RpcCalls { input } => {
            let calls = parse_rpc_calls(input.read()?)?;
            serde_json::to_value(calls)?
        }
        Command::Network { url } => {
            let network = map_target_url_to_network_id(&url);
            json!({
                "network": network,
                "chainId": network.as_felt().to_hex_string(),
                "nodeUrl": network.default_node_url(),
            })
        }
        Command::Connectors {
            user_agent,
            web_wallet_url,
        } => {
            let options = ConnectOptions {
                web_wallet_url,
                ..ConnectOptions::default()
            };
            serde_json::to_value(options.connectors(user_agent.as_deref()))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
