use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Log level used when `RUST_LOG` is not set
    #[arg(long, env = "STARKNETKIT_LOG_LEVEL", default_value = "info")]
    pub(crate) log_level: Level,

    /// Only accept the `(calls, options)` shape for `execute`
    #[arg(long, env = "STARKNETKIT_STRICT_EXECUTE", default_value_t = false)]
    pub(crate) strict_execute: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Validate and normalize the positional arguments of a wallet method
    Validate {
        /// Method name, e.g. `execute` or `signMessage`
        method: String,
        #[command(flatten)]
        input: JsonInput,
    },
    /// Normalize an array of wallet RPC calls
    RpcCalls {
        #[command(flatten)]
        input: JsonInput,
    },
    /// Print the network a dapp URL maps to
    Network { url: String },
    /// Print the default connector catalogue
    Connectors {
        #[arg(long)]
        user_agent: Option<String>,
        #[arg(long, env = "STARKNETKIT_WEB_WALLET_URL")]
        web_wallet_url: Option<String>,
    },
}

/// JSON document given inline, from a file, or on stdin when neither is set.
#[derive(Args, Debug)]
pub(crate) struct JsonInput {
    #[arg(long, conflicts_with = "file")]
    pub(crate) args: Option<String>,
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

impl JsonInput {
    pub(crate) fn read(&self) -> anyhow::Result<Value> {
        let raw = match (&self.args, &self.file) {
            (Some(args), _) => args.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        serde_json::from_str(&raw).context("input is not valid JSON")
    }
}

pub(crate) fn load_configuration() -> Cli {
    Cli::parse()
}
