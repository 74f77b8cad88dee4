pub mod defaults;
pub mod tokenbound;

use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use tokio::sync::broadcast;

use crate::errors::ConnectorError;

pub use defaults::{
    ArgentMobileOptions, ConnectorKind, InjectedWallet, default_connectors, is_safari,
};
pub use tokenbound::{TOKENBOUND_CONNECTOR_ID, TokenboundConnector, TokenboundConnectorOptions};

/// Capacity of the per-connector event channel.
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorIcons {
    pub dark: String,
    pub light: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Felt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    Connect(ConnectorData),
    Change(ConnectorData),
    Disconnect,
}

/// A wallet backend exposed to the dapp.
#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn icon(&self) -> ConnectorIcons;

    /// Whether the wallet can be used in the current environment.
    fn available(&self) -> bool;

    /// Whether the wallet is already authorized to connect.
    async fn ready(&self) -> Result<bool, ConnectorError>;
    async fn connect(&mut self) -> Result<ConnectorData, ConnectorError>;
    async fn disconnect(&mut self) -> Result<(), ConnectorError>;
    async fn account(&self) -> Result<Option<String>, ConnectorError>;
    async fn chain_id(&self) -> Result<Felt, ConnectorError>;

    fn subscribe(&self) -> broadcast::Receiver<ConnectorEvent>;
}
