use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use starknet::providers::jsonrpc::HttpTransport;
use starknet::providers::{JsonRpcClient, Provider};
use starknetkit_common::map_target_url_to_network_id;
use tokio::sync::broadcast;
use url::Url;

use super::{
    Connector, ConnectorData, ConnectorEvent, ConnectorIcons, EVENT_CHANNEL_CAPACITY,
};
use crate::errors::ConnectorError;

pub const TOKENBOUND_CONNECTOR_ID: &str = "tokenbound";
const TOKENBOUND_CONNECTOR_NAME: &str = "Tokenbound Connector";
const TOKENBOUND_ICON: &str = "https://tokenbound.org/_next/image?url=%2Ftb-mark.svg&w=96&q=75";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenboundConnectorOptions {
    pub tokenbound_address: String,
    /// Account owning the token-bound account. Signing on its behalf is left
    /// to the account layer, the connector only reports it.
    pub parent_account_id: String,
}

/// Connector for a token-bound account owned by a parent account.
pub struct TokenboundConnector {
    options: TokenboundConnectorOptions,
    dapp_url: String,
    provider: Option<JsonRpcClient<HttpTransport>>,
    events: broadcast::Sender<ConnectorEvent>,
}

impl TokenboundConnector {
    /// `dapp_url` is the location of the dapp, used to pick the network.
    pub fn new(options: TokenboundConnectorOptions, dapp_url: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            options,
            dapp_url: dapp_url.into(),
            provider: None,
            events,
        }
    }

    pub const fn options(&self) -> &TokenboundConnectorOptions {
        &self.options
    }

    pub const fn is_connected(&self) -> bool {
        self.provider.is_some()
    }

    fn emit(&self, event: ConnectorEvent) {
        // No subscriber is not an error.
        let _ = self.events.send(event);
    }
}

#[async_trait::async_trait]
impl Connector for TokenboundConnector {
    fn id(&self) -> &str {
        TOKENBOUND_CONNECTOR_ID
    }

    fn name(&self) -> &str {
        TOKENBOUND_CONNECTOR_NAME
    }

    fn icon(&self) -> ConnectorIcons {
        ConnectorIcons {
            dark: TOKENBOUND_ICON.to_string(),
            light: TOKENBOUND_ICON.to_string(),
        }
    }

    fn available(&self) -> bool {
        true
    }

    async fn ready(&self) -> Result<bool, ConnectorError> {
        Ok(true)
    }

    async fn connect(&mut self) -> Result<ConnectorData, ConnectorError> {
        let network = map_target_url_to_network_id(&self.dapp_url);
        let node_url = Url::parse(network.default_node_url())?;
        tracing::info!(
            %network,
            %node_url,
            parent_account = %self.options.parent_account_id,
            "connecting tokenbound account"
        );

        self.provider = Some(JsonRpcClient::new(HttpTransport::new(node_url)));

        let data = ConnectorData {
            account: Some(self.options.tokenbound_address.clone()),
            chain_id: Some(network.as_felt()),
        };
        self.emit(ConnectorEvent::Connect(data.clone()));
        Ok(data)
    }

    async fn disconnect(&mut self) -> Result<(), ConnectorError> {
        self.provider = None;
        self.emit(ConnectorEvent::Disconnect);
        Ok(())
    }

    async fn account(&self) -> Result<Option<String>, ConnectorError> {
        if self.options.tokenbound_address.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.options.tokenbound_address.clone()))
    }

    async fn chain_id(&self) -> Result<Felt, ConnectorError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ConnectorError::ProviderUnavailable)?;
        Ok(provider.chain_id().await?)
    }

    fn subscribe(&self) -> broadcast::Receiver<ConnectorEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use starknetkit_common::network::{MAINNET_CHAIN_ID, SEPOLIA_CHAIN_ID};
    use tracing_test::traced_test;

    fn connector(address: &str, dapp_url: &str) -> TokenboundConnector {
        TokenboundConnector::new(
            TokenboundConnectorOptions {
                tokenbound_address: address.to_string(),
                parent_account_id: "0x2".to_string(),
            },
            dapp_url,
        )
    }

    #[test]
    fn test_metadata() {
        let connector = connector("0x1", "https://app.example.com");
        assert_eq!(connector.id(), "tokenbound");
        assert_eq!(connector.name(), "Tokenbound Connector");
        assert_eq!(connector.icon().dark, connector.icon().light);
        assert!(connector.available());
    }

    #[tokio::test]
    async fn test_connect_emits_and_picks_network() {
        let mut connector = connector("0x1", "http://localhost:3000");
        let mut events = connector.subscribe();

        let data = connector.connect().await.unwrap();
        assert_eq!(data.account.as_deref(), Some("0x1"));
        assert_eq!(data.chain_id, Some(SEPOLIA_CHAIN_ID));
        assert!(connector.is_connected());
        assert_eq!(events.recv().await.unwrap(), ConnectorEvent::Connect(data));

        connector.disconnect().await.unwrap();
        assert!(!connector.is_connected());
        assert_eq!(events.recv().await.unwrap(), ConnectorEvent::Disconnect);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_connect_logs_parent_account() {
        let mut connector = connector("0x1", "https://app.example.com");
        connector.connect().await.unwrap();
        assert_eq!(connector.options().parent_account_id, "0x2");
        assert!(logs_contain("parent_account=0x2"));
    }

    #[tokio::test]
    async fn test_connect_defaults_to_mainnet() {
        let mut connector = connector("0x1", "https://app.example.com");
        let data = connector.connect().await.unwrap();
        assert_eq!(data.chain_id, Some(MAINNET_CHAIN_ID));
    }

    #[tokio::test]
    async fn test_account_is_none_when_empty() {
        assert_eq!(connector("", "").account().await.unwrap(), None);
        assert_eq!(
            connector("0x1", "").account().await.unwrap().as_deref(),
            Some("0x1")
        );
        assert!(connector("", "").ready().await.unwrap());
    }

    #[tokio::test]
    async fn test_chain_id_requires_connection() {
        let err = connector("0x1", "").chain_id().await.unwrap_err();
        assert!(matches!(err, ConnectorError::ProviderUnavailable));
    }
}
