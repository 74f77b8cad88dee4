use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::tokenbound::{TOKENBOUND_CONNECTOR_ID, TokenboundConnector, TokenboundConnectorOptions};
use crate::options::ConnectOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InjectedWallet {
    #[serde(rename = "argentX")]
    #[strum(serialize = "argentX")]
    ArgentX,
    Braavos,
}

/// Settings of the Argent mobile (WalletConnect) connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgentMobileOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dapp_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

/// Entry of the connector catalogue offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConnectorKind {
    Injected { id: InjectedWallet },
    ArgentMobile(ArgentMobileOptions),
    WebWallet { url: Option<String> },
    Tokenbound(TokenboundConnectorOptions),
}

impl ConnectorKind {
    pub fn id(&self) -> &str {
        match self {
            Self::Injected { id } => id.as_ref(),
            Self::ArgentMobile(_) => "argentMobile",
            Self::WebWallet { .. } => "argentWebWallet",
            Self::Tokenbound(_) => TOKENBOUND_CONNECTOR_ID,
        }
    }

    /// Instantiates the token-bound connector for the given dapp location.
    pub fn tokenbound_connector(&self, dapp_url: &str) -> Option<TokenboundConnector> {
        match self {
            Self::Tokenbound(options) => Some(TokenboundConnector::new(options.clone(), dapp_url)),
            _ => None,
        }
    }
}

/// Matches user agents of Safari but not of Chrome or Android browsers,
/// which also advertise `safari`.
pub fn is_safari(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    user_agent.find("safari").is_some_and(|index| {
        let prefix = &user_agent[..index];
        !prefix.contains("chrome") && !prefix.contains("android")
    })
}

/// Builds the default connector catalogue.
///
/// Injected wallets are left out on Safari where no extension can inject them.
pub fn default_connectors(options: &ConnectOptions, user_agent: Option<&str>) -> Vec<ConnectorKind> {
    let safari = user_agent.is_some_and(is_safari);
    let mut connectors = Vec::with_capacity(5);

    if !safari {
        connectors.push(ConnectorKind::Injected {
            id: InjectedWallet::ArgentX,
        });
        connectors.push(ConnectorKind::Injected {
            id: InjectedWallet::Braavos,
        });
    }
    connectors.push(ConnectorKind::ArgentMobile(
        options.argent_mobile_options.clone().unwrap_or_default(),
    ));
    connectors.push(ConnectorKind::WebWallet {
        url: options.web_wallet_url.clone(),
    });
    connectors.push(ConnectorKind::Tokenbound(TokenboundConnectorOptions::default()));

    tracing::debug!(safari, count = connectors.len(), "default connectors built");
    connectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
    const CHROME_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Mobile Safari/537.36";
    const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[rstest]
    #[case(SAFARI_UA, true)]
    #[case(CHROME_UA, false)]
    #[case(ANDROID_UA, false)]
    #[case(FIREFOX_UA, false)]
    #[case("SAFARI", true)]
    fn test_is_safari(#[case] user_agent: &str, #[case] expected: bool) {
        assert_eq!(is_safari(user_agent), expected);
    }

    fn ids(connectors: &[ConnectorKind]) -> Vec<&str> {
        connectors.iter().map(ConnectorKind::id).collect()
    }

    #[test]
    fn test_default_connectors_order() {
        let connectors = default_connectors(&ConnectOptions::default(), Some(CHROME_UA));
        assert_eq!(
            ids(&connectors),
            vec!["argentX", "braavos", "argentMobile", "argentWebWallet", "tokenbound"]
        );
    }

    #[test]
    fn test_default_connectors_on_safari() {
        let options = ConnectOptions {
            web_wallet_url: Some("https://web.argent.xyz".into()),
            ..ConnectOptions::default()
        };
        let connectors = default_connectors(&options, Some(SAFARI_UA));
        assert_eq!(ids(&connectors), vec!["argentMobile", "argentWebWallet", "tokenbound"]);
        assert_eq!(
            connectors[1],
            ConnectorKind::WebWallet {
                url: Some("https://web.argent.xyz".into())
            }
        );
    }

    #[test]
    fn test_tokenbound_entry_has_empty_options() {
        let connectors = default_connectors(&ConnectOptions::default(), None);
        let tokenbound = connectors
            .last()
            .and_then(|kind| kind.tokenbound_connector("https://app.example.com"))
            .unwrap();
        assert_eq!(tokenbound.options(), &TokenboundConnectorOptions::default());
        assert!(connectors[0].tokenbound_connector("").is_none());
    }
}
