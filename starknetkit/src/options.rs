//! Options accepted by `connect`.

use serde::{Deserialize, Serialize};

use crate::connectors::{ArgentMobileOptions, ConnectorKind, default_connectors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalMode {
    AlwaysAsk,
    #[default]
    CanAsk,
    NeverAsk,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalTheme {
    Light,
    Dark,
    #[default]
    System,
}

/// Browser extension store the install links point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreVersion {
    Chrome,
    Firefox,
    Edge,
}

/// What `connect` hands back to the dapp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultType {
    Connector,
    #[default]
    Wallet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dapp_name: Option<String>,
    pub modal_mode: ModalMode,
    pub modal_theme: ModalTheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_version: Option<StoreVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_wallet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argent_mobile_options: Option<ArgentMobileOptions>,
    pub result_type: ResultType,
}

impl ConnectOptions {
    /// Connector catalogue for a browser with the given user agent.
    pub fn connectors(&self, user_agent: Option<&str>) -> Vec<ConnectorKind> {
        default_connectors(self, user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options: ConnectOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, ConnectOptions::default());
        assert_eq!(options.modal_mode, ModalMode::CanAsk);
        assert_eq!(options.modal_theme, ModalTheme::System);
        assert_eq!(options.result_type, ResultType::Wallet);
    }

    #[test]
    fn test_camel_case_fields() {
        let options: ConnectOptions = serde_json::from_value(json!({
            "dappName": "My dapp",
            "modalMode": "neverAsk",
            "modalTheme": "dark",
            "storeVersion": "firefox",
            "webWalletUrl": "https://web.argent.xyz",
            "argentMobileOptions": { "dappName": "My dapp", "projectId": "abc" },
            "resultType": "connector"
        }))
        .unwrap();

        assert_eq!(options.dapp_name.as_deref(), Some("My dapp"));
        assert_eq!(options.modal_mode, ModalMode::NeverAsk);
        assert_eq!(options.modal_theme, ModalTheme::Dark);
        assert_eq!(options.store_version, Some(StoreVersion::Firefox));
        assert_eq!(options.result_type, ResultType::Connector);
        assert_eq!(
            options
                .argent_mobile_options
                .and_then(|o| o.project_id)
                .as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_rejects_unknown_modal_mode() {
        assert!(serde_json::from_value::<ConnectOptions>(json!({ "modalMode": "sometimes" })).is_err());
    }
}
