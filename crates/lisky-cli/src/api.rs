use tracing::info;

use lisky_config::ConfigState;
use lisky_config::schema::{NODE_VARIABLE, PORT_VARIABLE, SSL_VARIABLE, TESTNET_VARIABLE};
use lisky_core::{ApiClient, Result};

const MAINNET_NODE: &str = "login.lisk.io";
const TESTNET_NODE: &str = "testnet.lisk.io";
const MAINNET_PORT: &str = "8000";
const TESTNET_PORT: &str = "7000";
const SSL_PORT: &str = "443";

/// Connection settings for the Lisk node, seeded from the `liskJS` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiskApiClient {
    testnet: bool,
    ssl: bool,
    node: String,
    port: String,
}

impl LiskApiClient {
    pub fn from_config(state: &ConfigState) -> Self {
        let text = |name: &str| {
            state
                .get(name)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            testnet: state.flag(TESTNET_VARIABLE),
            ssl: state.flag(SSL_VARIABLE),
            node: text(NODE_VARIABLE),
            port: text(PORT_VARIABLE),
        }
    }

    pub fn testnet(&self) -> bool {
        self.testnet
    }

    pub fn ssl(&self) -> bool {
        self.ssl
    }

    /// Base URL of the node. Empty `node`/`port` fall back to the network defaults.
    pub fn node_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        let node = match (self.node.is_empty(), self.testnet) {
            (false, _) => self.node.as_str(),
            (true, true) => TESTNET_NODE,
            (true, false) => MAINNET_NODE,
        };
        let port = match (self.port.is_empty(), self.ssl, self.testnet) {
            (false, _, _) => self.port.as_str(),
            (true, true, _) => SSL_PORT,
            (true, false, true) => TESTNET_PORT,
            (true, false, false) => MAINNET_PORT,
        };
        format!("{scheme}://{node}:{port}")
    }
}

impl ApiClient for LiskApiClient {
    fn set_testnet(&mut self, testnet: bool) -> Result<()> {
        self.testnet = testnet;
        info!(testnet, url = %self.node_url(), "lisk network updated");
        Ok(())
    }

    fn set_ssl(&mut self, ssl: bool) -> Result<()> {
        self.ssl = ssl;
        info!(ssl, url = %self.node_url(), "lisk tls mode updated");
        Ok(())
    }
}
