/// Receives network-mode notifications when the matching config variables change.
///
/// Implemented by the Lisk API client in `lisky-cli` and by the recording mock
/// used in tests. Calls are synchronous; an error aborts the running command.
pub trait ApiClient: Send {
    /// Switch between mainnet and testnet.
    fn set_testnet(&mut self, testnet: bool) -> crate::Result<()>;

    /// Toggle TLS for node connections.
    fn set_ssl(&mut self, ssl: bool) -> crate::Result<()>;
}
