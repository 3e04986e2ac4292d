#[cfg(test)]
mod tests {
    use lisky_core::*;

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_unsupported_variable_display() {
        let err = LiskyError::UnsupportedVariable("unknown.path".into());
        assert_eq!(err.to_string(), "Unsupported variable name.");
        assert_eq!(err.variable(), Some("unknown.path"));
    }

    #[test]
    fn test_validation_display_is_verbatim() {
        let err = LiskyError::Validation("Wrong format for json - yes. Expected boolean.".into());
        assert_eq!(err.to_string(), "Wrong format for json - yes. Expected boolean.");
        assert!(err.variable().is_none());
    }

    #[test]
    fn test_filesystem_display_is_verbatim() {
        let err = LiskyError::FileSystem("could not write".into());
        assert_eq!(err.to_string(), "could not write");
    }

    #[test]
    fn test_command_prefix() {
        let err = LiskyError::UnsupportedVariable("unknown.path".into())
            .in_command("Could not set config variable");
        assert_eq!(err.to_string(), "Could not set config variable: Unsupported variable name.");
        assert_eq!(err.variable(), Some("unknown.path"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_api() {
        let err = LiskyError::Api("node unreachable".into());
        assert!(err.to_string().contains("node unreachable"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LiskyError = io_err.into();
        assert!(matches!(err, LiskyError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LiskyError = serde_err.into();
        assert!(matches!(err, LiskyError::Serialization(_)));
    }

    // ── ApiClient tests ────────────────────────────────────────

    struct Toggles {
        testnet: bool,
        ssl: bool,
    }

    impl ApiClient for Toggles {
        fn set_testnet(&mut self, testnet: bool) -> Result<()> {
            self.testnet = testnet;
            Ok(())
        }

        fn set_ssl(&mut self, ssl: bool) -> Result<()> {
            self.ssl = ssl;
            Ok(())
        }
    }

    #[test]
    fn test_api_client_trait_object() {
        let mut toggles = Toggles { testnet: false, ssl: false };
        {
            let api: &mut dyn ApiClient = &mut toggles;
            api.set_testnet(true).unwrap();
            api.set_ssl(true).unwrap();
        }
        assert!(toggles.testnet);
        assert!(toggles.ssl);
    }
}
