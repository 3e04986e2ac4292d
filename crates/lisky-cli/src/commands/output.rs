use lisky_config::ConfigState;
use lisky_config::schema::{JSON_VARIABLE, PRETTY_VARIABLE};

use super::set::SetOutcome;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputFormat {
    pub json: bool,
    pub pretty: bool,
}

impl OutputFormat {
    /// Command-line flags switch a format on; the config's `json` and `pretty`
    /// variables supply the default.
    pub fn resolve(state: &ConfigState, json_flag: bool, pretty_flag: bool) -> Self {
        Self {
            json: json_flag || state.flag(JSON_VARIABLE),
            pretty: pretty_flag || state.flag(PRETTY_VARIABLE),
        }
    }

    pub fn render_outcome(&self, outcome: &SetOutcome) -> serde_json::Result<String> {
        if self.json {
            return self.render_json(outcome);
        }
        Ok(match &outcome.warning {
            Some(warning) => format!("{}\n⚠️  {}", outcome.message, warning),
            None => outcome.message.clone(),
        })
    }

    pub fn render_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(warning: Option<&str>) -> SetOutcome {
        SetOutcome {
            message: "Successfully set pretty to true.".into(),
            warning: warning.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_from_config_and_flags() {
        let state = ConfigState::new(json!({"json": true, "pretty": false}), "config.json");
        assert_eq!(OutputFormat::resolve(&state, false, false), OutputFormat { json: true, pretty: false });
        assert_eq!(OutputFormat::resolve(&state, false, true), OutputFormat { json: true, pretty: true });
    }

    #[test]
    fn test_render_plain() {
        let fmt = OutputFormat::default();
        assert_eq!(fmt.render_outcome(&outcome(None)).unwrap(), "Successfully set pretty to true.");
        let with_warning = fmt.render_outcome(&outcome(Some("not saved"))).unwrap();
        assert_eq!(with_warning, "Successfully set pretty to true.\n⚠️  not saved");
    }

    #[test]
    fn test_render_json_omits_missing_warning() {
        let fmt = OutputFormat { json: true, pretty: false };
        assert_eq!(
            fmt.render_outcome(&outcome(None)).unwrap(),
            r#"{"message":"Successfully set pretty to true."}"#
        );
        let rendered = fmt.render_outcome(&outcome(Some("not saved"))).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["warning"], "not saved");
    }

    #[test]
    fn test_render_pretty_json() {
        let fmt = OutputFormat { json: true, pretty: true };
        assert!(fmt.render_outcome(&outcome(None)).unwrap().contains('\n'));
    }
}
