#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_search_limits() {
        let config = Config::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.search.max_query_chars, 100);
        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.ask.max_question_chars, 1000);
        assert!(config.auth.tokens.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080

            [auth]
            tokens = ["alpha", "beta"]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.tokens, vec!["alpha", "beta"]);
        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Config::from_toml("[server]\nport = \"not a number\"").unwrap_err();
        assert!(matches!(err, SagewellError::Toml(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("SAGEWELL_HOST", "0.0.0.0"),
                ("SAGEWELL_PORT", "9000"),
                ("SAGEWELL_TOKENS", " one, ,two "),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.auth.tokens, vec!["one", "two"]);
    }

    #[test]
    fn test_bad_port_override_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_overrides(env(&[("SAGEWELL_PORT", "ninety")])).unwrap_err();
        assert!(matches!(err, SagewellError::Config(_)));
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let config = Config::from_toml("[search]\nresult_limit = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
