use kkomantle_game::CompanionConfig;

const BUNDLED_CONFIG: &str = include_str!("../static/config.json");

/// Companion configuration shipped with the page.
///
/// A broken bundle is logged and replaced by the built-in defaults.
#[must_use]
pub fn load_config() -> CompanionConfig {
    parse_config(BUNDLED_CONFIG)
}

pub(crate) fn parse_config(json: &str) -> CompanionConfig {
    CompanionConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("bundled config rejected, using defaults: {err}");
        CompanionConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(load_config(), CompanionConfig::default());
    }

    #[test]
    fn invalid_config_falls_back() {
        let config = parse_config(r#"{"num_puzzles": 0}"#);
        assert_eq!(config.num_puzzles, CompanionConfig::default().num_puzzles);
        let config = parse_config("not json");
        assert_eq!(config.days_path, "/days");
    }
}
