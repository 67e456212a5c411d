pub mod model;

use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};

pub use model::{AssetsConfig, HudConfig, LogConfig, ViewerConfig, WindowConfig};

pub const CONFIG_FILE_NAME: &str = "mandel-gl.toml";

fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Loads `mandel-gl.toml` from the working directory, or defaults when it is absent.
pub fn load_config() -> Result<ViewerConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(ViewerConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ViewerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ViewerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(path, &contents)
}

fn parse_config(path: &Path, contents: &str) -> Result<ViewerConfig> {
    let config: ViewerConfig = toml::from_str(contents).map_err(|source| ViewerError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &ViewerConfig) -> Result<()> {
    config.view.validate()?;

    let window = &config.window;
    for (name, value) in [
        ("width", window.width),
        ("height", window.height),
        ("min_width", window.min_width),
        ("min_height", window.min_height),
    ] {
        if !(value >= 1.0 && value.is_finite()) {
            return Err(ViewerError::InvalidConfig(format!(
                "window {name} must be a finite size of at least 1: {value}"
            )));
        }
    }

    if config.log.level.parse::<tracing::Level>().is_err() {
        return Err(ViewerError::InvalidConfig(format!(
            "unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ViewLimits, ViewLimitsError};

    fn parse(contents: &str) -> Result<ViewerConfig> {
        parse_config(Path::new(CONFIG_FILE_NAME), contents)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.window.title, "Mandel-GL");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.view, ViewLimits::default());
        assert!(config.hud.visible);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            [window]
            title = "Almond Bread"

            [view]
            initial_iterations = 256

            [assets]
            texture_dir = "palettes"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Almond Bread");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.view.initial_iterations, 256);
        assert_eq!(config.view.max_iterations, 1000);
        assert_eq!(config.assets.texture_dir, PathBuf::from("palettes"));
        assert_eq!(config.assets.vertex_shader, PathBuf::from("shaders/vertex.wgsl"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = parse("[window\nwidth = 3");

        assert!(matches!(result, Err(ViewerError::ConfigParse { .. })));
    }

    #[test]
    fn invalid_limits_are_rejected() {
        let result = parse(
            r#"
            [view]
            iteration_step = 0
            "#,
        );

        assert!(matches!(
            result,
            Err(ViewerError::InvalidLimits(ViewLimitsError::ZeroIterationStep))
        ));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = parse(
            r#"
            [log]
            level = "chatty"
            "#,
        );

        assert!(matches!(result, Err(ViewerError::InvalidConfig(_))));
    }

    #[test]
    fn zero_window_is_rejected() {
        let result = parse(
            r#"
            [window]
            width = 0.0
            "#,
        );

        assert!(matches!(result, Err(ViewerError::InvalidConfig(_))));
    }

    #[test]
    fn non_finite_window_sizes_are_rejected() {
        for section in [
            "[window]\nwidth = nan\nheight = nan\n",
            "[window]\nheight = inf\n",
            "[window]\nmin_width = nan\n",
            "[window]\nmin_height = 0.5\n",
        ] {
            let result = parse(section);

            assert!(
                matches!(result, Err(ViewerError::InvalidConfig(_))),
                "accepted {section:?}"
            );
        }
    }

    #[test]
    fn infinite_position_bounds_are_rejected() {
        let result = parse(
            r#"
            [view]
            max_position = inf
            "#,
        );

        assert!(matches!(
            result,
            Err(ViewerError::InvalidLimits(ViewLimitsError::PositionRange { .. }))
        ));
    }
}
