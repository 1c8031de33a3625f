use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use anyhow::bail;
use ini::Ini;
use polygen::engine::config::{GenerationConfig, GenerationConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const POLY_GENERATION_SECTIONS: [&str; 2] = ["poly_generation", "poly-generation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Toml,
    Ini,
    /// Unknown extension: TOML first, INI if that fails.
    Detect,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            Some("ini") | Some("cfg") => Self::Ini,
            _ => Self::Detect,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPolyGenerationConfig {
    #[serde(alias = "accepted-terms")]
    accepted_terms: Option<String>,
}

/// Settings file contents relevant to input generation.
///
/// The file may hold sections for other tools; only `[poly_generation]` is read. Both TOML and
/// the INI settings files of the older Python workflow (unquoted values) are accepted.
#[derive(Deserialize, Debug, Default)]
pub struct PartialGenerationConfig {
    #[serde(alias = "poly-generation")]
    poly_generation: Option<PartialPolyGenerationConfig>,
}

impl PartialGenerationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = SettingsFormat::from_path(path);
        debug!("Loading {:?} configuration from file: {:?}", format, path);
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&content, format).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_str_with_format(content: &str, format: SettingsFormat) -> anyhow::Result<Self> {
        match format {
            SettingsFormat::Toml => Ok(Self::from_toml_str(content)?),
            SettingsFormat::Ini => Self::from_ini_str(content),
            SettingsFormat::Detect => Self::from_toml_str(content).or_else(|toml_err| {
                debug!("Settings are not TOML ({}), trying INI.", toml_err);
                Self::from_ini_str(content).map_err(|_| toml_err.into())
            }),
        }
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn from_ini_str(content: &str) -> anyhow::Result<Self> {
        let ini = Ini::load_from_str(content)?;
        let Some(section) = POLY_GENERATION_SECTIONS
            .iter()
            .find_map(|name| ini.section(Some(*name)))
        else {
            return Ok(Self::default());
        };

        let mut generation = PartialPolyGenerationConfig::default();
        for (key, value) in section.iter() {
            match key {
                "accepted_terms" | "accepted-terms" => {
                    generation.accepted_terms = Some(value.to_string());
                }
                other => bail!("unknown field `{}` in [poly_generation]", other),
            }
        }
        Ok(Self {
            poly_generation: Some(generation),
        })
    }

    pub fn merge_with_cli(mut self, args: &GenerateArgs) -> Result<GenerationConfig> {
        self.apply_set_values(&args.set_values)?;

        let generation = self.poly_generation.take().unwrap_or_default();
        let mut builder =
            GenerationConfigBuilder::new().maybe_accepted_terms(generation.accepted_terms);
        if let Some(value) = &args.accepted_terms {
            builder = builder.accepted_terms(value.as_str());
        }

        let config = builder.build();
        debug!("Resolved accepted_terms: {:?}", config.accepted_terms);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "poly_generation.accepted_terms" | "poly-generation.accepted-terms" => {
                    self.poly_generation
                        .get_or_insert_with(Default::default)
                        .accepted_terms = Some(value.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_generate_args() -> GenerateArgs {
        GenerateArgs {
            molecule: "A1B2_A1B2".to_string(),
            output: PathBuf::from("poly.in"),
            config: None,
            accepted_terms: None,
            set_values: vec![],
        }
    }

    #[test]
    fn empty_config_leaves_accepted_terms_unset() {
        let config = PartialGenerationConfig::default()
            .merge_with_cli(&base_generate_args())
            .unwrap();
        assert_eq!(config.accepted_terms, None);
    }

    #[test]
    fn file_value_is_used_when_cli_is_silent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[poly_generation]\naccepted_terms = \"partly-inter\"\n\n[energy]\nmethod = \"mp2\"\n",
        )
        .unwrap();

        let config = PartialGenerationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&base_generate_args())
            .unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("partly-inter"));
    }

    #[test]
    fn kebab_case_keys_are_accepted() {
        let partial =
            PartialGenerationConfig::from_toml_str("[poly-generation]\naccepted-terms = \"all\"\n")
                .unwrap();
        let config = partial.merge_with_cli(&base_generate_args()).unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("all"));
    }

    #[test]
    fn unknown_key_in_poly_generation_is_rejected() {
        let result =
            PartialGenerationConfig::from_toml_str("[poly_generation]\nacepted_terms = \"all\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn set_value_overrides_file_and_flag_overrides_set_value() {
        let partial =
            PartialGenerationConfig::from_toml_str("[poly_generation]\naccepted_terms = \"all\"\n")
                .unwrap();
        let mut args = base_generate_args();
        args.set_values = vec!["poly_generation.accepted_terms=partly-inter".to_string()];
        let config = partial.merge_with_cli(&args).unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("partly-inter"));

        args.accepted_terms = Some("purely-inter".to_string());
        let config = PartialGenerationConfig::default()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("purely-inter"));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let mut args = base_generate_args();
        args.set_values = vec!["poly_generation.accepted_terms".to_string()];
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("KEY=VALUE")));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let mut args = base_generate_args();
        args.set_values = vec!["energy.method=mp2".to_string()];
        let result = PartialGenerationConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("energy.method")));
    }

    #[test]
    fn ini_settings_with_other_sections_are_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.ini");
        fs::write(
            &path,
            "[files]\nlog_path = logs\n\n[energy]\nmethod = mp2\nbasis = aug-cc-pvdz\n\n\
             [poly_generation]\naccepted_terms = partly-inter\n",
        )
        .unwrap();

        let config = PartialGenerationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&base_generate_args())
            .unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("partly-inter"));
    }

    #[test]
    fn ini_without_poly_generation_section_uses_defaults() {
        let partial =
            PartialGenerationConfig::from_ini_str("[files]\nlog_path = logs\n").unwrap();
        let config = partial.merge_with_cli(&base_generate_args()).unwrap();
        assert_eq!(config.accepted_terms, None);
    }

    #[test]
    fn ini_unknown_key_in_poly_generation_is_rejected() {
        let result =
            PartialGenerationConfig::from_ini_str("[poly_generation]\nacepted_terms = all\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_extension_falls_back_to_ini() {
        let content = "[files]\nlog_path = logs\n\n[poly_generation]\naccepted_terms = all\n";
        let partial =
            PartialGenerationConfig::from_str_with_format(content, SettingsFormat::Detect).unwrap();
        let config = partial.merge_with_cli(&base_generate_args()).unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("all"));

        assert!(
            PartialGenerationConfig::from_str_with_format(content, SettingsFormat::Toml).is_err()
        );
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.toml")),
            SettingsFormat::Toml
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.ini")),
            SettingsFormat::Ini
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings")),
            SettingsFormat::Detect
        );
    }

    #[test]
    fn flag_overrides_ini_value() {
        let partial =
            PartialGenerationConfig::from_ini_str("[poly_generation]\naccepted_terms = all\n")
                .unwrap();
        let mut args = base_generate_args();
        args.accepted_terms = Some("partly-inter".to_string());
        let config = partial.merge_with_cli(&args).unwrap();
        assert_eq!(config.accepted_terms.as_deref(), Some("partly-inter"));
    }

    #[test]
    fn invalid_toml_reports_file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[poly_generation\n").unwrap();
        let result = PartialGenerationConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { path: p, .. }) if p == path));
    }
}
