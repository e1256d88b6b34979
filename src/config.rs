use serde::{Deserialize, Deserializer};

use crate::error::{AppError, Result};

/// Inputs of the action, as declared in `action.yml`.
///
/// The runner exposes each input as an `INPUT_<NAME>` environment variable,
/// with the name upper-cased and hyphens kept.
#[derive(Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ActionConfig {
    pub github_token: String,
    pub comment_heading: String,
    #[serde(default)]
    pub comment_if_no_artifacts: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub fail_on_non_pull_request: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub update_in_place: bool,
}

// Manual Debug impl to avoid leaking the token
impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("github_token", &"[REDACTED]")
            .field("comment_heading", &self.comment_heading)
            .field("comment_if_no_artifacts", &self.comment_if_no_artifacts)
            .field("fail_on_non_pull_request", &self.fail_on_non_pull_request)
            .field("update_in_place", &self.update_in_place)
            .finish()
    }
}

/// Unset optional inputs arrive as empty strings, so flags are parsed from
/// text rather than relying on the config crate's bool coercion.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "off" => Ok(false),
        "true" | "1" | "yes" | "on" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, got `{other}`"
        ))),
    }
}

impl ActionConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Load from the file given with `--config`, then the `INPUT_*` variables.
    ///
    /// `env` replaces the process environment when given.
    pub fn load_with_env(
        config_path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Only an explicit file; the working directory is the user's checkout.
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("INPUT")
                .prefix_separator("_")
                .source(env),
        );

        let config = builder.build()?;
        let mut loaded: ActionConfig = config.try_deserialize()?;
        loaded.trim_inputs();
        loaded.validate()?;
        Ok(loaded)
    }

    fn trim_inputs(&mut self) {
        self.github_token = self.github_token.trim().to_string();
        self.comment_heading = self.comment_heading.trim().to_string();
        self.comment_if_no_artifacts = self.comment_if_no_artifacts.trim().to_string();
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("github-token", &self.github_token),
            ("comment-heading", &self.comment_heading),
        ] {
            if value.is_empty() {
                return Err(AppError::Config(format!(
                    "Input required and not supplied: {name}"
                )));
            }
        }
        Ok(())
    }
}
