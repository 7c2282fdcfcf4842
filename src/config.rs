use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Remote offered as the default by the Push/Pull prompts.
    #[serde(default = "default_remote")]
    pub default_remote: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_remote: default_remote(),
        }
    }
}

pub fn load() -> miette::Result<Config> {
    let config: Config =
        confy::load("gim", None).map_err(|e| miette::miette!("Failed to load config: {}", e))?;
    Ok(config)
}
