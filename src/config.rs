use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    program::Template,
};

pub const DEFAULT_METHOD_KEYWORDS: &str =
    "M062X D3ZERO def2-TZVPD TIGHTSCF defgrid3";

pub const DEFAULT_RAM: &str = "4000";

/// Options shared by every calculation in the job. These can be loaded from a
/// JSON file like
/// ```json
/// {
///     "method_keywords": "B3LYP D3BJ def2-SVP",
///     "ram": "2000"
/// }
/// ```
/// where missing fields take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// method and basis set keywords, without the leading `!`
    pub method_keywords: String,

    /// `%maxcore` value in MB
    pub ram: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method_keywords: DEFAULT_METHOD_KEYWORDS.to_owned(),
            ram: DEFAULT_RAM.to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().display().to_string();
        let contents = read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        serde_json::from_str(&contents)
            .map_err(|source| Error::Config { path, source })
    }

    /// replace the fields of `self` with any values given on the command line
    pub fn with_overrides(
        self,
        method_keywords: Option<String>,
        ram: Option<String>,
    ) -> Self {
        Self {
            method_keywords: method_keywords.unwrap_or(self.method_keywords),
            ram: ram.unwrap_or(self.ram),
        }
    }

    pub fn template(&self) -> Template {
        Template::from(self.method_keywords.as_str())
    }
}
