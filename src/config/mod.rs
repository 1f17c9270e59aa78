use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a selection list indexes into.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Bytes,
    #[serde(alias = "characters")]
    Chars,
    Fields,
    Lines,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Bytes => "bytes",
            Mode::Chars => "characters",
            Mode::Fields => "fields",
            Mode::Lines => "lines",
        }
    }
}

/// Settings file for `rcut`. Command line flags take precedence.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub select: Lists,
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub output_delimiter: Option<String>,
    #[serde(default)]
    pub only_delimited: bool,
}

impl SelectionConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// One list or several; each is applied to the filter in turn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Lists {
    One(String),
    Many(Vec<String>),
}

impl Default for Lists {
    fn default() -> Self {
        Lists::Many(Vec::new())
    }
}

impl Lists {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Lists::One(list) => vec![list],
            Lists::Many(lists) => lists,
        }
    }
}
