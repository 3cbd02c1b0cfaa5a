/*!
 * Chain profiles: serialized pipeline configuration.
 *
 * A profile names an ordered list of filters for one source-format
 * family ("web CMS content", "mobile app strings", ...), referencing
 * filters by their registry token so the file survives library upgrades.
 * Profiles load from and save to JSON; resolving one against a registry
 * is [`crate::pipeline::FilterPipeline::from_profile`].
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// One named, ordered filter chain.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChainProfile {
    /// Short name the profile is selected by.
    pub name: String,

    /// Human-readable description, optional in files.
    #[serde(default)]
    pub description: String,

    /// Filter names in encode order. Names unknown to the resolving
    /// registry are skipped at resolution time.
    pub filters: Vec<String>,
}

impl ChainProfile {
    pub fn new<S: Into<String>>(name: S, filters: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            filters: filters.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }
}

/// A collection of profiles, typically one file per installation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    pub profiles: Vec<ChainProfile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The profiles shipped with the library. "default" is the full
    /// canonical chain; the narrower ones suit content known to carry
    /// only markup or only program variables.
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                ChainProfile::new(
                    "default",
                    &[
                        "control_chars",
                        "entities",
                        "xliff_tags",
                        "html",
                        "percent_double_curly",
                        "ruby_i18n",
                        "twig",
                        "dollar_curly",
                        "single_curly",
                        "percentages",
                        "double_square",
                        "square_sprintf",
                        "sprintf",
                        "snails",
                        "smart_count",
                    ],
                )
                .with_description("Full canonical chain for mixed content"),
                ChainProfile::new("minimal", &["control_chars", "entities"])
                    .with_description("Whitespace and entity protection only"),
                ChainProfile::new(
                    "markup",
                    &["control_chars", "entities", "xliff_tags", "html"],
                )
                .with_description("Markup-bearing content without program variables"),
                ChainProfile::new(
                    "variables",
                    &[
                        "control_chars",
                        "percent_double_curly",
                        "ruby_i18n",
                        "twig",
                        "dollar_curly",
                        "single_curly",
                        "percentages",
                        "double_square",
                        "square_sprintf",
                        "sprintf",
                        "snails",
                        "smart_count",
                    ],
                )
                .with_description("Software strings with program variables, no markup"),
            ],
        }
    }

    /// Parses a profile set from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a profile set from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Writes the set as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProfileError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Looks a profile up by name.
    pub fn get(&self, name: &str) -> Option<&ChainProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Adds a profile, replacing any existing profile of the same name.
    pub fn add(&mut self, profile: ChainProfile) {
        self.profiles.retain(|existing| existing.name != profile.name);
        self.profiles.push(profile);
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
