//! Step configuration — resolved once per processing session, immutable
//! thereafter.

use std::collections::HashMap;

use crate::error::ConfigError;

pub const DEFAULT_FILE_PREFIX: &str = "rendered";
pub const DEFAULT_FILE_SUFFIX: &str = ".out";
pub const DEFAULT_OUTPUT_PATH_ATTRIBUTE: &str = "template.rendered.path";

/// Property keys accepted by [`TemplateFileConfig::from_properties`].
pub const PROP_PARSE_JSON_CONTENT: &str = "parse_json_content";
pub const PROP_TEMPLATE: &str = "template";
pub const PROP_FILE_PREFIX: &str = "file_prefix";
pub const PROP_FILE_SUFFIX: &str = "file_suffix";
pub const PROP_OUTPUT_PATH_ATTRIBUTE: &str = "output_path_attribute";

/// Immutable configuration for a template-to-file processing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFileConfig {
    /// Parse the record payload as JSON and expose it to the template as
    /// `content`.
    pub parse_json_content: bool,
    /// Template source rendered for every record. Required, non-empty.
    pub template: String,
    /// Output filename prefix, used verbatim.
    pub file_prefix: String,
    /// Output filename suffix, used verbatim.
    pub file_suffix: String,
    /// Attribute key that receives the output path on success.
    pub output_path_attribute: String,
}

impl TemplateFileConfig {
    /// Builder with the required template source; every other option starts
    /// at its default.
    pub fn builder(template: impl Into<String>) -> TemplateFileConfigBuilder {
        TemplateFileConfigBuilder {
            parse_json_content: false,
            template: template.into(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            output_path_attribute: DEFAULT_OUTPUT_PATH_ATTRIBUTE.to_string(),
        }
    }

    /// Resolve a configuration from a string-keyed property table.
    ///
    /// Booleans are coerced case-insensitively from `true`/`false`; any
    /// other value is a [`ConfigError::InvalidBool`]. Unknown keys are
    /// rejected rather than ignored, so a misspelled option fails the
    /// session up front instead of silently changing per-record behavior.
    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let template = props.get(PROP_TEMPLATE).cloned().unwrap_or_default();
        let mut builder = Self::builder(template);
        for (key, value) in props {
            match key.as_str() {
                PROP_TEMPLATE => {}
                PROP_PARSE_JSON_CONTENT => {
                    builder = builder.parse_json_content(parse_bool(key, value)?);
                }
                PROP_FILE_PREFIX => builder = builder.file_prefix(value),
                PROP_FILE_SUFFIX => builder = builder.file_suffix(value),
                PROP_OUTPUT_PATH_ATTRIBUTE => builder = builder.output_path_attribute(value),
                _ => return Err(ConfigError::UnknownProperty { key: key.clone() }),
            }
        }
        builder.build()
    }
}

/// Builder for [`TemplateFileConfig`].
#[derive(Debug, Clone)]
pub struct TemplateFileConfigBuilder {
    parse_json_content: bool,
    template: String,
    file_prefix: String,
    file_suffix: String,
    output_path_attribute: String,
}

impl TemplateFileConfigBuilder {
    pub fn parse_json_content(mut self, enabled: bool) -> Self {
        self.parse_json_content = enabled;
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    pub fn output_path_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.output_path_attribute = attribute.into();
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<TemplateFileConfig, ConfigError> {
        if self.template.is_empty() {
            return Err(ConfigError::MissingTemplate);
        }
        Ok(TemplateFileConfig {
            parse_json_content: self.parse_json_content,
            template: self.template,
            file_prefix: self.file_prefix,
            file_suffix: self.file_suffix,
            output_path_attribute: self.output_path_attribute,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
