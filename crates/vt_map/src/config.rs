use serde::{Deserialize, Serialize};
use vt_reflect::hash::HashSet;

use crate::BindMode;

/// Annotation key used by `TAG` when none is configured.
pub const DEFAULT_TAG: &str = "json";
/// Token separator used by `TAG` when none is configured.
pub const DEFAULT_TAG_SEPARATOR: &str = ",";
/// Ignored token used by `TAG` when none is configured.
pub const DEFAULT_IGNORED_TOKEN: &str = "omitempty";
/// Annotation key read by the `DEFAULT_VALUE` pass.
pub const DEFAULT_VALUE_KEY: &str = "default";

// -----------------------------------------------------------------------------
// MapConfig

/// Configuration of a mapping call.
///
/// Empty values are filled in when the configuration is resolved, see
/// [`MapConfig::resolve`]. Every field has a default, so a partial document
/// is a valid configuration:
///
/// ```
/// use vt_map::{BindMode, MapConfig};
///
/// let config: MapConfig = serde_json::from_str(r#"{ "mode": "TAG | OVERLAY" }"#).unwrap();
/// assert_eq!(config.mode, BindMode::TAG | BindMode::OVERLAY);
///
/// let resolved = config.resolve();
/// assert_eq!(resolved.tag(), "json");
/// assert!(resolved.is_ignored("omitempty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Passes to run.
    pub mode: BindMode,
    /// Annotation key read by the `TAG` pass.
    pub tag: String,
    /// Separator between tokens of an annotation value.
    pub tag_separator: String,
    /// Tokens that never match, such as `omitempty`.
    pub ignored_tokens: Vec<String>,
}

impl Default for MapConfig {
    #[inline]
    fn default() -> Self {
        Self::new(BindMode::default())
    }
}

impl MapConfig {
    /// Creates a configuration running `mode`, other values are left empty.
    #[inline]
    pub const fn new(mode: BindMode) -> Self {
        Self {
            mode,
            tag: String::new(),
            tag_separator: String::new(),
            ignored_tokens: Vec::new(),
        }
    }

    /// Sets the annotation key read by the `TAG` pass.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the separator between tokens of an annotation value.
    pub fn with_tag_separator(mut self, separator: impl Into<String>) -> Self {
        self.tag_separator = separator.into();
        self
    }

    /// Sets the tokens that never match.
    pub fn with_ignored_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Resolves the configuration.
    ///
    /// When `TAG` is requested, an empty `tag` becomes `"json"`, an empty
    /// `tag_separator` becomes `","` and empty `ignored_tokens` become
    /// `["omitempty"]`. Without `TAG` nothing is filled in.
    pub fn resolve(&self) -> ResolvedConfig {
        let fill = self.mode.contains(BindMode::TAG);

        let tag = if self.tag.is_empty() && fill {
            DEFAULT_TAG.to_owned()
        } else {
            self.tag.clone()
        };
        let tag_separator = if self.tag_separator.is_empty() && fill {
            DEFAULT_TAG_SEPARATOR.to_owned()
        } else {
            self.tag_separator.clone()
        };
        let ignored_tokens = if self.ignored_tokens.is_empty() && fill {
            HashSet::from_iter([DEFAULT_IGNORED_TOKEN.to_owned()])
        } else {
            self.ignored_tokens.iter().cloned().collect()
        };

        ResolvedConfig {
            mode: self.mode,
            tag,
            tag_separator,
            ignored_tokens,
        }
    }
}

// -----------------------------------------------------------------------------
// ResolvedConfig

/// A [`MapConfig`] with defaults filled in, shared by recursive calls.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    mode: BindMode,
    tag: String,
    tag_separator: String,
    ignored_tokens: HashSet<String>,
}

impl ResolvedConfig {
    #[inline]
    pub fn mode(&self) -> BindMode {
        self.mode
    }

    /// Returns `true` if any of `mode` is requested.
    #[inline]
    pub fn requests(&self, mode: BindMode) -> bool {
        self.mode.intersects(mode)
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn tag_separator(&self) -> &str {
        &self.tag_separator
    }

    #[inline]
    pub fn is_ignored(&self, token: &str) -> bool {
        self.ignored_tokens.contains(token)
    }

    /// Splits an annotation value into matchable tokens, in order.
    ///
    /// Empty and ignored tokens are skipped. With an empty separator the
    /// whole value is a single token.
    pub fn tokens<'a, 'v: 'a>(&'a self, value: &'v str) -> impl Iterator<Item = &'v str> + 'a {
        let pieces: Box<dyn Iterator<Item = &'v str> + 'a> = if self.tag_separator.is_empty() {
            Box::new(core::iter::once(value))
        } else {
            Box::new(value.split(self.tag_separator.as_str()))
        };
        pieces.filter(move |token| !token.is_empty() && !self.is_ignored(token))
    }
}

impl From<&MapConfig> for ResolvedConfig {
    #[inline]
    fn from(config: &MapConfig) -> Self {
        config.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::MapConfig;
    use crate::BindMode;

    #[test]
    fn fill_only_with_tag() {
        let resolved = MapConfig::new(BindMode::FIELD).resolve();
        assert_eq!(resolved.tag(), "");
        assert_eq!(resolved.tag_separator(), "");
        assert!(!resolved.is_ignored("omitempty"));

        let resolved = MapConfig::new(BindMode::TAG).resolve();
        assert_eq!(resolved.tag(), "json");
        assert_eq!(resolved.tag_separator(), ",");
        assert!(resolved.is_ignored("omitempty"));
    }

    #[test]
    fn keep_given_values() {
        let config = MapConfig::new(BindMode::TAG | BindMode::OVERLAY)
            .with_tag("db")
            .with_tag_separator(";")
            .with_ignored_tokens(["pk"]);
        let resolved = config.resolve();

        assert_eq!(resolved.tag(), "db");
        assert!(resolved.is_ignored("pk"));
        assert!(!resolved.is_ignored("omitempty"));
        assert!(resolved.requests(BindMode::OVERLAY));
        assert_eq!(
            resolved.tokens("id;pk;;user_id").collect::<Vec<_>>(),
            ["id", "user_id"]
        );
    }

    #[test]
    fn tokens_without_separator() {
        let resolved = MapConfig::new(BindMode::FIELD).resolve();
        assert_eq!(resolved.tokens("a,b").collect::<Vec<_>>(), ["a,b"]);
        assert_eq!(resolved.tokens("").count(), 0);
    }

    #[test]
    fn documents() {
        let config: MapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MapConfig::default());

        let config = MapConfig::new(BindMode::TAG).with_tag("form");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"mode":"TAG","tag":"form","tag_separator":"","ignored_tokens":[]}"#
        );

        let text = r#"(mode: "FIELD | TAG", tag_separator: "|", ignored_tokens: ["omitempty", "string"])"#;
        let config: MapConfig = ron::from_str(text).unwrap();
        assert_eq!(config.mode, BindMode::FIELD | BindMode::TAG);
        assert_eq!(config.tag, "");
        assert_eq!(config.ignored_tokens, ["omitempty", "string"]);
        assert_eq!(config.resolve().tag(), "json");
    }
}
