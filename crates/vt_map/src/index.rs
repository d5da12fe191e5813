use vt_reflect::hash::HashMap;
use vt_reflect::info::StructInfo;

use crate::ResolvedConfig;

/// Annotation token to source field index.
///
/// Built from the exported fields of a source struct. A field annotated
/// `json:"mail,omitempty"` registers the token `mail` (`omitempty` is
/// ignored by default). Annotations that are empty or `"-"` register
/// nothing. When two fields declare the same token, the field declared
/// first keeps it.
///
/// ```
/// use vt_map::{BindMode, MapConfig, TokenIndex};
/// use vt_map::reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct ContactVo {
///     #[tag(json = "mail,omitempty")]
///     pub contact: String,
///     #[tag(json = "-")]
///     pub secret: String,
/// }
///
/// let config = MapConfig::new(BindMode::TAG).resolve();
/// let info = ContactVo::type_info().as_struct().unwrap();
/// let index = TokenIndex::build(info, &config);
///
/// assert_eq!(index.get("mail"), Some(0));
/// assert_eq!(index.get("omitempty"), None);
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    tokens: HashMap<&'static str, usize>,
}

impl TokenIndex {
    /// Indexes the annotation tokens of `info` under the configured key.
    pub fn build(info: &StructInfo, config: &ResolvedConfig) -> Self {
        let mut tokens = HashMap::default();

        for (index, field) in info.iter().enumerate() {
            if !field.is_exported() {
                continue;
            }
            let Some(value) = field.annotation(config.tag()) else {
                continue;
            };
            if value.is_empty() || value == "-" {
                continue;
            }
            for token in config.tokens(value) {
                tokens.entry(token).or_insert(index);
            }
        }

        Self { tokens }
    }

    /// Returns the index of the source field declaring `token`.
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.tokens.get(token).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
