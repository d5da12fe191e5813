//! Base records embedded by persisted domain records.
//!
//! Domain records carry one of these as a nested field, and view records
//! map to and from them through nested-record recursion:
//!
//! ```
//! use vt_map::model::Model;
//! use vt_map::reflect::derive::Reflect;
//! use vt_map::{BindMode, MapConfig, map_with_config};
//!
//! #[derive(Reflect, Default)]
//! struct ArticleDo {
//!     pub model: Model,
//!     pub title: String,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct KeyVo {
//!     #[tag(json = "ID")]
//!     pub key: u64,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct ArticleVo {
//!     pub model: KeyVo,
//!     pub title: String,
//! }
//!
//! let mut src = ArticleDo::default();
//! src.model.id = 42;
//! src.title = "Hello".into();
//!
//! let mut dst = Some(ArticleVo::default());
//! let config = MapConfig::new(BindMode::FIELD | BindMode::TAG);
//! map_with_config(&mut dst, &Some(src), &config).unwrap();
//!
//! let dst = dst.unwrap();
//! assert_eq!(dst.model.key, 42);
//! assert_eq!(dst.title, "Hello");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use vt_reflect::derive::Reflect;

/// Base record with soft deletion.
///
/// A record is deleted when `deleted_at` is set. `deleted_at` is hidden
/// from annotation matching.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(default)]
pub struct Model {
    #[tag(json = "ID")]
    pub id: u64,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
    #[tag(json = "-")]
    pub deleted_at: Option<SystemTime>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            created_at: UNIX_EPOCH,
            updated_at: UNIX_EPOCH,
            deleted_at: None,
        }
    }
}

impl Model {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Base record without soft deletion.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(default)]
pub struct HardModel {
    #[tag(json = "ID")]
    pub id: u64,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Default for HardModel {
    fn default() -> Self {
        Self {
            id: 0,
            created_at: UNIX_EPOCH,
            updated_at: UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use vt_reflect::Reflect;
    use vt_reflect::derive::Reflect;
    use vt_reflect::info::Typed;

    use super::{HardModel, Model};
    use crate::{BindMode, MapConfig, TokenIndex, map, map_with_config};

    fn day(n: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(n * 86_400)
    }

    fn model() -> Model {
        Model {
            id: 7,
            created_at: day(1),
            updated_at: day(2),
            deleted_at: Some(day(3)),
        }
    }

    #[test]
    fn default_is_zero() {
        assert!(Model::default().is_zero());
        assert!(HardModel::default().is_zero());
        assert!(!model().is_zero());
        assert!(model().is_deleted());

        let value = Model::type_info().default_value().unwrap();
        assert_eq!(value.take::<Model>().unwrap(), Model::default());
    }

    #[test]
    fn deleted_at_is_not_a_token() {
        let config = MapConfig::new(BindMode::TAG).resolve();
        let index = TokenIndex::build(Model::type_info().as_struct().unwrap(), &config);
        assert_eq!(index.get("ID"), Some(0));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn soft_to_hard() {
        let mut dst = Some(HardModel::default());
        map(&mut dst, &Some(model())).unwrap();
        assert_eq!(
            dst,
            Some(HardModel {
                id: 7,
                created_at: day(1),
                updated_at: day(2),
            })
        );
    }

    #[derive(Reflect, Debug, Default)]
    struct StampVo {
        #[tag(json = "ID")]
        pub key: u64,
        pub created_at: Option<SystemTime>,
    }

    #[derive(Reflect, Debug, Default)]
    struct ArticleVo {
        pub model: StampVo,
        pub title: String,
    }

    #[derive(Reflect, Debug, Default)]
    struct ArticleDo {
        pub model: Model,
        pub title: String,
    }

    #[test]
    fn view_into_embedded_model() {
        let src = Some(ArticleVo {
            model: StampVo {
                key: 9,
                created_at: Some(day(5)),
            },
            title: "Hello".into(),
        });
        let mut dst = Some(ArticleDo::default());
        let config = MapConfig::new(BindMode::FIELD | BindMode::TAG);
        map_with_config(&mut dst, &src, &config).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.title, "Hello");
        assert_eq!(dst.model.id, 9);
        assert_eq!(dst.model.created_at, day(5));
        assert_eq!(dst.model.updated_at, UNIX_EPOCH);
        assert_eq!(dst.model.deleted_at, None);
    }

    #[test]
    fn embedded_model_into_view() {
        let src = Some(ArticleDo {
            model: model(),
            title: "Hello".into(),
        });
        let mut dst = Some(ArticleVo::default());
        let config = MapConfig::new(BindMode::FIELD | BindMode::TAG);
        map_with_config(&mut dst, &src, &config).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.model.key, 7);
        // Handles are never allocated from plain values.
        assert_eq!(dst.model.created_at, None);
    }
}
