#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod binder;
mod config;
mod error;
mod index;
mod mapper;
mod mode;

pub mod model;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use vt_reflect as reflect;

pub use binder::{DefaultBinder, LiteralBinder};
pub use config::{DEFAULT_IGNORED_TOKEN, DEFAULT_TAG, DEFAULT_TAG_SEPARATOR, DEFAULT_VALUE_KEY};
pub use config::{MapConfig, ResolvedConfig};
pub use error::{BindError, MapError};
pub use index::TokenIndex;
pub use mapper::{Mapper, map, map_with_config};
pub use mode::BindMode;
