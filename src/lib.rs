#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vt_map as map;
pub use vt_reflect as reflect;
