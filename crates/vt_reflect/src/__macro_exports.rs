pub use ::std::boxed::Box;

pub use crate::impls::{clone_field, struct_debug, struct_is_zero, struct_try_apply};
pub use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
