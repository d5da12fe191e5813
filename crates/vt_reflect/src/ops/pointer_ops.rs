use crate::Reflect;
use crate::info::{PointerInfo, TypeInfo};

/// A trait for pointer-like handles: `Option<T>` and `Box<T>`.
///
/// `Option<T>` is a nullable handle, `None` being the null value. `Box<T>`
/// always holds a value.
///
/// # Examples
///
/// ```
/// use vt_reflect::{Reflect, ops::Pointer};
///
/// let mut age: Option<u8> = None;
/// assert!(age.is_null());
///
/// let backing = age.new_pointee().unwrap();
/// assert!(backing.is::<u8>());
///
/// age.replace_pointee(30_u8.into_boxed_reflect()).unwrap();
/// assert_eq!(age, Some(30));
/// assert_eq!(age.pointee().unwrap().downcast_ref::<u8>(), Some(&30));
/// ```
pub trait Pointer: Reflect {
    /// Returns the value behind the handle, or `None` for a null handle.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the value behind the handle mutably, or `None` for a null handle.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Stores `value` behind the handle.
    ///
    /// Returns the input back if it is not of the pointee type.
    fn replace_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the static [`PointerInfo`] of this handle type.
    fn pointer_info(&self) -> &'static PointerInfo;

    /// Returns the [`TypeInfo`] of the pointee type.
    ///
    /// Available even when the handle is null.
    #[inline]
    fn pointee_info(&self) -> &'static TypeInfo {
        self.pointer_info().pointee_info()
    }

    /// Returns `true` if the handle holds no value.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }

    /// Allocates a default value of the pointee type.
    ///
    /// Returns `None` when the pointee type registered no default constructor.
    #[inline]
    fn new_pointee(&self) -> Option<Box<dyn Reflect>> {
        self.pointee_info().default_value()
    }
}
