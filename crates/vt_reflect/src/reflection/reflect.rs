use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ApplyError, ReflectCloneError};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vt_reflect`].
///
/// A `Reflect` value can report its [kind](ReflectKind), its static
/// [`TypeInfo`](crate::info::TypeInfo), whether it holds the zero value of its
/// type, and can be assigned from another reflected value of the same type.
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect) for structs. Scalars,
/// `String`, `Option<T>`, `Box<T>` and a few std types are implemented by
/// this crate, and [`impl_reflect_opaque!`](crate::derive::impl_reflect_opaque)
/// covers foreign value types.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vt_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Casting
///
/// Use [`reflect_ref`](Reflect::reflect_ref) and [`reflect_mut`](Reflect::reflect_mut)
/// to reach the [`Struct`](crate::ops::Struct) or [`Pointer`](crate::ops::Pointer)
/// interface, and `downcast_ref`/`downcast_mut`/`take` for concrete types.
///
/// ```rust
/// # use vt_reflect::{Reflect, ops::ReflectRef};
/// let value = Some(5_u8);
/// let ReflectRef::Pointer(ptr) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(ptr.pointee().unwrap().downcast_ref::<u8>(), Some(&5));
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a fully-reflected value.
    ///
    /// ```
    /// use vt_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [kind](ReflectKind) of this value.
    ///
    /// ```
    /// # use vt_reflect::{Reflect, info::{ReflectKind, ScalarKind}};
    /// assert_eq!(7_i64.reflect_kind(), ReflectKind::Scalar(ScalarKind::I64));
    /// assert_eq!(None::<u8>.reflect_kind(), ReflectKind::Pointer);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of "kinds" of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of "kinds" of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Performs a type-checked replacement of this value.
    ///
    /// Returns the input back if its type is not `Self`.
    ///
    /// ```
    /// # use vt_reflect::Reflect;
    /// let mut s = String::new();
    /// assert!(s.set(String::from("abc").into_boxed_reflect()).is_ok());
    /// assert!(s.set(1_u8.into_boxed_reflect()).is_err());
    /// assert_eq!(s, "abc");
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Assigns `value` to `self`.
    ///
    /// Both values must have the same type. Struct values are assigned field
    /// by field, so fields excluded from reflection keep their current value.
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Returns a deep copy of this value.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Returns `true` if this value is the zero value of its type.
    ///
    /// Numbers are zero at `0`, `bool` at `false`, `char` at `'\0'`, strings
    /// when empty, `Option` when `None` and structs when every reflected
    /// field is zero. A `Box` is never zero.
    fn is_zero(&self) -> bool;

    /// Debug formatter for the value.
    ///
    /// The default output is the [type path](DynamicTypePath::reflect_type_path)
    /// wrapped in `Opaque(..)`.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            _ => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use vt_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            Ok(any
                .downcast::<T>()
                .unwrap_or_else(|_| unreachable!("type is already checked")))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// # use vt_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    (Scalar($scalar:ident)) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::Scalar($crate::info::ScalarKind::$scalar)
        }
        $crate::reflection::impl_reflect_cast_fn!(@cast Scalar);
    };
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }
        $crate::reflection::impl_reflect_cast_fn!(@cast $kind);
    };
    (@cast $kind:ident) => {
        fn set(
            &mut self,
            value: ::std::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::std::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
