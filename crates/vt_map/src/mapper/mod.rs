//! Mapping between records.

mod passes;
mod value;

use vt_reflect::Reflect;
use vt_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::{BindMode, DefaultBinder, LiteralBinder, MapConfig, MapError, ResolvedConfig};

// -----------------------------------------------------------------------------
// Mapper

/// A reusable mapping of records, holding a resolved [`MapConfig`] and a
/// [`DefaultBinder`].
///
/// Passes run in this order, each only when its mode is requested:
///
/// 1. `FIELD`: fields with the same name are copied;
/// 2. `TAG`: fields sharing an annotation token are copied;
/// 3. `DEFAULT_VALUE`: fields still zero receive their `default` literal.
///
/// Zero source values never overwrite a destination field, and values whose
/// kinds are incompatible are skipped. Nested records of different types
/// are mapped recursively with the same configuration.
///
/// # Examples
///
/// ```
/// use vt_map::{BindMode, MapConfig, Mapper};
/// use vt_map::reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct SignupVo {
///     #[tag(json = "mail,omitempty")]
///     pub contact: String,
///     pub nickname: String,
/// }
///
/// #[derive(Reflect, Default)]
/// struct UserDo {
///     #[tag(json = "mail")]
///     pub email: String,
///     pub nickname: String,
///     #[tag(default = "18")]
///     pub age: u8,
/// }
///
/// let mapper = Mapper::new(&MapConfig::new(BindMode::all()));
///
/// let src = SignupVo { contact: "a@b.com".into(), nickname: "ann".into() };
/// let mut dst = Box::new(UserDo::default());
/// mapper.map(&mut dst, &Box::new(src)).unwrap();
///
/// assert_eq!(dst.email, "a@b.com");
/// assert_eq!(dst.nickname, "ann");
/// assert_eq!(dst.age, 18);
/// ```
#[derive(Debug, Clone)]
pub struct Mapper<B = LiteralBinder> {
    config: ResolvedConfig,
    binder: B,
}

impl Mapper {
    /// Creates a mapper using the bundled [`LiteralBinder`].
    #[inline]
    pub fn new(config: &MapConfig) -> Self {
        Self::with_binder(config, LiteralBinder)
    }
}

impl Default for Mapper {
    /// A mapper running `FIELD | DEFAULT_VALUE`.
    #[inline]
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}

impl<B: DefaultBinder> Mapper<B> {
    /// Creates a mapper binding `default` literals with `binder`.
    #[inline]
    pub fn with_binder(config: &MapConfig, binder: B) -> Self {
        Self {
            config: config.resolve(),
            binder,
        }
    }

    #[inline]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    #[inline]
    pub fn binder(&self) -> &B {
        &self.binder
    }

    /// Maps the record behind `src` into the record behind `dst`.
    ///
    /// Both handles must be pointers (`Option` or `Box`) to structs, and
    /// neither may be null. These checks happen before anything is written.
    ///
    /// # Errors
    ///
    /// - [`MapError::ShapeMismatch`] if the handles have different kinds;
    /// - [`MapError::MustBePointer`] if they are not pointers;
    /// - [`MapError::MustBeStructPointer`] if either does not point to a
    ///   struct type;
    /// - [`MapError::NullPointer`] if either is `None`;
    /// - any error raised while binding, see [`Mapper::map_struct`].
    pub fn map(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), MapError> {
        let (dst_kind, src_kind) = (dst.reflect_kind(), src.reflect_kind());
        if dst_kind != src_kind {
            return Err(MapError::ShapeMismatch {
                dst: dst_kind,
                src: src_kind,
            });
        }

        let (ReflectMut::Pointer(dst), ReflectRef::Pointer(src)) =
            (dst.reflect_mut(), src.reflect_ref())
        else {
            return Err(MapError::MustBePointer(dst_kind));
        };

        let dst_path = dst.reflect_type_path();
        if !dst.pointee_info().is_struct() {
            return Err(MapError::MustBeStructPointer(dst_path));
        }
        if !src.pointee_info().is_struct() {
            return Err(MapError::MustBeStructPointer(src.reflect_type_path()));
        }

        let (Some(dst), Some(src)) = (dst.pointee_mut(), src.pointee()) else {
            return Err(MapError::NullPointer);
        };
        let (ReflectMut::Struct(dst), ReflectRef::Struct(src)) =
            (dst.reflect_mut(), src.reflect_ref())
        else {
            return Err(MapError::MustBeStructPointer(dst_path));
        };

        self.map_struct(dst, src)
    }

    /// Maps `src` into `dst`, running every requested pass.
    ///
    /// Nested records are mapped through this method as well. The first
    /// error aborts the call, fields written before it keep their values.
    ///
    /// # Errors
    ///
    /// - [`MapError::DefaultValue`] if a `default` literal cannot be bound;
    /// - [`MapError::Apply`] if a value of the same type cannot be assigned.
    pub fn map_struct(&self, dst: &mut dyn Struct, src: &dyn Struct) -> Result<(), MapError> {
        log::debug!(
            "mapping `{}` into `{}` with {:?}",
            src.reflect_type_path(),
            dst.reflect_type_path(),
            self.config.mode(),
        );

        if self.config.requests(BindMode::FIELD) {
            log::debug!("field pass on `{}`", dst.reflect_type_path());
            self.field_pass(dst, src)?;
        }
        if self.config.requests(BindMode::TAG) {
            log::debug!("tag pass on `{}`", dst.reflect_type_path());
            self.tag_pass(dst, src)?;
        }
        if self.config.requests(BindMode::DEFAULT_VALUE) {
            log::debug!("default pass on `{}`", dst.reflect_type_path());
            self.default_pass(dst)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Functions

/// Maps `src` into `dst` by field name, then fills `default` literals.
///
/// Equivalent to [`map_with_config`] with `FIELD | DEFAULT_VALUE`.
///
/// ```
/// use vt_map::map;
/// use vt_map::reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct UserVo {
///     pub name: String,
///     pub age: u8,
/// }
///
/// #[derive(Reflect, Default)]
/// struct UserDo {
///     pub name: String,
///     #[tag(default = "18")]
///     pub age: u8,
/// }
///
/// let src = Some(UserVo { name: "ann".into(), age: 0 });
/// let mut dst = Some(UserDo::default());
/// map(&mut dst, &src).unwrap();
///
/// let dst = dst.unwrap();
/// assert_eq!(dst.name, "ann");
/// assert_eq!(dst.age, 18);
/// ```
#[inline]
pub fn map(dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), MapError> {
    map_with_config(dst, src, &MapConfig::default())
}

/// Maps `src` into `dst` with the passes requested by `config`.
///
/// See [`Mapper`] for the mapping rules.
#[inline]
pub fn map_with_config(
    dst: &mut dyn Reflect,
    src: &dyn Reflect,
    config: &MapConfig,
) -> Result<(), MapError> {
    Mapper::new(config).map(dst, src)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use vt_reflect::Reflect;
    use vt_reflect::derive::Reflect;
    use vt_reflect::info::{NamedField, ReflectKind};

    use super::{Mapper, map, map_with_config};
    use crate::{BindError, BindMode, DefaultBinder, MapConfig, MapError};

    #[derive(Reflect, Debug, Default, Clone, PartialEq)]
    struct UserVo {
        pub name: String,
        pub age: u8,
        pub email: Option<String>,
        pub score: i64,
        pub active: u8,
        secret: String,
    }

    #[derive(Reflect, Debug, Default, Clone, PartialEq)]
    struct UserDo {
        pub name: String,
        pub age: u8,
        pub email: Option<String>,
        pub score: i32,
        pub active: bool,
        pub secret: String,
    }

    fn user_vo() -> UserVo {
        UserVo {
            name: "ann".into(),
            age: 0,
            email: Some("ann@example.com".into()),
            score: 7,
            active: 1,
            secret: "hunter2".into(),
        }
    }

    fn field_only() -> MapConfig {
        MapConfig::new(BindMode::FIELD)
    }

    #[test]
    fn copies_non_zero_fields() {
        let mut dst = Some(UserDo {
            age: 3,
            ..UserDo::default()
        });
        map_with_config(&mut dst, &Some(user_vo()), &field_only()).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.name, "ann");
        assert_eq!(dst.age, 3);
        assert_eq!(dst.email.as_deref(), Some("ann@example.com"));
        assert_eq!(dst.score, 7);
        assert!(!dst.active);
        assert_eq!(dst.secret, "");
    }

    #[test]
    fn idempotent() {
        let src = Box::new(user_vo());
        let mut once = Box::new(UserDo::default());
        map(&mut once, &src).unwrap();

        let mut twice = once.clone();
        map(&mut twice, &src).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn source_is_untouched() {
        let src = Some(user_vo());
        let mut dst = Some(UserDo::default());
        map(&mut dst, &src).unwrap();
        assert_eq!(src, Some(user_vo()));
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    struct PersonVo {
        pub name: String,
        pub age: u8,
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    struct PersonDo {
        pub name: String,
        #[tag(default = "18")]
        pub age: u8,
        #[tag(default = "5")]
        pub retries: Option<u32>,
        #[tag(default = "1m30s")]
        pub timeout: Duration,
        #[tag(default = "-")]
        pub level: u8,
    }

    #[test]
    fn defaults_fill_zero_fields() {
        let src = Some(PersonVo {
            name: "bob".into(),
            age: 0,
        });
        let mut dst = Some(PersonDo::default());
        map(&mut dst, &src).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.name, "bob");
        assert_eq!(dst.age, 18);
        assert_eq!(dst.retries, Some(5));
        assert_eq!(dst.timeout, Duration::from_secs(90));
        assert_eq!(dst.level, 0);
    }

    #[test]
    fn defaults_skip_bound_fields() {
        let src = Some(PersonVo {
            name: "bob".into(),
            age: 30,
        });
        let mut dst = Some(PersonDo {
            retries: Some(1),
            ..PersonDo::default()
        });
        map(&mut dst, &src).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.age, 30);
        assert_eq!(dst.retries, Some(1));
    }

    #[test]
    fn defaults_need_their_mode() {
        let src = Some(PersonVo::default());
        let mut dst = Some(PersonDo::default());
        map_with_config(&mut dst, &src, &field_only()).unwrap();
        assert_eq!(dst, Some(PersonDo::default()));
    }

    #[derive(Reflect, Debug, Default)]
    struct SpanVo {
        #[tag(json = "years")]
        pub span: u8,
    }

    #[derive(Reflect, Debug, Default)]
    struct SpanDo {
        #[tag(json = "years", default = "18")]
        pub age: u8,
        #[tag(json = "months", default = "6")]
        pub months: u8,
    }

    #[test]
    fn defaults_skip_tag_bound_fields() {
        let config = MapConfig::new(BindMode::TAG | BindMode::DEFAULT_VALUE);
        let mut dst = Some(SpanDo::default());
        map_with_config(&mut dst, &Some(SpanVo { span: 30 }), &config).unwrap();

        let dst = dst.unwrap();
        assert_eq!(dst.age, 30);
        assert_eq!(dst.months, 6);

        let mut dst = Some(SpanDo::default());
        map_with_config(&mut dst, &Some(SpanVo { span: 0 }), &config).unwrap();
        assert_eq!(dst.unwrap().age, 18);
    }

    #[derive(Reflect, Debug, Default)]
    struct ContactVo {
        #[tag(json = "mail,omitempty")]
        pub contact: String,
    }

    #[derive(Reflect, Debug, Default)]
    struct ContactDo {
        #[tag(json = "mail")]
        pub email: String,
    }

    #[test]
    fn tag_pass_matches_tokens() {
        let src = Some(ContactVo {
            contact: "a@b.com".into(),
        });
        let mut dst = Some(ContactDo::default());
        map_with_config(&mut dst, &src, &MapConfig::new(BindMode::TAG)).unwrap();
        assert_eq!(dst.unwrap().email, "a@b.com");

        let mut dst = Some(ContactDo::default());
        map_with_config(&mut dst, &src, &field_only()).unwrap();
        assert_eq!(dst.unwrap().email, "");
    }

    #[derive(Reflect, Debug, Default)]
    struct Tokens {
        #[tag(json = "a")]
        pub first: u32,
        #[tag(json = "b")]
        pub second: u32,
    }

    #[derive(Reflect, Debug, Default)]
    struct Joined {
        #[tag(json = "a,b")]
        pub value: u32,
    }

    #[test]
    fn first_token_wins() {
        let tag = MapConfig::new(BindMode::TAG);

        let src = Some(Tokens { first: 1, second: 2 });
        let mut dst = Some(Joined::default());
        map_with_config(&mut dst, &src, &tag).unwrap();
        assert_eq!(dst.unwrap().value, 1);

        let src = Some(Tokens { first: 0, second: 2 });
        let mut dst = Some(Joined::default());
        map_with_config(&mut dst, &src, &tag).unwrap();
        assert_eq!(dst.unwrap().value, 0);
    }

    #[test]
    fn overlay() {
        let src = Some(Tokens { first: 1, second: 2 });

        let mut dst = Some(Joined { value: 5 });
        map_with_config(&mut dst, &src, &MapConfig::new(BindMode::TAG)).unwrap();
        assert_eq!(dst.unwrap().value, 5);

        let mut dst = Some(Joined { value: 5 });
        let config = MapConfig::new(BindMode::TAG | BindMode::OVERLAY);
        map_with_config(&mut dst, &src, &config).unwrap();
        assert_eq!(dst.unwrap().value, 1);
    }

    #[derive(Reflect, Debug, Default)]
    struct AddressVo {
        #[tag(json = "city")]
        pub town: String,
        pub zip: String,
    }

    #[derive(Reflect, Debug, Default)]
    struct AddressDo {
        #[tag(json = "city")]
        pub city: String,
        pub zip: String,
    }

    #[derive(Reflect, Debug, Default)]
    struct OrderVo {
        pub address: AddressVo,
        pub billing: Option<AddressVo>,
    }

    #[derive(Reflect, Debug, Default)]
    struct OrderDo {
        pub address: AddressDo,
        pub billing: AddressDo,
    }

    fn order_vo(billing: Option<AddressVo>) -> OrderVo {
        OrderVo {
            address: AddressVo {
                town: "Oslo".into(),
                zip: "0150".into(),
            },
            billing,
        }
    }

    #[test]
    fn nested_records_share_the_config() {
        let src = Some(order_vo(None));

        let mut dst = Some(OrderDo::default());
        map_with_config(&mut dst, &src, &MapConfig::new(BindMode::FIELD | BindMode::TAG))
            .unwrap();
        let dst = dst.unwrap();
        assert_eq!(dst.address.zip, "0150");
        assert_eq!(dst.address.city, "Oslo");

        let mut dst = Some(OrderDo::default());
        map_with_config(&mut dst, &src, &field_only()).unwrap();
        let dst = dst.unwrap();
        assert_eq!(dst.address.zip, "0150");
        assert_eq!(dst.address.city, "");
    }

    #[test]
    fn source_handles_are_dereferenced() {
        let billing = AddressVo {
            town: "Bergen".into(),
            zip: "5003".into(),
        };
        let mut dst = Some(OrderDo::default());
        map(&mut dst, &Some(order_vo(Some(billing)))).unwrap();
        assert_eq!(dst.unwrap().billing.zip, "5003");

        let mut dst = Some(OrderDo::default());
        map(&mut dst, &Some(order_vo(None))).unwrap();
        assert_eq!(dst.unwrap().billing.zip, "");
    }

    #[test]
    fn bare_records_are_rejected() {
        let mut dst = UserDo::default();
        let err = map(&mut dst, &user_vo()).unwrap_err();
        assert!(matches!(err, MapError::MustBePointer(ReflectKind::Struct)));
        assert_eq!(dst, UserDo::default());
    }

    #[test]
    fn structural_errors() {
        let mut dst = Some(UserDo::default());
        let err = map(&mut dst, &user_vo()).unwrap_err();
        assert!(matches!(
            err,
            MapError::ShapeMismatch {
                dst: ReflectKind::Pointer,
                src: ReflectKind::Struct,
            }
        ));

        let err = map(&mut Some(1_u8), &Some(2_u8)).unwrap_err();
        assert!(matches!(
            err,
            MapError::MustBeStructPointer("core::option::Option<u8>")
        ));

        let err = map(&mut Some(UserDo::default()), &Some(3_u8)).unwrap_err();
        assert!(matches!(err, MapError::MustBeStructPointer(_)));

        let err = map(&mut None::<UserDo>, &Some(user_vo())).unwrap_err();
        assert!(matches!(err, MapError::NullPointer));
        let err = map(&mut Some(UserDo::default()), &None::<UserVo>).unwrap_err();
        assert!(matches!(err, MapError::NullPointer));
    }

    #[derive(Reflect, Debug)]
    struct Settings {
        pub depth: u8,
    }

    #[derive(Reflect, Debug, Default)]
    struct Invalid {
        #[tag(default = "many")]
        pub count: u8,
    }

    #[derive(Reflect, Debug, Default)]
    struct NoBacking {
        #[tag(default = "3")]
        pub settings: Option<Settings>,
    }

    #[test]
    fn default_errors_abort() {
        let src = Some(PersonVo::default());

        let err = map(&mut Some(Invalid::default()), &src).unwrap_err();
        assert!(matches!(
            err,
            MapError::DefaultValue(BindError::Parse { field: "count", .. })
        ));

        let err = map(&mut Some(NoBacking::default()), &src).unwrap_err();
        assert!(matches!(
            err,
            MapError::DefaultValue(BindError::Unallocatable { field: "settings", .. })
        ));
    }

    /// Binds every literal as its length.
    struct LenBinder;

    impl DefaultBinder for LenBinder {
        fn bind(
            &self,
            literal: &str,
            target: &mut dyn Reflect,
            field: &NamedField,
        ) -> Result<(), BindError> {
            let len = u8::try_from(literal.len()).unwrap_or(u8::MAX);
            target
                .set(Box::new(len))
                .map_err(|_| BindError::Unsupported {
                    field: field.name(),
                    type_path: field.type_path(),
                })
        }
    }

    #[test]
    fn custom_binder() {
        let mapper = Mapper::with_binder(&MapConfig::default(), LenBinder);
        let mut dst = Some(PersonDo::default());
        let err = mapper.map(&mut dst, &Some(PersonVo::default())).unwrap_err();

        // `age` is bound first, `retries` then rejects a `u8`.
        assert!(matches!(
            err,
            MapError::DefaultValue(BindError::Unsupported { field: "retries", .. })
        ));
        assert_eq!(dst.unwrap().age, 2);
    }

    #[test]
    fn default_mapper() {
        let mapper = Mapper::default();
        assert_eq!(
            mapper.config().mode(),
            BindMode::FIELD | BindMode::DEFAULT_VALUE
        );
        assert_eq!(mapper.config().tag(), "");
    }
}
