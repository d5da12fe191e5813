use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::time::Duration);
impl_reflect_opaque!(::std::time::SystemTime(zero = ::std::time::UNIX_EPOCH));

#[cfg(test)]
mod tests {
    use core::time::Duration;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn duration_is_opaque() {
        assert_eq!(Duration::type_path(), "core::time::Duration");
        assert_eq!(Duration::ZERO.reflect_kind(), ReflectKind::Opaque);
        assert!(Duration::ZERO.is_zero());
        assert!(!Duration::from_millis(1).is_zero());

        let mut value = Duration::ZERO;
        value.try_apply(&Duration::from_secs(2)).unwrap();
        assert_eq!(value, Duration::from_secs(2));
    }

    #[test]
    fn system_time_zero_is_epoch() {
        assert!(UNIX_EPOCH.is_zero());
        assert!(!SystemTime::now().is_zero());
        assert_eq!(SystemTime::type_info().type_name(), "SystemTime");

        let value = SystemTime::type_info().default_value().unwrap();
        assert_eq!(value.take::<SystemTime>().unwrap(), UNIX_EPOCH);
    }
}
