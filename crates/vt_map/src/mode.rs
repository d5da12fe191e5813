use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Binding passes run by a [`Mapper`](crate::Mapper).
    ///
    /// Passes always run in the order `FIELD`, `TAG`, `DEFAULT_VALUE`.
    /// `OVERLAY` is not a pass, it lets the `TAG` pass overwrite
    /// destination fields that already hold a non-zero value.
    ///
    /// In human-readable formats the set is written as flag names joined
    /// by `|`:
    ///
    /// ```
    /// use vt_map::BindMode;
    ///
    /// let mode: BindMode = serde_json::from_str(r#""FIELD | TAG""#).unwrap();
    /// assert_eq!(mode, BindMode::FIELD | BindMode::TAG);
    /// assert_eq!(BindMode::default(), BindMode::FIELD | BindMode::DEFAULT_VALUE);
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct BindMode: u8 {
        /// Copy fields with identical names.
        const FIELD         = 1 << 0;
        /// Copy fields sharing an annotation token.
        const TAG           = 1 << 1;
        /// Fill still-zero fields from their `default` annotation.
        const DEFAULT_VALUE = 1 << 2;
        /// Let the `TAG` pass overwrite non-zero fields.
        const OVERLAY       = 1 << 3;
    }
}

impl Default for BindMode {
    /// `FIELD | DEFAULT_VALUE`, the mode of [`map`](crate::map).
    #[inline]
    fn default() -> Self {
        Self::FIELD | Self::DEFAULT_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::BindMode;

    #[test]
    fn serde_text_form() {
        let mode = BindMode::TAG | BindMode::OVERLAY;
        assert_eq!(serde_json::to_string(&mode).unwrap(), r#""TAG | OVERLAY""#);
        assert_eq!(serde_json::to_string(&BindMode::empty()).unwrap(), r#""""#);

        let back: BindMode = ron::from_str(r#""FIELD | DEFAULT_VALUE""#).unwrap();
        assert_eq!(back, BindMode::default());
    }

    #[test]
    fn overlay_is_a_modifier() {
        let mode = BindMode::default();
        assert!(mode.contains(BindMode::FIELD));
        assert!(!mode.contains(BindMode::TAG));
        assert!(!mode.contains(BindMode::OVERLAY));
    }
}
