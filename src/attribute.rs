/// An attribute value given to element builders.
///
/// Absent and `false` values are never written onto elements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    /// An absent value.
    Absent,
    /// A boolean value.
    Bool(bool),
    /// A string value.
    String(String),
}

impl AttributeValue {
    /// Returns a string written onto an element, if any.
    pub fn into_written(self) -> Option<String> {
        match self {
            Self::Absent | Self::Bool(false) => None,
            Self::Bool(true) => Some(true.to_string()),
            Self::String(value) => Some(value),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($type:ty),*) => {
        $(
            impl From<$type> for AttributeValue {
                fn from(value: $type) -> Self {
                    Self::String(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skip_absent_and_false() {
        assert_eq!(AttributeValue::Absent.into_written(), None);
        assert_eq!(AttributeValue::from(false).into_written(), None);
        assert_eq!(AttributeValue::from(None::<&str>).into_written(), None);
    }

    #[test]
    fn write_true() {
        assert_eq!(AttributeValue::from(true).into_written(), Some("true".into()));
    }

    #[test]
    fn write_empty_string() {
        assert_eq!(AttributeValue::from("").into_written(), Some("".into()));
    }

    #[test]
    fn write_numbers() {
        assert_eq!(AttributeValue::from(42_u32).into_written(), Some("42".into()));
        assert_eq!(AttributeValue::from(1.5_f64).into_written(), Some("1.5".into()));
        assert_eq!(AttributeValue::from(-3_i64).into_written(), Some("-3".into()));
    }

    #[test]
    fn write_present_option() {
        assert_eq!(
            AttributeValue::from(Some("foo")).into_written(),
            Some("foo".into())
        );
        assert_eq!(AttributeValue::from(Some(false)).into_written(), None);
    }
}
