/// Creates a list of attributes for element builders.
///
/// ```
/// let attributes = dom_fixture::attributes!["id" => "foo", "hidden" => false];
///
/// assert_eq!(attributes.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let attributes: ::std::vec::Vec<(::std::string::String, $crate::AttributeValue)> =
            ::std::vec![$((::std::string::String::from($name), $crate::AttributeValue::from($value))),*];
        attributes
    }};
}

/// Creates a list of children for element builders.
///
/// ```
/// let children = dom_fixture::children!["foo", None::<&str>];
///
/// assert_eq!(children.len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::Child> = ::std::vec![$($crate::Child::from($child)),*];
        children
    }};
}
