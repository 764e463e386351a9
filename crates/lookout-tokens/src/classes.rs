//! Conditional class-name composition.

use std::collections::BTreeMap;

/// Anything that can denote a conditional list of class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// A class name, always included (unless empty).
    Name(String),
    /// A falsy input (`false`, `None`); contributes nothing.
    Skip,
    /// Nested inputs, flattened in order.
    List(Vec<ClassValue>),
    /// Class names paired with the condition that includes them.
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    /// A single class included only when `enabled` is true.
    pub fn when(name: impl Into<String>, enabled: bool) -> Self {
        ClassValue::Map(vec![(name.into(), enabled)])
    }

    fn write_into(self, out: &mut String) {
        match self {
            ClassValue::Name(name) => push_name(out, &name),
            ClassValue::Skip => {}
            ClassValue::List(items) => {
                for item in items {
                    item.write_into(out);
                }
            }
            ClassValue::Map(entries) => {
                for (name, enabled) in entries {
                    if enabled {
                        push_name(out, &name);
                    }
                }
            }
        }
    }
}

fn push_name(out: &mut String, name: &str) {
    if name.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(name);
}

/// Join the truthy class names from `inputs` with single spaces, in order.
///
/// See also the [`classes!`](crate::classes!) macro for variadic calls.
pub fn merge_class_names<I>(inputs: I) -> String
where
    I: IntoIterator<Item = ClassValue>,
{
    let mut out = String::new();
    for input in inputs {
        input.write_into(&mut out);
    }
    out
}

/// Variadic form of [`merge_class_names`].
///
/// Every argument is converted with `ClassValue::from`:
///
/// ```
/// use lookout_tokens::classes;
///
/// let disabled = false;
/// let class = classes!("a", false, "b", [("c", true), ("d", disabled)]);
/// assert_eq!(class, "a b c");
/// ```
#[macro_export]
macro_rules! classes {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::ClassValue> =
            ::std::vec![$($crate::ClassValue::from($value)),*];
        $crate::merge_class_names(values)
    }};
}

impl From<&str> for ClassValue {
    fn from(name: &str) -> Self {
        ClassValue::Name(name.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(name: String) -> Self {
        ClassValue::Name(name)
    }
}

impl From<&String> for ClassValue {
    fn from(name: &String) -> Self {
        ClassValue::Name(name.clone())
    }
}

/// A bare boolean never names a class.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Skip
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Skip, Into::into)
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((name, enabled): (&str, bool)) -> Self {
        ClassValue::when(name, enabled)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, bool>> for ClassValue {
    fn from(map: BTreeMap<String, bool>) -> Self {
        ClassValue::Map(map.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_inputs() {
        let merged = merge_class_names([
            ClassValue::from("a"),
            ClassValue::from(false),
            ClassValue::from("b"),
            ClassValue::Map(vec![("c".into(), true), ("d".into(), false)]),
        ]);
        assert_eq!(merged, "a b c");
    }

    #[test]
    fn test_macro_matches_function() {
        assert_eq!(classes!("a", false, "b", [("c", true), ("d", false)]), "a b c");
        assert_eq!(classes!(), "");
    }

    #[test]
    fn test_nested_and_optional() {
        let size: Option<&str> = Some("btn-lg");
        let icon: Option<String> = None;

        let merged = classes!(
            "btn",
            vec![ClassValue::from(size), ClassValue::from(icon)],
            [["deep", "er"]],
            true,
        );
        assert_eq!(merged, "btn btn-lg deep er");
    }

    #[test]
    fn test_empty_names_dropped() {
        assert_eq!(classes!("", "a", "", ("", true)), "a");
    }

    #[test]
    fn test_btreemap_input() {
        let mut map = BTreeMap::new();
        map.insert("open".to_string(), true);
        map.insert("closed".to_string(), false);
        assert_eq!(classes!("panel", map), "panel open");
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(classes!("z", "a", ("m", true)), "z a m");
    }
}
