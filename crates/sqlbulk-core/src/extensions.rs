//! Small argument and collection helpers shared by the bulk helpers.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{BulkHelpersError, Result};

/// Returns `value` when it is present and not blank, otherwise
/// [`BulkHelpersError::InvalidArgument`] naming `arg_name`.
pub fn assert_not_blank<'a>(value: Option<&'a str>, arg_name: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BulkHelpersError::invalid_argument(arg_name)),
    }
}

/// Joins items with `", "`.
pub fn to_csv<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when the collection is present and yields at least one item.
pub fn has_any<I: IntoIterator>(items: Option<I>) -> bool {
    items.is_some_and(|items| items.into_iter().next().is_some())
}

pub fn is_null_or_empty<I: IntoIterator>(items: Option<I>) -> bool {
    !has_any(items)
}

/// Ordinal, ASCII case-insensitive membership test.
pub fn contains_ignore_case<I, S>(items: I, value: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .any(|item| item.as_ref().eq_ignore_ascii_case(value))
}

pub fn get_value_or_default<K, V>(map: &HashMap<K, V>, key: &K) -> V
where
    K: Eq + Hash,
    V: Default + Clone,
{
    map.get(key).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_not_blank() {
        assert_eq!(assert_not_blank(Some("dbo"), "schema"), Ok("dbo"));
        assert_eq!(
            assert_not_blank(Some(" \t"), "schema"),
            Err(BulkHelpersError::invalid_argument("schema"))
        );
        assert_eq!(
            assert_not_blank(None, "schema"),
            Err(BulkHelpersError::invalid_argument("schema"))
        );
    }

    #[test]
    fn test_to_csv() {
        assert_eq!(to_csv(["[Id]", "[Name]"]), "[Id], [Name]");
        assert_eq!(to_csv(Vec::<String>::new()), "");
        assert_eq!(to_csv(vec!["only".to_string()]), "only");
    }

    #[test]
    fn test_has_any_and_is_null_or_empty() {
        assert!(has_any(Some(vec![1])));
        assert!(!has_any(Some(Vec::<i32>::new())));
        assert!(!has_any(None::<Vec<i32>>));
        assert!(is_null_or_empty(None::<&[u8]>));
        assert!(is_null_or_empty(Some(&[] as &[u8])));
        assert!(!is_null_or_empty(Some(&[1u8] as &[u8])));
    }

    #[test]
    fn test_contains_ignore_case() {
        let columns = ["Id", "OrderDate"];
        assert!(contains_ignore_case(columns, "orderdate"));
        assert!(!contains_ignore_case(columns, "Total"));
    }

    #[test]
    fn test_get_value_or_default() {
        let mut map = HashMap::new();
        map.insert("Order", 3);
        assert_eq!(get_value_or_default(&map, &"Order"), 3);
        assert_eq!(get_value_or_default(&map, &"Invoice"), 0);
    }
}
