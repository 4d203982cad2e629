use std::collections::BTreeMap;

use crate::error::ModelError;

/// Inserts `key` into an optional map member, allocating the map when it is
/// absent. A key that is already present is rejected and the map is left
/// as it was.
pub(crate) fn insert_entry(
    slot: &mut Option<BTreeMap<String, String>>,
    field: &'static str,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<(), ModelError> {
    let key = key.into();
    let map = slot.get_or_insert_with(BTreeMap::new);
    if map.contains_key(&key) {
        return Err(ModelError::DuplicateKey { field, key });
    }
    map.insert(key, value.into());
    Ok(())
}

/// Appends `items` to an optional list member, allocating the list when it
/// is absent.
pub(crate) fn append_items<T, I>(slot: &mut Option<Vec<T>>, items: I)
where
    I: IntoIterator,
    I::Item: Into<T>,
{
    slot.get_or_insert_with(Vec::new)
        .extend(items.into_iter().map(Into::into));
}

/// Generates `add_<member>` methods appending to the list members of a shape.
macro_rules! list_appenders {
    ($shape:ty { $($add:ident => $member:ident: $item:ty),+ $(,)? }) => {
        impl $shape {
            $(
                #[doc = concat!(
                    "Appends to `", stringify!($member),
                    "`, allocating the list when it is absent."
                )]
                pub fn $add<I>(&mut self, items: I) -> &mut Self
                where
                    I: IntoIterator,
                    I::Item: Into<$item>,
                {
                    $crate::entries::append_items(&mut self.$member, items);
                    self
                }
            )+
        }
    };
}

pub(crate) use list_appenders;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_allocates_then_extends() {
        let mut slot: Option<Vec<String>> = None;
        append_items(&mut slot, ["a"]);
        append_items(&mut slot, vec!["b", "c"]);
        assert_eq!(
            slot,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_append_nothing_still_allocates() {
        let mut slot: Option<Vec<String>> = None;
        append_items(&mut slot, Vec::<String>::new());
        assert_eq!(slot, Some(vec![]));
    }

    #[test]
    fn test_insert_allocates_map() {
        let mut slot = None;
        insert_entry(&mut slot, "Environment", "A", "1").unwrap();
        assert_eq!(slot.unwrap().get("A").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut slot = None;
        insert_entry(&mut slot, "Environment", "A", "1").unwrap();
        let err = insert_entry(&mut slot, "Environment", "A", "2").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "Environment",
                key: "A".to_string()
            }
        );
        assert_eq!(slot.unwrap().get("A").map(String::as_str), Some("1"));
    }
}
