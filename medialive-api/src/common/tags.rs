use std::collections::BTreeMap;

use crate::ModelError;

/// Key/value tags attached to a resource.
pub type Tags = BTreeMap<String, String>;

pub(crate) fn insert_tag(
    tags: &mut Option<Tags>,
    key: String,
    value: String,
) -> Result<(), ModelError> {
    let tags = tags.get_or_insert_with(Tags::new);
    if tags.contains_key(&key) {
        return Err(ModelError::DuplicateTagKey(key));
    }
    tags.insert(key, value);
    Ok(())
}
