use std::collections::BTreeMap;

use crate::error::Error;
use crate::model::PiTypeMapping;

/// Registered S7 type → (point type, Location2) mappings.
const PI_TYPE_MAPPINGS: &[(&str, PiTypeMapping)] = &[(
    "BOOL",
    PiTypeMapping {
        point_type: "Int16",
        location2: 2,
    },
)];

/// Map an S7 primitive type to its historian point type.
///
/// Only registered types map; everything else, array descriptors
/// included, is an [`Error::UnsupportedType`].
pub fn map_type(s7_type: &str) -> Result<PiTypeMapping, Error> {
    PI_TYPE_MAPPINGS
        .iter()
        .find(|(name, _)| *name == s7_type)
        .map(|(_, mapping)| *mapping)
        .ok_or_else(|| Error::UnsupportedType {
            s7_type: s7_type.to_string(),
        })
}

/// Map every distinct type name, e.g. the `data_type` of each derived tag.
///
/// Fails on the first type without a mapping.
pub fn map_types<'a, I>(type_names: I) -> Result<BTreeMap<String, PiTypeMapping>, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut mappings = BTreeMap::new();
    for name in type_names {
        if !mappings.contains_key(name) {
            mappings.insert(name.to_string(), map_type(name)?);
        }
    }
    Ok(mappings)
}
