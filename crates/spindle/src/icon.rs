use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const LOOKUP_SIZE: u16 = 64;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

static RESOLVED: OnceLock<RwLock<HashMap<IconName, Option<PathBuf>>>> = OnceLock::new();

/// Resolve an icon name to a file path. Absolute paths are accepted as-is;
/// anything else goes through the freedesktop icon theme lookup. Results are
/// cached for the lifetime of the process since theme lookups walk the
/// filesystem.
pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() && path.exists() {
        return Some(path.to_path_buf());
    }

    let cache = RESOLVED.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = cache.read().get(icon_name) {
        return hit.clone();
    }

    let found = lookup(icon_name.as_str())
        .with_size(LOOKUP_SIZE)
        .with_scale(1)
        .find();
    cache.write().insert(icon_name.clone(), found.clone());
    found
}
