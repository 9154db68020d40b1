use crate::icon::IconName;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Stable identifier of a menu item, assigned by the host and reported back
/// on selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemLabel(String);

crate::impl_string_newtype!(ItemLabel);

/// One entry on the dial. Immutable once constructed; the position of an
/// item in the input sequence defines its angular slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub label: ItemLabel,
    pub icon: Option<IconName>,
}

impl MenuItem {
    pub fn new(id: ItemId, label: ItemLabel, icon: Option<IconName>) -> Self {
        Self { id, label, icon }
    }

    /// Fallback glyph for items without a resolvable icon.
    pub fn initial(&self) -> Option<char> {
        self.label.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_initial_is_first_char() {
        let item = MenuItem::new(ItemId::new(1), ItemLabel::new("Messages"), None);
        assert_eq!(item.initial(), Some('M'));

        let empty = MenuItem::new(ItemId::new(2), ItemLabel::new(""), None);
        assert_eq!(empty.initial(), None);
    }

    #[test]
    fn ids_and_labels_deserialize_transparently() {
        let id: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);

        let label: ItemLabel = serde_json::from_str("\"Home\"").unwrap();
        assert_eq!(label.as_str(), "Home");
    }
}
