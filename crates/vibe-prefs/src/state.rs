use std::ops::{Index, IndexMut};

use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::{CategoryKey, NotificationCategory, catalog};

/// Notification preferences for every category.
///
/// Holds exactly one [`NotificationCategory`] per [`CategoryKey`]; categories
/// are neither added nor removed. Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    categories: [NotificationCategory; 4],
}

impl NotificationState {
    /// Builds the recommended default preferences.
    ///
    /// Every category is enabled with instant delivery, and every event is
    /// enabled for e-mail and in-app. Text messages are on for the events
    /// that need immediate attention (suspensions, maintenance start,
    /// incidents, provisioning problems).
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            categories: CategoryKey::ALL.map(|key| catalog::template(key).build()),
        }
    }

    /// Iterates categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &NotificationCategory> {
        self.categories.iter()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Index<CategoryKey> for NotificationState {
    type Output = NotificationCategory;

    fn index(&self, key: CategoryKey) -> &Self::Output {
        &self.categories[key.index()]
    }
}

impl IndexMut<CategoryKey> for NotificationState {
    fn index_mut(&mut self, key: CategoryKey) -> &mut Self::Output {
        &mut self.categories[key.index()]
    }
}

impl Serialize for NotificationState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key(), category)?;
        }
        map.end()
    }
}
