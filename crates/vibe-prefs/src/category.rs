use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ChannelSet, DeliveryOption, ParseIdError, catalog};

/// Identifier of a notification category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    /// Quotes, orders and billing.
    #[display("purchases")]
    Purchases,
    /// Renewals and subscription lifecycle.
    #[display("services")]
    Services,
    /// Maintenance windows and incidents.
    #[display("maintenance")]
    Maintenance,
    /// Provisioning pipelines and tenant events.
    #[display("provisioning")]
    Provisioning,
}

impl CategoryKey {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [
        Self::Purchases,
        Self::Services,
        Self::Maintenance,
        Self::Provisioning,
    ];

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Purchases => 0,
            Self::Services => 1,
            Self::Maintenance => 2,
            Self::Provisioning => 3,
        }
    }

    /// Returns the fixed event catalog of this category, in display order.
    #[must_use]
    pub fn event_definitions(self) -> &'static [EventDefinition] {
        catalog::template(self).events
    }
}

impl FromStr for CategoryKey {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.to_string() == s)
            .ok_or_else(|| ParseIdError::new("category", s))
    }
}

/// A triggerable event type within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventDefinition {
    /// Stable identifier, unique within the category.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
}

impl EventDefinition {
    #[must_use]
    pub(crate) const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Whether an event triggers notifications, and on which channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventChannelConfig {
    /// Whether this event type triggers notifications at all.
    pub enabled: bool,
    /// Channels the notification is delivered on.
    pub channels: ChannelSet,
}

/// Preferences of one notification category.
///
/// The set of events is fixed by the category's catalog: the map returned by
/// [`events`](Self::events) always has exactly one entry per
/// [`EventDefinition`], and values can be changed but entries cannot be added
/// or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCategory {
    #[serde(rename = "id")]
    key: CategoryKey,
    label: &'static str,
    description: &'static str,
    /// Whether the category as a whole is active.
    pub enabled: bool,
    /// Delivery timing for the category.
    pub delivery: DeliveryOption,
    event_definitions: &'static [EventDefinition],
    events: BTreeMap<&'static str, EventChannelConfig>,
}

impl NotificationCategory {
    #[must_use]
    pub(crate) fn new(
        key: CategoryKey,
        label: &'static str,
        description: &'static str,
        delivery: DeliveryOption,
        event_definitions: &'static [EventDefinition],
        events: BTreeMap<&'static str, EventChannelConfig>,
    ) -> Self {
        debug_assert!(
            event_definitions
                .iter()
                .all(|def| events.contains_key(def.id))
                && events.len() == event_definitions.len()
        );
        Self {
            key,
            label,
            description,
            enabled: true,
            delivery,
            event_definitions,
            events,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub fn key(&self) -> CategoryKey {
        self.key
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the display description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the event catalog in display order.
    #[must_use]
    pub fn event_definitions(&self) -> &'static [EventDefinition] {
        self.event_definitions
    }

    /// Returns the per-event configuration, keyed by event id.
    #[must_use]
    pub fn events(&self) -> &BTreeMap<&'static str, EventChannelConfig> {
        &self.events
    }

    /// Returns the configuration of one event.
    #[must_use]
    pub fn event(&self, event_id: &str) -> Option<&EventChannelConfig> {
        self.events.get(event_id)
    }

    /// Returns a mutable reference to the configuration of one event.
    pub fn event_mut(&mut self, event_id: &str) -> Option<&mut EventChannelConfig> {
        self.events.get_mut(event_id)
    }

    /// Iterates events in catalog order with their configuration.
    pub fn iter_events(&self) -> impl Iterator<Item = (&'static EventDefinition, &EventChannelConfig)> {
        self.event_definitions
            .iter()
            .filter_map(|def| self.events.get(def.id).map(|config| (def, config)))
    }

    pub(crate) fn event_configs_mut(&mut self) -> impl Iterator<Item = &mut EventChannelConfig> {
        self.events.values_mut()
    }

    /// Compares the user-editable values of two categories.
    ///
    /// Looks at `enabled`, `delivery`, and every event's `enabled` flag and
    /// channel set. Labels and catalogs are fixed and not compared.
    #[must_use]
    pub fn same_settings(&self, other: &Self) -> bool {
        self.enabled == other.enabled
            && self.delivery == other.delivery
            && self.events == other.events
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::CategoryKey;
    use crate::{DeliveryOption, NotificationState};

    #[test]
    fn ids_parse_back() {
        for key in CategoryKey::ALL {
            assert_eq!(key.to_string().parse::<CategoryKey>(), Ok(key));
        }
        assert!("billing".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn iter_events_follows_catalog_order() {
        let state = NotificationState::defaults();
        let category = &state[CategoryKey::Maintenance];

        let ids: Vec<_> = category.iter_events().map(|(def, _)| def.id).collect();
        assert_eq!(
            ids,
            [
                "maintenance_scheduled",
                "maintenance_started",
                "maintenance_completed",
                "incident_opened",
                "incident_resolved",
            ]
        );
    }

    #[test]
    fn same_settings_ignores_nothing_editable() {
        let state = NotificationState::defaults();
        let base = &state[CategoryKey::Services];

        let mut other = base.clone();
        assert!(base.same_settings(&other));

        other
            .event_mut("renewal_completed")
            .unwrap()
            .channels
            .toggle(crate::ChannelSet::SMS);
        assert!(!base.same_settings(&other));
    }

    #[test]
    fn event_config_serializes_with_channel_object() {
        let state = NotificationState::defaults();
        let config = state[CategoryKey::Services]
            .event("subscription_suspended")
            .unwrap();

        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({
                "enabled": true,
                "channels": { "email": true, "inApp": true, "sms": true },
            })
        );
    }

    #[test]
    fn category_serializes_with_wire_names() {
        let mut state = NotificationState::defaults();
        let category = &mut state[CategoryKey::Services];
        category.delivery = DeliveryOption::EndOfDay;

        let channels = |sms: bool| json!({ "email": true, "inApp": true, "sms": sms });
        assert_eq!(
            serde_json::to_value(&*category).unwrap(),
            json!({
                "id": "services",
                "label": "Services & Subscriptions",
                "description": "Stay informed about renewals, expirations, and subscription lifecycle changes.",
                "enabled": true,
                "delivery": "end_of_day",
                "eventDefinitions": [
                    { "id": "renewal_upcoming", "label": "Renewal upcoming" },
                    { "id": "renewal_completed", "label": "Renewal completed" },
                    { "id": "subscription_suspended", "label": "Subscription suspended" },
                    { "id": "subscription_canceled", "label": "Subscription canceled" },
                ],
                "events": {
                    "renewal_upcoming": { "enabled": true, "channels": channels(false) },
                    "renewal_completed": { "enabled": true, "channels": channels(false) },
                    "subscription_suspended": { "enabled": true, "channels": channels(true) },
                    "subscription_canceled": { "enabled": true, "channels": channels(false) },
                },
            })
        );
    }
}
