use std::collections::BTreeMap;

use crate::{
    CategoryKey, ChannelSet, DeliveryOption, EventChannelConfig, EventDefinition,
    NotificationCategory,
};

#[derive(Debug)]
pub(crate) struct CategoryTemplate {
    pub(crate) key: CategoryKey,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
    pub(crate) events: &'static [EventDefinition],
    // Events that also go out by text message out of the box.
    pub(crate) sms_events: &'static [&'static str],
}

const TEMPLATES: [CategoryTemplate; 4] = [
    CategoryTemplate {
        key: CategoryKey::Purchases,
        label: "Purchases & Orders",
        description: "Control alerts for quotes, orders, and billing events related to new purchases.",
        events: &[
            EventDefinition::new("quote_accepted", "Quote accepted"),
            EventDefinition::new("order_submitted", "Order submitted to vendor"),
            EventDefinition::new("order_completed", "Order completed / provisioned"),
            EventDefinition::new("invoice_ready", "Monthly invoice ready"),
        ],
        sms_events: &[],
    },
    CategoryTemplate {
        key: CategoryKey::Services,
        label: "Services & Subscriptions",
        description: "Stay informed about renewals, expirations, and subscription lifecycle changes.",
        events: &[
            EventDefinition::new("renewal_upcoming", "Renewal upcoming"),
            EventDefinition::new("renewal_completed", "Renewal completed"),
            EventDefinition::new("subscription_suspended", "Subscription suspended"),
            EventDefinition::new("subscription_canceled", "Subscription canceled"),
        ],
        sms_events: &["subscription_suspended"],
    },
    CategoryTemplate {
        key: CategoryKey::Maintenance,
        label: "Scheduled Maintenance & Incidents",
        description: "Get notified about scheduled maintenance windows and real-time incident updates.",
        events: &[
            EventDefinition::new("maintenance_scheduled", "Maintenance window scheduled"),
            EventDefinition::new("maintenance_started", "Maintenance started"),
            EventDefinition::new("maintenance_completed", "Maintenance completed"),
            EventDefinition::new("incident_opened", "Incident opened"),
            EventDefinition::new("incident_resolved", "Incident resolved"),
        ],
        sms_events: &["maintenance_started", "incident_opened"],
    },
    CategoryTemplate {
        key: CategoryKey::Provisioning,
        label: "Provisioning & Tenant Events",
        description: "Track provisioning pipelines, tenant health checks, and delegated admin changes.",
        events: &[
            EventDefinition::new("tenant_created", "New tenant created"),
            EventDefinition::new("tenant_updated", "Tenant configuration changed"),
            EventDefinition::new("provisioning_delayed", "Provisioning delayed"),
            EventDefinition::new("provisioning_failed", "Provisioning failed"),
            EventDefinition::new("delegated_admin_changed", "Delegated admin updated"),
        ],
        sms_events: &["provisioning_delayed", "provisioning_failed"],
    },
];

#[must_use]
pub(crate) fn template(key: CategoryKey) -> &'static CategoryTemplate {
    &TEMPLATES[key.index()]
}

impl CategoryTemplate {
    #[must_use]
    pub(crate) fn build(&self) -> NotificationCategory {
        let events = self
            .events
            .iter()
            .map(|def| {
                let mut channels = ChannelSet::EMAIL | ChannelSet::IN_APP;
                if self.sms_events.contains(&def.id) {
                    channels |= ChannelSet::SMS;
                }
                (
                    def.id,
                    EventChannelConfig {
                        enabled: true,
                        channels,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        NotificationCategory::new(
            self.key,
            self.label,
            self.description,
            DeliveryOption::Instant,
            self.events,
            events,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{TEMPLATES, template};
    use crate::CategoryKey;

    #[test]
    fn templates_are_indexed_by_key() {
        for key in CategoryKey::ALL {
            assert_eq!(template(key).key, key);
        }
    }

    #[test]
    fn event_ids_are_unique_and_sms_events_exist() {
        for template in &TEMPLATES {
            let ids: HashSet<_> = template.events.iter().map(|def| def.id).collect();
            assert_eq!(ids.len(), template.events.len());
            assert!(template.sms_events.iter().all(|id| ids.contains(id)));
        }
    }
}
