//! Closed vocabularies of the outlet record tree.
//!
//! Every enum mirrors a protobuf enumeration: variant `0` is the implicit
//! `*_UNSPECIFIED` default, and JSON uses the fully-qualified protobuf name
//! (`"OUTLET_TYPE_RETAIL"`), the same spelling the binary contract documents.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal {
            $($variant:ident = $value:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            Unspecified,
            $($variant),+
        }

        impl $name {
            /// Every concrete variant, in declaration order. Excludes `Unspecified`.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Protobuf field value.
            #[must_use]
            pub fn value(self) -> i32 {
                match self {
                    Self::Unspecified => 0,
                    $(Self::$variant => $value),+
                }
            }

            /// Protobuf enum value name, e.g. `OUTLET_TYPE_RETAIL`.
            #[must_use]
            pub fn as_str_name(self) -> &'static str {
                match self {
                    Self::Unspecified => concat!($prefix, "_UNSPECIFIED"),
                    $(Self::$variant => concat!($prefix, "_", $label)),+
                }
            }

            #[must_use]
            pub fn from_str_name(name: &str) -> Option<Self> {
                if name == concat!($prefix, "_UNSPECIFIED") {
                    return Some(Self::Unspecified);
                }
                $(
                    if name == concat!($prefix, "_", $label) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str_name())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str_name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_str_name(&raw).ok_or_else(|| {
                    de::Error::custom(format!(
                        concat!("unknown ", stringify!($name), " \"{}\""),
                        raw
                    ))
                })
            }
        }
    };
}

proto_enum!(
    /// Trading format of an outlet.
    OutletType, "OUTLET_TYPE" {
        Retail = 1 => "RETAIL",
        Wholesale = 2 => "WHOLESALE",
        Pharmacy = 3 => "PHARMACY",
        Supermarket = 4 => "SUPERMARKET",
        ConvenienceStore = 5 => "CONVENIENCE_STORE",
        Restaurant = 6 => "RESTAURANT",
    }
);

proto_enum!(
    OutletStatus, "OUTLET_STATUS" {
        Active = 1 => "ACTIVE",
        Inactive = 2 => "INACTIVE",
    }
);

proto_enum!(
    ContactType, "CONTACT_TYPE" {
        Manager = 1 => "MANAGER",
    }
);

proto_enum!(
    VisitType, "VISIT_TYPE" {
        SalesCall = 1 => "SALES_CALL",
        Delivery = 2 => "DELIVERY",
        Support = 3 => "SUPPORT",
        Audit = 4 => "AUDIT",
        Training = 5 => "TRAINING",
    }
);

proto_enum!(
    VisitStatus, "VISIT_STATUS" {
        Completed = 1 => "COMPLETED",
    }
);

proto_enum!(
    /// Follow-up agreed during a visit.
    ActionType, "ACTION_TYPE" {
        FollowUp = 1 => "FOLLOW_UP",
        ProductDemo = 2 => "PRODUCT_DEMO",
        PriceNegotiation = 3 => "PRICE_NEGOTIATION",
        DeliverySchedule = 4 => "DELIVERY_SCHEDULE",
        PaymentCollection = 5 => "PAYMENT_COLLECTION",
    }
);

proto_enum!(
    ActionStatus, "ACTION_STATUS" {
        Pending = 1 => "PENDING",
        InProgress = 2 => "IN_PROGRESS",
        Completed = 3 => "COMPLETED",
    }
);

proto_enum!(
    OrderStatus, "ORDER_STATUS" {
        Delivered = 1 => "DELIVERED",
        Shipped = 2 => "SHIPPED",
        Processing = 3 => "PROCESSING",
        Confirmed = 4 => "CONFIRMED",
    }
);

proto_enum!(
    PaymentMethod, "PAYMENT_METHOD" {
        Cash = 1 => "CASH",
        CreditCard = 2 => "CREDIT_CARD",
        BankTransfer = 3 => "BANK_TRANSFER",
        Credit = 4 => "CREDIT",
    }
);

proto_enum!(
    PaymentStatus, "PAYMENT_STATUS" {
        Paid = 1 => "PAID",
    }
);

proto_enum!(
    DeliveryStatus, "DELIVERY_STATUS" {
        Delivered = 1 => "DELIVERED",
    }
);

proto_enum!(
    CustomerSegment, "CUSTOMER_SEGMENT" {
        Bronze = 1 => "BRONZE",
        Silver = 2 => "SILVER",
        Gold = 3 => "GOLD",
        Platinum = 4 => "PLATINUM",
    }
);

proto_enum!(
    CreditStatus, "CREDIT_STATUS" {
        Good = 1 => "GOOD",
    }
);

proto_enum!(
    NoteType, "NOTE_TYPE" {
        General = 1 => "GENERAL",
        Sales = 2 => "SALES",
        Support = 3 => "SUPPORT",
        Complaint = 4 => "COMPLAINT",
        Opportunity = 5 => "OPPORTUNITY",
        Reminder = 6 => "REMINDER",
    }
);

proto_enum!(
    /// Equipment placed at an outlet.
    AssetType, "ASSET_TYPE" {
        Freezer = 1 => "FREEZER",
        Refrigerator = 2 => "REFRIGERATOR",
        DisplayUnit = 3 => "DISPLAY_UNIT",
        Signage = 4 => "SIGNAGE",
        PosSystem = 5 => "POS_SYSTEM",
        Shelving = 6 => "SHELVING",
    }
);

proto_enum!(
    AssetStatus, "ASSET_STATUS" {
        Active = 1 => "ACTIVE",
    }
);

proto_enum!(
    MaintenanceType, "MAINTENANCE_TYPE" {
        Routine = 1 => "ROUTINE",
        Repair = 2 => "REPAIR",
        Replacement = 3 => "REPLACEMENT",
        Upgrade = 4 => "UPGRADE",
    }
);

proto_enum!(
    ChecklistCategory, "CHECKLIST_CATEGORY" {
        Compliance = 1 => "COMPLIANCE",
        Safety = 2 => "SAFETY",
        Quality = 3 => "QUALITY",
        Inventory = 4 => "INVENTORY",
        Maintenance = 5 => "MAINTENANCE",
        Marketing = 6 => "MARKETING",
    }
);

proto_enum!(
    /// Derived state of a checklist item; never drawn at random.
    ChecklistStatus, "CHECKLIST_STATUS" {
        Pending = 1 => "PENDING",
        Completed = 2 => "COMPLETED",
        Overdue = 3 => "OVERDUE",
    }
);

proto_enum!(
    Priority, "PRIORITY" {
        Low = 1 => "LOW",
        Medium = 2 => "MEDIUM",
        High = 3 => "HIGH",
        Critical = 4 => "CRITICAL",
    }
);

proto_enum!(
    NewsType, "NEWS_TYPE" {
        General = 1 => "GENERAL",
        Promotion = 2 => "PROMOTION",
        ProductLaunch = 3 => "PRODUCT_LAUNCH",
        PolicyChange = 4 => "POLICY_CHANGE",
        MarketUpdate = 5 => "MARKET_UPDATE",
        Competitor = 6 => "COMPETITOR",
    }
);

proto_enum!(
    NewsSource, "NEWS_SOURCE" {
        Internal = 1 => "INTERNAL",
        External = 2 => "EXTERNAL",
        Outlet = 3 => "OUTLET",
        MarketResearch = 4 => "MARKET_RESEARCH",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_is_default_and_zero() {
        assert_eq!(OutletType::default(), OutletType::Unspecified);
        assert_eq!(OutletType::Unspecified.value(), 0);
        assert_eq!(
            OutletType::Unspecified.as_str_name(),
            "OUTLET_TYPE_UNSPECIFIED"
        );
    }

    #[test]
    fn all_excludes_unspecified() {
        assert_eq!(OutletType::ALL.len(), 6);
        assert!(!ChecklistStatus::ALL.contains(&ChecklistStatus::Unspecified));
    }

    #[test]
    fn serializes_with_protobuf_name() {
        let json = serde_json::to_string(&OutletType::ConvenienceStore).expect("serialize");
        assert_eq!(json, "\"OUTLET_TYPE_CONVENIENCE_STORE\"");
    }

    #[test]
    fn deserialize_rejects_unknown_name() {
        let err = serde_json::from_str::<Priority>("\"PRIORITY_URGENT\"").unwrap_err();
        assert!(err.to_string().contains("unknown Priority"));
    }

    #[test]
    fn from_str_name_matches_as_str_name() {
        for status in ActionStatus::ALL {
            assert_eq!(
                ActionStatus::from_str_name(status.as_str_name()),
                Some(*status)
            );
        }
    }
}
