//! Fixed vocabularies the builders draw from.

pub const OUTLET_NAMES: &[&str] = &[
    "SuperMart Downtown",
    "MegaStore Central",
    "QuickMart Express",
    "FamilyShop Plus",
    "GroceryWorld",
    "FreshMart Deluxe",
    "CityStore Premium",
    "NeighborhoodMart",
    "ValueMart Pro",
    "LocalShop Central",
    "MarketPlace Elite",
    "ShopRite Corner",
];

pub const STORE_MANAGERS: &[&str] = &[
    "John Smith",
    "Sarah Johnson",
    "Mike Wilson",
    "Emily Davis",
    "Robert Brown",
    "Lisa Anderson",
    "David Miller",
    "Jennifer Garcia",
    "Michael Taylor",
    "Amanda Wilson",
    "Christopher Lee",
    "Jessica Martinez",
];

pub const SALES_REPS: &[&str] = &[
    "Mike Wilson",
    "Sarah Thompson",
    "Alex Rodriguez",
    "Maria Garcia",
    "James Brown",
    "Nicole Taylor",
    "Kevin Davis",
    "Rachel Martinez",
    "Daniel Lee",
    "Amanda Clark",
    "Steven White",
    "Michelle Lopez",
];

pub const PRODUCT_NAMES: &[&str] = &[
    "Premium Cola 24-pack",
    "Organic Chips Variety Pack",
    "Energy Drink Mix",
    "Sparkling Water Cases",
    "Protein Bars Box",
    "Healthy Snack Mix",
    "Juice Bottle Set",
    "Coffee Bean Bags",
    "Tea Collection Box",
    "Vitamin Water Pack",
    "Sports Drink Cases",
    "Smoothie Mix Packets",
];

pub const CITIES: &[&str] = &[
    "Metro City",
    "Downtown Plaza",
    "Central District",
    "Uptown Area",
    "Riverside",
    "Hillside",
    "Lakeside",
    "Parkview",
    "Westside",
    "Eastgate",
];

pub const STATE: &str = "Central State";
pub const COUNTRY: &str = "Country Name";
pub const THUMBNAIL_URL: &str = "https://picsum.photos/100";
pub const CURRENCY: &str = "USD";

/// Anchor coordinates the generated outlets scatter around.
pub const BASE_LATITUDE: f64 = 40.7128;
pub const BASE_LONGITUDE: f64 = -74.0060;

pub const STREETS: &[&str] = &["Main", "Oak", "Pine", "Elm", "First", "Second"];
pub const DELIVERY_STREETS: &[&str] = &["Main", "Oak", "Pine", "Elm"];
pub const AVENUES: &[&str] = &["Park", "Hill", "River", "Lake"];

pub const CONTACT_ROLES: &[&str] = &[
    "Store Manager",
    "Assistant Manager",
    "Buyer",
    "Operations Manager",
];

pub const VISIT_PURPOSES: &[&str] = &[
    "Product presentation",
    "Order discussion",
    "Customer support",
    "Inventory check",
    "Relationship building",
];

pub const VISIT_OUTCOMES: &[&str] = &[
    "Client showed interest in new products.",
    "Discussed upcoming promotions.",
    "Resolved customer concerns.",
    "Planned next steps.",
];

pub const ACTION_DESCRIPTIONS: &[&str] = &[
    "Follow up on pricing",
    "Schedule product demo",
    "Negotiate terms",
    "Arrange delivery",
    "Collect payment",
];

pub const ORDER_NOTES: &[&str] = &[
    "Standard delivery",
    "Express shipping",
    "Customer pickup",
    "Special instructions followed",
];

pub const NEARBY_RELATIONSHIPS: &[&str] = &["Partner", "Competitor", "Neutral", "Supplier"];

pub const NOTE_TITLES: &[&str] = &[
    "Customer Feedback",
    "Sales Opportunity",
    "Support Issue",
    "Follow-up Required",
    "Payment Discussion",
];

pub const NOTE_BODIES: &[&str] = &[
    "Customer showed interest in new products",
    "Discussed pricing options",
    "Resolved technical issue",
    "Scheduled follow-up meeting",
];

pub const NOTE_TAGS: &[&str] = &["urgent", "follow-up", "opportunity", "issue", "pricing"];

pub const ASSET_NAMES: &[&str] = &["Cooler", "Freezer", "Display", "POS System", "Shelving"];
pub const ASSET_SECTIONS: &[&str] = &["A", "B", "C", "D"];
pub const ASSET_CONDITIONS: &[&str] = &["Excellent", "Good", "Fair", "Needs Attention"];

pub const MAINTENANCE_DESCRIPTIONS: &[&str] = &[
    "Routine cleaning",
    "Temperature calibration",
    "Parts replacement",
    "Software update",
];

pub const TECHNICIANS: &[&str] = &[
    "Tech Services Inc",
    "Maintenance Pro",
    "Equipment Care Ltd",
];

pub const CHECKLIST_TITLES: &[&str] = &[
    "Display Compliance",
    "Inventory Check",
    "Safety Inspection",
    "Quality Review",
    "Marketing Setup",
];

pub const CHECKLIST_NOTES: &[&str] = &[
    "Standard procedure",
    "Special attention required",
    "Follow brand guidelines",
    "Coordinate with manager",
];

pub const NEWS_TITLES: &[&str] = &[
    "Product Launch",
    "Market Update",
    "Policy Change",
    "Promotion Alert",
    "Training Available",
];

pub const NEWS_AUTHORS: &[&str] = &[
    "Marketing Team",
    "Sales Department",
    "Management",
    "External Source",
];

pub const NEWS_TAGS: &[&str] = &["product", "sales", "market", "policy", "training"];
