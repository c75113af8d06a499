//! Dashboard stat cards.
//!
//! The figures are static; no backend endpoint feeds them yet.

/// A single dashboard tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    /// Heading.
    pub title: &'static str,
    /// Headline figure.
    pub value: &'static str,
    /// Explanation under the figure.
    pub description: &'static str,
    /// Accent colour (CSS hex).
    pub accent: &'static str,
}

/// Tiles shown on the dashboard, in order.
pub const STAT_CARDS: [StatCard; 6] = [
    StatCard {
        title: "Total Products",
        value: "156",
        description: "Different types of aluminum products",
        accent: "#1976d2",
    },
    StatCard {
        title: "Pending Orders",
        value: "23",
        description: "Orders waiting for processing",
        accent: "#2e7d32",
    },
    StatCard {
        title: "Delivery Tasks",
        value: "8",
        description: "Pending deliveries",
        accent: "#ed6c02",
    },
    StatCard {
        title: "Active Customers",
        value: "45",
        description: "Regular customers",
        accent: "#9c27b0",
    },
    StatCard {
        title: "Monthly Sales",
        value: "$45,678",
        description: "Total sales this month",
        accent: "#d32f2f",
    },
    StatCard {
        title: "Low Stock Items",
        value: "12",
        description: "Products need restocking",
        accent: "#7b1fa2",
    },
];
