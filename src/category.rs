//! The static registry of spending categories.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A spending category, e.g. 'Food', 'Travel'.
///
/// Category keys are matched case-insensitively once, when a record is turned
/// into a [crate::Transaction]. Keys that are not in the registry resolve to
/// [Category::Other] so their amounts still show up in totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, restaurants and takeaways.
    Food,
    /// Fuel, public transport and car costs.
    Transportation,
    /// Rent, mortgage and home maintenance.
    Housing,
    /// Power, water, internet and phone bills.
    Utilities,
    /// Movies, games, concerts and subscriptions.
    Entertainment,
    /// Doctor, pharmacy and insurance excess.
    Healthcare,
    /// Courses, books and tuition.
    Education,
    /// Clothes, electronics and household goods.
    Shopping,
    /// Flights, accommodation and holidays.
    Travel,
    /// Haircuts, gym and other personal care.
    Personal,
    /// Presents and donations.
    Gifts,
    /// Shares, funds and savings contributions.
    Investments,
    /// Wages and other regular income.
    Salary,
    /// Anything that does not fit the categories above.
    Other,
}

impl Category {
    /// Every category in the registry, in display order.
    pub const ALL: [Category; 14] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::Shopping,
        Category::Travel,
        Category::Personal,
        Category::Gifts,
        Category::Investments,
        Category::Salary,
        Category::Other,
    ];

    /// Look up a category by its key, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` if `key` is not in the registry.
    pub fn from_key(key: &str) -> Option<Self> {
        let category = match key.trim().to_lowercase().as_str() {
            "food" => Category::Food,
            "transportation" => Category::Transportation,
            "housing" => Category::Housing,
            "utilities" => Category::Utilities,
            "entertainment" => Category::Entertainment,
            "healthcare" => Category::Healthcare,
            "education" => Category::Education,
            "shopping" => Category::Shopping,
            "travel" => Category::Travel,
            "personal" => Category::Personal,
            "gifts" => Category::Gifts,
            "investments" => Category::Investments,
            "salary" => Category::Salary,
            "other" => Category::Other,
            _ => return None,
        };

        Some(category)
    }

    /// Look up a category by its key, falling back to [Category::Other] for
    /// keys that are not in the registry.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::debug!("Unknown category \"{key}\", using \"Other\"");
            Category::Other
        })
    }

    /// The normalized key used by the data-access layer.
    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Personal => "personal",
            Category::Gifts => "gifts",
            Category::Investments => "investments",
            Category::Salary => "salary",
            Category::Other => "other",
        }
    }

    /// The capitalized name shown to users.
    pub fn display_label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Personal => "Personal",
            Category::Gifts => "Gifts",
            Category::Investments => "Investments",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// The name of the icon the presentation layer should draw.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "utensils",
            Category::Transportation => "bus",
            Category::Housing => "home",
            Category::Utilities => "bolt",
            Category::Entertainment => "film",
            Category::Healthcare => "heart-pulse",
            Category::Education => "book",
            Category::Shopping => "shopping-bag",
            Category::Travel => "plane",
            Category::Personal => "user",
            Category::Gifts => "gift",
            Category::Investments => "trending-up",
            Category::Salary => "briefcase",
            Category::Other => "tag",
        }
    }

    /// The accent color for charts and badges.
    pub fn color(self) -> &'static str {
        match self {
            Category::Food => "orange",
            Category::Transportation => "blue",
            Category::Housing => "amber",
            Category::Utilities => "yellow",
            Category::Entertainment => "purple",
            Category::Healthcare => "red",
            Category::Education => "indigo",
            Category::Shopping => "pink",
            Category::Travel => "cyan",
            Category::Personal => "teal",
            Category::Gifts => "rose",
            Category::Investments => "emerald",
            Category::Salary => "green",
            Category::Other => "gray",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label())
    }
}
