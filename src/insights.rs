//! Pre-analyzed spending patterns and per-weekday spending insights

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How often a spending pattern recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
}

/// A recurring habit the user could pledge against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub average_amount: f64,
    pub frequency: Frequency,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
    pub top_merchants: [&'static str; 3],
    pub insight: &'static str,
    pub pledge_suggestion: &'static str,
}

pub static SPENDING_PATTERNS: [SpendingPattern; 3] = [
    SpendingPattern {
        id: "saturday-night",
        name: "Saturday Night Out",
        average_amount: 147.0,
        frequency: Frequency::Weekly,
        confidence: 0.92,
        top_merchants: ["THE TIPSY CROW", "UBER TRIP", "MCSORLEYS ALE HOUSE"],
        insight: "You typically spend around $147 on Saturday nights between 8 PM and 2 AM.",
        pledge_suggestion: "Skip one Saturday night out and invest in Future You instead.",
    },
    SpendingPattern {
        id: "food-delivery",
        name: "Food Delivery",
        average_amount: 89.0,
        frequency: Frequency::Weekly,
        confidence: 0.85,
        top_merchants: ["DOORDASH", "UBER EATS", "GRUBHUB"],
        insight: "You order delivery about 3 times per week, averaging $30 per order.",
        pledge_suggestion: "Cook one meal instead of ordering and watch your savings grow.",
    },
    SpendingPattern {
        id: "subscriptions",
        name: "Streaming Services",
        average_amount: 45.0,
        frequency: Frequency::Monthly,
        confidence: 0.99,
        top_merchants: ["NETFLIX", "SPOTIFY", "HULU"],
        insight: "Your streaming subscriptions total about $45 per month.",
        pledge_suggestion: "Cancel one service you rarely use.",
    },
];

/// Look up a pattern by id, falling back to the Saturday-night pattern
pub fn find_pattern(id: &str) -> &'static SpendingPattern {
    SPENDING_PATTERNS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&SPENDING_PATTERNS[0])
}

/// What a typical night of a given weekday costs, and what staying in would save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingInsight {
    pub weekday: Weekday,
    pub average_spending: f64,
    pub top_category: &'static str,
    pub saved_if_stayed_in: f64,
    pub projected_in_10_years: f64,
}

const SATURDAY: SpendingInsight = SpendingInsight {
    weekday: Weekday::Sat,
    average_spending: 147.0,
    top_category: "nightlife",
    saved_if_stayed_in: 127.0,
    projected_in_10_years: 274.0,
};

const FRIDAY: SpendingInsight = SpendingInsight {
    weekday: Weekday::Fri,
    average_spending: 89.0,
    top_category: "dining",
    saved_if_stayed_in: 72.0,
    projected_in_10_years: 155.0,
};

const SUNDAY: SpendingInsight = SpendingInsight {
    weekday: Weekday::Sun,
    average_spending: 45.0,
    top_category: "dining",
    saved_if_stayed_in: 35.0,
    projected_in_10_years: 75.0,
};

/// Insight for `weekday`; days without their own entry get Saturday's
pub fn insight_for(weekday: Weekday) -> SpendingInsight {
    match weekday {
        Weekday::Fri => FRIDAY,
        Weekday::Sun => SUNDAY,
        _ => SATURDAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pattern() {
        assert_eq!(find_pattern("food-delivery").name, "Food Delivery");
        assert_eq!(find_pattern("subscriptions").frequency, Frequency::Monthly);
        assert_eq!(find_pattern("no-such-pattern").id, "saturday-night");
    }

    #[test]
    fn test_insight_fallback() {
        assert_eq!(insight_for(Weekday::Fri).average_spending, 89.0);
        assert_eq!(insight_for(Weekday::Sun).saved_if_stayed_in, 35.0);
        assert_eq!(insight_for(Weekday::Wed), insight_for(Weekday::Sat));
    }

    #[test]
    fn test_savings_never_exceed_spending() {
        for day in [Weekday::Fri, Weekday::Sat, Weekday::Sun] {
            let insight = insight_for(day);
            assert!(insight.saved_if_stayed_in <= insight.average_spending);
            assert!(insight.projected_in_10_years > insight.saved_if_stayed_in);
        }
    }
}
