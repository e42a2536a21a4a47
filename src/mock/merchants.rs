//! Merchant tables used to fabricate transactions

use crate::accounts::Category;

/// A merchant and the range of a typical charge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merchant {
    pub name: &'static str,
    pub category: Category,
    pub min: f64,
    pub max: f64,
}

impl Merchant {
    const fn new(name: &'static str, category: Category, min: f64, max: f64) -> Self {
        Self { name, category, min, max }
    }

    /// Fixed-price merchants (subscriptions, phone bills) always charge `min`
    pub fn is_fixed_price(&self) -> bool {
        self.min == self.max
    }
}

/// Merchants seen on the demo checking account
pub static CHECKING_MERCHANTS: [Merchant; 24] = [
    Merchant::new("WHOLE FOODS MARKET", Category::Groceries, 45.0, 120.0),
    Merchant::new("TRADER JOE'S", Category::Groceries, 35.0, 85.0),
    Merchant::new("TARGET", Category::Shopping, 25.0, 150.0),
    Merchant::new("AMAZON.COM", Category::Shopping, 15.0, 200.0),
    Merchant::new("SHELL OIL", Category::Gas, 35.0, 65.0),
    Merchant::new("CHEVRON", Category::Gas, 40.0, 70.0),
    Merchant::new("STARBUCKS", Category::Coffee, 5.0, 12.0),
    Merchant::new("CHIPOTLE", Category::Dining, 12.0, 18.0),
    Merchant::new("SWEETGREEN", Category::Dining, 14.0, 20.0),
    Merchant::new("DOORDASH", Category::Delivery, 25.0, 55.0),
    Merchant::new("UBER EATS", Category::Delivery, 22.0, 48.0),
    Merchant::new("CVS PHARMACY", Category::Pharmacy, 15.0, 85.0),
    Merchant::new("WALGREENS", Category::Pharmacy, 10.0, 60.0),
    Merchant::new("UBER", Category::Transportation, 12.0, 45.0),
    Merchant::new("LYFT", Category::Transportation, 10.0, 40.0),
    Merchant::new("SPOTIFY USA", Category::Subscription, 10.99, 10.99),
    Merchant::new("NETFLIX.COM", Category::Subscription, 15.99, 15.99),
    Merchant::new("APPLE.COM/BILL", Category::Subscription, 9.99, 9.99),
    Merchant::new("AT&T WIRELESS", Category::Utilities, 85.0, 85.0),
    Merchant::new("VERIZON WIRELESS", Category::Utilities, 95.0, 95.0),
    Merchant::new("COMCAST CABLE", Category::Utilities, 120.0, 120.0),
    Merchant::new("PG&E", Category::Utilities, 95.0, 180.0),
    Merchant::new("THE TIPSY CROW", Category::Nightlife, 45.0, 95.0),
    Merchant::new("MCSORLEYS ALE HOUSE", Category::Nightlife, 35.0, 85.0),
];

/// A fixed-amount credit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeSource {
    pub name: &'static str,
    pub category: Category,
    pub amount: f64,
}

/// The paycheck posted at fixed transaction slots
pub const PAYROLL: IncomeSource = IncomeSource {
    name: "DIRECT DEPOSIT - PAYROLL",
    category: Category::Income,
    amount: 3250.0,
};

/// Night-out merchants for the spending history
pub static NIGHT_OUT_MERCHANTS: [Merchant; 7] = [
    Merchant::new("THE TIPSY CROW", Category::Nightlife, 45.0, 85.0),
    Merchant::new("UBER TRIP", Category::Nightlife, 15.0, 35.0),
    Merchant::new("LYFT RIDE", Category::Nightlife, 12.0, 28.0),
    Merchant::new("MCSORLEYS ALE HOUSE", Category::Nightlife, 35.0, 75.0),
    Merchant::new("BARREL PROOF", Category::Nightlife, 40.0, 90.0),
    Merchant::new("7-ELEVEN", Category::Nightlife, 8.0, 20.0),
    Merchant::new("TACO BELL", Category::Nightlife, 12.0, 25.0),
];

/// Weekday lunch merchants for the spending history
pub static DINING_MERCHANTS: [Merchant; 5] = [
    Merchant::new("CHIPOTLE", Category::Dining, 12.0, 18.0),
    Merchant::new("SWEETGREEN", Category::Dining, 14.0, 20.0),
    Merchant::new("DOORDASH", Category::Dining, 25.0, 45.0),
    Merchant::new("UBER EATS", Category::Dining, 22.0, 40.0),
    Merchant::new("GRUBHUB", Category::Dining, 20.0, 38.0),
];

/// Streaming services billed on the 1st of each month
pub static STREAMING_SUBSCRIPTIONS: [Merchant; 3] = [
    Merchant::new("NETFLIX", Category::Subscription, 15.99, 15.99),
    Merchant::new("SPOTIFY", Category::Subscription, 10.99, 10.99),
    Merchant::new("HULU", Category::Subscription, 17.99, 17.99),
];
