//! The budget settings document and its fixed-cost categories.

use serde::{Deserialize, Serialize};

/// Monthly income used when no settings have been saved.
pub const DEFAULT_INCOME: i64 = 185_000;
/// Monthly savings goal used when no settings have been saved.
pub const DEFAULT_SAVING_GOAL: i64 = 40_000;

/// A recurring monthly cost that is set aside before discretionary spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedCost {
    Phone,
    CarInsurance,
    LifeInsurance,
    Subscription,
    CarLoan,
    Rent,
    Gasoline,
    Beauty,
    Electricity,
    Water,
    Gas,
}

impl FixedCost {
    /// Every category, in display order.
    pub const ALL: [FixedCost; 11] = [
        FixedCost::Phone,
        FixedCost::CarInsurance,
        FixedCost::LifeInsurance,
        FixedCost::Subscription,
        FixedCost::CarLoan,
        FixedCost::Rent,
        FixedCost::Gasoline,
        FixedCost::Beauty,
        FixedCost::Electricity,
        FixedCost::Water,
        FixedCost::Gas,
    ];

    /// The key used for this category in the settings document and forms.
    pub fn key(self) -> &'static str {
        match self {
            FixedCost::Phone => "phone",
            FixedCost::CarInsurance => "car_insurance",
            FixedCost::LifeInsurance => "life_insurance",
            FixedCost::Subscription => "subscription",
            FixedCost::CarLoan => "car_loan",
            FixedCost::Rent => "rent",
            FixedCost::Gasoline => "gasoline",
            FixedCost::Beauty => "beauty",
            FixedCost::Electricity => "electricity",
            FixedCost::Water => "water",
            FixedCost::Gas => "gas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FixedCost::Phone => "Phone",
            FixedCost::CarInsurance => "Car insurance",
            FixedCost::LifeInsurance => "Life insurance",
            FixedCost::Subscription => "Subscriptions",
            FixedCost::CarLoan => "Car loan",
            FixedCost::Rent => "Rent",
            FixedCost::Gasoline => "Gasoline",
            FixedCost::Beauty => "Beauty",
            FixedCost::Electricity => "Electricity",
            FixedCost::Water => "Water",
            FixedCost::Gas => "Gas",
        }
    }
}

/// Income, savings goal and fixed monthly costs.
///
/// There is exactly one settings document per deployment. It is always
/// replaced as a whole, and the current document is applied to every month,
/// including months that were recorded under different settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Monthly take-home income.
    pub income: i64,
    /// Amount to put aside each month.
    pub saving_goal: i64,
    /// Phone bill.
    pub phone: i64,
    /// Car insurance premium.
    pub car_insurance: i64,
    /// Life insurance premium.
    pub life_insurance: i64,
    /// Subscriptions such as streaming services.
    pub subscription: i64,
    /// Car loan repayment.
    pub car_loan: i64,
    /// Rent.
    pub rent: i64,
    /// Fuel for the car.
    pub gasoline: i64,
    /// Hair and beauty.
    pub beauty: i64,
    /// Electricity bill.
    pub electricity: i64,
    /// Water bill.
    pub water: i64,
    /// Gas bill.
    pub gas: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME,
            saving_goal: DEFAULT_SAVING_GOAL,
            phone: 0,
            car_insurance: 0,
            life_insurance: 0,
            subscription: 0,
            car_loan: 0,
            rent: 0,
            gasoline: 0,
            beauty: 0,
            electricity: 0,
            water: 0,
            gas: 0,
        }
    }
}

impl Settings {
    /// The amount set for a single fixed-cost category.
    pub fn fixed_cost_amount(&self, category: FixedCost) -> i64 {
        match category {
            FixedCost::Phone => self.phone,
            FixedCost::CarInsurance => self.car_insurance,
            FixedCost::LifeInsurance => self.life_insurance,
            FixedCost::Subscription => self.subscription,
            FixedCost::CarLoan => self.car_loan,
            FixedCost::Rent => self.rent,
            FixedCost::Gasoline => self.gasoline,
            FixedCost::Beauty => self.beauty,
            FixedCost::Electricity => self.electricity,
            FixedCost::Water => self.water,
            FixedCost::Gas => self.gas,
        }
    }

    /// Set the amount for a single fixed-cost category.
    pub fn set_fixed_cost_amount(&mut self, category: FixedCost, amount: i64) {
        let field = match category {
            FixedCost::Phone => &mut self.phone,
            FixedCost::CarInsurance => &mut self.car_insurance,
            FixedCost::LifeInsurance => &mut self.life_insurance,
            FixedCost::Subscription => &mut self.subscription,
            FixedCost::CarLoan => &mut self.car_loan,
            FixedCost::Rent => &mut self.rent,
            FixedCost::Gasoline => &mut self.gasoline,
            FixedCost::Beauty => &mut self.beauty,
            FixedCost::Electricity => &mut self.electricity,
            FixedCost::Water => &mut self.water,
            FixedCost::Gas => &mut self.gas,
        };

        *field = amount;
    }

    /// The sum of all eleven fixed-cost categories.
    pub fn fixed_cost(&self) -> i64 {
        FixedCost::ALL
            .iter()
            .fold(0i64, |total, &category| {
                total.saturating_add(self.fixed_cost_amount(category))
            })
    }
}

#[cfg(test)]
mod settings_tests {
    use crate::settings::{FixedCost, Settings};

    #[test]
    fn default_matches_built_in_values() {
        let settings = Settings::default();

        assert_eq!(settings.income, 185_000);
        assert_eq!(settings.saving_goal, 40_000);
        for category in FixedCost::ALL {
            assert_eq!(
                settings.fixed_cost_amount(category),
                0,
                "want {} to default to 0",
                category.key()
            );
        }
    }

    #[test]
    fn fixed_cost_is_exact_sum_of_categories() {
        let mut settings = Settings::default();
        for (i, category) in FixedCost::ALL.into_iter().enumerate() {
            settings.set_fixed_cost_amount(category, (i as i64 + 1) * 1000);
        }

        // 1000 + 2000 + ... + 11000
        assert_eq!(settings.fixed_cost(), 66_000);
    }

    #[test]
    fn set_fixed_cost_amount_only_touches_one_category() {
        let mut settings = Settings::default();

        settings.set_fixed_cost_amount(FixedCost::Rent, 50_000);

        assert_eq!(settings.rent, 50_000);
        assert_eq!(settings.fixed_cost(), 50_000);
    }

    #[test]
    fn category_keys_match_document_keys() {
        let settings = Settings::default();
        let document = serde_json::to_value(&settings).unwrap();
        let object = document.as_object().unwrap();

        assert_eq!(object.len(), 13);
        assert!(object.contains_key("income"));
        assert!(object.contains_key("saving_goal"));
        for category in FixedCost::ALL {
            assert!(
                object.contains_key(category.key()),
                "document is missing {}",
                category.key()
            );
        }
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"rent": 60000}"#).unwrap();

        assert_eq!(
            settings,
            Settings {
                rent: 60_000,
                ..Default::default()
            }
        );
    }
}
