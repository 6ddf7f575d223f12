//! Turns the settings and a month's spending into the figures shown to the user.

use serde::Serialize;

use crate::settings::Settings;

/// The remaining ratio must be above this for the budget to show as green.
const GREEN_THRESHOLD: i64 = 50;
/// The remaining ratio must be above this for the budget to show as yellow.
const YELLOW_THRESHOLD: i64 = 10;

/// How much of the usable amount is left, as a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    /// Pick the colour for a remaining ratio given in percent.
    pub fn from_remain_ratio(remain_ratio: i64) -> Self {
        if remain_ratio > GREEN_THRESHOLD {
            StatusColor::Green
        } else if remain_ratio > YELLOW_THRESHOLD {
            StatusColor::Yellow
        } else {
            StatusColor::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Yellow => "yellow",
            StatusColor::Red => "red",
        }
    }
}

/// The derived budget for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    /// Monthly income from the settings.
    pub income: i64,
    /// Savings goal from the settings.
    pub saving_goal: i64,
    /// Sum of the fixed-cost categories.
    pub fixed_cost: i64,
    /// Income left after fixed costs and the savings goal.
    pub usable_amount: i64,
    /// Sum of the month's expenses.
    pub used_amount: i64,
    /// Usable amount not yet spent. Negative once the month is overspent.
    pub free_balance: i64,
    /// The savings goal plus whatever is left of the free balance.
    pub total_saving: i64,
    /// Percentage of the usable amount left, truncated toward zero.
    pub remain_ratio: i64,
    pub status_color: StatusColor,
}

/// Compute the budget for a month in which `used_amount` has been spent.
///
/// If there is nothing usable to begin with (`usable_amount <= 0`) the
/// remaining ratio is `0`.
pub fn compute_budget(settings: &Settings, used_amount: i64) -> BudgetSummary {
    let fixed_cost = settings.fixed_cost();
    let usable_amount = settings
        .income
        .saturating_sub(fixed_cost)
        .saturating_sub(settings.saving_goal);
    let free_balance = usable_amount.saturating_sub(used_amount);
    let total_saving = settings.saving_goal.saturating_add(free_balance);
    let remain_ratio = remain_ratio(free_balance, usable_amount);

    BudgetSummary {
        income: settings.income,
        saving_goal: settings.saving_goal,
        fixed_cost,
        usable_amount,
        used_amount,
        free_balance,
        total_saving,
        remain_ratio,
        status_color: StatusColor::from_remain_ratio(remain_ratio),
    }
}

fn remain_ratio(free_balance: i64, usable_amount: i64) -> i64 {
    if usable_amount <= 0 {
        return 0;
    }

    let ratio = i128::from(free_balance) * 100 / i128::from(usable_amount);

    ratio.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod compute_budget_tests {
    use crate::{
        budget::{StatusColor, compute_budget},
        settings::Settings,
    };

    fn rent_only_settings() -> Settings {
        Settings {
            income: 185_000,
            saving_goal: 40_000,
            rent: 50_000,
            ..Default::default()
        }
    }

    #[test]
    fn derives_fixed_and_usable_amounts() {
        let summary = compute_budget(&rent_only_settings(), 0);

        assert_eq!(summary.fixed_cost, 50_000);
        assert_eq!(summary.usable_amount, 95_000);
    }

    #[test]
    fn nothing_spent_leaves_whole_usable_amount() {
        let summary = compute_budget(&rent_only_settings(), 0);

        assert_eq!(summary.used_amount, 0);
        assert_eq!(summary.free_balance, summary.usable_amount);
        assert_eq!(summary.total_saving, 40_000 + 95_000);
        assert_eq!(summary.remain_ratio, 100);
        assert_eq!(summary.status_color, StatusColor::Green);
    }

    #[test]
    fn half_spent_is_yellow() {
        let summary = compute_budget(&rent_only_settings(), 47_500);

        assert_eq!(summary.free_balance, 47_500);
        assert_eq!(summary.total_saving, 87_500);
        assert_eq!(summary.remain_ratio, 50);
        assert_eq!(summary.status_color, StatusColor::Yellow);
    }

    #[test]
    fn fully_spent_is_red() {
        let summary = compute_budget(&rent_only_settings(), 95_000);

        assert_eq!(summary.free_balance, 0);
        assert_eq!(summary.remain_ratio, 0);
        assert_eq!(summary.status_color, StatusColor::Red);
    }

    #[test]
    fn overspending_gives_negative_balance_and_ratio() {
        let summary = compute_budget(&rent_only_settings(), 100_000);

        assert_eq!(summary.free_balance, -5_000);
        assert_eq!(summary.total_saving, 35_000);
        // -5000 * 100 / 95000 = -5.26..., truncated toward zero.
        assert_eq!(summary.remain_ratio, -5);
        assert_eq!(summary.status_color, StatusColor::Red);
    }

    #[test]
    fn ratio_truncates_instead_of_rounding() {
        let settings = Settings {
            income: 3,
            saving_goal: 0,
            ..Default::default()
        };

        // 2 / 3 = 66.66...%
        assert_eq!(compute_budget(&settings, 1).remain_ratio, 66);
        // -1 / 3 = -33.33...%
        assert_eq!(compute_budget(&settings, 4).remain_ratio, -33);
    }

    #[test]
    fn no_usable_amount_is_red_with_zero_ratio() {
        let cases = [
            Settings {
                income: 40_000,
                saving_goal: 40_000,
                ..Default::default()
            },
            Settings {
                income: 10_000,
                saving_goal: 40_000,
                ..Default::default()
            },
        ];

        for settings in cases {
            for used_amount in [-1_000, 0, 1_000] {
                let summary = compute_budget(&settings, used_amount);

                assert!(summary.usable_amount <= 0);
                assert_eq!(summary.remain_ratio, 0);
                assert_eq!(summary.status_color, StatusColor::Red);
            }
        }
    }

    #[test]
    fn spending_more_never_increases_balance_or_ratio() {
        let settings = rent_only_settings();
        let mut previous = compute_budget(&settings, 0);

        for used_amount in (1_000..=120_000).step_by(1_000) {
            let summary = compute_budget(&settings, used_amount);

            assert!(summary.free_balance < previous.free_balance);
            assert!(summary.remain_ratio <= previous.remain_ratio);

            previous = summary;
        }
    }

    #[test]
    fn extreme_settings_do_not_overflow() {
        let settings = Settings {
            income: i64::MIN,
            saving_goal: i64::MAX,
            rent: i64::MAX,
            ..Default::default()
        };

        let summary = compute_budget(&settings, i64::MAX);

        assert_eq!(summary.usable_amount, i64::MIN);
        assert_eq!(summary.remain_ratio, 0);
    }
}
