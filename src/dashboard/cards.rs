//! Card components for the budget figures of a month.
//!
//! Elements that change after an expense is deleted carry an `id` so the
//! delete script can update them in place.

use maud::{Markup, html};

use crate::{
    budget::{BudgetSummary, StatusColor},
    html::format_currency,
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";
const CARD_LABEL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";
const CARD_AMOUNT_STYLE: &str = "text-2xl font-bold";

/// The Tailwind background colour for the remaining budget bar.
fn status_bar_style(status_color: StatusColor) -> &'static str {
    match status_color {
        StatusColor::Green => "bg-green-500",
        StatusColor::Yellow => "bg-yellow-400",
        StatusColor::Red => "bg-red-500",
    }
}

/// Renders the summary cards and the remaining budget bar.
pub(crate) fn budget_summary_view(summary: &BudgetSummary) -> Markup {
    html! {
        section class="w-full max-w-screen-lg mx-auto mb-8"
        {
            div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6"
            {
                (amount_card("Income", None, summary.income))
                (amount_card("Fixed costs", None, summary.fixed_cost))
                (amount_card("Savings goal", None, summary.saving_goal))
                (amount_card("Usable", Some("usable-amount"), summary.usable_amount))
                (amount_card("Spent", Some("used-amount"), summary.used_amount))
                (amount_card("Left to spend", Some("free-balance"), summary.free_balance))
                (amount_card("Total savings", Some("total-saving"), summary.total_saving))
            }

            (remaining_bar(summary.remain_ratio, summary.status_color))
        }
    }
}

fn amount_card(label: &str, id: Option<&str>, amount: i64) -> Markup {
    let amount_style = if amount < 0 {
        format!("{CARD_AMOUNT_STYLE} text-red-600 dark:text-red-400")
    } else {
        CARD_AMOUNT_STYLE.to_owned()
    };

    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_LABEL_STYLE) { (label) }
            div id=[id] class=(amount_style) { (format_currency(amount)) }
        }
    }
}

/// Renders a horizontal bar showing the percentage of the usable amount left.
fn remaining_bar(remain_ratio: i64, status_color: StatusColor) -> Markup {
    let width = remain_ratio.clamp(0, 100);

    html! {
        div
        {
            div class="flex justify-between mb-1"
            {
                span class=(CARD_LABEL_STYLE) { "Remaining" }
                span id="remain-ratio" class="text-sm font-medium" { (remain_ratio) "%" }
            }

            div
                class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-4"
                role="progressbar"
                aria-valuenow=(width)
                aria-valuemin="0"
                aria-valuemax="100"
            {
                div
                    id="remain-bar"
                    class={ "h-4 rounded-full transition-all " (status_bar_style(status_color)) }
                    data-status=(status_color.as_str())
                    style=(format!("width: {width}%"))
                {}
            }
        }
    }
}
