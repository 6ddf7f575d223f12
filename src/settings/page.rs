//! The settings page and the endpoint for saving it.

use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    coercion::zero_on_failure,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        format_currency,
    },
    navigation::NavBar,
    settings::{FixedCost, Settings, SettingsStore},
};

/// The state needed for viewing and saving the settings.
#[derive(Debug, Clone)]
pub struct SettingsPageState {
    pub settings_store: Arc<dyn SettingsStore>,
}

impl FromRef<AppState> for SettingsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            settings_store: state.settings_store.clone(),
        }
    }
}

/// The raw form data for the settings page.
///
/// Every field is kept as text so that a bad value in one field does not
/// reject the whole form, see [SettingsForm::into_settings].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsForm {
    pub income: Option<String>,
    pub saving_goal: Option<String>,
    pub phone: Option<String>,
    pub car_insurance: Option<String>,
    pub life_insurance: Option<String>,
    pub subscription: Option<String>,
    pub car_loan: Option<String>,
    pub rent: Option<String>,
    pub gasoline: Option<String>,
    pub beauty: Option<String>,
    pub electricity: Option<String>,
    pub water: Option<String>,
    pub gas: Option<String>,
}

impl SettingsForm {
    /// Convert the form into a full settings document.
    ///
    /// Fields are read independently and any field that is missing or not an
    /// integer is saved as `0`.
    pub fn into_settings(self) -> Settings {
        let mut settings = Settings {
            income: zero_on_failure("income", self.income.as_deref()),
            saving_goal: zero_on_failure("saving_goal", self.saving_goal.as_deref()),
            ..Settings::default()
        };

        for category in FixedCost::ALL {
            let amount = zero_on_failure(category.key(), self.fixed_cost_text(category));
            settings.set_fixed_cost_amount(category, amount);
        }

        settings
    }

    fn fixed_cost_text(&self, category: FixedCost) -> Option<&str> {
        let text = match category {
            FixedCost::Phone => &self.phone,
            FixedCost::CarInsurance => &self.car_insurance,
            FixedCost::LifeInsurance => &self.life_insurance,
            FixedCost::Subscription => &self.subscription,
            FixedCost::CarLoan => &self.car_loan,
            FixedCost::Rent => &self.rent,
            FixedCost::Gasoline => &self.gasoline,
            FixedCost::Beauty => &self.beauty,
            FixedCost::Electricity => &self.electricity,
            FixedCost::Water => &self.water,
            FixedCost::Gas => &self.gas,
        };

        text.as_deref()
    }
}

/// Render the settings page with the saved settings.
pub async fn get_settings_page(State(state): State<SettingsPageState>) -> Result<Markup, Error> {
    let settings = state.settings_store.load()?;

    Ok(settings_view(&settings))
}

/// Save the submitted settings and redirect to the dashboard.
pub async fn update_settings_endpoint(
    State(state): State<SettingsPageState>,
    Form(form): Form<SettingsForm>,
) -> Response {
    let settings = form.into_settings();

    match state.settings_store.save(&settings) {
        Ok(()) => {
            tracing::info!(
                "Saved settings: income {}, saving goal {}, fixed cost {}",
                settings.income,
                settings.saving_goal,
                settings.fixed_cost()
            );
            Redirect::to(endpoints::ROOT).into_response()
        }
        Err(error) => error.into_response(),
    }
}

fn settings_view(settings: &Settings) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Settings" }

            form
                method="post"
                action=(endpoints::SETTINGS_VIEW)
                class="w-full space-y-4 md:space-y-6"
            {
                (amount_input("income", "Monthly income", settings.income))
                (amount_input("saving_goal", "Savings goal", settings.saving_goal))

                fieldset class="space-y-4"
                {
                    legend class="text-lg font-semibold mb-2" { "Fixed costs" }

                    @for category in FixedCost::ALL {
                        (amount_input(
                            category.key(),
                            category.label(),
                            settings.fixed_cost_amount(category),
                        ))
                    }
                }

                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Fixed costs total: "
                    span id="fixed-cost-total" { (format_currency(settings.fixed_cost())) }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
            }
        }
    };

    base("Settings", &[], &content)
}

fn amount_input(name: &str, label: &str, value: i64) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type="number"
                name=(name)
                step="1"
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
