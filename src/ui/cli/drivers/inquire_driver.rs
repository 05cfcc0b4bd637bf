use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::CustomUserError;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Text};

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn check_bounds(x: f64, min: Option<f64>, max: Option<f64>) -> Validation {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => {
            Validation::Invalid(format!("Must be between {lo} and {hi}").into())
        }
        (Some(lo), None) if x < lo => Validation::Invalid(format!("Must be ≥ {lo}").into()),
        (None, Some(hi)) if x > hi => Validation::Invalid(format!("Must be ≤ {hi}").into()),
        _ => Validation::Valid,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &f64| {
                Ok::<_, CustomUserError>(check_bounds(*x, min, max))
            })
            .prompt()?)
    }
}
