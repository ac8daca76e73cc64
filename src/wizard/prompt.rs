//! Field prompting protocol.
//!
//! One prompt loop shared by every wizard field:
//!
//! - empty input keeps the current value when one exists
//! - empty input on an optional field returns empty
//! - the literal `skip` (any case) keeps current-or-empty
//! - rejected input prints the error and re-prompts
//! - a required field with no value re-prompts
//!
//! Secret fields never echo their current value.

use crate::config::{Validation, Validator};
use crate::error::Result;
use crate::ui::UserInterface;

/// A single field to collect.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Stable prompt key (also the config key for most fields).
    pub key: &'a str,
    /// Question shown to the user.
    pub label: &'a str,
    /// Existing value, shown as the default for non-secret fields.
    pub current: &'a str,
    /// Whether an empty final value is rejected.
    pub required: bool,
    /// Secret fields use no-echo input and hide the current value.
    pub secret: bool,
    /// Optional validator applied to typed input.
    pub validator: Option<Validator>,
}

impl<'a> Field<'a> {
    /// A required plain-text field.
    pub fn required(key: &'a str, label: &'a str, current: &'a str) -> Self {
        Self {
            key,
            label,
            current,
            required: true,
            secret: false,
            validator: None,
        }
    }

    /// An optional plain-text field.
    pub fn optional(key: &'a str, label: &'a str, current: &'a str) -> Self {
        Self {
            required: false,
            ..Self::required(key, label, current)
        }
    }

    /// Attach a validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Mark as secret (no-echo input, current value never displayed).
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Prompt for one field until an acceptable value is produced.
pub fn prompt_field(ui: &mut dyn UserInterface, field: &Field) -> Result<String> {
    loop {
        let raw = if field.secret {
            ui.password(field.key, field.label)?
        } else {
            ui.input(field.key, field.label, Some(field.current))?
        };
        let value = raw.trim();

        if value.is_empty() && !field.current.is_empty() {
            return Ok(field.current.to_string());
        }
        if value.is_empty() && !field.required {
            return Ok(String::new());
        }
        if value.eq_ignore_ascii_case("skip") {
            return Ok(field.current.to_string());
        }
        if value.is_empty() {
            ui.error("This field is required. Please enter a value.");
            continue;
        }

        if let Some(validate) = field.validator {
            match validate(value) {
                Validation::Valid => {}
                Validation::Invalid(msg) => {
                    ui.error(&msg);
                    continue;
                }
                Validation::Unrecognized(msg) => {
                    ui.warning(&msg);
                    if !ui.confirm(field.key, "Continue anyway?", false)? {
                        ui.error("Please enter a valid value");
                        continue;
                    }
                }
            }
        }

        return Ok(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_azure_region, validate_numeric, validate_uuid};
    use crate::ui::MockUI;

    #[test]
    fn empty_input_keeps_current_value() {
        let mut ui = MockUI::new();
        ui.queue_input("target_location", &[""]);

        let field = Field::required("target_location", "Azure Region", "eastus");
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "eastus");
    }

    #[test]
    fn empty_input_on_optional_field_returns_empty() {
        let mut ui = MockUI::new();
        ui.queue_input("note", &[""]);

        let field = Field::optional("note", "Note", "");
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "");
    }

    #[test]
    fn skip_returns_current_when_present() {
        let mut ui = MockUI::new();
        ui.queue_input("target_location", &["SKIP"]);

        let field = Field::required("target_location", "Azure Region", "westus2");
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "westus2");
    }

    #[test]
    fn skip_returns_empty_without_current() {
        let mut ui = MockUI::new();
        ui.queue_input("target_location", &["skip"]);

        let field = Field::required("target_location", "Azure Region", "");
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "");
    }

    #[test]
    fn invalid_inputs_reprompt_until_valid() {
        let mut ui = MockUI::new();
        ui.queue_input(
            "azure_tenant_id",
            &["nope", "also-bad", "still-bad", "12345678-1234-1234-1234-123456789abc"],
        );

        let field =
            Field::required("azure_tenant_id", "Tenant ID", "").with_validator(validate_uuid);
        let value = prompt_field(&mut ui, &field).unwrap();

        assert_eq!(value, "12345678-1234-1234-1234-123456789abc");
        assert_eq!(ui.input_count("azure_tenant_id"), 4);
        assert_eq!(ui.errors().len(), 3);
    }

    #[test]
    fn required_empty_without_current_reprompts() {
        let mut ui = MockUI::new();
        ui.queue_input("target_resource_group", &["", "rg-anf"]);

        // An optional-looking empty still re-prompts because the field is
        // required and there is no current value to fall back to.
        let field = Field::required("target_resource_group", "Resource Group", "");
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "rg-anf");
        assert_eq!(ui.input_count("target_resource_group"), 2);
    }

    #[test]
    fn unrecognized_region_accepted_after_override() {
        let mut ui = MockUI::new();
        ui.queue_input("target_location", &["moonbase1"]);
        ui.queue_confirm("target_location", &[true]);

        let field = Field::required("target_location", "Azure Region", "")
            .with_validator(validate_azure_region);
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "moonbase1");
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn unrecognized_region_declined_reprompts() {
        let mut ui = MockUI::new();
        ui.queue_input("target_location", &["moonbase1", "eastus"]);
        ui.queue_confirm("target_location", &[false]);

        let field = Field::required("target_location", "Azure Region", "")
            .with_validator(validate_azure_region);
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "eastus");
        assert_eq!(ui.input_count("target_location"), 2);
    }

    #[test]
    fn secret_field_reads_password_input() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_app_secret", &["s3cret"]);

        let field = Field::required("azure_app_secret", "Secret", "").secret();
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "s3cret");
    }

    #[test]
    fn validator_not_applied_to_kept_current() {
        let mut ui = MockUI::new();
        ui.queue_input("volume_size_gib", &[""]);

        // Keeping an existing value bypasses validation, matching the
        // keep-existing fast path.
        let field =
            Field::required("volume_size_gib", "Size", "100").with_validator(validate_numeric);
        assert_eq!(prompt_field(&mut ui, &field).unwrap(), "100");
    }
}
