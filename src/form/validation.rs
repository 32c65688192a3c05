//! Client-side checks run before a submission is attempted.

use std::fmt;

use thiserror::Error;

use crate::catalog::Category;
use crate::form::event::{ProductField, VariantField};
use crate::form::state::FormState;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    /// The field is required but empty.
    Required,
    /// The field must be a number.
    NotANumber,
    /// The field must be greater than zero.
    NotPositive,
    /// The field must be a whole number of zero or more.
    NotANonNegativeInteger,
    /// The category is not one of the loaded child categories.
    UnknownCategory,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "is required",
            Self::NotANumber => "must be a number",
            Self::NotPositive => "must be greater than zero",
            Self::NotANonNegativeInteger => "must be a whole number of zero or more",
            Self::UnknownCategory => "is not a known category",
        })
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The field's wire name, e.g. `itemName` or `variants[0][quantity]`.
    pub field: String,
    /// Why it was rejected.
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// The form failed client-side validation. Nothing was sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid product: {}", join(.violations))]
pub struct ValidationError {
    /// Every violation, in field order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns `true` if `field` has a violation.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|violation| violation.field == field)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default)]
struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    fn reject(&mut self, field: impl Into<String>, reason: ViolationReason) {
        self.violations.push(FieldViolation {
            field: field.into(),
            reason,
        });
    }

    /// Records `Required` for blank text. Returns `true` if present.
    fn required(&mut self, field: impl Into<String>, value: &str) -> bool {
        if value.trim().is_empty() {
            self.reject(field, ViolationReason::Required);
            false
        } else {
            true
        }
    }

    fn number(&mut self, field: impl Into<String>, value: &str) -> Option<f64> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Some(number),
            _ => {
                self.reject(field, ViolationReason::NotANumber);
                None
            }
        }
    }
}

impl FormState {
    /// Checks required fields and numeric formats.
    ///
    /// `categories` is the loaded child category list. When it is empty the
    /// category is only checked for presence.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every violation found.
    pub fn validate(&self, categories: &[Category]) -> Result<(), ValidationError> {
        let draft = &self.draft;
        let mut check = Checker::default();

        check.required(ProductField::ItemName.as_str(), &draft.item_name);

        let new_price = ProductField::NewPrice.as_str();
        if check.required(new_price, &draft.new_price) {
            if let Some(price) = check.number(new_price, &draft.new_price) {
                if price <= 0.0 {
                    check.reject(new_price, ViolationReason::NotPositive);
                }
            }
        }
        check.number(ProductField::OldPrice.as_str(), &draft.old_price);

        let category = ProductField::Category.as_str();
        if check.required(category, &draft.category)
            && !categories.is_empty()
            && !categories.iter().any(|known| known.id == draft.category)
        {
            check.reject(category, ViolationReason::UnknownCategory);
        }

        check.required(ProductField::ShortDescription.as_str(), &draft.short_description);
        check.required(ProductField::FullDescription.as_str(), &draft.full_description);

        for (index, variant) in draft.variants.iter().enumerate() {
            let key = |field: VariantField| format!("variants[{index}][{field}]");

            check.number(key(VariantField::NewPrice), &variant.new_price);
            check.number(key(VariantField::OldPrice), &variant.old_price);

            let quantity = key(VariantField::Quantity);
            if check.required(quantity.clone(), &variant.quantity)
                && variant.quantity.trim().parse::<u64>().is_err()
            {
                check.reject(quantity, ViolationReason::NotANonNegativeInteger);
            }
        }

        if check.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: check.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::event::InputEvent;

    fn categories() -> Vec<Category> {
        vec![Category {
            id: "c1".to_string(),
            name: "Shirts".to_string(),
            parents: Vec::new(),
        }]
    }

    fn complete() -> FormState {
        let mut state = FormState::new();
        for (field, value) in [
            (ProductField::ItemName, "Tee"),
            (ProductField::NewPrice, "19.99"),
            (ProductField::Category, "c1"),
            (ProductField::ShortDescription, "Soft"),
            (ProductField::FullDescription, "Soft cotton tee"),
        ] {
            state = state.set_field(field, InputEvent::from(value)).unwrap();
        }
        state
    }

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(complete().validate(&categories()), Ok(()));
    }

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let error = FormState::new().validate(&categories()).unwrap_err();
        for field in [
            "itemName",
            "newPrice",
            "category",
            "shortDescription",
            "fullDescription",
        ] {
            assert!(error.has(field), "missing violation for {field}");
        }
        assert!(!error.has("oldPrice"));
        assert!(!error.has("id"));
    }

    #[test]
    fn test_empty_category_is_rejected_without_a_list() {
        let state = complete()
            .set_field(ProductField::Category, InputEvent::from(""))
            .unwrap();
        let error = state.validate(&[]).unwrap_err();
        assert_eq!(
            error.violations,
            vec![FieldViolation {
                field: "category".to_string(),
                reason: ViolationReason::Required,
            }]
        );
    }

    #[test]
    fn test_unknown_category() {
        let state = complete()
            .set_field(ProductField::Category, InputEvent::from("gone"))
            .unwrap();
        assert!(state.validate(&categories()).unwrap_err().has("category"));
        assert_eq!(state.validate(&[]), Ok(()));
    }

    #[test]
    fn test_price_rules() {
        let zero = complete()
            .set_field(ProductField::NewPrice, InputEvent::from("0"))
            .unwrap();
        assert_eq!(
            zero.validate(&categories()).unwrap_err().violations[0].reason,
            ViolationReason::NotPositive
        );

        let text = complete()
            .set_field(ProductField::OldPrice, InputEvent::from("cheap"))
            .unwrap();
        assert_eq!(
            text.validate(&categories()).unwrap_err().violations,
            vec![FieldViolation {
                field: "oldPrice".to_string(),
                reason: ViolationReason::NotANumber,
            }]
        );
    }

    #[test]
    fn test_variant_quantity_rules() {
        let state = complete().add_variant().add_variant();
        assert_eq!(state.validate(&categories()), Ok(()));

        let blank = state
            .update_variant(1, VariantField::Quantity, InputEvent::from(""))
            .unwrap();
        assert!(blank
            .validate(&categories())
            .unwrap_err()
            .has("variants[1][quantity]"));

        let fractional = state
            .update_variant(0, VariantField::Quantity, InputEvent::from("2.5"))
            .unwrap();
        let error = fractional.validate(&categories()).unwrap_err();
        assert_eq!(
            error.violations[0].reason,
            ViolationReason::NotANonNegativeInteger
        );
    }

    #[test]
    fn test_error_message_lists_fields() {
        let error = FormState::new().validate(&[]).unwrap_err();
        assert!(error.to_string().starts_with("Invalid product: itemName is required"));
    }
}
