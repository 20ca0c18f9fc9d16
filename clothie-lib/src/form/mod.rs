//! Form field controller.
//!
//! A [`Form`] owns the state of every field it declares and is driven by
//! [`FormEvent`] messages. Each change re-runs the field's validators;
//! overall validity is derived on demand from the fields.
//!
//! # Example
//!
//! ```
//! use clothie_lib::form::{FieldSpec, Form, FormEvent};
//! use clothie_lib::validation::{email, required};
//!
//! let mut form = Form::new(vec![
//!     FieldSpec::new("email", "Email").validators(vec![required(), email()]),
//! ]);
//! assert!(!form.is_valid());
//!
//! form.handle(FormEvent::changed("email", "ada@example.com")).unwrap();
//! assert!(form.is_valid());
//! ```

mod field;

pub use field::{Field, FieldSpec, InputKind};

use crate::error::FormError;
use crate::validation::ValidatorDescriptor;

/// A state update for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited the field.
    FieldChanged { id: String, value: String },
    /// The field lost focus.
    FieldBlurred { id: String },
    /// The value came from elsewhere with a known validity.
    ValueLoaded {
        id: String,
        value: String,
        is_valid: bool,
    },
}

impl FormEvent {
    pub fn changed(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn blurred(id: impl Into<String>) -> Self {
        Self::FieldBlurred { id: id.into() }
    }

    pub fn loaded(id: impl Into<String>, value: impl Into<String>, is_valid: bool) -> Self {
        Self::ValueLoaded {
            id: id.into(),
            value: value.into(),
            is_valid,
        }
    }
}

/// The fields of one form, in declaration order.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Build a form from its field declarations.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: specs.into_iter().map(Field::new).collect(),
        }
    }

    /// Apply one event.
    ///
    /// Events for undeclared fields are rejected and leave the form unchanged.
    pub fn handle(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::FieldChanged { id, value } => {
                let field = self.field_mut(&id)?;
                field.change(value);
                log::debug!("field {} changed, valid={}", id, field.is_valid());
            }
            FormEvent::FieldBlurred { id } => {
                self.field_mut(&id)?.touch();
            }
            FormEvent::ValueLoaded { id, value, is_valid } => {
                self.field_mut(&id)?.load(value, is_valid);
                log::debug!("field {} loaded, valid={}", id, is_valid);
            }
        }
        Ok(())
    }

    /// Replace a field's rules. Its validity is left as is until the next
    /// change or [`revalidate`](Self::revalidate).
    pub fn set_validators(
        &mut self,
        id: &str,
        validators: Vec<ValidatorDescriptor>,
    ) -> Result<(), FormError> {
        self.field_mut(id)?.set_validators(validators);
        Ok(())
    }

    /// Re-run a field's rules against its current value.
    pub fn revalidate(&mut self, id: &str) -> Result<(), FormError> {
        self.field_mut(id)?.revalidate();
        Ok(())
    }

    /// `true` when every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Current value of a field, or `""` if it is not declared.
    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(Field::value).unwrap_or_default()
    }

    pub fn error_text(&self, id: &str) -> Option<&str> {
        self.field(id).and_then(Field::error_text)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn field_mut(&mut self, id: &str) -> Result<&mut Field, FormError> {
        self.fields
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or_else(|| FormError::unknown_field(id))
    }
}
