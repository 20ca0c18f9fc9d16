//! Field declarations and per-field runtime state.

use crate::validation::{self, ValidatorDescriptor};

/// How an input is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    /// Value is masked when rendered.
    Password,
}

/// Declaration of one form field.
///
/// # Example
///
/// ```
/// use clothie_lib::form::{FieldSpec, InputKind};
/// use clothie_lib::validation::{max_length, min_length};
///
/// let spec = FieldSpec::new("newPassword", "New password")
///     .kind(InputKind::Password)
///     .validators(vec![min_length(6), max_length(10)])
///     .error_text("Password must be 6 to 10 characters");
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) kind: InputKind,
    pub(crate) validators: Vec<ValidatorDescriptor>,
    pub(crate) initial_value: String,
    pub(crate) initially_valid: bool,
    pub(crate) error_text: Option<String>,
    pub(crate) read_only: bool,
}

impl FieldSpec {
    /// Declare a field. It starts empty, invalid and without rules.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: InputKind::Text,
            validators: Vec::new(),
            initial_value: String::new(),
            initially_valid: false,
            error_text: None,
            read_only: false,
        }
    }

    /// Set the input kind.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the validation rules.
    pub fn validators(mut self, validators: Vec<ValidatorDescriptor>) -> Self {
        self.validators = validators;
        self
    }

    /// Set the starting value and validity.
    ///
    /// The validity is taken as given, not computed from the value.
    pub fn initial(mut self, value: impl Into<String>, is_valid: bool) -> Self {
        self.initial_value = value.into();
        self.initially_valid = is_valid;
        self
    }

    /// Set the text shown while the field is touched and invalid.
    pub fn error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = Some(text.into());
        self
    }

    /// Mark the field read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Runtime state of one field.
#[derive(Debug, Clone)]
pub struct Field {
    spec: FieldSpec,
    value: String,
    is_valid: bool,
    is_touched: bool,
}

impl Field {
    pub(crate) fn new(spec: FieldSpec) -> Self {
        Self {
            value: spec.initial_value.clone(),
            is_valid: spec.initially_valid,
            is_touched: false,
            spec,
        }
    }

    pub(crate) fn change(&mut self, value: String) {
        self.is_valid = validation::validate(&value, &self.spec.validators);
        self.value = value;
        self.is_touched = true;
    }

    pub(crate) fn load(&mut self, value: String, is_valid: bool) {
        self.value = value;
        self.is_valid = is_valid;
    }

    pub(crate) fn touch(&mut self) {
        self.is_touched = true;
    }

    pub(crate) fn revalidate(&mut self) {
        self.is_valid = validation::validate(&self.value, &self.spec.validators);
    }

    pub(crate) fn set_validators(&mut self, validators: Vec<ValidatorDescriptor>) {
        self.spec.validators = validators;
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn kind(&self) -> InputKind {
        self.spec.kind
    }

    pub fn is_read_only(&self) -> bool {
        self.spec.read_only
    }

    /// Current raw text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Result of the last validation pass.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_touched(&self) -> bool {
        self.is_touched
    }

    pub fn validators(&self) -> &[ValidatorDescriptor] {
        &self.spec.validators
    }

    /// The declared error text, only while the field is touched and invalid.
    pub fn error_text(&self) -> Option<&str> {
        if self.is_touched && !self.is_valid {
            self.spec.error_text.as_deref()
        } else {
            None
        }
    }
}
