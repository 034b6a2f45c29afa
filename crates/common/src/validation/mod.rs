// Validation Module - field-level validation that collects every failure
use std::fmt;

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error with code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Check whether any error carries `code`
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code.as_deref() == Some(code))
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None }
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Validation context for tracking the path of nested fields
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    pub path: Vec<String>,
    pub stop_on_first: bool,
}

impl ValidationContext {
    /// Create a new validation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop on first error
    pub fn stop_on_first_error(mut self) -> Self {
        self.stop_on_first = true;
        self
    }

    /// Add path segment for nested validation
    pub fn push_path(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// Remove last path segment
    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    /// Get current path as string
    pub fn current_path(&self) -> String {
        self.path.join(".")
    }
}

/// Collects field errors while walking a structure
///
/// ```
/// use drako_common::validation::Validator;
///
/// let mut validator = Validator::new();
/// validator.validate_nested("items[0]", |v| {
///     v.validate_not_empty("label", "");
///     v.validate_min("min_quantity", 0, 1);
/// });
/// let err = validator.finalize().unwrap_err();
/// assert_eq!(err.error_count(), 2);
/// assert_eq!(err.errors[0].field, "items[0].label");
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    context: ValidationContext,
    stopped: bool,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with context
    pub fn with_context(context: ValidationContext) -> Self {
        Self { errors: ValidationError::new(), context, stopped: false }
    }

    fn should_short_circuit(&self) -> bool {
        self.context.stop_on_first && self.stopped
    }

    fn qualify(&self, field: impl Into<String>) -> String {
        if self.context.path.is_empty() {
            field.into()
        } else {
            format!("{}.{}", self.context.current_path(), field.into())
        }
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        if self.should_short_circuit() {
            return;
        }
        let field = self.qualify(field);
        self.errors.add_field_error(field, message);
        self.stopped = self.context.stop_on_first;
    }

    /// Add an error with a machine-readable code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        if self.should_short_circuit() {
            return;
        }
        let field = self.qualify(field);
        self.errors.add_error_with_code(field, message, code);
        self.stopped = self.context.stop_on_first;
    }

    /// Validate minimum value
    pub fn validate_min<T>(&mut self, field: &str, value: T, min: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value < min {
            self.add_error(field, format!("must be at least {}", min));
        }
    }

    /// Validate string is not empty
    pub fn validate_not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
    }

    /// Validate that every value belongs to `known`
    pub fn validate_known<'a, I>(&mut self, field: &str, values: I, known: &[&str])
    where
        I: IntoIterator<Item = &'a str>,
    {
        for value in values {
            if !known.contains(&value) {
                self.add_error_with_code(field, format!("unknown value '{}'", value), "unknown");
            }
        }
    }

    /// Validate with nested context
    pub fn validate_nested<F>(&mut self, field: &str, f: F)
    where
        F: FnOnce(&mut Validator),
    {
        if self.should_short_circuit() {
            return;
        }

        self.context.push_path(field);
        f(self);
        self.context.pop_path();
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Get errors without consuming validator
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }
}
