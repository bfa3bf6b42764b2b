//! Schema check run on every submission before anything is persisted.

use serde_json::{Map, Value};
use validator::Validate;

use feedback_core::error::{AppError, FieldErrors};
use feedback_entity::NewFeedback;

/// Typed view of a submission, checked by `validator`.
#[derive(Debug, Default, Validate)]
struct Submission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    name: String,
    #[validate(range(min = 1, max = 5))]
    rating: i64,
    #[validate(length(min = 10, message = "Comment must be at least 10 characters long"))]
    comment: String,
}

/// Turns an untyped JSON body into a [`NewFeedback`] or a field-level
/// validation error.
///
/// Lengths count Unicode scalar values. `rating` must be an integral
/// number; `4.0` is coerced to `4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGate;

impl ValidationGate {
    /// Creates the gate.
    pub fn new() -> Self {
        Self
    }

    /// Validates `input`, reporting every offending field at once.
    pub fn validate(&self, input: &Value) -> Result<NewFeedback, AppError> {
        let Some(object) = input.as_object() else {
            let mut fields = FieldErrors::new();
            push(&mut fields, "body", "Request body must be a JSON object");
            return Err(AppError::validation_fields("Validation failed", fields));
        };

        let mut fields = FieldErrors::new();
        let mut submission = Submission::default();

        match string_field(object, "name", "Name") {
            Ok(name) => submission.name = name,
            Err(message) => push(&mut fields, "name", message),
        }
        match rating_field(object) {
            Ok(rating) => submission.rating = rating,
            Err(message) => push(&mut fields, "rating", message),
        }
        match string_field(object, "comment", "Comment") {
            Ok(comment) => submission.comment = comment,
            Err(message) => push(&mut fields, "comment", message),
        }

        if let Err(errors) = submission.validate() {
            for (field, field_errors) in errors.field_errors() {
                let field = field.to_string();
                // Type errors already explain what is wrong with this field.
                if fields.contains_key(&field) {
                    continue;
                }
                for error in field_errors.iter() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe(&field, &submission));
                    push(&mut fields, &field, message);
                }
            }
        }

        if !fields.is_empty() {
            return Err(AppError::validation_fields("Validation failed", fields));
        }

        let rating = u8::try_from(submission.rating)
            .map_err(|_| AppError::internal("Validated rating does not fit in u8"))?;

        Ok(NewFeedback {
            name: submission.name,
            rating,
            comment: submission.comment,
        })
    }
}

fn push(fields: &mut FieldErrors, field: &str, message: impl Into<String>) {
    fields
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

fn string_field(object: &Map<String, Value>, key: &str, label: &str) -> Result<String, String> {
    match object.get(key) {
        None | Some(Value::Null) => Err(format!("{label} is required")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(format!("{label} must be a string")),
    }
}

fn rating_field(object: &Map<String, Value>) -> Result<i64, String> {
    let number = match object.get("rating") {
        None | Some(Value::Null) => return Err("Rating is required".to_string()),
        Some(Value::Number(n)) => n,
        Some(_) => return Err("Rating must be a number".to_string()),
    };

    if let Some(rating) = number.as_i64() {
        return Ok(rating);
    }
    match number.as_f64() {
        // Saturating cast: out-of-range values still fail the range check.
        Some(f) if f.fract() == 0.0 => Ok(f as i64),
        _ => Err("Rating must be a whole number".to_string()),
    }
}

/// Message for validator failures that carry none of their own.
fn describe(field: &str, submission: &Submission) -> String {
    match field {
        "rating" if submission.rating < 1 => "Rating must be at least 1".to_string(),
        "rating" => "Rating cannot exceed 5".to_string(),
        other => format!("{other} is invalid"),
    }
}
