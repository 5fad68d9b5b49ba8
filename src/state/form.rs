//! New-project form state and input validation.
//!
//! DESIGN
//! ======
//! Raw field text lives in `ProjectInput` exactly as typed. Submitting runs
//! every field through a `Validatable` rule set; only when all of them pass
//! is the project added to the store and the form cleared. A rejected
//! submission leaves both the form and the store untouched.
//!
//! ERROR HANDLING
//! ==============
//! `InputError` names the first failing field so it can be logged. Users only
//! ever see [`REJECTION_MESSAGE`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::project::ProjectId;
use super::store::ProjectStore;

/// Message shown to the user for any rejected submission.
pub const REJECTION_MESSAGE: &str = "Wrong input, try again";

pub const DESCRIPTION_MIN_LEN: usize = 8;
pub const DESCRIPTION_MAX_LEN: usize = 99;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("title is required")]
    Title,
    #[error("description must be {} to {} characters", DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN)]
    Description,
    #[error("people must be a whole number from {} to {}", PEOPLE_MIN, PEOPLE_MAX)]
    People,
}

/// A field value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// A value plus the rules it must satisfy.
///
/// Length rules apply only to text, range rules only to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validatable<'a> {
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    #[must_use]
    pub fn text(value: &'a str) -> Self {
        Self::with_value(FieldValue::Text(value))
    }

    #[must_use]
    pub fn number(value: i64) -> Self {
        Self::with_value(FieldValue::Number(value))
    }

    fn with_value(value: FieldValue<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Inclusive character-count bounds.
    #[must_use]
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    /// Inclusive numeric bounds.
    #[must_use]
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.value {
            FieldValue::Text(text) => {
                let len = text.chars().count();
                !(self.required && text.trim().is_empty())
                    && self.min_length.is_none_or(|min| len >= min)
                    && self.max_length.is_none_or(|max| len <= max)
            }
            // A number is always present; only the range applies.
            FieldValue::Number(n) => {
                self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
            }
        }
    }
}

/// Validated values ready for `ProjectStore::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Raw text of the new-project form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectInput {
    /// Validate all fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails, checked in form order.
    pub fn gather(&self) -> Result<NewProject, InputError> {
        if !Validatable::text(&self.title).required().is_valid() {
            return Err(InputError::Title);
        }

        let description_ok = Validatable::text(&self.description)
            .required()
            .length(DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN)
            .is_valid();
        if !description_ok {
            return Err(InputError::Description);
        }

        let people = self.people.trim().parse::<i64>().map_err(|_| InputError::People)?;
        if !Validatable::number(people).required().range(PEOPLE_MIN, PEOPLE_MAX).is_valid() {
            return Err(InputError::People);
        }
        let people = u32::try_from(people).map_err(|_| InputError::People)?;

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate, add the project to `store`, then clear the form.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the form and the store are unchanged.
    pub fn submit(&mut self, store: &ProjectStore) -> Result<ProjectId, InputError> {
        let project = self.gather()?;
        let id = store.add(project.title, project.description, project.people);
        self.clear();
        Ok(id)
    }
}

/// Log a submission result and hand the rejection message to `notify`.
///
/// Returns the new project's id when the submission was accepted.
pub fn report_submission<F>(result: Result<ProjectId, InputError>, notify: F) -> Option<ProjectId>
where
    F: FnOnce(&str),
{
    match result {
        Ok(id) => {
            log::debug!("project submitted: {id}");
            Some(id)
        }
        Err(err) => {
            log::warn!("project rejected: {err}");
            notify(REJECTION_MESSAGE);
            None
        }
    }
}
