use crate::error::{UncError, UncResult};
use std::fmt;

/// Identity fields a username is derived from.
///
/// Fields are kept verbatim: no trimming, no case folding. Two inputs that
/// differ only in whitespace derive different usernames.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityInput {
    first_name: String,
    last_name: String,
    date_of_birth: String,
    salt: String,
}

impl IdentityInput {
    pub fn new(first_name: &str, last_name: &str, date_of_birth: &str, salt: Option<&str>) -> UncResult<Self> {
        Self::validate_field("first name", first_name)?;
        Self::validate_field("last name", last_name)?;
        Self::validate_field("date of birth", date_of_birth)?;

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: date_of_birth.to_string(),
            salt: salt.unwrap_or_default().to_string(),
        })
    }

    fn validate_field(field: &'static str, value: &str) -> UncResult<()> {
        if value.is_empty() {
            return Err(UncError::InvalidInput { field });
        }
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn has_salt(&self) -> bool {
        !self.salt.is_empty()
    }

    /// Input of the first hash stage: all fields joined without separators.
    pub fn preimage(&self) -> String {
        let mut s = String::with_capacity(
            self.first_name.len() + self.last_name.len() + self.date_of_birth.len() + self.salt.len(),
        );
        s.push_str(&self.first_name);
        s.push_str(&self.last_name);
        s.push_str(&self.date_of_birth);
        s.push_str(&self.salt);
        s
    }

    /// The readable part of the username.
    pub fn plain_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for IdentityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("salt", &if self.has_salt() { "<redacted>" } else { "" })
            .finish()
    }
}
