//! Edit-details form state.
//!
//! Only the checks needed to produce a usable record live here: a name and
//! something that looks like an email address. Anything stricter belongs to
//! the data owner receiving the patch.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use thiserror::Error;

use crate::model::{Customer, CustomerPatch, CustomerStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("email address is invalid")]
    InvalidEmail,
}

/// Editable copy of a customer's fields, bound to the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub category: String,
    pub status: CustomerStatus,
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone_number: customer.phone_number.clone(),
            category: customer.category.clone().unwrap_or_default(),
            status: customer.status,
        }
    }
}

impl CustomerDraft {
    /// Turn the draft into a patch for customer `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the name is blank or the email has no `@`.
    pub fn submit(&self, id: &str) -> Result<CustomerPatch, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail);
        }
        let category = Some(self.category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned);

        Ok(CustomerPatch {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
            category,
            status: self.status,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
