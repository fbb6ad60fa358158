//! In-memory customer collection.
//!
//! Used by `CustomersPage` as the receiver of the card callbacks. Applying a
//! status update mirrors what a data owner does with it: set the status,
//! append the note to the log and stamp the contact time.

#[cfg(test)]
#[path = "customer_book_test.rs"]
mod customer_book_test;

use time::OffsetDateTime;

use crate::error::Error;
use crate::model::{Customer, CustomerPatch, CustomerStatus, StatusUpdate};
use crate::util::notes::append_note;

/// Customers in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerBook {
    customers: Vec<Customer>,
}

impl CustomerBook {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn count_by_status(&self, status: CustomerStatus) -> usize {
        self.customers.iter().filter(|c| c.status == status).count()
    }

    /// Apply a card status update at time `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCustomer`] when no customer has the update's id.
    pub fn apply_status_update(&mut self, update: &StatusUpdate, now: OffsetDateTime) -> Result<&Customer, Error> {
        let customer = self.get_mut(&update.customer_id)?;
        customer.status = update.status;
        if let Some(note) = &update.note {
            customer.notes = Some(append_note(customer.notes.as_deref(), note));
        }
        customer.last_contacted = Some(now);
        Ok(&*customer)
    }

    /// Apply an edit-details patch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCustomer`] when no customer has the patch's id.
    pub fn apply_patch(&mut self, patch: CustomerPatch) -> Result<&Customer, Error> {
        let customer = self.get_mut(&patch.id)?;
        customer.name = patch.name;
        customer.email = patch.email;
        customer.phone_number = patch.phone_number;
        customer.category = patch.category;
        customer.status = patch.status;
        Ok(&*customer)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Customer, Error> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::UnknownCustomer(id.to_owned()))
    }
}
