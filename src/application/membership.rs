//! Membership manager
//!
//! Owns registered patrons. Status changes, contact updates and payments go
//! through here so they are reported to the event sink.

use std::sync::Arc;

use crate::domain::entities::Patron;
use crate::domain::ports::{emit, LibraryEvent, LibraryEventSink, NoopEventSink};
use crate::domain::value_objects::{AccountStatus, Money, PatronId};
use crate::error::{LibraryError, LibraryResult, RecordKind};

pub struct Membership {
    patrons: Vec<Patron>,
    events: Arc<dyn LibraryEventSink>,
}

impl Default for Membership {
    fn default() -> Self {
        Self::new()
    }
}

impl Membership {
    pub fn new() -> Self {
        Self {
            patrons: Vec::new(),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builder: report outcomes to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn LibraryEventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Register a patron. Rejected with `DuplicateKey` if the id is taken.
    pub fn register(&mut self, patron: Patron) -> LibraryResult<()> {
        if self.find_by_id(patron.id()).is_some() {
            let err = LibraryError::DuplicateKey {
                kind: RecordKind::Patron,
                key: patron.id().to_string(),
            };
            emit(
                self.events.as_ref(),
                LibraryEvent::PatronRejected {
                    id: patron.id().clone(),
                    reason: err.kind(),
                },
            );
            return Err(err);
        }

        emit(
            self.events.as_ref(),
            LibraryEvent::PatronRegistered {
                id: patron.id().clone(),
                name: patron.name().to_string(),
            },
        );
        self.patrons.push(patron);
        Ok(())
    }

    pub fn find_by_id(&self, id: &PatronId) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &PatronId) -> Option<&mut Patron> {
        self.patrons.iter_mut().find(|p| p.id() == id)
    }

    /// Every patron whose name contains `query`, ignoring case
    pub fn find_by_name(&self, query: &str) -> Vec<&Patron> {
        let needle = query.to_lowercase();
        self.patrons
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// All patrons in registration order
    pub fn list(&self) -> &[Patron] {
        &self.patrons
    }

    /// Remove and return the patron with `id`
    pub fn remove(&mut self, id: &PatronId) -> LibraryResult<Patron> {
        let position = self.patrons.iter().position(|p| p.id() == id);
        emit(
            self.events.as_ref(),
            LibraryEvent::PatronRemoved {
                id: id.clone(),
                removed: position.is_some(),
            },
        );

        match position {
            Some(index) => Ok(self.patrons.remove(index)),
            None => Err(LibraryError::patron_not_found(id)),
        }
    }

    pub fn suspend(&mut self, id: &PatronId) -> LibraryResult<()> {
        self.set_status(id, AccountStatus::Suspended)
    }

    pub fn activate(&mut self, id: &PatronId) -> LibraryResult<()> {
        self.set_status(id, AccountStatus::Active)
    }

    pub fn update_contact(
        &mut self,
        id: &PatronId,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> LibraryResult<()> {
        let patron = self
            .find_by_id_mut(id)
            .ok_or_else(|| LibraryError::patron_not_found(id))?;
        patron.set_email(email);
        patron.set_phone(phone);
        Ok(())
    }

    /// Apply a payment; returns the remaining balance
    pub fn pay_fine(&mut self, id: &PatronId, amount: Money) -> LibraryResult<Money> {
        let events = Arc::clone(&self.events);
        let patron = self
            .find_by_id_mut(id)
            .ok_or_else(|| LibraryError::patron_not_found(id))?;
        let remaining = patron.pay_fine(amount)?;

        emit(
            events.as_ref(),
            LibraryEvent::FinePaid {
                patron: id.clone(),
                amount,
                remaining,
            },
        );
        Ok(remaining)
    }

    pub fn count(&self) -> usize {
        self.patrons.len()
    }

    pub fn active_count(&self) -> usize {
        self.patrons.iter().filter(|p| p.is_active()).count()
    }

    /// Patrons with a positive fine balance
    pub fn with_outstanding_fines(&self) -> Vec<&Patron> {
        self.patrons
            .iter()
            .filter(|p| !p.fine_balance().is_zero())
            .collect()
    }

    fn set_status(&mut self, id: &PatronId, status: AccountStatus) -> LibraryResult<()> {
        let events = Arc::clone(&self.events);
        let patron = self
            .find_by_id_mut(id)
            .ok_or_else(|| LibraryError::patron_not_found(id))?;
        patron.set_status(status);

        emit(
            events.as_ref(),
            LibraryEvent::PatronStatusChanged {
                id: id.clone(),
                name: patron.name().to_string(),
                status,
            },
        );
        Ok(())
    }
}

impl std::fmt::Debug for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Membership")
            .field("patrons", &self.patrons)
            .finish()
    }
}
