//! In-memory working set of user records.
//!
//! [`Directory`] owns the full collection backing the Users view: records
//! ingested from the remote endpoint and the local seed set, plus anything
//! created through the editor. Ids for locally created records come from a
//! monotonic counter seeded past the largest ingested id, so a session can
//! never mint a colliding id. Nothing here persists; a reload starts over.

use crate::models::{Status, User};

/// The working set, newest locally created records first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    users: Vec<User>,
    next_id: u64,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a directory from already-identified records (seeds, remote
    /// intake). The id counter starts just past the largest existing id.
    pub fn from_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().map_or(1, |id| id + 1);
        Self { users, next_id }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Prepend a new record with a fresh id and status `Active`.
    /// Returns the assigned id.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.users.insert(
            0,
            User {
                id,
                name: name.into(),
                email: email.into(),
                city: city.into(),
                status: Status::Active,
            },
        );
        id
    }

    /// Replace name/email/city of the record with the given id, leaving every
    /// other field (notably status) untouched. Returns `false` when no record
    /// matches.
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = name.into();
                user.email = email.into();
                user.city = city.into();
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns `false` when no record
    /// matches.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, name: &str, status: Status) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            city: "Pune".to_string(),
            status,
        }
    }

    #[test]
    fn create_prepends_active_record() {
        let mut dir = Directory::new();
        let id = dir.create("Zed", "z@z.com", "Pune");

        assert_eq!(dir.len(), 1);
        let user = &dir.users()[0];
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Zed");
        assert_eq!(user.email, "z@z.com");
        assert_eq!(user.city, "Pune");
        assert_eq!(user.status, Status::Active);

        dir.create("Amy", "a@a.com", "Delhi");
        assert_eq!(dir.users()[0].name, "Amy");
        assert_eq!(dir.users()[1].name, "Zed");
    }

    #[test]
    fn ids_are_monotonic_and_skip_ingested_ids() {
        let mut dir = Directory::from_users(vec![
            sample(101, "Aarav", Status::Active),
            sample(3, "Ishaan", Status::Inactive),
        ]);

        let first = dir.create("Zed", "z@z.com", "Pune");
        let second = dir.create("Amy", "a@a.com", "Delhi");

        assert_eq!(first, 102);
        assert_eq!(second, 103);
    }

    #[test]
    fn update_preserves_status() {
        let mut dir = Directory::from_users(vec![sample(7, "Aarav", Status::Inactive)]);

        assert!(dir.update(7, "Aarav Sharma", "aarav@new.com", "Mumbai"));

        let user = &dir.users()[0];
        assert_eq!(user.name, "Aarav Sharma");
        assert_eq!(user.email, "aarav@new.com");
        assert_eq!(user.city, "Mumbai");
        assert_eq!(user.status, Status::Inactive);
    }

    #[test]
    fn update_unknown_id_is_reported() {
        let mut dir = Directory::from_users(vec![sample(7, "Aarav", Status::Active)]);
        assert!(!dir.update(99, "X", "x@x.com", "Y"));
        assert_eq!(dir.users()[0].name, "Aarav");
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let mut dir = Directory::from_users(vec![
            sample(1, "Aarav", Status::Active),
            sample(2, "Diya", Status::Inactive),
            sample(3, "Ishaan", Status::Active),
        ]);

        assert!(dir.remove(2));
        assert_eq!(dir.len(), 2);
        assert!(dir.users().iter().all(|u| u.id != 2));

        assert!(!dir.remove(2));
        assert_eq!(dir.len(), 2);
    }
}
