//! Local seed records for the Users view.
//!
//! The directory starts from this fixture list so the console is usable even
//! when the demo endpoint is unreachable. Seed ids start at 101 to stay clear
//! of the endpoint's small numeric ids.

use crate::models::{Status, User};

fn seed(id: u64, name: &str, email: &str, city: &str, status: Status) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        city: city.to_string(),
        status,
    }
}

/// The built-in records prepended ahead of the remote intake.
pub fn seed_users() -> Vec<User> {
    vec![
        seed(101, "Aarav Sharma", "aarav.sharma@example.com", "Pune", Status::Active),
        seed(102, "Diya Patel", "diya.patel@example.com", "Ahmedabad", Status::Inactive),
        seed(103, "Ishaan Verma", "ishaan.verma@example.com", "Delhi", Status::Active),
        seed(104, "Ananya Iyer", "ananya.iyer@example.com", "Chennai", Status::Active),
        seed(105, "Rohan Mehta", "rohan.mehta@example.com", "Mumbai", Status::Inactive),
        seed(106, "Priya Nair", "priya.nair@example.com", "Kochi", Status::Active),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_above_the_remote_range() {
        let seeds = seed_users();
        let mut ids: Vec<u64> = seeds.iter().map(|u| u.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seeds.len());
        assert!(ids.iter().all(|&id| id > 100));
    }
}
