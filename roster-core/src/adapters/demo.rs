//! Demo user source
//!
//! Generates a roster of plausible people:
//! - ids 1..=count in display order
//! - "First Last" names and "Name Suffix" companies drawn from fixed pools
//! - photos assigned round-robin from a shuffled pool of portrait URLs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::{User, UserId};
use crate::ports::UserSource;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Boris", "Camila", "Dmitri", "Elena", "Farid", "Greta", "Hiro", "Ines", "Jonas",
    "Katya", "Liam", "Mira", "Nikolai", "Olga", "Pavel", "Quinn", "Rosa", "Sergei", "Tamara",
    "Umar", "Vera", "Walter", "Xenia", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anders", "Baker", "Chen", "Dubois", "Eriksen", "Fischer", "Garcia", "Hoffman", "Ivanova",
    "Jensen", "Kowalski", "Lopez", "Morozov", "Nakamura", "Okafor", "Petrov", "Rossi", "Schmidt",
    "Tanaka", "Volkova", "Weber", "Yilmaz",
];

const COMPANY_NAMES: &[&str] = &[
    "Acme", "Blue Harbor", "Cobalt", "Driftwood", "Evergreen", "Foxglove", "Granite", "Helix",
    "Ironbark", "Juniper", "Keystone", "Lumen", "Meridian", "Northwind", "Orbit", "Pinnacle",
    "Quarry", "Redwood", "Summit", "Tidewater",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Labs", "Partners"];

/// Portrait pool, assigned as `pool[id % pool.len()]` after shuffling
pub const PHOTO_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1600267185393-e158a98703de?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0NjQ0&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1579710039144-85d6bdffddc9?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0Njk1&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1488426862026-3ee34a7d66df?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0ODE0&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1620252655460-080dbec533ca?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0NzQ1&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1613679074971-91fc27180061?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0NzUz&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1485795959911-ea5ebf41b6ae?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0NzU4&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1545996124-0501ebae84d0?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0NzY1&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/flagged/photo-1568225061049-70fb3006b5be?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0Nzcy&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1567186937675-a5131c8a89ea?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0ODYx&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
    "https://images.unsplash.com/photo-1546456073-92b9f0a8d413?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&ixid=MnwxfDB8MXxyYW5kb218fHx8fHx8fHwxNjI0MDE0ODY1&ixlib=rb-1.2.1&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=800",
];

/// Mock data generator backed by `rand`
///
/// With a seed the roster is reproducible; without one every run differs.
#[derive(Debug, Clone, Default)]
pub struct DemoUserSource {
    seed: Option<u64>,
}

impl DemoUserSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl UserSource for DemoUserSource {
    fn generate(&self, count: usize) -> Vec<User> {
        let mut rng = self.rng();

        let mut photos = PHOTO_POOL.to_vec();
        photos.shuffle(&mut rng);

        (1..=count)
            .map(|n| {
                let id = n as UserId;
                User {
                    id,
                    name: format!("{} {}", pick(FIRST_NAMES, &mut rng), pick(LAST_NAMES, &mut rng)),
                    company: format!(
                        "{} {}",
                        pick(COMPANY_NAMES, &mut rng),
                        pick(COMPANY_SUFFIXES, &mut rng)
                    ),
                    photo: photos[n % photos.len()].to_string(),
                }
            })
            .collect()
    }
}

fn pick<'a>(pool: &[&'a str], rng: &mut StdRng) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let users = DemoUserSource::new(Some(1)).generate(100);
        assert_eq!(users.len(), 100);
        let ids: Vec<UserId> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<UserId>>());
    }

    #[test]
    fn test_everyone_is_employed_with_a_photo() {
        for user in DemoUserSource::new(Some(2)).generate(30) {
            assert!(user.is_employed());
            assert!(PHOTO_POOL.contains(&user.photo.as_str()));
            assert!(user.name.contains(' '));
        }
    }

    #[test]
    fn test_photos_cycle_through_pool() {
        let users = DemoUserSource::new(Some(3)).generate(PHOTO_POOL.len());
        let distinct: HashSet<&str> = users.iter().map(|u| u.photo.as_str()).collect();
        assert_eq!(distinct.len(), PHOTO_POOL.len());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = DemoUserSource::new(Some(42)).generate(20);
        let b = DemoUserSource::new(Some(42)).generate(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        assert!(DemoUserSource::default().generate(0).is_empty());
    }
}
