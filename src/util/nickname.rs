//! Random nickname generation for first-time logins.

use rand::seq::IndexedRandom;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "sunny", "mellow", "quiet", "breezy", "cozy", "dreamy", "gentle", "lively", "misty", "rosy",
    "sleepy", "velvet",
];

const ANIMALS: &[&str] = &[
    "otter", "finch", "panda", "koala", "heron", "tabby", "bunny", "fawn", "robin", "seal",
    "lynx", "dove",
];

/// Generates a random `adjective-animalNN` nickname.
///
/// The worst case (`velvet-heron99`) is exactly 14 characters, the profile
/// nickname cap. The numeric suffix keeps collisions rare; callers still
/// check availability and retry, since uniqueness is only enforced by the
/// database index.
pub fn generate() -> String {
    let mut rng = rand::rng();

    let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"sunny");
    let animal = ANIMALS.choose(&mut rng).unwrap_or(&"otter");
    let suffix: u8 = rng.random_range(0..100);

    format!("{}-{}{:02}", adjective, animal, suffix)
}
