use rand::Rng;

/// Shown after a correct answer.
const CORRECT_MESSAGES: [&str; 10] = [
    "Super gemacht! 🫶",
    "Weiter so! 😁",
    "Du schaffst das! 🎯",
    "Klasse Leistung! 🏆",
    "Fantastisch! ❤️",
    "Prima! 🥰",
    "Ausgezeichnet! 😎",
    "Toll gemacht! 🤗",
    "Du bist spitze! ⚽",
    "Sei stolz auf dich! 🥹",
];

/// Shown after an incorrect answer to keep the user going.
const INCORRECT_MESSAGES: [&str; 10] = [
    "Bleib stark! 💪",
    "Glaube an dich! ✨",
    "Du schaffst das! 🎉",
    "Gib nicht auf! 🚀",
    "Jeder Schritt zählt! 👣",
    "Kopf hoch! 😊",
    "Mach weiter! ➡️",
    "Sei mutig! 🦁",
    "Deine Zeit kommt! ⏳",
    "Wachse über dich hinaus! 🌱",
];

/// Picks one message uniformly at random from the pool matching the result.
pub fn random_motivational_message<R: Rng + ?Sized>(rng: &mut R, correct: bool) -> &'static str {
    let pool: &[&'static str] = if correct { &CORRECT_MESSAGES } else { &INCORRECT_MESSAGES };
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_message_comes_from_matching_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(CORRECT_MESSAGES.contains(&random_motivational_message(&mut rng, true)));
            assert!(INCORRECT_MESSAGES.contains(&random_motivational_message(&mut rng, false)));
        }
    }

    #[test]
    fn test_seeded_pick_is_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                random_motivational_message(&mut a, true),
                random_motivational_message(&mut b, true)
            );
        }
    }
}
