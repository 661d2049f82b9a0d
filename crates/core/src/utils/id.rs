//! Goal identifier generation.

use rand::{Rng, RngCore};

use crate::constants::GOAL_ID_LENGTH;

/// Builds a short random id: 16 random bytes, each written in base 36,
/// concatenated and cut to [`GOAL_ID_LENGTH`] characters.
pub fn random_goal_id<R: RngCore>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let mut id: String = bytes.iter().map(|b| to_base36(*b)).collect();
    // 16 bytes can encode to fewer than 16 characters when most are < 36.
    while id.len() < GOAL_ID_LENGTH {
        id.push_str(&to_base36(rng.gen()));
    }
    id.truncate(GOAL_ID_LENGTH);
    id
}

/// Generates an id that `is_taken` rejects for none of the existing goals.
pub fn unique_goal_id<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut rng = rand::thread_rng();
    loop {
        let id = random_goal_id(&mut rng);
        if !is_taken(&id) {
            return id;
        }
        log::warn!("Generated goal id {} collides with an existing goal, retrying", id);
    }
}

fn to_base36(mut value: u8) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(2);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}
