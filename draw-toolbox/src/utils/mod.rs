pub mod csv;
pub mod serde;

use lottery_lib::Seed;
use rand::Rng;

/// Parse a hex encoded seed, with or without a leading `0x`.
pub fn parse_seed(seed_hex: &str) -> Result<Seed, hex::FromHexError> {
    let mut seed = Seed::default();
    hex::decode_to_slice(seed_hex.trim().trim_start_matches("0x"), &mut seed)?;
    Ok(seed)
}

pub fn random_seed() -> Seed {
    rand::thread_rng().gen()
}
