//! Greeting text: wish selection and the spoken letter.

/// SplitMix64 finalizer, spreads clock-based seeds across the list
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic pick of one wish for `seed`. `None` for an empty list.
pub fn pick<T>(seed: u64, list: &[T]) -> Option<&T> {
    if list.is_empty() {
        return None;
    }
    let index = (mix(seed) % list.len() as u64) as usize;
    list.get(index)
}

/// The letter read out by the voice message and shown on the wish card.
pub fn compose_voice_message(name: &str, wish: &str) -> String {
    format!(
        "Dear {name},\n\n\
         Wishing you the happiest of birthdays! Your energy, kindness, and amazing spirit make every moment brighter.\n\n\
         I hope today brings you joy, laughter, and all the wonderful things you truly deserve. Here's to many more great moments ahead!\n\n\
         {wish}\n\n\
         Wishing you a day filled with joy, laughter, cake, and unforgettable moments that become cherished memories! \
         May your heart be full of happiness and your day be as sweet as you are!",
        name = name,
        wish = wish.trim(),
    )
}
