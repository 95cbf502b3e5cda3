//! Word list for passphrases.

pub const WORD_LIST: &[&str] = &[
    "apple", "banana", "cherry", "dolphin", "elephant", "forest", "guitar", "horizon",
    "island", "jungle", "knight", "lighthouse", "mountain", "nature", "ocean", "piano",
    "quantum", "rainbow", "sunset", "tiger", "universe", "volcano", "waterfall", "xylophone",
    "yacht", "zebra", "adventure", "butterfly", "crystal", "dragon", "eclipse", "firefly",
    "galaxy", "harmony", "infinity", "journey", "kingdom", "legend", "mystery", "nebula",
    "oracle", "phoenix", "quest", "river", "serenity", "thunder", "utopia", "vortex",
    "whisper", "zenith", "aurora", "blossom", "cascade", "destiny", "eternity", "freedom",
];

pub fn contains(word: &str) -> bool {
    WORD_LIST.contains(&word)
}
