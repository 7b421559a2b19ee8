//! Sentence and word datasets plus the character alphabets.

pub static SENTENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "A journey of a thousand miles begins with a single step.",
    "All that glitters is not gold.",
    "Actions speak louder than words.",
    "The early bird catches the worm.",
    "Practice makes perfect.",
    "Better late than never.",
    "Every cloud has a silver lining.",
    "Fortune favors the bold.",
    "Honesty is the best policy.",
    "Knowledge is power.",
    "Rome was not built in a day.",
    "Still waters run deep.",
    "The pen is mightier than the sword.",
    "Time heals all wounds.",
    "Two heads are better than one.",
    "When in Rome, do as the Romans do.",
    "You cannot judge a book by its cover.",
];

pub static WORDS: &[&str] = &[
    "apple", "breeze", "candle", "dawn", "ember", "forest", "garden", "harbor", "island",
    "jungle", "kettle", "lantern", "meadow", "nectar", "ocean", "pebble", "quill", "river",
    "shadow", "thunder", "umbrella", "valley", "willow", "zephyr", "anchor", "blossom", "canyon",
    "drift", "eagle", "feather", "glacier", "horizon", "ivory", "jasmine", "kingdom", "lagoon",
    "marble", "nimbus", "orchard", "prairie", "quartz", "ripple", "summit", "timber", "velvet",
    "whisper", "yonder", "zenith",
];

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static MIXED_CASE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static DIGITS: &str = "0123456789";
pub static ALNUM_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
pub static ALNUM_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub static ALNUM_MIXED_CASE: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
