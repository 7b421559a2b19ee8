//! Username, website and domain datasets for IT fields.

pub static USERNAMES: &[&str] = &[
    "shadow", "falcon", "pixel", "nova", "echo", "raven", "blaze", "frost", "viper", "storm",
    "zephyr", "comet", "ember", "drift", "quartz", "onyx", "cipher", "vertex", "rogue", "atlas",
    "orbit", "pulse", "raptor", "spark", "titan", "vortex", "wisp", "zenith", "lumen", "nimbus",
];

pub static WEBSITES: &[&str] = &[
    "https://www.google.com",
    "https://www.youtube.com",
    "https://www.facebook.com",
    "https://www.wikipedia.org",
    "https://www.instagram.com",
    "https://www.reddit.com",
    "https://www.amazon.com",
    "https://www.twitter.com",
    "https://www.netflix.com",
    "https://www.linkedin.com",
    "https://www.ebay.com",
    "https://www.apple.com",
    "https://www.github.com",
    "https://www.stackoverflow.com",
    "https://www.microsoft.com",
    "https://www.spotify.com",
    "https://www.twitch.tv",
    "https://www.bbc.com",
    "https://www.cnn.com",
    "https://www.nytimes.com",
];

pub static TOP_LEVEL_DOMAINS: &[&str] = &["com", "org", "net", "gov", "edu", "mil"];
