//! Movie and series datasets.

pub static MOVIES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Forrest Gump",
    "Inception",
    "Fight Club",
    "The Matrix",
    "Goodfellas",
    "Interstellar",
    "The Silence of the Lambs",
    "Saving Private Ryan",
    "The Green Mile",
    "Gladiator",
    "The Prestige",
    "The Departed",
    "Whiplash",
    "The Lion King",
    "Back to the Future",
    "Alien",
    "Apocalypse Now",
    "Casablanca",
    "Citizen Kane",
    "Jurassic Park",
    "Titanic",
    "Avatar",
    "The Avengers",
    "Parasite",
    "Spirited Away",
    "Amelie",
];

pub static SERIES: &[&str] = &[
    "Breaking Bad",
    "Game of Thrones",
    "The Wire",
    "The Sopranos",
    "Stranger Things",
    "The Crown",
    "Chernobyl",
    "Band of Brothers",
    "True Detective",
    "Fargo",
    "Better Call Saul",
    "The Office",
    "Friends",
    "Seinfeld",
    "Sherlock",
    "Black Mirror",
    "Westworld",
    "The Mandalorian",
    "Dark",
    "Money Heist",
    "Narcos",
    "Peaky Blinders",
    "The Witcher",
    "House of Cards",
    "Lost",
    "Twin Peaks",
    "Mad Men",
    "The Expanse",
    "Succession",
    "Ted Lasso",
];
