//! Animal and plant datasets.

pub static ANIMALS: &[&str] = &[
    "Lion", "Tiger", "Elephant", "Giraffe", "Zebra", "Kangaroo", "Panda", "Koala", "Wolf",
    "Fox", "Bear", "Deer", "Rabbit", "Squirrel", "Hedgehog", "Otter", "Beaver", "Raccoon",
    "Leopard", "Cheetah", "Hippopotamus", "Rhinoceros", "Crocodile", "Penguin", "Dolphin",
    "Whale", "Octopus", "Eagle", "Falcon", "Owl", "Flamingo", "Peacock", "Parrot", "Swan",
    "Turtle", "Chameleon", "Armadillo", "Sloth", "Lynx", "Moose",
];

pub static PLANTS: &[&str] = &[
    "Rose", "Tulip", "Sunflower", "Daisy", "Orchid", "Lily", "Lavender", "Daffodil", "Peony",
    "Marigold", "Fern", "Bamboo", "Cactus", "Aloe Vera", "Ivy", "Moss", "Oak", "Maple", "Birch",
    "Willow", "Pine", "Cedar", "Sequoia", "Magnolia", "Cherry Blossom", "Eucalyptus", "Basil",
    "Mint", "Rosemary", "Thyme",
];
