//! Car brand/model dataset.

use super::CarBrand;

const fn car(brand: &'static str, models: &'static [&'static str]) -> CarBrand {
    CarBrand { brand, models }
}

pub static CARS: &[CarBrand] = &[
    car("Toyota", &["Corolla", "Camry", "RAV4", "Prius", "Highlander", "Yaris"]),
    car("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Fit"]),
    car("Ford", &["F-150", "Focus", "Mustang", "Explorer", "Escape"]),
    car("Chevrolet", &["Silverado", "Malibu", "Equinox", "Tahoe", "Camaro"]),
    car("Volkswagen", &["Golf", "Passat", "Tiguan", "Polo", "Jetta"]),
    car("BMW", &["3 Series", "5 Series", "X3", "X5", "1 Series"]),
    car("Mercedes-Benz", &["C-Class", "E-Class", "GLC", "A-Class", "S-Class"]),
    car("Audi", &["A3", "A4", "A6", "Q5", "Q7"]),
    car("Nissan", &["Altima", "Sentra", "Rogue", "Leaf", "Pathfinder"]),
    car("Hyundai", &["Elantra", "Sonata", "Tucson", "Santa Fe", "Kona"]),
    car("Kia", &["Rio", "Optima", "Sportage", "Sorento", "Soul"]),
    car("Mazda", &["Mazda3", "Mazda6", "CX-5", "CX-9", "MX-5"]),
    car("Subaru", &["Impreza", "Outback", "Forester", "Crosstrek", "Legacy"]),
    car("Volvo", &["S60", "S90", "XC40", "XC60", "XC90"]),
    car("Peugeot", &["208", "308", "508", "2008", "3008"]),
    car("Renault", &["Clio", "Megane", "Captur", "Kadjar", "Twingo"]),
    car("Fiat", &["500", "Panda", "Tipo", "Punto"]),
    car("Skoda", &["Fabia", "Octavia", "Superb", "Kodiaq"]),
    car("Tesla", &["Model 3", "Model S", "Model X", "Model Y"]),
    car("Lexus", &["IS", "ES", "RX", "NX", "UX"]),
];
