//! Currency, card, bank and IBAN datasets for financial fields.

use super::{CardType, Currency, IbanFormat};

const fn cur(currency: &'static str, code: &'static str) -> Currency {
    Currency { currency, code }
}

pub static CURRENCIES: &[Currency] = &[
    cur("US Dollar", "USD"),
    cur("Euro", "EUR"),
    cur("Japanese Yen", "JPY"),
    cur("Pound Sterling", "GBP"),
    cur("Australian Dollar", "AUD"),
    cur("Canadian Dollar", "CAD"),
    cur("Swiss Franc", "CHF"),
    cur("Chinese Yuan", "CNY"),
    cur("Swedish Krona", "SEK"),
    cur("New Zealand Dollar", "NZD"),
    cur("Mexican Peso", "MXN"),
    cur("Singapore Dollar", "SGD"),
    cur("Hong Kong Dollar", "HKD"),
    cur("Norwegian Krone", "NOK"),
    cur("South Korean Won", "KRW"),
    cur("Turkish Lira", "TRY"),
    cur("Russian Ruble", "RUB"),
    cur("Indian Rupee", "INR"),
    cur("Brazilian Real", "BRL"),
    cur("South African Rand", "ZAR"),
    cur("Danish Krone", "DKK"),
    cur("Polish Zloty", "PLN"),
    cur("Thai Baht", "THB"),
    cur("Indonesian Rupiah", "IDR"),
    cur("Hungarian Forint", "HUF"),
    cur("Czech Koruna", "CZK"),
    cur("Israeli New Shekel", "ILS"),
    cur("Chilean Peso", "CLP"),
    cur("Philippine Peso", "PHP"),
    cur("United Arab Emirates Dirham", "AED"),
    cur("Saudi Riyal", "SAR"),
    cur("Malaysian Ringgit", "MYR"),
];

/// Card number masks per brand; `X` marks a digit slot.
pub static CARD_TYPES: &[CardType] = &[
    CardType {
        brand: "Visa",
        patterns: &["4XXX XXXX XXXX XXXX"],
    },
    CardType {
        brand: "Mastercard",
        patterns: &["51XX XXXX XXXX XXXX", "52XX XXXX XXXX XXXX", "53XX XXXX XXXX XXXX"],
    },
    CardType {
        brand: "American Express",
        patterns: &["34XX XXXXXX XXXXX", "37XX XXXXXX XXXXX"],
    },
    CardType {
        brand: "Discover",
        patterns: &["6011 XXXX XXXX XXXX", "65XX XXXX XXXX XXXX"],
    },
    CardType {
        brand: "Diners Club",
        patterns: &["36XX XXXXXX XXXX", "38XX XXXXXX XXXX"],
    },
    CardType {
        brand: "JCB",
        patterns: &["35XX XXXX XXXX XXXX"],
    },
];

const fn iban(country_code: &'static str, length: usize) -> IbanFormat {
    IbanFormat {
        country_code,
        length,
    }
}

/// Total IBAN lengths per country, including the two-letter prefix.
pub static IBAN_FORMATS: &[IbanFormat] = &[
    iban("DE", 22),
    iban("FR", 27),
    iban("GB", 22),
    iban("ES", 24),
    iban("IT", 27),
    iban("NL", 18),
    iban("BE", 16),
    iban("AT", 20),
    iban("CH", 21),
    iban("PL", 28),
    iban("PT", 25),
    iban("SE", 24),
    iban("NO", 15),
    iban("DK", 18),
    iban("FI", 18),
    iban("IE", 22),
];

pub static BANKS: &[&str] = &[
    "JPMorgan Chase",
    "Bank of America",
    "Wells Fargo",
    "Citibank",
    "Goldman Sachs",
    "Morgan Stanley",
    "HSBC",
    "Barclays",
    "BNP Paribas",
    "Deutsche Bank",
    "UBS",
    "Credit Suisse",
    "Santander",
    "ING Group",
    "UniCredit",
    "Societe Generale",
    "Standard Chartered",
    "Royal Bank of Canada",
    "Toronto-Dominion Bank",
    "Mitsubishi UFJ",
];
