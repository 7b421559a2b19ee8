//! World cities and timezone datasets.

use super::City;

const fn c(
    city: &'static str,
    country: &'static str,
    iso_code_2: &'static str,
    iso_code_3: &'static str,
) -> City {
    City {
        city,
        country,
        iso_code_2,
        iso_code_3,
    }
}

pub static CITIES: &[City] = &[
    c("Tokyo", "Japan", "JP", "JPN"),
    c("Osaka", "Japan", "JP", "JPN"),
    c("Delhi", "India", "IN", "IND"),
    c("Mumbai", "India", "IN", "IND"),
    c("Shanghai", "China", "CN", "CHN"),
    c("Beijing", "China", "CN", "CHN"),
    c("Sao Paulo", "Brazil", "BR", "BRA"),
    c("Rio de Janeiro", "Brazil", "BR", "BRA"),
    c("Mexico City", "Mexico", "MX", "MEX"),
    c("Guadalajara", "Mexico", "MX", "MEX"),
    c("Cairo", "Egypt", "EG", "EGY"),
    c("Alexandria", "Egypt", "EG", "EGY"),
    c("New York", "United States", "US", "USA"),
    c("Los Angeles", "United States", "US", "USA"),
    c("Chicago", "United States", "US", "USA"),
    c("Houston", "United States", "US", "USA"),
    c("Buenos Aires", "Argentina", "AR", "ARG"),
    c("Cordoba", "Argentina", "AR", "ARG"),
    c("Istanbul", "Turkey", "TR", "TUR"),
    c("Ankara", "Turkey", "TR", "TUR"),
    c("Karachi", "Pakistan", "PK", "PAK"),
    c("Lahore", "Pakistan", "PK", "PAK"),
    c("Manila", "Philippines", "PH", "PHL"),
    c("Lagos", "Nigeria", "NG", "NGA"),
    c("Moscow", "Russia", "RU", "RUS"),
    c("Saint Petersburg", "Russia", "RU", "RUS"),
    c("Paris", "France", "FR", "FRA"),
    c("Lyon", "France", "FR", "FRA"),
    c("Marseille", "France", "FR", "FRA"),
    c("London", "United Kingdom", "GB", "GBR"),
    c("Manchester", "United Kingdom", "GB", "GBR"),
    c("Birmingham", "United Kingdom", "GB", "GBR"),
    c("Berlin", "Germany", "DE", "DEU"),
    c("Munich", "Germany", "DE", "DEU"),
    c("Hamburg", "Germany", "DE", "DEU"),
    c("Madrid", "Spain", "ES", "ESP"),
    c("Barcelona", "Spain", "ES", "ESP"),
    c("Rome", "Italy", "IT", "ITA"),
    c("Milan", "Italy", "IT", "ITA"),
    c("Naples", "Italy", "IT", "ITA"),
    c("Toronto", "Canada", "CA", "CAN"),
    c("Vancouver", "Canada", "CA", "CAN"),
    c("Montreal", "Canada", "CA", "CAN"),
    c("Sydney", "Australia", "AU", "AUS"),
    c("Melbourne", "Australia", "AU", "AUS"),
    c("Seoul", "South Korea", "KR", "KOR"),
    c("Busan", "South Korea", "KR", "KOR"),
    c("Jakarta", "Indonesia", "ID", "IDN"),
    c("Bangkok", "Thailand", "TH", "THA"),
    c("Amsterdam", "Netherlands", "NL", "NLD"),
    c("Rotterdam", "Netherlands", "NL", "NLD"),
    c("Stockholm", "Sweden", "SE", "SWE"),
    c("Oslo", "Norway", "NO", "NOR"),
    c("Copenhagen", "Denmark", "DK", "DNK"),
    c("Helsinki", "Finland", "FI", "FIN"),
    c("Warsaw", "Poland", "PL", "POL"),
    c("Krakow", "Poland", "PL", "POL"),
    c("Vienna", "Austria", "AT", "AUT"),
    c("Zurich", "Switzerland", "CH", "CHE"),
    c("Geneva", "Switzerland", "CH", "CHE"),
    c("Lisbon", "Portugal", "PT", "PRT"),
    c("Porto", "Portugal", "PT", "PRT"),
    c("Athens", "Greece", "GR", "GRC"),
    c("Dublin", "Ireland", "IE", "IRL"),
    c("Prague", "Czech Republic", "CZ", "CZE"),
    c("Budapest", "Hungary", "HU", "HUN"),
    c("Kyiv", "Ukraine", "UA", "UKR"),
    c("Nairobi", "Kenya", "KE", "KEN"),
    c("Cape Town", "South Africa", "ZA", "ZAF"),
    c("Johannesburg", "South Africa", "ZA", "ZAF"),
    c("Santiago", "Chile", "CL", "CHL"),
    c("Lima", "Peru", "PE", "PER"),
    c("Bogota", "Colombia", "CO", "COL"),
    c("Singapore", "Singapore", "SG", "SGP"),
    c("Kuala Lumpur", "Malaysia", "MY", "MYS"),
    c("Hanoi", "Vietnam", "VN", "VNM"),
    c("Tel Aviv", "Israel", "IL", "ISR"),
    c("Dubai", "United Arab Emirates", "AE", "ARE"),
    c("Riyadh", "Saudi Arabia", "SA", "SAU"),
    c("Auckland", "New Zealand", "NZ", "NZL"),
];

pub static TIMEZONES: &[&str] = &[
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "America/Argentina/Buenos_Aires",
    "America/Bogota",
    "America/Chicago",
    "America/Denver",
    "America/Lima",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Santiago",
    "America/Sao_Paulo",
    "America/Toronto",
    "America/Vancouver",
    "Asia/Bangkok",
    "Asia/Dubai",
    "Asia/Ho_Chi_Minh",
    "Asia/Hong_Kong",
    "Asia/Jakarta",
    "Asia/Jerusalem",
    "Asia/Karachi",
    "Asia/Kolkata",
    "Asia/Kuala_Lumpur",
    "Asia/Manila",
    "Asia/Riyadh",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Melbourne",
    "Australia/Sydney",
    "Europe/Amsterdam",
    "Europe/Athens",
    "Europe/Berlin",
    "Europe/Budapest",
    "Europe/Copenhagen",
    "Europe/Dublin",
    "Europe/Helsinki",
    "Europe/Kyiv",
    "Europe/Lisbon",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Oslo",
    "Europe/Paris",
    "Europe/Prague",
    "Europe/Rome",
    "Europe/Stockholm",
    "Europe/Vienna",
    "Europe/Warsaw",
    "Europe/Zurich",
    "Pacific/Auckland",
    "UTC",
];
