//! Identifier vocabulary for generators, actions, parameters and formats.
//!
//! The vocabulary is closed and versioned: requests refer to generators and
//! actions by these names, and the registry in `mockachu-generators` is the
//! single source of truth for which (generator, action) pairs exist.

use serde::{Deserialize, Serialize};

/// A named family of related data-producing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Generator {
    BiologyGenerator,
    CarGenerator,
    ColorGenerator,
    FileGenerator,
    GeoGenerator,
    ItGenerator,
    MoneyGenerator,
    CinemaGenerator,
    YesNoGenerator,
    StringGenerator,
    PersonGenerator,
    CalendarGenerator,
    SequenceGenerator,
    CustomListGenerator,
    FieldBuilderGenerator,
}

impl Generator {
    /// All generators, in the order they are listed to clients.
    pub const ALL: [Generator; 15] = [
        Generator::BiologyGenerator,
        Generator::CarGenerator,
        Generator::ColorGenerator,
        Generator::FileGenerator,
        Generator::GeoGenerator,
        Generator::ItGenerator,
        Generator::MoneyGenerator,
        Generator::CinemaGenerator,
        Generator::YesNoGenerator,
        Generator::StringGenerator,
        Generator::PersonGenerator,
        Generator::CalendarGenerator,
        Generator::SequenceGenerator,
        Generator::CustomListGenerator,
        Generator::FieldBuilderGenerator,
    ];

    /// Canonical identifier, identical to the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Generator::BiologyGenerator => "BIOLOGY_GENERATOR",
            Generator::CarGenerator => "CAR_GENERATOR",
            Generator::ColorGenerator => "COLOR_GENERATOR",
            Generator::FileGenerator => "FILE_GENERATOR",
            Generator::GeoGenerator => "GEO_GENERATOR",
            Generator::ItGenerator => "IT_GENERATOR",
            Generator::MoneyGenerator => "MONEY_GENERATOR",
            Generator::CinemaGenerator => "CINEMA_GENERATOR",
            Generator::YesNoGenerator => "YES_NO_GENERATOR",
            Generator::StringGenerator => "STRING_GENERATOR",
            Generator::PersonGenerator => "PERSON_GENERATOR",
            Generator::CalendarGenerator => "CALENDAR_GENERATOR",
            Generator::SequenceGenerator => "SEQUENCE_GENERATOR",
            Generator::CustomListGenerator => "CUSTOM_LIST_GENERATOR",
            Generator::FieldBuilderGenerator => "FIELD_BUILDER_GENERATOR",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Generator {
    type Err = crate::error::GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| crate::error::GenerateError::UnknownGenerator(s.to_string()))
    }
}

/// A specific value-producing operation within a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // Biology
    RandomAnimal,
    RandomPlant,
    // Car
    RandomCarBrandAndModel,
    RandomCarBrand,
    RandomCarModel,
    RandomCarModelPattern,
    RandomCarVin,
    // Color
    RandomCommonColor,
    RandomCommonColorHex,
    RandomCommonColorWithHex,
    RandomCommonColorPattern,
    RandomHtmlColor,
    RandomHtmlColorHex,
    RandomHtmlColorWithHex,
    RandomHtmlColorPattern,
    // File
    RandomFileName,
    RandomFileExtension,
    RandomMimeType,
    // Geo
    RandomTimezone,
    RandomCity,
    RandomCountry,
    RandomCityByCountry,
    #[serde(rename = "RANDOM_COUNTRY_ISO_CODE_2")]
    RandomCountryIsoCode2,
    #[serde(rename = "RANDOM_COUNTRY_ISO_CODE_3")]
    RandomCountryIsoCode3,
    RandomGeoDataPattern,
    // IT
    RandomIpv4,
    RandomPrivateIpv4,
    RandomPublicIpv4,
    RandomIpv6,
    RandomMacAddress,
    RandomDomain,
    RandomUrl,
    RandomKnownUrl,
    RandomUuidUppercase,
    RandomUuidLowercase,
    RandomUlid,
    RandomMd5,
    RandomSha1,
    RandomSha256,
    RandomSha512,
    RandomMongodbObjectId,
    RandomEmail,
    RandomPhoneNumber,
    RandomUsername,
    // Money
    RandomCurrencyAndCode,
    RandomCurrencyName,
    RandomCurrencyCode,
    RandomCurrencyPattern,
    RandomCreditCardNumber,
    RandomCreditCardNumberByBrand,
    RandomCreditCardBrand,
    RandomIban,
    RandomCvv,
    RandomExpiryDate,
    RandomBank,
    // Cinema
    RandomMovie,
    RandomSerie,
    // Yes/No
    RandomBoolean,
    RandomBit,
    RandomYesNo,
    #[serde(rename = "RANDOM_Y_N")]
    RandomYN,
    // String
    RandomSentence,
    RandomWord,
    RandomNumericStringFromLength,
    RandomNumericStringFromRange,
    RandomAlphabeticalLowercaseString,
    RandomAlphabeticalUppercaseString,
    RandomAlphabeticalUppercaseLowercaseString,
    RandomAlphanumericalLowercaseString,
    RandomAlphanumericalUppercaseString,
    RandomAlphanumericalUppercaseLowercaseString,
    RandomIsbn,
    RandomNumber,
    RandomDecimalNumber,
    // Person
    RandomPersonGender,
    RandomPersonFirstName,
    RandomPersonLastName,
    RandomPersonFullName,
    RandomPersonEmailFromName,
    RandomPersonUsernameFromName,
    RandomPersonAge,
    RandomPersonWeight,
    RandomPersonHeight,
    // Calendar
    RandomDate,
    RandomTime,
    RandomDateTime,
    RandomUnixTimestamp,
    // Sequence
    SequentialNumber,
    // Custom list
    RandomCustomListItem,
    SequentialCustomListItem,
    // Field builder
    FieldJoin,
}

impl Action {
    /// Canonical identifier, identical to the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::RandomAnimal => "RANDOM_ANIMAL",
            Action::RandomPlant => "RANDOM_PLANT",
            Action::RandomCarBrandAndModel => "RANDOM_CAR_BRAND_AND_MODEL",
            Action::RandomCarBrand => "RANDOM_CAR_BRAND",
            Action::RandomCarModel => "RANDOM_CAR_MODEL",
            Action::RandomCarModelPattern => "RANDOM_CAR_MODEL_PATTERN",
            Action::RandomCarVin => "RANDOM_CAR_VIN",
            Action::RandomCommonColor => "RANDOM_COMMON_COLOR",
            Action::RandomCommonColorHex => "RANDOM_COMMON_COLOR_HEX",
            Action::RandomCommonColorWithHex => "RANDOM_COMMON_COLOR_WITH_HEX",
            Action::RandomCommonColorPattern => "RANDOM_COMMON_COLOR_PATTERN",
            Action::RandomHtmlColor => "RANDOM_HTML_COLOR",
            Action::RandomHtmlColorHex => "RANDOM_HTML_COLOR_HEX",
            Action::RandomHtmlColorWithHex => "RANDOM_HTML_COLOR_WITH_HEX",
            Action::RandomHtmlColorPattern => "RANDOM_HTML_COLOR_PATTERN",
            Action::RandomFileName => "RANDOM_FILE_NAME",
            Action::RandomFileExtension => "RANDOM_FILE_EXTENSION",
            Action::RandomMimeType => "RANDOM_MIME_TYPE",
            Action::RandomTimezone => "RANDOM_TIMEZONE",
            Action::RandomCity => "RANDOM_CITY",
            Action::RandomCountry => "RANDOM_COUNTRY",
            Action::RandomCityByCountry => "RANDOM_CITY_BY_COUNTRY",
            Action::RandomCountryIsoCode2 => "RANDOM_COUNTRY_ISO_CODE_2",
            Action::RandomCountryIsoCode3 => "RANDOM_COUNTRY_ISO_CODE_3",
            Action::RandomGeoDataPattern => "RANDOM_GEO_DATA_PATTERN",
            Action::RandomIpv4 => "RANDOM_IPV4",
            Action::RandomPrivateIpv4 => "RANDOM_PRIVATE_IPV4",
            Action::RandomPublicIpv4 => "RANDOM_PUBLIC_IPV4",
            Action::RandomIpv6 => "RANDOM_IPV6",
            Action::RandomMacAddress => "RANDOM_MAC_ADDRESS",
            Action::RandomDomain => "RANDOM_DOMAIN",
            Action::RandomUrl => "RANDOM_URL",
            Action::RandomKnownUrl => "RANDOM_KNOWN_URL",
            Action::RandomUuidUppercase => "RANDOM_UUID_UPPERCASE",
            Action::RandomUuidLowercase => "RANDOM_UUID_LOWERCASE",
            Action::RandomUlid => "RANDOM_ULID",
            Action::RandomMd5 => "RANDOM_MD5",
            Action::RandomSha1 => "RANDOM_SHA1",
            Action::RandomSha256 => "RANDOM_SHA256",
            Action::RandomSha512 => "RANDOM_SHA512",
            Action::RandomMongodbObjectId => "RANDOM_MONGODB_OBJECT_ID",
            Action::RandomEmail => "RANDOM_EMAIL",
            Action::RandomPhoneNumber => "RANDOM_PHONE_NUMBER",
            Action::RandomUsername => "RANDOM_USERNAME",
            Action::RandomCurrencyAndCode => "RANDOM_CURRENCY_AND_CODE",
            Action::RandomCurrencyName => "RANDOM_CURRENCY_NAME",
            Action::RandomCurrencyCode => "RANDOM_CURRENCY_CODE",
            Action::RandomCurrencyPattern => "RANDOM_CURRENCY_PATTERN",
            Action::RandomCreditCardNumber => "RANDOM_CREDIT_CARD_NUMBER",
            Action::RandomCreditCardNumberByBrand => "RANDOM_CREDIT_CARD_NUMBER_BY_BRAND",
            Action::RandomCreditCardBrand => "RANDOM_CREDIT_CARD_BRAND",
            Action::RandomIban => "RANDOM_IBAN",
            Action::RandomCvv => "RANDOM_CVV",
            Action::RandomExpiryDate => "RANDOM_EXPIRY_DATE",
            Action::RandomBank => "RANDOM_BANK",
            Action::RandomMovie => "RANDOM_MOVIE",
            Action::RandomSerie => "RANDOM_SERIE",
            Action::RandomBoolean => "RANDOM_BOOLEAN",
            Action::RandomBit => "RANDOM_BIT",
            Action::RandomYesNo => "RANDOM_YES_NO",
            Action::RandomYN => "RANDOM_Y_N",
            Action::RandomSentence => "RANDOM_SENTENCE",
            Action::RandomWord => "RANDOM_WORD",
            Action::RandomNumericStringFromLength => "RANDOM_NUMERIC_STRING_FROM_LENGTH",
            Action::RandomNumericStringFromRange => "RANDOM_NUMERIC_STRING_FROM_RANGE",
            Action::RandomAlphabeticalLowercaseString => "RANDOM_ALPHABETICAL_LOWERCASE_STRING",
            Action::RandomAlphabeticalUppercaseString => "RANDOM_ALPHABETICAL_UPPERCASE_STRING",
            Action::RandomAlphabeticalUppercaseLowercaseString => {
                "RANDOM_ALPHABETICAL_UPPERCASE_LOWERCASE_STRING"
            }
            Action::RandomAlphanumericalLowercaseString => "RANDOM_ALPHANUMERICAL_LOWERCASE_STRING",
            Action::RandomAlphanumericalUppercaseString => "RANDOM_ALPHANUMERICAL_UPPERCASE_STRING",
            Action::RandomAlphanumericalUppercaseLowercaseString => {
                "RANDOM_ALPHANUMERICAL_UPPERCASE_LOWERCASE_STRING"
            }
            Action::RandomIsbn => "RANDOM_ISBN",
            Action::RandomNumber => "RANDOM_NUMBER",
            Action::RandomDecimalNumber => "RANDOM_DECIMAL_NUMBER",
            Action::RandomPersonGender => "RANDOM_PERSON_GENDER",
            Action::RandomPersonFirstName => "RANDOM_PERSON_FIRST_NAME",
            Action::RandomPersonLastName => "RANDOM_PERSON_LAST_NAME",
            Action::RandomPersonFullName => "RANDOM_PERSON_FULL_NAME",
            Action::RandomPersonEmailFromName => "RANDOM_PERSON_EMAIL_FROM_NAME",
            Action::RandomPersonUsernameFromName => "RANDOM_PERSON_USERNAME_FROM_NAME",
            Action::RandomPersonAge => "RANDOM_PERSON_AGE",
            Action::RandomPersonWeight => "RANDOM_PERSON_WEIGHT",
            Action::RandomPersonHeight => "RANDOM_PERSON_HEIGHT",
            Action::RandomDate => "RANDOM_DATE",
            Action::RandomTime => "RANDOM_TIME",
            Action::RandomDateTime => "RANDOM_DATE_TIME",
            Action::RandomUnixTimestamp => "RANDOM_UNIX_TIMESTAMP",
            Action::SequentialNumber => "SEQUENTIAL_NUMBER",
            Action::RandomCustomListItem => "RANDOM_CUSTOM_LIST_ITEM",
            Action::SequentialCustomListItem => "SEQUENTIAL_CUSTOM_LIST_ITEM",
            Action::FieldJoin => "FIELD_JOIN",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named parameter slots accepted by actions.
///
/// Parameters travel positionally in a [`crate::FieldSpec`]; these names are
/// used in the discovery listing and in validation error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamName {
    Length,
    Pattern,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    StartTimestamp,
    EndTimestamp,
    StartRange,
    EndRange,
    CardBrand,
    StartSequence,
    IntervalSequence,
    DateFormat,
    TimeFormat,
    DatetimeFormat,
    CustomList,
    CountriesList,
    Precision,
}

impl ParamName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParamName::Length => "LENGTH",
            ParamName::Pattern => "PATTERN",
            ParamName::StartDate => "START_DATE",
            ParamName::EndDate => "END_DATE",
            ParamName::StartTime => "START_TIME",
            ParamName::EndTime => "END_TIME",
            ParamName::StartTimestamp => "START_TIMESTAMP",
            ParamName::EndTimestamp => "END_TIMESTAMP",
            ParamName::StartRange => "START_RANGE",
            ParamName::EndRange => "END_RANGE",
            ParamName::CardBrand => "CARD_BRAND",
            ParamName::StartSequence => "START_SEQUENCE",
            ParamName::IntervalSequence => "INTERVAL_SEQUENCE",
            ParamName::DateFormat => "DATE_FORMAT",
            ParamName::TimeFormat => "TIME_FORMAT",
            ParamName::DatetimeFormat => "DATETIME_FORMAT",
            ParamName::CustomList => "CUSTOM_LIST",
            ParamName::CountriesList => "COUNTRIES_LIST",
            ParamName::Precision => "PRECISION",
        }
    }
}

impl std::fmt::Display for ParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported output formats for generated datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    Json,
    Csv,
    Xml,
    Sql,
    Html,
}

impl OutputFormat {
    /// All formats, in listing order.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Xml,
        OutputFormat::Sql,
        OutputFormat::Html,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
            OutputFormat::Xml => "XML",
            OutputFormat::Sql => "SQL",
            OutputFormat::Html => "HTML",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == upper)
            .ok_or(crate::error::GenerateError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_serde_identifiers() {
        let json = serde_json::to_string(&Generator::StringGenerator).unwrap();
        assert_eq!(json, "\"STRING_GENERATOR\"");

        let parsed: Generator = serde_json::from_str("\"YES_NO_GENERATOR\"").unwrap();
        assert_eq!(parsed, Generator::YesNoGenerator);
    }

    #[test]
    fn test_generator_serde_matches_as_str() {
        for generator in Generator::ALL {
            let json = serde_json::to_string(&generator).unwrap();
            assert_eq!(json, format!("\"{}\"", generator.as_str()));
        }
    }

    #[test]
    fn test_action_serde_matches_as_str() {
        // Spot-check the variants whose identifiers are easy to get wrong.
        for (action, expected) in [
            (Action::RandomYN, "RANDOM_Y_N"),
            (Action::RandomIpv4, "RANDOM_IPV4"),
            (Action::RandomMd5, "RANDOM_MD5"),
            (Action::RandomSha256, "RANDOM_SHA256"),
            (Action::RandomMongodbObjectId, "RANDOM_MONGODB_OBJECT_ID"),
            (Action::RandomUuidUppercase, "RANDOM_UUID_UPPERCASE"),
        ] {
            assert_eq!(action.as_str(), expected);
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{expected}\""));
        }
    }

    #[test]
    fn test_generator_from_str() {
        assert_eq!(
            "GEO_GENERATOR".parse::<Generator>().unwrap(),
            Generator::GeoGenerator
        );
        assert!("NO_SUCH_GENERATOR".parse::<Generator>().is_err());
    }

    #[test]
    fn test_format_from_str_case_insensitive() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("SQL".parse::<OutputFormat>().unwrap(), OutputFormat::Sql);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
