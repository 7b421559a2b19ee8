//! Generator registry and field resolver.
//!
//! The registry is a static table mapping every generator to the actions it
//! supports and the parameter schema of each action. It is the single
//! source of truth for the closed generator/action vocabulary: the
//! discovery listing, parameter validation and dispatch all read from it.
//!
//! [`resolve`] binds a [`FieldSpec`] to a [`BoundField`] with parameters
//! parsed, defaulted and validated up front, so that row production never
//! fails mid-row.

use crate::generators::{calendar, car, color, custom_list, geo, money};
use crate::pattern;
use chrono::{NaiveDate, NaiveTime, Utc};
use convert_case::{Case, Casing};
use mockachu_core::{
    Action, FieldSpec, GenerateError, Generator, OutputFormat, ParamName, ParamValue,
};
use serde::Serialize;

/// Upper bound for LENGTH-style parameters.
const MAX_LENGTH: i64 = 10_000;

/// Upper bound for PRECISION parameters.
const MAX_PRECISION: i64 = 12;

/// Declared kind of a parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Float,
    Str,
}

/// One parameter slot of an action: its listing name and expected kind.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: ParamName,
    pub kind: ParamKind,
}

const fn p(name: ParamName, kind: ParamKind) -> ParamSpec {
    ParamSpec { name, kind }
}

/// Registry entry: an action plus its parameter schema.
#[derive(Debug, Clone, Copy)]
pub struct ActionSpec {
    pub action: Action,
    pub params: &'static [ParamSpec],
}

const fn a(action: Action, params: &'static [ParamSpec]) -> ActionSpec {
    ActionSpec { action, params }
}

const PATTERN: &[ParamSpec] = &[p(ParamName::Pattern, ParamKind::Str)];
const LENGTH: &[ParamSpec] = &[p(ParamName::Length, ParamKind::Int)];
const INT_RANGE: &[ParamSpec] = &[
    p(ParamName::StartRange, ParamKind::Int),
    p(ParamName::EndRange, ParamKind::Int),
];
const CUSTOM_LIST: &[ParamSpec] = &[p(ParamName::CustomList, ParamKind::Str)];

/// The actions of each generator, in listing order.
static BIOLOGY_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomAnimal, &[]),
    a(Action::RandomPlant, &[]),
];

static CAR_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomCarBrandAndModel, &[]),
    a(Action::RandomCarBrand, &[]),
    a(Action::RandomCarModel, &[]),
    a(Action::RandomCarModelPattern, PATTERN),
    a(Action::RandomCarVin, &[]),
];

static COLOR_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomCommonColor, &[]),
    a(Action::RandomCommonColorHex, &[]),
    a(Action::RandomCommonColorWithHex, &[]),
    a(Action::RandomCommonColorPattern, PATTERN),
    a(Action::RandomHtmlColor, &[]),
    a(Action::RandomHtmlColorHex, &[]),
    a(Action::RandomHtmlColorWithHex, &[]),
    a(Action::RandomHtmlColorPattern, PATTERN),
];

static FILE_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomFileName, &[]),
    a(Action::RandomFileExtension, &[]),
    a(Action::RandomMimeType, &[]),
];

static GEO_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomTimezone, &[]),
    a(Action::RandomCity, &[]),
    a(Action::RandomCountry, &[]),
    a(
        Action::RandomCityByCountry,
        &[p(ParamName::CountriesList, ParamKind::Str)],
    ),
    a(Action::RandomCountryIsoCode2, &[]),
    a(Action::RandomCountryIsoCode3, &[]),
    a(Action::RandomGeoDataPattern, PATTERN),
];

static IT_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomIpv4, &[]),
    a(Action::RandomPrivateIpv4, &[]),
    a(Action::RandomPublicIpv4, &[]),
    a(Action::RandomIpv6, &[]),
    a(Action::RandomMacAddress, &[]),
    a(Action::RandomDomain, &[]),
    a(Action::RandomUrl, &[]),
    a(Action::RandomKnownUrl, &[]),
    a(Action::RandomUuidUppercase, &[]),
    a(Action::RandomUuidLowercase, &[]),
    a(Action::RandomUlid, &[]),
    a(Action::RandomMd5, &[]),
    a(Action::RandomSha1, &[]),
    a(Action::RandomSha256, &[]),
    a(Action::RandomSha512, &[]),
    a(Action::RandomMongodbObjectId, &[]),
    a(Action::RandomEmail, &[]),
    a(Action::RandomPhoneNumber, PATTERN),
    a(Action::RandomUsername, &[]),
];

static MONEY_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomCurrencyAndCode, &[]),
    a(Action::RandomCurrencyName, &[]),
    a(Action::RandomCurrencyCode, &[]),
    a(Action::RandomCurrencyPattern, PATTERN),
    a(Action::RandomCreditCardNumber, &[]),
    a(
        Action::RandomCreditCardNumberByBrand,
        &[p(ParamName::CardBrand, ParamKind::Str)],
    ),
    a(Action::RandomCreditCardBrand, &[]),
    a(Action::RandomIban, &[]),
    a(Action::RandomCvv, &[]),
    a(Action::RandomExpiryDate, &[]),
    a(Action::RandomBank, &[]),
];

static CINEMA_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomMovie, &[]),
    a(Action::RandomSerie, &[]),
];

static YES_NO_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomBoolean, &[]),
    a(Action::RandomBit, &[]),
    a(Action::RandomYesNo, &[]),
    a(Action::RandomYN, &[]),
];

static STRING_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomSentence, &[]),
    a(Action::RandomWord, &[]),
    a(Action::RandomNumericStringFromLength, LENGTH),
    a(Action::RandomNumericStringFromRange, INT_RANGE),
    a(Action::RandomAlphabeticalLowercaseString, LENGTH),
    a(Action::RandomAlphabeticalUppercaseString, LENGTH),
    a(Action::RandomAlphabeticalUppercaseLowercaseString, LENGTH),
    a(Action::RandomAlphanumericalLowercaseString, LENGTH),
    a(Action::RandomAlphanumericalUppercaseString, LENGTH),
    a(Action::RandomAlphanumericalUppercaseLowercaseString, LENGTH),
    a(Action::RandomIsbn, &[]),
    a(Action::RandomNumber, INT_RANGE),
    a(
        Action::RandomDecimalNumber,
        &[
            p(ParamName::StartRange, ParamKind::Float),
            p(ParamName::EndRange, ParamKind::Float),
            p(ParamName::Precision, ParamKind::Int),
        ],
    ),
];

static PERSON_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomPersonGender, &[]),
    a(Action::RandomPersonFirstName, &[]),
    a(Action::RandomPersonLastName, &[]),
    a(Action::RandomPersonFullName, &[]),
    a(Action::RandomPersonEmailFromName, &[]),
    a(Action::RandomPersonUsernameFromName, &[]),
    a(Action::RandomPersonAge, &[]),
    a(Action::RandomPersonWeight, &[]),
    a(Action::RandomPersonHeight, &[]),
];

static CALENDAR_ACTIONS: &[ActionSpec] = &[
    a(
        Action::RandomDate,
        &[
            p(ParamName::StartDate, ParamKind::Str),
            p(ParamName::EndDate, ParamKind::Str),
            p(ParamName::DateFormat, ParamKind::Str),
        ],
    ),
    a(
        Action::RandomTime,
        &[
            p(ParamName::StartTime, ParamKind::Str),
            p(ParamName::EndTime, ParamKind::Str),
            p(ParamName::TimeFormat, ParamKind::Str),
        ],
    ),
    a(
        Action::RandomDateTime,
        &[
            p(ParamName::StartDate, ParamKind::Str),
            p(ParamName::EndDate, ParamKind::Str),
            p(ParamName::StartTime, ParamKind::Str),
            p(ParamName::EndTime, ParamKind::Str),
            p(ParamName::DatetimeFormat, ParamKind::Str),
        ],
    ),
    a(
        Action::RandomUnixTimestamp,
        &[
            p(ParamName::StartTimestamp, ParamKind::Int),
            p(ParamName::EndTimestamp, ParamKind::Int),
        ],
    ),
];

static SEQUENCE_ACTIONS: &[ActionSpec] = &[a(
    Action::SequentialNumber,
    &[
        p(ParamName::StartSequence, ParamKind::Int),
        p(ParamName::IntervalSequence, ParamKind::Int),
    ],
)];

static CUSTOM_LIST_ACTIONS: &[ActionSpec] = &[
    a(Action::RandomCustomListItem, CUSTOM_LIST),
    a(Action::SequentialCustomListItem, CUSTOM_LIST),
];

static FIELD_BUILDER_ACTIONS: &[ActionSpec] = &[a(Action::FieldJoin, PATTERN)];

pub fn actions_of(generator: Generator) -> &'static [ActionSpec] {
    match generator {
        Generator::BiologyGenerator => BIOLOGY_ACTIONS,
        Generator::CarGenerator => CAR_ACTIONS,
        Generator::ColorGenerator => COLOR_ACTIONS,
        Generator::FileGenerator => FILE_ACTIONS,
        Generator::GeoGenerator => GEO_ACTIONS,
        Generator::ItGenerator => IT_ACTIONS,
        Generator::MoneyGenerator => MONEY_ACTIONS,
        Generator::CinemaGenerator => CINEMA_ACTIONS,
        Generator::YesNoGenerator => YES_NO_ACTIONS,
        Generator::StringGenerator => STRING_ACTIONS,
        Generator::PersonGenerator => PERSON_ACTIONS,
        Generator::CalendarGenerator => CALENDAR_ACTIONS,
        Generator::SequenceGenerator => SEQUENCE_ACTIONS,
        Generator::CustomListGenerator => CUSTOM_LIST_ACTIONS,
        Generator::FieldBuilderGenerator => FIELD_BUILDER_ACTIONS,
    }
}

/// Look up the registry entry for a (generator, action) pair.
pub fn lookup(generator: Generator, action: Action) -> Result<&'static ActionSpec, GenerateError> {
    actions_of(generator)
        .iter()
        .find(|spec| spec.action == action)
        .ok_or_else(|| GenerateError::UnknownAction {
            generator: generator.as_str().to_string(),
            action: action.as_str().to_string(),
        })
}

// ============================================================================
// Discovery listing
// ============================================================================

/// One action in the discovery listing.
#[derive(Debug, Clone, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
    pub display_name: String,
    pub parameters: Vec<&'static str>,
}

/// One generator in the discovery listing.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub display_name: String,
    pub actions: Vec<ActionInfo>,
}

/// The full discovery payload: output formats plus the generator/action
/// vocabulary with display names and parameter names.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryListing {
    pub formats: Vec<&'static str>,
    pub generators: Vec<GeneratorInfo>,
}

fn display_name(identifier: &str) -> String {
    // from_case pins the boundaries to underscores, so RANDOM_IPV4 becomes
    // "Random Ipv4" rather than "Random Ipv 4".
    identifier.from_case(Case::UpperSnake).to_case(Case::Title)
}

/// Enumerate the whole registry, in stable order.
pub fn list_all() -> RegistryListing {
    let generators = Generator::ALL
        .iter()
        .map(|&generator| GeneratorInfo {
            name: generator.as_str(),
            display_name: display_name(generator.as_str()),
            actions: actions_of(generator)
                .iter()
                .map(|spec| ActionInfo {
                    name: spec.action.as_str(),
                    display_name: display_name(spec.action.as_str()),
                    parameters: spec.params.iter().map(|p| p.name.as_str()).collect(),
                })
                .collect(),
        })
        .collect();

    RegistryListing {
        formats: OutputFormat::ALL.iter().map(|f| f.as_str()).collect(),
        generators,
    }
}

// ============================================================================
// Field resolution
// ============================================================================

/// Pre-validated arguments for a bound field.
///
/// Every variant is fully parsed at resolve time; row production only reads.
#[derive(Debug, Clone)]
pub enum BoundArgs {
    /// Action takes no parameters.
    None,
    /// Exact output length for string actions.
    Length(usize),
    /// Inclusive integer range.
    IntRange { min: i64, max: i64 },
    /// Inclusive float range with rounding precision.
    DecimalRange { min: f64, max: f64, precision: u32 },
    /// Validated pattern template (placeholder or mask form).
    Pattern(String),
    /// Card brand filter for credit card numbers.
    CardBrand(String),
    /// Country filter for city selection; empty means "any".
    Countries(Vec<String>),
    /// Sequence start and interval.
    Sequence { start: i64, interval: i64 },
    /// Date range plus strftime output format.
    DateRange {
        start: NaiveDate,
        end: NaiveDate,
        format: String,
    },
    /// Time range plus strftime output format.
    TimeRange {
        start: NaiveTime,
        end: NaiveTime,
        format: String,
    },
    /// Combined date/time range; `format` of `None` means "date time" with
    /// the default date and time formats.
    DateTimeRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        format: Option<String>,
    },
    /// Inclusive unix timestamp range.
    TimestampRange { start: i64, end: i64 },
    /// Parsed custom list items; may be empty.
    Items(Vec<String>),
    /// Field-join template, validated against the request's field names.
    JoinTemplate(String),
}

/// A field specification bound to its registry entry, with parameters
/// validated and defaults applied.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub name: String,
    pub generator: Generator,
    pub action: Action,
    /// Clamped to [0, 100].
    pub nullable_percentage: i64,
    pub args: BoundArgs,
}

fn invalid(field: &str, reason: impl Into<String>) -> GenerateError {
    GenerateError::InvalidParameter {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Positional parameter access with kind checking.
struct Params<'a> {
    field: &'a str,
    spec: &'static ActionSpec,
    values: &'a [ParamValue],
}

impl<'a> Params<'a> {
    fn new(
        field: &'a str,
        spec: &'static ActionSpec,
        values: &'a [ParamValue],
    ) -> Result<Self, GenerateError> {
        if values.len() > spec.params.len() {
            let names: Vec<&str> = spec.params.iter().map(|p| p.name.as_str()).collect();
            return Err(invalid(
                field,
                format!(
                    "{} accepts at most {} parameters ({}), got {}",
                    spec.action,
                    spec.params.len(),
                    names.join(", "),
                    values.len()
                ),
            ));
        }
        Ok(Self {
            field,
            spec,
            values,
        })
    }

    fn int(&self, index: usize, default: i64) -> Result<i64, GenerateError> {
        match self.values.get(index) {
            None => Ok(default),
            Some(value) => value.coerce_i64().ok_or_else(|| {
                invalid(
                    self.field,
                    format!(
                        "{} must be an integer, got {value:?}",
                        self.spec.params[index].name
                    ),
                )
            }),
        }
    }

    fn float(&self, index: usize, default: f64) -> Result<f64, GenerateError> {
        match self.values.get(index) {
            None => Ok(default),
            Some(value) => value.coerce_f64().ok_or_else(|| {
                invalid(
                    self.field,
                    format!(
                        "{} must be a number, got {value:?}",
                        self.spec.params[index].name
                    ),
                )
            }),
        }
    }

    /// String parameter; numbers stringify the way loosely-typed clients
    /// expect. Empty strings count as absent.
    fn string(&self, index: usize) -> Option<String> {
        let value = self.values.get(index)?;
        let s = match value {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    field: &str,
    min: T,
    max: T,
) -> Result<(), GenerateError> {
    if min > max {
        return Err(GenerateError::InvalidRange {
            field: field.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

fn check_length(field: &str, length: i64) -> Result<usize, GenerateError> {
    if length < 1 || length > MAX_LENGTH {
        return Err(invalid(
            field,
            format!("LENGTH must be between 1 and {MAX_LENGTH}, got {length}"),
        ));
    }
    Ok(length as usize)
}

fn check_strftime(field: &str, name: ParamName, format: &str) -> Result<(), GenerateError> {
    use std::fmt::Write as _;

    // Trial-render against the same value shape generation uses; this
    // catches both unknown specifiers and ones a naive datetime cannot
    // render (e.g. %z), without the panic a bad format triggers in
    // `to_string`.
    let probe = calendar::epoch_date().and_time(NaiveTime::MIN);
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(format)).is_err() {
        return Err(invalid(
            field,
            format!("{name} is not a valid strftime format: {format:?}"),
        ));
    }
    Ok(())
}

fn check_placeholders(
    field: &str,
    template: &str,
    allowed: &[&str],
) -> Result<(), GenerateError> {
    for name in pattern::placeholders(template) {
        if !allowed.contains(&name) {
            return Err(GenerateError::UnknownPlaceholder {
                field: field.to_string(),
                placeholder: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Resolve a field spec into a [`BoundField`].
///
/// `field_names` is the full list of field names in the request; it is the
/// placeholder vocabulary for `FIELD_JOIN` templates. All validation
/// happens here -- wrong arity or types ([`GenerateError::InvalidParameter`]),
/// inverted ranges ([`GenerateError::InvalidRange`]) and unknown pattern
/// placeholders ([`GenerateError::UnknownPlaceholder`]) are reported before
/// any row is generated.
pub fn resolve(spec: &FieldSpec, field_names: &[&str]) -> Result<BoundField, GenerateError> {
    let entry = lookup(spec.generator, spec.action)?;
    let params = Params::new(&spec.name, entry, &spec.parameters)?;
    let field = spec.name.as_str();

    let args = match spec.action {
        // String lengths
        Action::RandomNumericStringFromLength
        | Action::RandomAlphabeticalLowercaseString
        | Action::RandomAlphabeticalUppercaseString
        | Action::RandomAlphabeticalUppercaseLowercaseString
        | Action::RandomAlphanumericalLowercaseString
        | Action::RandomAlphanumericalUppercaseString
        | Action::RandomAlphanumericalUppercaseLowercaseString => {
            BoundArgs::Length(check_length(field, params.int(0, 10)?)?)
        }

        // Integer ranges
        Action::RandomNumericStringFromRange => {
            let min = params.int(0, 1000)?;
            let max = params.int(1, 9999)?;
            check_range(field, min, max)?;
            BoundArgs::IntRange { min, max }
        }
        Action::RandomNumber => {
            let min = params.int(0, 0)?;
            let max = params.int(1, 1000)?;
            check_range(field, min, max)?;
            BoundArgs::IntRange { min, max }
        }
        Action::RandomDecimalNumber => {
            let min = params.float(0, 0.0)?;
            let max = params.float(1, 1000.0)?;
            check_range(field, min, max)?;
            let precision = params.int(2, 2)?;
            if !(0..=MAX_PRECISION).contains(&precision) {
                return Err(invalid(
                    field,
                    format!("PRECISION must be between 0 and {MAX_PRECISION}, got {precision}"),
                ));
            }
            BoundArgs::DecimalRange {
                min,
                max,
                precision: precision as u32,
            }
        }

        // Placeholder patterns over a generator's key set
        Action::RandomCarModelPattern => {
            let template = params.string(0).unwrap_or_else(|| car::DEFAULT_PATTERN.to_string());
            check_placeholders(field, &template, car::PATTERN_KEYS)?;
            BoundArgs::Pattern(template)
        }
        Action::RandomCommonColorPattern | Action::RandomHtmlColorPattern => {
            let template = params.string(0).unwrap_or_else(|| color::DEFAULT_PATTERN.to_string());
            check_placeholders(field, &template, color::PATTERN_KEYS)?;
            BoundArgs::Pattern(template)
        }
        Action::RandomGeoDataPattern => {
            let template = params.string(0).unwrap_or_else(|| geo::DEFAULT_PATTERN.to_string());
            check_placeholders(field, &template, geo::PATTERN_KEYS)?;
            BoundArgs::Pattern(template)
        }
        Action::RandomCurrencyPattern => {
            let template = params.string(0).unwrap_or_else(|| money::DEFAULT_PATTERN.to_string());
            check_placeholders(field, &template, money::PATTERN_KEYS)?;
            BoundArgs::Pattern(template)
        }

        // Digit masks: every char passes through except the mask char
        Action::RandomPhoneNumber => BoundArgs::Pattern(
            params.string(0).unwrap_or_else(|| "+1-___-___-____".to_string()),
        ),

        Action::RandomCityByCountry => {
            let countries = params
                .string(0)
                .map(|s| custom_list::parse_items(&s))
                .unwrap_or_default();
            BoundArgs::Countries(countries)
        }

        Action::RandomCreditCardNumberByBrand => match params.string(0) {
            None => BoundArgs::None,
            Some(brand) => {
                if !money::brand_exists(&brand) {
                    return Err(invalid(
                        field,
                        format!(
                            "CARD_BRAND {brand:?} is not one of: {}",
                            money::brand_names().join(", ")
                        ),
                    ));
                }
                BoundArgs::CardBrand(brand)
            }
        },

        Action::SequentialNumber => {
            let start = params.int(0, 1)?;
            let interval = params.int(1, 1)?;
            // Interval is clamped rather than rejected; 0 degenerates to 1.
            let interval = if interval == 0 {
                1
            } else {
                interval.clamp(-1000, 1000)
            };
            BoundArgs::Sequence { start, interval }
        }

        Action::RandomDate => {
            let start = parse_date(field, ParamName::StartDate, params.string(0))?
                .unwrap_or_else(calendar::epoch_date);
            let end = parse_date(field, ParamName::EndDate, params.string(1))?
                .unwrap_or_else(|| Utc::now().date_naive());
            check_range(field, start, end)?;
            let format = params
                .string(2)
                .unwrap_or_else(|| calendar::DEFAULT_DATE_FORMAT.to_string());
            check_strftime(field, ParamName::DateFormat, &format)?;
            BoundArgs::DateRange { start, end, format }
        }
        Action::RandomTime => {
            let start = parse_time(field, ParamName::StartTime, params.string(0))?
                .unwrap_or_else(calendar::day_start);
            let end = parse_time(field, ParamName::EndTime, params.string(1))?
                .unwrap_or_else(calendar::day_end);
            check_range(field, start, end)?;
            let format = params
                .string(2)
                .unwrap_or_else(|| calendar::DEFAULT_TIME_FORMAT.to_string());
            check_strftime(field, ParamName::TimeFormat, &format)?;
            BoundArgs::TimeRange { start, end, format }
        }
        Action::RandomDateTime => {
            let start_date = parse_date(field, ParamName::StartDate, params.string(0))?
                .unwrap_or_else(calendar::epoch_date);
            let end_date = parse_date(field, ParamName::EndDate, params.string(1))?
                .unwrap_or_else(|| Utc::now().date_naive());
            check_range(field, start_date, end_date)?;
            let start_time = parse_time(field, ParamName::StartTime, params.string(2))?
                .unwrap_or_else(calendar::day_start);
            let end_time = parse_time(field, ParamName::EndTime, params.string(3))?
                .unwrap_or_else(calendar::day_end);
            check_range(field, start_time, end_time)?;
            let format = params.string(4);
            if let Some(ref format) = format {
                check_strftime(field, ParamName::DatetimeFormat, format)?;
            }
            BoundArgs::DateTimeRange {
                start_date,
                end_date,
                start_time,
                end_time,
                format,
            }
        }
        Action::RandomUnixTimestamp => {
            let start = params.int(0, 0)?;
            let end = match params.values.get(1) {
                None => Utc::now().timestamp(),
                Some(_) => params.int(1, 0)?,
            };
            check_range(field, start, end)?;
            BoundArgs::TimestampRange { start, end }
        }

        Action::RandomCustomListItem | Action::SequentialCustomListItem => {
            let items = params
                .string(0)
                .map(|s| custom_list::parse_items(&s))
                .unwrap_or_default();
            BoundArgs::Items(items)
        }

        Action::FieldJoin => {
            let template = params.string(0).unwrap_or_default();
            check_placeholders(field, &template, field_names)?;
            BoundArgs::JoinTemplate(template)
        }

        // Everything else takes no parameters.
        _ => BoundArgs::None,
    };

    Ok(BoundField {
        name: spec.name.clone(),
        generator: spec.generator,
        action: spec.action,
        nullable_percentage: spec.nullable_percentage.clamp(0, 100),
        args,
    })
}

fn parse_date(
    field: &str,
    name: ParamName,
    value: Option<String>,
) -> Result<Option<NaiveDate>, GenerateError> {
    match value {
        None => Ok(None),
        Some(s) => calendar::parse_date_param(&s)
            .map(Some)
            .ok_or_else(|| invalid(field, format!("{name} is not a valid date: {s:?}"))),
    }
}

fn parse_time(
    field: &str,
    name: ParamName,
    value: Option<String>,
) -> Result<Option<NaiveTime>, GenerateError> {
    match value {
        None => Ok(None),
        Some(s) => calendar::parse_time_param(&s)
            .map(Some)
            .ok_or_else(|| invalid(field, format!("{name} is not a valid time: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(generator: Generator, action: Action, parameters: Vec<ParamValue>) -> FieldSpec {
        FieldSpec::new("f", generator, action).with_parameters(parameters)
    }

    #[test]
    fn test_lookup_known_pair() {
        assert!(lookup(Generator::GeoGenerator, Action::RandomCity).is_ok());
    }

    #[test]
    fn test_lookup_unknown_pair() {
        let err = lookup(Generator::GeoGenerator, Action::RandomAnimal).unwrap_err();
        assert!(matches!(err, GenerateError::UnknownAction { .. }));
        assert!(err.to_string().contains("GEO_GENERATOR"));
        assert!(err.to_string().contains("RANDOM_ANIMAL"));
    }

    #[test]
    fn test_list_all_covers_every_generator() {
        let listing = list_all();
        assert_eq!(listing.generators.len(), Generator::ALL.len());
        assert_eq!(listing.formats, ["JSON", "CSV", "XML", "SQL", "HTML"]);

        let strings = listing
            .generators
            .iter()
            .find(|g| g.name == "STRING_GENERATOR")
            .unwrap();
        assert_eq!(strings.display_name, "String Generator");

        let number = strings
            .actions
            .iter()
            .find(|a| a.name == "RANDOM_NUMBER")
            .unwrap();
        assert_eq!(number.parameters, ["START_RANGE", "END_RANGE"]);
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let bound = resolve(
            &spec(Generator::StringGenerator, Action::RandomNumber, vec![]),
            &[],
        )
        .unwrap();
        assert!(matches!(bound.args, BoundArgs::IntRange { min: 0, max: 1000 }));
    }

    #[test]
    fn test_resolve_rejects_extra_parameters() {
        let err = resolve(
            &spec(
                Generator::BiologyGenerator,
                Action::RandomAnimal,
                vec![ParamValue::Int(1)],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter { .. }));
    }

    #[test]
    fn test_resolve_rejects_bad_type() {
        let err = resolve(
            &spec(
                Generator::StringGenerator,
                Action::RandomNumber,
                vec![ParamValue::Str("low".into()), ParamValue::Int(5)],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter { .. }));
    }

    #[test]
    fn test_resolve_rejects_inverted_range() {
        let err = resolve(
            &spec(
                Generator::StringGenerator,
                Action::RandomNumber,
                vec![ParamValue::Int(10), ParamValue::Int(5)],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRange { .. }));
    }

    #[test]
    fn test_resolve_coerces_numeric_strings() {
        let bound = resolve(
            &spec(
                Generator::StringGenerator,
                Action::RandomNumber,
                vec![ParamValue::Str("1".into()), ParamValue::Str("5".into())],
            ),
            &[],
        )
        .unwrap();
        assert!(matches!(bound.args, BoundArgs::IntRange { min: 1, max: 5 }));
    }

    #[test]
    fn test_resolve_rejects_unknown_geo_placeholder() {
        let err = resolve(
            &spec(
                Generator::GeoGenerator,
                Action::RandomGeoDataPattern,
                vec![ParamValue::Str("{city}, {planet}".into())],
            ),
            &[],
        )
        .unwrap_err();
        match err {
            GenerateError::UnknownPlaceholder { placeholder, .. } => {
                assert_eq!(placeholder, "planet")
            }
            other => panic!("expected UnknownPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_validates_join_against_field_names() {
        let join = spec(
            Generator::FieldBuilderGenerator,
            Action::FieldJoin,
            vec![ParamValue::Str("{first}.{last}".into())],
        );
        assert!(resolve(&join, &["first", "last"]).is_ok());
        assert!(matches!(
            resolve(&join, &["first"]).unwrap_err(),
            GenerateError::UnknownPlaceholder { .. }
        ));
    }

    #[test]
    fn test_resolve_rejects_bad_strftime() {
        let err = resolve(
            &spec(
                Generator::CalendarGenerator,
                Action::RandomDate,
                vec![
                    ParamValue::Str("2020-01-01".into()),
                    ParamValue::Str("2021-01-01".into()),
                    ParamValue::Str("%Q".into()),
                ],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter { .. }));
    }

    #[test]
    fn test_resolve_rejects_inverted_dates() {
        let err = resolve(
            &spec(
                Generator::CalendarGenerator,
                Action::RandomDate,
                vec![
                    ParamValue::Str("2022-01-01".into()),
                    ParamValue::Str("2020-01-01".into()),
                ],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRange { .. }));
    }

    #[test]
    fn test_resolve_clamps_nullable_and_interval() {
        let mut s = spec(
            Generator::SequenceGenerator,
            Action::SequentialNumber,
            vec![ParamValue::Int(1), ParamValue::Int(5000)],
        );
        s.nullable_percentage = 250;
        let bound = resolve(&s, &[]).unwrap();
        assert_eq!(bound.nullable_percentage, 100);
        assert!(matches!(
            bound.args,
            BoundArgs::Sequence {
                start: 1,
                interval: 1000
            }
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_card_brand() {
        let err = resolve(
            &spec(
                Generator::MoneyGenerator,
                Action::RandomCreditCardNumberByBrand,
                vec![ParamValue::Str("Monopoly Money".into())],
            ),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter { .. }));
    }
}
