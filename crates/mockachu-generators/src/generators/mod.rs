//! Individual value producers and the action dispatch.
//!
//! Each module covers one generator family; [`generate_value`] is the
//! single dispatch point mapping a resolved field to its producer.

pub mod biology;
pub mod calendar;
pub mod car;
pub mod cinema;
pub mod color;
pub mod custom_list;
pub mod field_builder;
pub mod file;
pub mod geo;
pub mod it;
pub mod money;
pub mod person;
pub mod strings;
pub mod yes_no;

use crate::data::strings::{
    ALNUM_LOWERCASE, ALNUM_MIXED_CASE, ALNUM_UPPERCASE, DIGITS, LOWERCASE, MIXED_CASE, UPPERCASE,
};
use crate::producer::RowContext;
use crate::registry::{BoundArgs, BoundField};
use self::color::Palette;
use mockachu_core::{Action, Row, Value};
use rand::Rng;

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Produce one value for a resolved field.
///
/// `row` is the row generated so far; only `FIELD_JOIN` reads it. An
/// action/argument combination the resolver would never produce yields
/// null rather than panicking.
pub fn generate_value<R: Rng + ?Sized>(
    field: &BoundField,
    rng: &mut R,
    ctx: &mut RowContext,
    row: &Row,
) -> Value {
    match (field.action, &field.args) {
        // Biology
        (Action::RandomAnimal, _) => biology::random_animal(rng).into(),
        (Action::RandomPlant, _) => biology::random_plant(rng).into(),

        // Car (correlated within the row)
        (Action::RandomCarBrandAndModel, _) => ctx.car(rng).brand_and_model().into(),
        (Action::RandomCarBrand, _) => ctx.car(rng).brand.into(),
        (Action::RandomCarModel, _) => ctx.car(rng).model.into(),
        (Action::RandomCarModelPattern, BoundArgs::Pattern(template)) => {
            ctx.car(rng).format_pattern(template).into()
        }
        (Action::RandomCarVin, _) => ctx.car(rng).vin.clone().into(),

        // Color
        (Action::RandomCommonColor, _) => color::sample(rng, Palette::Common).name.into(),
        (Action::RandomCommonColorHex, _) => color::sample(rng, Palette::Common).hex.into(),
        (Action::RandomCommonColorWithHex, _) => {
            color::name_with_hex(color::sample(rng, Palette::Common)).into()
        }
        (Action::RandomCommonColorPattern, BoundArgs::Pattern(template)) => {
            color::format_pattern(color::sample(rng, Palette::Common), template).into()
        }
        (Action::RandomHtmlColor, _) => color::sample(rng, Palette::Html).name.into(),
        (Action::RandomHtmlColorHex, _) => color::sample(rng, Palette::Html).hex.into(),
        (Action::RandomHtmlColorWithHex, _) => {
            color::name_with_hex(color::sample(rng, Palette::Html)).into()
        }
        (Action::RandomHtmlColorPattern, BoundArgs::Pattern(template)) => {
            color::format_pattern(color::sample(rng, Palette::Html), template).into()
        }

        // File
        (Action::RandomFileName, _) => file::random_file_name(rng).into(),
        (Action::RandomFileExtension, _) => file::random_file_extension(rng).into(),
        (Action::RandomMimeType, _) => file::random_mime_type(rng).into(),

        // Geo (correlated within the row, except timezones)
        (Action::RandomTimezone, _) => geo::random_timezone(rng).into(),
        (Action::RandomCity, _) => ctx.location(rng).city.into(),
        (Action::RandomCountry, _) => ctx.location(rng).country.into(),
        (Action::RandomCityByCountry, BoundArgs::Countries(countries)) => {
            let location = ctx.location(rng);
            geo::city_by_countries(rng, countries, location).into()
        }
        (Action::RandomCountryIsoCode2, _) => ctx.location(rng).iso_code_2.into(),
        (Action::RandomCountryIsoCode3, _) => ctx.location(rng).iso_code_3.into(),
        (Action::RandomGeoDataPattern, BoundArgs::Pattern(template)) => {
            geo::format_pattern(ctx.location(rng), template).into()
        }

        // IT
        (Action::RandomIpv4, _) => it::random_ipv4(rng).into(),
        (Action::RandomPrivateIpv4, _) => it::random_private_ipv4(rng).into(),
        (Action::RandomPublicIpv4, _) => it::random_public_ipv4(rng).into(),
        (Action::RandomIpv6, _) => it::random_ipv6(rng).into(),
        (Action::RandomMacAddress, _) => it::random_mac_address(rng).into(),
        (Action::RandomDomain, _) => it::random_domain(rng).into(),
        (Action::RandomUrl, _) => it::random_url(rng).into(),
        (Action::RandomKnownUrl, _) => it::random_known_url(rng).into(),
        (Action::RandomUuidUppercase, _) => {
            it::random_uuid(rng).to_string().to_uppercase().into()
        }
        (Action::RandomUuidLowercase, _) => it::random_uuid(rng).to_string().into(),
        (Action::RandomUlid, _) => it::random_ulid(rng).into(),
        (Action::RandomMd5, _) => it::random_hex(rng, 16).into(),
        (Action::RandomSha1, _) => it::random_hex(rng, 20).into(),
        (Action::RandomSha256, _) => it::random_hex(rng, 32).into(),
        (Action::RandomSha512, _) => it::random_hex(rng, 64).into(),
        (Action::RandomMongodbObjectId, _) => it::random_object_id(rng).into(),
        (Action::RandomEmail, _) => it::random_email(rng).into(),
        (Action::RandomPhoneNumber, BoundArgs::Pattern(mask)) => {
            crate::pattern::fill_mask(mask, '_', rng).into()
        }
        (Action::RandomUsername, _) => it::random_username(rng).into(),

        // Money
        (Action::RandomCurrencyAndCode, _) => {
            money::currency_and_code(money::sample_currency(rng)).into()
        }
        (Action::RandomCurrencyName, _) => money::sample_currency(rng).currency.into(),
        (Action::RandomCurrencyCode, _) => money::sample_currency(rng).code.into(),
        (Action::RandomCurrencyPattern, BoundArgs::Pattern(template)) => {
            money::format_pattern(money::sample_currency(rng), template).into()
        }
        (Action::RandomCreditCardNumber, _) => money::random_card_number(rng, None).into(),
        (Action::RandomCreditCardNumberByBrand, BoundArgs::CardBrand(brand)) => {
            money::random_card_number(rng, Some(brand.as_str())).into()
        }
        (Action::RandomCreditCardNumberByBrand, BoundArgs::None) => {
            money::random_card_number(rng, None).into()
        }
        (Action::RandomCreditCardBrand, _) => money::random_card_brand(rng).into(),
        (Action::RandomIban, _) => money::random_iban(rng).into(),
        (Action::RandomCvv, _) => money::random_cvv(rng).into(),
        (Action::RandomExpiryDate, _) => money::random_expiry_date(rng).into(),
        (Action::RandomBank, _) => money::random_bank(rng).into(),

        // Cinema
        (Action::RandomMovie, _) => cinema::random_movie(rng).into(),
        (Action::RandomSerie, _) => cinema::random_serie(rng).into(),

        // Yes/No
        (Action::RandomBoolean, _) => yes_no::random_boolean(rng).into(),
        (Action::RandomBit, _) => yes_no::random_bit(rng),
        (Action::RandomYesNo, _) => yes_no::random_yes_no(rng).into(),
        (Action::RandomYN, _) => yes_no::random_y_n(rng).into(),

        // Strings and numbers
        (Action::RandomSentence, _) => strings::random_sentence(rng).into(),
        (Action::RandomWord, _) => strings::random_word(rng).into(),
        (Action::RandomNumericStringFromLength, BoundArgs::Length(length)) => {
            strings::random_chars(rng, DIGITS, *length).into()
        }
        (Action::RandomNumericStringFromRange, BoundArgs::IntRange { min, max }) => {
            rng.random_range(*min..=*max).to_string().into()
        }
        (Action::RandomAlphabeticalLowercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, LOWERCASE, *length).into()
        }
        (Action::RandomAlphabeticalUppercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, UPPERCASE, *length).into()
        }
        (Action::RandomAlphabeticalUppercaseLowercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, MIXED_CASE, *length).into()
        }
        (Action::RandomAlphanumericalLowercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, ALNUM_LOWERCASE, *length).into()
        }
        (Action::RandomAlphanumericalUppercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, ALNUM_UPPERCASE, *length).into()
        }
        (Action::RandomAlphanumericalUppercaseLowercaseString, BoundArgs::Length(length)) => {
            strings::random_chars(rng, ALNUM_MIXED_CASE, *length).into()
        }
        (Action::RandomIsbn, _) => strings::random_isbn(rng).into(),
        (Action::RandomNumber, BoundArgs::IntRange { min, max }) => {
            Value::Int(rng.random_range(*min..=*max))
        }
        (Action::RandomDecimalNumber, BoundArgs::DecimalRange { min, max, precision }) => {
            let value = rng.random_range(*min..=*max);
            if *precision == 0 {
                Value::Int(value.round() as i64)
            } else {
                let scale = 10f64.powi(*precision as i32);
                Value::Float((value * scale).round() / scale)
            }
        }

        // Person (correlated within the row)
        (Action::RandomPersonGender, _) => ctx.person(rng).gender.into(),
        (Action::RandomPersonFirstName, _) => ctx.person(rng).first_name.into(),
        (Action::RandomPersonLastName, _) => ctx.person(rng).last_name.into(),
        (Action::RandomPersonFullName, _) => ctx.person(rng).full_name().into(),
        (Action::RandomPersonEmailFromName, _) => ctx.person(rng).email().into(),
        (Action::RandomPersonUsernameFromName, _) => ctx.person(rng).username().into(),
        (Action::RandomPersonAge, _) => Value::Int(ctx.person(rng).age),
        (Action::RandomPersonWeight, _) => Value::Int(ctx.person(rng).weight),
        (Action::RandomPersonHeight, _) => Value::Int(ctx.person(rng).height),

        // Calendar
        (Action::RandomDate, BoundArgs::DateRange { start, end, format }) => {
            calendar::random_date(rng, *start, *end, format).into()
        }
        (Action::RandomTime, BoundArgs::TimeRange { start, end, format }) => {
            calendar::random_time(rng, *start, *end, format).into()
        }
        (
            Action::RandomDateTime,
            BoundArgs::DateTimeRange {
                start_date,
                end_date,
                start_time,
                end_time,
                format,
            },
        ) => calendar::random_date_time(
            rng,
            *start_date,
            *end_date,
            *start_time,
            *end_time,
            format.as_deref(),
        )
        .into(),
        (Action::RandomUnixTimestamp, BoundArgs::TimestampRange { start, end }) => {
            Value::Int(calendar::random_timestamp(rng, *start, *end))
        }

        // Sequence: derived from the row index, so chunked or resumed
        // generation stays consistent
        (Action::SequentialNumber, BoundArgs::Sequence { start, interval }) => Value::Int(
            start.saturating_add((ctx.index() as i64).saturating_mul(*interval)),
        ),

        // Custom lists
        (Action::RandomCustomListItem, BoundArgs::Items(items)) => {
            custom_list::random_item(rng, items).into()
        }
        (Action::SequentialCustomListItem, BoundArgs::Items(items)) => {
            custom_list::sequential_item(items, ctx.index()).into()
        }

        // Field builder
        (Action::FieldJoin, BoundArgs::JoinTemplate(template)) => {
            field_builder::join(template, row).into()
        }

        // Resolver output never reaches here.
        _ => Value::Null,
    }
}
