//! Row production: bound fields in, rows out.

use crate::generators::{car::CarSample, generate_value, person::PersonSample};
use crate::registry::BoundField;
use mockachu_core::{Action, Row, Value};
use rand::Rng;

/// Per-row generation context.
///
/// Carries the row index and the lazily drawn correlated samples: one
/// person, one location and one car per row, shared by every field of the
/// matching family so related fields agree with each other.
pub struct RowContext {
    index: u64,
    person: Option<PersonSample>,
    location: Option<&'static crate::data::City>,
    car: Option<CarSample>,
}

impl RowContext {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            person: None,
            location: None,
            car: None,
        }
    }

    /// Zero-based index of the row being generated.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The row's person, drawn on first use.
    pub fn person<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &PersonSample {
        if self.person.is_none() {
            self.person = Some(PersonSample::sample(rng));
        }
        self.person.as_ref().expect("just initialized")
    }

    /// The row's location, drawn on first use.
    pub fn location<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static crate::data::City {
        *self
            .location
            .get_or_insert_with(|| crate::generators::geo::sample_city(rng))
    }

    /// The row's car, drawn on first use.
    pub fn car<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &CarSample {
        if self.car.is_none() {
            self.car = Some(CarSample::sample(rng));
        }
        self.car.as_ref().expect("just initialized")
    }
}

/// Generate `rows` rows from the bound fields.
///
/// Fields generate in declared order with an independent nullability draw
/// per field per row. `FIELD_JOIN` fields are deferred until the rest of
/// the row exists, then spliced back into their declared position, so a
/// join can reference any non-join field regardless of declaration order.
pub fn produce<R: Rng + ?Sized>(fields: &[BoundField], rows: u64, rng: &mut R) -> Vec<Row> {
    let mut out = Vec::with_capacity(rows as usize);

    for index in 0..rows {
        let mut ctx = RowContext::new(index);
        let mut staging = Row::new();

        for field in fields {
            if field.action != Action::FieldJoin {
                let value = next_value(field, rng, &mut ctx, &staging);
                staging.insert(field.name.clone(), value);
            }
        }
        for field in fields {
            if field.action == Action::FieldJoin {
                let value = next_value(field, rng, &mut ctx, &staging);
                staging.insert(field.name.clone(), value);
            }
        }

        // Reassemble in declared order; duplicate names keep the first
        // position and the last generated value, like a plain dictionary.
        let mut row = Row::with_capacity(fields.len());
        for field in fields {
            if let Some(value) = staging.get(&field.name) {
                row.insert(field.name.clone(), value.clone());
            }
        }
        out.push(row);
    }

    out
}

/// One cell: nullability draw first, then the producer.
fn next_value<R: Rng + ?Sized>(
    field: &BoundField,
    rng: &mut R,
    ctx: &mut RowContext,
    row: &Row,
) -> Value {
    if rng.random_range(0..100) < field.nullable_percentage {
        return Value::Null;
    }
    generate_value(field, rng, ctx, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve;
    use mockachu_core::{FieldSpec, Generator, ParamValue, Value};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bind(specs: Vec<FieldSpec>) -> Vec<BoundField> {
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        specs
            .iter()
            .map(|spec| resolve(spec, &names).unwrap())
            .collect()
    }

    fn number_field(name: &str) -> FieldSpec {
        FieldSpec::new(name, Generator::StringGenerator, Action::RandomNumber)
            .with_parameters(vec![ParamValue::Int(1), ParamValue::Int(5)])
    }

    #[test]
    fn test_produces_exact_row_count_in_field_order() {
        let fields = bind(vec![
            number_field("b"),
            FieldSpec::new("a", Generator::GeoGenerator, Action::RandomCity),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let rows = produce(&fields, 7, &mut rng);

        assert_eq!(rows.len(), 7);
        for row in &rows {
            let keys: Vec<&String> = row.keys().collect();
            assert_eq!(keys, ["b", "a"]);
        }
    }

    #[test]
    fn test_values_respect_parameter_range() {
        let fields = bind(vec![number_field("n")]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 200, &mut rng) {
            match &row["n"] {
                Value::Int(n) => assert!((1..=5).contains(n)),
                other => panic!("expected integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nullable_extremes() {
        let fields = bind(vec![
            number_field("never").with_nullable(0),
            number_field("always").with_nullable(100),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 50, &mut rng) {
            assert!(!row["never"].is_null());
            assert!(row["always"].is_null());
        }
    }

    #[test]
    fn test_nullable_rate_converges() {
        let fields = bind(vec![number_field("half").with_nullable(50)]);
        let mut rng = StdRng::seed_from_u64(42);
        let rows = produce(&fields, 100_000, &mut rng);

        let nulls = rows.iter().filter(|row| row["half"].is_null()).count();
        let rate = nulls as f64 / rows.len() as f64;
        assert!(
            (rate - 0.5).abs() < 0.02,
            "null rate {rate} too far from 0.5"
        );
    }

    #[test]
    fn test_correlated_person_fields_agree() {
        let fields = bind(vec![
            FieldSpec::new("first", Generator::PersonGenerator, Action::RandomPersonFirstName),
            FieldSpec::new("last", Generator::PersonGenerator, Action::RandomPersonLastName),
            FieldSpec::new("full", Generator::PersonGenerator, Action::RandomPersonFullName),
            FieldSpec::new(
                "email",
                Generator::PersonGenerator,
                Action::RandomPersonEmailFromName,
            ),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 25, &mut rng) {
            let first = row["first"].render();
            let last = row["last"].render();
            assert_eq!(row["full"].render(), format!("{first} {last}"));
            assert!(row["email"]
                .render()
                .starts_with(&format!("{}.{}", first.to_lowercase(), last.to_lowercase())));
        }
    }

    #[test]
    fn test_correlated_geo_fields_agree() {
        let fields = bind(vec![
            FieldSpec::new("city", Generator::GeoGenerator, Action::RandomCity),
            FieldSpec::new("country", Generator::GeoGenerator, Action::RandomCountry),
            FieldSpec::new("iso2", Generator::GeoGenerator, Action::RandomCountryIsoCode2),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 25, &mut rng) {
            let entry = crate::data::geo::CITIES
                .iter()
                .find(|c| c.city == row["city"].render())
                .unwrap();
            assert_eq!(row["country"].render(), entry.country);
            assert_eq!(row["iso2"].render(), entry.iso_code_2);
        }
    }

    #[test]
    fn test_sequential_number_uses_row_index() {
        let fields = bind(vec![FieldSpec::new(
            "seq",
            Generator::SequenceGenerator,
            Action::SequentialNumber,
        )
        .with_parameters(vec![ParamValue::Int(10), ParamValue::Int(5)])]);
        let mut rng = StdRng::seed_from_u64(42);
        let rows = produce(&fields, 4, &mut rng);

        let values: Vec<i64> = rows
            .iter()
            .map(|row| match row["seq"] {
                Value::Int(n) => n,
                _ => panic!("expected integer"),
            })
            .collect();
        assert_eq!(values, [10, 15, 20, 25]);
    }

    #[test]
    fn test_field_join_reads_other_fields() {
        let fields = bind(vec![
            FieldSpec::new(
                "joined",
                Generator::FieldBuilderGenerator,
                Action::FieldJoin,
            )
            .with_parameters(vec![ParamValue::Str("{first}-{last}".into())]),
            FieldSpec::new("first", Generator::PersonGenerator, Action::RandomPersonFirstName),
            FieldSpec::new("last", Generator::PersonGenerator, Action::RandomPersonLastName),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 10, &mut rng) {
            // Join is declared first but still sees the other fields.
            let keys: Vec<&String> = row.keys().collect();
            assert_eq!(keys, ["joined", "first", "last"]);
            assert_eq!(
                row["joined"].render(),
                format!("{}-{}", row["first"].render(), row["last"].render())
            );
        }
    }

    #[test]
    fn test_join_renders_null_reference_as_empty() {
        let fields = bind(vec![
            number_field("maybe").with_nullable(100),
            FieldSpec::new("out", Generator::FieldBuilderGenerator, Action::FieldJoin)
                .with_parameters(vec![ParamValue::Str("<{maybe}>".into())]),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for row in produce(&fields, 5, &mut rng) {
            assert_eq!(row["out"].render(), "<>");
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let fields = bind(vec![
            FieldSpec::new("uuid", Generator::ItGenerator, Action::RandomUuidLowercase),
            number_field("n"),
        ]);
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(produce(&fields, 20, &mut rng1), produce(&fields, 20, &mut rng2));
    }

    #[test]
    fn test_duplicate_field_names_collapse() {
        let fields = bind(vec![number_field("n"), number_field("n")]);
        let mut rng = StdRng::seed_from_u64(42);
        let rows = produce(&fields, 3, &mut rng);
        for row in &rows {
            assert_eq!(row.len(), 1);
        }
    }
}
