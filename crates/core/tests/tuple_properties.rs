//! Property-based tests for tuple descriptors and tuples.

use proptest::prelude::*;
use tessera_core::schema::{TupleDesc, TupleDescBuilder};
use tessera_core::{DataType, Error, Tuple, Value};

/// Strategy for generating a single field type.
fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Boolean),
        Just(DataType::Int32),
        Just(DataType::Int64),
        Just(DataType::Float64),
        Just(DataType::DateTime),
        Just(DataType::String),
    ]
}

/// Strategy for generating a descriptor with optional, possibly repeated names.
fn desc_strategy(max_fields: usize) -> impl Strategy<Value = TupleDesc> {
    prop::collection::vec(
        (data_type_strategy(), prop::option::of("[a-c]{1,2}")),
        0..max_fields,
    )
    .prop_map(|fields| {
        let (types, names): (Vec<_>, Vec<_>) = fields.into_iter().unzip();
        TupleDesc::new(&types, &names).unwrap()
    })
}

/// Strategy for generating a value that renders without tabs or newlines.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i32>().prop_map(Value::Int32),
        any::<i64>().prop_map(Value::Int64),
        (-1.0e6f64..1.0e6).prop_map(Value::Float64),
        any::<i64>().prop_map(Value::DateTime),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    /// Property: merge concatenates fields positionally.
    #[test]
    fn merge_concatenates_fields(a in desc_strategy(8), b in desc_strategy(8)) {
        let merged = TupleDesc::merge(&a, &b);
        prop_assert_eq!(merged.num_fields(), a.num_fields() + b.num_fields());

        for i in 0..merged.num_fields() {
            let expected = if i < a.num_fields() {
                a.field_type(i).unwrap()
            } else {
                b.field_type(i - a.num_fields()).unwrap()
            };
            prop_assert_eq!(merged.field_type(i).unwrap(), expected);
        }
    }

    /// Property: byte size of a merge is the sum of both byte sizes.
    #[test]
    fn merge_adds_byte_sizes(a in desc_strategy(8), b in desc_strategy(8)) {
        let merged = TupleDesc::merge(&a, &b);
        prop_assert_eq!(merged.byte_size(), a.byte_size() + b.byte_size());
    }

    /// Property: equality depends on types only.
    #[test]
    fn equality_ignores_names(desc in desc_strategy(8)) {
        let types: Vec<DataType> = desc.types().collect();
        prop_assert_eq!(TupleDesc::unnamed(&types), desc);
    }

    /// Property: index_of returns the earliest field carrying the name.
    #[test]
    fn index_of_returns_first_match(desc in desc_strategy(10), name in "[a-c]{1,2}") {
        let expected = (0..desc.num_fields()).find(|&i| desc.field_name(i).unwrap() == Some(name.as_str()));
        match expected {
            Some(i) => prop_assert_eq!(desc.index_of(&name).unwrap(), i),
            None => prop_assert!(desc.index_of(&name).unwrap_err().is_not_found()),
        }
    }

    /// Property: lookups past the last field fail with not-found.
    #[test]
    fn out_of_range_lookups_fail(desc in desc_strategy(8), extra in 0usize..4) {
        let i = desc.num_fields() + extra;
        prop_assert!(desc.field_type(i).unwrap_err().is_not_found());
        prop_assert!(desc.field_name(i).unwrap_err().is_not_found());
    }

    /// Property: a value set in a slot is read back unchanged.
    #[test]
    fn set_then_get_returns_value(
        desc in desc_strategy(8),
        values in prop::collection::vec(value_strategy(), 8),
    ) {
        let mut tuple = Tuple::new(desc.into_ref());
        for i in 0..tuple.len() {
            tuple.set_field(i, values[i].clone()).unwrap();
        }
        for i in 0..tuple.len() {
            prop_assert_eq!(tuple.get_field(i).unwrap(), Some(&values[i]));
        }
        prop_assert_eq!(
            tuple.get_field(tuple.len()).unwrap_err(),
            Error::index_out_of_range(tuple.len(), tuple.len())
        );
    }

    /// Property: render emits one tab between values and one trailing newline.
    #[test]
    fn render_separators(
        desc in desc_strategy(8).prop_filter("at least one field", |d| !d.is_empty()),
        values in prop::collection::vec(value_strategy(), 8),
    ) {
        let n = desc.num_fields();
        let tuple = Tuple::from_values(desc.into_ref(), values[..n].to_vec()).unwrap();
        let line = tuple.render();

        prop_assert!(line.ends_with('\n'));
        prop_assert!(!line[..line.len() - 1].contains('\n'));
        prop_assert_eq!(line.matches('\t').count(), n - 1);

        let expected: Vec<String> = values[..n].iter().map(ToString::to_string).collect();
        prop_assert_eq!(line, format!("{}\n", expected.join("\t")));
    }
}

#[test]
fn builder_without_types_fails() {
    let err = TupleDescBuilder::new()
        .names([Some("id")])
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn scenario_construct_and_render() {
    let desc = TupleDesc::new(&[DataType::Int32, DataType::String], &[Some("id"), Some("name")])
        .unwrap()
        .into_ref();
    assert_eq!(desc.num_fields(), 2);
    assert_eq!(desc.field_type(0).unwrap(), DataType::Int32);

    let mut tuple = Tuple::new(desc.clone());
    tuple.set_field(0, Value::Int32(5)).unwrap();
    tuple.set_field(1, Value::from("abc")).unwrap();
    assert_eq!(tuple.render(), "5\tabc\n");

    assert!(desc.index_of("missing").unwrap_err().is_not_found());
}

#[test]
fn scenario_merge_and_equality() {
    let a = TupleDesc::new(&[DataType::Int32], &[Some("a")]).unwrap();
    let b = TupleDesc::new(&[DataType::String], &[Some("b")]).unwrap();
    let merged = TupleDesc::merge(&a, &b);
    assert_eq!(merged.types().collect::<Vec<_>>(), [DataType::Int32, DataType::String]);
    assert_eq!(merged.field_name(0).unwrap(), Some("a"));
    assert_eq!(merged.field_name(1).unwrap(), Some("b"));

    let unnamed = TupleDesc::unnamed(&[DataType::Int32, DataType::String]);
    let named = TupleDesc::new(&[DataType::Int32, DataType::String], &[Some("x"), Some("y")]).unwrap();
    assert_eq!(unnamed, named);
}
