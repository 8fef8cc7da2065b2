mod common;

use autoflex::{expand, flatten};
use common::*;
use proptest::prelude::*;
use std::collections::HashMap;

fn scalar_input() -> impl Strategy<Value = ScalarInput> {
    (
        (".*", proptest::option::of(".*"), any::<i32>(), proptest::option::of(any::<i32>())),
        (any::<i64>(), proptest::option::of(any::<i64>())),
        (-1.0e6_f32..1.0e6_f32, proptest::option::of(-1.0e6_f32..1.0e6_f32)),
        (-1.0e12_f64..1.0e12_f64, proptest::option::of(-1.0e12_f64..1.0e12_f64)),
        (any::<bool>(), proptest::option::of(any::<bool>())),
    )
        .prop_map(
            |(
                (field1, field2, field3, field4),
                (field5, field6),
                (field7, field8),
                (field9, field10),
                (field11, field12),
            )| ScalarInput {
                field1,
                field2,
                field3,
                field4,
                field5,
                field6,
                field7,
                field8,
                field9,
                field10,
                field11,
                field12,
            },
        )
}

fn map_block_input() -> impl Strategy<Value = MapBlockInput> {
    proptest::collection::hash_map("[a-z]{1,6}", ("[a-z]{0,4}", "[a-z]{0,4}"), 0..5).prop_map(
        |entries| MapBlockInput {
            map_block: entries
                .into_iter()
                .map(|(key, (attr1, attr2))| (key, MapBlockElementInput { attr1, attr2 }))
                .collect::<HashMap<_, _>>(),
        },
    )
}

proptest! {
    #[test]
    fn prop_scalars_survive_flatten_then_expand(input in scalar_input()) {
        let mut model = ScalarModel::default();
        prop_assert!(flatten(&input, &mut model).is_empty());

        let mut output = ScalarInput::default();
        prop_assert!(expand(&model, &mut output).is_empty());
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_map_blocks_survive_flatten_then_expand(input in map_block_input()) {
        let mut model = MapBlockModel::default();
        prop_assert!(flatten(&input, &mut model).is_empty());

        let mut output = MapBlockInput::default();
        prop_assert!(expand(&model, &mut output).is_empty());
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_collections_survive_flatten_then_expand(
        field1 in proptest::collection::vec(".*", 0..4),
        field2 in proptest::collection::vec(proptest::option::of(".*"), 0..4),
        field6 in proptest::collection::hash_map(".*", proptest::option::of(".*"), 0..4),
    ) {
        let input = CollectionInput {
            field1,
            field2,
            field6,
            ..Default::default()
        };
        let mut model = CollectionModel::default();
        prop_assert!(flatten(&input, &mut model).is_empty());

        let mut output = CollectionInput::default();
        prop_assert!(expand(&model, &mut output).is_empty());
        prop_assert_eq!(output, input);
    }
}
