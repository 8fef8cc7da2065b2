#![allow(dead_code)]

use autoflex::attr::{
    ArnValue, BoolValue, Float64Value, HasStringRepresentation, Int64Value, ListNestedObjectValue,
    ListValue, MapValue, ObjectValue, Rfc3339Value, SetNestedObjectValue, SetValue, StringEnum,
    StringEnumValue, StringValue,
};
use autoflex::{Diagnostics, Severity, flex_enum, flex_struct};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

pub const TEST_ARN: &str =
    "arn:aws:securityhub:us-west-2:1234567890:control/cis-aws-foundations-benchmark/v/1.2.0/1.1";

/// Routes engine logs through the test harness; `RUST_LOG=autoflex=trace`
/// shows field resolution.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn errors(diags: &Diagnostics) -> Vec<String> {
    diags
        .iter()
        .filter(|diag| diag.severity == Severity::Error)
        .map(|diag| diag.detail.clone())
        .collect()
}

pub fn assert_clean(diags: &Diagnostics) {
    assert!(diags.is_empty(), "unexpected diagnostics:\n{diags}");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotShape {
    #[default]
    Unset,
    Scalar,
    List,
    Other(String),
}

impl HasStringRepresentation for SlotShape {
    fn string_representation(&self) -> Cow<'_, str> {
        match self {
            SlotShape::Unset => Cow::Borrowed(""),
            SlotShape::Scalar => Cow::Borrowed("Scalar"),
            SlotShape::List => Cow::Borrowed("List"),
            SlotShape::Other(value) => Cow::Borrowed(value),
        }
    }
}

impl StringEnum for SlotShape {
    fn from_string_representation(value: &str) -> Self {
        match value {
            "" => SlotShape::Unset,
            "Scalar" => SlotShape::Scalar,
            "List" => SlotShape::List,
            other => SlotShape::Other(other.to_string()),
        }
    }
}

flex_enum!(SlotShape);

flex_struct! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Empty {}

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct StringModel {
        pub field1: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IntModel {
        pub field1: Int64Value,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct StringInput {
        pub field1: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct OptionStringInput {
        pub field1: Option<String>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IntInput {
        pub field1: i64,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ScalarModel {
        pub field1: StringValue,
        pub field2: StringValue,
        pub field3: Int64Value,
        pub field4: Int64Value,
        pub field5: Int64Value,
        pub field6: Int64Value,
        pub field7: Float64Value,
        pub field8: Float64Value,
        pub field9: Float64Value,
        pub field10: Float64Value,
        pub field11: BoolValue,
        pub field12: BoolValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ScalarInput {
        pub field1: String,
        pub field2: Option<String>,
        pub field3: i32,
        pub field4: Option<i32>,
        pub field5: i64,
        pub field6: Option<i64>,
        pub field7: f32,
        pub field8: Option<f32>,
        pub field9: f64,
        pub field10: Option<f64>,
        pub field11: bool,
        pub field12: Option<bool>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CollectionModel {
        pub field1: ListValue,
        pub field2: ListValue,
        pub field3: SetValue,
        pub field4: SetValue,
        pub field5: MapValue,
        pub field6: MapValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CollectionInput {
        pub field1: Vec<String>,
        pub field2: Vec<Option<String>>,
        pub field3: Vec<String>,
        pub field4: Vec<Option<String>>,
        pub field5: HashMap<String, String>,
        pub field6: HashMap<String, Option<String>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ListNestedModel {
        pub field1: ListNestedObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SetNestedModel {
        pub field1: SetNestedObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ObjectModel {
        pub field1: ObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct BoxedInput {
        pub field1: Option<Box<StringInput>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ValueInput {
        pub field1: StringInput,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct BoxedSeqInput {
        pub field1: Vec<Box<StringInput>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SeqInput {
        pub field1: Vec<StringInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MixedModel {
        pub field1: StringValue,
        pub field2: ListNestedObjectValue<BoxedModel>,
        pub field3: MapValue,
        pub field4: SetNestedObjectValue<IntModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct BoxedModel {
        pub field1: ListNestedObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MixedInput {
        pub field1: String,
        pub field2: Option<Box<BoxedInput>>,
        pub field3: HashMap<String, Option<String>>,
        pub field4: Vec<IntInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SingularModel {
        pub field: ListNestedObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PluralInput {
        pub fields: Vec<StringInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IrregularModel {
        pub city: ListValue,
        pub coach: ListValue,
        pub tomato: ListValue,
        pub vertex: ListValue,
        pub criterion: ListValue,
        pub datum: ListValue,
        pub hive: ListValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IrregularInput {
        pub cities: Vec<Option<String>>,
        pub coaches: Vec<Option<String>>,
        pub tomatoes: Vec<Option<String>>,
        pub vertices: Vec<Option<String>>,
        pub criteria: Vec<Option<String>>,
        pub data: Vec<Option<String>>,
        pub hives: Vec<Option<String>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ShadowModel {
        pub value: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ShadowInput {
        pub value: String,
        pub values: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UrlModel {
        pub field_url: StringValue,
    }

    #[allow(non_snake_case)]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UrlInput {
        pub FieldUrl: Option<String>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct NameModel {
        pub name: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IntentInput {
        pub intent_name: Option<String>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TimeModel {
        pub creation_date_time: Rfc3339Value,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TimeInput {
        pub creation_date_time: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ZeroTimeInput {
        pub creation_date_time: DateTime<Utc>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ArnModel {
        pub field1: ArnValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TaggedModel {
        pub name: StringValue,
        pub tags: MapValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TaggedInput {
        pub name: Option<String>,
        pub tags: HashMap<String, String>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockModel {
        pub map_block: ListNestedObjectValue<MapBlockElementModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockSetModel {
        pub map_block: SetNestedObjectValue<MapBlockElementModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockElementModel {
        pub map_block_key: StringValue,
        pub attr1: StringValue,
        pub attr2: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockEnumModel {
        pub map_block: ListNestedObjectValue<MapBlockEnumElementModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockEnumElementModel {
        pub map_block_key: StringEnumValue<SlotShape>,
        pub attr1: StringValue,
        pub attr2: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UnkeyedMapBlockModel {
        pub map_block: ListNestedObjectValue<StringModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockInput {
        pub map_block: HashMap<String, MapBlockElementInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockBoxedInput {
        pub map_block: HashMap<String, Box<MapBlockElementInput>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MapBlockElementInput {
        pub attr1: String,
        pub attr2: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct EnumModel {
        pub shape: StringEnumValue<SlotShape>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct EnumInput {
        pub shape: SlotShape,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DialogStateModel {
        pub dialog_action: ObjectValue<DialogActionModel>,
        pub intent: ObjectValue<IntentOverrideModel>,
        pub session_attributes: MapValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DialogActionModel {
        pub shape: StringEnumValue<SlotShape>,
        pub slot_to_elicit: StringValue,
        pub suppress_next_message: BoolValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IntentOverrideModel {
        pub name: StringValue,
        pub slots: ListNestedObjectValue<SlotValueOverrideModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SlotValueOverrideModel {
        pub map_block_key: StringValue,
        pub shape: StringEnumValue<SlotShape>,
        pub value: ListNestedObjectValue<SlotValueModel>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SlotValueModel {
        pub interpreted_value: StringValue,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DialogStateInput {
        pub dialog_action: Option<Box<DialogActionInput>>,
        pub intent: Option<Box<IntentOverrideInput>>,
        pub session_attributes: HashMap<String, String>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DialogActionInput {
        pub shape: SlotShape,
        pub slot_to_elicit: Option<String>,
        pub suppress_next_message: Option<bool>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IntentOverrideInput {
        pub name: Option<String>,
        pub slots: HashMap<String, SlotValueOverrideInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SlotValueOverrideInput {
        pub shape: SlotShape,
        pub value: Option<Box<SlotValueInput>>,
        pub values: Vec<SlotValueOverrideInput>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SlotValueInput {
        pub interpreted_value: Option<String>,
    }
}
