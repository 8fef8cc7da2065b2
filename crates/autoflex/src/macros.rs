//! Declarative macros that opt user types into reflection

/// Defines one or more structs and makes them convertible.
///
/// Field names are the Rust identifiers as written. Every field type must
/// implement [`Reflect`](crate::Reflect), and the struct must implement
/// `Default` so a fresh target can be built when it is nested.
///
/// ```ignore
/// autoflex::flex_struct! {
///     #[derive(Debug, Default)]
///     pub struct BotModel {
///         pub name: StringValue,
///         pub tags: MapValue,
///     }
///
///     #[derive(Debug, Default)]
///     pub struct BotInput {
///         pub name: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! flex_struct {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            $vis struct $name {
                $(
                    $(#[$field_meta])*
                    $field_vis $field: $ty,
                )*
            }

            $crate::__flex_struct_impl!($name { $($field),* });
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flex_struct_impl {
    ($name:ident { $($field:ident),* }) => {
        impl $crate::Struct for $name {
            fn struct_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[$(::core::stringify!($field)),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Reflect> {
                let _ = name;
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&self.$field);
                    }
                )*
                ::core::option::Option::None
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn $crate::Reflect> {
                let _ = name;
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&mut self.$field);
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl $crate::Reflect for $name {
            fn model(&self) -> $crate::Model {
                $crate::Model::Dto
            }

            fn value(&self) -> $crate::Value<'_> {
                $crate::Value::Object(self)
            }

            fn slot(&mut self) -> ::core::option::Option<$crate::Slot<'_>> {
                ::core::option::Option::Some($crate::Slot::Dto($crate::DtoSlot::Struct(self)))
            }

            fn as_struct(&self) -> ::core::option::Option<&dyn $crate::Struct> {
                ::core::option::Option::Some(self)
            }

            fn as_struct_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Struct> {
                ::core::option::Option::Some(self)
            }
        }

        impl $crate::reflect::StructSlot for $name {
            fn fill(
                &mut self,
                fill: &mut dyn FnMut(&mut dyn $crate::Struct) -> $crate::Result<()>,
            ) -> $crate::Result<()> {
                $crate::reflect::derive::fill_struct(self, fill)
            }
        }

        impl $crate::reflect::NullableElement for $name {
            fn present_value(&self) -> $crate::Value<'_> {
                $crate::Value::Object(self)
            }

            fn option_slot(option: &mut ::core::option::Option<Self>) -> $crate::Slot<'_> {
                $crate::reflect::derive::struct_option_slot(option)
            }
        }

        impl $crate::reflect::SeqElement for $name {
            fn seq_value(items: &[Self]) -> $crate::Value<'_> {
                $crate::reflect::derive::object_seq_value(items)
            }

            fn seq_slot(items: &mut ::std::vec::Vec<Self>) -> $crate::Slot<'_> {
                $crate::reflect::derive::struct_seq_slot(items)
            }

            fn option_seq_slot(
                items: &mut ::core::option::Option<::std::vec::Vec<Self>>,
            ) -> $crate::Slot<'_> {
                $crate::reflect::derive::struct_option_seq_slot(items)
            }
        }

        impl $crate::reflect::MapElement for $name {
            fn map_value(
                entries: &::std::collections::HashMap<::std::string::String, Self>,
            ) -> $crate::Value<'_> {
                $crate::reflect::derive::object_map_value(entries)
            }

            fn map_slot(
                entries: &mut ::std::collections::HashMap<::std::string::String, Self>,
            ) -> $crate::Slot<'_> {
                $crate::reflect::derive::struct_map_slot(entries)
            }

            fn option_map_slot(
                entries: &mut ::core::option::Option<
                    ::std::collections::HashMap<::std::string::String, Self>,
                >,
            ) -> $crate::Slot<'_> {
                $crate::reflect::derive::struct_option_map_slot(entries)
            }
        }
    };
}

/// Makes DTO string enums convertible.
///
/// Each type must implement [`StringEnum`](crate::attr::StringEnum).
///
/// ```ignore
/// autoflex::flex_enum!(SlotValueResolution, ObfuscationSetting);
/// ```
#[macro_export]
macro_rules! flex_enum {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $name {
                fn model(&self) -> $crate::Model {
                    $crate::Model::Dto
                }

                fn value(&self) -> $crate::Value<'_> {
                    $crate::reflect::derive::enum_value(self)
                }

                fn slot(&mut self) -> ::core::option::Option<$crate::Slot<'_>> {
                    ::core::option::Option::Some($crate::Slot::Dto($crate::DtoSlot::Enum(self)))
                }
            }

            impl $crate::reflect::EnumSlot for $name {
                fn set(&mut self, value: &str) {
                    *self = <$name as $crate::attr::StringEnum>::from_string_representation(value);
                }
            }

            impl $crate::reflect::NullableElement for $name {
                fn present_value(&self) -> $crate::Value<'_> {
                    $crate::reflect::derive::enum_value(self)
                }

                fn option_slot(option: &mut ::core::option::Option<Self>) -> $crate::Slot<'_> {
                    $crate::reflect::derive::enum_option_slot(option)
                }
            }
        )+
    };
}
