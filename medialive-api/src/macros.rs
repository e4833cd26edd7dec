/// Declares a string-backed enumeration of wire values.
///
/// Each variant maps to exactly one wire string. Strings that are not known to
/// this crate are kept in the `Unknown` variant, so values sent by a newer
/// service version survive a deserialize/serialize round trip unchanged.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Value not recognized by this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// Every wire value known for this enumeration.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(value) => value,
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::from(value.as_str()) {
                    Self::Unknown(_) => Self::Unknown(value),
                    known => known,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::common::FieldValue for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_owned()
            }

            fn json_schema(
                _generator: &mut schemars::r#gen::SchemaGenerator,
            ) -> schemars::schema::Schema {
                schemars::schema::SchemaObject {
                    instance_type: Some(schemars::schema::InstanceType::String.into()),
                    enum_values: Some(
                        Self::VALUES
                            .iter()
                            .map(|value| serde_json::Value::from(*value))
                            .collect(),
                    ),
                    ..Default::default()
                }
                .into()
            }
        }
    };
}

/// Declares a record of optional fields.
///
/// Fields are written with their value type; the macro wraps every field in
/// `Option`, makes it public, omits `None` from serialized JSON and adds a
/// consuming wither with the same name as the field. Equality and hashing go
/// field by field through `FieldValue`, so float fields compare by bit
/// pattern and every record is `Eq + Hash`:
///
/// ```ignore
/// let settings = BurnInDestinationSettings::default()
///     .alignment(BurnInAlignment::Centered)
///     .font_size("auto");
/// assert_eq!(settings.font_size.as_deref(), Some("auto"));
/// ```
macro_rules! api_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                let _ = other;
                true $(&& $crate::common::FieldValue::field_eq(&self.$field, &other.$field))*
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                let _ = &state;
                $($crate::common::FieldValue::field_hash(&self.$field, state);)*
            }
        }

        impl $crate::common::FieldValue for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state)
            }
        }
    };
}

/// Adds tag-map helpers to a record with a `tags` field.
macro_rules! impl_tags {
    ($($name:ty),* $(,)?) => {
        $(
            impl $name {
                /// Inserts a single tag, creating the map on first use.
                ///
                /// Fails if `key` is already present, leaving the record
                /// untouched.
                pub fn add_tags_entry(
                    &mut self,
                    key: impl Into<String>,
                    value: impl Into<String>,
                ) -> Result<&mut Self, $crate::ModelError> {
                    $crate::common::insert_tag(&mut self.tags, key.into(), value.into())?;
                    Ok(self)
                }

                /// Removes all tags, leaving the field unset.
                pub fn clear_tags_entries(mut self) -> Self {
                    self.tags = None;
                    self
                }
            }
        )*
    };
}
