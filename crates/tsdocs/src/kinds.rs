//! Kind tags for API items and type expressions.
//!
//! Both enumerations are closed: every tag the extractor is known to emit has
//! a variant, and anything else is preserved verbatim in `Unknown` so that a
//! newer extractor never breaks deserialization.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! kind_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Tag not known to this build.
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant,)+];

            /// Tag as emitted by the extractor.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $tag,)+
                    $name::Unknown(tag) => tag.as_str(),
                }
            }

            /// Parses a tag. Never fails; unrecognized tags become `Unknown`.
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $($tag => $name::$variant,)+
                    other => $name::Unknown(other.to_string()),
                }
            }

            /// Returns `true` for tags not known to this build.
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tag = String::deserialize(deserializer)?;
                Ok(Self::from_tag(&tag))
            }
        }
    };
}

kind_enum! {
    /// Kind of an API item record.
    pub enum ApiDefinitionKind {
        /// Plugin selector matching every item kind. Never emitted by the extractor.
        Any => "any",
        SourceFile => "source-file",
        Export => "export",
        ExportSpecifier => "export-specifier",
        ImportSpecifier => "import-specifier",
        ImportNamespace => "import-namespace",
        Namespace => "namespace",
        Class => "class",
        ClassConstructor => "class-constructor",
        ClassMethod => "class-method",
        ClassProperty => "class-property",
        GetAccessor => "get-accessor",
        SetAccessor => "set-accessor",
        Interface => "interface",
        Method => "method",
        Property => "property",
        Call => "call",
        Construct => "construct",
        Index => "index",
        Function => "function",
        FunctionType => "function-type",
        ConstructorType => "constructor-type",
        Parameter => "parameter",
        TypeParameter => "type-parameter",
        TypeAlias => "type-alias",
        TypeLiteral => "type-literal",
        ObjectLiteral => "object-literal",
        Mapped => "mapped",
        Enum => "enum",
        EnumMember => "enum-member",
        Variable => "variable",
    }
}

kind_enum! {
    /// Kind of a type expression record.
    pub enum ApiTypeKind {
        Basic => "basic",
        Reference => "reference",
        Union => "union",
        Intersection => "intersection",
        Array => "array",
        Tuple => "tuple",
        Parenthesized => "parenthesized",
        TypeOperator => "type-operator",
        IndexedAccess => "indexed-access",
        TypeQuery => "type-query",
        TypePredicate => "type-predicate",
        This => "this",
        TypeLiteral => "type-literal",
        Mapped => "mapped",
        FunctionType => "function-type",
        ConstructorType => "constructor-type",
    }
}

/// Keyword used wherever a type cannot be resolved.
pub const UNKNOWN_TYPE_KEYWORD: &str = "unknown";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_tag() {
        for kind in ApiDefinitionKind::KNOWN {
            assert_eq!(&ApiDefinitionKind::from_tag(kind.as_str()), kind);
        }
        for kind in ApiTypeKind::KNOWN {
            assert_eq!(&ApiTypeKind::from_tag(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let kind: ApiDefinitionKind = serde_json::from_str("\"decorator\"").unwrap();
        assert_eq!(kind, ApiDefinitionKind::Unknown("decorator".to_string()));
        assert!(kind.is_unknown());
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"decorator\"");
    }
}
