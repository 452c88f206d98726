//! Kind-to-wrapper dispatch.
//!
//! The factory owns two tables mapping a kind tag to the constructor of its
//! serialized wrapper. Lookups never fail: unknown kinds are logged with the
//! record's location and rendered through a placeholder wrapper.

use indexmap::IndexMap;
use tracing::Level;

use crate::api_items::definitions::*;
use crate::api_items::types::*;
use crate::api_items::{ApiContext, BoxedDefinition, BoxedType};
use crate::helpers::log_with_location;
use crate::kinds::{ApiDefinitionKind, ApiTypeKind};
use crate::model::{ApiItemRecord, ApiItemReference, ApiType};

/// Builds the wrapper for one item record.
pub type DefinitionConstructor =
    for<'a> fn(ApiContext<'a>, &'a ApiItemRecord, ApiItemReference) -> BoxedDefinition<'a>;

/// Builds the wrapper for one type expression.
pub type TypeConstructor = for<'a> fn(ApiContext<'a>, &'a ApiType) -> BoxedType<'a>;

macro_rules! definition_constructor {
    ($wrapper:ident) => {{
        fn construct<'a>(
            ctx: ApiContext<'a>,
            item: &'a ApiItemRecord,
            reference: ApiItemReference,
        ) -> BoxedDefinition<'a> {
            Box::new($wrapper::new(ctx, item, reference))
        }
        construct as DefinitionConstructor
    }};
}

macro_rules! type_constructor {
    ($wrapper:ident) => {{
        fn construct<'a>(ctx: ApiContext<'a>, api_type: &'a ApiType) -> BoxedType<'a> {
            Box::new($wrapper::new(ctx, api_type))
        }
        construct as TypeConstructor
    }};
}

/// Dispatch tables for item and type wrappers.
#[derive(Clone)]
pub struct SerializerFactory {
    definitions: IndexMap<ApiDefinitionKind, DefinitionConstructor>,
    types: IndexMap<ApiTypeKind, TypeConstructor>,
}

impl SerializerFactory {
    /// Factory with every built-in wrapper registered.
    pub fn new() -> Self {
        let mut factory = Self::empty();

        factory.register_definition(ApiDefinitionKind::Class, definition_constructor!(ApiClass));
        factory.register_definition(
            ApiDefinitionKind::ClassConstructor,
            definition_constructor!(ApiClassConstructor),
        );
        factory.register_definition(
            ApiDefinitionKind::ClassMethod,
            definition_constructor!(ApiClassMethod),
        );
        factory.register_definition(
            ApiDefinitionKind::ClassProperty,
            definition_constructor!(ApiClassProperty),
        );
        factory.register_definition(ApiDefinitionKind::GetAccessor, definition_constructor!(ApiAccessor));
        factory.register_definition(ApiDefinitionKind::SetAccessor, definition_constructor!(ApiAccessor));
        factory.register_definition(ApiDefinitionKind::Interface, definition_constructor!(ApiInterface));
        factory.register_definition(ApiDefinitionKind::Method, definition_constructor!(ApiMethod));
        factory.register_definition(ApiDefinitionKind::Property, definition_constructor!(ApiProperty));
        factory.register_definition(ApiDefinitionKind::Call, definition_constructor!(ApiCall));
        factory.register_definition(ApiDefinitionKind::Construct, definition_constructor!(ApiConstruct));
        factory.register_definition(ApiDefinitionKind::Index, definition_constructor!(ApiIndex));
        factory.register_definition(ApiDefinitionKind::Function, definition_constructor!(ApiFunction));
        factory.register_definition(
            ApiDefinitionKind::FunctionType,
            definition_constructor!(ApiFunctionType),
        );
        factory.register_definition(
            ApiDefinitionKind::ConstructorType,
            definition_constructor!(ApiConstructorType),
        );
        factory.register_definition(ApiDefinitionKind::Parameter, definition_constructor!(ApiParameter));
        factory.register_definition(
            ApiDefinitionKind::TypeParameter,
            definition_constructor!(ApiTypeParameter),
        );
        factory.register_definition(ApiDefinitionKind::TypeAlias, definition_constructor!(ApiTypeAlias));
        factory.register_definition(
            ApiDefinitionKind::TypeLiteral,
            definition_constructor!(ApiTypeLiteral),
        );
        factory.register_definition(
            ApiDefinitionKind::ObjectLiteral,
            definition_constructor!(ApiTypeLiteral),
        );
        factory.register_definition(ApiDefinitionKind::Mapped, definition_constructor!(ApiMapped));
        factory.register_definition(ApiDefinitionKind::Enum, definition_constructor!(ApiEnum));
        factory.register_definition(ApiDefinitionKind::EnumMember, definition_constructor!(ApiEnumMember));
        factory.register_definition(ApiDefinitionKind::Namespace, definition_constructor!(ApiNamespace));
        factory.register_definition(ApiDefinitionKind::Variable, definition_constructor!(ApiVariable));

        factory.register_type(ApiTypeKind::Basic, type_constructor!(ApiBasic));
        factory.register_type(ApiTypeKind::Reference, type_constructor!(ApiReference));
        factory.register_type(ApiTypeKind::Union, type_constructor!(ApiUnion));
        factory.register_type(ApiTypeKind::Intersection, type_constructor!(ApiIntersection));
        factory.register_type(ApiTypeKind::Array, type_constructor!(ApiArray));
        factory.register_type(ApiTypeKind::Tuple, type_constructor!(ApiTuple));
        factory.register_type(ApiTypeKind::Parenthesized, type_constructor!(ApiParenthesized));
        factory.register_type(ApiTypeKind::TypeOperator, type_constructor!(ApiTypeOperator));
        factory.register_type(ApiTypeKind::IndexedAccess, type_constructor!(ApiIndexedAccess));
        factory.register_type(ApiTypeKind::TypeQuery, type_constructor!(ApiTypeQuery));
        factory.register_type(ApiTypeKind::TypePredicate, type_constructor!(ApiTypePredicate));
        factory.register_type(ApiTypeKind::This, type_constructor!(ApiThis));
        factory.register_type(ApiTypeKind::TypeLiteral, type_constructor!(ApiDefinitionBackedType));
        factory.register_type(ApiTypeKind::Mapped, type_constructor!(ApiDefinitionBackedType));
        factory.register_type(ApiTypeKind::FunctionType, type_constructor!(ApiDefinitionBackedType));
        factory.register_type(
            ApiTypeKind::ConstructorType,
            type_constructor!(ApiDefinitionBackedType),
        );

        factory
    }

    /// Factory with no registrations. Every lookup falls back to the default wrappers.
    pub fn empty() -> Self {
        Self {
            definitions: IndexMap::new(),
            types: IndexMap::new(),
        }
    }

    /// Registers or replaces the wrapper for an item kind.
    pub fn register_definition(&mut self, kind: ApiDefinitionKind, constructor: DefinitionConstructor) {
        self.definitions.insert(kind, constructor);
    }

    /// Registers or replaces the wrapper for a type kind.
    pub fn register_type(&mut self, kind: ApiTypeKind, constructor: TypeConstructor) {
        self.types.insert(kind, constructor);
    }

    pub fn supports_definition(&self, kind: &ApiDefinitionKind) -> bool {
        self.definitions.contains_key(kind)
    }

    pub fn supports_type(&self, kind: &ApiTypeKind) -> bool {
        self.types.contains_key(kind)
    }

    /// Registered item kinds, in registration order.
    pub fn definition_kinds(&self) -> impl Iterator<Item = &ApiDefinitionKind> {
        self.definitions.keys()
    }

    /// Registered type kinds, in registration order.
    pub fn type_kinds(&self) -> impl Iterator<Item = &ApiTypeKind> {
        self.types.keys()
    }

    /// Wraps an item record. Unknown kinds warn and yield [`ApiDefinitionDefault`].
    pub fn serialize_api_definition<'a>(
        &self,
        ctx: ApiContext<'a>,
        item: &'a ApiItemRecord,
        reference: ApiItemReference,
    ) -> BoxedDefinition<'a> {
        match self.definitions.get(&item.api_kind) {
            Some(constructor) => constructor(ctx, item, reference),
            None => {
                log_with_location(
                    Level::WARN,
                    &item.location,
                    &format!("\"{}\" is not supported!", item.api_kind),
                );
                Box::new(ApiDefinitionDefault::new(ctx, item, reference))
            }
        }
    }

    /// Wraps a type expression. Unknown kinds log an error and yield [`ApiTypeDefault`].
    pub fn serialize_api_type<'a>(&self, ctx: ApiContext<'a>, api_type: &'a ApiType) -> BoxedType<'a> {
        match self.types.get(&api_type.api_type_kind) {
            Some(constructor) => constructor(ctx, api_type),
            None => {
                log_with_location(
                    Level::ERROR,
                    &api_type.location,
                    &format!("\"{}\" is not supported!", api_type.api_type_kind),
                );
                Box::new(ApiTypeDefault::new(ctx, api_type))
            }
        }
    }
}

impl Default for SerializerFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_items::default_reference_renderer;
    use crate::model::{ExtractDto, Location};
    use crate::test_utils::{capture_logs, record, RegistryBuilder};

    #[test]
    fn test_builtin_kinds_are_registered() {
        let factory = SerializerFactory::new();
        assert!(factory.supports_definition(&ApiDefinitionKind::Class));
        assert!(factory.supports_definition(&ApiDefinitionKind::SetAccessor));
        assert!(factory.supports_type(&ApiTypeKind::Mapped));
        assert!(!factory.supports_definition(&ApiDefinitionKind::SourceFile));
        assert!(!factory.supports_definition(&ApiDefinitionKind::Any));
    }

    #[test]
    fn test_every_registered_kind_renders_a_heading() {
        let factory = SerializerFactory::new();
        let extract = ExtractDto::default();
        let ctx = ApiContext::new(&extract, &factory);

        for kind in factory.definition_kinds() {
            let item = record(kind.clone(), "Sample");
            let (heading, _) = capture_logs(|| {
                let wrapper = ctx.serialize_definition(&item, ApiItemReference::new("1", ""));
                let _ = wrapper.to_text(&default_reference_renderer);
                wrapper.to_heading_text()
            });
            assert!(!heading.is_empty(), "empty heading for {kind}");
        }
    }

    #[test]
    fn test_unknown_definition_kind_warns_once() {
        let factory = SerializerFactory::new();
        let extract = RegistryBuilder::new().build();
        let ctx = ApiContext::new(&extract, &factory);

        let mut item = record(ApiDefinitionKind::from_tag("decorator"), "sealed");
        item.location = Location::new("src/decorators.ts", 4, 2);

        let (text, logs) = capture_logs(|| {
            ctx.serialize_definition(&item, ApiItemReference::new("1", ""))
                .to_text(&default_reference_renderer)
        });

        assert_eq!(text, vec!["unknown"]);
        assert_eq!(logs.warnings().len(), 1);
        assert_eq!(
            logs.warnings()[0],
            "src/decorators.ts(5,2): \"decorator\" is not supported!"
        );
    }

    #[test]
    fn test_unknown_type_kind_logs_error() {
        let factory = SerializerFactory::new();
        let extract = ExtractDto::default();
        let ctx = ApiContext::new(&extract, &factory);
        let api_type = ApiType::new(ApiTypeKind::from_tag("conditional"), "T extends U ? X : Y");

        let (text, logs) = capture_logs(|| {
            ctx.serialize_type(&api_type)
                .to_inline_text(&default_reference_renderer)
        });

        assert_eq!(text, "unknown");
        assert_eq!(logs.errors().len(), 1);
        assert!(logs.warnings().is_empty());
    }

    #[test]
    fn test_register_replaces_constructor() {
        let mut factory = SerializerFactory::empty();
        assert!(!factory.supports_definition(&ApiDefinitionKind::Class));

        factory.register_definition(ApiDefinitionKind::Class, definition_constructor!(ApiNamespace));
        let extract = ExtractDto::default();
        let ctx = ApiContext::new(&extract, &factory);
        let item = record(ApiDefinitionKind::Class, "Widget");

        let text = ctx
            .serialize_definition(&item, ApiItemReference::new("1", ""))
            .to_text(&default_reference_renderer);
        assert_eq!(text, vec!["namespace Widget"]);
    }
}
