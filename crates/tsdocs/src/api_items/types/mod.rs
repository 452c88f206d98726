//! Wrappers for type expressions.

mod basic;
mod composite;
mod default;
mod definition_backed;
mod reference;

pub use basic::ApiBasic;
pub use composite::{
    ApiArray, ApiIndexedAccess, ApiIntersection, ApiParenthesized, ApiThis, ApiTuple,
    ApiTypeOperator, ApiTypePredicate, ApiTypeQuery, ApiUnion,
};
pub use default::ApiTypeDefault;
pub use definition_backed::ApiDefinitionBackedType;
pub use reference::ApiReference;

use super::{ApiContext, ReferenceRenderHandler};
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::ApiType;

/// State shared by the type wrappers.
pub struct ApiTypeBase<'a> {
    ctx: ApiContext<'a>,
    api_type: &'a ApiType,
}

impl<'a> ApiTypeBase<'a> {
    pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
        Self { ctx, api_type }
    }

    pub fn ctx(&self) -> ApiContext<'a> {
        self.ctx
    }

    pub fn api_type(&self) -> &'a ApiType {
        self.api_type
    }

    /// Inline text of a nested type, or `unknown` when absent.
    pub fn nested_to_string(
        &self,
        render: ReferenceRenderHandler<'_>,
        nested: Option<&'a ApiType>,
    ) -> String {
        match nested {
            Some(nested) => self.ctx.serialize_type(nested).to_inline_text(render),
            None => UNKNOWN_TYPE_KEYWORD.to_string(),
        }
    }

    /// Inline texts of the `Members` list.
    pub fn members_to_strings(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        self.api_type
            .members
            .iter()
            .map(|member| self.ctx.serialize_type(member).to_inline_text(render))
            .collect()
    }

    /// `<A, B>` from `TypeParameters`, or an empty string.
    pub fn type_arguments_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        match self.api_type.type_parameters.as_deref() {
            Some(arguments) if !arguments.is_empty() => {
                let rendered: Vec<String> = arguments
                    .iter()
                    .map(|argument| self.ctx.serialize_type(argument).to_inline_text(render))
                    .collect();
                format!("<{}>", rendered.join(", "))
            }
            _ => String::new(),
        }
    }
}

macro_rules! delegate_type_to_base {
    () => {
        fn api_type(&self) -> &$crate::model::ApiType {
            self.base.api_type()
        }
    };
}

pub(crate) use delegate_type_to_base;
