use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::helpers::tab;
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiTypeAlias<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiTypeAlias<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiTypeAlias<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let head = format!(
            "type {}{} = ",
            self.base.name(),
            self.base.type_parameters_text(render)
        );

        let mut body = match self.base.item().r#type.as_ref() {
            Some(api_type) => self.base.ctx().serialize_type(api_type).to_text(render),
            None => vec![UNKNOWN_TYPE_KEYWORD.to_string()],
        };
        if body.is_empty() {
            body.push(UNKNOWN_TYPE_KEYWORD.to_string());
        }

        // Multi-line types continue under the first line.
        body[0] = format!("{head}{}", body[0]);
        if let Some(last) = body.last_mut() {
            last.push(';');
        }
        body
    }
}

/// Object type literal: `{ a: string; b?: number; }`.
pub struct ApiTypeLiteral<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiTypeLiteral<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn members(&self) -> &[BoxedDefinition<'a>] {
        self.base.members()
    }
}

impl SerializedApiDefinition for ApiTypeLiteral<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        if self.members().is_empty() {
            return vec!["{}".to_string()];
        }

        let mut lines = vec!["{".to_string()];
        lines.extend(
            self.members()
                .iter()
                .map(|member| format!("{}{}", tab(1), member.to_inline_text(render))),
        );
        lines.push("}".to_string());
        lines
    }
}
