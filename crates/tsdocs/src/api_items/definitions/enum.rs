use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::helpers::tab;
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiEnum<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiEnum<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn members(&self) -> &[BoxedDefinition<'a>] {
        self.base.members()
    }
}

impl SerializedApiDefinition for ApiEnum<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let mut lines = vec![format!("enum {} {{", self.base.name())];
        lines.extend(
            self.members()
                .iter()
                .map(|member| format!("{}{},", tab(1), member.to_inline_text(render))),
        );
        lines.push("}".to_string());
        lines
    }
}

pub struct ApiEnumMember<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiEnumMember<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiEnumMember<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, _render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let line = match self.base.item().value.as_deref() {
            Some(value) => format!("{} = {value}", self.base.name()),
            None => self.base.name().to_string(),
        };
        vec![line]
    }
}
