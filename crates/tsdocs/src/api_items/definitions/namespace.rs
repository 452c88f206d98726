use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiNamespace<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiNamespace<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn members(&self) -> &[BoxedDefinition<'a>] {
        self.base.members()
    }
}

impl SerializedApiDefinition for ApiNamespace<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, _render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![format!("namespace {}", self.base.name())]
    }
}

const DEFAULT_DECLARATION_TYPE: &str = "const";

pub struct ApiVariable<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiVariable<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiVariable<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let declaration = item
            .variable_declaration_type
            .as_deref()
            .unwrap_or(DEFAULT_DECLARATION_TYPE);
        let initializer = item
            .initializer
            .as_deref()
            .map(|initializer| format!(" = {initializer}"))
            .unwrap_or_default();

        vec![format!(
            "{declaration} {}: {}{initializer};",
            self.base.name(),
            self.base.type_to_string(render, item.r#type.as_ref())
        )]
    }
}
