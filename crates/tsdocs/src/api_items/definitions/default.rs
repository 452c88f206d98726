use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::{ApiItemRecord, ApiItemReference};

/// Placeholder for item kinds without a registered wrapper.
pub struct ApiDefinitionDefault<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiDefinitionDefault<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiDefinitionDefault<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, _render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![UNKNOWN_TYPE_KEYWORD.to_string()]
    }
}
