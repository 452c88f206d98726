use once_cell::unsync::OnceCell;

use super::{delegate_type_to_base, ApiTypeBase};
use crate::api_items::{ApiContext, BoxedDefinition, ReferenceRenderHandler, SerializedApiType};
use crate::model::{ApiItemReference, ApiType};

/// Type expression whose structure lives in a registry record: type
/// literals, mapped types, function and constructor types.
///
/// Falls back to the source text when the record cannot be resolved.
pub struct ApiDefinitionBackedType<'a> {
    base: ApiTypeBase<'a>,
    definition: OnceCell<Option<BoxedDefinition<'a>>>,
}

impl<'a> ApiDefinitionBackedType<'a> {
    pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
        Self {
            base: ApiTypeBase::new(ctx, api_type),
            definition: OnceCell::new(),
        }
    }

    pub fn definition(&self) -> Option<&BoxedDefinition<'a>> {
        self.definition
            .get_or_init(|| {
                let api_type = self.base.api_type();
                let ctx = self.base.ctx();
                let id = api_type.reference_id.as_ref()?;
                let record = ctx.resolve_item(id, &api_type.location)?;
                Some(ctx.serialize_definition(record, ApiItemReference::new(id.clone(), "")))
            })
            .as_ref()
    }
}

impl SerializedApiType for ApiDefinitionBackedType<'_> {
    delegate_type_to_base!();

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        match self.definition() {
            Some(definition) => definition.to_text(render),
            None => vec![self.base.api_type().text.clone()],
        }
    }

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        match self.definition() {
            Some(definition) => definition.to_inline_text(render),
            None => self.base.api_type().text.clone(),
        }
    }
}
