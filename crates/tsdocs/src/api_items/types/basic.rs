use super::{delegate_type_to_base, ApiTypeBase};
use crate::api_items::{ApiContext, ReferenceRenderHandler, SerializedApiType};
use crate::model::ApiType;

/// Keyword and literal types: `string`, `42`, `"on"`.
pub struct ApiBasic<'a> {
    base: ApiTypeBase<'a>,
}

impl<'a> ApiBasic<'a> {
    pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
        Self {
            base: ApiTypeBase::new(ctx, api_type),
        }
    }
}

impl SerializedApiType for ApiBasic<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, _render: ReferenceRenderHandler<'_>) -> String {
        let api_type = self.base.api_type();
        api_type
            .keyword
            .clone()
            .unwrap_or_else(|| api_type.text.clone())
    }
}
