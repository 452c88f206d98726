use super::{delegate_type_to_base, ApiTypeBase};
use crate::api_items::{ApiContext, ReferenceRenderHandler, SerializedApiType};
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::ApiType;

/// Placeholder for type kinds without a registered wrapper.
pub struct ApiTypeDefault<'a> {
    base: ApiTypeBase<'a>,
}

impl<'a> ApiTypeDefault<'a> {
    pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
        Self {
            base: ApiTypeBase::new(ctx, api_type),
        }
    }
}

impl SerializedApiType for ApiTypeDefault<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, _render: ReferenceRenderHandler<'_>) -> String {
        UNKNOWN_TYPE_KEYWORD.to_string()
    }

    fn to_heading_text(&self) -> String {
        UNKNOWN_TYPE_KEYWORD.to_string()
    }
}
