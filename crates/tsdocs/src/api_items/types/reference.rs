use super::{delegate_type_to_base, ApiTypeBase};
use crate::api_items::{ApiContext, ReferenceRenderHandler, SerializedApiType};
use crate::model::ApiType;

/// Reference to a named type, possibly generic: `Map<K, V>`.
pub struct ApiReference<'a> {
    base: ApiTypeBase<'a>,
}

impl<'a> ApiReference<'a> {
    pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
        Self {
            base: ApiTypeBase::new(ctx, api_type),
        }
    }

    /// Referenced name without type arguments.
    pub fn name(&self) -> &str {
        let api_type = self.base.api_type();
        match api_type.name_text.as_deref() {
            Some(name) => name,
            None => api_type
                .text
                .split_once('<')
                .map_or(api_type.text.as_str(), |(name, _)| name)
                .trim(),
        }
    }
}

impl SerializedApiType for ApiReference<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let reference_id = self.base.api_type().reference_id.as_deref();
        format!(
            "{}{}",
            render(self.name(), reference_id),
            self.base.type_arguments_text(render)
        )
    }

    fn to_heading_text(&self) -> String {
        self.name().to_string()
    }
}
