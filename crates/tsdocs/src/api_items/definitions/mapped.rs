use once_cell::unsync::OnceCell;
use tracing::Level;

use super::ApiTypeParameter;
use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::helpers::{log_with_location, tab};
use crate::kinds::UNKNOWN_TYPE_KEYWORD;
use crate::model::{ApiItemRecord, ApiItemReference};

/// Mapped type, e.g. `{ readonly [K in keyof T]?: T[K] }`.
pub struct ApiMapped<'a> {
    base: ApiDefinitionBase<'a>,
    type_parameter: OnceCell<Option<ApiTypeParameter<'a>>>,
}

impl<'a> ApiMapped<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
            type_parameter: OnceCell::new(),
        }
    }

    /// Type parameter the mapping iterates over, resolved once.
    pub fn type_parameter(&self) -> Option<&ApiTypeParameter<'a>> {
        self.type_parameter
            .get_or_init(|| {
                let item = self.base.item();
                let ctx = self.base.ctx();

                let resolved = item.type_parameter.as_ref().and_then(|id| {
                    let record = ctx.extracted_data.get(id)?;
                    Some(ApiTypeParameter::new(
                        ctx,
                        record,
                        ApiItemReference::new(id.clone(), &record.name),
                    ))
                });

                if resolved.is_none() {
                    log_with_location(Level::WARN, &item.location, "A type parameter is missing!");
                }
                resolved
            })
            .as_ref()
    }
}

impl SerializedApiDefinition for ApiMapped<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let readonly = if item.is_readonly { "readonly " } else { "" };
        let optional = if item.is_optional { "?" } else { "" };

        let type_parameter = match self.type_parameter() {
            Some(type_parameter) => type_parameter.to_mapped_text(render),
            None => UNKNOWN_TYPE_KEYWORD.to_string(),
        };
        let api_type = self.base.type_to_string(render, item.r#type.as_ref());

        vec![
            "{".to_string(),
            format!("{}{readonly}[{type_parameter}]{optional}: {api_type}", tab(1)),
            "}".to_string(),
        ]
    }
}
