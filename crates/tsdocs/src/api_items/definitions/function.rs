use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiFunction<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiFunction<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn parameters(&self) -> &[BoxedDefinition<'a>] {
        self.base.parameters()
    }

    pub fn type_parameters(&self) -> &[BoxedDefinition<'a>] {
        self.base.type_parameters()
    }
}

impl SerializedApiDefinition for ApiFunction<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        format!("{}({})", self.base.name(), self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let async_keyword = if item.is_async { "async " } else { "" };

        vec![format!(
            "{async_keyword}function {}{}({}): {};",
            self.base.name(),
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base.type_to_string(render, item.return_type.as_ref())
        )]
    }
}

/// Function type literal, e.g. `(value: string) => void`.
pub struct ApiFunctionType<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiFunctionType<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiFunctionType<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![self.to_inline_text(render)]
    }

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        format!(
            "{}({}) => {}",
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base
                .type_to_string(render, self.base.item().return_type.as_ref())
        )
    }
}

/// Constructor type literal, e.g. `new (value: string) => Foo`.
pub struct ApiConstructorType<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiConstructorType<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiConstructorType<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![self.to_inline_text(render)]
    }

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        format!(
            "new {}({}) => {}",
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base
                .type_to_string(render, self.base.item().return_type.as_ref())
        )
    }
}

pub struct ApiParameter<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiParameter<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    /// Inline text of the parameter type.
    pub fn type_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        self.base.type_to_string(render, self.base.item().r#type.as_ref())
    }
}

impl SerializedApiDefinition for ApiParameter<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![self.to_inline_text(render)]
    }

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let item = self.base.item();
        let spread = if item.is_spread { "..." } else { "" };
        let optional = if item.is_optional { "?" } else { "" };
        let initializer = item
            .initializer
            .as_deref()
            .map(|initializer| format!(" = {initializer}"))
            .unwrap_or_default();

        format!(
            "{spread}{}{optional}: {}{initializer}",
            self.base.name(),
            self.type_text(render)
        )
    }
}

pub struct ApiTypeParameter<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiTypeParameter<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    /// Form used inside a mapped type: `K in keyof T`.
    pub fn to_mapped_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let item = self.base.item();
        match item.constraint_type.as_ref() {
            Some(constraint) => format!(
                "{} in {}",
                self.base.name(),
                self.base.type_to_string(render, Some(constraint))
            ),
            None => self.base.name().to_string(),
        }
    }
}

impl SerializedApiDefinition for ApiTypeParameter<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![self.to_inline_text(render)]
    }

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let item = self.base.item();
        let mut text = self.base.name().to_string();
        if let Some(constraint) = item.constraint_type.as_ref() {
            text.push_str(" extends ");
            text.push_str(&self.base.type_to_string(render, Some(constraint)));
        }
        if let Some(default_type) = item.default_type.as_ref() {
            text.push_str(" = ");
            text.push_str(&self.base.type_to_string(render, Some(default_type)));
        }
        text
    }
}
