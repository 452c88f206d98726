use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiClass<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiClass<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    /// Resolved class members in declaration order.
    pub fn members(&self) -> &[crate::api_items::BoxedDefinition<'a>] {
        self.base.members()
    }
}

impl SerializedApiDefinition for ApiClass<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let ctx = self.base.ctx();

        let mut line = String::new();
        if item.is_abstract {
            line.push_str("abstract ");
        }
        line.push_str("class ");
        line.push_str(self.base.name());
        line.push_str(&self.base.type_parameters_text(render));

        if let Some(extends) = item.extends.first() {
            line.push_str(" extends ");
            line.push_str(&ctx.serialize_type(extends).to_inline_text(render));
        }
        if !item.implements.is_empty() {
            let implements: Vec<String> = item
                .implements
                .iter()
                .map(|api_type| ctx.serialize_type(api_type).to_inline_text(render))
                .collect();
            line.push_str(" implements ");
            line.push_str(&implements.join(", "));
        }

        vec![line]
    }
}

pub struct ApiClassConstructor<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiClassConstructor<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn parameters(&self) -> &[crate::api_items::BoxedDefinition<'a>] {
        self.base.parameters()
    }
}

impl SerializedApiDefinition for ApiClassConstructor<'_> {
    delegate_to_base!();

    fn name(&self) -> &str {
        "constructor"
    }

    fn to_heading_text(&self) -> String {
        format!("constructor({})", self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let access = self
            .base
            .item()
            .access_modifier
            .map(|modifier| format!("{} ", modifier.as_str()))
            .unwrap_or_default();
        vec![format!(
            "{access}constructor({});",
            self.base.parameters_text(render)
        )]
    }
}

pub struct ApiClassMethod<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiClassMethod<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn parameters(&self) -> &[crate::api_items::BoxedDefinition<'a>] {
        self.base.parameters()
    }

    pub fn type_parameters(&self) -> &[crate::api_items::BoxedDefinition<'a>] {
        self.base.type_parameters()
    }
}

impl SerializedApiDefinition for ApiClassMethod<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        format!("{}({})", self.base.name(), self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let async_keyword = if item.is_async { "async " } else { "" };
        let optional = if item.is_optional { "?" } else { "" };

        vec![format!(
            "{}{async_keyword}{}{optional}{}({}): {};",
            self.base.modifiers_prefix(),
            self.base.name(),
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base.type_to_string(render, item.return_type.as_ref())
        )]
    }
}

pub struct ApiClassProperty<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiClassProperty<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiClassProperty<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let readonly = if item.is_readonly { "readonly " } else { "" };
        let optional = if item.is_optional { "?" } else { "" };
        let initializer = item
            .initializer
            .as_deref()
            .map(|initializer| format!(" = {initializer}"))
            .unwrap_or_default();

        vec![format!(
            "{}{readonly}{}{optional}: {}{initializer};",
            self.base.modifiers_prefix(),
            self.base.name(),
            self.base.type_to_string(render, item.r#type.as_ref())
        )]
    }
}
