use crate::api_items::{
    delegate_to_base, ApiContext, ApiDefinitionBase, BoxedDefinition, ReferenceRenderHandler,
    SerializedApiDefinition,
};
use crate::model::{ApiItemRecord, ApiItemReference};

pub struct ApiInterface<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiInterface<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    pub fn members(&self) -> &[BoxedDefinition<'a>] {
        self.base.members()
    }
}

impl SerializedApiDefinition for ApiInterface<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let ctx = self.base.ctx();

        let mut line = format!(
            "interface {}{}",
            self.base.name(),
            self.base.type_parameters_text(render)
        );
        if !item.extends.is_empty() {
            let extends: Vec<String> = item
                .extends
                .iter()
                .map(|api_type| ctx.serialize_type(api_type).to_inline_text(render))
                .collect();
            line.push_str(" extends ");
            line.push_str(&extends.join(", "));
        }

        vec![line]
    }
}

/// Property signature of an interface or type literal.
pub struct ApiProperty<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiProperty<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiProperty<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        self.base.heading_name()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let readonly = if item.is_readonly { "readonly " } else { "" };
        let optional = if item.is_optional { "?" } else { "" };

        vec![format!(
            "{readonly}{}{optional}: {};",
            self.base.name(),
            self.base.type_to_string(render, item.r#type.as_ref())
        )]
    }
}

/// Method signature of an interface or type literal.
pub struct ApiMethod<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiMethod<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiMethod<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        format!("{}({})", self.base.name(), self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let optional = if item.is_optional { "?" } else { "" };

        vec![format!(
            "{}{optional}{}({}): {};",
            self.base.name(),
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base.type_to_string(render, item.return_type.as_ref())
        )]
    }
}

/// Call signature: `<T>(value: T): void;`.
pub struct ApiCall<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiCall<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiCall<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        format!("({})", self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![format!(
            "{}({}): {};",
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base
                .type_to_string(render, self.base.item().return_type.as_ref())
        )]
    }
}

/// Construct signature: `new (value: string): Foo;`.
pub struct ApiConstruct<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiConstruct<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }
}

impl SerializedApiDefinition for ApiConstruct<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        format!("new ({})", self.base.parameter_names())
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        vec![format!(
            "new {}({}): {};",
            self.base.type_parameters_text(render),
            self.base.parameters_text(render),
            self.base
                .type_to_string(render, self.base.item().return_type.as_ref())
        )]
    }
}

/// Index signature: `[key: string]: number;`.
pub struct ApiIndex<'a> {
    base: ApiDefinitionBase<'a>,
}

impl<'a> ApiIndex<'a> {
    pub fn new(ctx: ApiContext<'a>, item: &'a ApiItemRecord, reference: ApiItemReference) -> Self {
        Self {
            base: ApiDefinitionBase::new(ctx, item, reference),
        }
    }

    fn parameter_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let item = self.base.item();
        let ctx = self.base.ctx();

        let parameter = item.parameter.as_ref().and_then(|parameter| {
            let id = parameter.ids.first()?;
            let record = ctx.resolve_item(id, &item.location)?;
            Some(ctx.serialize_definition(record, ApiItemReference::new(id.clone(), &parameter.alias)))
        });
        match parameter {
            Some(parameter) => parameter.to_inline_text(render),
            None => self.base.parameters_text(render),
        }
    }
}

impl SerializedApiDefinition for ApiIndex<'_> {
    delegate_to_base!();

    fn to_heading_text(&self) -> String {
        "index".to_string()
    }

    fn to_text(&self, render: ReferenceRenderHandler<'_>) -> Vec<String> {
        let item = self.base.item();
        let readonly = if item.is_readonly { "readonly " } else { "" };

        vec![format!(
            "{readonly}[{}]: {};",
            self.parameter_text(render),
            self.base.type_to_string(render, item.r#type.as_ref())
        )]
    }
}
