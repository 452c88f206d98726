use super::{delegate_type_to_base, ApiTypeBase};
use crate::api_items::{ApiContext, ReferenceRenderHandler, SerializedApiType};
use crate::kinds::ApiTypeKind;
use crate::model::ApiType;

macro_rules! type_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            base: ApiTypeBase<'a>,
        }

        impl<'a> $name<'a> {
            pub fn new(ctx: ApiContext<'a>, api_type: &'a ApiType) -> Self {
                Self {
                    base: ApiTypeBase::new(ctx, api_type),
                }
            }
        }
    };
}

type_wrapper!(
    /// `A | B`
    ApiUnion
);
type_wrapper!(
    /// `A & B`
    ApiIntersection
);
type_wrapper!(
    /// `T[]`
    ApiArray
);
type_wrapper!(
    /// `[A, B]`
    ApiTuple
);
type_wrapper!(ApiParenthesized);
type_wrapper!(
    /// `keyof T`, `readonly T[]`, `unique symbol`
    ApiTypeOperator
);
type_wrapper!(
    /// `T[K]`
    ApiIndexedAccess
);
type_wrapper!(
    /// `typeof value`
    ApiTypeQuery
);
type_wrapper!(
    /// `value is string`
    ApiTypePredicate
);
type_wrapper!(ApiThis);

impl SerializedApiType for ApiUnion<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        self.base.members_to_strings(render).join(" | ")
    }
}

impl SerializedApiType for ApiIntersection<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        self.base.members_to_strings(render).join(" & ")
    }
}

impl SerializedApiType for ApiArray<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let element = self.base.api_type().r#type.as_deref();
        let text = self.base.nested_to_string(render, element);

        let needs_parens = element.is_some_and(|element| {
            matches!(
                element.api_type_kind,
                ApiTypeKind::Union
                    | ApiTypeKind::Intersection
                    | ApiTypeKind::FunctionType
                    | ApiTypeKind::ConstructorType
            )
        });
        if needs_parens {
            format!("({text})[]")
        } else {
            format!("{text}[]")
        }
    }
}

impl SerializedApiType for ApiTuple<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        format!("[{}]", self.base.members_to_strings(render).join(", "))
    }
}

impl SerializedApiType for ApiParenthesized<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let inner = self.base.api_type().r#type.as_deref();
        format!("({})", self.base.nested_to_string(render, inner))
    }
}

impl SerializedApiType for ApiTypeOperator<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let api_type = self.base.api_type();
        let operand = self.base.nested_to_string(render, api_type.r#type.as_deref());
        match api_type.keyword.as_deref() {
            Some(keyword) => format!("{keyword} {operand}"),
            None => operand,
        }
    }
}

impl SerializedApiType for ApiIndexedAccess<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let api_type = self.base.api_type();
        format!(
            "{}[{}]",
            self.base.nested_to_string(render, api_type.object_type.as_deref()),
            self.base.nested_to_string(render, api_type.index_type.as_deref())
        )
    }
}

impl SerializedApiType for ApiTypeQuery<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let api_type = self.base.api_type();
        match api_type.name_text.as_deref() {
            Some(name) => format!("typeof {}", render(name, api_type.reference_id.as_deref())),
            None => api_type.text.clone(),
        }
    }
}

impl SerializedApiType for ApiTypePredicate<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, render: ReferenceRenderHandler<'_>) -> String {
        let api_type = self.base.api_type();
        let Some(parameter) = api_type.name_text.as_deref() else {
            return api_type.text.clone();
        };
        format!(
            "{parameter} is {}",
            self.base.nested_to_string(render, api_type.r#type.as_deref())
        )
    }
}

impl SerializedApiType for ApiThis<'_> {
    delegate_type_to_base!();

    fn to_inline_text(&self, _render: ReferenceRenderHandler<'_>) -> String {
        "this".to_string()
    }
}
