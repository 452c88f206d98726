//! Wrappers for API item records, one per item kind.

mod accessor;
mod class;
mod default;
mod r#enum;
mod function;
mod interface;
mod mapped;
mod namespace;
mod type_alias;

pub use accessor::ApiAccessor;
pub use class::{ApiClass, ApiClassConstructor, ApiClassMethod, ApiClassProperty};
pub use default::ApiDefinitionDefault;
pub use function::{ApiConstructorType, ApiFunction, ApiFunctionType, ApiParameter, ApiTypeParameter};
pub use interface::{ApiCall, ApiConstruct, ApiIndex, ApiInterface, ApiMethod, ApiProperty};
pub use mapped::ApiMapped;
pub use namespace::{ApiNamespace, ApiVariable};
pub use r#enum::{ApiEnum, ApiEnumMember};
pub use type_alias::{ApiTypeAlias, ApiTypeLiteral};
