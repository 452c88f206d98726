//! Built-in plugins, one per documented item kind.

mod accessor;
mod class;
mod constructor;
mod r#enum;
mod function;
mod interface;
mod method;
mod namespace;
mod property;
mod type_alias;
mod variable;

use std::sync::Arc;

pub use accessor::ClassAccessorPlugin;
pub use class::ClassPlugin;
pub use constructor::ClassConstructorPlugin;
pub use function::FunctionPlugin;
pub use interface::InterfacePlugin;
pub use method::MethodPlugin;
pub use namespace::NamespacePlugin;
pub use property::PropertyPlugin;
pub use r#enum::EnumPlugin;
pub use type_alias::TypeAliasPlugin;
pub use variable::VariablePlugin;

use crate::plugin::Plugin;

/// Every built-in plugin, in registration order.
pub fn builtin_plugins() -> Vec<Arc<dyn Plugin>> {
    vec![
        Arc::new(ClassPlugin),
        Arc::new(ClassConstructorPlugin),
        Arc::new(MethodPlugin),
        Arc::new(PropertyPlugin),
        Arc::new(ClassAccessorPlugin),
        Arc::new(InterfacePlugin),
        Arc::new(FunctionPlugin),
        Arc::new(EnumPlugin),
        Arc::new(TypeAliasPlugin),
        Arc::new(VariablePlugin),
        Arc::new(NamespacePlugin),
    ]
}
