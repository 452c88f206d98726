#![deny(clippy::all)]

//! Markdown documentation for TypeScript APIs.
//!
//! This crate takes the registry produced by an external API extractor and
//! renders it as markdown:
//! - A data model for the extracted registry ([`model`], [`kinds`]).
//! - Serialized wrappers that turn records into headings and TypeScript
//!   signatures ([`api_items`]), dispatched by kind through [`SerializerFactory`].
//! - Reference flattening through re-exports ([`references`]).
//! - A plugin system with built-in renderers, a registry that merges their
//!   output, and a loader for plugin modules ([`plugin`], [`plugins`]).
//! - A [`Generator`] producing one markdown file per entry file.

pub mod api_items;
pub mod error;
pub mod factory;
pub mod generator;
pub mod generators;
pub mod helpers;
pub mod kinds;
pub mod model;
pub mod plugin;
pub mod plugins;
pub mod references;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{DocsError, PluginLoadError, Result};
pub use factory::SerializerFactory;
pub use generator::{generate, Generator, GeneratorOptions, RenderedFile};
pub use kinds::{ApiDefinitionKind, ApiTypeKind};
pub use model::{ApiItemRecord, ApiItemReference, ApiItemReferenceDto, ApiType, ExtractDto};
pub use plugin::{
    Plugin, PluginCatalog, PluginHeading, PluginLoader, PluginModule, PluginOptions,
    PluginRegistry, PluginResultData, RenderConfig,
};
pub use references::flatten_references;
