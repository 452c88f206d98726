//! Flattening of indirect references.
//!
//! Source files, `export * from` declarations and import/export specifiers
//! only point at other items. Flattening walks through them depth-first and
//! yields the concrete items they stand for, carrying the alias under which
//! each item is visible.

use rustc_hash::FxHashSet;
use tracing::Level;

use crate::helpers::log_with_location;
use crate::kinds::ApiDefinitionKind;
use crate::model::{ApiItemRecord, ApiItemReference, ApiItemReferenceDto, Location, Registry};

/// Resolves reference groups into leaf references, in input order.
///
/// Missing ids and malformed indirect items are logged and skipped. An
/// indirect item that is already being expanded higher up the current path
/// is not expanded again, so cyclic re-exports terminate. Leaves reached
/// through distinct paths are all emitted.
pub fn flatten_references<'a>(
    registry: &'a Registry,
    references: &'a [ApiItemReferenceDto],
) -> Vec<ApiItemReference> {
    let mut flattener = Flattener {
        registry,
        path: FxHashSet::default(),
        output: Vec::new(),
    };
    flattener.expand_groups(references, None);
    flattener.output
}

struct Flattener<'a> {
    registry: &'a Registry,
    path: FxHashSet<&'a str>,
    output: Vec<ApiItemReference>,
}

impl<'a> Flattener<'a> {
    fn expand_groups(&mut self, groups: &'a [ApiItemReferenceDto], origin: Option<&'a Location>) {
        for group in groups {
            for id in &group.ids {
                self.expand(id, &group.alias, origin);
            }
        }
    }

    fn expand(&mut self, id: &'a str, alias: &str, origin: Option<&'a Location>) {
        let Some(item) = self.registry.get(id) else {
            let message = format!("Api item \"{id}\" is missing in the registry.");
            match origin {
                Some(location) => log_with_location(Level::WARN, location, &message),
                None => tracing::warn!("{message}"),
            }
            return;
        };

        if !is_indirect(item) {
            self.output.push(ApiItemReference::new(id, alias));
            return;
        }

        if !self.path.insert(id) {
            log_with_location(
                Level::WARN,
                &item.location,
                &format!("Circular reference through \"{}\" was not expanded.", item.name),
            );
            return;
        }

        match item.api_kind {
            ApiDefinitionKind::Export => match item.source_file_id.as_deref() {
                Some(source_file_id) => self.expand(source_file_id, alias, Some(&item.location)),
                None => tracing::debug!(id, name = %item.name, "export without a source file"),
            },
            ApiDefinitionKind::ImportSpecifier | ApiDefinitionKind::ExportSpecifier => {
                match item.api_items.as_deref() {
                    Some(ids) => {
                        for target in ids {
                            self.expand(target, &item.name, Some(&item.location));
                        }
                    }
                    None => log_with_location(
                        Level::WARN,
                        &item.location,
                        &format!("Api items are missing in \"{}\".", item.name),
                    ),
                }
            }
            ApiDefinitionKind::SourceFile => {
                let members = match item.members.as_deref() {
                    Some(members) => members,
                    None => {
                        log_with_location(
                            Level::WARN,
                            &item.location,
                            &format!("Members are missing in \"{}\".", item.name),
                        );
                        &[]
                    }
                };
                self.expand_groups(members, Some(&item.location));
            }
            _ => {}
        }

        self.path.remove(id);
    }
}

fn is_indirect(item: &ApiItemRecord) -> bool {
    matches!(
        item.api_kind,
        ApiDefinitionKind::Export
            | ApiDefinitionKind::ImportSpecifier
            | ApiDefinitionKind::ExportSpecifier
            | ApiDefinitionKind::SourceFile
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{capture_logs, record, references, RegistryBuilder};

    fn specifier(name: &str, targets: &[&str]) -> ApiItemRecord {
        let mut item = record(ApiDefinitionKind::ExportSpecifier, name);
        item.api_items = Some(targets.iter().map(|id| id.to_string()).collect());
        item
    }

    #[test]
    fn test_specifier_alias_propagates_to_leaf() {
        let extract = RegistryBuilder::new()
            .item("A", record(ApiDefinitionKind::Class, "A"))
            .item("B", specifier("Foo", &["C"]))
            .item("C", record(ApiDefinitionKind::Function, "internalName"))
            .source_file("F", "src/index.ts", vec![references("A", &["A"]), references("Foo", &["B"])])
            .build();

        let flattened = flatten_references(&extract.registry, &[references("index", &["F"])]);

        assert_eq!(
            flattened,
            vec![ApiItemReference::new("A", "A"), ApiItemReference::new("C", "Foo")]
        );
    }

    #[test]
    fn test_export_star_recurses_into_source_file() {
        let mut export = record(ApiDefinitionKind::Export, "./utils");
        export.source_file_id = Some("U".into());

        let extract = RegistryBuilder::new()
            .item("E", export)
            .item("X", record(ApiDefinitionKind::Variable, "x"))
            .source_file("U", "src/utils.ts", vec![references("x", &["X"])])
            .build();

        let flattened = flatten_references(&extract.registry, &[references("", &["E"])]);
        assert_eq!(flattened, vec![ApiItemReference::new("X", "x")]);
    }

    #[test]
    fn test_export_without_source_file_contributes_nothing() {
        let extract = RegistryBuilder::new()
            .item("E", record(ApiDefinitionKind::Export, "./external"))
            .item("A", record(ApiDefinitionKind::Class, "A"))
            .build();

        let (flattened, logs) = capture_logs(|| {
            flatten_references(&extract.registry, &[references("x", &["E", "A"])])
        });

        assert_eq!(flattened, vec![ApiItemReference::new("A", "x")]);
        assert!(logs.warnings().is_empty());
    }

    #[test]
    fn test_missing_items_are_skipped_with_warning() {
        let extract = RegistryBuilder::new()
            .item("A", record(ApiDefinitionKind::Class, "A"))
            .item("S", record(ApiDefinitionKind::ImportSpecifier, "Lost"))
            .build();

        let (flattened, logs) = capture_logs(|| {
            flatten_references(
                &extract.registry,
                &[references("A", &["A", "missing"]), references("Lost", &["S"])],
            )
        });

        assert_eq!(flattened, vec![ApiItemReference::new("A", "A")]);
        assert_eq!(logs.warnings().len(), 2);
    }

    #[test]
    fn test_cycles_terminate() {
        let mut first = record(ApiDefinitionKind::Export, "./b");
        first.source_file_id = Some("FB".into());
        let mut second = record(ApiDefinitionKind::Export, "./a");
        second.source_file_id = Some("FA".into());

        let extract = RegistryBuilder::new()
            .item("EA", first)
            .item("EB", second)
            .item("L", record(ApiDefinitionKind::Interface, "Leaf"))
            .source_file("FA", "src/a.ts", vec![references("", &["EA"]), references("Leaf", &["L"])])
            .source_file("FB", "src/b.ts", vec![references("", &["EB"])])
            .build();

        let (flattened, logs) =
            capture_logs(|| flatten_references(&extract.registry, &[references("", &["FA"])]));

        assert_eq!(flattened, vec![ApiItemReference::new("L", "Leaf")]);
        assert_eq!(logs.warnings().len(), 1);
    }

    #[test]
    fn test_repeated_leaves_are_not_deduplicated() {
        let extract = RegistryBuilder::new()
            .item("A", record(ApiDefinitionKind::Class, "A"))
            .item("S1", specifier("First", &["A"]))
            .item("S2", specifier("Second", &["A"]))
            .build();

        let flattened = flatten_references(
            &extract.registry,
            &[references("", &["S1"]), references("", &["S2"])],
        );
        assert_eq!(
            flattened,
            vec![ApiItemReference::new("A", "First"), ApiItemReference::new("A", "Second")]
        );
    }
}
