//! Test utilities for tsdocs.
//!
//! Available in this crate's own tests and, through the `test-utils`
//! feature, to downstream crates (plugins, the CLI).
//!
//! - Fixture builders for registries and records, so tests can describe a
//!   small API graph without hand-writing extractor JSON.
//! - A tracing capture layer, so tests can assert on the warnings and errors
//!   emitted while rendering.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::kinds::{ApiDefinitionKind, ApiTypeKind};
use crate::model::{ApiItemRecord, ApiItemReferenceDto, ApiType, ExtractDto, Location};

/// File name given to fixture records.
pub const FIXTURE_FILE: &str = "src/index.ts";

/// Record of the given kind located at the start of [`FIXTURE_FILE`].
pub fn record(kind: ApiDefinitionKind, name: &str) -> ApiItemRecord {
    ApiItemRecord::new(kind, name, Location::new(FIXTURE_FILE, 0, 0))
}

/// Extractor-side reference group.
pub fn references(alias: &str, ids: &[&str]) -> ApiItemReferenceDto {
    ApiItemReferenceDto::new(alias, ids.iter().map(|id| id.to_string()).collect())
}

/// Keyword type such as `string`.
pub fn basic_type(text: &str) -> ApiType {
    ApiType::new(ApiTypeKind::Basic, text)
}

/// Named type reference, optionally pointing at a registry id.
pub fn reference_type(name: &str, reference_id: Option<&str>) -> ApiType {
    ApiType {
        reference_id: reference_id.map(str::to_string),
        name_text: Some(name.to_string()),
        ..ApiType::new(ApiTypeKind::Reference, name)
    }
}

/// Builder for an [`ExtractDto`].
///
/// ```rust
/// use tsdocs::kinds::ApiDefinitionKind;
/// use tsdocs::test_utils::{record, references, RegistryBuilder};
///
/// let extract = RegistryBuilder::new()
///     .item("2", record(ApiDefinitionKind::Function, "run"))
///     .source_file("1", "src/index.ts", vec![references("run", &["2"])])
///     .build();
///
/// assert_eq!(extract.entry_files, vec!["1".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    extract: ExtractDto,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under `id`.
    pub fn item(mut self, id: &str, record: ApiItemRecord) -> Self {
        self.extract.registry.insert(id.to_string(), record);
        self
    }

    /// Adds a source file record and marks it as an entry file.
    pub fn source_file(mut self, id: &str, file_name: &str, members: Vec<ApiItemReferenceDto>) -> Self {
        let mut source_file = ApiItemRecord::new(
            ApiDefinitionKind::SourceFile,
            file_name,
            Location::new(file_name, 0, 0),
        );
        source_file.members = Some(members);

        self.extract.registry.insert(id.to_string(), source_file);
        self.extract.entry_files.push(id.to_string());
        self
    }

    pub fn build(self) -> ExtractDto {
        self.extract
    }
}

/// One captured tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

/// Events recorded by [`capture_logs`] or [`start_capture`].
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages emitted at exactly `level`.
    pub fn at_level(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| event.level == level)
            .map(|event| event.message)
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at_level(Level::WARN)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at_level(Level::ERROR)
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.0,
            });
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Runs `f` with a capturing subscriber installed on the current thread.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        events: Arc::clone(&logs.events),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}

/// Installs a capturing subscriber until the guard is dropped.
///
/// Meant for `#[tokio::test]` bodies on the current-thread runtime, where a
/// closure-based capture cannot span `.await` points.
pub fn start_capture() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        events: Arc::clone(&logs.events),
    });
    (logs, tracing::subscriber::set_default(subscriber))
}
