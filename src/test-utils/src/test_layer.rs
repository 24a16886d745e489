// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber, field};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// Represents a captured tracing event with its fields.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// The level of the event.
    pub level: Level,
    /// The target of the event, typically the module path that emitted it.
    pub target: String,
    /// The event message, if any.
    pub message: Option<String>,
    /// A map of field names to their string representations, excluding the
    /// message.
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Returns the value of `name`, if the event recorded it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A `tracing::field::Visit` implementation to extract the fields of an event.
///
/// String fields are recorded verbatim, other types use their `Debug` or
/// `Display` representation.
struct TestVisitor<'a> {
    message: &'a mut Option<String>,
    fields: &'a mut HashMap<String, String>,
}

impl TestVisitor<'_> {
    fn insert(&mut self, field: &field::Field, value: String) {
        if field.name() == "message" {
            *self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

/// A tracing layer for capturing and inspecting events within tests.
///
/// The layer is installed as the *thread-local* default subscriber, so tests
/// running in parallel do not see each other's events.
///
/// # Example
///
/// ```
/// use sdk_test_utils::test_layer::TestLayer;
///
/// let (layer, _guard) = TestLayer::initialize();
/// tracing::debug!(family = "Stage", "using the fallback");
///
/// let captured = layer.capture();
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].message.as_deref(), Some("using the fallback"));
/// assert_eq!(captured[0].field("family"), Some("Stage"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestLayer {
    /// Installs a new `TestLayer` as the default subscriber for this thread.
    ///
    /// Events are captured at all levels while the returned guard is in
    /// scope.
    pub fn initialize() -> (Self, tracing::subscriber::DefaultGuard) {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (layer, guard)
    }

    /// Retrieves and removes all the events captured so far.
    pub fn capture(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = None;
        let mut fields = HashMap::new();
        event.record(&mut TestVisitor {
            message: &mut message,
            fields: &mut fields,
        });
        let metadata = event.metadata();
        self.events.lock().unwrap().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
            fields,
        });
    }
}
