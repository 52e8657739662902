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
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// A span captured by the [TestLayer].
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    /// The name of the span.
    pub name: String,
    /// The span fields, formatted as strings.
    pub attributes: HashMap<String, String>,
}

/// An event captured by the [TestLayer].
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: tracing::Level,
    pub attributes: HashMap<String, String>,
}

struct Visitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

#[derive(Debug, Default)]
struct Log {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

/// A tracing layer that records spans and events for inspection in tests.
///
/// The layer is installed as the thread default subscriber, use it with the
/// `current_thread` tokio runtime, which is the default for `#[tokio::test]`.
///
/// # Example
/// ```
/// use gapic_test_utils::test_layer::TestLayer;
/// let (layer, _guard) = TestLayer::initialize();
/// tracing::info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("doing something");
/// });
/// let spans = layer.spans();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].name, "my_operation");
/// assert_eq!(spans[0].attributes.get("foo").map(String::as_str), Some("bar"));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer {
    log: Arc<Mutex<Log>>,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for the current thread.
    ///
    /// The layer captures spans until the guard is dropped.
    pub fn initialize() -> (Self, tracing::subscriber::DefaultGuard) {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (layer, guard)
    }

    /// The spans captured so far.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().spans.clone()
    }

    /// The events captured so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Log> {
        match self.log.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut Visitor(&mut attributes));
        self.lock().spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            attributes,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        event.record(&mut Visitor(&mut attributes));
        self.lock().events.push(CapturedEvent {
            level: *event.metadata().level(),
            attributes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans() {
        let (layer, _guard) = TestLayer::initialize();
        tracing::info_span!("outer", count = 3_u64, ok = true).in_scope(|| {
            tracing::info_span!("inner", name = "abc").in_scope(|| {});
        });
        let spans = layer.spans();
        assert_eq!(spans.len(), 2, "{spans:?}");
        assert_eq!(spans[0].name, "outer");
        assert_eq!(spans[0].attributes.get("count").map(String::as_str), Some("3"));
        assert_eq!(spans[0].attributes.get("ok").map(String::as_str), Some("true"));
        assert_eq!(spans[1].name, "inner");
    }

    #[test]
    fn events() {
        let (layer, _guard) = TestLayer::initialize();
        tracing::warn!(attempt = 2_u32, "retrying");
        let events = layer.events();
        assert_eq!(events.len(), 1, "{events:?}");
        assert_eq!(events[0].level, tracing::Level::WARN);
        assert_eq!(events[0].attributes.get("message").map(String::as_str), Some("retrying"));
        assert_eq!(events[0].attributes.get("attempt").map(String::as_str), Some("2"));
    }

    #[test]
    fn guard_drops() {
        let layer = {
            let (layer, _guard) = TestLayer::initialize();
            tracing::info_span!("inside").in_scope(|| {});
            layer
        };
        tracing::info_span!("outside").in_scope(|| {});
        let names: Vec<_> = layer.spans().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["inside"]);
    }
}
