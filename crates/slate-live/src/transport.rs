//! Transport for pushing updates to a running Slate program.

use crate::{LiveHandle, LiveValue};
use serde::{Deserialize, Serialize};

/// Applies a change to the running instance.
///
/// Calls are fire-and-forget: the delta engine never consults a result and
/// models no acknowledgment or rollback. Failure handling belongs to the
/// implementation.
pub trait LiveTransport {
    /// Rebind a property on a live object.
    fn set_binding(
        &mut self,
        handle: &LiveHandle,
        property_name: &str,
        value: &LiveValue,
        is_literal: bool,
    );

    /// Replace a method body on a live object.
    fn set_method_body(&mut self, handle: &LiveHandle, method_name: &str, body: &str);
}

/// One update as seen by a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiveUpdate {
    Binding {
        debug_id: u32,
        property_name: String,
        value: LiveValue,
        is_literal: bool,
    },
    MethodBody {
        debug_id: u32,
        method_name: String,
        body: String,
    },
}

/// Transport that records every update, for tests and introspection.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub updates: Vec<LiveUpdate>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LiveTransport for RecordingTransport {
    fn set_binding(
        &mut self,
        handle: &LiveHandle,
        property_name: &str,
        value: &LiveValue,
        is_literal: bool,
    ) {
        self.updates.push(LiveUpdate::Binding {
            debug_id: handle.debug_id,
            property_name: property_name.to_string(),
            value: value.clone(),
            is_literal,
        });
    }

    fn set_method_body(&mut self, handle: &LiveHandle, method_name: &str, body: &str) {
        self.updates.push(LiveUpdate::MethodBody {
            debug_id: handle.debug_id,
            method_name: method_name.to_string(),
            body: body.to_string(),
        });
    }
}

/// Transport that drops every update.
#[derive(Debug, Default)]
pub struct NullTransport;

impl LiveTransport for NullTransport {
    fn set_binding(&mut self, _: &LiveHandle, _: &str, _: &LiveValue, _: bool) {}

    fn set_method_body(&mut self, _: &LiveHandle, _: &str, _: &str) {}
}
