//! Serialization collaborator (spec §6): containers call through this
//! surface to emit their state as structured output rather than formatting
//! strings themselves. `BitList` emits as an array of 0/1 integers; maps
//! emit as JSON objects when keys are string-like, else as arrays of
//! `{ "key": ..., "value": ... }` records; null keys/values emit as JSON
//! `null`.

use serde_json::{Map, Value};

/// The serialization collaborator's interface (spec §6): a container walks
/// its own structure and calls through this surface; it never formats JSON
/// text itself. `value_*` is the `value(v)` operation specialized per
/// primitive type, since Rust has no single dynamically-typed `v`.
pub trait JsonWriter {
    fn enter_array(&mut self);
    fn exit_array(&mut self);
    fn enter_object(&mut self);
    fn exit_object(&mut self);
    fn name(&mut self, key: &str);
    fn value_u64(&mut self, v: u64);
    fn value_i64(&mut self, v: i64);
    fn value_f64(&mut self, v: f64);
    fn value_bool(&mut self, v: bool);
    fn value_str(&mut self, v: &str);
    fn value_null(&mut self);
    /// Hint for implementations that want to pre-reserve storage for `n`
    /// upcoming array elements or object members; a no-op is a valid
    /// implementation.
    fn preallocate(&mut self, n: usize);
}

enum Frame {
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

/// A [`JsonWriter`] that builds a [`serde_json::Value`] tree in memory.
/// This is this crate's one concrete implementation of the collaborator
/// interface; callers that need a different encoding (e.g. streaming to a
/// writer) implement [`JsonWriter`] themselves.
#[derive(Debug, Default)]
pub struct ValueWriter {
    stack: Vec<Frame>,
    pending_name: Option<String>,
    root: Option<Value>,
}

impl ValueWriter {
    pub fn new() -> Self {
        Self { stack: Vec::new(), pending_name: None, root: None }
    }

    /// Consumes the writer and returns the finished value. Panics if a
    /// container left an array/object open.
    pub fn finish(mut self) -> Value {
        assert!(self.stack.is_empty(), "ValueWriter::finish: unclosed array/object");
        self.root.take().unwrap_or(Value::Null)
    }

    fn push_value(&mut self, v: Value) {
        match self.stack.last_mut() {
            Some(Frame::Array(items)) => items.push(v),
            Some(Frame::Object(map)) => {
                let key = self.pending_name.take().expect("JsonWriter: value() with no preceding name() in an object");
                map.insert(key, v);
            }
            None => self.root = Some(v),
        }
    }
}

impl JsonWriter for ValueWriter {
    fn enter_array(&mut self) {
        self.stack.push(Frame::Array(Vec::new()));
    }

    fn exit_array(&mut self) {
        match self.stack.pop() {
            Some(Frame::Array(items)) => self.push_value(Value::Array(items)),
            _ => panic!("JsonWriter: exit_array() without matching enter_array()"),
        }
    }

    fn enter_object(&mut self) {
        self.stack.push(Frame::Object(Map::new()));
    }

    fn exit_object(&mut self) {
        match self.stack.pop() {
            Some(Frame::Object(map)) => self.push_value(Value::Object(map)),
            _ => panic!("JsonWriter: exit_object() without matching enter_object()"),
        }
    }

    fn name(&mut self, key: &str) {
        self.pending_name = Some(key.to_string());
    }

    fn value_u64(&mut self, v: u64) {
        self.push_value(Value::from(v));
    }

    fn value_i64(&mut self, v: i64) {
        self.push_value(Value::from(v));
    }

    fn value_f64(&mut self, v: f64) {
        self.push_value(serde_json::Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null));
    }

    fn value_bool(&mut self, v: bool) {
        self.push_value(Value::Bool(v));
    }

    fn value_str(&mut self, v: &str) {
        self.push_value(Value::String(v.to_string()));
    }

    fn value_null(&mut self) {
        self.push_value(Value::Null);
    }

    fn preallocate(&mut self, n: usize) {
        if let Some(Frame::Array(items)) = self.stack.last_mut() {
            items.reserve(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitlist::BitList;

    #[test]
    fn bitlist_emits_array_of_0_1() {
        let mut b = BitList::new();
        b.set1(0);
        b.set1(2);
        let mut w = ValueWriter::new();
        b.write_json(&mut w);
        let v = w.finish();
        assert_eq!(v, serde_json::json!([1, 0, 1]));
    }

    #[test]
    fn object_round_trip() {
        let mut w = ValueWriter::new();
        w.enter_object();
        w.name("a");
        w.value_u64(1);
        w.name("b");
        w.value_null();
        w.exit_object();
        let v = w.finish();
        assert_eq!(v, serde_json::json!({"a": 1, "b": null}));
    }

    #[test]
    fn nested_array_of_objects() {
        let mut w = ValueWriter::new();
        w.enter_array();
        w.enter_object();
        w.name("key");
        w.value_str("k1");
        w.name("value");
        w.value_i64(-7);
        w.exit_object();
        w.exit_array();
        let v = w.finish();
        assert_eq!(v, serde_json::json!([{"key": "k1", "value": -7}]));
    }
}
