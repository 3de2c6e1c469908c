//! Targets the controller reads from at sampling instants and writes to
//! every active tick.
//!
//! The traits keep the controller independent of any engine. The in-memory
//! implementations back the native front-end and the tests, and a
//! [`PropertyBlock`] can be packed into GPU uniforms with
//! [`crate::RippleUniforms`].

use fnv::FnvHashMap;
use glam::{Vec3, Vec4};

/// Value stored under a material parameter name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Color(Vec4),
}

/// Object scale.
pub trait TransformSink {
    fn scale(&self) -> Vec3;
    fn set_scale(&mut self, scale: Vec3);
}

/// Named shader parameters.
///
/// `get` returns `None` for names that were never written, which lets
/// sampling tell a stored zero apart from a missing channel.
pub trait MaterialSink {
    fn get(&self, name: &str) -> Option<ParamValue>;
    fn set(&mut self, name: &str, value: ParamValue);

    fn get_float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(ParamValue::Float(v)) => Some(v),
            _ => None,
        }
    }

    fn get_color(&self, name: &str) -> Option<Vec4> {
        match self.get(name) {
            Some(ParamValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, ParamValue::Float(value));
    }

    fn set_color(&mut self, name: &str, value: Vec4) {
        self.set(name, ParamValue::Color(value));
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub scale: Vec3,
}

impl TransformState {
    pub fn new(scale: Vec3) -> Self {
        Self { scale }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self { scale: Vec3::ONE }
    }
}

impl TransformSink for TransformState {
    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

/// Per-object parameter overrides keyed by parameter name.
#[derive(Clone, Debug, Default)]
pub struct PropertyBlock {
    values: FnvHashMap<String, ParamValue>,
}

impl PropertyBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_float(mut self, name: &str, value: f32) -> Self {
        self.set_float(name, value);
        self
    }

    pub fn with_color(mut self, name: &str, value: Vec4) -> Self {
        self.set_color(name, value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl MaterialSink for PropertyBlock {
    fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    fn set(&mut self, name: &str, value: ParamValue) {
        // Avoid reallocating the key on the per-frame write path
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_owned(), value);
            }
        }
    }
}
