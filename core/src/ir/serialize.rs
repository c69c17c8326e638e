//! file: core/src/ir/serialize.rs
//! description: wire format of the IR.
//!
//! Composite values are emitted as maps carrying an `$OBJECT` discriminator
//! (`path`, `string`, `list`, `dict`, `type`, `argument`, `mutation`,
//! `expression`). Numbers and booleans are emitted as bare scalars.
//!
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use super::value::{
    Argument, CompiledExpression, DictKey, Expression, IrValue, Mutation, Path, PathSegment, StringLiteral,
};

pub const DISCRIMINATOR: &str = "$OBJECT";

impl Serialize for IrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IrValue::Path(path) => path.serialize(serializer),
            IrValue::Number(number) => serializer.serialize_i64(*number),
            IrValue::Boolean(value) => serializer.serialize_bool(*value),
            IrValue::String(string) => string.serialize(serializer),
            IrValue::List(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(DISCRIMINATOR, "list")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            IrValue::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(DISCRIMINATOR, "dict")?;
                map.serialize_entry("items", &DictItems(entries))?;
                map.end()
            }
            IrValue::Type(name) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(DISCRIMINATOR, "type")?;
                map.serialize_entry("type", name)?;
                map.end()
            }
            IrValue::Argument(argument) => argument.serialize(serializer),
            IrValue::Mutation(mutation) => mutation.serialize(serializer),
            IrValue::Expression(expression) => expression.serialize(serializer),
        }
    }
}

/// Dictionary entries as `[key, value]` pairs.
struct DictItems<'a>(&'a [(DictKey, IrValue)]);

impl Serialize for DictItems<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (key, value) in self.0 {
            seq.serialize_element(&(key, value))?;
        }
        seq.end()
    }
}

impl Serialize for DictKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DictKey::Path(path) => path.serialize(serializer),
            DictKey::String(string) => string.serialize(serializer),
        }
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(DISCRIMINATOR, "path")?;
        map.serialize_entry("paths", self.segments())?;
        map.end()
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSegment::Name(name) => serializer.serialize_str(name),
            PathSegment::Path(path) => path.serialize(serializer),
        }
    }
}

impl Serialize for StringLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `values` only appears on templated strings.
        let len = if self.values.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(DISCRIMINATOR, "string")?;
        map.serialize_entry("string", &self.template)?;
        if !self.values.is_empty() {
            map.serialize_entry("values", &self.values)?;
        }
        map.end()
    }
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(DISCRIMINATOR, "argument")?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("argument", self.value.as_ref())?;
        map.end()
    }
}

impl Serialize for Mutation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(DISCRIMINATOR, "mutation")?;
        map.serialize_entry("mutation", &self.name)?;
        map.serialize_entry("arguments", &self.arguments)?;
        map.end()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(DISCRIMINATOR, "expression")?;
        map.serialize_entry("expression", &self.template)?;
        map.serialize_entry("values", self.operands.as_slice())?;
        map.end()
    }
}

impl Serialize for CompiledExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1))?;
        match self {
            CompiledExpression::Plain(value) => seq.serialize_element(value)?,
            CompiledExpression::Expression(expression) => seq.serialize_element(expression)?,
        }
        seq.end()
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn to_json_value<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(value)
}
