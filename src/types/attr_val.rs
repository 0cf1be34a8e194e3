// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.


use crate::delta::Delta;
use crate::error::Error;
use crate::error::Error::{GetValueWrongType, SerdeNestedMap, SerdeUnknownType};
use crate::operations::DeltaOperation;
use crate::types::attr_map::AttrMap;
use anyhow::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
#[cfg(test)]
use std::fmt;

/// Key used, Quill-style, to recognize an attribute value as a nested delta:
/// any JSON object carrying an `"ops"` array is a sub-document rather than a
/// plain embed-descriptor map.
const NESTED_DELTA_KEY: &str = "ops";

/// Attribute values are opaque scalars *except* when they carry the `ops`
/// key, in which case they recurse as a nested `Delta` (see `attributes`
/// compose/transform/diff).
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "Value")]
pub enum AttrVal {
    String(String),
    Number(usize),
    Bool(bool),
    Map(AttrMap),
    Delta(Delta),
    Null,
}

// Hand-rolled because the nested-delta variant serializes as `{"ops": [...]}`
// while `Delta` itself is `#[serde(transparent)]` (a bare array) at the top
// level; `#[serde(untagged)]` can't express that asymmetry.
impl Serialize for AttrVal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrVal::String(s) => serializer.serialize_str(s),
            AttrVal::Number(n) => serializer.serialize_u64(*n as u64),
            AttrVal::Bool(b) => serializer.serialize_bool(*b),
            AttrVal::Map(m) => m.serialize(serializer),
            AttrVal::Null => serializer.serialize_none(),
            AttrVal::Delta(d) => {
                let mut s = serializer.serialize_struct("Delta", 1)?;
                s.serialize_field("ops", d.get_ops_ref())?;
                s.end()
            }
        }
    }
}

impl AttrVal {
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn str_val(&self) -> anyhow::Result<&str, Error> {
        if let AttrVal::String(s) = self {
            return Ok(s.as_str());
        }
        Err(GetValueWrongType {
            tpe: "string".to_string(),
        })
    }
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn number_val(&self) -> Result<usize, Error> {
        if let AttrVal::Number(s) = self {
            return Ok(*s);
        }
        Err(GetValueWrongType {
            tpe: "number".to_string(),
        })
    }

    /// Note: Calling this function on a String(), or Number() will result in None too
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn map_val(&self) -> Result<&AttrMap, Error> {
        if let AttrVal::Map(s) = self {
            return Ok(s);
        }
        Err(GetValueWrongType {
            tpe: "map".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn bool_val(&self) -> Result<bool, Error> {
        if let AttrVal::Bool(s) = self {
            return Ok(*s);
        }
        Err(GetValueWrongType {
            tpe: "boolean".to_string(),
        })
    }

    pub fn is_string(&self) -> bool {
        if let AttrVal::String(_) = self {
            return true;
        }
        false
    }
    pub fn is_number(&self) -> bool {
        if let AttrVal::Number(_) = self {
            return true;
        }
        false
    }
    pub fn is_bool(&self) -> bool {
        if let AttrVal::Bool(_) = self {
            return true;
        }
        false
    }
    pub fn is_null(&self) -> bool {
        if let AttrVal::Null = self {
            return true;
        }
        false
    }
    pub fn is_map(&self) -> bool {
        if let AttrVal::Map(_) = self {
            return true;
        }
        false
    }
    pub fn is_delta(&self) -> bool {
        if let AttrVal::Delta(_) = self {
            return true;
        }
        false
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn delta_val(&self) -> Result<&Delta, Error> {
        if let AttrVal::Delta(s) = self {
            return Ok(s);
        }
        Err(GetValueWrongType {
            tpe: "delta".to_string(),
        })
    }
}

impl From<String> for AttrVal {
    fn from(s: String) -> Self {
        AttrVal::String(s)
    }
}

impl From<usize> for AttrVal {
    fn from(s: usize) -> Self {
        AttrVal::Number(s)
    }
}

impl From<bool> for AttrVal {
    fn from(s: bool) -> Self {
        AttrVal::Bool(s)
    }
}

impl From<&str> for AttrVal {
    fn from(s: &str) -> Self {
        AttrVal::String(s.to_string())
    }
}

impl From<AttrMap> for AttrVal {
    fn from(s: AttrMap) -> Self {
        AttrVal::Map(s)
    }
}

impl From<Delta> for AttrVal {
    fn from(d: Delta) -> Self {
        AttrVal::Delta(d)
    }
}

impl TryFrom<Value> for AttrVal {
    type Error = Error;
    fn try_from(s: Value) -> Result<Self, Self::Error> {
        serde_val_to_attr_val(s, true)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serde_val_to_attr_val(value: Value, allow_nesting: bool) -> Result<AttrVal, Error> {
    match value {
        Value::Null => Ok(AttrVal::Null),
        Value::String(s) => Ok(AttrVal::String(s)),
        Value::Bool(b) => Ok(AttrVal::Bool(b)),
        Value::Number(n) => {
            let Some(nn) = n.as_u64() else {
                return Err(Error::NotAnUnsigned);
            };
            Ok(AttrVal::Number(nn as usize))
        }
        Value::Object(mut o) => {
            if !allow_nesting {
                return Err(SerdeNestedMap {
                    value: Value::Object(o).to_string(),
                });
            }
            match o.remove(NESTED_DELTA_KEY) {
                Some(Value::Array(ops)) => Ok(AttrVal::Delta(Delta::new(
                    ops.into_iter()
                        .map(serde_json::from_value::<DeltaOperation>)
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|e| Error::SerdeUnknownType { tpe: e.to_string() })?,
                ))),
                Some(other) => {
                    o.insert(NESTED_DELTA_KEY.to_string(), other);
                    Ok(AttrVal::Map(serde_val_to_map(o, allow_nesting)?))
                }
                None => Ok(AttrVal::Map(serde_val_to_map(o, allow_nesting)?)),
            }
        }
        Value::Array(_) => Err(SerdeUnknownType {
            tpe: value.to_string(),
        }),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serde_val_to_map(
    value: serde_json::map::Map<String, Value>,
    allow_nesting: bool,
) -> Result<AttrMap, Error> {
    let mut att = AttrMap::default();
    for (kk, vv) in value {
        let k = kk.to_string();
        let v = match vv {
            Value::Null => AttrVal::Null,
            Value::String(s) => AttrVal::String(s),
            Value::Bool(b) => AttrVal::Bool(b),
            Value::Number(n) => {
                let Some(nn) = n.as_u64() else {
                    return Err(Error::NotAnUnsigned);
                };
                AttrVal::Number(nn as usize)
            }
            Value::Object(o) => {
                if allow_nesting {
                    serde_val_to_attr_val(Value::Object(o), allow_nesting)?
                } else {
                    return Err(SerdeNestedMap {
                        value: Value::Object(o).to_string(),
                    });
                }
            }
            Value::Array(_) => {
                return Err(SerdeUnknownType {
                    tpe: vv.to_string(),
                })
            }
        };
        att.insert(k, v);
    }

    Ok(att)
}

#[cfg(test)]
impl fmt::Display for AttrVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_attrval(self, f)
    }
}
#[cfg(test)]
fn fmt_attrval(attrval: &AttrVal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match attrval {
        AttrVal::Null => {
            write!(f, "Null")
        }
        AttrVal::Number(u) => {
            write!(f, "{u}")
        }
        AttrVal::String(s) => {
            write!(f, "{s}")
        }
        AttrVal::Bool(b) => {
            write!(f, "{b}")
        }
        AttrVal::Map(m) => {
            let mut out = String::new();
            for (k, v) in &**m {
                out.push_str(&format!("({k}->{v}), "));
            }
            write!(f, "{out}")
        }
        AttrVal::Delta(d) => {
            write!(f, "{d:?}")
        }
    }
}
