// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
#[cfg(test)]
use std::fmt;
use std::iter::Iterator;
use std::ops::{Deref, DerefMut};

use crate::document::Document;
use crate::optransform::OpTransform;
use crate::priority::Priority;
use crate::types::attr_val::AttrVal;


/// Attributes hold a list of properties that determine an insert-value should be formatted.
/// When creating a delta diff(), or similar, the attribute may also get the value `Attr_val::Null'
/// indicating that the attribute should be removed when the `diff` is applied.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(flatten)]
    attr: HashMap<String, AttrVal>,
}

impl Attributes {
    /// # is_equal()
    ///
    /// Returns tue when 2 attribute structures contain the identical content.
    pub fn is_equal(&self, other: &Attributes) -> bool {
        diff(other, self).is_empty()
    }

    /// # insert()
    ///
    /// Insert a value for a given key into the attributes
    pub fn insert<K: Into<String>, V: Into<AttrVal>>(&mut self, key: K, value: V) {
        self.attr.insert(key.into(), value.into());
    }

    /// # is_empty()
    ///
    /// Returns tue when there is no content in the attributes.
    pub fn is_empty(&self) -> bool {
        self.attr.is_empty()
    }
}

impl Deref for Attributes {
    type Target = HashMap<String, AttrVal>;

    fn deref(&self) -> &Self::Target {
        &self.attr
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.attr
    }
}

/// # Compose()
///
/// Returns a Delta that is equivalent to applying the operations of
/// own Delta, followed by another Delta.
/// 1) if `Attr_val::null` values should be removed, remove them from the base
/// 2) if the base does NOT contain the key from the delta then we add it to base
///    regardless if the delta value is "null" or a string, or a Attr_val::MAP
///
/// Param:
///  - base: base delta
///  - attrib: delta to apply
/// # Panics
///
pub fn compose(attrib: &Attributes, base: &Attributes, keep_null: bool) -> Attributes {
    let mut ret = base.clone();
    if !keep_null {
        //remove all keys in base that point to null ...
        base.keys()
            .filter(|&ak| matches!(base.get(ak), Some(AttrVal::Null)))
            .for_each(|key: &String| {
                ret.remove(key);
            });
    }

    for (key, val) in &**attrib {
        match (val, base.get(key)) {
            // Both sides carry a nested delta under this key: recurse
            // instead of letting one side's sub-document clobber the other.
            (AttrVal::Delta(a), Some(AttrVal::Delta(b))) => {
                if let Ok(composed) = a.compose(b) {
                    ret.insert(key.clone(), composed);
                }
            }
            _ => {
                if base.get(key).is_none() {
                    ret.insert(key, val.clone());
                }
            }
        }
    }
    ret
}

/// # transform()
///
/// Transform given Delta attribute set against another attribute set.
///
/// Parameters:
///  - base - Delta attributes to transform
///  - attrib - Diff to apply
///
/// priority - Boolean used to break ties:<br>
/// If true, then base `takes` priority over `attrib`, that is, its actions
/// are considered to happen "first."
///
/// Returns:
///  - Delta - transformed Delta
///
/// # Panics
pub fn transform(attrib: &Attributes, base: &Attributes, priority: Priority) -> Attributes {
    let mut ret = if attrib.is_empty() {
        base.clone()
    } else if base.is_empty() {
        Attributes::default()
    } else if priority == Priority::Right {
        // Right wins outright: no tie to break, left's formatting is dropped.
        base.clone()
    } else {
        let mut left_wins = Attributes::default();
        for (key, val) in &**base {
            if attrib.get(key).is_none() {
                left_wins.insert(key, val.clone());
            }
        }
        left_wins
    };

    // Keys present in both as nested deltas recurse regardless of priority:
    // the tie-break above only decides scalar-attribute ownership.
    for (key, left_val) in &**attrib {
        if let (AttrVal::Delta(left), Some(AttrVal::Delta(right))) = (left_val, base.get(key)) {
            if let Ok(transformed) = left.transform(right, priority) {
                ret.insert(key.clone(), transformed);
            }
        }
    }
    ret
}

/// # diff()
///
/// Returns Delta - difference between the two attribute sets
///  - base: first quill delta
///  - attrib: second quill delta
pub fn diff(attrib: &Attributes, base: &Attributes) -> Attributes {
    let mut ret = Attributes::default();
    attrib.keys().chain(base.keys()).for_each(|key| {
        match (attrib.get(key), base.get(key)) {
            (Some(AttrVal::Delta(before)), Some(AttrVal::Delta(after))) => {
                if let Ok(nested) = before.diff(after, 0) {
                    if !nested.is_empty() {
                        ret.insert(key.clone(), nested);
                    }
                }
            }
            (a, b) if a != b => match b {
                None => {
                    ret.insert(key.clone(), AttrVal::Null);
                }
                Some(x) => {
                    ret.insert(key.clone(), x.clone());
                }
            },
            _ => {}
        }
    });
    ret
}

/// # invert()
///
/// Returned an inverted quill delta that has the opposite effect of against
/// a base document quill delta.
///
/// That is:<br>
/// `base.compose(quill_delta-rs).compose(inverted) === base`.
///
/// # Panics
pub fn invert(attr: &Attributes, base: &Attributes) -> Attributes {
    let mut base_inverted = Attributes::default();
    //Fixme: saves a potential panic by not using .unwrap()
    //Fixme: But which implementation is faster ...
    for (key, val) in &**base {
        if let (AttrVal::Delta(original), Some(AttrVal::Delta(change))) = (val, attr.get(key)) {
            base_inverted.insert(key.clone(), change.invert(original));
        } else if base.get(key) != attr.get(key) && attr.get(key).is_some() {
            base_inverted.insert(key, val.clone());
        }
    }

    attr.keys().for_each(|key| {
        if attr.get(key) != base.get(key) && base.get(key).is_none() {
            base_inverted.insert(key.clone(), AttrVal::Null);
        }
    });
    base_inverted
}

impl From<HashMap<String, AttrVal>> for Attributes {
    fn from(m: HashMap<String, AttrVal>) -> Self {
        Attributes { attr: m }
    }
}

#[cfg(test)]
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_fmt(self))
    }
}

//It is not possible to extend a trait defined in another crate
//In this case that is HashMap, so we define a function instead
#[cfg(test)]
pub(crate) fn display_fmt(attr: &Attributes) -> String {
    let mut at = String::new();
    for (k, v) in attr.iter() {
        if at.is_empty() {
            at = format!(r#"{k:?}:{v}"#);
        } else {
            at = format!(r#"{at}; {k:?}:{v}"#);
        }
    }
    format!(r#" Attr[{at}] "#)
}
