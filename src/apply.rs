// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::error::Error;
use crate::optransform::OpTransform;
use crate::utils::DeltaTransformations;

/// Apply a change delta to a document delta.
pub trait Apply {
    /// # Errors
    /// `Error::LengthMismatch` when `change` retains or deletes past the end
    /// of `self`.
    fn apply(&self, change: &Delta) -> Result<Delta, Error>;

    /// # Panics
    /// when `change` retains or deletes past the end of `self`. Use this
    /// only once the caller has already validated that bound.
    fn apply_unchecked(&self, change: &Delta) -> Delta;
}

impl Apply for Delta {
    fn apply(&self, change: &Delta) -> Result<Delta, Error> {
        if change.change_length() > self.insert_length() {
            return Err(Error::LengthMismatch);
        }
        self.compose(change)
    }

    fn apply_unchecked(&self, change: &Delta) -> Delta {
        self.apply(change).expect("change addresses past end of document")
    }
}
