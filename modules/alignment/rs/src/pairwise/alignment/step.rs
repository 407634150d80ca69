use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::{eyre, Result};

use seqalign_core_rs::num::PrimUInt;

use super::op::Op;

/// Run of identical alignment operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// Number of columns in the run. Guaranteed to be greater than zero.
    len: Len,
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Appends a run of `len` columns, merging it with the last step when possible.
    /// Runs longer than `Len::max_value()` are split into several steps.
    pub fn push(steps: &mut Vec<Step<Len>>, op: Op, mut len: usize) {
        let max = Len::max_value().to_usize().unwrap_or(usize::MAX);
        if let Some(last) = steps.last_mut().filter(|x| x.op == op) {
            let free = max - last.len.to_usize().unwrap_or(max);
            let taken = free.min(len);
            last.len = last.len + num::cast::<usize, Len>(taken).unwrap_or_else(Len::zero);
            len -= taken;
        }
        while len > 0 {
            let taken = max.min(len);
            steps.push(Step {
                len: num::cast::<usize, Len>(taken).unwrap_or_else(Len::max_value),
                op,
            });
            len -= taken;
        }
    }

    /// Merges adjacent steps with identical operations in place.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.len() < 2 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);
        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    /// Extended CIGAR string, e.g. `10=1X2D5=`.
    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
