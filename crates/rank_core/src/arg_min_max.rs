//! Streaming min/max-with-ties accumulator (spec §4.9).
//!
//! Grounded on `examples/original_source/src/util/stats/arg_min_max.py`:
//! ingest `(item, value)` pairs one at a time; `snapshot()` freezes the
//! current min, max, and the insertion-ordered list of items tied at each
//! extreme into an immutable value.

/// Immutable snapshot of extrema and their arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgMinMax<Arg, Val> {
    pub min: Option<Val>,
    pub max: Option<Val>,
    pub argmin: Vec<Arg>,
    pub argmax: Vec<Arg>,
}

/// Streaming accumulator over `(item, value)` pairs.
#[derive(Clone, Debug)]
pub struct ArgMinMaxAccumulator<Arg, Val: PartialOrd> {
    min: Option<Val>,
    max: Option<Val>,
    argmin: Vec<Arg>,
    argmax: Vec<Arg>,
}

impl<Arg: Clone, Val: PartialOrd + Clone> Default for ArgMinMaxAccumulator<Arg, Val> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Arg: Clone, Val: PartialOrd + Clone> ArgMinMaxAccumulator<Arg, Val> {
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            argmin: Vec::new(),
            argmax: Vec::new(),
        }
    }

    /// Ingest one `(item, value)` pair.
    pub fn process(&mut self, item: Arg, value: Val) -> &mut Self {
        match &self.min {
            None => {
                self.min = Some(value.clone());
                self.argmin = vec![item.clone()];
            }
            Some(current_min) if value < *current_min => {
                self.min = Some(value.clone());
                self.argmin = vec![item.clone()];
            }
            Some(current_min) if value == *current_min => {
                self.argmin.push(item.clone());
            }
            _ => {}
        }

        match &self.max {
            None => {
                self.max = Some(value.clone());
                self.argmax = vec![item];
            }
            Some(current_max) if value > *current_max => {
                self.max = Some(value.clone());
                self.argmax = vec![item];
            }
            Some(current_max) if value == *current_max => {
                self.argmax.push(item);
            }
            _ => {}
        }

        self
    }

    /// Immutable snapshot of the current min, max, argmin, and argmax.
    pub fn snapshot(&self) -> ArgMinMax<Arg, Val> {
        ArgMinMax {
            min: self.min.clone(),
            max: self.max.clone(),
            argmin: self.argmin.clone(),
            argmax: self.argmax.clone(),
        }
    }
}
