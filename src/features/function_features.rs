use std::fmt;

use crate::core::Result;
use crate::features::FeatureExtractor;

pub type FeatureFn<C, D, F> = Box<dyn Fn(&C, &D) -> Option<F> + Send + Sync>;

/// Features produced by an ordered list of functions.
///
/// Each function sees the class and the document and contributes at most one
/// feature. Features come out in registration order.
pub struct FunctionFeatures<C, D: ?Sized, F> {
    functions: Vec<FeatureFn<C, D, F>>,
}

impl<C, D: ?Sized, F> FunctionFeatures<C, D, F> {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    pub fn with_function<G>(mut self, function: G) -> Self
    where
        G: Fn(&C, &D) -> Option<F> + Send + Sync + 'static,
    {
        self.functions.push(Box::new(function));
        self
    }

    pub fn add_function<G>(&mut self, function: G)
    where
        G: Fn(&C, &D) -> Option<F> + Send + Sync + 'static,
    {
        self.functions.push(Box::new(function));
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<C, D: ?Sized, F> Default for FunctionFeatures<C, D, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, D: ?Sized, F> fmt::Debug for FunctionFeatures<C, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionFeatures")
            .field("functions", &self.functions.len())
            .finish()
    }
}

impl<C, D: ?Sized, F> FeatureExtractor<C, D> for FunctionFeatures<C, D, F> {
    type Feature = F;

    fn extract_features(&self, class: &C, document: &D) -> Result<Vec<F>> {
        Ok(self
            .functions
            .iter()
            .filter_map(|function| function(class, document))
            .collect())
    }
}
