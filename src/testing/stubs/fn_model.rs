use crate::core::Result;
use crate::models::ProbabilisticModel;

type PriorFn<C> = Box<dyn Fn(&C) -> f64 + Send + Sync>;
type ConditionalFn<C, F> = Box<dyn Fn(&F, &C) -> f64 + Send + Sync>;

/// Model whose answers come straight from two closures, unchecked.
pub struct FnModel<C, F> {
    prior: PriorFn<C>,
    conditional: ConditionalFn<C, F>,
}

impl<C, F> FnModel<C, F> {
    pub fn new<P, Q>(prior: P, conditional: Q) -> Self
    where
        P: Fn(&C) -> f64 + Send + Sync + 'static,
        Q: Fn(&F, &C) -> f64 + Send + Sync + 'static,
    {
        Self {
            prior: Box::new(prior),
            conditional: Box::new(conditional),
        }
    }

    /// Same prior for every class, same conditional for every feature.
    pub fn uniform(prior: f64, conditional: f64) -> Self {
        Self::new(move |_| prior, move |_, _| conditional)
    }
}

impl<C, F> ProbabilisticModel<C, F> for FnModel<C, F> {
    fn prior(&self, class: &C) -> Result<f64> {
        Ok((self.prior)(class))
    }

    fn conditional_probability(&self, feature: &F, class: &C) -> Result<f64> {
        Ok((self.conditional)(feature, class))
    }
}
