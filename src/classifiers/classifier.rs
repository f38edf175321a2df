use crate::core::Result;

pub trait Classifier<C, D: ?Sized> {
    /// Picks one of `classes` for `document`.
    fn classify(&self, classes: &[C], document: &D) -> Result<C>;
}
