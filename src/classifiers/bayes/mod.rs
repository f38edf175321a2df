mod multinomial_nb;

pub use multinomial_nb::MultinomialNb;
