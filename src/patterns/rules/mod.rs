pub mod explicit;
pub mod divisible;
pub mod vocabulary;
pub mod ordinal;
pub mod coincidence;
pub mod reference;
pub mod position;
