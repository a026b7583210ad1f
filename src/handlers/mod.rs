/// The independent checks the validation pipeline is composed of.
///
/// Every stage except [`validation::dnsmx`] is pure and local.
pub mod validation;
