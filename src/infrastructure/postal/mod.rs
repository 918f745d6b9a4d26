pub mod viacep;

pub use viacep::ViaCepClient;
