pub mod serie;
