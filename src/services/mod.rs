pub mod serie_service;
pub use serie_service::{SerieError, SerieService};

pub mod serie_service_impl;
pub use serie_service_impl::SeaOrmSerieService;
