use utoipa::OpenApi;

use super::series;
use super::{ApiResponse, ErrorResponse, SerieMessage, SeriePayload};
use crate::models::serie::Serie;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Series API",
        description = "CRUD API for a database of TV series. Successful responses wrap \
                       their payload as `{ \"success\": true, \"data\": ... }`.",
        contact(
            name = "Rafael dos Santos",
            email = "Rafaelsantos4002@gmail.com",
            url = "https://github.com/updatecodemaster"
        ),
        license(
            name = "Open Source",
            url = "https://pt.wikipedia.org/wiki/C%C3%B3digo_aberto"
        )
    ),
    paths(
        series::list_series,
        series::create_serie,
        series::get_serie,
        series::update_serie,
        series::delete_serie,
    ),
    components(schemas(
        Serie,
        SeriePayload,
        SerieMessage,
        ErrorResponse,
        ApiResponse<Serie>,
        ApiResponse<Vec<Serie>>,
        ApiResponse<SerieMessage>
    )),
    tags((name = "series", description = "TV series records"))
)]
pub struct ApiDoc;
