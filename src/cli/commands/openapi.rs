//! Print the OpenAPI document

use utoipa::OpenApi;

use crate::api::docs::ApiDoc;

pub fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
