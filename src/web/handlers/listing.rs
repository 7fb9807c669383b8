use crate::db::with_connection;
use crate::error::AppError;
use crate::listing::Listing;
use crate::web::dtos::ListingResponse;
use crate::web::{views, AppContext, Response};

pub fn index(ctx: &AppContext) -> Result<Response, AppError> {
    let listing = with_connection(&ctx.db, "load listing", Listing::load)?;
    Ok(Response::html(views::index_page(&listing)))
}

pub fn api_listing(ctx: &AppContext) -> Result<Response, AppError> {
    let listing = with_connection(&ctx.db, "load listing", Listing::load)?;
    let body = serde_json::to_string(&ListingResponse::from(listing))
        .map_err(|e| AppError::Internal(format!("Failed to encode listing: {e}")))?;
    Ok(Response::json(body))
}
