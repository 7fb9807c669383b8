use crate::db::{with_connection, with_transaction};
use crate::error::AppError;
use crate::listing::Listing;
use crate::models::{Category, Item, ItemFields};
use crate::validation::{parse_decimal, parse_integer, validate_item_name};
use crate::web::forms::Form;
use crate::web::{views, AppContext, Response};
use rusqlite::Connection;

fn read_form(form: &Form) -> Result<ItemFields<'_>, AppError> {
    let quantity = parse_decimal("quantity", form.required("quantity")?)?;
    let name = validate_item_name(form.required("name")?)?;
    let price = parse_decimal("price", form.required("price")?)?;
    let category_id = parse_integer("category_id", form.required("category_id")?)?;
    Ok(ItemFields { quantity, name, price, category_id })
}

/// Map constraint failures on an item write: duplicate names and unknown categories.
fn write_error(e: rusqlite::Error, name: &str) -> AppError {
    AppError::from(e).on_unique_violation(name).on_fk_violation("Category")
}

fn require_item(conn: &Connection, id: i64) -> Result<Item, AppError> {
    Item::find_by_id(conn, id)?.ok_or(AppError::NotFound { entity: "Item" })
}

pub fn list_items(ctx: &AppContext) -> Result<Response, AppError> {
    let listing = with_connection(&ctx.db, "load items", Listing::load)?;
    Ok(Response::html(views::items_page(&listing)))
}

pub fn add_item_form(ctx: &AppContext) -> Result<Response, AppError> {
    let categories = with_connection(&ctx.db, "load categories", |conn| Ok(Category::find_all(conn)?))?;
    Ok(Response::html(views::item_form(None, &categories)))
}

pub fn create_item(ctx: &AppContext, form: &Form) -> Result<Response, AppError> {
    let fields = read_form(form)?;

    let item = with_transaction(&ctx.db, "create item", |tx| {
        Item::create(tx, &fields).map_err(|e| write_error(e, fields.name))
    })?;

    log::debug!("Created item {} ('{}')", item.id, item.name);
    Ok(Response::redirect("/add_item"))
}

pub fn edit_item_form(ctx: &AppContext, id: i64) -> Result<Response, AppError> {
    let (item, categories) = with_connection(&ctx.db, "load item", |conn| {
        let item = require_item(conn, id)?;
        Ok((item, Category::find_all(conn)?))
    })?;
    Ok(Response::html(views::item_form(Some(&item), &categories)))
}

pub fn update_item(ctx: &AppContext, id: i64, form: &Form) -> Result<Response, AppError> {
    let fields = read_form(form)?;

    with_transaction(&ctx.db, "update item", |tx| {
        require_item(tx, id)?;
        Item::update(tx, id, &fields).map_err(|e| write_error(e, fields.name))
    })?;

    log::debug!("Updated item {id}");
    Ok(Response::redirect("/items"))
}

/// Invert an item's done flag.
pub fn flip_item(ctx: &AppContext, id: i64) -> Result<Response, AppError> {
    let done = with_transaction(&ctx.db, "flip item", |tx| {
        let item = require_item(tx, id)?;
        let done = !item.done;
        Item::set_done(tx, id, done)?;
        Ok(done)
    })?;

    log::debug!("Item {id} done = {done}");
    Ok(Response::redirect("/"))
}
