use crate::db::{with_connection, with_transaction};
use crate::error::AppError;
use crate::models::Category;
use crate::validation::{parse_integer, validate_category_description};
use crate::web::forms::Form;
use crate::web::{views, AppContext, Response};

struct CategoryInput<'a> {
    description: &'a str,
    priority: i64,
}

fn read_form(form: &Form) -> Result<CategoryInput<'_>, AppError> {
    let description = validate_category_description(form.required("description")?)?;
    let priority = parse_integer("priority", form.required("priority")?)?;
    Ok(CategoryInput { description, priority })
}

pub fn list_categories(ctx: &AppContext) -> Result<Response, AppError> {
    let categories = with_connection(&ctx.db, "load categories", |conn| Ok(Category::find_all(conn)?))?;
    Ok(Response::html(views::categories_page(&categories)))
}

pub fn add_category_form() -> Response {
    Response::html(views::category_form(None))
}

pub fn create_category(ctx: &AppContext, form: &Form) -> Result<Response, AppError> {
    let input = read_form(form)?;

    let category = with_transaction(&ctx.db, "create category", |tx| {
        Category::create(tx, input.description, input.priority)
            .map_err(|e| AppError::from(e).on_unique_violation(input.description))
    })?;

    log::debug!("Created category {} ('{}')", category.id, category.description);
    Ok(Response::redirect("/add_category"))
}

pub fn edit_category_form(ctx: &AppContext, id: i64) -> Result<Response, AppError> {
    let category = with_connection(&ctx.db, "load category", |conn| {
        Category::find_by_id(conn, id)?.ok_or(AppError::NotFound { entity: "Category" })
    })?;
    Ok(Response::html(views::category_form(Some(&category))))
}

pub fn update_category(ctx: &AppContext, id: i64, form: &Form) -> Result<Response, AppError> {
    let input = read_form(form)?;

    with_transaction(&ctx.db, "update category", |tx| {
        let updated = Category::update(tx, id, input.description, input.priority)
            .map_err(|e| AppError::from(e).on_unique_violation(input.description))?;
        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound { entity: "Category" })
        }
    })?;

    log::debug!("Updated category {id}");
    Ok(Response::redirect("/categories"))
}
