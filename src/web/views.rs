//! HTML pages. Every piece of user-provided text goes through [`escape`].

use crate::listing::{format_total, CategoryGroup, Listing};
use crate::models::{Category, Item};
use std::fmt::Write as _;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">List</a> | <a href=\"/items\">Items</a> | <a href=\"/categories\">Categories</a> | \
         <a href=\"/add_item\">Add item</a> | <a href=\"/add_category\">Add category</a></nav>\n\
         <h1>{title}</h1>\n{content}</body>\n</html>\n",
        title = escape(title),
    )
}

fn item_row(out: &mut String, item: &Item, with_flip: bool) {
    let class = if item.done { " class=\"done\"" } else { "" };
    let _ = write!(
        out,
        "<li{class}>{name} &times; {quantity} @ {price} = {cost} <a href=\"/edit_item/{id}\">edit</a>",
        name = escape(&item.name),
        quantity = item.quantity,
        price = item.price,
        cost = format_total(item.cost()),
        id = item.id,
    );
    if with_flip {
        let label = if item.done { "undo" } else { "done" };
        let _ = write!(out, " <a href=\"/flip/{}\">{label}</a>", item.id);
    }
    out.push_str("</li>\n");
}

fn render_groups(out: &mut String, groups: &[CategoryGroup], with_flip: bool) {
    for group in groups {
        let _ = writeln!(out, "<h2>{}</h2>", escape(&group.category.description));
        out.push_str("<ul>\n");
        for item in &group.items {
            item_row(out, item, with_flip);
        }
        out.push_str("</ul>\n");
    }
}

/// Main page: grouped items with done toggles and the grand total.
pub fn index_page(listing: &Listing) -> String {
    let mut content = String::new();
    render_groups(&mut content, &listing.groups, true);
    let _ = writeln!(content, "<p id=\"total\">Total: {}</p>", listing.formatted_total());
    layout("Shopping list", &content)
}

/// Items grouped by category, without a total.
pub fn items_page(listing: &Listing) -> String {
    let mut content = String::new();
    render_groups(&mut content, &listing.groups, false);
    layout("Items", &content)
}

pub fn categories_page(categories: &[Category]) -> String {
    let mut content = String::from("<ul>\n");
    for category in categories {
        let _ = writeln!(
            content,
            "<li>{description} (priority {priority}) <a href=\"/edit_category/{id}\">edit</a></li>",
            description = escape(&category.description),
            priority = category.priority,
            id = category.id,
        );
    }
    content.push_str("</ul>\n");
    layout("Categories", &content)
}

/// Add form when `existing` is `None`, edit form otherwise.
pub fn category_form(existing: Option<&Category>) -> String {
    let (title, action, description, priority) = match existing {
        Some(c) => (
            "Edit category",
            format!("/edit_category/{}", c.id),
            escape(&c.description),
            c.priority.to_string(),
        ),
        None => ("Add category", "/add_category".to_string(), String::new(), "0".to_string()),
    };

    let content = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Description <input name=\"description\" value=\"{description}\" required></label>\n\
         <label>Priority <input name=\"priority\" type=\"number\" value=\"{priority}\" required></label>\n\
         <button type=\"submit\">Save</button>\n</form>\n"
    );
    layout(title, &content)
}

/// Add form when `existing` is `None`, edit form otherwise.
pub fn item_form(existing: Option<&Item>, categories: &[Category]) -> String {
    let (title, action) = match existing {
        Some(item) => ("Edit item", format!("/edit_item/{}", item.id)),
        None => ("Add item", "/add_item".to_string()),
    };
    let name = existing.map(|i| escape(&i.name)).unwrap_or_default();
    let quantity = existing.map(|i| i.quantity.to_string()).unwrap_or_default();
    let price = existing.map(|i| i.price.to_string()).unwrap_or_default();
    let selected = existing.map(|i| i.category_id);

    let mut options = String::new();
    for category in categories {
        let marker = if selected == Some(category.id) { " selected" } else { "" };
        let _ = writeln!(
            options,
            "<option value=\"{}\"{marker}>{}</option>",
            category.id,
            escape(&category.description),
        );
    }

    let content = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input name=\"name\" value=\"{name}\" required></label>\n\
         <label>Quantity <input name=\"quantity\" value=\"{quantity}\" required></label>\n\
         <label>Price <input name=\"price\" value=\"{price}\" required></label>\n\
         <label>Category <select name=\"category_id\">\n{options}</select></label>\n\
         <button type=\"submit\">Save</button>\n</form>\n"
    );
    layout(title, &content)
}

pub fn error_page(status: u16, message: &str) -> String {
    layout(&format!("Error {status}"), &format!("<p>{}</p>\n", escape(message)))
}
