//! Server-rendered HTML pages.
//!
//! Plain string building; every interpolated value goes through [`escape`].

use std::fmt::Write as _;

use barstock_inventory::{CATEGORIES, Item, Notice, stock_categories};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left}\
nav a{margin-right:1rem}\
.flash{padding:.6rem;margin:1rem 0}\
.flash-success{background:#e6f4ea}\
.flash-error{background:#fce8e6}\
.current{font-weight:bold}";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let flash = notice
        .map(|n| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                n.kind.as_str(),
                escape(&n.text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Inventory</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
<a href="/">Inventory</a>
<a href="/order_list">Order List</a>
<a href="/visualize_data">Visualize Data</a>
<a href="/download_csv">Download CSV</a>
<a href="/info">Info</a>
</nav>
<h1>{title}</h1>
{flash}
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

fn category_options(selected: Option<&str>) -> String {
    let mut out = String::new();
    for category in stock_categories() {
        let marker = if Some(*category) == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{0}"{marker}>{0}</option>"#, escape(category));
    }
    out
}

fn category_nav(current: &str) -> String {
    let mut out = String::from(r#"<div class="categories">"#);
    for category in CATEGORIES {
        let class = if *category == current { r#" class="current""# } else { "" };
        let _ = write!(
            out,
            r#"<a href="/category/{0}"{class}>{0}</a> "#,
            escape(category)
        );
    }
    out.push_str("</div>");
    out
}

fn item_form_fields(item: Option<&Item>) -> String {
    let (name, quantity, unit, location) = match item {
        Some(i) => (
            escape(&i.name),
            i.quantity.to_string(),
            escape(&i.unit),
            escape(&i.location),
        ),
        None => Default::default(),
    };
    format!(
        r#"<label>Name <input name="name" required value="{name}"></label>
<label>Quantity <input name="quantity" type="number" required value="{quantity}"></label>
<label>Unit <input name="unit" required value="{unit}"></label>
<label>Category <select name="category">{options}</select></label>
<label>Location <input name="location" required value="{location}"></label>"#,
        options = category_options(item.map(|i| i.category.as_str())),
    )
}

/// Inventory list with category navigation and the add form.
pub fn index_page(items: &[Item], current_category: &str, notice: Option<&Notice>) -> String {
    let mut rows = String::new();
    for item in items {
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{name}</td><td>{quantity}</td><td>{unit}</td><td>{category}</td><td>{location}</td>
<td><a href="/edit_item/{id}">Edit</a>
<form method="post" action="/delete_item/{id}" style="display:inline"><button type="submit">Delete</button></form></td></tr>
"#,
            id = item.id,
            name = escape(&item.name),
            quantity = item.quantity,
            unit = escape(&item.unit),
            category = escape(&item.category),
            location = escape(&item.location),
        );
    }

    let body = format!(
        r#"{nav}
<table>
<thead><tr><th>ID</th><th>Name</th><th>Quantity</th><th>Unit</th><th>Category</th><th>Location</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add item</h2>
<form method="post" action="/add_item">
{fields}
<button type="submit">Add</button>
</form>"#,
        nav = category_nav(current_category),
        fields = item_form_fields(None),
    );

    layout(&format!("Inventory: {current_category}"), notice, &body)
}

pub fn edit_page(item: &Item) -> String {
    let body = format!(
        r#"<form method="post" action="/update_item/{id}">
{fields}
<button type="submit">Save</button>
</form>
<p><a href="/">Cancel</a></p>"#,
        id = item.id,
        fields = item_form_fields(Some(item)),
    );
    layout(&format!("Edit {}", item.name), None, &body)
}

/// Order form: one amount input per item, named `order_<id>`.
pub fn order_page(items: &[Item], notice: Option<&Notice>) -> String {
    let mut rows = String::new();
    for item in items {
        let _ = write!(
            rows,
            r#"<tr data-category="{category}"><td>{name}</td><td>{quantity}</td><td>{unit}</td><td>{category}</td><td>{location}</td>
<td><input name="order_{id}" type="number" min="0" value="0"></td></tr>
"#,
            id = item.id,
            name = escape(&item.name),
            quantity = item.quantity,
            unit = escape(&item.unit),
            category = escape(&item.category),
            location = escape(&item.location),
        );
    }

    let categories: Vec<String> = CATEGORIES.iter().map(|c| escape(c)).collect();
    let body = format!(
        r#"<p>Categories: {categories}</p>
<form method="post" action="/submit_order">
<table>
<thead><tr><th>Name</th><th>On hand</th><th>Unit</th><th>Category</th><th>Location</th><th>Order</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<button type="submit">Submit order</button>
</form>"#,
        categories = categories.join(", "),
    );

    layout("Order List", notice, &body)
}

/// Read-only table with the CSV export's columns.
pub fn visualize_page(items: &[Item]) -> String {
    let mut rows = String::new();
    for item in items {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            item.id,
            escape(&item.name),
            item.quantity,
            escape(&item.unit),
            escape(&item.category),
            escape(&item.location),
        );
    }

    let body = format!(
        r#"<table>
<thead><tr><th>ID</th><th>Name</th><th>Quantity</th><th>Unit</th><th>Category</th><th>Location</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<p><a href="/download_csv">Download as CSV</a></p>"#
    );

    layout("Inventory Data", None, &body)
}

pub fn info_page() -> String {
    let body = r#"<p>Track stock across the Food, Soda, Liquor, Wine and Beer categories.</p>
<ul>
<li>Add, edit and delete items from the inventory page.</li>
<li>Filter the list by category using the links above the table.</li>
<li>Use the order list to build an order; the confirmation lists what was requested.</li>
<li>Download the full inventory as <code>inventory_report.csv</code>.</li>
</ul>"#;
    layout("About", None, body)
}

pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(r#"<p>{}</p><p><a href="/">Back to inventory</a></p>"#, escape(message));
    layout(title, None, &body)
}
