//! Pure functions from application state to HTML markup. Nothing is
//! diffed: each call produces the full markup for its region.

mod templates;

use std::fmt;

use anyhow::{Error, Result};
use handlebars::{Handlebars, handlebars_helper, html_escape};
use serde::Serialize;

use crate::catalog::{Catalog, Category, Filter, ProductId};
use crate::conversation::ChatThread;
use crate::selection::SelectionSet;

#[derive(Debug)]
pub enum View {
    Page,
    Products,
    Selection,
    Chat,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Escape `content` and turn blank-line separated blocks into
/// paragraphs and single newlines into line breaks.
pub fn format_paragraphs(content: &str) -> String {
    content
        .split("\n\n")
        .map(|para| format!("<p>{}</p>", html_escape(para).replace('\n', "<br>")))
        .collect()
}

handlebars_helper!(paragraphs: |content: str| format_paragraphs(content));

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_helper("paragraphs", Box::new(paragraphs));
    for (view, template) in [
        (View::Page, templates::PAGE),
        (View::Products, templates::PRODUCTS),
        (View::Selection, templates::SELECTION),
        (View::Chat, templates::CHAT),
    ] {
        registry
            .register_template_string(&view.to_string(), template)
            .expect("Failed to register template");
    }
    registry
}

#[derive(Serialize)]
struct ProductCard<'a> {
    id: ProductId,
    name: &'a str,
    brand: &'a str,
    description: &'a str,
    image: &'a str,
    selected: bool,
    expanded: bool,
}

#[derive(Serialize)]
struct ProductsView<'a> {
    unset: bool,
    empty: bool,
    products: Vec<ProductCard<'a>>,
}

#[derive(Serialize)]
struct SelectionView<'a> {
    empty: bool,
    products: Vec<SelectedTag<'a>>,
}

#[derive(Serialize)]
struct SelectedTag<'a> {
    id: ProductId,
    name: &'a str,
}

#[derive(Serialize)]
struct CategoryOption {
    key: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct PageView {
    has_notice: bool,
    notice: String,
    has_filter: bool,
    categories: Vec<CategoryOption>,
    products: String,
    selection: String,
    chat: String,
}

/// Render the product grid for the current filter. `expanded` is the
/// product whose description is showing, if any.
pub fn render_products(
    registry: &Handlebars,
    catalog: &Catalog,
    selection: &SelectionSet,
    expanded: Option<ProductId>,
) -> Result<String, Error> {
    let visible = catalog.visible();
    let products: Vec<ProductCard> = visible
        .iter()
        .flatten()
        .map(|p| ProductCard {
            id: p.id,
            name: &p.name,
            brand: &p.brand,
            description: &p.description,
            image: &p.image,
            selected: selection.contains(p.id),
            expanded: expanded == Some(p.id),
        })
        .collect();
    let view = ProductsView {
        unset: visible.is_none(),
        empty: products.is_empty(),
        products,
    };
    Ok(registry.render(&View::Products.to_string(), &view)?)
}

pub fn render_selection(registry: &Handlebars, selection: &SelectionSet) -> Result<String, Error> {
    let view = SelectionView {
        empty: selection.is_empty(),
        products: selection
            .products()
            .iter()
            .map(|p| SelectedTag {
                id: p.id,
                name: &p.name,
            })
            .collect(),
    };
    Ok(registry.render(&View::Selection.to_string(), &view)?)
}

pub fn render_chat(registry: &Handlebars, thread: &ChatThread) -> Result<String, Error> {
    Ok(registry.render(
        &View::Chat.to_string(),
        &serde_json::json!({ "entries": thread.entries() }),
    )?)
}

/// Everything needed to draw the whole page.
pub struct PageState<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionSet,
    pub thread: &'a ChatThread,
    pub expanded: Option<ProductId>,
    pub notice: Option<&'a str>,
}

pub fn render_page(registry: &Handlebars, state: &PageState) -> Result<String, Error> {
    let current = match state.catalog.filter() {
        Filter::Category(c) => Some(*c),
        _ => None,
    };
    let view = PageView {
        has_notice: state.notice.is_some(),
        notice: state.notice.unwrap_or_default().to_string(),
        has_filter: current.is_some(),
        categories: Category::ALL
            .into_iter()
            .map(|c| CategoryOption {
                key: c.key(),
                label: c.label(),
                selected: current == Some(c),
            })
            .collect(),
        products: render_products(registry, state.catalog, state.selection, state.expanded)?,
        selection: render_selection(registry, state.selection)?,
        chat: render_chat(registry, state.thread)?,
    };
    Ok(registry.render(&View::Page.to_string(), &view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::Role;
    use crate::catalog::tests::{product, sample_catalog};

    #[test]
    fn test_products_placeholder_before_filter() {
        let registry = templates();
        let html =
            render_products(&registry, &sample_catalog(), &SelectionSet::new(), None).unwrap();
        assert!(html.contains("Select a category to discover products"));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_products_filtered_by_cleanser() {
        let registry = templates();
        let mut catalog = sample_catalog();
        catalog.set_filter("Cleanser");
        let html = render_products(&registry, &catalog, &SelectionSet::new(), None).unwrap();
        assert_eq!(html.matches("class=\"product-card").count(), 2);
        assert!(html.contains("Foaming Facial Cleanser"));
        assert!(html.contains("Hydrating Cleanser"));
        assert!(!html.contains("Moisturizing Cream"));
    }

    #[test]
    fn test_products_empty_state() {
        let registry = templates();
        let mut catalog = sample_catalog();
        catalog.set_filter("fragrance");
        let html = render_products(&registry, &catalog, &SelectionSet::new(), None).unwrap();
        assert!(html.contains("No products found in this category"));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_products_mark_selected_and_expanded() {
        let registry = templates();
        let mut catalog = sample_catalog();
        catalog.set_filter("cleanser");
        let mut selection = SelectionSet::new();
        selection.toggle(2, &catalog);

        let html = render_products(&registry, &catalog, &selection, Some(1)).unwrap();
        assert!(html.contains("<div class=\"product-card selected\" data-id=\"2\">"));
        assert!(html.contains("<div class=\"product-card\" data-id=\"1\">"));
        assert_eq!(html.matches("selected-badge").count(), 1);
        assert!(html.contains("class=\"product-description show\" id=\"desc-1\""));
        assert!(html.contains("class=\"product-description\" id=\"desc-2\""));
    }

    #[test]
    fn test_products_escape_catalog_text() {
        let registry = templates();
        let mut catalog = Catalog::new(vec![product(
            9,
            "<script>alert(1)</script>",
            Category::Makeup,
        )]);
        catalog.set_filter("makeup");
        let html = render_products(&registry, &catalog, &SelectionSet::new(), None).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_selection_empty_disables_generate() {
        let registry = templates();
        let html = render_selection(&registry, &SelectionSet::new()).unwrap();
        assert!(html.contains("No products selected yet"));
        assert!(html.contains("class=\"generate-btn\" disabled"));
    }

    #[test]
    fn test_selection_lists_products() {
        let registry = templates();
        let catalog = sample_catalog();
        let mut selection = SelectionSet::new();
        selection.toggle(3, &catalog);
        selection.toggle(1, &catalog);
        let html = render_selection(&registry, &selection).unwrap();
        assert_eq!(html.matches("selected-product-tag").count(), 2);
        assert!(html.find("Moisturizing Cream") < html.find("Foaming Facial Cleanser"));
        assert!(!html.contains("disabled"));
        assert!(html.contains("Clear All"));
    }

    #[test]
    fn test_format_paragraphs() {
        assert_eq!(
            format_paragraphs("Step 1\nStep 2\n\n<b>Tip</b>"),
            "<p>Step 1<br>Step 2</p><p>&lt;b&gt;Tip&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_chat_renders_welcome_and_entries() {
        let registry = templates();
        let mut thread = ChatThread::new();
        thread.push(Role::User, "What goes first?");
        thread.push(Role::Assistant, "The cleanser.\n\nThen moisturizer.");
        let html = render_chat(&registry, &thread).unwrap();
        assert!(html.contains("Welcome!"));
        assert!(html.contains("chat-message user-message"));
        assert!(html.contains("<p>The cleanser.</p><p>Then moisturizer.</p>"));
    }

    #[test]
    fn test_page_with_notice_and_filter() {
        let registry = templates();
        let mut catalog = sample_catalog();
        catalog.set_filter("Suncare");
        let state = PageState {
            catalog: &catalog,
            selection: &SelectionSet::new(),
            thread: &ChatThread::new(),
            expanded: None,
            notice: Some("Please select at least one product to generate a routine."),
        };
        let html = render_page(&registry, &state).unwrap();
        assert!(html.contains("role=\"alert\">Please select at least one product"));
        assert!(html.contains("<option value=\"suncare\" selected>Suncare</option>"));
        assert!(html.contains("Sunscreen SPF 50"));
    }
}
