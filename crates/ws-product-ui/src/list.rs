//! Row list view.
//!
//! Same fragments as the grid, laid out one item per row with a wider title
//! budget. The cart controls sit beside the title and carry a quantity
//! indicator.

use crate::card::{self, CardContext, escape, hidden_if};
use crate::service::RenderedView;
use ws_api_types::{ItemRecord, ViewPreference};

pub const LIST_TITLE_LIMIT: usize = 200;

const BUTTON_STYLE: &str = "padding: 0.25rem 1rem; min-width: 135px;";

pub fn render(items: &[ItemRecord], ctx: &CardContext, preference: &ViewPreference) -> RenderedView {
    let html = items.iter().map(|item| item_row(item, ctx)).collect();
    RenderedView {
        html,
        hidden: *preference != ViewPreference::List,
    }
}

fn item_row(item: &ItemRecord, ctx: &CardContext) -> String {
    let title = card::item_title(item, LIST_TITLE_LIMIT);
    format!(
        r#"<div class="row list-row w-100 mb-4">{}<div class="col-10 text-left">{}{}</div></div>"#,
        image_html(item, &title, ctx),
        title_html(item, &title, ctx),
        item_details(item, ctx),
    )
}

fn image_html(item: &ItemRecord, title: &str, ctx: &CardContext) -> String {
    let href = escape(&item.href());
    let link = if item.website_image.is_empty() {
        format!(
            r#"<a class="product-link product-list-link" href="{href}" style="text-decoration: none"><div class="card-img-top no-image-list">{}</div></a>"#,
            escape(&card::abbr(title))
        )
    } else {
        format!(
            r#"<a class="product-link product-list-link" href="{href}"><img itemprop="image" class="website-image h-100 w-100" alt="{}" src="{}"></a>"#,
            escape(title),
            escape(&item.website_image)
        )
    };

    let wishlist = if !item.has_variants && ctx.settings.enable_wishlist {
        card::wishlist_icon(item, "like-action-list")
    } else {
        String::new()
    };

    format!(r#"<div class="col-2 border text-center rounded list-image">{link}{wishlist}</div>"#)
}

fn title_html(item: &ItemRecord, title: &str, ctx: &CardContext) -> String {
    let mut html = format!(
        r#"<div style="display: flex; margin-left: -15px;"><div class="col-8" style="margin-right: -15px;"><a href="{}" style="color: var(--gray-800); font-weight: 500;">{}</a></div>"#,
        escape(&item.href()),
        escape(title)
    );

    // Variant items keep their explore link even when the cart is off.
    if ctx.settings.enabled || item.has_variants {
        html.push_str(&format!(
            r#"<div class="col-4 cart-action-container{}">{}</div>"#,
            if item.in_cart { " d-flex" } else { "" },
            primary_button(item, ctx)
        ));
    }

    html.push_str("</div>");
    html
}

fn item_details(item: &ItemRecord, ctx: &CardContext) -> String {
    let description = if item.custom_short_description.is_empty() {
        &item.short_description
    } else {
        &item.custom_short_description
    };

    let stock = card::stock_availability(item, ctx);
    let stock = if stock.is_empty() {
        stock
    } else {
        format!("<br>{stock}")
    };

    format!(
        r#"<p class="product-code">{} | {} : {}</p><div class="mt-2" style="color: var(--gray-600) !important; font-size: 13px;">{}</div>{}"#,
        escape(&item.item_group),
        ctx.t("Item Code"),
        escape(&item.item_code),
        description,
        card::price_block(item, ctx, &stock),
    )
}

fn primary_button(item: &ItemRecord, ctx: &CardContext) -> String {
    if item.has_variants {
        return card::explore_button(item, ctx, "mb-0 mt-0");
    }
    if !card::can_add_to_cart(item, ctx.settings) {
        return String::new();
    }

    let code = escape(&item.item_code);
    format!(
        r##"<div id="{id}" class="btn btn-sm btn-primary btn-add-to-cart-list mb-0{add_hidden}" data-item-code="{code}" style="margin-top: 0px !important; max-height: 30px; float: right; {BUTTON_STYLE}"><span class="mr-2"><svg class="icon icon-md"><use href="#icon-assets"></use></svg></span>{add}</div><div class="cart-indicator list-indicator{goto_hidden}">{qty}</div><a href="/cart"><div class="btn btn-sm btn-primary btn-add-to-cart-list ml-4 go-to-cart mb-0 mt-0{goto_hidden}" data-item-code="{code}" style="{BUTTON_STYLE}">{goto}</div></a>"##,
        id = escape(&item.name),
        add_hidden = hidden_if(item.in_cart),
        goto_hidden = hidden_if(!item.in_cart),
        add = card::cart_button_text(ctx),
        goto = card::goto_cart_text(ctx),
        qty = card::qty_label(item.qty),
    )
}
