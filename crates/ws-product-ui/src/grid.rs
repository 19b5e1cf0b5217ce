//! Card grid view.

use crate::card::{self, CardContext, escape, hidden_if};
use crate::service::RenderedView;
use ws_api_types::{ItemRecord, ViewPreference};

pub const GRID_TITLE_LIMIT: usize = 90;

/// Render every item as a card. The view is hidden unless the shopper
/// prefers the grid; it is rendered either way.
pub fn render(items: &[ItemRecord], ctx: &CardContext, preference: &ViewPreference) -> RenderedView {
    let html = items.iter().map(|item| item_card(item, ctx)).collect();
    RenderedView {
        html,
        hidden: *preference != ViewPreference::Grid,
    }
}

fn item_card(item: &ItemRecord, ctx: &CardContext) -> String {
    let title = card::item_title(item, GRID_TITLE_LIMIT);
    format!(
        r#"<div class="col-sm-4 item-card"><div class="card text-left">{}{}</div></div>"#,
        image_html(item, &title),
        card_body(item, &title, ctx),
    )
}

fn image_html(item: &ItemRecord, title: &str) -> String {
    let href = escape(&item.href());
    let inner = if item.website_image.is_empty() {
        format!(
            r#"<div class="card-img-top no-image">{}</div>"#,
            escape(&card::abbr(title))
        )
    } else {
        format!(
            r#"<img itemprop="image" class="card-img" src="{}" alt="{}">"#,
            escape(&item.website_image),
            escape(title)
        )
    };

    format!(
        r#"<div class="card-img-container"><a href="{href}" style="text-decoration: none;">{inner}</a></div>"#
    )
}

fn card_body(item: &ItemRecord, title: &str, ctx: &CardContext) -> String {
    let mut html = String::from(
        r#"<div class="card-body text-left card-body-flex" style="width:100%"><div style="margin-top: 1rem; display: flex;">"#,
    );
    html.push_str(&format!(
        r#"<a href="{}"><div class="product-title" itemprop="name">{}</div></a>"#,
        escape(&item.href()),
        escape(title)
    ));

    if !item.has_variants {
        if ctx.settings.enable_wishlist {
            html.push_str(&card::wishlist_icon(item, "like-action"));
        }
        if ctx.settings.enabled {
            html.push_str(&cart_indicator(item));
        }
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class="product-category" itemprop="name">{}</div>"#,
        escape(&item.item_group)
    ));

    if !item.custom_short_description.is_empty() {
        html.push_str(&format!(
            r#"<div class="product-short-description text-muted" style="font-size: 12px; margin-top: 4px; line-height: 1.4; text-align: justify;">{}</div>"#,
            item.custom_short_description
        ));
    }

    if !item.formatted_price.is_empty() {
        html.push_str(&card::price_html(item, ctx));
    }

    html.push_str(&card::stock_availability(item, ctx));
    html.push_str(&primary_button(item, ctx));
    html.push_str("</div>");
    html
}

fn cart_indicator(item: &ItemRecord) -> String {
    format!(
        r#"<div class="cart-indicator{}" data-item-code="{}">{}</div>"#,
        hidden_if(!item.in_cart),
        escape(&item.item_code),
        card::qty_label(item.qty)
    )
}

fn primary_button(item: &ItemRecord, ctx: &CardContext) -> String {
    if item.has_variants {
        return card::explore_button(item, ctx, "w-100 mt-4");
    }
    if !card::can_add_to_cart(item, ctx.settings) {
        return String::new();
    }

    let code = escape(&item.item_code);
    format!(
        r##"<div id="{id}" class="btn btn-sm btn-primary btn-add-to-cart-list w-100 mt-2{add_hidden}" data-item-code="{code}"><span class="mr-2"><svg class="icon icon-md"><use href="#icon-assets"></use></svg></span>{add}</div><a href="/cart"><div class="btn btn-sm btn-primary btn-add-to-cart-list w-100 mt-4 go-to-cart-grid{goto_hidden}" data-item-code="{code}">{goto}</div></a>"##,
        id = escape(&item.name),
        add_hidden = hidden_if(item.in_cart),
        goto_hidden = hidden_if(!item.in_cart),
        add = card::cart_button_text(ctx),
        goto = card::goto_cart_text(ctx),
    )
}
