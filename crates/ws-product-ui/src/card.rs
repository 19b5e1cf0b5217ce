//! Fragment builders shared by the grid and list views.
//!
//! Every function here is pure: `(item, context)` in, HTML string out.
//! A fragment that does not apply to an item renders as an empty string.

use crate::i18n::Translator;
use ws_api_types::{ItemRecord, ViewSettings};

/// Settings plus the translation seam, borrowed for one render pass.
#[derive(Clone, Copy)]
pub struct CardContext<'a> {
    pub settings: &'a ViewSettings,
    pub i18n: &'a dyn Translator,
}

impl<'a> CardContext<'a> {
    pub fn new(settings: &'a ViewSettings, i18n: &'a dyn Translator) -> Self {
        Self { settings, i18n }
    }

    pub fn t(&self, label: &str) -> String {
        self.i18n.translate(label)
    }
}

/// Stock badge. Only shown for simple items when stock display is on.
pub fn stock_availability(item: &ItemRecord, ctx: &CardContext) -> String {
    if !ctx.settings.show_stock_availability || item.has_variants {
        return String::new();
    }

    if item.on_backorder {
        format!(
            r#"<span class="out-of-stock mt-2" style="color: var(--primary-color)">{}</span>"#,
            ctx.t("Available on backorder")
        )
    } else if !item.in_stock {
        format!(r#"<span class="out-of-stock mt-2">{}</span>"#, ctx.t("Out of stock"))
    } else if item.is_stock {
        format!(
            r#"<span class="in-stock in-green has-stock mt-2" style="font-size: 14px;">{}</span>"#,
            ctx.t("In stock")
        )
    } else {
        String::new()
    }
}

/// Wishlist heart toggle. `css_class` positions it for the calling view.
pub fn wishlist_icon(item: &ItemRecord, css_class: &str) -> String {
    let (wrapper_state, icon_state) = if item.wished {
        (" like-action-wished", "wished")
    } else {
        ("", "not-wished")
    };

    format!(
        r##"<div class="{css_class}{wrapper_state}" data-item-code="{code}"><svg class="icon sm"><use class="{icon_state} wish-icon" href="#icon-heart"></use></svg></div>"##,
        code = escape(&item.item_code),
    )
}

/// Price block: selling price, then struck-through MRP and discount when an
/// MRP is known.
pub fn price_html(item: &ItemRecord, ctx: &CardContext) -> String {
    price_block(item, ctx, "")
}

/// Price block with `trailing` markup placed before the closing tag.
pub fn price_block(item: &ItemRecord, ctx: &CardContext, trailing: &str) -> String {
    let mut html = format!(
        r#"<div class="product-price" itemprop="offers" itemscope itemtype="https://schema.org/AggregateOffer">{}"#,
        item.formatted_price
    );

    if !item.formatted_mrp.is_empty() {
        let mrp: String = item
            .formatted_mrp
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let discount = if item.discount.is_empty() {
            String::new()
        } else {
            format!("{} {}", item.discount, ctx.t("OFF"))
        };
        html.push_str(&format!(
            r#"<small class="striked-price"><s>{mrp}</s></small><small class="ml-1 product-info-green">{discount}</small>"#
        ));
    }

    html.push_str(trailing);
    html.push_str("</div>");
    html
}

pub fn cart_button_text(ctx: &CardContext) -> String {
    if ctx.settings.enable_checkout {
        ctx.t("Add to Cart")
    } else {
        ctx.t("Add to Quote")
    }
}

pub fn goto_cart_text(ctx: &CardContext) -> String {
    if ctx.settings.enable_checkout {
        ctx.t("Go to Cart")
    } else {
        ctx.t("Go to Quote")
    }
}

/// Link to the variant selection page. Empty for simple items.
pub fn explore_button(item: &ItemRecord, ctx: &CardContext, layout: &str) -> String {
    if !item.has_variants {
        return String::new();
    }

    format!(
        r#"<a href="{href}"><div class="btn btn-sm btn-explore-variants {layout}">{label}</div></a>"#,
        href = escape(&item.href()),
        label = ctx.t("Explore"),
    )
}

/// Simple items get a cart control when the cart is on and the item can be
/// sold right now.
pub fn can_add_to_cart(item: &ItemRecord, settings: &ViewSettings) -> bool {
    !item.has_variants
        && settings.enabled
        && (settings.allow_items_not_in_stock || item.in_stock)
}

/// Resolved display title, cut to `limit` characters plus `...`.
pub fn item_title(item: &ItemRecord, limit: usize) -> String {
    truncate(item.display_name(), limit)
}

pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Initials used in place of a missing product image.
pub fn abbr(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let initials: String = title
        .split(' ')
        .filter_map(|word| word.trim().chars().next())
        .take(2)
        .collect();

    if initials.is_empty() {
        "?".to_owned()
    } else {
        initials
    }
}

/// Quantity shown in the cart indicator; unset or zero shows 1.
pub fn qty_label(qty: Option<f64>) -> String {
    match qty {
        Some(q) if q > 0.0 && q.fract() == 0.0 => format!("{}", q as i64),
        Some(q) if q > 0.0 => q.to_string(),
        _ => "1".to_owned(),
    }
}

/// `" hidden"` when `hide` holds, for appending to a class list.
pub fn hidden_if(hide: bool) -> &'static str {
    if hide { " hidden" } else { "" }
}

/// Escape text for an HTML attribute or text node.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
