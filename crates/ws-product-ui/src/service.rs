//! Catalog rendering service.
//!
//! Holds the webshop settings and the translator for a page and hands out
//! grid and list renderings. The browser binding owns the container
//! elements; this only produces markup and the visibility decision.

use crate::card::CardContext;
use crate::grid;
use crate::i18n::{Translator, Untranslated};
use crate::list;
use serde::{Deserialize, Serialize};
use ws_api_types::{ItemRecord, ViewPreference, ViewSettings};

/// Markup for one products section plus whether the section is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub html: String,
    pub hidden: bool,
}

/// Options the page passes when it asks for a catalog view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub items: Vec<ItemRecord>,
    pub settings: ViewSettings,
    pub preference: ViewPreference,
}

pub struct CatalogRenderer<T: Translator = Untranslated> {
    settings: ViewSettings,
    i18n: T,
}

impl CatalogRenderer<Untranslated> {
    pub fn untranslated(settings: ViewSettings) -> Self {
        Self::new(settings, Untranslated)
    }
}

impl<T: Translator> CatalogRenderer<T> {
    pub fn new(settings: ViewSettings, i18n: T) -> Self {
        Self { settings, i18n }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    fn context(&self) -> CardContext<'_> {
        CardContext::new(&self.settings, &self.i18n)
    }

    pub fn grid(&self, items: &[ItemRecord], preference: &ViewPreference) -> RenderedView {
        grid::render(items, &self.context(), preference)
    }

    pub fn list(&self, items: &[ItemRecord], preference: &ViewPreference) -> RenderedView {
        list::render(items, &self.context(), preference)
    }

    /// Both views, grid first. Exactly one is visible for a grid or list
    /// preference; neither is for anything else.
    pub fn render_both(
        &self,
        items: &[ItemRecord],
        preference: &ViewPreference,
    ) -> (RenderedView, RenderedView) {
        (self.grid(items, preference), self.list(items, preference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_decode_from_page_payload() -> anyhow::Result<()> {
        let options: CatalogOptions = serde_json::from_value(json!({
            "items": [
                { "item_code": "A-1", "item_name": "Alpha", "in_stock": 1 },
                { "item_code": "B-2", "item_name": "Beta", "has_variants": 1 }
            ],
            "settings": { "enabled": 1, "enable_checkout": 1 },
            "preference": "List View"
        }))?;

        assert_eq!(options.items.len(), 2);
        assert!(options.settings.enabled);
        assert_eq!(options.preference, ViewPreference::List);
        Ok(())
    }

    #[test]
    fn exactly_one_view_visible() {
        let renderer = CatalogRenderer::untranslated(ViewSettings::default());
        let items = vec![ItemRecord {
            item_code: "A-1".into(),
            ..Default::default()
        }];

        let (grid, list) = renderer.render_both(&items, &ViewPreference::Grid);
        assert!(!grid.hidden && list.hidden);
        assert!(grid.html.contains("item-card"));
        assert!(list.html.contains("list-row"));

        let (grid, list) = renderer.render_both(&items, &ViewPreference::List);
        assert!(grid.hidden && !list.hidden);
    }

    #[test]
    fn missing_preference_hides_both_views() -> anyhow::Result<()> {
        let options: CatalogOptions = serde_json::from_value(json!({
            "items": [{ "item_code": "A-1" }],
            "settings": {}
        }))?;
        let renderer = CatalogRenderer::untranslated(options.settings.clone());

        let (grid, list) = renderer.render_both(&options.items, &options.preference);
        assert!(grid.hidden);
        assert!(list.hidden);
        Ok(())
    }

    #[test]
    fn translator_reaches_fragments() {
        let settings = ViewSettings {
            enabled: true,
            enable_checkout: true,
            ..Default::default()
        };
        let renderer = CatalogRenderer::new(settings, |s: &str| match s {
            "Add to Cart" => "Sepete Ekle".to_owned(),
            other => other.to_owned(),
        });
        let items = vec![ItemRecord {
            item_code: "A-1".into(),
            in_stock: true,
            ..Default::default()
        }];
        assert!(renderer.grid(&items, &ViewPreference::Grid).html.contains("Sepete Ekle"));
    }
}
