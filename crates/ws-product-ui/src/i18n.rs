//! Translation seam.
//!
//! Labels are looked up through the page's translation function when one is
//! available. Renderers only ever see this trait.

pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

/// Returns every label as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}
