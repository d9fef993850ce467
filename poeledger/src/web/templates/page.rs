use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render, DOCTYPE};

use super::components::footer::Footer;
use super::head::HtmlHead;

pub(crate) const SITE_NAME: &str = "PoE Ledger";
pub(crate) const SITE_DESCRIPTION: &str = "A historical price tracker for Path of Exile";

pub(crate) trait Page {
    fn get_name(&'_ self) -> String;
    fn get_description(&'_ self) -> Option<String> {
        Some(SITE_DESCRIPTION.to_string())
    }
    fn draw_body(&self) -> Markup;
}

pub(crate) struct RenderPage<T: Page>(pub(crate) T);

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().into_string()).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.0;
        let name = page.get_name();
        let title = if name == SITE_NAME {
            name
        } else {
            format!("{name} | {SITE_NAME}")
        };
        let description = page.get_description();
        let head = HtmlHead {
            title: &title,
            description: description.as_deref(),
        };
        html! {
          (DOCTYPE)
          html lang="en" {
            (head)
            body {
              (page.draw_body())
              (Footer)
            }
          }
        }
    }
}
