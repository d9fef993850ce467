use maud::{html, Render};

pub(crate) struct Footer;

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                span { "Price data courtesy of " a href="https://poe.ninja" { "poe.ninja" } "." }
                " "
                span { "This product isn't affiliated with or endorsed by Grinding Gear Games in any way." }
            }
        }
    }
}
