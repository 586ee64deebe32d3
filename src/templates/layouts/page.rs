use maud::{html, Markup, DOCTYPE};

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    h3 { "Mortgage Rate Tracker" }
                    nav {
                        ul {
                            li { a href="/" { "Rates" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
