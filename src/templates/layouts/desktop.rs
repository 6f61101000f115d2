use crate::session::PageId;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  display: flex;
  min-height: 100vh;
  background-image: linear-gradient(120deg, #FFB5BC, #F54655);
}
aside.sidebar {
  width: 240px;
  padding: 1.5rem 1rem;
  background-color: #ffffff;
}
aside.sidebar button {
  display: block;
  width: 100%;
  padding: 0.5rem;
  color: #000000;
  background-color: transparent;
  border: 1px solid #FF5A5F;
  border-radius: 6px;
  margin-bottom: 10px;
  cursor: pointer;
}
aside.sidebar button.active {
  background-color: #FF5A5F;
  color: #ffffff;
}
main.content {
  flex: 1;
  padding: 2rem;
  color: #ffffff;
}
.card {
  background: #ffffff;
  color: #111827;
  border-radius: 10px;
  padding: 1rem 1.25rem;
  margin-bottom: 1.5rem;
}
.grid-2 {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
  gap: 1.5rem;
}
.widgets {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  align-items: flex-end;
}
.widgets label {
  display: flex;
  flex-direction: column;
  font-size: 0.9rem;
  gap: 4px;
}
figure.chart { margin: 0; }
figure.chart svg { width: 100%; height: auto; background: #ffffff; border-radius: 8px; }
hr.accent { height: 1px; border: none; background-color: #FF5A5F; }
"#;

pub fn desktop_layout(title: &str, current: PageId, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Airbnb Analysis" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                aside class="sidebar" {
                    h2 { "Navigation" }
                    @for page in PageId::ALL {
                        form method="post" action="/nav" {
                            button type="submit" name="page" value=(page.slug())
                                class=[(page == current).then_some("active")]
                            {
                                (page.label())
                            }
                        }
                    }
                }
                main class="content" {
                    (content)
                }
            }
        }
    }
}
