// templates/components/widgets.rs
//
// Form controls for the pipeline widgets. Every page wraps its widgets in one
// GET form so a submit re-runs the page with all current values.

use crate::pipeline::{MultiSelect, NumberInput, RangeSlider, SingleSelect};
use maud::{html, Markup};

fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

pub fn widget_form(body: Markup) -> Markup {
    html! {
        form method="get" action="/" class="card widgets" {
            (body)
        }
    }
}

pub fn multi_select(w: &MultiSelect) -> Markup {
    html! {
        label {
            (w.label)
            select name=(w.name) multiple size=(w.options.len().clamp(2, 6)) {
                @for option in &w.options {
                    option value=(option) selected[w.is_selected(option)] { (option) }
                }
            }
        }
    }
}

/// `auto_submit` re-runs the page on change, which is how dependent
/// dropdowns pick up their new domain.
pub fn single_select(w: &SingleSelect, auto_submit: bool) -> Markup {
    html! {
        label {
            (w.label)
            select name=(w.name) onchange=[auto_submit.then_some("this.form.submit()")] {
                @for option in &w.options {
                    option value=(option) selected[w.value() == Some(option.as_str())] { (option) }
                }
            }
        }
    }
}

pub fn number_input(w: &NumberInput) -> Markup {
    html! {
        label {
            (w.label)
            input type="number" name=(w.name)
                min=(num(w.bounds.min)) max=(num(w.bounds.max)) step="1"
                value=(num(w.value));
        }
    }
}

pub fn range_slider(w: &RangeSlider) -> Markup {
    html! {
        fieldset style="border: none; padding: 0; margin: 0;" {
            legend { (w.label) ": " (num(w.value.min)) " to " (num(w.value.max)) }
            input type="range" name=(RangeSlider::min_key(w.name))
                min=(num(w.bounds.min)) max=(num(w.bounds.max)) step="1"
                value=(num(w.value.min));
            input type="range" name=(RangeSlider::max_key(w.name))
                min=(num(w.bounds.min)) max=(num(w.bounds.max)) step="1"
                value=(num(w.value.max));
        }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}

/// Submits the form with `display=1`, which un-gates the page's chart.
pub fn display_button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" name="display" value="1" { (label) }
    }
}
