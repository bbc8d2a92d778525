// File: src/render.rs
// Purpose: Maud markup for the sign-up page, fields and inline errors

use maud::{html, Markup, DOCTYPE};
use signup_validation::Field;

use crate::controller::{FieldView, FormController};

/// Red circle with a white exclamation mark, shown in the label of a failing field
pub fn error_icon() -> Markup {
    html! {
        svg width="24" height="24" xmlns="http://www.w3.org/2000/svg" {
            g fill="none" fill-rule="evenodd" {
                circle fill="#FF7979" cx="12" cy="12" r="12" {}
                rect fill="#FFF" x="11" y="6" width="2" height="9" rx="1" {}
                rect fill="#FFF" x="11" y="17" width="2" height="2" rx="1" {}
            }
        }
    }
}

/// Endpoint receiving field events
pub const FIELD_EVENT_PATH: &str = "/field";

/// One input with its label glyph and message, as rendered in the full page.
///
/// The password value is never echoed back into the page.
pub fn render_field(form: &FormController, field: Field) -> Markup {
    field_markup(form, field, false)
}

/// A field fragment answering a field event from the same page.
///
/// The fragment replaces the field in place, so the typed password is kept.
pub fn render_field_fragment(form: &FormController, field: Field) -> Markup {
    field_markup(form, field, true)
}

/// `hx-trigger` value for the events that validate `field`, if any
pub fn hx_trigger(form: &FormController, field: Field) -> Option<String> {
    let triggers = form.field_triggers(field);
    if triggers.is_empty() {
        return None;
    }
    Some(
        triggers
            .into_iter()
            .map(|event| event.hx_trigger())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn field_markup(form: &FormController, field: Field, echo_password: bool) -> Markup {
    let view: FieldView<'_> = form.field_view(field);
    let value = match field {
        Field::Password if !echo_password => "",
        _ => view.value,
    };

    let trigger = hx_trigger(form, field);
    let hx_post = trigger
        .as_ref()
        .map(|_| format!("{}/{}", FIELD_EVENT_PATH, field.name()));
    let hx_target = trigger.as_ref().map(|_| format!("#field-{}", field.name()));
    let hx_vals = trigger.as_ref().map(|_| {
        format!(
            "js:{{_event: event.type, _touched: {}, _submit_count: {}}}",
            form.touched(field),
            form.submit_count()
        )
    });
    let hx_swap = trigger.as_ref().map(|_| "outerHTML");

    html! {
        div id=(format!("field-{}", field.name())) {
            span {
                input
                    type=(field.input_type())
                    placeholder=(field.placeholder())
                    id=(field.input_id())
                    name=(field.name())
                    value=(value)
                    class=(view.state.css_class())
                    hx-post=[hx_post]
                    hx-trigger=[trigger]
                    hx-target=[hx_target]
                    hx-swap=[hx_swap]
                    hx-vals=[hx_vals];
                label for=(field.input_id()) {
                    @if view.error.is_some() {
                        (error_icon())
                    }
                }
            }
            @if let Some(message) = view.error {
                p { (message) }
            }
        }
    }
}

/// The `<form>` element with all four fields, usable as a standalone fragment
pub fn render_form(form: &FormController) -> Markup {
    html! {
        form.form-signup__content__body #signup-form method="post" action="/" novalidate {
            @for field in Field::ALL {
                (render_field(form, field))
            }
            button type="submit" { "CLAIM YOUR FREE TRIAL" }
            p {
                "By clicking the button, you are agreeing to our"
                span { " Terms and Services" }
            }
        }
    }
}

/// Full HTML document
pub fn render_page(form: &FormController) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Sign up" }
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body {
                main.form-signup {
                    section.form-signup__title {
                        h1 { "Learn to code by watching others" }
                        p {
                            "See how experienced developers solve problems in real-time. Watching "
                            "scripted tutorials is great, but understanding how developers think "
                            "is invaluable."
                        }
                    }
                    section.form-signup__content {
                        div.form-signup__content__header {
                            p {
                                span { "Try it free 7 days" }
                                " then 120/mo. thereafter"
                            }
                        }
                        (render_form(form))
                    }
                }
            }
        }
    }
}
