use super::Page;
use crate::{dom, toast};
use ferrara_core::form::{FieldVerdict, FormField, FormValidator, INVALID_CLASS};
use ferrara_core::Result;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const FORM_SELECTOR: &str = "form";
const CONTROL_SELECTOR: &str = "input, textarea, select";

/// Current value of a form control
fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn control_name(element: &Element) -> String {
    element
        .get_attribute("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| element.id())
}

fn read_field(element: &Element) -> FormField {
    let (name, value) = (control_name(element), control_value(element));
    if element.has_attribute("required") {
        FormField::required(name, value)
    } else {
        FormField::optional(name, value)
    }
}

fn form_controls(form: &HtmlFormElement) -> Result<Vec<Element>> {
    let list = form.query_selector_all(CONTROL_SELECTOR).map_err(dom::js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Client-side check of required fields on submit
pub fn init(page: &Page) -> Result<()> {
    let timing = page.config().notifications;

    for element in dom::require_all(page.document(), FORM_SELECTOR)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let document = page.document().clone();
        let submitted = form.clone();
        let validator = FormValidator::new();

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            let controls = match form_controls(&submitted) {
                Ok(controls) => controls,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read form fields");
                    return;
                }
            };
            let fields: Vec<FormField> = controls.iter().map(read_field).collect();

            let report = validator.validate(&fields);
            for (control, verdict) in controls.iter().zip(report.verdicts()) {
                let marked = match verdict {
                    FieldVerdict::Invalid => dom::set_class(control, INVALID_CLASS, true),
                    FieldVerdict::Valid => dom::set_class(control, INVALID_CLASS, false),
                    FieldVerdict::Unchecked => Ok(()),
                };
                if let Err(e) = marked {
                    tracing::warn!(error = %e, "Failed to mark form field");
                }
            }

            if let Err(e) = toast::show(&document, &report.notification(), timing) {
                tracing::warn!(error = %e, "Failed to show form notification");
            }
            match report.into_result() {
                Ok(()) => submitted.reset(),
                Err(e) => tracing::info!(reason = %e, "Form submission blocked"),
            }
        })?;
    }
    Ok(())
}
