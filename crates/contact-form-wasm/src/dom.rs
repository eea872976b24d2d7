//! Browser surface for the form controller
//!
//! [`DomSurface`] implements [`FormSurface`] on top of `web-sys`, and
//! [`attach`] wires one form's `blur` / `input` / `submit` events to a shared
//! [`FormController`].

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};
use std::time::Duration;

use contact_form_validation::config::CONFIG_ATTRIBUTE;
use contact_form_validation::feedback::{
    RegionStyle, ERROR_REGION_STYLE, REGION_BASE_STYLE, SUCCESS_REGION_STYLE,
};
use contact_form_validation::{
    BorderTint, Feedback, Field, FormConfig, FormController, FormSurface, ResetTicket,
};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

pub type SharedController = Rc<RefCell<FormController<DomSurface>>>;

const CONTROL_SELECTOR: &str = "input, select, textarea";

/// A form control whose value can be read and written
#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Control {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Control::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(Control::TextArea(area)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(Control::Select)
    }

    fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::TextArea(el) => el.value(),
            Control::Select(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Control::Input(el) => el.set_value(value),
            Control::TextArea(el) => el.set_value(value),
            Control::Select(el) => el.set_value(value),
        }
    }

    fn html(&self) -> &HtmlElement {
        match self {
            Control::Input(el) => el.as_ref(),
            Control::TextArea(el) => el.as_ref(),
            Control::Select(el) => el.as_ref(),
        }
    }
}

pub struct DomSurface {
    window: Window,
    form: HtmlFormElement,
    fields: HashMap<Field, Control>,
    error_region: HtmlElement,
    success_region: HtmlElement,
    config: FormConfig,
    controller: Weak<RefCell<FormController<DomSurface>>>,
}

impl DomSurface {
    fn set_border(&self, element: &HtmlElement, tint: BorderTint) {
        set_style(element, "border-color", tint.color(&self.config.palette));
    }

    fn form_controls(&self) -> Vec<HtmlElement> {
        form_controls(&self.form)
    }
}

impl FormSurface for DomSurface {
    type TimerHandle = Option<i32>;

    fn value(&self, field: Field) -> Option<String> {
        self.fields.get(&field).map(Control::value)
    }

    fn set_value(&mut self, field: Field, value: &str) {
        if let Some(control) = self.fields.get(&field) {
            control.set_value(value);
        }
    }

    fn set_tint(&mut self, field: Field, tint: BorderTint) {
        if let Some(control) = self.fields.get(&field) {
            self.set_border(control.html(), tint);
        }
    }

    fn clear_all_tints(&mut self) {
        for control in self.form_controls() {
            self.set_border(&control, BorderTint::Neutral);
        }
        // Fields may sit outside the form element (`form="contactForm"`)
        for control in self.fields.values() {
            self.set_border(control.html(), BorderTint::Neutral);
        }
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        match feedback.error_markup(&self.config) {
            Some(markup) => {
                self.error_region.set_inner_html(&markup.into_string());
                show_region(&self.error_region, &ERROR_REGION_STYLE);
            }
            None => hide_region(&self.error_region),
        }

        match feedback.success_markup() {
            Some(markup) => {
                self.success_region.set_inner_html(&markup.into_string());
                show_region(&self.success_region, &SUCCESS_REGION_STYLE);
            }
            None => hide_region(&self.success_region),
        }
    }

    fn scroll_errors_into_view(&mut self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        self.error_region
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn schedule_reset(&mut self, delay: Duration, ticket: ResetTicket) -> Self::TimerHandle {
        let controller = self.controller.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(controller) = controller.upgrade() {
                dispatch(&controller, |ctrl| {
                    ctrl.on_reset_due(ticket);
                });
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(?err, "failed to schedule form reset");
                None
            }
        }
    }

    fn cancel_reset(&mut self, handle: Self::TimerHandle) {
        if let Some(handle) = handle {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// Bind the validator to the form named by `config.form_id`.
///
/// Returns `Ok(None)` without binding anything when the form is missing or
/// already has its feedback regions (i.e. was attached before).
pub fn attach(document: &Document, config: FormConfig) -> Result<Option<SharedController>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let Some(form) = find_form(document, &config.form_id) else {
        debug!(form_id = %config.form_id, "contact form not found, not attaching");
        return Ok(None);
    };

    for region_id in [&config.error_region_id, &config.success_region_id] {
        if document.get_element_by_id(region_id).is_some() {
            warn!(%region_id, "feedback region already exists, not attaching");
            return Ok(None);
        }
    }

    let mut fields = HashMap::new();
    for field in Field::ALL {
        let control = document
            .get_element_by_id(config.field_id(field))
            .and_then(Control::from_element);
        if let Some(control) = control {
            fields.insert(field, control);
        }
    }

    // Success is inserted last so it sits above the error list
    let error_region = create_region(document, &form, &config.error_region_id)?;
    let success_region = create_region(document, &form, &config.success_region_id)?;

    let bound: Vec<(Field, Control)> = fields.iter().map(|(f, c)| (*f, c.clone())).collect();
    let present: HashSet<Field> = fields.keys().copied().collect();

    let controller: SharedController = Rc::new_cyclic(|weak| {
        let surface = DomSurface {
            window,
            form: form.clone(),
            fields,
            error_region,
            success_region,
            config: config.clone(),
            controller: weak.clone(),
        };
        RefCell::new(FormController::new(surface, config.clone()))
    });

    for (field, control) in &bound {
        let ctrl = controller.clone();
        let field = *field;
        listen(control.html(), "blur", move |_| {
            dispatch(&ctrl, |c| c.on_blur(field));
        })?;
    }

    for (field, control) in &bound {
        let ctrl = controller.clone();
        let field = *field;
        listen(control.html(), "input", move |_| {
            dispatch(&ctrl, |c| c.on_input(field));
        })?;
    }

    // Remaining controls only get their tint cleared and count as an edit
    for element in form_controls(&form) {
        let is_field = config
            .field_for_id(&element.id())
            .is_some_and(|f| present.contains(&f));
        if is_field {
            continue;
        }

        let ctrl = controller.clone();
        let neutral = config.palette.neutral.clone();
        let target = element.clone();
        listen(&element, "input", move |_| {
            set_style(&target, "border-color", &neutral);
            dispatch(&ctrl, |c| c.on_edit());
        })?;
    }

    let ctrl = controller.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        dispatch(&ctrl, |c| {
            c.on_submit();
        });
    })?;

    info!(form_id = %config.form_id, fields = present.len(), "contact form attached");
    Ok(Some(controller))
}

/// Attach using the form's `data-contact-form` JSON, or the defaults
pub fn attach_from_markup(document: &Document) -> Result<Option<SharedController>, JsValue> {
    let mut config = FormConfig::default();

    if let Some(form) = find_form(document, &config.form_id) {
        if let Some(json) = form.get_attribute(CONFIG_ATTRIBUTE) {
            match FormConfig::from_json(&json) {
                Ok(parsed) => config = parsed,
                Err(err) => warn!(%err, "ignoring invalid {} attribute", CONFIG_ATTRIBUTE),
            }
        }
    }

    attach(document, config)
}

/// Attach once the document has loaded (immediately if it already has)
pub fn attach_on_ready() -> Result<(), JsValue> {
    // Workers and node have no document to bind to
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        debug!("no document, skipping auto-attach");
        return Ok(());
    };

    if document.ready_state() != "loading" {
        attach_from_markup(&document)?;
        return Ok(());
    }

    let doc = document.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(err) = attach_from_markup(&doc) {
            warn!(?err, "failed to attach contact form");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}

fn dispatch(controller: &SharedController, f: impl FnOnce(&mut FormController<DomSurface>)) {
    match controller.try_borrow_mut() {
        Ok(mut ctrl) => f(&mut ctrl),
        Err(_) => warn!("form controller busy, event dropped"),
    }
}

/// Add a listener that lives as long as the page
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn find_form(document: &Document, id: &str) -> Option<HtmlFormElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
}

fn form_controls(form: &HtmlFormElement) -> Vec<HtmlElement> {
    let Ok(list) = form.query_selector_all(CONTROL_SELECTOR) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn create_region(
    document: &Document,
    form: &HtmlFormElement,
    id: &str,
) -> Result<HtmlElement, JsValue> {
    let region: HtmlElement = document.create_element("div")?.dyn_into()?;
    region.set_id(id);
    region.style().set_css_text(REGION_BASE_STYLE);
    form.insert_before(&region, form.first_child().as_ref())?;
    Ok(region)
}

fn show_region(region: &HtmlElement, style: &RegionStyle) {
    set_style(region, "display", "block");
    set_style(region, "background-color", style.background);
    set_style(region, "border", style.border);
    set_style(region, "color", style.color);
}

fn hide_region(region: &HtmlElement) {
    set_style(region, "display", "none");
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(?err, property, "failed to set style");
    }
}
