use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config::ContactConfig;
use crate::contact::{
    ContactFormController, FormFields, FormHandle, GlooTransport, StatusDisplay, StatusMessage,
    TimeoutScheduler,
};

pub enum StatusAction {
    Show(StatusMessage),
    FadeOut,
}

impl Reducible for StatusMessage {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StatusAction::Show(message) => Rc::new(message),
            StatusAction::FadeOut => Rc::new(self.faded()),
        }
    }
}

impl StatusDisplay for UseReducerDispatcher<StatusMessage> {
    fn show(&self, message: StatusMessage) {
        self.dispatch(StatusAction::Show(message));
    }

    fn fade_out(&self) {
        self.dispatch(StatusAction::FadeOut);
    }
}

#[derive(Clone, PartialEq)]
pub struct FormRefs {
    form: NodeRef,
    section: NodeRef,
}

impl FormRefs {
    pub fn new(form: NodeRef, section: NodeRef) -> Self {
        Self { form, section }
    }
}

// Mirrors which controls the browser puts into `FormData`.
fn is_submitted(kind: &str, checked: bool, disabled: bool) -> bool {
    if disabled {
        return false;
    }
    match kind {
        "submit" | "button" | "reset" | "image" | "file" => false,
        "checkbox" | "radio" => checked,
        _ => true,
    }
}

fn push_named(fields: &mut FormFields, name: String, value: String) {
    if !name.is_empty() {
        fields.push(name, value);
    }
}

impl FormHandle for FormRefs {
    fn collect(&self) -> FormFields {
        let mut fields = FormFields::new();
        let Some(form) = self.form.cast::<HtmlFormElement>() else {
            warn!("Contact form is not mounted, nothing to collect");
            return fields;
        };

        let controls = form.elements();
        for index in 0..controls.length() {
            let Some(element) = controls.item(index) else {
                continue;
            };
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                if is_submitted(&input.type_(), input.checked(), input.disabled()) {
                    push_named(&mut fields, input.name(), input.value());
                }
            } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                if is_submitted("textarea", false, area.disabled()) {
                    push_named(&mut fields, area.name(), area.value());
                }
            } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
                if is_submitted("select", false, select.disabled()) {
                    push_named(&mut fields, select.name(), select.value());
                }
            }
        }
        fields
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_into_view(&self) {
        if let Some(section) = self.section.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub config: ContactConfig,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let status = use_reducer(StatusMessage::default);
    let form_ref = use_node_ref();
    let section_ref = use_node_ref();

    let controller = {
        let dispatcher = status.dispatcher();
        let refs = FormRefs::new(form_ref.clone(), section_ref.clone());
        use_memo(
            move |config: &ContactConfig| {
                ContactFormController::new(
                    config.clone(),
                    GlooTransport,
                    dispatcher,
                    refs,
                    TimeoutScheduler,
                )
            },
            props.config.clone(),
        )
    };

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = controller.handle_submit();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = pending.await;
                if !outcome.is_success() {
                    debug!("Contact form settled with {:?}", outcome);
                }
            });
        })
    };

    let status_style = format!(
        "color: {}; opacity: {};",
        status.kind.color(),
        if status.visible { "1" } else { "0" }
    );

    html! {
        <section id="contacto" class="contact-section" ref={section_ref}>
            <style>
                {r#"
                    .contact-section {
                        padding: 4rem 1.5rem;
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    #contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    #contact-form input,
                    #contact-form textarea {
                        padding: 0.8rem;
                        border: 1px solid #ccc;
                        border-radius: 6px;
                        font: inherit;
                    }
                    #contact-form button {
                        background: #a8b720;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.9rem;
                        cursor: pointer;
                    }
                    #form-status {
                        min-height: 1.5em;
                        margin-top: 1rem;
                        transition: opacity 0.5s ease;
                    }
                "#}
            </style>
            <h2>{"Contacto"}</h2>
            <form
                id="contact-form"
                ref={form_ref}
                action={controller.config().endpoint.clone()}
                method="post"
                onsubmit={onsubmit}
            >
                <input type="text" name="name" placeholder="Nombre" />
                <input type="email" name="email" placeholder="Correo electrónico" />
                <input type="tel" name="phone" placeholder="Teléfono (opcional)" />
                <textarea name="message" rows="5" placeholder="Mensaje" />
                <button type="submit">{"Enviar"}</button>
            </form>
            <p id="form-status" class={status.kind.css_class()} style={status_style} aria-live="polite">
                {status.text.clone()}
            </p>
        </section>
    }
}
