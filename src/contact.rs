use std::rc::Rc;

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::config::{self, PHONE_COUNTRY_CODE, PHONE_PREFIX};
use crate::dom;
use crate::error::{PageError, SubmitError};
use crate::modal;

const BUSY_LABEL: &str = "<span>Отправка...</span>";

/// Formats whatever is in the phone field as `+996 XXX XXX XXX`.
///
/// Rebuilt from the digits on every keystroke: a typed (or already rendered)
/// `996` country code and a trunk `0` are dropped, anything past nine local
/// digits is ignored.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let local = digits.strip_prefix(PHONE_COUNTRY_CODE).unwrap_or(&digits);
    let local = local.strip_prefix('0').unwrap_or(local);

    if local.is_empty() {
        return String::new();
    }

    let mut formatted = String::from(PHONE_PREFIX.trim_end());
    for (i, digit) in local.chars().take(9).enumerate() {
        if i % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub interest: Option<String>,
}

impl ContactSubmission {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            name: data.get("name").as_string(),
            phone: data.get("phone").as_string(),
            interest: data.get("interest").as_string(),
        }
    }
}

pub async fn send_submission(
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let response = Request::post(endpoint).json(submission)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

pub struct ContactForm {
    document: Document,
    form: HtmlFormElement,
    success_modal: Option<Element>,
    endpoint: String,
}

impl ContactForm {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        Self::init_with_endpoint(document, config::get_form_endpoint())
    }

    pub fn init_with_endpoint(
        document: &Document,
        endpoint: &str,
    ) -> Result<Option<Rc<Self>>, PageError> {
        let form = match document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            Some(form) => form,
            None => return Ok(None),
        };
        let controller = Rc::new(Self {
            document: document.clone(),
            form,
            success_modal: document.get_element_by_id("successModal"),
            endpoint: endpoint.to_string(),
        });

        if let Some(phone) = document
            .get_element_by_id("phone")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            bind_phone_mask(&phone)?;
        }

        {
            let c = controller.clone();
            dom::listen(&controller.form, "submit", move |e| {
                e.prevent_default();
                let c = c.clone();
                spawn_local(async move { c.submit().await });
            })?;
        }

        Ok(Some(controller))
    }

    async fn submit(&self) {
        let button = self
            .form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_label = button.as_ref().map(|b| b.inner_html());
        if let Some(button) = &button {
            button.set_inner_html(BUSY_LABEL);
            button.set_disabled(true);
        }

        let outcome = match FormData::new_with_form(&self.form) {
            Ok(data) => {
                let submission = ContactSubmission::from_form_data(&data);
                send_submission(&self.endpoint, &submission).await
            }
            Err(e) => Err(SubmitError::Connection(PageError::from(e).to_string())),
        };

        match outcome {
            Ok(()) => {
                log::info!("contact request sent");
                if let Some(success) = &self.success_modal {
                    modal::show(&self.document, success);
                }
                self.form.reset();
            }
            Err(e) => {
                log::warn!("contact request failed: {}", e);
                if let Ok(window) = dom::window() {
                    let _ = window.alert_with_message(e.alert_text());
                }
            }
        }

        if let (Some(button), Some(label)) = (&button, &original_label) {
            button.set_inner_html(label);
            button.set_disabled(false);
        }
    }
}

fn bind_phone_mask(phone: &HtmlInputElement) -> Result<(), PageError> {
    {
        let input = phone.clone();
        dom::listen(phone, "input", move |_| {
            input.set_value(&format_phone(&input.value()));
        })?;
    }
    {
        let input = phone.clone();
        dom::listen(phone, "focus", move |_| {
            if input.value().is_empty() {
                input.set_value(PHONE_PREFIX);
            }
        })?;
    }
    Ok(())
}
