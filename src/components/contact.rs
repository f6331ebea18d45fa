use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::submit::{ContactRequest, SubmitError, Transport};

const SUBMIT_LABEL: &str = "Gửi tin nhắn";
const SENDING_LABEL: &str = "Đang gửi...";
const SUCCESS_MESSAGE: &str = "Cảm ơn bạn đã liên hệ! Chúng tôi sẽ phản hồi trong 24h.";
const FAILURE_MESSAGE: &str = "Có lỗi xảy ra. Vui lòng thử lại sau.";

const SERVICES: [(&str, &str); 4] = [
    ("web", "Thiết kế website"),
    ("landing", "Landing page"),
    ("seo", "SEO & Marketing"),
    ("other", "Khác"),
];

/// Submit button state. While busy the original label is parked so it can
/// always be put back, whatever the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    label: String,
    saved: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            saved: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_busy(&self) -> bool {
        self.saved.is_some()
    }

    /// False if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.saved = Some(std::mem::replace(&mut self.label, SENDING_LABEL.to_string()));
        true
    }

    pub fn finish(&mut self) {
        if let Some(original) = self.saved.take() {
            self.label = original;
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

/// What the form shows once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub message: &'static str,
    /// The fields were emptied and the inputs need to follow.
    pub cleared: bool,
}

/// Success clears the fields, failure keeps them. Either way the button
/// comes back with its original label.
pub fn settle(
    request: &mut ContactRequest,
    button: &mut SubmitButton,
    result: Result<(), SubmitError>,
) -> Settled {
    let settled = match result {
        Ok(()) => {
            log::info!("contact form submitted");
            *request = ContactRequest::default();
            Settled {
                message: SUCCESS_MESSAGE,
                cleared: true,
            }
        }
        Err(e) => {
            log::warn!("contact form failed: {}", e);
            Settled {
                message: FAILURE_MESSAGE,
                cleared: false,
            }
        }
    };
    button.finish();
    settled
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Finished(Result<(), SubmitError>),
}

pub struct ContactForm {
    request: ContactRequest,
    button: SubmitButton,
    transport: Transport,
    service_ref: NodeRef,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            request: ContactRequest::default(),
            button: SubmitButton::new(SUBMIT_LABEL),
            transport: Transport::from_config(),
            service_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.request.name,
                    Field::Email => &mut self.request.email,
                    Field::Phone => &mut self.request.phone,
                    Field::Service => &mut self.request.service,
                    Field::Message => &mut self.request.message,
                };
                *slot = value;
                true
            }
            ContactMsg::Submit => {
                if !self.button.begin() {
                    return false;
                }
                let payload = serde_json::to_string(&self.request).unwrap_or_default();
                gloo_console::log!("contact form payload:", payload);

                let transport = self.transport.clone();
                let request = self.request.clone();
                ctx.link().send_future(async move {
                    ContactMsg::Finished(transport.send(&request).await)
                });
                true
            }
            ContactMsg::Finished(result) => {
                let settled = settle(&mut self.request, &mut self.button, result);
                alert(settled.message);
                // a user-picked option ignores later `selected` attributes
                if settled.cleared {
                    if let Some(select) = self.service_ref.cast::<HtmlSelectElement>() {
                        select.set_value("");
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                ContactMsg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };
        let on_service = link.callback(|e: Event| {
            ContactMsg::Edit(
                Field::Service,
                e.target_unchecked_into::<HtmlSelectElement>().value(),
            )
        });
        let on_message = link.callback(|e: InputEvent| {
            ContactMsg::Edit(
                Field::Message,
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            )
        });
        let busy = self.button.is_busy();

        html! {
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="name">{"Họ và tên"}</label>
                        <input id="name" name="name" type="text" required=true
                            value={self.request.name.clone()} oninput={input(Field::Name)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" name="email" type="email" required=true
                            value={self.request.email.clone()} oninput={input(Field::Email)} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">{"Số điện thoại"}</label>
                        <input id="phone" name="phone" type="tel"
                            value={self.request.phone.clone()} oninput={input(Field::Phone)} />
                    </div>
                    <div class="form-group">
                        <label for="service">{"Dịch vụ quan tâm"}</label>
                        <select id="service" name="service" ref={self.service_ref.clone()} onchange={on_service}>
                            <option value="" selected={self.request.service.is_empty()}>{"Chọn dịch vụ"}</option>
                            { for SERVICES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={self.request.service == *value}>{*label}</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label for="message">{"Nội dung"}</label>
                    <textarea id="message" name="message" rows="5" required=true
                        value={self.request.message.clone()} oninput={on_message} />
                </div>
                <button type="submit" disabled={busy}
                    class={classes!("btn", "btn-primary", busy.then(|| "loading"))}>
                    {self.button.label()}
                </button>
            </form>
        }
    }
}
