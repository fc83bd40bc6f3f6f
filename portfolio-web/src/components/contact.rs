use crate::components::ui::SectionHeader;
use crate::components::ui::foundation as f;
use crate::hooks::use_timeout_when;
use crate::theme::use_theme;
use f::TargetCast;
use portfolio_core::{
    CONFETTI_MS, CONTACT_FIELDS, ContactField, ContactState, PortfolioContent, SUBMIT_DELAY_MS,
    Section, SubmitStatus,
};
use std::rc::Rc;
use yew::{Reducible, use_reducer};

pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
    Finish,
    ClearConfetti,
}

/// Reducer wrapper so timers can dispatch against the latest form.
#[derive(Clone, PartialEq, Default)]
pub struct ContactModel(pub ContactState);

impl Reducible for ContactModel {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.0.form.set(field, value),
            ContactAction::Submit => {
                next.0.begin_submit();
            }
            ContactAction::Finish => next.0.finish_submit(),
            ContactAction::ClearConfetti => next.0.clear_confetti(),
        }
        Rc::new(next)
    }
}

const fn submit_label(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Submitting => "Sending...",
        SubmitStatus::Idle | SubmitStatus::Sent => "Send Message",
    }
}

#[f::function_component(Contact)]
pub fn contact() -> f::Html {
    let content = PortfolioContent::bundled();
    let palette = use_theme().palette();
    let model = use_reducer(ContactModel::default);
    let state = &model.0;

    {
        let dispatcher = model.dispatcher();
        use_timeout_when(
            state.status == SubmitStatus::Submitting,
            SUBMIT_DELAY_MS,
            f::Callback::from(move |()| dispatcher.dispatch(ContactAction::Finish)),
        );
    }
    {
        let dispatcher = model.dispatcher();
        use_timeout_when(
            state.confetti,
            CONFETTI_MS,
            f::Callback::from(move |()| dispatcher.dispatch(ContactAction::ClearConfetti)),
        );
    }

    let onsubmit = {
        let dispatcher = model.dispatcher();
        f::Callback::from(move |e: f::SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let field_view = |field: ContactField| {
        let dispatcher = model.dispatcher();
        let error = state.error_for(field).map(ToString::to_string);
        let error_id = format!("{}-error", field.id());
        let input_class = f::classes!(
            "w-full",
            "rounded-lg",
            "border",
            "px-4",
            "py-3",
            "bg-white/90",
            if error.is_some() {
                "border-red-400"
            } else {
                "border-gray-200"
            }
        );
        let described_by = error.as_ref().map(|_| error_id.clone());
        let control = if field == ContactField::Message {
            let oninput = f::Callback::from(move |e: f::InputEvent| {
                if let Some(area) = e.target_dyn_into::<f::HtmlTextAreaElement>() {
                    dispatcher.dispatch(ContactAction::Edit(field, area.value()));
                }
            });
            f::html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    class={input_class}
                    rows="5"
                    placeholder={field.placeholder()}
                    value={state.form.value(field).to_owned()}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={described_by}
                    {oninput}
                />
            }
        } else {
            let oninput = f::Callback::from(move |e: f::InputEvent| {
                if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                    dispatcher.dispatch(ContactAction::Edit(field, input.value()));
                }
            });
            let inputmode = if field == ContactField::Email { "email" } else { "text" };
            f::html! {
                <input
                    id={field.id()}
                    name={field.id()}
                    type="text"
                    inputmode={inputmode}
                    class={input_class}
                    placeholder={field.placeholder()}
                    value={state.form.value(field).to_owned()}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={described_by}
                    {oninput}
                />
            }
        };
        f::html! {
            <div key={field.id()} class="form-field">
                <label for={field.id()} class="block mb-2 font-medium">{ field.label() }</label>
                { control }
                if let Some(message) = error {
                    <p id={error_id} class="field-error mt-1 text-sm text-red-600">{ message }</p>
                }
            </div>
        }
    };

    let submit_class = f::classes!(
        "w-full",
        "py-3",
        "rounded-lg",
        "text-white",
        "font-semibold",
        "shadow-lg",
        "disabled:opacity-60",
        palette.accent_classes()
    );
    let submitting = state.status == SubmitStatus::Submitting;

    f::html! {
        <section id={Section::Contact.anchor()} class="contact relative py-24 px-6">
            <div class="container mx-auto">
                <SectionHeader title="Get In Touch" subtitle="Have a project in mind? Let's talk." />
                <div class="grid lg:grid-cols-2 gap-12">
                    <ul class="contact-channels space-y-6">
                        { for content.contact.iter().map(|channel| f::html! {
                            <li key={channel.title.clone()} class="rounded-2xl bg-white/80 p-6 shadow-lg">
                                <h3 class="font-bold mb-1">{ channel.title.clone() }</h3>
                                <a class="text-gray-600 hover:underline" href={channel.link.clone()}>
                                    { channel.value.clone() }
                                </a>
                            </li>
                        }) }
                    </ul>
                    <form class="contact-form space-y-6 rounded-2xl bg-white/80 p-8 shadow-lg" {onsubmit}>
                        { for CONTACT_FIELDS.iter().map(|&field| field_view(field)) }
                        <button type="submit" class={submit_class} disabled={submitting}>
                            { submit_label(state.status) }
                        </button>
                        if state.status == SubmitStatus::Sent {
                            <p class="contact-form__sent text-center text-green-700" role="status">
                                { "Thanks! Your message is on its way." }
                            </p>
                        }
                    </form>
                </div>
            </div>
            if state.confetti {
                <div class="confetti pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
                    { for (0..24_u8).map(|i| f::html! {
                        <span class="confetti__piece" style={format!("left:{}%;animation-delay:{}ms", u32::from(i) * 4 + 2, u32::from(i) * 40)}></span>
                    }) }
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(model: ContactModel, action: ContactAction) -> ContactModel {
        (*Rc::new(model).reduce(action)).clone()
    }

    #[test]
    fn empty_submit_surfaces_errors_without_submitting() {
        let model = dispatch(ContactModel::default(), ContactAction::Submit);
        assert_eq!(model.0.status, SubmitStatus::Idle);
        assert_eq!(model.0.errors.len(), 4);
    }

    #[test]
    fn valid_submit_finishes_and_clears() {
        let mut model = ContactModel::default();
        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello there"),
        ] {
            model = dispatch(model, ContactAction::Edit(field, value.into()));
        }
        model = dispatch(model, ContactAction::Submit);
        assert_eq!(model.0.status, SubmitStatus::Submitting);
        assert_eq!(submit_label(model.0.status), "Sending...");

        model = dispatch(model, ContactAction::Finish);
        assert_eq!(model.0.status, SubmitStatus::Sent);
        assert!(model.0.confetti);
        assert!(model.0.form.name.is_empty());

        model = dispatch(model, ContactAction::ClearConfetti);
        assert!(!model.0.confetti);
    }
}
